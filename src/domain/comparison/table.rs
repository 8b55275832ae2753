//! Editable plan comparison table.
//!
//! A grid of plans (columns) against features (rows) used by partner
//! sales screens. Every mutation keeps the width invariant: each row
//! holds exactly one cell per plan.

use once_cell::sync::Lazy;
use std::collections::{HashMap, HashSet};
use thiserror::Error;

use crate::domain::foundation::RowId;

use super::CellValue;

/// Rejected comparison table edits.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    #[error("Plan name cannot be blank")]
    BlankPlanName,

    #[error("Plan '{0}' is already in the table")]
    DuplicatePlan(String),

    #[error("Feature title cannot be blank")]
    BlankFeatureTitle,

    #[error("Row order must be a permutation of the current rows")]
    InvalidReorder,
}

/// One feature row: a title plus one cell per plan column.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureRow {
    id: RowId,
    title: String,
    values: Vec<CellValue>,
}

impl FeatureRow {
    /// Stable identity of the row, used for drag-reorder.
    pub fn id(&self) -> RowId {
        self.id
    }

    /// Feature title shown in the leftmost column.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Cells aligned 1:1 with the table's plan columns.
    pub fn values(&self) -> &[CellValue] {
        &self.values
    }
}

/// The editable comparison grid.
///
/// Owned by the editing client; persisted only on explicit save.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ComparisonTable {
    plans: Vec<String>,
    rows: Vec<FeatureRow>,
}

static SEED_TABLE: Lazy<ComparisonTable> = Lazy::new(|| {
    let mut table = ComparisonTable::default();
    for plan in ["Basic", "Prime", "Elite"] {
        table.add_plan(plan).expect("seed plan names are valid");
    }
    for feature in ["OPD Visits", "Lab Tests", "Video Consults", "Annual Checkup"] {
        table
            .add_feature(feature)
            .expect("seed feature titles are valid");
    }
    // Canonical marketing defaults: everything included at the top tier.
    for (row, included_from) in [(0usize, 0usize), (1, 1), (2, 1), (3, 2)] {
        for plan in 0..3 {
            let value = if plan >= included_from {
                CellValue::Included
            } else {
                CellValue::Excluded
            };
            table.set_cell(row, plan, value);
        }
    }
    table
});

impl ComparisonTable {
    /// Creates an empty table with no plans and no rows.
    pub fn new() -> Self {
        Self::default()
    }

    /// Built-in default grid used when a partner has no saved table yet.
    pub fn seeded() -> Self {
        SEED_TABLE.clone()
    }

    /// Rebuilds a table from previously saved parts.
    ///
    /// Saved data is trusted for content but not for shape: rows are
    /// padded with `Unset` or truncated so each matches the plan count,
    /// and blank plan names or titles are dropped.
    pub fn from_saved_parts(
        plans: Vec<String>,
        rows: Vec<(RowId, String, Vec<CellValue>)>,
    ) -> Self {
        let mut seen = HashSet::new();
        let plans: Vec<String> = plans
            .into_iter()
            .map(|p| p.trim().to_string())
            .filter(|p| !p.is_empty() && seen.insert(p.clone()))
            .collect();

        let width = plans.len();
        let rows = rows
            .into_iter()
            .filter(|(_, title, _)| !title.trim().is_empty())
            .map(|(id, title, mut values)| {
                values.resize(width, CellValue::Unset);
                FeatureRow {
                    id,
                    title: title.trim().to_string(),
                    values,
                }
            })
            .collect();

        Self { plans, rows }
    }

    /// Plan names in column order.
    pub fn plans(&self) -> &[String] {
        &self.plans
    }

    /// Feature rows in display order.
    pub fn rows(&self) -> &[FeatureRow] {
        &self.rows
    }

    /// Number of plan columns.
    pub fn plan_count(&self) -> usize {
        self.plans.len()
    }

    /// Number of feature rows.
    pub fn feature_count(&self) -> usize {
        self.rows.len()
    }

    /// Appends a plan column, giving every existing row an `Unset` cell.
    ///
    /// Blank names and duplicates are rejected and leave the table
    /// unchanged.
    pub fn add_plan(&mut self, name: &str) -> Result<(), TableError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(TableError::BlankPlanName);
        }
        if self.plans.iter().any(|existing| existing == name) {
            return Err(TableError::DuplicatePlan(name.to_string()));
        }

        self.plans.push(name.to_string());
        for row in &mut self.rows {
            row.values.push(CellValue::Unset);
        }
        Ok(())
    }

    /// Appends a feature row with one `Unset` cell per plan.
    pub fn add_feature(&mut self, title: &str) -> Result<RowId, TableError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(TableError::BlankFeatureTitle);
        }

        let id = RowId::new();
        self.rows.push(FeatureRow {
            id,
            title: title.to_string(),
            values: vec![CellValue::Unset; self.plans.len()],
        });
        Ok(id)
    }

    /// Sets the cell at (row, plan).
    ///
    /// # Panics
    ///
    /// Panics on out-of-range indices. The editor only ever taps cells
    /// that exist, so a bad index is a caller bug, not user input.
    pub fn set_cell(&mut self, row: usize, plan: usize, value: CellValue) {
        assert!(
            row < self.rows.len(),
            "row index {} out of range ({} rows)",
            row,
            self.rows.len()
        );
        assert!(
            plan < self.plans.len(),
            "plan index {} out of range ({} plans)",
            plan,
            self.plans.len()
        );
        self.rows[row].values[plan] = value;
    }

    /// Permutes rows into the given id order; cell contents are untouched.
    ///
    /// The order must contain exactly the current row ids, each once.
    pub fn reorder(&mut self, order: &[RowId]) -> Result<(), TableError> {
        if order.len() != self.rows.len() {
            return Err(TableError::InvalidReorder);
        }
        let current: HashSet<RowId> = self.rows.iter().map(FeatureRow::id).collect();
        let requested: HashSet<RowId> = order.iter().copied().collect();
        if requested.len() != order.len() || requested != current {
            return Err(TableError::InvalidReorder);
        }

        let mut by_id: HashMap<RowId, FeatureRow> =
            self.rows.drain(..).map(|row| (row.id, row)).collect();
        self.rows = order
            .iter()
            .filter_map(|id| by_id.remove(id))
            .collect();
        Ok(())
    }

    /// True when every row holds exactly one cell per plan.
    pub fn is_aligned(&self) -> bool {
        let width = self.plans.len();
        self.rows.iter().all(|row| row.values.len() == width)
    }
}
