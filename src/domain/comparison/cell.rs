//! Cell states for the plan comparison grid.

use serde::{Deserialize, Serialize};

/// State of one cell in the comparison grid.
///
/// `Unset` is the marker every new cell starts with, whether the cell was
/// created by adding a plan (column) or a feature (row).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CellValue {
    /// Not yet filled in by the editor.
    #[default]
    Unset,

    /// The plan includes this feature.
    Included,

    /// The plan does not include this feature.
    Excluded,

    /// Free-form note, e.g. "2 per year".
    Text(String),
}

impl CellValue {
    /// True for the default, not-yet-edited marker.
    pub fn is_unset(&self) -> bool {
        matches!(self, CellValue::Unset)
    }

    /// Glyph shown in the grid.
    pub fn display_glyph(&self) -> &str {
        match self {
            CellValue::Unset => "—",
            CellValue::Included => "✅",
            CellValue::Excluded => "❌",
            CellValue::Text(text) => text,
        }
    }
}

impl std::fmt::Display for CellValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_glyph())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_unset() {
        assert!(CellValue::default().is_unset());
    }

    #[test]
    fn glyphs_for_fixed_states() {
        assert_eq!(CellValue::Included.display_glyph(), "✅");
        assert_eq!(CellValue::Excluded.display_glyph(), "❌");
        assert_eq!(CellValue::Unset.display_glyph(), "—");
    }

    #[test]
    fn text_displays_verbatim() {
        let cell = CellValue::Text("2 per year".to_string());
        assert_eq!(cell.to_string(), "2 per year");
    }

    #[test]
    fn unit_variants_serialize_lowercase() {
        assert_eq!(serde_json::to_string(&CellValue::Unset).unwrap(), "\"unset\"");
        assert_eq!(
            serde_json::to_string(&CellValue::Included).unwrap(),
            "\"included\""
        );
    }

    #[test]
    fn text_variant_round_trips() {
        let cell = CellValue::Text("on request".to_string());
        let json = serde_json::to_string(&cell).unwrap();
        let back: CellValue = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cell);
    }
}
