//! In-memory comparison table store for tests and demos.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::comparison::ComparisonTable;
use crate::domain::foundation::PartnerId;
use crate::ports::{ApiError, ComparisonTableRepository};

/// Keeps saved tables per partner in a map.
#[derive(Debug, Default)]
pub struct InMemoryComparisonStore {
    tables: Mutex<HashMap<PartnerId, ComparisonTable>>,
    fail_saves: bool,
}

impl InMemoryComparisonStore {
    /// Starts with no saved tables.
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts with one saved table.
    pub fn with_table(partner: PartnerId, table: ComparisonTable) -> Self {
        let store = Self::new();
        store
            .tables
            .lock()
            .expect("table lock poisoned")
            .insert(partner, table);
        store
    }

    /// Rejects every save with a server error.
    pub fn rejecting_saves() -> Self {
        Self {
            tables: Mutex::new(HashMap::new()),
            fail_saves: true,
        }
    }

    /// Number of saved tables.
    pub fn saved_count(&self) -> usize {
        self.tables.lock().expect("table lock poisoned").len()
    }
}

#[async_trait]
impl ComparisonTableRepository for InMemoryComparisonStore {
    async fn load(&self, partner: &PartnerId) -> Result<Option<ComparisonTable>, ApiError> {
        Ok(self
            .tables
            .lock()
            .expect("table lock poisoned")
            .get(partner)
            .cloned())
    }

    async fn save(&self, partner: &PartnerId, table: &ComparisonTable) -> Result<(), ApiError> {
        if self.fail_saves {
            return Err(ApiError::server(500).with_server_message("Comparison save unavailable"));
        }
        self.tables
            .lock()
            .expect("table lock poisoned")
            .insert(partner.clone(), table.clone());
        Ok(())
    }
}
