//! SaveComparisonTableHandler - Command handler for persisting the grid.
//!
//! Save never mutates the local table: on success the server is simply
//! in sync, and on failure the caller's copy is still the source of
//! truth to retry from.

use std::sync::Arc;

use crate::application::ScreenError;
use crate::domain::comparison::ComparisonTable;
use crate::domain::foundation::PartnerId;
use crate::ports::ComparisonTableRepository;

/// Handler for saving the comparison editor's table.
pub struct SaveComparisonTableHandler {
    repository: Arc<dyn ComparisonTableRepository>,
}

impl SaveComparisonTableHandler {
    pub fn new(repository: Arc<dyn ComparisonTableRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        partner: &PartnerId,
        table: &ComparisonTable,
    ) -> Result<(), ScreenError> {
        self.repository.save(partner, table).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryComparisonStore;
    use crate::ports::ComparisonTableRepository as _;

    fn edited_table() -> ComparisonTable {
        let mut table = ComparisonTable::seeded();
        table.add_plan("Corporate").unwrap();
        table
    }

    #[tokio::test]
    async fn save_persists_for_the_partner() {
        let store = Arc::new(InMemoryComparisonStore::new());
        let handler = SaveComparisonTableHandler::new(store.clone());
        let partner = PartnerId::new("hosp-1").unwrap();
        let table = edited_table();

        handler.handle(&partner, &table).await.unwrap();

        assert_eq!(store.load(&partner).await.unwrap(), Some(table));
    }

    #[tokio::test]
    async fn failed_save_leaves_local_table_untouched() {
        let store = Arc::new(InMemoryComparisonStore::rejecting_saves());
        let handler = SaveComparisonTableHandler::new(store.clone());
        let partner = PartnerId::new("hosp-1").unwrap();
        let table = edited_table();
        let before = table.clone();

        let err = handler.handle(&partner, &table).await.unwrap_err();

        assert_eq!(err.display_message(), "Comparison save unavailable");
        assert_eq!(table, before);
        assert_eq!(store.saved_count(), 0);
    }
}
