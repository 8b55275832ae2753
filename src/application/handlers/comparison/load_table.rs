//! LoadComparisonTableHandler - Query handler for the comparison editor.
//!
//! Loads the table previously saved for the partner context; a partner
//! with no saved table gets the built-in seed so the editor never opens
//! empty. A failed load is a failure, not a silent fall back to the
//! seed, so the editor cannot quietly overwrite a table it failed to
//! fetch.

use std::sync::Arc;

use crate::application::ScreenError;
use crate::domain::comparison::ComparisonTable;
use crate::domain::foundation::PartnerId;
use crate::ports::ComparisonTableRepository;

/// Handler for opening the comparison editor.
pub struct LoadComparisonTableHandler {
    repository: Arc<dyn ComparisonTableRepository>,
}

impl LoadComparisonTableHandler {
    pub fn new(repository: Arc<dyn ComparisonTableRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, partner: &PartnerId) -> Result<ComparisonTable, ScreenError> {
        match self.repository.load(partner).await? {
            Some(table) => Ok(table),
            None => {
                tracing::debug!(partner = %partner, "No saved table; seeding editor");
                Ok(ComparisonTable::seeded())
            }
        }
    }
}
