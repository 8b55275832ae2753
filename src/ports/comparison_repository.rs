//! Comparison table persistence port.

use async_trait::async_trait;

use crate::domain::comparison::ComparisonTable;
use crate::domain::foundation::PartnerId;

use super::ApiError;

/// Port for loading and saving comparison tables.
///
/// The table is edited locally and persisted only on explicit save;
/// a failed save must leave the caller's copy untouched.
#[async_trait]
pub trait ComparisonTableRepository: Send + Sync {
    /// Load the saved table for a partner context, if one exists.
    async fn load(&self, partner: &PartnerId) -> Result<Option<ComparisonTable>, ApiError>;

    /// Persist the table for a partner context.
    async fn save(&self, partner: &PartnerId, table: &ComparisonTable) -> Result<(), ApiError>;
}
