//! Plan catalog read port.

use async_trait::async_trait;

use crate::domain::catalog::PlanCatalog;

use super::ApiError;

/// Port for fetching the plan catalog.
///
/// The catalog is reference data: implementations only ever read it.
#[async_trait]
pub trait PlanCatalogReader: Send + Sync {
    /// Fetch every purchasable plan.
    async fn list_plans(&self) -> Result<PlanCatalog, ApiError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_reader_is_object_safe() {
        fn _accepts_dyn(_reader: &dyn PlanCatalogReader) {}
    }
}
