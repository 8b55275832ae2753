//! Plan catalog over `GET /plans`.

use async_trait::async_trait;

use crate::domain::catalog::PlanCatalog;
use crate::ports::{ApiError, PlanCatalogReader};

use super::client::RestGateway;
use super::dto::PlanEntryDto;

#[async_trait]
impl PlanCatalogReader for RestGateway {
    async fn list_plans(&self) -> Result<PlanCatalog, ApiError> {
        let entries: Vec<PlanEntryDto> = self.get_json("/plans").await?;
        let total = entries.len();

        let usable: Vec<_> = entries
            .into_iter()
            .filter_map(PlanEntryDto::into_domain)
            .collect();
        if usable.len() < total {
            tracing::warn!(
                dropped = total - usable.len(),
                "Catalog contained entries without usable plan ids"
            );
        }

        tracing::debug!(plans = usable.len(), "Fetched plan catalog");
        Ok(PlanCatalog::new(usable))
    }
}
