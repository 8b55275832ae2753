//! Comparison table persistence over `/plancomparison`.

use async_trait::async_trait;

use crate::domain::comparison::ComparisonTable;
use crate::domain::foundation::PartnerId;
use crate::ports::{ApiError, ComparisonTableRepository};

use super::client::RestGateway;
use super::dto::{ComparisonTableDto, SaveComparisonBody};

#[async_trait]
impl ComparisonTableRepository for RestGateway {
    async fn load(&self, partner: &PartnerId) -> Result<Option<ComparisonTable>, ApiError> {
        let path = format!("/plancomparison/{}", partner.as_str());
        let dto: Option<ComparisonTableDto> = self.get_json_optional(&path).await?;
        Ok(dto.map(ComparisonTableDto::into_domain))
    }

    async fn save(&self, partner: &PartnerId, table: &ComparisonTable) -> Result<(), ApiError> {
        let body = SaveComparisonBody::new(partner, table);
        self.post_json_unit("/plancomparison", &body).await?;
        tracing::info!(
            partner = %partner,
            plans = table.plan_count(),
            features = table.feature_count(),
            "Comparison table saved"
        );
        Ok(())
    }
}
