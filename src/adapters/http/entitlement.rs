//! Entitlement reads over `GET /user/plan-usage` and `GET /user/my-plan`.

use async_trait::async_trait;

use crate::domain::entitlement::UserEntitlement;
use crate::ports::{ApiError, EntitlementReader, MembershipView};

use super::client::RestGateway;
use super::dto::{EntitlementDto, MembershipDto};

#[async_trait]
impl EntitlementReader for RestGateway {
    async fn plan_usage(&self) -> Result<UserEntitlement, ApiError> {
        let dto: EntitlementDto = self.get_json("/user/plan-usage").await?;
        dto.into_domain()
    }

    async fn my_plan(&self) -> Result<MembershipView, ApiError> {
        let dto: MembershipDto = self.get_json("/user/my-plan").await?;
        dto.into_domain()
    }
}
