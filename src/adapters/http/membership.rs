//! Membership mutations over `PUT /membership/*`.

use async_trait::async_trait;

use crate::domain::forms::UpgradeRequest;
use crate::ports::{ApiError, MembershipView, MembershipWriter};

use super::client::RestGateway;
use super::dto::{MembershipDto, ToggleRenewBody, UpdateMembershipBody};

#[async_trait]
impl MembershipWriter for RestGateway {
    async fn update_plan(&self, request: &UpgradeRequest) -> Result<MembershipView, ApiError> {
        let body = UpdateMembershipBody {
            plan_id: request.target_plan.as_str().to_string(),
        };
        let dto: MembershipDto = self.put_json("/membership/update", &body).await?;
        tracing::info!(plan = %request.target_plan, "Membership plan updated");
        dto.into_domain()
    }

    async fn set_auto_renew(&self, enabled: bool) -> Result<MembershipView, ApiError> {
        let body = ToggleRenewBody {
            auto_renew: enabled,
        };
        let dto: MembershipDto = self.put_json("/membership/toggle-renew", &body).await?;
        tracing::info!(enabled, "Auto-renew toggled");
        dto.into_domain()
    }
}
