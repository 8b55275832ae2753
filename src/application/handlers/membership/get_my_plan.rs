//! GetMyPlanHandler - Query handler for the My Plan screen.

use std::sync::Arc;

use crate::application::ScreenError;
use crate::ports::{EntitlementReader, MembershipView};

/// Handler for retrieving the membership summary.
pub struct GetMyPlanHandler {
    entitlements: Arc<dyn EntitlementReader>,
}

impl GetMyPlanHandler {
    pub fn new(entitlements: Arc<dyn EntitlementReader>) -> Self {
        Self { entitlements }
    }

    pub async fn handle(&self) -> Result<MembershipView, ScreenError> {
        Ok(self.entitlements.my_plan().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryEntitlements;
    use crate::domain::catalog::PlanTier;
    use crate::domain::entitlement::{QuotaUsage, UserEntitlement};
    use crate::domain::foundation::{EntitlementId, PlanId, Timestamp};
    use crate::ports::ApiError;

    fn seeded() -> InMemoryEntitlements {
        InMemoryEntitlements::new(
            UserEntitlement {
                id: EntitlementId::new("ent-1").unwrap(),
                plan_id: PlanId::new("p1").unwrap(),
                created_at: Timestamp::from_unix_secs(0),
                used: QuotaUsage::default(),
            },
            MembershipView {
                plan_id: PlanId::new("p1").unwrap(),
                plan_name: "Prime Care".to_string(),
                tier: PlanTier::Prime,
                auto_renew: false,
                started_at: Timestamp::from_unix_secs(0),
                expires_at: Some(Timestamp::from_unix_secs(0).add_days(365)),
            },
        )
    }

    #[tokio::test]
    async fn returns_membership_summary() {
        let handler = GetMyPlanHandler::new(Arc::new(seeded()));
        let view = handler.handle().await.unwrap();
        assert_eq!(view.plan_name, "Prime Care");
        assert_eq!(view.tier, PlanTier::Prime);
    }

    #[tokio::test]
    async fn surfaces_reader_failure() {
        let handler = GetMyPlanHandler::new(Arc::new(InMemoryEntitlements::failing(
            ApiError::unauthorized(),
        )));
        let err = handler.handle().await.unwrap_err();
        assert!(err.requires_login());
    }
}
