//! Entitlement and membership read port.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::catalog::PlanTier;
use crate::domain::entitlement::UserEntitlement;
use crate::domain::foundation::{PlanId, Timestamp};

use super::ApiError;

/// Port for fetching the signed-in user's entitlement and membership.
#[async_trait]
pub trait EntitlementReader: Send + Sync {
    /// Fetch the current entitlement record with its usage counters.
    async fn plan_usage(&self) -> Result<UserEntitlement, ApiError>;

    /// Fetch the membership summary for the My Plan screen.
    async fn my_plan(&self) -> Result<MembershipView, ApiError>;
}

/// Membership summary for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MembershipView {
    /// The subscribed plan.
    pub plan_id: PlanId,

    /// Plan name as the backend labels it.
    pub plan_name: String,

    /// Tier of the subscribed plan.
    pub tier: PlanTier,

    /// Whether the membership renews automatically.
    pub auto_renew: bool,

    /// When the membership started.
    pub started_at: Timestamp,

    /// When the current period ends, if the backend reports it.
    pub expires_at: Option<Timestamp>,
}

impl MembershipView {
    /// True if the membership has a known end date in the past.
    pub fn is_expired(&self, now: Timestamp) -> bool {
        self.expires_at
            .map(|expires| now.is_after(&expires))
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view(expires_at: Option<Timestamp>) -> MembershipView {
        MembershipView {
            plan_id: PlanId::new("p1").unwrap(),
            plan_name: "Prime Care".to_string(),
            tier: PlanTier::Prime,
            auto_renew: true,
            started_at: Timestamp::from_unix_secs(0),
            expires_at,
        }
    }

    #[test]
    fn entitlement_reader_is_object_safe() {
        fn _accepts_dyn(_reader: &dyn EntitlementReader) {}
    }

    #[test]
    fn expired_when_end_date_passed() {
        let view = view(Some(Timestamp::from_unix_secs(1_000)));
        assert!(view.is_expired(Timestamp::from_unix_secs(2_000)));
        assert!(!view.is_expired(Timestamp::from_unix_secs(500)));
    }

    #[test]
    fn never_expired_without_end_date() {
        assert!(!view(None).is_expired(Timestamp::from_unix_secs(i64::MAX / 2)));
    }
}
