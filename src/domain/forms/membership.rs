//! Membership mutation payloads.

use crate::domain::catalog::PlanTier;
use crate::domain::foundation::{PlanId, ValidationError};

/// Request to move the membership to a different catalog plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpgradeRequest {
    /// The plan to move to.
    pub target_plan: PlanId,

    /// Tier of the target plan, from the catalog entry the user picked.
    pub target_tier: PlanTier,
}

impl UpgradeRequest {
    /// Validates the request against the user's current tier.
    ///
    /// Upgrades must target a strictly higher tier; downgrades go
    /// through support, not the app.
    pub fn validate(&self, current_tier: PlanTier) -> Result<(), ValidationError> {
        if !self.target_tier.is_upgrade_from(current_tier) {
            return Err(ValidationError::invalid_format(
                "target_plan",
                format!(
                    "{} is not an upgrade from {}",
                    self.target_tier, current_tier
                ),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(target_tier: PlanTier) -> UpgradeRequest {
        UpgradeRequest {
            target_plan: PlanId::new("plan-x").unwrap(),
            target_tier,
        }
    }

    #[test]
    fn upgrade_to_higher_tier_passes() {
        assert!(request(PlanTier::Elite).validate(PlanTier::Basic).is_ok());
        assert!(request(PlanTier::Prime).validate(PlanTier::Basic).is_ok());
    }

    #[test]
    fn same_tier_is_rejected() {
        assert!(request(PlanTier::Prime).validate(PlanTier::Prime).is_err());
    }

    #[test]
    fn downgrade_is_rejected() {
        let err = request(PlanTier::Basic)
            .validate(PlanTier::Elite)
            .unwrap_err();
        assert_eq!(err.field(), "target_plan");
    }
}
