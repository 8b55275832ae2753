//! UpgradePlanHandler - Command handler for moving to a higher plan.
//!
//! Validates the upgrade locally first; an invalid request never calls
//! the network. On success the returned view is the backend's fresh
//! state, ready to display without a second fetch.

use std::sync::Arc;

use crate::application::ScreenError;
use crate::domain::catalog::PlanTier;
use crate::domain::forms::UpgradeRequest;
use crate::ports::{MembershipView, MembershipWriter};

/// Command to upgrade the membership plan.
#[derive(Debug, Clone)]
pub struct UpgradePlanCommand {
    /// The requested move.
    pub request: UpgradeRequest,

    /// Tier currently held, from the last loaded membership view.
    pub current_tier: PlanTier,
}

/// Handler for plan upgrades.
pub struct UpgradePlanHandler {
    writer: Arc<dyn MembershipWriter>,
}

impl UpgradePlanHandler {
    pub fn new(writer: Arc<dyn MembershipWriter>) -> Self {
        Self { writer }
    }

    pub async fn handle(&self, command: UpgradePlanCommand) -> Result<MembershipView, ScreenError> {
        command.request.validate(command.current_tier)?;
        let view = self.writer.update_plan(&command.request).await?;
        Ok(view)
    }
}
