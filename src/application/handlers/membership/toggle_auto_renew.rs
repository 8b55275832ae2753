//! ToggleAutoRenewHandler - Command handler for the auto-renew switch.

use std::sync::Arc;

use crate::application::ScreenError;
use crate::ports::{MembershipView, MembershipWriter};

/// Handler for flipping automatic renewal.
///
/// There is nothing to validate locally; the switch itself is the
/// payload. The returned view reflects the backend's new state.
pub struct ToggleAutoRenewHandler {
    writer: Arc<dyn MembershipWriter>,
}

impl ToggleAutoRenewHandler {
    pub fn new(writer: Arc<dyn MembershipWriter>) -> Self {
        Self { writer }
    }

    pub async fn handle(&self, enabled: bool) -> Result<MembershipView, ScreenError> {
        Ok(self.writer.set_auto_renew(enabled).await?)
    }
}
