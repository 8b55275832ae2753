//! Membership mutation port.

use async_trait::async_trait;

use crate::domain::forms::UpgradeRequest;

use super::{ApiError, MembershipView};

/// Port for membership mutations.
///
/// Both operations return the membership as the backend now sees it, so
/// screens can refresh their display from the response body instead of
/// issuing a second fetch.
#[async_trait]
pub trait MembershipWriter: Send + Sync {
    /// Move the membership to a different plan.
    async fn update_plan(&self, request: &UpgradeRequest) -> Result<MembershipView, ApiError>;

    /// Turn automatic renewal on or off.
    async fn set_auto_renew(&self, enabled: bool) -> Result<MembershipView, ApiError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn membership_writer_is_object_safe() {
        fn _accepts_dyn(_writer: &dyn MembershipWriter) {}
    }
}
