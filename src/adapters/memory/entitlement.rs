//! In-memory entitlement store for tests and demos.
//!
//! Implements both the read port and the membership mutation port over
//! one shared record, so a mutation is observable through the next read
//! the way it is against the real backend.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::entitlement::UserEntitlement;
use crate::domain::forms::UpgradeRequest;
use crate::ports::{ApiError, EntitlementReader, MembershipView, MembershipWriter};

/// Holds one user's entitlement and membership.
#[derive(Debug)]
pub struct InMemoryEntitlements {
    entitlement: Option<UserEntitlement>,
    membership: Mutex<Option<MembershipView>>,
    failure: Option<ApiError>,
}

impl InMemoryEntitlements {
    /// Serves the given records.
    pub fn new(entitlement: UserEntitlement, membership: MembershipView) -> Self {
        Self {
            entitlement: Some(entitlement),
            membership: Mutex::new(Some(membership)),
            failure: None,
        }
    }

    /// Fails every call with the given error.
    pub fn failing(error: ApiError) -> Self {
        Self {
            entitlement: None,
            membership: Mutex::new(None),
            failure: Some(error),
        }
    }

    fn check_failure(&self) -> Result<(), ApiError> {
        match &self.failure {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        }
    }

    fn current_membership(&self) -> Result<MembershipView, ApiError> {
        self.membership
            .lock()
            .expect("membership lock poisoned")
            .clone()
            .ok_or_else(|| ApiError::not_found("membership"))
    }
}

#[async_trait]
impl EntitlementReader for InMemoryEntitlements {
    async fn plan_usage(&self) -> Result<UserEntitlement, ApiError> {
        self.check_failure()?;
        self.entitlement
            .clone()
            .ok_or_else(|| ApiError::not_found("entitlement"))
    }

    async fn my_plan(&self) -> Result<MembershipView, ApiError> {
        self.check_failure()?;
        self.current_membership()
    }
}

#[async_trait]
impl MembershipWriter for InMemoryEntitlements {
    async fn update_plan(&self, request: &UpgradeRequest) -> Result<MembershipView, ApiError> {
        self.check_failure()?;
        let mut guard = self.membership.lock().expect("membership lock poisoned");
        let mut view = guard
            .clone()
            .ok_or_else(|| ApiError::not_found("membership"))?;
        view.plan_id = request.target_plan.clone();
        view.plan_name = request.target_plan.as_str().to_string();
        view.tier = request.target_tier;
        *guard = Some(view.clone());
        Ok(view)
    }

    async fn set_auto_renew(&self, enabled: bool) -> Result<MembershipView, ApiError> {
        self.check_failure()?;
        let mut guard = self.membership.lock().expect("membership lock poisoned");
        let mut view = guard
            .clone()
            .ok_or_else(|| ApiError::not_found("membership"))?;
        view.auto_renew = enabled;
        *guard = Some(view.clone());
        Ok(view)
    }
}
