//! LoadPlanUsageHandler - Query handler for the plan usage screen.
//!
//! Fetches the user's entitlement and the plan catalog concurrently and
//! joins them into the merged usage view. If either fetch fails the
//! whole load fails: the screen keeps its previous state rather than
//! showing a half-merged result.

use std::sync::Arc;

use crate::application::ScreenError;
use crate::domain::entitlement::PlanUsage;
use crate::ports::{EntitlementReader, PlanCatalogReader};

/// Handler for loading the merged plan usage view.
pub struct LoadPlanUsageHandler {
    catalog: Arc<dyn PlanCatalogReader>,
    entitlements: Arc<dyn EntitlementReader>,
}

impl LoadPlanUsageHandler {
    pub fn new(
        catalog: Arc<dyn PlanCatalogReader>,
        entitlements: Arc<dyn EntitlementReader>,
    ) -> Self {
        Self {
            catalog,
            entitlements,
        }
    }

    pub async fn handle(&self) -> Result<PlanUsage, ScreenError> {
        let (catalog, entitlement) = tokio::try_join!(
            self.catalog.list_plans(),
            self.entitlements.plan_usage()
        )?;

        let usage = PlanUsage::merge(&entitlement, &catalog);
        tracing::debug!(
            plan = %usage.plan_id,
            unknown = usage.is_unknown_plan(),
            "Plan usage merged"
        );
        Ok(usage)
    }
}
