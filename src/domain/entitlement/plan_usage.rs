//! Merged plan-usage view: entitlement joined with its catalog entry.
//!
//! The join happens on the client because the two records come from
//! separate endpoints. A usage record pointing at a plan the catalog no
//! longer lists must still render, so the merge falls back to a
//! placeholder title and zero limits instead of failing the view.

use serde::{Deserialize, Serialize};

use crate::domain::catalog::{PlanCatalog, PlanTier, QuotaCategory, QuotaLimits};
use crate::domain::entitlement::UserEntitlement;
use crate::domain::foundation::{EntitlementId, PlanId, Timestamp, UsageRatio};

/// Title shown when an entitlement references a plan missing from the catalog.
pub const UNKNOWN_PLAN_TITLE: &str = "Unknown Plan";

/// Consumption of a single quota category, ready for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryUsage {
    /// Which benefit this row tracks.
    pub category: QuotaCategory,

    /// Consumed count.
    pub used: u32,

    /// Included limit; 0 when the plan lacks the benefit.
    pub limit: u32,

    /// `used` over `limit` as a clamped percentage.
    pub ratio: UsageRatio,
}

impl CategoryUsage {
    fn compute(category: QuotaCategory, used: u32, limit: u32) -> Self {
        Self {
            category,
            used,
            limit,
            ratio: UsageRatio::percent_used(f64::from(used), f64::from(limit)),
        }
    }
}

/// A user's entitlement merged with its plan definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanUsage {
    /// The entitlement record this view was built from.
    pub entitlement_id: EntitlementId,

    /// The plan the entitlement references, known to the catalog or not.
    pub plan_id: PlanId,

    /// Plan name, or [`UNKNOWN_PLAN_TITLE`] when the catalog misses it.
    pub plan_name: String,

    /// Tier, absent for unknown plans.
    pub tier: Option<PlanTier>,

    /// When the subscription started.
    pub since: Timestamp,

    /// One row per quota category, in display order.
    pub categories: Vec<CategoryUsage>,
}

impl PlanUsage {
    /// Joins an entitlement with the plan catalog.
    ///
    /// Missing catalog entries degrade to a placeholder title and zero
    /// limits; quota math then reads 0% used for every category.
    pub fn merge(entitlement: &UserEntitlement, catalog: &PlanCatalog) -> Self {
        let entry = catalog.find(&entitlement.plan_id);

        let (plan_name, tier, limits) = match entry {
            Some(plan) => (plan.name.clone(), Some(plan.tier), plan.limits),
            None => (UNKNOWN_PLAN_TITLE.to_string(), None, QuotaLimits::default()),
        };

        let categories = QuotaCategory::ALL
            .into_iter()
            .map(|category| {
                CategoryUsage::compute(
                    category,
                    entitlement.used.used(category),
                    limits.limit(category),
                )
            })
            .collect();

        Self {
            entitlement_id: entitlement.id.clone(),
            plan_id: entitlement.plan_id.clone(),
            plan_name,
            tier,
            since: entitlement.created_at,
            categories,
        }
    }

    /// Returns the usage row for one category.
    pub fn category(&self, category: QuotaCategory) -> &CategoryUsage {
        // ALL categories are materialized in merge(), so the lookup
        // cannot miss.
        self.categories
            .iter()
            .find(|row| row.category == category)
            .expect("merge materializes every quota category")
    }

    /// True when the entitlement references a plan absent from the catalog.
    pub fn is_unknown_plan(&self) -> bool {
        self.tier.is_none()
    }
}
