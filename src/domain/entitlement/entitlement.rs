//! User entitlement records.

use serde::{Deserialize, Serialize};

use crate::domain::catalog::QuotaCategory;
use crate::domain::foundation::{EntitlementId, PlanId, Timestamp};

/// Per-category consumption counters for an entitlement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuotaUsage {
    /// OPD visits consumed so far.
    pub opd_visits: u32,
    /// Lab tests consumed so far.
    pub lab_tests: u32,
    /// Video consultations consumed so far.
    pub video_consults: u32,
}

impl QuotaUsage {
    /// Returns the consumed count for one category.
    pub fn used(&self, category: QuotaCategory) -> u32 {
        match category {
            QuotaCategory::OpdVisits => self.opd_visits,
            QuotaCategory::LabTests => self.lab_tests,
            QuotaCategory::VideoConsults => self.video_consults,
        }
    }
}

/// A user's current plan subscription plus consumed-quota counters.
///
/// Owned by the backend; the client holds a read-only copy for the
/// lifetime of the screen that fetched it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserEntitlement {
    /// Backend identifier for the entitlement record.
    pub id: EntitlementId,

    /// The catalog plan this entitlement subscribes to.
    pub plan_id: PlanId,

    /// When the subscription started.
    pub created_at: Timestamp,

    /// Consumption counters.
    pub used: QuotaUsage,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usage_lookup_by_category() {
        let used = QuotaUsage {
            opd_visits: 3,
            lab_tests: 1,
            video_consults: 7,
        };
        assert_eq!(used.used(QuotaCategory::OpdVisits), 3);
        assert_eq!(used.used(QuotaCategory::LabTests), 1);
        assert_eq!(used.used(QuotaCategory::VideoConsults), 7);
    }

    #[test]
    fn default_usage_is_zero() {
        let used = QuotaUsage::default();
        for category in QuotaCategory::ALL {
            assert_eq!(used.used(category), 0);
        }
    }
}
