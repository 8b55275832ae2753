//! Plan catalog entries and quota limits.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::foundation::PlanId;

/// Membership plan tier.
///
/// Determines which catalog entry a user can move to: upgrades always
/// target a strictly higher tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanTier {
    /// Entry-level plan with small quotas.
    Basic,

    /// Mid-range plan, the most commonly purchased.
    Prime,

    /// Top plan with the largest quotas.
    Elite,
}

impl PlanTier {
    /// Returns the display name for this tier.
    pub fn display_name(&self) -> &'static str {
        match self {
            PlanTier::Basic => "Basic",
            PlanTier::Prime => "Prime",
            PlanTier::Elite => "Elite",
        }
    }

    /// Returns the numeric rank of this tier for comparison.
    ///
    /// Higher rank = more benefits. Used for upgrade validation.
    pub fn rank(&self) -> u8 {
        match self {
            PlanTier::Basic => 0,
            PlanTier::Prime => 1,
            PlanTier::Elite => 2,
        }
    }

    /// True if moving from `current` to this tier is an upgrade.
    pub fn is_upgrade_from(&self, current: PlanTier) -> bool {
        self.rank() > current.rank()
    }
}

impl std::fmt::Display for PlanTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// One countable benefit type tracked per entitlement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuotaCategory {
    /// Outpatient department visits.
    OpdVisits,
    /// Diagnostic lab tests.
    LabTests,
    /// Video consultations.
    VideoConsults,
}

impl QuotaCategory {
    /// All categories, in display order.
    pub const ALL: [QuotaCategory; 3] = [
        QuotaCategory::OpdVisits,
        QuotaCategory::LabTests,
        QuotaCategory::VideoConsults,
    ];

    /// Returns the display name for this category.
    pub fn display_name(&self) -> &'static str {
        match self {
            QuotaCategory::OpdVisits => "OPD Visits",
            QuotaCategory::LabTests => "Lab Tests",
            QuotaCategory::VideoConsults => "Video Consults",
        }
    }
}

impl std::fmt::Display for QuotaCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Per-category benefit limits for a plan.
///
/// A limit of 0 means the plan does not include that benefit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuotaLimits {
    /// Included OPD visits per membership period.
    pub opd_visits: u32,
    /// Included lab tests per membership period.
    pub lab_tests: u32,
    /// Included video consultations per membership period.
    pub video_consults: u32,
}

impl QuotaLimits {
    /// Returns the limit for one category.
    pub fn limit(&self, category: QuotaCategory) -> u32 {
        match category {
            QuotaCategory::OpdVisits => self.opd_visits,
            QuotaCategory::LabTests => self.lab_tests,
            QuotaCategory::VideoConsults => self.video_consults,
        }
    }
}

/// A purchasable plan definition from the backend catalog.
///
/// Immutable reference data; the client only ever reads it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanCatalogEntry {
    /// Backend identifier, the join key for entitlements.
    pub id: PlanId,

    /// Marketing name shown in plan lists.
    pub name: String,

    /// Tier this plan belongs to.
    pub tier: PlanTier,

    /// Price per currency code, in minor units (paise, cents).
    pub prices: BTreeMap<String, u64>,

    /// Benefit limits included with the plan.
    pub limits: QuotaLimits,
}

impl PlanCatalogEntry {
    /// Returns the price in the given currency, if the plan is sold in it.
    pub fn price_in(&self, currency: &str) -> Option<u64> {
        self.prices.get(currency).copied()
    }
}

/// The full plan catalog fetched from the backend.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlanCatalog {
    entries: Vec<PlanCatalogEntry>,
}

impl PlanCatalog {
    /// Creates a catalog from a list of entries.
    pub fn new(entries: Vec<PlanCatalogEntry>) -> Self {
        Self { entries }
    }

    /// Looks up a plan by identifier.
    pub fn find(&self, id: &PlanId) -> Option<&PlanCatalogEntry> {
        self.entries.iter().find(|entry| &entry.id == id)
    }

    /// Returns all entries in catalog order.
    pub fn entries(&self) -> &[PlanCatalogEntry] {
        &self.entries
    }

    /// Number of plans in the catalog.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the backend returned no plans.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: &str, tier: PlanTier) -> PlanCatalogEntry {
        PlanCatalogEntry {
            id: PlanId::new(id).unwrap(),
            name: format!("{} Care", tier.display_name()),
            tier,
            prices: BTreeMap::from([("INR".to_string(), 99_900)]),
            limits: QuotaLimits {
                opd_visits: 5,
                lab_tests: 2,
                video_consults: 10,
            },
        }
    }

    #[test]
    fn tier_ranks_order_upgrades() {
        assert!(PlanTier::Prime.is_upgrade_from(PlanTier::Basic));
        assert!(PlanTier::Elite.is_upgrade_from(PlanTier::Prime));
        assert!(!PlanTier::Basic.is_upgrade_from(PlanTier::Prime));
        assert!(!PlanTier::Prime.is_upgrade_from(PlanTier::Prime));
    }

    #[test]
    fn tier_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&PlanTier::Prime).unwrap(), "\"prime\"");
        let tier: PlanTier = serde_json::from_str("\"elite\"").unwrap();
        assert_eq!(tier, PlanTier::Elite);
    }

    #[test]
    fn limits_lookup_by_category() {
        let limits = QuotaLimits {
            opd_visits: 5,
            lab_tests: 2,
            video_consults: 10,
        };
        assert_eq!(limits.limit(QuotaCategory::OpdVisits), 5);
        assert_eq!(limits.limit(QuotaCategory::LabTests), 2);
        assert_eq!(limits.limit(QuotaCategory::VideoConsults), 10);
    }

    #[test]
    fn default_limits_are_zero() {
        let limits = QuotaLimits::default();
        for category in QuotaCategory::ALL {
            assert_eq!(limits.limit(category), 0);
        }
    }

    #[test]
    fn catalog_finds_entry_by_id() {
        let catalog = PlanCatalog::new(vec![
            entry("p1", PlanTier::Basic),
            entry("p2", PlanTier::Prime),
        ]);
        let id = PlanId::new("p2").unwrap();
        assert_eq!(catalog.find(&id).unwrap().tier, PlanTier::Prime);
    }

    #[test]
    fn catalog_find_misses_unknown_id() {
        let catalog = PlanCatalog::new(vec![entry("p1", PlanTier::Basic)]);
        let id = PlanId::new("nope").unwrap();
        assert!(catalog.find(&id).is_none());
    }

    #[test]
    fn price_lookup_by_currency() {
        let plan = entry("p1", PlanTier::Basic);
        assert_eq!(plan.price_in("INR"), Some(99_900));
        assert_eq!(plan.price_in("USD"), None);
    }
}
