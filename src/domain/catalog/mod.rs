//! Plan catalog domain module.
//!
//! The backend's authoritative list of purchasable plans and their quota
//! limits. Read-only on the client.

mod plan;

pub use plan::{PlanCatalog, PlanCatalogEntry, PlanTier, QuotaCategory, QuotaLimits};
