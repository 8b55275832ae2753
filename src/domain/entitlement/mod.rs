//! Entitlement domain module.
//!
//! A user's current subscription, its consumed-quota counters, and the
//! merged view joining those counters with catalog limits.
//!
//! # Module Structure
//!
//! - `entitlement` - UserEntitlement record and QuotaUsage counters
//! - `plan_usage` - Catalog join and per-category usage ratios

mod entitlement;
mod plan_usage;

pub use entitlement::{QuotaUsage, UserEntitlement};
pub use plan_usage::{CategoryUsage, PlanUsage, UNKNOWN_PLAN_TITLE};
