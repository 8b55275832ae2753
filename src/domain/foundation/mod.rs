//! Foundation value objects shared by every domain module.
//!
//! # Module Structure
//!
//! - `errors` - Field-scoped validation errors
//! - `ids` - Strongly-typed identifiers
//! - `session` - Authenticated session value
//! - `timestamp` - UTC timestamps
//! - `usage_ratio` - 0-100 quota consumption ratio

mod errors;
mod ids;
mod session;
mod timestamp;
mod usage_ratio;

pub use errors::ValidationError;
pub use ids::{EntitlementId, PartnerId, PlanId, RowId};
pub use session::AuthSession;
pub use timestamp::Timestamp;
pub use usage_ratio::UsageRatio;
