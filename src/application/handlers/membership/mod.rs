//! My Plan screen handlers: summary query and membership mutations.

mod get_my_plan;
mod toggle_auto_renew;
mod upgrade_plan;

pub use get_my_plan::GetMyPlanHandler;
pub use toggle_auto_renew::ToggleAutoRenewHandler;
pub use upgrade_plan::{UpgradePlanCommand, UpgradePlanHandler};
