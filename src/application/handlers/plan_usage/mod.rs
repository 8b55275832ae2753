//! Plan usage screen handlers.

mod load_plan_usage;

pub use load_plan_usage::LoadPlanUsageHandler;
