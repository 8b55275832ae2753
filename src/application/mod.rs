//! Application layer: screen-level orchestration.
//!
//! - `handlers` - one handler per screen operation
//! - `ScreenError` - the one error type screens render
//! - `ViewState` - per-resource display state with stale-fetch discard

pub mod handlers;

mod error;
mod view_state;

pub use error::ScreenError;
pub use view_state::{FetchTicket, ViewState};
