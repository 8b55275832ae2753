//! Adapters - Implementations of the ports.
//!
//! - `http` - reqwest gateway against the backend REST API
//! - `memory` - in-memory fakes for tests and demos

pub mod http;
pub mod memory;
