//! HTTP adapters: the reqwest gateway and its per-port implementations.
//!
//! One [`RestGateway`] implements every port against the backend REST
//! API. Construct it with an [`ApiConfig`] and the session to speak for:
//!
//! ```ignore
//! let gateway = Arc::new(RestGateway::new(
//!     ApiConfig::new("https://api.carebridge.health"),
//!     session,
//! ));
//! let catalog = gateway.list_plans().await?;
//! ```

mod booking;
mod catalog;
mod client;
mod comparison;
mod dto;
mod entitlement;
mod feedback;
mod membership;
mod payment;

pub use client::{ApiConfig, RestGateway};
