//! CareBridge Client Core
//!
//! This crate implements the non-visual half of the CareBridge healthcare
//! membership app: plan catalog and entitlement reconciliation, quota usage
//! tracking, the plan comparison editor, and the REST gateways each screen
//! talks to. Rendering, navigation, and the backend API itself live outside
//! this crate.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
