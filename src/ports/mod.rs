//! Ports - Interfaces for the backend REST API.
//!
//! Following hexagonal architecture, ports define the contracts between
//! screen-level logic and the outside world. Adapters implement these
//! ports; handlers depend only on the traits.
//!
//! Every port fails with the shared [`ApiError`] taxonomy so screens
//! handle errors the same way everywhere.

mod api;
mod appointment_booker;
mod catalog_reader;
mod comparison_repository;
mod entitlement_reader;
mod feedback_submitter;
mod membership_writer;
mod payment_gateway;

pub use api::{ApiError, ApiErrorCode};
pub use appointment_booker::{AppointmentBooker, BookingConfirmation, BookingStatus};
pub use catalog_reader::PlanCatalogReader;
pub use comparison_repository::ComparisonTableRepository;
pub use entitlement_reader::{EntitlementReader, MembershipView};
pub use feedback_submitter::{FeedbackReceipt, FeedbackSubmitter, GrievanceReceipt};
pub use membership_writer::MembershipWriter;
pub use payment_gateway::{PaymentGateway, PaymentOutcome, PaymentSession, PaymentStatus};
