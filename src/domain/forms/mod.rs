//! Mutation submitter payloads.
//!
//! Each form validates locally before any network call; a failing form
//! never reaches a gateway.
//!
//! # Module Structure
//!
//! - `booking` - Appointment requests
//! - `feedback` - Feedback and grievance forms
//! - `membership` - Plan upgrade payloads
//! - `payment` - Purchase initiation and confirmation

mod booking;
mod feedback;
mod membership;
mod payment;

pub use booking::AppointmentRequest;
pub use feedback::{Attachment, FeedbackForm, GrievanceForm};
pub use membership::UpgradeRequest;
pub use payment::{PaymentConfirmation, PaymentInitiation};
