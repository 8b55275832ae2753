//! Feedback and grievance screen handlers.

mod submit_feedback;
mod submit_grievance;

pub use submit_feedback::SubmitFeedbackHandler;
pub use submit_grievance::SubmitGrievanceHandler;
