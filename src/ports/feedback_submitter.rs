//! Feedback and grievance submission port.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::forms::{FeedbackForm, GrievanceForm};

use super::ApiError;

/// Port for fire-and-forget feedback submissions.
#[async_trait]
pub trait FeedbackSubmitter: Send + Sync {
    /// Submit rated feedback, with an optional attachment.
    async fn submit_feedback(&self, form: &FeedbackForm) -> Result<FeedbackReceipt, ApiError>;

    /// Submit a formal grievance.
    async fn submit_grievance(&self, form: &GrievanceForm) -> Result<GrievanceReceipt, ApiError>;
}

/// Acknowledgement for a feedback submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackReceipt {
    /// Backend identifier for the stored feedback.
    pub id: String,
}

/// Acknowledgement for a grievance submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrievanceReceipt {
    /// Backend identifier for the stored grievance.
    pub id: String,

    /// Human-readable ticket number the user can quote to support.
    pub ticket_number: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feedback_submitter_is_object_safe() {
        fn _accepts_dyn(_submitter: &dyn FeedbackSubmitter) {}
    }
}
