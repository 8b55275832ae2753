//! SubmitGrievanceHandler - Command handler for the grievance form.

use std::sync::Arc;

use crate::application::ScreenError;
use crate::domain::forms::GrievanceForm;
use crate::ports::{FeedbackSubmitter, GrievanceReceipt};

/// Handler for filing a grievance.
pub struct SubmitGrievanceHandler {
    submitter: Arc<dyn FeedbackSubmitter>,
}

impl SubmitGrievanceHandler {
    pub fn new(submitter: Arc<dyn FeedbackSubmitter>) -> Self {
        Self { submitter }
    }

    pub async fn handle(&self, form: &GrievanceForm) -> Result<GrievanceReceipt, ScreenError> {
        form.validate()?;
        let receipt = self.submitter.submit_grievance(form).await?;
        Ok(receipt)
    }
}
