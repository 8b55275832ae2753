//! SubmitFeedbackHandler - Command handler for the feedback form.

use std::sync::Arc;

use crate::application::ScreenError;
use crate::domain::forms::FeedbackForm;
use crate::ports::{FeedbackReceipt, FeedbackSubmitter};

/// Handler for submitting rated feedback.
///
/// Invalid forms are rejected with a field-scoped message before any
/// network call; failed submissions leave the form intact for retry.
pub struct SubmitFeedbackHandler {
    submitter: Arc<dyn FeedbackSubmitter>,
}

impl SubmitFeedbackHandler {
    pub fn new(submitter: Arc<dyn FeedbackSubmitter>) -> Self {
        Self { submitter }
    }

    pub async fn handle(&self, form: &FeedbackForm) -> Result<FeedbackReceipt, ScreenError> {
        form.validate()?;
        let receipt = self.submitter.submit_feedback(form).await?;
        Ok(receipt)
    }
}
