//! Feedback and grievance submissions over `POST /feedback/submit` and
//! `POST /grievance/submit`.
//!
//! Submissions without an attachment go as plain JSON; attachments turn
//! the request into a multipart form, mirroring what the backend's
//! upload endpoints expect.

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};

use crate::domain::forms::{Attachment, FeedbackForm, GrievanceForm};
use crate::ports::{ApiError, FeedbackReceipt, FeedbackSubmitter, GrievanceReceipt};

use super::client::RestGateway;
use super::dto::{FeedbackReceiptDto, GrievanceReceiptDto};

fn attachment_part(attachment: &Attachment) -> Result<Part, ApiError> {
    Part::bytes(attachment.bytes.clone())
        .file_name(attachment.file_name.clone())
        .mime_str(&attachment.content_type)
        .map_err(|e| ApiError::decode(format!("Unsupported attachment content type: {}", e)))
}

#[async_trait]
impl FeedbackSubmitter for RestGateway {
    async fn submit_feedback(&self, form: &FeedbackForm) -> Result<FeedbackReceipt, ApiError> {
        let dto: FeedbackReceiptDto = match &form.attachment {
            None => {
                let body = serde_json::json!({
                    "rating": form.rating,
                    "message": form.message,
                });
                self.post_json("/feedback/submit", &body).await?
            }
            Some(attachment) => {
                let multipart = Form::new()
                    .text("rating", form.rating.to_string())
                    .text("message", form.message.clone())
                    .part("attachment", attachment_part(attachment)?);
                self.post_multipart("/feedback/submit", multipart).await?
            }
        };
        tracing::info!(rating = form.rating, "Feedback submitted");
        Ok(dto.into())
    }

    async fn submit_grievance(&self, form: &GrievanceForm) -> Result<GrievanceReceipt, ApiError> {
        let dto: GrievanceReceiptDto = match &form.attachment {
            None => {
                let body = serde_json::json!({
                    "category": form.category,
                    "description": form.description,
                });
                self.post_json("/grievance/submit", &body).await?
            }
            Some(attachment) => {
                let multipart = Form::new()
                    .text("category", form.category.clone())
                    .text("description", form.description.clone())
                    .part("attachment", attachment_part(attachment)?);
                self.post_multipart("/grievance/submit", multipart).await?
            }
        };
        tracing::info!(category = %form.category, "Grievance submitted");
        Ok(dto.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attachment_part_accepts_valid_mime() {
        let attachment = Attachment {
            file_name: "receipt.png".to_string(),
            content_type: "image/png".to_string(),
            bytes: vec![1, 2, 3],
        };
        assert!(attachment_part(&attachment).is_ok());
    }

    #[test]
    fn attachment_part_rejects_malformed_mime() {
        let attachment = Attachment {
            file_name: "receipt.png".to_string(),
            content_type: "not a mime type".to_string(),
            bytes: vec![1, 2, 3],
        };
        assert!(attachment_part(&attachment).is_err());
    }
}
