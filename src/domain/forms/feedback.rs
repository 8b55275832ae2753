//! Feedback and grievance submission forms.

use crate::domain::foundation::ValidationError;

/// A file the user attached from the device gallery or camera.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    /// Original file name, shown back to the user.
    pub file_name: String,

    /// MIME type reported by the picker.
    pub content_type: String,

    /// Raw file contents.
    pub bytes: Vec<u8>,
}

impl Attachment {
    fn validate(&self, field: &str) -> Result<(), ValidationError> {
        if self.file_name.trim().is_empty() {
            return Err(ValidationError::empty_field(format!("{}.file_name", field)));
        }
        if self.bytes.is_empty() {
            return Err(ValidationError::invalid_format(field, "attachment is empty"));
        }
        Ok(())
    }
}

/// Star-rating feedback on a visit or the app itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedbackForm {
    /// Star rating, 1 to 5. The unrated state is 0 and never submits.
    pub rating: u8,

    /// Free-text comment.
    pub message: String,

    /// Optional screenshot or photo.
    pub attachment: Option<Attachment>,
}

impl FeedbackForm {
    /// Validates the form before any network call.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(1..=5).contains(&self.rating) {
            return Err(ValidationError::out_of_range(
                "rating",
                1,
                5,
                i32::from(self.rating),
            ));
        }
        if self.message.trim().is_empty() {
            return Err(ValidationError::empty_field("message"));
        }
        if let Some(attachment) = &self.attachment {
            attachment.validate("attachment")?;
        }
        Ok(())
    }
}

/// A formal complaint about a partner hospital or a claim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrievanceForm {
    /// Complaint category chosen from the backend-provided list.
    pub category: String,

    /// What happened, in the user's words.
    pub description: String,

    /// Optional supporting document.
    pub attachment: Option<Attachment>,
}

impl GrievanceForm {
    /// Validates the form before any network call.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.category.trim().is_empty() {
            return Err(ValidationError::empty_field("category"));
        }
        if self.description.trim().is_empty() {
            return Err(ValidationError::empty_field("description"));
        }
        if let Some(attachment) = &self.attachment {
            attachment.validate("attachment")?;
        }
        Ok(())
    }
}
