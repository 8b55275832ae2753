//! Screen-level error type.

use crate::domain::foundation::ValidationError;
use crate::ports::ApiError;

/// Everything a screen operation can fail with.
///
/// Validation failures never reached the network; API failures did and
/// came back bad. Both degrade to an inline message, never a crash.
#[derive(Debug, Clone, PartialEq)]
pub enum ScreenError {
    /// Rejected locally before any network call.
    Validation(ValidationError),

    /// The backend call failed.
    Api(ApiError),
}

impl ScreenError {
    /// The message the screen should show.
    pub fn display_message(&self) -> String {
        match self {
            ScreenError::Validation(err) => err.to_string(),
            ScreenError::Api(err) => err.display_message(),
        }
    }

    /// The field a validation message belongs to, if field-scoped.
    pub fn field(&self) -> Option<&str> {
        match self {
            ScreenError::Validation(err) => Some(err.field()),
            ScreenError::Api(_) => None,
        }
    }

    /// True when the user must re-authenticate before retrying.
    pub fn requires_login(&self) -> bool {
        matches!(self, ScreenError::Api(err) if err.requires_login())
    }
}

impl From<ValidationError> for ScreenError {
    fn from(err: ValidationError) -> Self {
        ScreenError::Validation(err)
    }
}

impl From<ApiError> for ScreenError {
    fn from(err: ApiError) -> Self {
        ScreenError::Api(err)
    }
}

impl std::fmt::Display for ScreenError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScreenError::Validation(err) => write!(f, "validation: {}", err),
            ScreenError::Api(err) => write!(f, "api: {}", err),
        }
    }
}

impl std::error::Error for ScreenError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_errors_are_field_scoped() {
        let err = ScreenError::from(ValidationError::empty_field("message"));
        assert_eq!(err.field(), Some("message"));
    }

    #[test]
    fn api_errors_have_no_field() {
        let err = ScreenError::from(ApiError::network("down"));
        assert_eq!(err.field(), None);
    }

    #[test]
    fn server_wording_wins_in_display_message() {
        let err = ScreenError::from(ApiError::server(409).with_server_message("Plan already active"));
        assert_eq!(err.display_message(), "Plan already active");
    }

    #[test]
    fn unauthorized_requires_login() {
        assert!(ScreenError::from(ApiError::unauthorized()).requires_login());
        assert!(!ScreenError::from(ValidationError::empty_field("x")).requires_login());
    }
}
