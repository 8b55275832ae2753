//! Authenticated session carried by every data-access call.
//!
//! The session is an explicit value handed to each gateway rather than a
//! process-global: whoever constructs a gateway decides which session it
//! speaks for, and tests can hand in throwaway tokens freely.

use secrecy::{ExposeSecret, SecretString};

use super::ValidationError;

/// An authenticated user session.
///
/// Holds the bearer token issued at login plus the small slice of
/// preferences the app persists alongside it (currently the last
/// selected city, used to pre-filter hospital searches).
#[derive(Clone)]
pub struct AuthSession {
    token: SecretString,
    preferred_city: Option<String>,
}

impl AuthSession {
    /// Creates a session from a bearer token, rejecting blank tokens.
    pub fn new(token: impl Into<String>) -> Result<Self, ValidationError> {
        let token = token.into();
        if token.trim().is_empty() {
            return Err(ValidationError::empty_field("token"));
        }
        Ok(Self {
            token: SecretString::new(token),
            preferred_city: None,
        })
    }

    /// Attaches the last-selected city preference.
    pub fn with_preferred_city(mut self, city: impl Into<String>) -> Self {
        self.preferred_city = Some(city.into());
        self
    }

    /// Exposes the bearer token for the `Authorization` header.
    pub fn bearer_token(&self) -> &str {
        self.token.expose_secret()
    }

    /// Returns the last-selected city, if one was persisted.
    pub fn preferred_city(&self) -> Option<&str> {
        self.preferred_city.as_deref()
    }
}

impl std::fmt::Debug for AuthSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthSession")
            .field("preferred_city", &self.preferred_city)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_exposes_token() {
        let session = AuthSession::new("tok-123").unwrap();
        assert_eq!(session.bearer_token(), "tok-123");
    }

    #[test]
    fn session_rejects_blank_token() {
        assert!(AuthSession::new("").is_err());
        assert!(AuthSession::new("   ").is_err());
    }

    #[test]
    fn preferred_city_defaults_to_none() {
        let session = AuthSession::new("tok").unwrap();
        assert!(session.preferred_city().is_none());
    }

    #[test]
    fn preferred_city_can_be_attached() {
        let session = AuthSession::new("tok").unwrap().with_preferred_city("Pune");
        assert_eq!(session.preferred_city(), Some("Pune"));
    }

    #[test]
    fn debug_does_not_leak_token() {
        let session = AuthSession::new("super-secret").unwrap();
        let debug = format!("{:?}", session);
        assert!(!debug.contains("super-secret"));
    }
}
