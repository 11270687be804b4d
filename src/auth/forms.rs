//! Request payloads for login and registration, with the client-side checks
//! the forms perform before anything goes over the network.

use crate::auth::AuthError;
use serde::Serialize;
use std::fmt;

pub const MIN_PASSWORD_LENGTH: usize = 6;

#[derive(Clone, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    pub fn validate(&self) -> Result<(), AuthError> {
        if self.email.trim().is_empty() || self.password.is_empty() {
            return Err(AuthError::ValidationFailure(
                "Email and password are required".to_string(),
            ));
        }
        Ok(())
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// Body of `POST /register`.
#[derive(Clone, Serialize)]
pub struct RegisterProfile {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl fmt::Debug for RegisterProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisterProfile")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// What the registration page collects.
#[derive(Clone)]
pub struct RegistrationForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl RegistrationForm {
    /// Check the form and turn it into the request profile.
    pub fn validate(&self) -> Result<RegisterProfile, AuthError> {
        if self.name.trim().is_empty() || self.email.trim().is_empty() || self.password.is_empty() {
            return Err(AuthError::ValidationFailure(
                "Name, email and password are required".to_string(),
            ));
        }
        if self.password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(AuthError::ValidationFailure(format!(
                "Password must be at least {} characters",
                MIN_PASSWORD_LENGTH
            )));
        }
        if self.password != self.confirm_password {
            return Err(AuthError::ValidationFailure(
                "Passwords do not match".to_string(),
            ));
        }

        Ok(RegisterProfile {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            password: self.password.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(password: &str, confirm: &str) -> RegistrationForm {
        RegistrationForm {
            name: " Amina ".to_string(),
            email: "amina@example.org".to_string(),
            password: password.to_string(),
            confirm_password: confirm.to_string(),
        }
    }

    // ==================== Credentials Tests ====================

    #[test]
    fn test_credentials_require_both_fields() {
        assert!(Credentials::new("x@x.com", "secret").validate().is_ok());
        assert!(matches!(
            Credentials::new("  ", "secret").validate(),
            Err(AuthError::ValidationFailure(_))
        ));
        assert!(Credentials::new("x@x.com", "").validate().is_err());
    }

    #[test]
    fn test_credentials_serialize_as_login_body() {
        let json = serde_json::to_value(Credentials::new("x@x.com", "pw")).unwrap();
        assert_eq!(json, serde_json::json!({"email": "x@x.com", "password": "pw"}));
    }

    #[test]
    fn test_credentials_debug_hides_password() {
        let debug = format!("{:?}", Credentials::new("x@x.com", "hunter22"));
        assert!(!debug.contains("hunter22"));
    }

    // ==================== RegistrationForm Tests ====================

    #[test]
    fn test_valid_form_produces_trimmed_profile() {
        let profile = form("secret1", "secret1").validate().expect("valid");
        assert_eq!(profile.name, "Amina");
        assert_eq!(profile.email, "amina@example.org");
        assert_eq!(profile.password, "secret1");
    }

    #[test]
    fn test_mismatched_passwords() {
        let error = form("secret1", "secret2").validate().unwrap_err();
        assert_eq!(error, AuthError::ValidationFailure("Passwords do not match".to_string()));
    }

    #[test]
    fn test_short_password() {
        let error = form("abc", "abc").validate().unwrap_err();
        assert!(error.message().contains("at least 6"));
    }

    #[test]
    fn test_missing_name() {
        let mut form = form("secret1", "secret1");
        form.name = String::new();
        assert!(matches!(form.validate(), Err(AuthError::ValidationFailure(_))));
    }
}
