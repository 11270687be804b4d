use thiserror::Error;

/// Failure of an authentication operation.
///
/// Each variant carries a message meant for the user; the calling page decides
/// how to show it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("{0}")]
    InvalidCredentials(String),

    #[error("{0}")]
    NetworkFailure(String),

    #[error("{0}")]
    ValidationFailure(String),
}

impl AuthError {
    pub fn message(&self) -> &str {
        match self {
            AuthError::InvalidCredentials(message)
            | AuthError::NetworkFailure(message)
            | AuthError::ValidationFailure(message) => message,
        }
    }

    /// Whether the server rejected the credential or token itself.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, AuthError::InvalidCredentials(_))
    }
}

impl From<reqwest::Error> for AuthError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_decode() {
            AuthError::NetworkFailure(format!("Unexpected response from server: {}", error))
        } else if error.is_timeout() {
            AuthError::NetworkFailure("The server took too long to respond".to_string())
        } else {
            AuthError::NetworkFailure(format!("Could not reach the server: {}", error))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_the_message() {
        let error = AuthError::InvalidCredentials("Invalid email or password".to_string());
        assert_eq!(error.to_string(), "Invalid email or password");
        assert_eq!(error.message(), "Invalid email or password");
    }

    #[test]
    fn test_is_unauthorized() {
        assert!(AuthError::InvalidCredentials(String::new()).is_unauthorized());
        assert!(!AuthError::NetworkFailure(String::new()).is_unauthorized());
        assert!(!AuthError::ValidationFailure(String::new()).is_unauthorized());
    }
}
