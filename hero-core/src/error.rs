/// Error types for the hero form
use thiserror::Error;

/// Rejected form input. Raised before any request is issued.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    /// A required text field is empty
    #[error("{0} is required")]
    MissingField(&'static str),

    /// Age text is not an integer
    #[error("Age must be a whole number, got \"{0}\"")]
    InvalidAge(String),
}

/// Failure of a single submission attempt
#[derive(Error, Debug)]
pub enum SubmitError {
    /// The endpoint answered with a non-success status
    #[error("Server returned {0}")]
    Status(u16),

    /// The request never produced a response
    #[error("{0}")]
    Transport(String),

    /// The response body is not valid JSON
    #[error("Failed to parse response: {0}")]
    InvalidJson(#[from] serde_json::Error),

    /// The response body is JSON but not a top-level object
    #[error("Response is not a JSON object")]
    NotAnObject,
}

impl From<reqwest::Error> for SubmitError {
    fn from(err: reqwest::Error) -> Self {
        SubmitError::Transport(err.to_string())
    }
}

/// Type alias for Results using SubmitError
pub type Result<T> = std::result::Result<T, SubmitError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_message_carries_code() {
        assert_eq!(SubmitError::Status(500).to_string(), "Server returned 500");
        assert_eq!(SubmitError::Status(404).to_string(), "Server returned 404");
    }

    #[test]
    fn test_transport_message_is_passed_through() {
        let err = SubmitError::Transport("connection refused".to_string());
        assert_eq!(err.to_string(), "connection refused");
    }

    #[test]
    fn test_form_error_messages() {
        assert_eq!(FormError::MissingField("Name").to_string(), "Name is required");
        assert_eq!(
            FormError::InvalidAge("abc".to_string()).to_string(),
            "Age must be a whole number, got \"abc\""
        );
    }
}
