//! Typed error hierarchy for the crewboard client.
//!
//! Three top-level enums cover the three subsystems:
//! - `ApiError` — REST calls against the collaboration backend
//! - `BoardError` — in-memory task board operations
//! - `ValidationError` — form input rejected before any network call

use thiserror::Error;

/// Errors from the REST client.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Could not reach the backend at {base_url}: {source}")]
    Connection {
        base_url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The server rejected the request. `message` carries the `error` field
    /// from the response body when the server provided one.
    #[error("{message} (HTTP {status})")]
    Rejected { status: u16, message: String },

    #[error("Failed to decode response from {endpoint}: {source}")]
    Decode {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Not logged in. Run `crewboard login` first")]
    NoSession,

    #[error("Failed to persist session at {path}: {source}")]
    SessionStore {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ApiError {
    /// Message shown to the user when the server body carried no `error` field.
    pub const GENERIC_REJECTION: &'static str = "Request failed, please try again";
}

/// Errors from the in-memory task board.
#[derive(Debug, Error)]
pub enum BoardError {
    #[error("Task {id} is not on the board")]
    UnknownTask { id: i64 },

    #[error("Project {id} not found")]
    UnknownProject { id: i64 },
}

/// Form input rejected client-side, before submission.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{field} is required")]
    Required { field: &'static str },

    #[error("Email address does not look valid")]
    InvalidEmail,

    #[error("Password must be at least {min} characters")]
    PasswordTooShort { min: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_rejected_carries_status_and_message() {
        let err = ApiError::Rejected {
            status: 401,
            message: "Invalid credentials".to_string(),
        };
        match &err {
            ApiError::Rejected { status, message } => {
                assert_eq!(*status, 401);
                assert_eq!(message, "Invalid credentials");
            }
            _ => panic!("Expected Rejected variant"),
        }
        assert!(err.to_string().contains("401"));
        assert!(err.to_string().contains("Invalid credentials"));
    }

    #[test]
    fn api_error_session_store_carries_path() {
        use std::path::PathBuf;
        let path = PathBuf::from("/home/u/.config/crewboard/session");
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let err = ApiError::SessionStore {
            path: path.clone(),
            source: io_err,
        };
        match &err {
            ApiError::SessionStore { path: p, source: s } => {
                assert_eq!(p, &path);
                assert_eq!(s.kind(), std::io::ErrorKind::PermissionDenied);
            }
            _ => panic!("Expected SessionStore"),
        }
    }

    #[test]
    fn board_error_unknown_task_carries_id() {
        let err = BoardError::UnknownTask { id: 42 };
        match &err {
            BoardError::UnknownTask { id } => assert_eq!(*id, 42),
            _ => panic!("Expected UnknownTask"),
        }
        assert!(err.to_string().contains("42"));
    }

    #[test]
    fn validation_error_messages_name_the_field() {
        let err = ValidationError::Required { field: "title" };
        assert_eq!(err.to_string(), "title is required");
        let err = ValidationError::PasswordTooShort { min: 6 };
        assert!(err.to_string().contains('6'));
    }

    #[test]
    fn validation_error_variants_are_distinct() {
        let required = ValidationError::Required { field: "name" };
        let email = ValidationError::InvalidEmail;
        assert!(matches!(required, ValidationError::Required { .. }));
        assert!(!matches!(email, ValidationError::Required { .. }));
    }

    #[test]
    fn all_error_types_implement_std_error_trait() {
        fn assert_std_error<E: std::error::Error>(_: &E) {}
        let api_err = ApiError::NoSession;
        assert_std_error(&api_err);
        let board_err = BoardError::UnknownTask { id: 1 };
        assert_std_error(&board_err);
        let validation_err = ValidationError::InvalidEmail;
        assert_std_error(&validation_err);
    }
}
