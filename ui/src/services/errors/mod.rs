use thiserror::Error;

use crate::services::client::ClientError;

/// Shown when the server rejects a request without a usable `detail`
pub const GENERIC_AUTH_FAILURE: &str = "Authentication failed";

/// Shown when the request never produced a usable response
pub const GENERIC_CONNECTION_FAILURE: &str = "Connection error";

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RegistrationError {
    #[error("Validation error: {field} - {message}")]
    Validation {
        field: &'static str,
        message: String,
    },

    #[error("Validation error: select at least one category")]
    EmptyCategories,

    #[error("Authentication rejected ({status}): {detail}")]
    Rejected { status: u16, detail: String },

    #[error("Connectivity error: {message}")]
    Connectivity { message: String },

    #[error("Invalid response: {message}")]
    InvalidResponse { message: String },

    #[error("A submission is already in progress")]
    SubmissionInFlight,

    #[error("Unknown {kind} code: {value}")]
    UnknownCode { kind: &'static str, value: String },

    #[error("Session storage error: {message}")]
    Session { message: String },
}

pub type RegistrationResult<T> = Result<T, RegistrationError>;

impl RegistrationError {
    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        RegistrationError::Validation {
            field,
            message: message.into(),
        }
    }

    /// Local errors block a transition and are fixed by editing the form
    pub fn is_local(&self) -> bool {
        matches!(
            self,
            RegistrationError::Validation { .. }
                | RegistrationError::EmptyCategories
                | RegistrationError::UnknownCode { .. }
        )
    }

    /// Message suitable for inline feedback or a notification
    pub fn user_message(&self) -> String {
        match self {
            RegistrationError::Validation { message, .. } => message.clone(),
            RegistrationError::EmptyCategories => "Please select at least one category".to_string(),
            RegistrationError::Rejected { detail, .. } => detail.clone(),
            RegistrationError::Connectivity { .. } | RegistrationError::InvalidResponse { .. } => {
                GENERIC_CONNECTION_FAILURE.to_string()
            }
            RegistrationError::SubmissionInFlight => "Please wait, still submitting...".to_string(),
            RegistrationError::UnknownCode { kind, value } => {
                format!("Unknown {}: {}", kind, value)
            }
            RegistrationError::Session { .. } => {
                "Signed in, but the session could not be saved".to_string()
            }
        }
    }
}

impl From<ClientError> for RegistrationError {
    fn from(error: ClientError) -> Self {
        match error {
            ClientError::Rejected { status, detail } => RegistrationError::Rejected {
                status,
                detail: detail.unwrap_or_else(|| GENERIC_AUTH_FAILURE.to_string()),
            },
            ClientError::Network { message } => RegistrationError::Connectivity { message },
            ClientError::InvalidResponse { message } => {
                RegistrationError::InvalidResponse { message }
            }
            ClientError::Storage { message } => RegistrationError::Session { message },
        }
    }
}
