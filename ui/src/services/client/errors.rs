use thiserror::Error;

/// Client-side operation errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ClientError {
    /// Server answered with a non-2xx status
    #[error("Request rejected with status {status}: {}", .detail.as_deref().unwrap_or("no detail"))]
    Rejected { status: u16, detail: Option<String> },

    /// Request could not be completed
    #[error("Network error: {message}")]
    Network { message: String },

    /// 2xx response whose body could not be decoded
    #[error("Invalid response format: {message}")]
    InvalidResponse { message: String },

    /// Browser storage failure
    #[error("Storage error: {message}")]
    Storage { message: String },
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        ClientError::InvalidResponse {
            message: err.to_string(),
        }
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
