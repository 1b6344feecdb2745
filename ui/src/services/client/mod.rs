// Client-side access to the authentication service
//
// This module provides:
// - Request/response models for login, registration and admin stats
// - An HTTP client implementing the authentication collaborator
// - Session storage for the token handed back on success

pub mod auth_client;
pub mod errors;
pub mod session;
pub mod types;

// Re-export core types for easy access
pub use types::{
    AdminStats,
    AuthRequest,
    AuthResponse,
    ErrorBody,
    LoginRequest,
    RegisterRequest,
    RegistrationProfile,
    UserRecord,
};

// Re-export error types
pub use errors::{ClientError, ClientResult};

pub use auth_client::{AuthApi, AuthClient};
pub use session::{BrowserSession, InMemorySession, SessionSink, StoredSession};
