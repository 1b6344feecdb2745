//! Infrastructure Services
//!
//! - **client**: request models, the HTTP authentication client and session storage
//! - **config**: backend URL and default registration languages
//! - **errors**: the registration error taxonomy
//!
//! Async traits carry no Send/Sync bounds so they run on the browser's
//! single-threaded executor.

pub mod client;
pub mod config;
pub mod errors;
