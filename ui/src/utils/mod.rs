//! Utility Functions and Cross-Cutting Concerns
//!
//! - **console_macros**: browser console logging macros for components
//! - **validation**: required-field and email shape checks used by the wizard

pub mod console_macros;
pub mod validation;

pub use validation::*;
