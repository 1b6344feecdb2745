//! User Interface Components
//!
//! Reusable Dioxus components for the authentication page:
//!
//! - **forms**: wizard steps, role picker and volunteer profile
//! - **input**: text inputs and inline validation feedback
//! - **display**: notices, loading indicator and stat cards

pub mod display;
pub mod forms;
pub mod input;
