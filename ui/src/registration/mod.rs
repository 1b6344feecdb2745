//! Registration Wizard
//!
//! State machine behind the authentication page. It collects credentials,
//! a role and role-specific attributes, then submits either a login or a
//! registration request to the authentication service.
//!
//! # Flow
//!
//! - **Login**: a single step; `advance()` validates email and password and
//!   asks the caller to submit.
//! - **Register as migrant or helper**: step 1 collects name, email,
//!   password and role; step 2 collects needs (migrant) or offered help
//!   areas (helper). Submission requires at least one category.
//! - **Register as volunteer**: step 1 also collects the professional
//!   profile and submits directly.
//!
//! # Usage
//!
//! ```ignore
//! use ui::registration::{submit, Advance, WizardState};
//!
//! let mut state = WizardState::default();
//! if state.advance()? == Advance::Submit {
//!     submit(&mut state, &client, &session).await?;
//! }
//! ```

pub mod form_validation;
pub mod logic;
pub mod orchestrator;
pub mod payload;
pub mod types;

pub use form_validation::*;
pub use logic::{Advance, Retreat};
pub use orchestrator::{execute_submission, sign_out, submit};
pub use payload::parse_specialties;
pub use types::*;
