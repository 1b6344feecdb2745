//! Shared UI and client logic for the community matching web app.

pub mod app;
pub use app::{AdminDashboard, ProfilePage, RegistrationService};

pub mod components;
pub mod registration;
pub mod services;
pub mod utils;
