pub mod admin_dashboard;
pub mod profile_page;
pub mod registration_service;

pub use admin_dashboard::AdminDashboard;
pub use profile_page::ProfilePage;
pub use registration_service::RegistrationService;
