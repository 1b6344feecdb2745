use serde::{Deserialize, Serialize};

use crate::registration::types::{CategoryCode, ProfessionalArea, Role};

pub const LOGIN_ENDPOINT: &str = "/api/auth/login";
pub const REGISTER_ENDPOINT: &str = "/api/auth/register";
pub const ADMIN_STATS_ENDPOINT: &str = "/api/admin/stats";

/// Body of `POST /api/auth/login`
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Role-specific part of a registration body.
///
/// The variant is written as the `role` field and its fields are merged
/// into the enclosing [`RegisterRequest`].
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "role", rename_all = "lowercase")]
pub enum RegistrationProfile {
    Migrant {
        need_categories: Vec<CategoryCode>,
    },
    Helper {
        help_categories: Vec<CategoryCode>,
    },
    Volunteer {
        professional_area: ProfessionalArea,
        professional_specialties: Vec<String>,
        availability: String,
        experience: String,
    },
}

/// Body of `POST /api/auth/register`
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub name: String,
    pub languages: Vec<String>,
    #[serde(flatten)]
    pub profile: RegistrationProfile,
}

/// One of the two requests the wizard can submit
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum AuthRequest {
    Login(LoginRequest),
    Register(RegisterRequest),
}

impl AuthRequest {
    pub fn endpoint(&self) -> &'static str {
        match self {
            AuthRequest::Login(_) => LOGIN_ENDPOINT,
            AuthRequest::Register(_) => REGISTER_ENDPOINT,
        }
    }

    pub fn is_registration(&self) -> bool {
        matches!(self, AuthRequest::Register(_))
    }
}

/// User record returned alongside the session token
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct UserRecord {
    pub id: String,
    pub email: String,
    pub name: String,
    pub role: String,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub languages: Vec<String>,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl UserRecord {
    pub fn is_admin(&self) -> bool {
        self.role == "admin"
    }

    /// Display name of the role; roles the wizard does not offer are shown as sent
    pub fn role_title(&self) -> String {
        match self.role.parse::<Role>() {
            Ok(role) => role.title().to_string(),
            Err(_) => self.role.clone(),
        }
    }
}

/// Successful login/register response
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AuthResponse {
    pub token: String,
    pub user: UserRecord,
}

/// Error body returned on non-2xx responses.
///
/// `detail` is usually a string, but request validation failures carry a
/// list of objects instead.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<serde_json::Value>,
}

impl ErrorBody {
    pub fn message(&self) -> Option<String> {
        match &self.detail {
            Some(serde_json::Value::String(detail)) if !detail.trim().is_empty() => {
                Some(detail.clone())
            }
            _ => None,
        }
    }
}

/// Counters rendered on the admin dashboard
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AdminStats {
    #[serde(default)]
    pub total_users: u64,
    #[serde(default)]
    pub total_posts: u64,
    #[serde(default)]
    pub total_matches: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_user_record_ignores_unknown_fields() {
        let user: UserRecord = serde_json::from_value(json!({
            "id": "0b6f",
            "email": "ana@example.org",
            "name": "Ana",
            "role": "helper",
            "location": null,
            "languages": ["pt", "fr"],
            "created_at": "2025-03-01T10:00:00Z"
        }))
        .unwrap();

        assert_eq!(user.role, "helper");
        assert_eq!(user.languages, vec!["pt", "fr"]);
        assert!(user.categories.is_empty());
        assert!(!user.is_admin());
    }

    #[test]
    fn test_role_title() {
        let mut user: UserRecord = serde_json::from_value(json!({
            "id": "1", "email": "a@b.co", "name": "A", "role": "helper"
        }))
        .unwrap();
        assert_eq!(user.role_title(), "Helper");
        assert!(!user.is_admin());

        user.role = "admin".to_string();
        assert_eq!(user.role_title(), "admin");
        assert!(user.is_admin());
    }

    #[test]
    fn test_error_body_detail_variants() {
        let body: ErrorBody = serde_json::from_value(json!({"detail": "Invalid credentials"})).unwrap();
        assert_eq!(body.message().as_deref(), Some("Invalid credentials"));

        let body: ErrorBody = serde_json::from_value(json!({
            "detail": [{"loc": ["body", "email"], "msg": "value is not a valid email address"}]
        }))
        .unwrap();
        assert_eq!(body.message(), None);

        let body: ErrorBody = serde_json::from_value(json!({})).unwrap();
        assert_eq!(body.message(), None);
    }

    #[test]
    fn test_admin_stats_defaults_missing_counters() {
        let stats: AdminStats = serde_json::from_value(json!({"total_users": 12})).unwrap();
        assert_eq!(
            stats,
            AdminStats {
                total_users: 12,
                total_posts: 0,
                total_matches: 0
            }
        );
    }
}
