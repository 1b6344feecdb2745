use tracing::debug;

/// Locale list sent with every registration
pub const DEFAULT_LANGUAGES: [&str; 2] = ["pt", "fr"];

pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8001";

pub const USER_AGENT: &str = "community-matching-web/0.1";

/// Settings for talking to the authentication service
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    pub backend_url: String,
    pub default_languages: Vec<String>,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            default_languages: DEFAULT_LANGUAGES.iter().map(|lang| lang.to_string()).collect(),
            user_agent: USER_AGENT.to_string(),
        }
    }
}

impl ClientConfig {
    /// Reads `BACKEND_URL` at compile time; browser builds have no runtime environment
    pub fn from_build_env() -> Self {
        match option_env!("BACKEND_URL") {
            Some(url) if !url.trim().is_empty() => Self::default().with_backend_url(url),
            _ => {
                debug!("BACKEND_URL not set at build time, using {}", DEFAULT_BACKEND_URL);
                Self::default()
            }
        }
    }

    pub fn with_backend_url(mut self, url: &str) -> Self {
        self.backend_url = url.trim().trim_end_matches('/').to_string();
        self
    }

    /// Absolute URL for an `/api/...` path
    pub fn endpoint_url(&self, path: &str) -> String {
        format!("{}{}", self.backend_url, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slashes_are_trimmed() {
        let config = ClientConfig::default().with_backend_url("https://api.example.org//");
        assert_eq!(config.backend_url, "https://api.example.org");
        assert_eq!(
            config.endpoint_url("/api/auth/login"),
            "https://api.example.org/api/auth/login"
        );
    }

    #[test]
    fn test_default_languages() {
        assert_eq!(ClientConfig::default().default_languages, vec!["pt", "fr"]);
    }
}
