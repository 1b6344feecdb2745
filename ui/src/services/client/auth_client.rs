use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{error, info, instrument, warn};

use super::errors::{ClientError, ClientResult};
use super::types::*;
use crate::services::config::ClientConfig;

/// Authentication collaborator consumed by the wizard.
///
/// Browser futures are not `Send`, so neither is this trait.
#[async_trait(?Send)]
pub trait AuthApi {
    async fn login(&self, request: &LoginRequest) -> ClientResult<AuthResponse>;

    async fn register(&self, request: &RegisterRequest) -> ClientResult<AuthResponse>;

    /// Routes a wizard request to the matching endpoint
    async fn authenticate(&self, request: &AuthRequest) -> ClientResult<AuthResponse> {
        match request {
            AuthRequest::Login(login) => self.login(login).await,
            AuthRequest::Register(register) => self.register(register).await,
        }
    }
}

/// HTTP client for the authentication and admin endpoints
#[derive(Clone)]
pub struct AuthClient {
    pub(crate) http_client: Client,
    pub(crate) config: ClientConfig,
}

impl AuthClient {
    pub fn new(config: ClientConfig) -> Self {
        let http_client = Client::builder()
            .user_agent(config.user_agent.clone())
            .build()
            .unwrap_or_else(|e| {
                warn!("Falling back to default HTTP client: {}", e);
                Client::new()
            });

        Self {
            http_client,
            config,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Fetch the admin dashboard counters
    #[instrument(skip(self, token), err)]
    pub async fn admin_stats(&self, token: &str) -> ClientResult<AdminStats> {
        let url = self.config.endpoint_url(ADMIN_STATS_ENDPOINT);

        let response = self
            .http_client
            .get(&url)
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| ClientError::Network {
                message: format!("Failed to fetch admin stats: {}", e),
            })?;

        decode_response(response, ADMIN_STATS_ENDPOINT).await
    }

    async fn post_json<B, T>(&self, endpoint: &'static str, body: &B) -> ClientResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.config.endpoint_url(endpoint);

        let response = self
            .http_client
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|e| ClientError::Network {
                message: format!("Failed to call {}: {}", endpoint, e),
            })?;

        decode_response(response, endpoint).await
    }
}

impl Default for AuthClient {
    fn default() -> Self {
        Self::new(ClientConfig::from_build_env())
    }
}

#[async_trait(?Send)]
impl AuthApi for AuthClient {
    #[instrument(skip(self, request), err)]
    async fn login(&self, request: &LoginRequest) -> ClientResult<AuthResponse> {
        let response: AuthResponse = self.post_json(LOGIN_ENDPOINT, request).await?;
        info!("Login successful for user: {}", response.user.id);
        Ok(response)
    }

    #[instrument(skip(self, request), err)]
    async fn register(&self, request: &RegisterRequest) -> ClientResult<AuthResponse> {
        let response: AuthResponse = self.post_json(REGISTER_ENDPOINT, request).await?;
        info!(
            "Account created for user: {} (role: {})",
            response.user.id, response.user.role
        );
        Ok(response)
    }
}

async fn decode_response<T: DeserializeOwned>(
    response: Response,
    endpoint: &str,
) -> ClientResult<T> {
    let status = response.status();

    if status.is_success() {
        let text = response.text().await.map_err(|e| ClientError::Network {
            message: format!("Failed to read {} response: {}", endpoint, e),
        })?;
        return decode_success_body(&text);
    }

    let error_text = response
        .text()
        .await
        .unwrap_or_else(|e| format!("Failed to read error response: {}", e));

    error!("{} failed with status {}: {}", endpoint, status, error_text);

    Err(rejection_from_body(status.as_u16(), &error_text))
}

pub(crate) fn decode_success_body<T: DeserializeOwned>(text: &str) -> ClientResult<T> {
    serde_json::from_str(text).map_err(ClientError::from)
}

/// Builds the rejection error, keeping the server `detail` when there is one
pub(crate) fn rejection_from_body(status: u16, body: &str) -> ClientError {
    let detail = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|parsed| parsed.message());

    ClientError::Rejected { status, detail }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejection_keeps_string_detail() {
        let error = rejection_from_body(401, r#"{"detail": "Invalid credentials"}"#);
        assert_eq!(
            error,
            ClientError::Rejected {
                status: 401,
                detail: Some("Invalid credentials".to_string())
            }
        );
    }

    #[test]
    fn test_rejection_with_non_json_body() {
        let error = rejection_from_body(502, "<html>Bad Gateway</html>");
        assert_eq!(
            error,
            ClientError::Rejected {
                status: 502,
                detail: None
            }
        );
    }

    #[test]
    fn test_success_body_must_carry_token() {
        let ok: ClientResult<AuthResponse> = decode_success_body(
            r#"{"token": "jwt", "user": {"id": "1", "email": "a@b.co", "name": "A", "role": "migrant"}}"#,
        );
        assert_eq!(ok.unwrap().token, "jwt");

        let missing: ClientResult<AuthResponse> = decode_success_body(r#"{"user": null}"#);
        assert!(matches!(missing, Err(ClientError::InvalidResponse { .. })));
    }

    #[test]
    fn test_client_uses_configured_backend() {
        let client = AuthClient::new(ClientConfig::default().with_backend_url("http://api.test/"));
        assert_eq!(
            client.config().endpoint_url(REGISTER_ENDPOINT),
            "http://api.test/api/auth/register"
        );
    }
}
