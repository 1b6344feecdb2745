//! Submission of the wizard's request to the authentication service.
//!
//! Submission is split in three so a UI can release its state borrow while
//! the request is awaited:
//!
//! 1. [`WizardState::begin_submission`] checks the in-flight guard and the
//!    preconditions, then returns the request to send.
//! 2. [`execute_submission`] talks to the collaborators.
//! 3. [`WizardState::finish_submission`] records the outcome.
//!
//! [`submit`] runs all three against a single owned state.

use tracing::{error, info, instrument, warn};

use crate::registration::form_validation::validate_ready_to_submit;
use crate::registration::types::*;
use crate::services::client::{AuthApi, AuthRequest, AuthResponse, SessionSink};
use crate::services::errors::{RegistrationError, RegistrationResult};

impl WizardState {
    /// Validates and marks the wizard as submitting.
    ///
    /// Rejects a second call while a request is still in flight.
    pub fn begin_submission(&mut self) -> RegistrationResult<AuthRequest> {
        if self.submission_in_flight {
            warn!("Ignoring submit while a request is in flight");
            return Err(RegistrationError::SubmissionInFlight);
        }

        if let Err(error) = validate_ready_to_submit(self) {
            self.validation_error = Some(error.clone());
            return Err(error);
        }

        self.validation_error = None;
        self.notice = None;
        self.submission_in_flight = true;
        Ok(self.build_payload())
    }

    /// Clears the in-flight flag and records a notice for the outcome.
    ///
    /// Step, role and categories are left as they were so a failed attempt
    /// can be retried by submitting again.
    pub fn finish_submission(&mut self, result: &RegistrationResult<AuthResponse>) {
        self.submission_in_flight = false;

        match result {
            Ok(response) => {
                let message = match self.mode {
                    Mode::Login => "Login successful!",
                    Mode::Register => "Account created successfully!",
                };
                self.notice = Some(Notice::success(message));
                self.authenticated_user = Some(response.user.clone());
            }
            Err(error) if error.is_local() => {
                self.validation_error = Some(error.clone());
            }
            Err(error) => {
                self.notice = Some(Notice::error(error.user_message()));
            }
        }
    }
}

/// Sends the request and hands the session to `session` on success
#[instrument(skip(api, session, request), fields(endpoint = request.endpoint()), err)]
pub async fn execute_submission<A, S>(
    api: &A,
    session: &S,
    request: &AuthRequest,
) -> RegistrationResult<AuthResponse>
where
    A: AuthApi + ?Sized,
    S: SessionSink + ?Sized,
{
    let response = api.authenticate(request).await.map_err(|e| {
        error!("Authentication request failed: {}", e);
        RegistrationError::from(e)
    })?;

    session.login(&response.token, &response.user)?;

    info!(
        "Authenticated user {} as {} (registration: {})",
        response.user.id,
        response.user.role,
        request.is_registration()
    );
    Ok(response)
}

/// Drops the stored session
pub fn sign_out<S: SessionSink + ?Sized>(session: &S) -> RegistrationResult<()> {
    let signed_in = session.current()?.map(|stored| stored.user.id);
    session.logout()?;

    match signed_in {
        Some(id) => info!("Signed out user {}", id),
        None => warn!("Sign out requested without a stored session"),
    }
    Ok(())
}

/// Runs a full submission against `state`
pub async fn submit<A, S>(
    state: &mut WizardState,
    api: &A,
    session: &S,
) -> RegistrationResult<AuthResponse>
where
    A: AuthApi + ?Sized,
    S: SessionSink + ?Sized,
{
    let request = state.begin_submission()?;
    let result = execute_submission(api, session, &request).await;
    state.finish_submission(&result);
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::client::{
        ClientError, ClientResult, InMemorySession, LoginRequest, RegisterRequest, UserRecord,
    };
    use async_trait::async_trait;
    use std::cell::RefCell;

    /// Records every request and answers with a canned result
    struct FakeAuth {
        requests: RefCell<Vec<AuthRequest>>,
        reply: ClientResult<AuthResponse>,
    }

    impl FakeAuth {
        fn replying(reply: ClientResult<AuthResponse>) -> Self {
            Self {
                requests: RefCell::new(Vec::new()),
                reply,
            }
        }

        fn calls(&self) -> usize {
            self.requests.borrow().len()
        }
    }

    #[async_trait(?Send)]
    impl AuthApi for FakeAuth {
        async fn login(&self, request: &LoginRequest) -> ClientResult<AuthResponse> {
            self.requests
                .borrow_mut()
                .push(AuthRequest::Login(request.clone()));
            self.reply.clone()
        }

        async fn register(&self, request: &RegisterRequest) -> ClientResult<AuthResponse> {
            self.requests
                .borrow_mut()
                .push(AuthRequest::Register(request.clone()));
            self.reply.clone()
        }
    }

    fn response(role: &str) -> AuthResponse {
        AuthResponse {
            token: "jwt-token".to_string(),
            user: UserRecord {
                id: "u-1".to_string(),
                email: "ana@example.org".to_string(),
                name: "Ana".to_string(),
                role: role.to_string(),
                bio: None,
                languages: vec!["pt".to_string(), "fr".to_string()],
                categories: Vec::new(),
                created_at: None,
            },
        }
    }

    fn register_state(role: Role) -> WizardState {
        let mut state = WizardState::default();
        state.set_mode(Mode::Register);
        state.select_role(role);
        state.credentials = Credentials {
            email: "ana@example.org".to_string(),
            password: "hunter22".to_string(),
            name: "Ana".to_string(),
        };
        state
    }

    #[tokio::test]
    async fn test_migrant_registration_submits_selected_needs() {
        let api = FakeAuth::replying(Ok(response("migrant")));
        let session = InMemorySession::new();

        let mut state = register_state(Role::Migrant);
        state.advance().unwrap();
        state.toggle_category(CategoryCode::Food);
        state.toggle_category(CategoryCode::Health);
        assert_eq!(state.advance(), Ok(crate::registration::Advance::Submit));

        let result = submit(&mut state, &api, &session).await;
        assert!(result.is_ok());
        assert!(!state.submission_in_flight);
        assert_eq!(state.notice, Some(Notice::success("Account created successfully!")));

        let requests = api.requests.borrow();
        let body = serde_json::to_value(&requests[0]).unwrap();
        assert_eq!(body["need_categories"], serde_json::json!(["food", "health"]));

        let stored = session.current().unwrap().unwrap();
        assert_eq!(stored.token, "jwt-token");
    }

    #[tokio::test]
    async fn test_login_uses_login_endpoint() {
        let api = FakeAuth::replying(Ok(response("helper")));
        let session = InMemorySession::new();

        let mut state = register_state(Role::Helper);
        state.set_mode(Mode::Login);

        submit(&mut state, &api, &session).await.unwrap();
        let requests = api.requests.borrow();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].endpoint(), "/api/auth/login");
        assert_eq!(state.notice, Some(Notice::success("Login successful!")));
        assert_eq!(state.authenticated_user.as_ref().map(|u| u.role.as_str()), Some("helper"));
    }

    #[tokio::test]
    async fn test_second_submit_while_in_flight_is_rejected() {
        let api = FakeAuth::replying(Ok(response("volunteer")));
        let session = InMemorySession::new();

        let mut state = register_state(Role::Volunteer);
        let first = state.begin_submission();
        assert!(first.is_ok());

        let second = submit(&mut state, &api, &session).await;
        assert_eq!(second, Err(RegistrationError::SubmissionInFlight));
        assert_eq!(api.calls(), 0);
        assert!(state.submission_in_flight);
    }

    #[tokio::test]
    async fn test_rejection_keeps_wizard_state_for_retry() {
        let api = FakeAuth::replying(Err(ClientError::Rejected {
            status: 400,
            detail: Some("Email already registered".to_string()),
        }));
        let session = InMemorySession::new();

        let mut state = register_state(Role::Helper);
        state.advance().unwrap();
        state.toggle_category(CategoryCode::Clothes);

        let result = submit(&mut state, &api, &session).await;
        assert!(matches!(result, Err(RegistrationError::Rejected { status: 400, .. })));
        assert!(!state.submission_in_flight);
        assert_eq!(state.current_step, WizardStep::Categories);
        assert_eq!(state.role, Role::Helper);
        assert!(state.categories.contains(CategoryCode::Clothes));
        assert_eq!(state.notice, Some(Notice::error("Email already registered")));
        assert_eq!(session.current().unwrap(), None);

        // Retrying is another submit
        assert!(submit(&mut state, &api, &session).await.is_err());
        assert_eq!(api.calls(), 2);
    }

    #[tokio::test]
    async fn test_connectivity_failure_uses_generic_message() {
        let api = FakeAuth::replying(Err(ClientError::Network {
            message: "connection refused".to_string(),
        }));
        let session = InMemorySession::new();

        let mut state = register_state(Role::Volunteer);
        let result = submit(&mut state, &api, &session).await;

        assert!(matches!(result, Err(RegistrationError::Connectivity { .. })));
        assert_eq!(state.notice, Some(Notice::error("Connection error")));
    }

    #[tokio::test]
    async fn test_sign_out_clears_the_session() {
        let api = FakeAuth::replying(Ok(response("helper")));
        let session = InMemorySession::new();

        let mut state = register_state(Role::Volunteer);
        submit(&mut state, &api, &session).await.unwrap();
        assert!(session.current().unwrap().is_some());

        sign_out(&session).unwrap();
        assert_eq!(session.current().unwrap(), None);

        // Signing out twice is harmless
        assert!(sign_out(&session).is_ok());
    }

    #[tokio::test]
    async fn test_invalid_state_never_reaches_the_service() {
        let api = FakeAuth::replying(Ok(response("migrant")));
        let session = InMemorySession::new();

        let mut state = register_state(Role::Migrant);
        let result = submit(&mut state, &api, &session).await;

        assert_eq!(result, Err(RegistrationError::EmptyCategories));
        assert_eq!(api.calls(), 0);
        assert!(!state.submission_in_flight);
        assert_eq!(state.validation_error, Some(RegistrationError::EmptyCategories));
    }
}
