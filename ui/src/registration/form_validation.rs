use crate::registration::types::*;
use crate::services::errors::{RegistrationError, RegistrationResult};
use crate::utils::validation::{is_blank, is_valid_email};

/// Validates the step 1 fields in display order: name, email, password
pub fn validate_basic_info(state: &WizardState) -> RegistrationResult<()> {
    let credentials = &state.credentials;

    if state.is_register() && is_blank(&credentials.name) {
        return Err(RegistrationError::validation("name", "Please enter your name"));
    }

    if is_blank(&credentials.email) {
        return Err(RegistrationError::validation("email", "Please enter your email"));
    }

    if !is_valid_email(&credentials.email) {
        return Err(RegistrationError::validation(
            "email",
            "Please enter a valid email address",
        ));
    }

    if is_blank(&credentials.password) {
        return Err(RegistrationError::validation("password", "Please enter your password"));
    }

    Ok(())
}

/// Validates that the role's category step has at least one selection
pub fn validate_categories(state: &WizardState) -> RegistrationResult<()> {
    if state.is_register() && state.role.requires_categories() && state.categories.is_empty() {
        return Err(RegistrationError::EmptyCategories);
    }
    Ok(())
}

/// Everything that must hold before a request is sent
pub fn validate_ready_to_submit(state: &WizardState) -> RegistrationResult<()> {
    validate_basic_info(state)?;
    validate_categories(state)
}

/// Inline message for a given field, if the current error targets it
pub fn field_error(state: &WizardState, field: &str) -> Option<String> {
    match &state.validation_error {
        Some(RegistrationError::Validation { field: failed, message }) if *failed == field => {
            Some(message.clone())
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(mode: Mode) -> WizardState {
        let mut state = WizardState::default();
        state.set_mode(mode);
        state.credentials = Credentials {
            email: "ana@example.org".to_string(),
            password: "hunter22".to_string(),
            name: "Ana".to_string(),
        };
        state
    }

    #[test]
    fn test_validate_basic_info_complete() {
        assert!(validate_basic_info(&filled(Mode::Login)).is_ok());
        assert!(validate_basic_info(&filled(Mode::Register)).is_ok());
    }

    #[test]
    fn test_name_required_only_for_register() {
        let mut state = filled(Mode::Login);
        state.credentials.name = "  ".to_string();
        assert!(validate_basic_info(&state).is_ok());

        state.set_mode(Mode::Register);
        assert_eq!(
            validate_basic_info(&state),
            Err(RegistrationError::validation("name", "Please enter your name"))
        );
    }

    #[test]
    fn test_first_failing_field_is_reported() {
        let mut state = WizardState::default();
        state.set_mode(Mode::Register);

        match validate_basic_info(&state) {
            Err(RegistrationError::Validation { field, .. }) => assert_eq!(field, "name"),
            other => panic!("expected name error, got {:?}", other),
        }

        state.credentials.name = "Ana".to_string();
        state.credentials.email = "not-an-email".to_string();
        match validate_basic_info(&state) {
            Err(RegistrationError::Validation { field, .. }) => assert_eq!(field, "email"),
            other => panic!("expected email error, got {:?}", other),
        }

        state.credentials.email = "ana@example.org".to_string();
        match validate_basic_info(&state) {
            Err(RegistrationError::Validation { field, .. }) => assert_eq!(field, "password"),
            other => panic!("expected password error, got {:?}", other),
        }
    }

    #[test]
    fn test_categories_required_for_migrant_and_helper() {
        let mut state = filled(Mode::Register);
        assert_eq!(validate_categories(&state), Err(RegistrationError::EmptyCategories));

        state.select_role(Role::Volunteer);
        assert!(validate_categories(&state).is_ok());

        state.select_role(Role::Helper);
        state.toggle_category(CategoryCode::Transport);
        assert!(validate_categories(&state).is_ok());
    }

    #[test]
    fn test_field_error_lookup() {
        let mut state = WizardState::default();
        state.validation_error = Some(RegistrationError::validation("email", "Please enter your email"));
        assert_eq!(
            field_error(&state, "email").as_deref(),
            Some("Please enter your email")
        );
        assert_eq!(field_error(&state, "password"), None);
    }
}
