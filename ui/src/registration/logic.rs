//! Step transitions of the registration wizard.
//!
//! Register mode has two states, `BasicInfo` and `Categories`; the second
//! is only reachable for roles with a category catalog. Login mode is a
//! single step that goes straight to submission.

use tracing::{debug, info};

use crate::registration::form_validation::{validate_basic_info, validate_categories};
use crate::registration::types::*;
use crate::services::errors::RegistrationResult;

/// Result of a successful `advance()`
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Advance {
    /// Moved to another step
    Step(WizardStep),
    /// Terminal: the caller should submit
    Submit,
}

/// Result of `retreat()`
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Retreat {
    Step(WizardStep),
    /// Already on the first step; the caller should leave the wizard
    ExitWizard,
}

impl WizardState {
    /// Moves forward one step, or reports that the wizard is ready to submit.
    ///
    /// A validation failure leaves step, role and categories untouched and is
    /// also kept in `validation_error` for inline display.
    pub fn advance(&mut self) -> RegistrationResult<Advance> {
        let outcome = self.next_transition();
        match &outcome {
            Ok(advance) => {
                self.validation_error = None;
                if let Advance::Step(step) = advance {
                    info!("Wizard step {:?} -> {:?}", self.current_step, step);
                    self.current_step = *step;
                }
            }
            Err(error) => {
                debug!("Wizard advance blocked: {}", error);
                self.validation_error = Some(error.clone());
            }
        }
        outcome
    }

    fn next_transition(&self) -> RegistrationResult<Advance> {
        match (self.mode, self.current_step) {
            (Mode::Login, _) => {
                validate_basic_info(self)?;
                Ok(Advance::Submit)
            }
            (Mode::Register, WizardStep::BasicInfo) => {
                validate_basic_info(self)?;
                if self.role.requires_categories() {
                    Ok(Advance::Step(WizardStep::Categories))
                } else {
                    Ok(Advance::Submit)
                }
            }
            (Mode::Register, WizardStep::Categories) => {
                validate_categories(self)?;
                Ok(Advance::Submit)
            }
        }
    }

    /// Moves back one step; selections made on later steps are kept
    pub fn retreat(&mut self) -> Retreat {
        match self.current_step {
            WizardStep::BasicInfo => Retreat::ExitWizard,
            WizardStep::Categories => {
                self.current_step = WizardStep::BasicInfo;
                self.validation_error = None;
                Retreat::Step(WizardStep::BasicInfo)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::errors::RegistrationError;

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

    #[test]
    fn test_migrant_and_helper_go_to_categories() {
        for role in [Role::Migrant, Role::Helper] {
            let mut state = register_state(role);
            assert_eq!(state.advance(), Ok(Advance::Step(WizardStep::Categories)));
            assert_eq!(state.step_number(), 2);
        }
    }

    #[test]
    fn test_volunteer_submits_from_first_step() {
        let mut state = register_state(Role::Volunteer);
        assert_eq!(state.advance(), Ok(Advance::Submit));
        assert_eq!(state.step_number(), 1);
    }

    #[test]
    fn test_login_submits_from_first_step() {
        let mut state = register_state(Role::Migrant);
        state.set_mode(Mode::Login);
        state.credentials.name.clear();
        assert_eq!(state.advance(), Ok(Advance::Submit));
        assert_eq!(state.step_number(), 1);
    }

    #[test]
    fn test_empty_categories_block_submission() {
        let mut state = register_state(Role::Helper);
        state.advance().unwrap();

        assert_eq!(state.advance(), Err(RegistrationError::EmptyCategories));
        assert_eq!(state.current_step, WizardStep::Categories);
        assert_eq!(state.validation_error, Some(RegistrationError::EmptyCategories));

        // Selecting a category clears the inline error
        state.toggle_category(CategoryCode::Legal);
        assert_eq!(state.validation_error, None);
        assert_eq!(state.advance(), Ok(Advance::Submit));
    }

    #[test]
    fn test_invalid_basic_info_does_not_move() {
        let mut state = register_state(Role::Migrant);
        state.toggle_category(CategoryCode::Food);
        state.credentials.password = " ".to_string();

        let result = state.advance();
        assert!(matches!(
            result,
            Err(RegistrationError::Validation { field: "password", .. })
        ));
        assert_eq!(state.current_step, WizardStep::BasicInfo);
        assert_eq!(state.role, Role::Migrant);
        assert!(state.categories.contains(CategoryCode::Food));
    }

    #[test]
    fn test_retreat_preserves_categories() {
        let mut state = register_state(Role::Migrant);
        state.advance().unwrap();
        state.toggle_category(CategoryCode::Food);
        state.toggle_category(CategoryCode::Health);

        assert_eq!(state.retreat(), Retreat::Step(WizardStep::BasicInfo));
        assert_eq!(state.step_number(), 1);
        assert_eq!(
            state.categories.codes(),
            &[CategoryCode::Food, CategoryCode::Health]
        );
    }

    #[test]
    fn test_role_change_on_category_step_returns_to_basic_info() {
        let mut state = register_state(Role::Migrant);
        state.advance().unwrap();
        state.toggle_category(CategoryCode::Food);

        state.reduce_in_place(WizardAction::SelectRole(Role::Volunteer));
        assert_eq!(state.current_step, WizardStep::BasicInfo);
        assert_eq!(state.role, Role::Volunteer);
        assert!(state.categories.is_empty());

        // Switching to helper means going through step 2 again
        state.reduce_in_place(WizardAction::SelectRole(Role::Helper));
        assert_eq!(state.advance(), Ok(Advance::Step(WizardStep::Categories)));
        assert_eq!(state.advance(), Err(RegistrationError::EmptyCategories));
    }

    #[test]
    fn test_retreat_from_first_step_exits() {
        let mut state = register_state(Role::Volunteer);
        let before = state.clone();
        assert_eq!(state.retreat(), Retreat::ExitWizard);
        assert_eq!(state, before);
    }

    #[test]
    fn test_mode_round_trip_resets_wizard() {
        let mut state = register_state(Role::Migrant);
        state.advance().unwrap();
        state.toggle_category(CategoryCode::Social);

        state.set_mode(Mode::Login);
        state.set_mode(Mode::Register);
        assert_eq!(state.step_number(), 1);
        assert!(state.categories.is_empty());
    }
}
