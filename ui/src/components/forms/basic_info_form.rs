use dioxus::prelude::*;

use crate::components::forms::{ProfessionalProfileForm, RoleSelector};
use crate::components::input::{InputType, ValidatedInput, ValidationFeedback};
use crate::registration::*;

#[derive(Props, PartialEq, Clone)]
pub struct BasicInfoFormProps {
    pub state: Signal<WizardState>,
    pub dispatch: EventHandler<WizardAction>,
    pub on_advance: EventHandler<()>,
}

/// Step 1: credentials, role and (for volunteers) the professional profile
#[component]
pub fn BasicInfoForm(props: BasicInfoFormProps) -> Element {
    let state = props.state;
    let dispatch = props.dispatch;
    let on_advance = props.on_advance;

    let current = state();
    let is_register = current.is_register();
    let in_flight = current.submission_in_flight;
    let name_error = field_error(&current, "name");
    let email_error = field_error(&current, "email");
    let password_error = field_error(&current, "password");

    let submit_label = if in_flight {
        "Loading..."
    } else if !is_register {
        "Log in"
    } else if current.role.requires_categories() {
        "Next"
    } else {
        "Create account"
    };

    rsx! {
        div {
            class: "registration-form form-1",
            "data-testid": "auth-form",

            h2 {
                class: "form-title",
                if is_register { "Create account" } else { "Log in" }
            }

            if is_register {
                div {
                    class: "input-section",
                    label {
                        class: "input-label",
                        r#for: "name",
                        "Name:"
                    }
                    ValidatedInput {
                        id: "name".to_string(),
                        value: current.credentials.name.clone(),
                        input_type: InputType::Text,
                        has_error: name_error.is_some(),
                        disabled: in_flight,
                        on_change: move |value: String| {
                            dispatch.call(WizardAction::SetName(value));
                        }
                    }
                    ValidationFeedback { message: name_error.clone() }
                }
            }

            div {
                class: "input-section",
                label {
                    class: "input-label",
                    r#for: "email",
                    "Email:"
                }
                ValidatedInput {
                    id: "email".to_string(),
                    value: current.credentials.email.clone(),
                    input_type: InputType::Email,
                    has_error: email_error.is_some(),
                    disabled: in_flight,
                    on_change: move |value: String| {
                        dispatch.call(WizardAction::SetEmail(value));
                    }
                }
                ValidationFeedback { message: email_error.clone() }
            }

            div {
                class: "input-section",
                label {
                    class: "input-label",
                    r#for: "password",
                    "Password:"
                }
                ValidatedInput {
                    id: "password".to_string(),
                    value: current.credentials.password.clone(),
                    input_type: InputType::Password,
                    has_error: password_error.is_some(),
                    disabled: in_flight,
                    on_change: move |value: String| {
                        dispatch.call(WizardAction::SetPassword(value));
                    }
                }
                ValidationFeedback { message: password_error.clone() }
            }

            if is_register {
                RoleSelector {
                    selected: current.role,
                    disabled: in_flight,
                    on_select: move |role: Role| {
                        dispatch.call(WizardAction::SelectRole(role));
                    }
                }
            }

            if current.should_show_profile() {
                ProfessionalProfileForm {
                    state: state,
                    dispatch: dispatch
                }
            }

            div {
                class: "button-section",
                button {
                    class: "primary-button",
                    r#type: "button",
                    "data-testid": "submit-button",
                    disabled: in_flight,
                    onclick: move |_| on_advance.call(()),
                    "{submit_label}"
                }
            }

            div {
                class: "mode-toggle",
                button {
                    class: "link-button",
                    r#type: "button",
                    "data-testid": "toggle-auth-mode",
                    disabled: in_flight,
                    onclick: move |_| dispatch.call(WizardAction::ToggleMode),
                    if is_register { "Already have an account? Log in" } else { "No account yet? Sign up" }
                }
            }
        }
    }
}
