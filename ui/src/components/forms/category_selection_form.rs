use dioxus::prelude::*;

use crate::components::input::ValidationFeedback;
use crate::registration::*;

#[derive(Props, PartialEq, Clone)]
pub struct CategorySelectionFormProps {
    pub state: Signal<WizardState>,
    pub dispatch: EventHandler<WizardAction>,
    pub on_advance: EventHandler<()>,
    pub on_retreat: EventHandler<()>,
}

/// Step 2: needs for migrants, offered help areas for helpers
#[component]
pub fn CategorySelectionForm(props: CategorySelectionFormProps) -> Element {
    let state = props.state;
    let dispatch = props.dispatch;
    let on_advance = props.on_advance;
    let on_retreat = props.on_retreat;

    let current = state();
    let catalog = current.active_catalog().unwrap_or_default();
    let in_flight = current.submission_in_flight;
    let error = match &current.validation_error {
        Some(error @ crate::services::errors::RegistrationError::EmptyCategories) => {
            Some(error.user_message())
        }
        _ => None,
    };

    rsx! {
        div {
            class: "registration-form form-2",

            h2 {
                class: "form-title",
                "Step 2: {current.role.category_prompt()}"
            }

            p {
                class: "form-hint",
                "Selected: {current.categories.len()}"
            }

            div {
                class: "category-grid",
                for code in catalog.iter().copied() {
                    button {
                        key: "{code.as_str()}",
                        r#type: "button",
                        "data-testid": "category-{code.as_str()}",
                        class: if current.categories.contains(code) { "category-option selected" } else { "category-option" },
                        disabled: in_flight,
                        onclick: move |_| dispatch.call(WizardAction::ToggleCategory(code)),
                        span { class: "category-icon", "{code.icon()}" }
                        span { class: "category-label", "{code.label()}" }
                    }
                }
            }

            ValidationFeedback { message: error }

            div {
                class: "button-section",
                button {
                    class: "secondary-button",
                    r#type: "button",
                    disabled: in_flight,
                    onclick: move |_| on_retreat.call(()),
                    "Back"
                }
                button {
                    class: "primary-button",
                    r#type: "button",
                    "data-testid": "submit-button",
                    disabled: in_flight,
                    onclick: move |_| on_advance.call(()),
                    if in_flight { "Loading..." } else { "Create account" }
                }
            }
        }
    }
}
