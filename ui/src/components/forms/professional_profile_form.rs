use dioxus::prelude::*;

use crate::components::input::{InputType, ValidatedInput, ValidatedTextArea};
use crate::registration::*;

#[derive(Props, PartialEq, Clone)]
pub struct ProfessionalProfileFormProps {
    pub state: Signal<WizardState>,
    pub dispatch: EventHandler<WizardAction>,
}

/// Volunteer-only fields shown on step 1
#[component]
pub fn ProfessionalProfileForm(props: ProfessionalProfileFormProps) -> Element {
    let state = props.state;
    let dispatch = props.dispatch;
    let profile = state().profile;
    let disabled = state().submission_in_flight;
    let selected_area = profile.area;

    rsx! {
        div {
            class: "professional-profile",

            h3 {
                class: "form-subtitle",
                "Professional Information"
            }

            div {
                class: "input-section",
                label {
                    class: "input-label",
                    r#for: "professional-area",
                    "Area of practice:"
                }
                select {
                    id: "professional-area",
                    class: "input-field",
                    value: "{selected_area.as_str()}",
                    disabled: disabled,
                    onchange: move |evt| {
                        if let Ok(area) = evt.value().parse::<ProfessionalArea>() {
                            dispatch.call(WizardAction::SetProfessionalArea(area));
                        }
                    },
                    for area in ProfessionalArea::ALL {
                        option {
                            key: "{area.as_str()}",
                            value: "{area.as_str()}",
                            selected: area == selected_area,
                            "{area.icon()} {area.label()}"
                        }
                    }
                }
            }

            div {
                class: "input-section",
                label {
                    class: "input-label",
                    r#for: "professional-specialties",
                    "Specialties (comma separated):"
                }
                ValidatedInput {
                    id: "professional-specialties".to_string(),
                    value: profile.specialties,
                    placeholder: "e.g. Family Law, Asylum, Immigration".to_string(),
                    input_type: InputType::Text,
                    disabled: disabled,
                    on_change: move |value: String| {
                        dispatch.call(WizardAction::SetSpecialties(value));
                    }
                }
            }

            div {
                class: "input-section",
                label {
                    class: "input-label",
                    r#for: "professional-availability",
                    "Availability:"
                }
                ValidatedInput {
                    id: "professional-availability".to_string(),
                    value: profile.availability,
                    placeholder: "e.g. Weekends, Evenings".to_string(),
                    input_type: InputType::Text,
                    disabled: disabled,
                    on_change: move |value: String| {
                        dispatch.call(WizardAction::SetAvailability(value));
                    }
                }
            }

            div {
                class: "input-section",
                label {
                    class: "input-label",
                    r#for: "professional-experience",
                    "Experience:"
                }
                ValidatedTextArea {
                    id: "professional-experience".to_string(),
                    value: profile.experience,
                    placeholder: "Describe your professional experience...".to_string(),
                    disabled: disabled,
                    on_change: move |value: String| {
                        dispatch.call(WizardAction::SetExperience(value));
                    }
                }
            }
        }
    }
}
