use dioxus::prelude::*;

#[derive(Props, PartialEq, Clone)]
pub struct ValidationFeedbackProps {
    #[props(!optional)]
    pub message: Option<String>,
}

/// Inline error under a field; renders nothing when there is no message
#[component]
pub fn ValidationFeedback(props: ValidationFeedbackProps) -> Element {
    match props.message {
        Some(message) => rsx! {
            div {
                class: "validation-feedback invalid",
                style: "color: #ef4444; background-color: #fef2f2; border: 1px solid #ef4444; padding: 8px; border-radius: 4px; margin-top: 4px;",
                "⚠ {message}"
            }
        },
        None => rsx! {},
    }
}
