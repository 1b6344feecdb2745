use dioxus::prelude::*;

use crate::registration::Role;

#[derive(Props, PartialEq, Clone)]
pub struct RoleSelectorProps {
    pub selected: Role,
    pub disabled: bool,
    pub on_select: EventHandler<Role>,
}

#[component]
pub fn RoleSelector(props: RoleSelectorProps) -> Element {
    let selected = props.selected;
    let disabled = props.disabled;
    let on_select = props.on_select;

    rsx! {
        div {
            class: "input-section",
            label {
                class: "input-label",
                "You are:"
            }
            div {
                class: "role-selector",
                for role in Role::ALL {
                    button {
                        key: "{role.as_str()}",
                        r#type: "button",
                        "data-testid": "role-{role.as_str()}",
                        class: if role == selected { "role-option selected" } else { "role-option" },
                        disabled: disabled,
                        onclick: move |_| on_select.call(role),
                        "{role.label()}"
                    }
                }
            }
        }
    }
}
