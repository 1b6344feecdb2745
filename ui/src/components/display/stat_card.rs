use dioxus::prelude::*;

#[derive(Props, PartialEq, Clone)]
pub struct StatCardProps {
    pub icon: &'static str,
    pub label: &'static str,
    pub value: u64,
    pub accent: &'static str,
}

#[component]
pub fn StatCard(props: StatCardProps) -> Element {
    let slug = props.label.to_lowercase().replace(' ', "-");

    rsx! {
        div {
            class: "stat-card",
            "data-testid": "stat-{slug}",
            div {
                class: "stat-icon {props.accent}",
                "{props.icon}"
            }
            p { class: "stat-label", "{props.label}" }
            p { class: "stat-value", "{props.value}" }
        }
    }
}
