use dioxus::prelude::*;

use crate::registration::{Notice, NoticeKind};

#[derive(Props, PartialEq, Clone)]
pub struct NoticeBannerProps {
    #[props(!optional)]
    pub notice: Option<Notice>,
    pub on_dismiss: EventHandler<()>,
}

/// Transient result of the last submission
#[component]
pub fn NoticeBanner(props: NoticeBannerProps) -> Element {
    let on_dismiss = props.on_dismiss;

    let Some(notice) = props.notice else {
        return rsx! {};
    };

    let (class, marker) = match notice.kind {
        NoticeKind::Success => ("notice-banner success", "✓"),
        NoticeKind::Error => ("notice-banner error", "✗"),
    };

    rsx! {
        div {
            class: class,
            role: "alert",
            span {
                class: "notice-message",
                "{marker} {notice.message}"
            }
            button {
                class: "notice-dismiss",
                r#type: "button",
                onclick: move |_| on_dismiss.call(()),
                "×"
            }
        }
    }
}
