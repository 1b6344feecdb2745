use dioxus::prelude::*;

use crate::registration::sign_out;
use crate::services::client::{BrowserSession, UserRecord};
use crate::{console_error, console_info};

#[derive(Props, PartialEq, Clone)]
pub struct ProfilePageProps {
    pub user: UserRecord,
    /// Called once the stored session has been removed
    pub on_signed_out: EventHandler<()>,
}

/// Signed-in user's details with a logout button
#[component]
pub fn ProfilePage(props: ProfilePageProps) -> Element {
    let user = props.user;
    let on_signed_out = props.on_signed_out;
    let role_title = user.role_title();
    let bio = user.bio.clone().filter(|bio| !bio.trim().is_empty());

    let handle_logout = move |_: MouseEvent| match sign_out(&BrowserSession::default()) {
        Ok(()) => {
            console_info!("[Profile] Signed out");
            on_signed_out.call(());
        }
        Err(e) => {
            console_error!("[Profile] Sign out failed: {}", e);
        }
    };

    rsx! {
        div {
            class: "profile-page",
            "data-testid": "profile-page",

            h1 {
                class: "form-title",
                "Profile"
            }

            div {
                class: "profile-header",
                h2 {
                    "data-testid": "user-name",
                    "{user.name}"
                }
                p {
                    class: "profile-role",
                    "data-testid": "user-role",
                    "{role_title}"
                }
            }

            div {
                class: "profile-details",
                p {
                    "data-testid": "user-email",
                    "✉ {user.email}"
                }
                if !user.languages.is_empty() {
                    div {
                        class: "profile-languages",
                        for lang in user.languages.iter() {
                            span {
                                key: "{lang}",
                                class: "language-chip",
                                "{lang.to_uppercase()}"
                            }
                        }
                    }
                }
            }

            {bio.map(|bio| rsx! {
                div {
                    class: "profile-bio",
                    h3 { class: "form-subtitle", "About" }
                    p { "{bio}" }
                }
            })}

            button {
                class: "secondary-button logout-button",
                r#type: "button",
                "data-testid": "logout-button",
                onclick: handle_logout,
                "Log out"
            }
        }
    }
}
