use dioxus::prelude::*;
use ui::registration::Role;
use ui::services::client::{BrowserSession, SessionSink, StoredSession, UserRecord};
use ui::{AdminDashboard, ProfilePage, RegistrationService};

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        Router::<Route> {}
    }
}

#[derive(Clone, Routable, Debug, PartialEq)]
enum Route {
    #[route("/")]
    Home {},
    #[route("/register/:role")]
    Register { role: String },
    #[route("/profile")]
    Profile {},
    #[route("/admin")]
    Admin {},
}

/// Where a signed-in user lands
fn route_for(user: &UserRecord) -> Route {
    if user.is_admin() {
        Route::Admin {}
    } else {
        Route::Profile {}
    }
}

fn stored_session() -> Option<StoredSession> {
    BrowserSession::default().current().ok().flatten()
}

#[component]
fn Home() -> Element {
    let nav = navigator();
    let existing = use_hook(stored_session);
    let signed_in = existing.is_some();

    // Skip the wizard when a session is already stored
    use_effect(move || {
        if let Some(session) = &existing {
            nav.replace(route_for(&session.user));
        }
    });

    rsx! {
        div {
            if !signed_in {
                RegistrationService {
                    initial_role: None,
                    on_exit: move |_| nav.go_back(),
                    on_authenticated: move |user: UserRecord| {
                        nav.replace(route_for(&user));
                    }
                }
            }
        }
    }
}

#[component]
fn Register(role: String) -> Element {
    let nav = navigator();
    // Unknown roles fall back to the plain wizard
    let initial_role = role.parse::<Role>().ok();

    rsx! {
        div {
            RegistrationService {
                key: "{role}",
                initial_role: initial_role,
                on_exit: move |_| {
                    nav.push(Route::Home {});
                },
                on_authenticated: move |user: UserRecord| {
                    nav.replace(route_for(&user));
                }
            }
        }
    }
}

#[component]
fn Profile() -> Element {
    let nav = navigator();

    match stored_session() {
        Some(session) => rsx! {
            ProfilePage {
                user: session.user,
                on_signed_out: move |_| {
                    nav.replace(Route::Home {});
                }
            }
        },
        None => rsx! {
            SignInPrompt { message: "Please sign in to see your profile." }
        },
    }
}

#[component]
fn Admin() -> Element {
    let nav = navigator();

    match stored_session() {
        Some(session) if session.user.is_admin() => rsx! {
            AdminDashboard { token: session.token }
            button {
                class: "link-button",
                r#type: "button",
                onclick: move |_| {
                    nav.push(Route::Profile {});
                },
                "Profile"
            }
        },
        _ => rsx! {
            SignInPrompt { message: "Admin access required." }
        },
    }
}

#[component]
fn SignInPrompt(message: &'static str) -> Element {
    let nav = navigator();

    rsx! {
        div {
            class: "sign-in-prompt",
            p { "{message}" }
            button {
                class: "primary-button",
                r#type: "button",
                onclick: move |_| {
                    nav.push(Route::Home {});
                },
                "Back to sign in"
            }
        }
    }
}
