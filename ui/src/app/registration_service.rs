use dioxus::prelude::*;

use crate::components::display::NoticeBanner;
use crate::components::forms::{BasicInfoForm, CategorySelectionForm};
use crate::registration::{execute_submission, Advance, Retreat, Role, WizardAction, WizardState};
use crate::services::client::{AuthClient, BrowserSession, UserRecord};
use crate::services::config::ClientConfig;
use crate::{console_info, console_warn};

#[derive(Props, PartialEq, Clone)]
pub struct RegistrationServiceProps {
    /// Role picked before entering the wizard, opens it in register mode
    #[props(!optional)]
    pub initial_role: Option<Role>,
    /// Back pressed on the first step
    pub on_exit: EventHandler<()>,
    /// Session stored, the caller decides where to go next
    pub on_authenticated: EventHandler<UserRecord>,
}

/// Sends the wizard request in the background and records the outcome
fn start_submission(
    mut state: Signal<WizardState>,
    config: ClientConfig,
    on_authenticated: EventHandler<UserRecord>,
) {
    let request = match state.with_mut(|s| s.begin_submission()) {
        Ok(request) => request,
        Err(e) => {
            console_warn!("[Registration] Submission not started: {}", e);
            return;
        }
    };

    spawn(async move {
        let client = AuthClient::new(config);
        let session = BrowserSession::default();

        let result = execute_submission(&client, &session, &request).await;
        let user = result.as_ref().ok().map(|response| response.user.clone());

        state.with_mut(|s| s.reduce_in_place(WizardAction::SubmissionFinished(result)));

        if let Some(user) = user {
            console_info!("[Registration] Authenticated user {} ({})", user.id, user.role);
            on_authenticated.call(user);
        }
    });
}

#[component]
pub fn RegistrationService(props: RegistrationServiceProps) -> Element {
    let initial_role = props.initial_role;
    let on_exit = props.on_exit;
    let on_authenticated = props.on_authenticated;

    // Consolidated state management
    let config = use_hook(ClientConfig::from_build_env);
    let mut state = use_signal({
        let config = config.clone();
        move || WizardState::for_entry(initial_role, &config)
    });

    // Dispatch function for actions - using in-place reduction to preserve Dioxus Signal reactivity
    let dispatch = EventHandler::new(move |action: WizardAction| {
        state.with_mut(|s| s.reduce_in_place(action));
    });

    let on_advance = EventHandler::new(move |_: ()| {
        match state.with_mut(|s| s.advance()) {
            Ok(Advance::Submit) => start_submission(state, config.clone(), on_authenticated),
            Ok(Advance::Step(step)) => {
                console_info!("[Registration] Moved to step {}", step.number());
            }
            Err(e) => {
                console_info!("[Registration] Step blocked: {}", e);
            }
        }
    });

    let on_retreat = EventHandler::new(move |_: ()| {
        if state.with_mut(|s| s.retreat()) == Retreat::ExitWizard {
            on_exit.call(());
        }
    });

    let current = state();
    let step_label = if current.is_register() && current.role.requires_categories() {
        format!("Step {} of 2", current.step_number())
    } else {
        String::new()
    };

    rsx! {
        div {
            class: "registration-service-container",

            div {
                class: "title-container",
                button {
                    class: "back-button",
                    r#type: "button",
                    "data-testid": "back-button",
                    onclick: move |_| on_retreat.call(()),
                    "←"
                }
                span {
                    class: "step-indicator",
                    "{step_label}"
                }
            }

            NoticeBanner {
                notice: current.notice.clone(),
                on_dismiss: move |_| dispatch.call(WizardAction::DismissNotice)
            }

            if current.should_show_categories() {
                CategorySelectionForm {
                    state: state,
                    dispatch: dispatch,
                    on_advance: on_advance,
                    on_retreat: on_retreat
                }
            } else {
                BasicInfoForm {
                    state: state,
                    dispatch: dispatch,
                    on_advance: on_advance
                }
            }
        }
    }
}
