use dioxus::prelude::*;

use crate::components::display::{LoadingIndicator, StatCard};
use crate::console_error;
use crate::services::client::{AdminStats, AuthClient};

#[derive(Props, PartialEq, Clone)]
pub struct AdminDashboardProps {
    /// Bearer token of the signed-in admin
    pub token: String,
}

/// Three counters from the admin stats endpoint; failures render as zeros
#[component]
pub fn AdminDashboard(props: AdminDashboardProps) -> Element {
    let token = props.token;

    let stats = use_resource(move || {
        let token = token.clone();
        async move {
            match AuthClient::default().admin_stats(&token).await {
                Ok(stats) => stats,
                Err(e) => {
                    console_error!("[Admin] Error fetching stats: {}", e);
                    AdminStats::default()
                }
            }
        }
    });

    rsx! {
        div {
            class: "admin-dashboard",
            "data-testid": "admin-dashboard",

            h1 {
                class: "dashboard-title",
                "Admin Dashboard"
            }

            match &*stats.read_unchecked() {
                Some(stats) => rsx! {
                    div {
                        class: "stat-grid",
                        StatCard { icon: "👥", label: "Total Users", value: stats.total_users, accent: "accent-blue" }
                        StatCard { icon: "📝", label: "Total Posts", value: stats.total_posts, accent: "accent-green" }
                        StatCard { icon: "🔗", label: "Total Matches", value: stats.total_matches, accent: "accent-purple" }
                    }
                },
                None => rsx! {
                    LoadingIndicator { message: "Loading statistics...".to_string() }
                },
            }
        }
    }
}
