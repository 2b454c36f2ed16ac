//! Main App component

use leptos::prelude::*;

use crate::components::alerts_panel::AlertsPanel;
use crate::components::logs_table::LogsTable;
use crate::components::stats_bar::StatsBar;
use crate::components::zone_grid::ZoneGrid;
use crate::session;

/// Root application component.
///
/// Gates on the stored session: without one the browser is sent back to the
/// login page. With one, renders the dashboard sections, all keyed on a
/// shared refresh counter so the manual refresh button reloads everything.
#[component]
pub fn App() -> impl IntoView {
    match session::current_session() {
        None => {
            session::redirect_to_login();
            view! { <p>"Redirecting to login..."</p> }.into_any()
        }
        Some(user) => {
            let refresh = RwSignal::new(0u32);
            let responder = user.name.clone();
            let user_info = format!("Welcome, {} ({})", user.name, user.role);

            view! {
                <main style="font-family: system-ui, sans-serif; max-width: 960px; margin: 0 auto; padding: 1rem;">
                    <header style="display: flex; justify-content: space-between; align-items: center;">
                        <div>
                            <h1>"CrowdGuard Dashboard"</h1>
                            <p style="color: #6c757d;">{user_info}</p>
                        </div>
                        <div style="display: flex; gap: 0.5rem;">
                            <button on:click=move |_| refresh.update(|n| *n += 1)>
                                "Refresh Data"
                            </button>
                            <button on:click=move |_| session::logout()>
                                "Logout"
                            </button>
                        </div>
                    </header>
                    <StatsBar refresh=refresh />
                    <ZoneGrid refresh=refresh />
                    <AlertsPanel refresh=refresh responder=responder />
                    <LogsTable refresh=refresh />
                </main>
            }
            .into_any()
        }
    }
}
