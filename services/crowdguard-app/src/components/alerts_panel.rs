//! Alerts panel with lifecycle actions

use cg_client::view::{format_timestamp, next_action, open_alerts, severity_palette, status_palette};
use cg_client::{Alert, AlertUpdate};
use leptos::ev::MouseEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::badge_style;

/// Fetches alerts, shows everything not yet resolved, and offers the next
/// lifecycle action; a successful update reloads every dashboard section.
#[component]
pub fn AlertsPanel(refresh: RwSignal<u32>, responder: String) -> impl IntoView {
    let alerts = LocalResource::new(move || {
        refresh.track();
        async move {
            match api::fetch_alerts().await {
                Ok(alerts) => open_alerts(alerts),
                Err(e) => {
                    leptos::logging::error!("Error loading alerts: {}", e);
                    Vec::new()
                }
            }
        }
    });

    view! {
        <section>
            <h2>"Alerts"</h2>
            <Suspense fallback=move || view! { <p>"Loading alerts..."</p> }>
                {move || {
                    alerts.get().map(|data| {
                        if data.is_empty() {
                            view! { <p>"No active alerts"</p> }.into_any()
                        } else {
                            let items = data
                                .into_iter()
                                .map(|a| {
                                    let responder = responder.clone();
                                    view! { <AlertItem alert=a refresh=refresh responder=responder /> }
                                })
                                .collect::<Vec<_>>();
                            view! { <div>{items}</div> }.into_any()
                        }
                    })
                }}
            </Suspense>
        </section>
    }
}

/// One alert row with its badges and, depending on lifecycle stage, an
/// Acknowledge or Resolve button
#[component]
fn AlertItem(alert: Alert, refresh: RwSignal<u32>, responder: String) -> impl IntoView {
    let action = next_action(alert.status);

    let (severity_color, severity_bg) = severity_palette(alert.severity);
    let severity_style = badge_style(severity_color, severity_bg);
    let (status_color, status_bg) = status_palette(alert.status);
    let status_style = badge_style(status_color, status_bg);

    let title = format!("Alert {} - Zone {}", alert.alert_id, alert.zone_id);
    let time = format!("Time: {}", format_timestamp(&alert.time));
    let severity_label = alert.severity.to_string();
    let status_label = alert.status.to_string();
    let responder_line = alert.responder.clone().map(|r| format!("Responder: {}", r));
    let alert_id = alert.alert_id.clone();

    let on_action = move |_: MouseEvent| {
        let Some(action) = action else { return };
        let update = AlertUpdate {
            status: action.target_status(),
            responder: Some(responder.clone()),
        };
        let alert_id = alert_id.clone();
        spawn_local(async move {
            match api::update_alert(&alert_id, &update).await {
                Ok(()) => refresh.update(|n| *n += 1),
                Err(e) => leptos::logging::error!("Error updating alert: {}", e),
            }
        });
    };

    view! {
        <div style="border: 1px solid #dee2e6; border-radius: 0.25rem; padding: 0.75rem; margin-bottom: 0.5rem;">
            <div style="display: flex; justify-content: space-between; align-items: center;">
                <div style="font-weight: 600;">{title}</div>
                <span style=status_style>{status_label}</span>
            </div>
            <div style="font-size: 0.85em; color: #6c757d;">
                <div>
                    "Severity: "
                    <span style=severity_style>{severity_label}</span>
                </div>
                <div>{time}</div>
                {responder_line.map(|line| view! { <div>{line}</div> })}
            </div>
            {action.map(move |a| {
                view! {
                    <button style="margin-top: 0.5rem;" on:click=on_action>
                        {a.label()}
                    </button>
                }
            })}
        </div>
    }
}
