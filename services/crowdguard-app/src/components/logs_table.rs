//! Audit log table

use cg_client::view::format_timestamp;
use leptos::prelude::*;

use crate::api;

/// Fetches the latest audit entries and displays them in a table
#[component]
pub fn LogsTable(refresh: RwSignal<u32>) -> impl IntoView {
    let logs = LocalResource::new(move || {
        refresh.track();
        async move {
            match api::fetch_logs().await {
                Ok(logs) => logs,
                Err(e) => {
                    leptos::logging::error!("Error loading logs: {}", e);
                    Vec::new()
                }
            }
        }
    });

    view! {
        <section>
            <h2>"Recent Activity"</h2>
            <Suspense fallback=move || view! { <p>"Loading logs..."</p> }>
                {move || {
                    logs.get().map(|data| {
                        if data.is_empty() {
                            view! { <p>"No logs available"</p> }.into_any()
                        } else {
                            view! {
                                <table style="width: 100%; border-collapse: collapse;">
                                    <thead>
                                        <tr style="border-bottom: 2px solid #dee2e6;">
                                            <th style="padding: 0.5rem; text-align: left;">"Time"</th>
                                            <th style="padding: 0.5rem; text-align: left;">"Action"</th>
                                            <th style="padding: 0.5rem; text-align: left;">"Performed By"</th>
                                        </tr>
                                    </thead>
                                    <tbody>
                                        {data.into_iter().map(|log| {
                                            view! {
                                                <tr style="border-bottom: 1px solid #dee2e6;">
                                                    <td style="padding: 0.5rem;">{format_timestamp(&log.timestamp)}</td>
                                                    <td style="padding: 0.5rem;">{log.action}</td>
                                                    <td style="padding: 0.5rem;">{log.performed_by}</td>
                                                </tr>
                                            }
                                        }).collect::<Vec<_>>()}
                                    </tbody>
                                </table>
                            }
                            .into_any()
                        }
                    })
                }}
            </Suspense>
        </section>
    }
}
