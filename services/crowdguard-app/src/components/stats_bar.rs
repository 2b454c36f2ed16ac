//! Aggregate stats tiles

use cg_client::view::DashboardStats;
use leptos::prelude::*;

use crate::api;

/// Fetches zone, alert, and crowd data as one group and shows the aggregate
/// numbers across the top of the dashboard
#[component]
pub fn StatsBar(refresh: RwSignal<u32>) -> impl IntoView {
    let stats = LocalResource::new(move || {
        refresh.track();
        async move {
            match api::fetch_stats_data().await {
                Ok((zones, active_alerts, readings)) => {
                    DashboardStats::compute(&zones, &active_alerts, &readings)
                }
                Err(e) => {
                    leptos::logging::error!("Error updating stats: {}", e);
                    DashboardStats::default()
                }
            }
        }
    });

    view! {
        <section style="display: flex; gap: 1rem; margin: 1rem 0;">
            <Suspense fallback=move || view! { <p>"Loading stats..."</p> }>
                {move || {
                    stats.get().map(|s| {
                        view! {
                            <StatTile label="Total Zones" value=s.total_zones />
                            <StatTile label="Active Alerts" value=s.active_alerts />
                            <StatTile label="High Density Zones" value=s.high_density_zones />
                        }
                    })
                }}
            </Suspense>
        </section>
    }
}

/// A single numeric tile
#[component]
fn StatTile(label: &'static str, value: usize) -> impl IntoView {
    view! {
        <div style="border: 1px solid #dee2e6; border-radius: 0.5rem; padding: 1rem; flex: 1; text-align: center;">
            <div style="font-size: 2rem; font-weight: 700;">{value}</div>
            <div style="color: #6c757d;">{label}</div>
        </div>
    }
}
