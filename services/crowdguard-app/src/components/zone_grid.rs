//! Zone overview cards

use cg_client::view::{zone_overviews, ZoneOverview};
use leptos::prelude::*;

use crate::api;
use crate::components::density_badge::DensityBadge;

/// Fetches zones plus their latest readings and displays one card per zone
#[component]
pub fn ZoneGrid(refresh: RwSignal<u32>) -> impl IntoView {
    let zones = LocalResource::new(move || {
        refresh.track();
        async move {
            match api::fetch_zone_data().await {
                Ok((zones, readings)) => zone_overviews(zones, readings),
                Err(e) => {
                    leptos::logging::error!("Error loading zones: {}", e);
                    Vec::new()
                }
            }
        }
    });

    view! {
        <section>
            <h2>"Zones"</h2>
            <Suspense fallback=move || view! { <p>"Loading zones..."</p> }>
                {move || {
                    zones.get().map(|data| {
                        if data.is_empty() {
                            view! { <p>"No zones configured."</p> }.into_any()
                        } else {
                            view! {
                                <div style="display: grid; grid-template-columns: repeat(auto-fill, minmax(220px, 1fr)); gap: 1rem;">
                                    {data
                                        .into_iter()
                                        .map(|z| view! { <ZoneCard overview=z /> })
                                        .collect::<Vec<_>>()}
                                </div>
                            }
                            .into_any()
                        }
                    })
                }}
            </Suspense>
        </section>
    }
}

/// A single zone card with its density badge and occupancy numbers
#[component]
fn ZoneCard(overview: ZoneOverview) -> impl IntoView {
    view! {
        <div style="border: 1px solid #dee2e6; border-radius: 0.5rem; padding: 1rem;">
            <div style="display: flex; justify-content: space-between; align-items: center;">
                <div style="font-weight: 600;">{overview.location_name}</div>
                <DensityBadge level=overview.density />
            </div>
            <div style="font-size: 2rem; font-weight: 700;">{overview.people_count}</div>
            <div style="font-size: 0.85em; color: #6c757d;">
                <div>{format!("Capacity: {}", overview.capacity)}</div>
                <div>{format!("Occupancy: {}%", overview.occupancy)}</div>
                <div>{format!("Zone ID: {}", overview.zone_id)}</div>
            </div>
        </div>
    }
}
