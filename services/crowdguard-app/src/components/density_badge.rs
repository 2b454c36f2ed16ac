//! Density badge component

use cg_client::view::density_palette;
use cg_client::DensityLevel;
use leptos::prelude::*;

use crate::components::badge_style;

/// A colored badge showing a zone's congestion level
#[component]
pub fn DensityBadge(level: DensityLevel) -> impl IntoView {
    let (color, bg) = density_palette(level);
    let style = badge_style(color, bg);

    view! {
        <span style=style>{level.to_string()}</span>
    }
}
