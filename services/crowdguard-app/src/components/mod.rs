//! Dashboard UI components

pub mod alerts_panel;
pub mod density_badge;
pub mod logs_table;
pub mod stats_bar;
pub mod zone_grid;

/// Shared inline style for the small colored badges
pub(crate) fn badge_style(color: &str, bg: &str) -> String {
    format!(
        "display: inline-block; padding: 0.25em 0.6em; border-radius: 0.25rem; \
         font-size: 0.85em; font-weight: 600; color: {}; background-color: {};",
        color, bg
    )
}
