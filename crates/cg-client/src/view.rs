//! Pure presentation logic for the dashboard sections
//!
//! Everything here is synchronous and data-in/data-out so rendering behavior
//! can be tested without a browser.

use std::collections::HashMap;

use chrono::NaiveDateTime;

use crate::models::{Alert, AlertStatus, CrowdReading, DensityLevel, Severity, Zone};

/// One-decimal occupancy percentage, e.g. "50.0" for 50 people in a
/// 100-capacity zone. A zero-capacity zone reads 0.0.
pub fn occupancy_percent(people_count: u32, capacity: u32) -> String {
    if capacity == 0 {
        return "0.0".to_string();
    }
    format!("{:.1}", f64::from(people_count) / f64::from(capacity) * 100.0)
}

/// Index readings by zone; the last wire entry wins on duplicates
pub fn latest_by_zone(readings: Vec<CrowdReading>) -> HashMap<String, CrowdReading> {
    let mut map = HashMap::new();
    for reading in readings {
        map.insert(reading.zone_id.clone(), reading);
    }
    map
}

/// A zone joined with its latest crowd reading, ready to render
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoneOverview {
    pub zone_id: String,
    pub location_name: String,
    pub capacity: u32,
    pub people_count: u32,
    pub density: DensityLevel,
    pub occupancy: String,
}

/// Join zones with their latest readings.
///
/// Zones with no reading yet render as empty: 0 people, Low density.
pub fn zone_overviews(zones: Vec<Zone>, readings: Vec<CrowdReading>) -> Vec<ZoneOverview> {
    let latest = latest_by_zone(readings);
    zones
        .into_iter()
        .map(|zone| {
            let (people_count, density) = latest
                .get(&zone.zone_id)
                .map(|r| (r.people_count, r.density_level))
                .unwrap_or((0, DensityLevel::Low));
            ZoneOverview {
                occupancy: occupancy_percent(people_count, zone.capacity),
                zone_id: zone.zone_id,
                location_name: zone.location_name,
                capacity: zone.capacity,
                people_count,
                density,
            }
        })
        .collect()
}

/// Alerts still requiring attention: everything not yet Resolved
pub fn open_alerts(alerts: Vec<Alert>) -> Vec<Alert> {
    alerts
        .into_iter()
        .filter(|a| a.status != AlertStatus::Resolved)
        .collect()
}

/// The operator action available for an alert in its current lifecycle stage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertAction {
    Acknowledge,
    Resolve,
}

impl AlertAction {
    /// Button label
    pub fn label(&self) -> &'static str {
        match self {
            AlertAction::Acknowledge => "Acknowledge",
            AlertAction::Resolve => "Resolve",
        }
    }

    /// The status the alert moves to when the action is taken
    pub fn target_status(&self) -> AlertStatus {
        match self {
            AlertAction::Acknowledge => AlertStatus::Acknowledged,
            AlertAction::Resolve => AlertStatus::Resolved,
        }
    }
}

/// Next lifecycle action for an alert, if any
pub fn next_action(status: AlertStatus) -> Option<AlertAction> {
    match status {
        AlertStatus::Active => Some(AlertAction::Acknowledge),
        AlertStatus::Acknowledged => Some(AlertAction::Resolve),
        AlertStatus::Resolved => None,
    }
}

/// Aggregate numbers shown in the stats bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DashboardStats {
    pub total_zones: usize,
    pub active_alerts: usize,
    pub high_density_zones: usize,
}

impl DashboardStats {
    pub fn compute(zones: &[Zone], active_alerts: &[Alert], readings: &[CrowdReading]) -> Self {
        Self {
            total_zones: zones.len(),
            active_alerts: active_alerts.len(),
            high_density_zones: readings
                .iter()
                .filter(|r| r.density_level == DensityLevel::High)
                .count(),
        }
    }
}

/// Render a backend timestamp for display.
///
/// The backend emits ISO-8601 without a UTC offset; anything unparseable is
/// shown as-is.
pub fn format_timestamp(raw: &str) -> String {
    match raw.parse::<NaiveDateTime>() {
        Ok(ts) => ts.format("%Y-%m-%d %H:%M:%S").to_string(),
        Err(e) => {
            tracing::debug!("Unparseable timestamp {:?}: {}", raw, e);
            raw.to_string()
        }
    }
}

/// (text, background) colors for a density badge
pub fn density_palette(level: DensityLevel) -> (&'static str, &'static str) {
    match level {
        DensityLevel::Low => ("#155724", "#d4edda"),
        DensityLevel::Medium => ("#856404", "#fff3cd"),
        DensityLevel::High => ("#721c24", "#f8d7da"),
        DensityLevel::Unknown => ("#383d41", "#e2e3e5"),
    }
}

/// (text, background) colors for a severity badge
pub fn severity_palette(severity: Severity) -> (&'static str, &'static str) {
    match severity {
        Severity::Low => ("#155724", "#d4edda"),
        Severity::Medium => ("#856404", "#fff3cd"),
        Severity::High => ("#721c24", "#f8d7da"),
        Severity::Unknown => ("#383d41", "#e2e3e5"),
    }
}

/// (text, background) colors for an alert status badge
pub fn status_palette(status: AlertStatus) -> (&'static str, &'static str) {
    match status {
        AlertStatus::Active => ("#721c24", "#f8d7da"),
        AlertStatus::Acknowledged => ("#856404", "#fff3cd"),
        AlertStatus::Resolved => ("#155724", "#d4edda"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn zone(zone_id: &str, capacity: u32) -> Zone {
        Zone {
            zone_id: zone_id.to_string(),
            location_name: format!("Zone {}", zone_id),
            capacity,
        }
    }

    fn reading(zone_id: &str, people_count: u32, density_level: DensityLevel) -> CrowdReading {
        CrowdReading {
            zone_id: zone_id.to_string(),
            people_count,
            density_level,
            timestamp: "2025-06-01T12:30:00".to_string(),
        }
    }

    fn alert(alert_id: &str, status: AlertStatus) -> Alert {
        Alert {
            alert_id: alert_id.to_string(),
            zone_id: "Z01".to_string(),
            severity: Severity::High,
            status,
            time: "2025-06-01T12:30:00".to_string(),
            responder: None,
        }
    }

    #[test]
    fn occupancy_half_full_reads_fifty() {
        assert_eq!(occupancy_percent(50, 100), "50.0");
    }

    #[test]
    fn occupancy_rounds_to_one_decimal() {
        assert_eq!(occupancy_percent(1, 3), "33.3");
        assert_eq!(occupancy_percent(2, 3), "66.7");
    }

    #[test]
    fn occupancy_can_exceed_capacity() {
        assert_eq!(occupancy_percent(150, 100), "150.0");
    }

    #[test]
    fn occupancy_zero_capacity_reads_zero() {
        assert_eq!(occupancy_percent(50, 0), "0.0");
    }

    #[test]
    fn latest_by_zone_last_entry_wins() {
        let map = latest_by_zone(vec![
            reading("Z01", 10, DensityLevel::Low),
            reading("Z01", 90, DensityLevel::High),
        ]);
        assert_eq!(map.len(), 1);
        assert_eq!(map["Z01"].people_count, 90);
    }

    #[test]
    fn zone_overviews_join_readings() {
        let overviews = zone_overviews(
            vec![zone("Z01", 100)],
            vec![reading("Z01", 50, DensityLevel::Medium)],
        );
        assert_eq!(overviews.len(), 1);
        assert_eq!(overviews[0].people_count, 50);
        assert_eq!(overviews[0].density, DensityLevel::Medium);
        assert_eq!(overviews[0].occupancy, "50.0");
    }

    #[test]
    fn zone_without_reading_renders_empty() {
        let overviews = zone_overviews(vec![zone("Z05", 250)], vec![]);
        assert_eq!(overviews[0].people_count, 0);
        assert_eq!(overviews[0].density, DensityLevel::Low);
        assert_eq!(overviews[0].occupancy, "0.0");
    }

    #[test]
    fn zone_overviews_preserve_zone_order() {
        let overviews = zone_overviews(
            vec![zone("Z02", 200), zone("Z01", 300)],
            vec![reading("Z01", 30, DensityLevel::Low)],
        );
        assert_eq!(overviews[0].zone_id, "Z02");
        assert_eq!(overviews[1].zone_id, "Z01");
    }

    #[test]
    fn open_alerts_drops_resolved() {
        let alerts = open_alerts(vec![
            alert("A1", AlertStatus::Active),
            alert("A2", AlertStatus::Resolved),
            alert("A3", AlertStatus::Acknowledged),
        ]);
        let ids: Vec<&str> = alerts.iter().map(|a| a.alert_id.as_str()).collect();
        assert_eq!(ids, vec!["A1", "A3"]);
    }

    #[test]
    fn active_alert_offers_acknowledge() {
        let action = next_action(AlertStatus::Active).unwrap();
        assert_eq!(action, AlertAction::Acknowledge);
        assert_eq!(action.label(), "Acknowledge");
        assert_eq!(action.target_status(), AlertStatus::Acknowledged);
    }

    #[test]
    fn acknowledged_alert_offers_resolve() {
        let action = next_action(AlertStatus::Acknowledged).unwrap();
        assert_eq!(action, AlertAction::Resolve);
        assert_eq!(action.label(), "Resolve");
        assert_eq!(action.target_status(), AlertStatus::Resolved);
    }

    #[test]
    fn resolved_alert_offers_nothing() {
        assert!(next_action(AlertStatus::Resolved).is_none());
    }

    #[test]
    fn stats_count_zones_alerts_and_high_density() {
        let stats = DashboardStats::compute(
            &[zone("Z01", 100), zone("Z02", 200)],
            &[alert("A1", AlertStatus::Active)],
            &[
                reading("Z01", 95, DensityLevel::High),
                reading("Z02", 20, DensityLevel::Low),
            ],
        );
        assert_eq!(stats.total_zones, 2);
        assert_eq!(stats.active_alerts, 1);
        assert_eq!(stats.high_density_zones, 1);
    }

    #[test]
    fn stats_default_is_all_zero() {
        let stats = DashboardStats::default();
        assert_eq!(stats.total_zones, 0);
        assert_eq!(stats.active_alerts, 0);
        assert_eq!(stats.high_density_zones, 0);
    }

    #[test]
    fn format_timestamp_renders_naive_iso() {
        assert_eq!(
            format_timestamp("2025-06-01T12:30:05.123456"),
            "2025-06-01 12:30:05"
        );
        assert_eq!(format_timestamp("2025-06-01T12:30:05"), "2025-06-01 12:30:05");
    }

    #[test]
    fn format_timestamp_passes_garbage_through() {
        assert_eq!(format_timestamp("yesterday"), "yesterday");
        assert_eq!(format_timestamp(""), "");
    }

    #[test]
    fn unknown_density_gets_neutral_palette() {
        assert_eq!(density_palette(DensityLevel::Unknown), ("#383d41", "#e2e3e5"));
    }

    #[test]
    fn high_density_and_active_status_share_the_red_palette() {
        assert_eq!(
            density_palette(DensityLevel::High),
            status_palette(AlertStatus::Active)
        );
    }
}
