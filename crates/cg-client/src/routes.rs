//! Endpoint URL construction for the CrowdGuard REST API

use crate::models::AlertStatus;

/// Default backend address used when nothing else is configured
pub const DEFAULT_API_BASE: &str = "http://localhost:8000";

/// Builds request URLs against a fixed API base
#[derive(Debug, Clone)]
pub struct ApiRoutes {
    base: String,
}

impl Default for ApiRoutes {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE)
    }
}

impl ApiRoutes {
    pub fn new(base: impl Into<String>) -> Self {
        let mut base = base.into();
        while base.ends_with('/') {
            base.pop();
        }
        Self { base }
    }

    /// GET: all configured zones
    pub fn zones(&self) -> String {
        format!("{}/zones", self.base)
    }

    /// GET: the most recent crowd reading per zone
    pub fn latest_crowd_data(&self) -> String {
        format!("{}/crowd-data/latest", self.base)
    }

    /// GET: recent alerts across all statuses
    pub fn alerts(&self) -> String {
        format!("{}/alerts", self.base)
    }

    /// GET: recent alerts filtered by lifecycle status
    pub fn alerts_with_status(&self, status: AlertStatus) -> String {
        format!("{}/alerts?status={}", self.base, status)
    }

    /// PUT target for a single alert
    pub fn alert(&self, alert_id: &str) -> String {
        format!("{}/alerts/{}", self.base, alert_id)
    }

    /// GET: the latest audit log entries
    pub fn logs(&self, limit: u32) -> String {
        format!("{}/api/logs?limit={}", self.base, limit)
    }
}
