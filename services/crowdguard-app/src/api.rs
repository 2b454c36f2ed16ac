//! Client-side API fetch helpers
//!
//! One helper per dashboard routine. In the browser build (`csr` feature)
//! these call the CrowdGuard REST API; in native builds they are inert and
//! return empty data so the components still compile.
//!
//! Requests that belong to one dashboard section are joined as a group: if
//! any member fails, the whole group fails and the section keeps its
//! previous content.

use cg_client::{Alert, AlertUpdate, CrowdReading, LogEntry, Zone};

#[cfg(feature = "csr")]
use cg_client::{AlertStatus, ApiRoutes};

/// Number of audit entries shown in the logs section
pub const LOG_LIMIT: u32 = 10;

#[cfg(feature = "csr")]
async fn get_json<T: serde::de::DeserializeOwned>(url: &str) -> Result<T, String> {
    let resp = gloo_net::http::Request::get(url)
        .send()
        .await
        .map_err(|e| format!("{}", e))?;

    if !resp.ok() {
        return Err(format!("GET {} -> {}", url, resp.status()));
    }

    resp.json().await.map_err(|e| format!("{}", e))
}

/// Fetch zones and their latest readings for the zone cards
pub async fn fetch_zone_data() -> Result<(Vec<Zone>, Vec<CrowdReading>), String> {
    #[cfg(feature = "csr")]
    {
        let routes = ApiRoutes::default();
        futures::future::try_join(
            get_json::<Vec<Zone>>(&routes.zones()),
            get_json::<Vec<CrowdReading>>(&routes.latest_crowd_data()),
        )
        .await
    }

    #[cfg(not(feature = "csr"))]
    {
        Ok((vec![], vec![]))
    }
}

/// Fetch recent alerts across all statuses
pub async fn fetch_alerts() -> Result<Vec<Alert>, String> {
    #[cfg(feature = "csr")]
    {
        get_json(&ApiRoutes::default().alerts()).await
    }

    #[cfg(not(feature = "csr"))]
    {
        Ok(vec![])
    }
}

/// Fetch the inputs for the aggregate stats tiles
pub async fn fetch_stats_data() -> Result<(Vec<Zone>, Vec<Alert>, Vec<CrowdReading>), String> {
    #[cfg(feature = "csr")]
    {
        let routes = ApiRoutes::default();
        futures::future::try_join3(
            get_json::<Vec<Zone>>(&routes.zones()),
            get_json::<Vec<Alert>>(&routes.alerts_with_status(AlertStatus::Active)),
            get_json::<Vec<CrowdReading>>(&routes.latest_crowd_data()),
        )
        .await
    }

    #[cfg(not(feature = "csr"))]
    {
        Ok((vec![], vec![], vec![]))
    }
}

/// Fetch the latest audit log entries
pub async fn fetch_logs() -> Result<Vec<LogEntry>, String> {
    #[cfg(feature = "csr")]
    {
        get_json(&ApiRoutes::default().logs(LOG_LIMIT)).await
    }

    #[cfg(not(feature = "csr"))]
    {
        Ok(vec![])
    }
}

/// Advance an alert's lifecycle status
pub async fn update_alert(alert_id: &str, update: &AlertUpdate) -> Result<(), String> {
    #[cfg(feature = "csr")]
    {
        let url = ApiRoutes::default().alert(alert_id);
        let resp = gloo_net::http::Request::put(&url)
            .json(update)
            .map_err(|e| format!("{}", e))?
            .send()
            .await
            .map_err(|e| format!("{}", e))?;

        if resp.ok() {
            Ok(())
        } else {
            Err(format!("PUT {} -> {}", url, resp.status()))
        }
    }

    #[cfg(not(feature = "csr"))]
    {
        let _ = (alert_id, update);
        Ok(())
    }
}
