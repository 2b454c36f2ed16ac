//! Wire types for the CrowdGuard REST API
//!
//! These mirror the backend's JSON response structures. Unknown JSON fields
//! are ignored and no cross-field invariants are checked client-side; the
//! backend owns correctness.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A monitored physical area with a rated capacity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Zone {
    pub zone_id: String,
    pub location_name: String,
    pub capacity: u32,
}

/// Categorical crowd-congestion label derived upstream
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DensityLevel {
    Low,
    Medium,
    High,
    /// Any wire value outside the known vocabulary
    #[serde(other)]
    Unknown,
}

impl fmt::Display for DensityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DensityLevel::Low => write!(f, "Low"),
            DensityLevel::Medium => write!(f, "Medium"),
            DensityLevel::High => write!(f, "High"),
            DensityLevel::Unknown => write!(f, "Unknown"),
        }
    }
}

/// Latest crowd reading for a zone, as returned by /crowd-data/latest
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrowdReading {
    pub zone_id: String,
    pub people_count: u32,
    pub density_level: DensityLevel,
    pub timestamp: String,
}

/// Alert severity as labelled by the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    Low,
    Medium,
    High,
    /// Any wire value outside the known vocabulary
    #[serde(other)]
    Unknown,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Low => write!(f, "Low"),
            Severity::Medium => write!(f, "Medium"),
            Severity::High => write!(f, "High"),
            Severity::Unknown => write!(f, "Unknown"),
        }
    }
}

/// Alert lifecycle status, advanced by operator action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AlertStatus {
    Active,
    Acknowledged,
    Resolved,
}

impl fmt::Display for AlertStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlertStatus::Active => write!(f, "Active"),
            AlertStatus::Acknowledged => write!(f, "Acknowledged"),
            AlertStatus::Resolved => write!(f, "Resolved"),
        }
    }
}

/// An operator alert raised for a zone
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Alert {
    pub alert_id: String,
    pub zone_id: String,
    pub severity: Severity,
    pub status: AlertStatus,
    pub time: String,
    #[serde(default)]
    pub responder: Option<String>,
}

/// Request body for PUT /alerts/{id}
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlertUpdate {
    pub status: AlertStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub responder: Option<String>,
}

/// Audit log entry as returned by /api/logs
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    pub timestamp: String,
    pub action: String,
    pub performed_by: String,
}

/// Operator session held in client-side storage under the `user` key.
///
/// Written by the login page; its presence is the sole access check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    #[serde(default)]
    pub user_id: Option<String>,
    pub name: String,
    pub role: String,
    #[serde(default)]
    pub zone_assigned: Option<String>,
}

impl Session {
    /// Parse a session from its stored JSON form
    pub fn from_json(raw: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }
}
