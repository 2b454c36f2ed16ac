//! Client-side core for the CrowdGuard dashboard
//!
//! Typed wire models, endpoint URL construction, session storage access,
//! and the pure presentation logic behind the browser dashboard.

pub mod error;
pub mod models;
pub mod routes;
pub mod session;
pub mod view;

pub use error::{ClientError, Result};
pub use models::{
    Alert, AlertStatus, AlertUpdate, CrowdReading, DensityLevel, LogEntry, Session, Severity, Zone,
};
pub use routes::{ApiRoutes, DEFAULT_API_BASE};
