//! # System Commands
//!
//! Liveness check for the admin UI's status bar.

use serde::Serialize;
use tracing::warn;

use crate::error::ApiError;
use crate::state::DbState;

/// Result of the `health` command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthReport {
    /// Whether the database answered a trivial query
    pub database: bool,
    pub customers: i64,
    pub materials: i64,
    /// Materials at or below their minimum stock level
    pub low_stock: usize,
    pub version: &'static str,
}

/// Reports database liveness and record counts.
///
/// An unreachable database is reported as `database: false` with zero
/// counts rather than as an error.
pub async fn health(db: &DbState) -> Result<HealthReport, ApiError> {
    let database = db.inner();
    let mut report = HealthReport {
        database: database.health_check().await,
        customers: 0,
        materials: 0,
        low_stock: 0,
        version: env!("CARGO_PKG_VERSION"),
    };

    if !report.database {
        warn!("Health check failed: database unreachable");
        return Ok(report);
    }

    report.customers = database.customers().count().await?;
    let materials = database.materials().list().await?;
    report.materials = materials.len() as i64;
    report.low_stock = materials.iter().filter(|m| m.is_low_stock()).count();

    Ok(report)
}
