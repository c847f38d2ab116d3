use crate::types::HealthRes;
use notes_core::ConfigStatus;

/// Health service shared by everything that exposes a health check.
///
/// Reports transport-level liveness plus configuration readiness. It never contacts Notion, so
/// a healthy response says nothing about whether Notion is reachable.
pub struct HealthService;

impl HealthService {
    /// Build the health response for the given configuration status.
    ///
    /// # Returns
    /// A `HealthRes` that is always `"healthy"`, with `notion_configured` and `message` taken
    /// from `config`.
    pub fn check_health(config: &ConfigStatus) -> HealthRes {
        HealthRes {
            status: "healthy".into(),
            notion_configured: config.valid,
            message: config.message.clone(),
        }
    }
}
