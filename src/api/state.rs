//! Application state shared by handlers and middleware

use std::sync::Arc;

use crate::infrastructure::correlation::CorrelationId;
use crate::infrastructure::team_member::TeamMemberRegistry;

/// Application state containing the registry and process-wide values
#[derive(Debug, Clone)]
pub struct AppState {
    pub registry: Arc<TeamMemberRegistry>,
    /// Environment name reported by the API info endpoint
    pub environment: String,
    /// Correlation ID fixed for the lifetime of the process
    pub static_correlation_id: CorrelationId,
}

impl AppState {
    pub fn new(registry: TeamMemberRegistry, environment: impl Into<String>) -> Self {
        Self {
            registry: Arc::new(registry),
            environment: environment.into(),
            static_correlation_id: CorrelationId::new(),
        }
    }
}
