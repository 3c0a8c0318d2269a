//! Team Roster API
//!
//! An in-memory registry of team members served over HTTP, with:
//! - CRUD endpoints over the registry
//! - Role group endpoints (backend / frontend)
//! - A linear and a branched middleware pipeline
//! - A health check that reports whether any team member is registered

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use api::state::AppState;
use infrastructure::team_member::TeamMemberRegistry;
use tracing::info;

/// Create the application state with the default configuration
pub fn create_app_state() -> anyhow::Result<AppState> {
    create_app_state_with_config(&AppConfig::default())
}

/// Create the application state with custom configuration
pub fn create_app_state_with_config(config: &AppConfig) -> anyhow::Result<AppState> {
    let registry = if config.registry.seed_defaults {
        TeamMemberRegistry::with_default_roster()?
    } else {
        info!("Starting with an empty team member registry");
        TeamMemberRegistry::empty()
    };

    Ok(AppState::new(registry, config.environment.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_default_state_is_seeded() {
        let state = create_app_state().unwrap();

        assert_eq!(state.environment, "Development");
        assert_eq!(state.registry.get_all().await.unwrap().len(), 6);
    }

    #[tokio::test]
    async fn test_state_without_seed_is_empty() {
        let mut config = AppConfig::default();
        config.registry.seed_defaults = false;
        config.environment = "Staging".to_string();

        let state = create_app_state_with_config(&config).unwrap();

        assert_eq!(state.environment, "Staging");
        assert!(state.registry.get_all().await.unwrap().is_empty());
    }
}
