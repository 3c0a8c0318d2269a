//! Serve command - runs the HTTP server with the selected pipeline

use std::net::SocketAddr;

use clap::Args;
use tokio::net::TcpListener;
use tokio::signal;
use tracing::{info, warn};

use crate::api::router::create_router;
use crate::config::{AppConfig, PipelineMode};
use crate::infrastructure::logging;

/// Arguments for the serve command
#[derive(Args, Debug, Clone, Default)]
pub struct ServeArgs {
    /// Middleware pipeline to serve requests with (overrides configuration)
    #[arg(long, value_enum)]
    pub pipeline: Option<PipelineMode>,

    /// Start with an empty registry instead of the default roster
    #[arg(long)]
    pub empty: bool,
}

impl ServeArgs {
    /// Apply command line overrides on top of loaded configuration
    pub fn apply(&self, config: &mut AppConfig) {
        if let Some(pipeline) = self.pipeline {
            config.pipeline = pipeline;
        }

        if self.empty {
            config.registry.seed_defaults = false;
        }
    }
}

/// Run the HTTP server
pub async fn run(args: ServeArgs) -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let (mut config, load_error) = config_or_default(AppConfig::load());
    args.apply(&mut config);
    logging::init_logging(&config.logging)?;

    if let Some(e) = load_error {
        warn!(error = %e, "Failed to load configuration, falling back to defaults");
    }

    let state = crate::create_app_state_with_config(&config)?;
    let app = create_router(state, config.pipeline);

    let addr = build_socket_addr(&config)?;
    info!(pipeline = ?config.pipeline, environment = %config.environment, "Starting server on {}", addr);

    let listener = TcpListener::bind(addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}

/// Fall back to default configuration, handing back the load error for logging
fn config_or_default(
    loaded: Result<AppConfig, config::ConfigError>,
) -> (AppConfig, Option<config::ConfigError>) {
    match loaded {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    }
}

fn build_socket_addr(config: &AppConfig) -> anyhow::Result<SocketAddr> {
    Ok(SocketAddr::from((
        config.server.host.parse::<std::net::IpAddr>()?,
        config.server.port,
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_overrides() {
        let mut config = AppConfig::default();
        let args = ServeArgs {
            pipeline: Some(PipelineMode::Branched),
            empty: true,
        };

        args.apply(&mut config);

        assert_eq!(config.pipeline, PipelineMode::Branched);
        assert!(!config.registry.seed_defaults);
    }

    #[test]
    fn test_apply_without_overrides_keeps_config() {
        let mut config = AppConfig::default();
        ServeArgs::default().apply(&mut config);

        assert_eq!(config.pipeline, PipelineMode::Main);
        assert!(config.registry.seed_defaults);
    }

    #[test]
    fn test_config_or_default_keeps_load_error() {
        let (config, error) =
            config_or_default(Err(config::ConfigError::Message("bad pipeline".to_string())));

        assert_eq!(config.pipeline, PipelineMode::Main);
        assert_eq!(config.environment, "Development");
        assert!(error.unwrap().to_string().contains("bad pipeline"));

        let mut loaded = AppConfig::default();
        loaded.environment = "Staging".to_string();
        let (config, error) = config_or_default(Ok(loaded));
        assert_eq!(config.environment, "Staging");
        assert!(error.is_none());
    }

    #[test]
    fn test_build_socket_addr() {
        let mut config = AppConfig::default();
        config.server.host = "127.0.0.1".to_string();
        config.server.port = 3000;

        assert_eq!(
            build_socket_addr(&config).unwrap(),
            "127.0.0.1:3000".parse::<SocketAddr>().unwrap()
        );

        config.server.host = "not-an-ip".to_string();
        assert!(build_socket_addr(&config).is_err());
    }
}
