use auth_gate::{
    api::{AppState, create_router},
    config::{ExecutionMode, Settings},
    services::AuthService,
};
use clap::Parser;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(unix)]
use tokio::signal::unix::{SignalKind, signal};

/// Command-line overrides for the environment configuration.
#[derive(Debug, Parser)]
#[command(name = "auth-gate", version)]
struct Cli {
    /// Address to bind (overrides SERVER_HOST)
    #[arg(long)]
    host: Option<String>,

    /// Port to bind (overrides SERVER_PORT)
    #[arg(long)]
    port: Option<u16>,

    /// Execution mode: development, production or test (overrides APP_ENV)
    #[arg(long)]
    mode: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "auth_gate=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    // Load configuration
    let mut settings =
        Settings::from_env().map_err(|e| format!("Failed to load settings: {}", e))?;
    if let Some(host) = cli.host {
        settings.server.host = host;
    }
    if let Some(port) = cli.port {
        settings.server.port = port;
    }
    if let Some(mode) = cli.mode {
        settings.app.mode = ExecutionMode::parse(&mode)
            .ok_or_else(|| format!("Invalid --mode: {}", mode))?;
    }

    tracing::info!("Starting auth gate in {} mode", settings.app.mode);
    if settings.app.mode.is_development() {
        tracing::warn!("Development mode: every caller resolves to the default guest owner");
    }

    let app_state = AppState {
        auth_service: Arc::new(AuthService::new(settings.app.mode)),
    };

    // Build router
    let app = create_router(app_state)
        .layer(CorsLayer::permissive())
        .layer(tower_http::catch_panic::CatchPanicLayer::new());

    // Start server
    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| format!("Failed to bind to {}: {}", addr, e))?;

    tracing::info!("Server listening on {}", addr);
    tracing::info!("Health check available at: http://{}/health", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| format!("Server error: {}", e))?;

    tracing::info!("Server shutdown complete");

    Ok(())
}

async fn shutdown_signal() {
    #[cfg(unix)]
    {
        let mut terminate_signal = match signal(SignalKind::terminate()) {
            Ok(sig) => sig,
            Err(err) => {
                tracing::error!("Failed to install SIGTERM handler: {}", err);
                if let Err(err) = tokio::signal::ctrl_c().await {
                    tracing::error!("Failed to listen for Ctrl+C: {}", err);
                }
                return;
            }
        };

        tokio::select! {
            res = tokio::signal::ctrl_c() => {
                if let Err(err) = res {
                    tracing::error!("Failed to listen for Ctrl+C: {}", err);
                }
            },
            _ = terminate_signal.recv() => {},
        }
    }

    #[cfg(not(unix))]
    {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", err);
        }
    }

    tracing::info!("Shutdown signal received, commencing graceful shutdown");
}
