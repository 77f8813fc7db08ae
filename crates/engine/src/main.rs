//! Actor picker engine - Main entry point.

use std::sync::Arc;

use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use actorpick_domain::{Catalog, DEFAULT_ACTORS, DEFAULT_COLORS};
use actorpick_engine::{api, infrastructure::config::AppConfig, App};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment from repo root.
    load_dotenv_from_repo_root();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "actorpick_engine=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting actor picker");

    // Load configuration
    let config = AppConfig::from_env()?;
    tracing::info!(
        host = %config.server_host,
        port = config.server_port,
        "Configuration loaded"
    );

    // Fail fast on an empty catalog instead of per request.
    let catalog = Catalog::new(DEFAULT_ACTORS, DEFAULT_COLORS)?;
    tracing::info!(
        actors = catalog.actors().len(),
        colors = catalog.colors().len(),
        "Catalog loaded"
    );

    let app = Arc::new(App::with_system_random(catalog));

    let router = api::http::routes()
        .with_state(app)
        .layer(TraceLayer::new_for_http());

    // Start server
    let addr = config.bind_addr()?;
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

fn load_dotenv_from_repo_root() {
    let repo_root = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..");

    // Prefer local overrides.
    for filename in [".env.local", ".env"] {
        let path = repo_root.join(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
    }
}

/// Resolves on Ctrl+C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
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
            tracing::info!("Received Ctrl+C, initiating graceful shutdown...");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown...");
        }
    }
}
