//! PrivaLens Server
//!
//! JSON API for profile privacy analysis:
//! - Submit social profile URLs for analysis on POST /profiles
//! - Read a session's results and aggregates on GET /profiles/{user_id}
//! - Clear a session on DELETE /profiles/{user_id}
//!
//! Usage:
//! ```bash
//! # With config file
//! privalens-server --config config.yaml
//!
//! # Or with environment variables (env vars override config)
//! PRIVALENS_PORT=5000 privalens-server
//! ```
//!
//! Test with:
//! ```bash
//! curl http://localhost:5000/profiles \
//!   -H "Content-Type: application/json" \
//!   -d '{"urls": ["https://twitter.com/alice"]}'
//!
//! # Then read the session back with the returned user_id
//! curl http://localhost:5000/profiles/<user_id>
//! ```

use clap::Parser;
use privalens_analyzer::SimulatedAnalyzer;
use privalens_engine::{EngineConfig, ProfileEngine};
use privalens_server::config::ServerConfig;
use privalens_server::routes::{AppState, router};
use privalens_session::MemorySessionStore;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// PrivaLens Server - profile privacy analysis API
#[derive(Parser)]
#[command(name = "privalens-server")]
#[command(about = "PrivaLens server for profile privacy analysis", long_about = None)]
struct Cli {
    /// Path to configuration file (YAML or TOML)
    #[arg(short, long, value_name = "FILE", env = "PRIVALENS_CONFIG")]
    config: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => ServerConfig::from_file(path)
            .map_err(|e| anyhow::anyhow!("failed to load config {path}: {e}"))?,
        None => ServerConfig::default(),
    };
    config.merge_env();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let store = Arc::new(MemorySessionStore::new());
    let analyzer = Arc::new(SimulatedAnalyzer::with_delay(Duration::from_millis(
        config.analyzer.delay_ms,
    )));
    let engine = Arc::new(ProfileEngine::with_config(
        store,
        analyzer,
        EngineConfig {
            analysis_timeout: Duration::from_secs(config.analyzer.timeout_secs),
        },
    ));

    let app = router(AppState { engine });

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    let listener = TcpListener::bind(addr).await?;

    info!("✅ PrivaLens server listening on http://{}", addr);
    info!("   - Submit profiles:  POST   http://{}/profiles", addr);
    info!("   - Read results:     GET    http://{}/profiles/{{user_id}}", addr);
    info!("   - Clear session:    DELETE http://{}/profiles/{{user_id}}", addr);
    info!("   - Health check:     GET    http://{}/health", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Wait for shutdown signal (SIGINT or SIGTERM)
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
