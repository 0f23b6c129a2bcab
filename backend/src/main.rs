// src/main.rs

use std::time::Duration;

use dotenvy::dotenv;
use readiness::config::{Config, SESSION_PURGE_INTERVAL_SECS};
use readiness::routes;
use readiness::state::AppState;
use readiness::store::SessionStore;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // Load .env file (if present)
    dotenv().ok();

    // Load configuration from environment
    let config = Config::from_env();

    let file_appender = tracing_appender::rolling::daily("logs", "app.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
    let env_filter = EnvFilter::new(&config.rust_log);
    let stdout_layer = fmt::layer().with_writer(std::io::stdout).with_target(false);
    let file_layer = fmt::layer().with_writer(non_blocking).with_ansi(false);

    // Initialize Tracing (Logging)
    tracing_subscriber::registry()
        .with(env_filter)
        .with(stdout_layer)
        .with(file_layer)
        .init();

    let sessions = SessionStore::new();
    tracing::info!(scoring_mode = ?config.scoring_mode, "Session store ready");

    // Sweep sessions idle for longer than the token lifetime
    let idle_limit = chrono::Duration::seconds(config.session_ttl as i64);
    let sweeper = sessions.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_secs(SESSION_PURGE_INTERVAL_SECS));
        loop {
            interval.tick().await;
            let purged = sweeper.purge_idle(idle_limit).await;
            if purged > 0 {
                tracing::info!("Purged {} idle sessions", purged);
            }
        }
    });

    let addr = config.bind_addr;
    let state = AppState {
        sessions,
        config: config.clone(),
    };

    // Create the Axum application router
    let app = routes::create_router(state);

    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .unwrap_or_else(|e| panic!("Failed to bind {}: {}", addr, e));

    // Start the server
    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!("Server error: {}", e);
    }
}
