use parolee_service::{fixtures, web, AppState, Config, ParoleeDb};
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    let config = match Config::load() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {:#}", e);
            std::process::exit(1);
        }
    };

    // Initialize logging; RUST_LOG takes precedence over the configured level
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    info!("Parolee service starting...");

    let db = Arc::new(ParoleeDb::new());
    if config.seed {
        fixtures::load(&db);
    }

    let state = AppState::new(
        db,
        config.base_uri(),
        Duration::from_secs(config.violation_timeout_secs),
    );

    if let Err(e) = web::run_web_server(&config.web_addr, state).await {
        error!("Web server error: {:#}", e);
        std::process::exit(1);
    }

    info!("Parolee service stopped");
}
