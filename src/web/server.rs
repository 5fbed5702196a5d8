//! HTTP server implementation

use axum::{
    routing::get,
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

use super::handlers::{
    add_movement, create_parolee, delete_parolee, get_convictions, get_disassociates,
    get_movements, get_parolee, list_parolees, reset_parolees, stats_handler,
    subscribe_violations, update_convictions, update_disassociates, update_parolee,
};
use super::state::AppState;

/// Build the application router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/services/parolees",
            get(list_parolees).post(create_parolee).put(reset_parolees),
        )
        .route(
            "/services/parolees/subscribeParoleViolations",
            get(subscribe_violations),
        )
        .route(
            "/services/parolees/:id",
            get(get_parolee).put(update_parolee).delete(delete_parolee),
        )
        .route(
            "/services/parolees/:id/movements",
            get(get_movements).post(add_movement),
        )
        .route(
            "/services/parolees/:id/convictions",
            get(get_convictions).put(update_convictions),
        )
        .route(
            "/services/parolees/:id/disassociates",
            get(get_disassociates).put(update_disassociates),
        )
        .route("/stats", get(stats_handler))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Run the web server until Ctrl-C
pub async fn run_web_server(addr: &str, state: AppState) -> anyhow::Result<()> {
    let app = router(state);

    // Start the server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Parolee service available at http://{}/services/parolees", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            info!("Shutdown requested");
        })
        .await?;

    Ok(())
}
