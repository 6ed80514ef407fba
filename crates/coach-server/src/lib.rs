pub mod config;
pub mod error;
pub mod routes;
pub mod signature;
pub mod slack;
pub mod state;

use axum::routing::{get, post};
use axum::{middleware, Router};
use coach_core::PhrasePool;
use tower_http::trace::TraceLayer;

pub use config::ServerConfig;
pub use state::AppState;

/// Build the axum Router with all routes and middleware.
/// Used by `serve()` and available for integration testing.
pub fn build_router(app_state: AppState) -> Router {
    let commands = Router::new()
        .route("/slack/commands", post(routes::commands::slash_command))
        .route_layer(middleware::from_fn_with_state(
            app_state.clone(),
            signature::require_slack_signature,
        ));

    Router::new()
        .route("/healthz", get(routes::health::healthz))
        .merge(commands)
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}

/// Start the slash-command server on `addr` (e.g. `0.0.0.0:8080`).
pub async fn serve(config: ServerConfig, phrases: PhrasePool, addr: &str) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    serve_on(config, phrases, listener).await
}

/// Start the server on a pre-bound listener.
///
/// Lets the caller read the actual port first when binding to port 0.
pub async fn serve_on(
    config: ServerConfig,
    phrases: PhrasePool,
    listener: tokio::net::TcpListener,
) -> anyhow::Result<()> {
    let local = listener.local_addr()?;
    tracing::info!(
        phrases = phrases.len(),
        slack_api = %config.slack_api_base,
        "coach-peter listening on http://{local}"
    );

    let app = build_router(AppState::new(config, phrases));
    axum::serve(listener, app).await?;
    Ok(())
}
