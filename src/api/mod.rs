//! HTTP API: the chat page, the chat endpoint, and session history.

mod chat;
pub mod types;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

use crate::agent::Agent;
use crate::config::Config;

pub use chat::{Session, SessionStore};

/// Shared application state.
pub struct AppState {
    pub agent: Agent,
    pub sessions: SessionStore,
}

/// Build the router for the chat API.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(chat::chat_page))
        .route("/api/chat", post(chat::send_message))
        .route("/api/sessions/:id", get(chat::session_history))
        .route("/api/health", get(chat::health))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Start the HTTP server and block until it exits.
pub async fn serve(config: Config) -> anyhow::Result<()> {
    let addr = format!("{}:{}", config.host, config.port);

    let agent = Agent::new(config)?;
    let state = Arc::new(AppState {
        agent,
        sessions: SessionStore::new(),
    });

    let app = router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Listening on {}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
