//! Chat handlers and the session store.
//!
//! Sessions are owned here, by the presentation layer. The agent only ever
//! receives a read-only seed built from the transcript; it never touches
//! the store. A per-session mutex is held for the whole turn, so one user
//! message runs to completion before the next is accepted.

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Html,
    Json,
};
use chrono::Utc;
use tokio::sync::{Mutex, RwLock};
use uuid::Uuid;

use crate::llm::ChatMessage;

use super::types::{
    ChatRequest, ChatResponse, HealthResponse, SessionHistoryResponse, TranscriptEntry,
    TranscriptRole,
};
use super::AppState;

/// In-memory, process-lifetime session store.
pub struct SessionStore {
    sessions: RwLock<HashMap<Uuid, Arc<Mutex<Session>>>>,
}

/// One chat session: the long-lived transcript shown to the user.
#[derive(Default)]
pub struct Session {
    transcript: Vec<TranscriptEntry>,
}

impl Session {
    /// Build the message seed handed to the agent for the next turn.
    pub fn seed(&self) -> Vec<ChatMessage> {
        self.transcript
            .iter()
            .map(|entry| match entry.role {
                TranscriptRole::User => ChatMessage::user(entry.content.clone()),
                TranscriptRole::Assistant => ChatMessage::assistant(entry.content.clone()),
            })
            .collect()
    }

    fn push(&mut self, role: TranscriptRole, content: String) {
        self.transcript.push(TranscriptEntry {
            role,
            content,
            timestamp: Utc::now(),
        });
    }
}

impl SessionStore {
    pub fn new() -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
        }
    }

    /// Fetch an existing session or create a new one.
    pub async fn get_or_create(&self, id: Uuid) -> Arc<Mutex<Session>> {
        let mut sessions = self.sessions.write().await;
        sessions
            .entry(id)
            .or_insert_with(|| Arc::new(Mutex::new(Session::default())))
            .clone()
    }

    /// Fetch an existing session.
    pub async fn get(&self, id: Uuid) -> Option<Arc<Mutex<Session>>> {
        self.sessions.read().await.get(&id).cloned()
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

/// GET / - the chat web page.
pub async fn chat_page() -> Html<&'static str> {
    Html(include_str!("chat.html"))
}

/// POST /api/chat - run one full user turn.
pub async fn send_message(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, (StatusCode, String)> {
    let message = request.message.trim();
    if message.is_empty() {
        return Err((StatusCode::BAD_REQUEST, "message must not be empty".to_string()));
    }

    let session_id = request.session_id.unwrap_or_else(Uuid::new_v4);
    let session = state.sessions.get_or_create(session_id).await;

    // Hold the session for the whole turn: no interleaved messages.
    let mut session = session.lock().await;

    let seed = session.seed();
    let reply = state.agent.run_turn(&seed, message).await.map_err(|e| {
        tracing::error!(error = %e, "turn aborted");
        (StatusCode::INTERNAL_SERVER_ERROR, format!("{:#}", e))
    })?;

    session.push(TranscriptRole::User, message.to_string());
    session.push(TranscriptRole::Assistant, reply.clone());

    Ok(Json(ChatResponse { session_id, reply }))
}

/// GET /api/sessions/:id - transcript for re-hydrating the page.
pub async fn session_history(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionHistoryResponse>, StatusCode> {
    let session = state.sessions.get(id).await.ok_or(StatusCode::NOT_FOUND)?;
    let session = session.lock().await;

    Ok(Json(SessionHistoryResponse {
        session_id: id,
        transcript: session.transcript.clone(),
    }))
}

/// GET /api/health
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
