//! API request and response types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Request to send one chat message.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatRequest {
    /// The user's message
    pub message: String,

    /// Session to continue; a new session is created when absent
    pub session_id: Option<Uuid>,
}

/// Response after a completed turn.
#[derive(Debug, Clone, Serialize)]
pub struct ChatResponse {
    /// Session identifier (echoed or newly created)
    pub session_id: Uuid,

    /// The assistant's final reply for this turn
    pub reply: String,
}

/// Who authored a transcript entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TranscriptRole {
    User,
    Assistant,
}

/// One displayed turn in a session transcript.
#[derive(Debug, Clone, Serialize)]
pub struct TranscriptEntry {
    pub role: TranscriptRole,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

/// Full transcript of a session.
#[derive(Debug, Clone, Serialize)]
pub struct SessionHistoryResponse {
    pub session_id: Uuid,
    pub transcript: Vec<TranscriptEntry>,
}

/// Health check response.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Service status
    pub status: String,

    /// Service version
    pub version: String,
}
