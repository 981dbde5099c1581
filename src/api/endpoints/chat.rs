//! Chat endpoints.
//!
//! - `POST /api/chat/sessions`: open a session over a prediction list
//! - `GET /api/chat/sessions/:id`: session with full transcript
//! - `POST /api/chat/sessions/:id/messages`: send a message, get the reply
//! - `POST /api/chat/sessions/:id/verify`: re-run report verification

use axum::extract::{Path, State};
use axum::Json;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::api::error::ApiError;
use crate::api::types::{parse_id, ApiContext};
use crate::chat::{ChatMessage, ChatSession};
use crate::intelligence::highest_risk;
use crate::models::{Disease, Prediction, VerificationStatus};

#[derive(Deserialize, Default)]
#[serde(default)]
pub struct CreateSessionRequest {
    pub predictions: Vec<Prediction>,
}

#[derive(Deserialize)]
pub struct SendMessageRequest {
    pub message: String,
}

#[derive(Serialize)]
pub struct ChatSessionView {
    pub id: Uuid,
    pub verification: VerificationStatus,
    /// Highest-risk condition under discussion, if any.
    pub primary: Option<Disease>,
    pub predictions: Vec<Prediction>,
    pub messages: Vec<ChatMessage>,
    pub created_at: DateTime<Utc>,
}

impl From<ChatSession> for ChatSessionView {
    fn from(session: ChatSession) -> Self {
        Self {
            id: session.id,
            verification: session.verification,
            primary: highest_risk(&session.predictions).map(|p| p.disease),
            predictions: session.predictions,
            messages: session.messages,
            created_at: session.created_at,
        }
    }
}

/// `POST /api/chat/sessions`
pub async fn create(
    State(ctx): State<ApiContext>,
    Json(req): Json<CreateSessionRequest>,
) -> Result<Json<ChatSessionView>, ApiError> {
    let session = ctx.state.assistant.start_session(req.predictions).await?;
    tracing::info!(session_id = %session.id, "Chat session opened");
    Ok(Json(session.into()))
}

/// `GET /api/chat/sessions/:id`
pub async fn get(
    State(ctx): State<ApiContext>,
    Path(id): Path<String>,
) -> Result<Json<ChatSessionView>, ApiError> {
    let id = parse_id(&id)?;
    Ok(Json(ctx.state.assistant.session(&id)?.into()))
}

/// `POST /api/chat/sessions/:id/messages`: returns the assistant reply.
pub async fn send(
    State(ctx): State<ApiContext>,
    Path(id): Path<String>,
    Json(req): Json<SendMessageRequest>,
) -> Result<Json<ChatMessage>, ApiError> {
    let id = parse_id(&id)?;
    let reply = ctx.state.assistant.send(&id, &req.message).await?;
    Ok(Json(reply))
}

/// `POST /api/chat/sessions/:id/verify`
pub async fn verify(
    State(ctx): State<ApiContext>,
    Path(id): Path<String>,
) -> Result<Json<ChatSessionView>, ApiError> {
    let id = parse_id(&id)?;
    Ok(Json(ctx.state.assistant.verify(&id).await?.into()))
}
