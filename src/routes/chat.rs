// src/routes/chat.rs
use axum::{
    Json,
    body::Bytes,
    extract::State,
    http::{HeaderMap, header},
};
use uuid::Uuid;

use crate::{
    error::AppError,
    message::{ChatRequest, ChatResponse},
    state::SharedState,
};

pub async fn chat_handler(
    State(state): State<SharedState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<ChatResponse>, AppError> {
    // Content type is checked before the body is touched; nothing reaches
    // the upstream on a 415.
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    if !content_type.contains("application/json") {
        return Err(AppError::UnsupportedMediaType);
    }

    let payload: ChatRequest =
        serde_json::from_slice(&body).map_err(|e| AppError::BadRequest(e.to_string()))?;

    let (prompt, session_id) = resolve_turn(&payload)?;

    let reply = state.langflow.send(&prompt, &session_id).await?;

    Ok(Json(ChatResponse { reply, session_id }))
}

/// Pick the prompt and session id out of the two accepted request shapes.
///
/// A follow-up ({messages, sessionId}) reuses the given session id and takes
/// the last message's content as the prompt; both must be non-empty. A first
/// turn ({chatInput}) mints a fresh session id. Anything else is a client
/// error and is never forwarded upstream.
fn resolve_turn(payload: &ChatRequest) -> Result<(String, String), AppError> {
    if let (Some(session_id), Some(messages)) = (&payload.session_id, &payload.messages) {
        let prompt = messages.last().map(|m| m.content.as_str()).unwrap_or("");
        if prompt.trim().is_empty() || session_id.trim().is_empty() {
            return Err(AppError::BadRequest(
                "Missing messages or sessionId".to_string(),
            ));
        }
        Ok((prompt.to_string(), session_id.clone()))
    } else if let Some(chat_input) = payload.chat_input.as_deref().filter(|s| !s.trim().is_empty())
    {
        Ok((chat_input.to_string(), Uuid::new_v4().to_string()))
    } else {
        Err(AppError::BadRequest(
            "Must provide either chatInput or (messages and sessionId)".to_string(),
        ))
    }
}
