// src/routes/mod.rs
pub mod chat;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use crate::state::SharedState;
use chat::chat_handler;

pub fn create_router() -> Router<SharedState> {
    Router::new()
        .route("/api/chat", post(chat_handler))
        .route("/health", get(|| async { "OK" }))
        // The chat view lives at /chat with no extension, like the landing
        // page at /.
        .route_service("/chat", ServeFile::new("public/chat.html"))
        .fallback_service(ServeDir::new("public"))
        .layer(TraceLayer::new_for_http())
}
