// src/routes/mod.rs
pub mod chat;
pub mod page;

use crate::state::SharedState;
use axum::{
    Router,
    routing::{get, post},
};
use chat::chat_handler;
use page::index_handler;
use tower_http::trace::TraceLayer;

pub fn create_router() -> Router<SharedState> {
    Router::new()
        .route("/", get(index_handler))
        .route("/api/chat", post(chat_handler))
        .layer(TraceLayer::new_for_http())
}
