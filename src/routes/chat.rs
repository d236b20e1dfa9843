use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use tracing::{debug, error};

use crate::{
    error::AppError,
    message::{ChatReply, ChatRequest},
    state::SharedState,
};

/// Relays one user message to the model and returns its reply.
///
/// A body that is not JSON or lacks a string `message` is rejected before the
/// provider is contacted. An empty message is forwarded as-is.
pub async fn chat_handler(
    State(state): State<SharedState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatReply>, AppError> {
    let Json(request) = payload?;
    debug!(len = request.message.len(), "relaying chat message");

    let reply = state.model.complete(&request.message).await.map_err(|e| {
        error!(error = %e, "model provider call failed");
        AppError::from(e)
    })?;

    Ok(Json(ChatReply { reply }))
}
