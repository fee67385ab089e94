use axum::extract::State;
use axum::Json;

use crate::api::dto::{ChatRequest, ChatReply};
use crate::api::state::AppState;
use crate::db::repository::ChatRepository;
use crate::error::{HavenError, Result};
use crate::services::IntentClassifier;

/// `POST /api/chat`
///
/// Classifies the question against the intent rule table, persists the
/// exchange, and returns the canned answer. Empty questions are rejected
/// here so the classifier never sees them.
#[utoipa::path(
    post,
    path = "/api/chat",
    tag = "assistant",
    request_body = ChatRequest,
    responses(
        (status = 200, description = "Canned assistant reply", body = ChatReply),
        (status = 400, description = "Empty question"),
    )
)]
pub async fn chat(
    State(state): State<AppState>,
    Json(req): Json<ChatRequest>,
) -> Result<Json<ChatReply>> {
    let question = req.q.trim();
    if question.is_empty() {
        return Err(HavenError::Validation("question cannot be empty".to_string()));
    }

    let intent = IntentClassifier::classify(question);
    let answer = intent.canned_reply();

    let conn = state.db.connect()?;
    let exchange = ChatRepository::create(&conn, question, answer).await?;

    tracing::debug!(id = exchange.id, ?intent, "Answered chat query");
    Ok(Json(ChatReply {
        a: answer.to_string(),
    }))
}
