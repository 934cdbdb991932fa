//! HTTP endpoint handlers. These are thin wrappers that forward to core logic.

use std::sync::Arc;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tracing::{info, instrument};

use crate::error::ApiError;
use crate::logic::{generate_question, list_questions, save_verified};
use crate::protocol::{GenerateIn, HealthOut, VerifyIn};
use crate::state::AppState;

#[instrument(level = "info")]
pub async fn http_health() -> impl IntoResponse { Json(HealthOut { ok: true }) }

#[instrument(level = "info", skip(state, body), fields(topic = ?body.topic, difficulty = ?body.difficulty))]
pub async fn http_post_question(
  State(state): State<Arc<AppState>>,
  Json(body): Json<GenerateIn>,
) -> Result<impl IntoResponse, ApiError> {
  let item = generate_question(&state, body).await?;
  Ok((StatusCode::CREATED, Json(item)))
}

#[instrument(level = "info", skip(state, body), fields(topic = ?body.topic, difficulty = ?body.difficulty, has_question = body.question.is_some()))]
pub async fn http_post_verify(
  State(state): State<Arc<AppState>>,
  Json(body): Json<VerifyIn>,
) -> Result<impl IntoResponse, ApiError> {
  let ack = save_verified(&state, body).await?;
  Ok((StatusCode::CREATED, Json(ack)))
}

#[instrument(level = "info", skip(state))]
pub async fn http_get_questions(State(state): State<Arc<AppState>>) -> impl IntoResponse {
  let catalog = list_questions(&state).await;
  info!(target: "question_forge", topics = catalog.len(), "HTTP catalog served");
  Json(catalog)
}
