//! Core request logic behind the HTTP handlers: input checks, difficulty
//! normalization, generation and saving.

use tracing::{error, info, instrument};

use crate::difficulty::to_server;
use crate::domain::GeneratedItem;
use crate::error::ApiError;
use crate::protocol::{Catalog, GenerateIn, VerifyAck, VerifyIn};
use crate::state::AppState;

fn non_empty(v: Option<String>) -> Option<String> {
  v.filter(|s| !s.trim().is_empty())
}

#[instrument(level = "info", skip(state, body))]
pub async fn generate_question(state: &AppState, body: GenerateIn) -> Result<GeneratedItem, ApiError> {
  let (Some(topic), Some(difficulty)) = (non_empty(body.topic), non_empty(body.difficulty)) else {
    return Err(ApiError::BadRequest("Missing topic or difficulty".into()));
  };
  let difficulty = to_server(&difficulty);

  let Some(oa) = &state.openai else {
    error!(target: "generation", %topic, %difficulty, "OPENAI_API_KEY not set; cannot generate");
    return Err(ApiError::GenerationFailed);
  };

  match oa.generate_question(&state.prompts, &topic, &difficulty).await {
    Ok(item) => {
      info!(target: "generation", %topic, %difficulty, title = %item.title, "question served");
      Ok(item)
    }
    Err(e) => {
      error!(target: "generation", %topic, %difficulty, error = %e, "generation failed");
      Err(ApiError::GenerationFailed)
    }
  }
}

#[instrument(level = "info", skip(state, body))]
pub async fn save_verified(state: &AppState, body: VerifyIn) -> Result<VerifyAck, ApiError> {
  let (Some(topic), Some(difficulty), Some(question)) = (non_empty(body.topic), non_empty(body.difficulty), body.question) else {
    return Err(ApiError::BadRequest("Missing required fields".into()));
  };
  let difficulty = to_server(&difficulty);

  let outcome = state.store.add(&topic, &difficulty, question).await?;
  info!(target: "generation", %topic, %difficulty, inserted = outcome.inserted, "verified question handled");
  Ok(VerifyAck {
    success: true,
    message: "Question saved successfully".into(),
    question: Some(outcome.question),
  })
}

pub async fn list_questions(state: &AppState) -> Catalog {
  state.store.all().await
}
