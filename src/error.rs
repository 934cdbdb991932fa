//! Error types for the client controller and the HTTP service.

use axum::{
  http::StatusCode,
  response::{IntoResponse, Response},
  Json,
};
use thiserror::Error;

use crate::protocol::ErrorOut;

/// Input problems caught before anything goes on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
  #[error("Please enter both a topic and select a difficulty level")]
  MissingInput,

  #[error("Error: Missing topic or difficulty")]
  MissingSession,

  #[error("Error: Missing data to save")]
  NothingToSave,
}

/// A failed call to the generation or verification endpoint.
#[derive(Debug, Error)]
pub enum RequestError {
  #[error("request failed: {0}")]
  Transport(String),

  #[error("HTTP error! status: {status}")]
  Status { status: u16, body: String },

  #[error("invalid response body: {0}")]
  Decode(String),
}

impl RequestError {
  /// HTTP status, when the server answered at all.
  pub fn status(&self) -> Option<u16> {
    match self {
      RequestError::Status { status, .. } => Some(*status),
      _ => None,
    }
  }
}

impl From<reqwest::Error> for RequestError {
  fn from(e: reqwest::Error) -> Self {
    if e.is_decode() {
      RequestError::Decode(e.to_string())
    } else if let Some(status) = e.status() {
      RequestError::Status { status: status.as_u16(), body: String::new() }
    } else {
      RequestError::Transport(e.to_string())
    }
  }
}

/// Catalog persistence errors.
#[derive(Debug, Error)]
pub enum StoreError {
  #[error("Unknown difficulty: {0}")]
  UnknownDifficulty(String),

  #[error("Catalog at {path} is not a question catalog: {reason}")]
  Incompatible { path: String, reason: String },

  #[error("Catalog I/O error: {0}")]
  Io(#[from] std::io::Error),

  #[error("Catalog serialization error: {0}")]
  Serialize(#[from] serde_json::Error),
}

/// Errors surfaced by the HTTP handlers as `{ "error": ... }`.
#[derive(Debug, Error)]
pub enum ApiError {
  #[error("{0}")]
  BadRequest(String),

  #[error("Failed to generate question")]
  GenerationFailed,

  #[error("{0}")]
  Storage(String),
}

impl From<StoreError> for ApiError {
  fn from(e: StoreError) -> Self {
    match e {
      StoreError::UnknownDifficulty(_) => ApiError::BadRequest(e.to_string()),
      other => ApiError::Storage(other.to_string()),
    }
  }
}

impl ApiError {
  pub fn status_code(&self) -> StatusCode {
    match self {
      ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
      ApiError::GenerationFailed | ApiError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    (self.status_code(), Json(ErrorOut { error: self.to_string() })).into_response()
  }
}
