//! Public protocol structs for the HTTP endpoints (serde ready).
//! Shared by the client and the server so both sides agree on the wire format.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::difficulty::ApiDifficulty;
use crate::domain::GeneratedItem;

/// Body the client sends to `POST /api/gen/question`.
#[derive(Debug, Clone, Serialize)]
pub struct GenerateRequest<'a> {
  pub topic: &'a str,
  pub difficulty: ApiDifficulty,
}

/// Body the client sends to `POST /api/gen/verify`.
#[derive(Debug, Clone, Serialize)]
pub struct VerifyRequest<'a> {
  pub topic: &'a str,
  pub difficulty: &'a str,
  pub question: &'a GeneratedItem,
}

/// What the server accepts on `POST /api/gen/question`. Fields are optional so
/// absent values become a 400 with a readable message.
#[derive(Debug, Deserialize)]
pub struct GenerateIn {
  #[serde(default)] pub topic: Option<String>,
  #[serde(default)] pub difficulty: Option<String>,
}

/// What the server accepts on `POST /api/gen/verify`.
#[derive(Debug, Deserialize)]
pub struct VerifyIn {
  #[serde(default)] pub topic: Option<String>,
  #[serde(default)] pub difficulty: Option<String>,
  #[serde(default)] pub question: Option<GeneratedItem>,
}

/// Acknowledgement returned by `POST /api/gen/verify`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VerifyAck {
  #[serde(default)] pub success: bool,
  #[serde(default)] pub message: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub question: Option<GeneratedItem>,
}

/// topic -> difficulty bucket -> questions
pub type Catalog = BTreeMap<String, BTreeMap<String, Vec<GeneratedItem>>>;

#[derive(Debug, Serialize)]
pub struct ErrorOut {
  pub error: String,
}

#[derive(Debug, Serialize)]
pub struct HealthOut {
  pub ok: bool,
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  #[test]
  fn generate_request_uses_api_vocabulary() {
    let body = serde_json::to_value(GenerateRequest { topic: "graphs", difficulty: ApiDifficulty::Hard }).unwrap();
    assert_eq!(body, json!({"topic": "graphs", "difficulty": "Hard"}));
  }

  #[test]
  fn verify_in_tolerates_missing_fields() {
    let v: VerifyIn = serde_json::from_value(json!({"topic": "graphs"})).unwrap();
    assert_eq!(v.topic.as_deref(), Some("graphs"));
    assert!(v.difficulty.is_none());
    assert!(v.question.is_none());
  }
}
