//! Minimal OpenAI-compatible client for question generation.
//!
//! We only call chat.completions and request a strict JSON object.
//! Calls are instrumented and log model names, latencies, and response sizes (not contents).
//!
//! NOTE: We never log the API key and we keep payload truncations short.

use std::time::{Duration, Instant};

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, USER_AGENT};
use serde::{Deserialize, Serialize};
use tracing::{error, info, instrument, warn};
use uuid::Uuid;

use crate::config::Prompts;
use crate::domain::GeneratedItem;
use crate::util::{fill_template, strip_code_fences, trunc_for_log};

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
const DEFAULT_MODEL: &str = "gpt-4o-mini";

#[derive(Clone)]
pub struct OpenAI {
  pub client: reqwest::Client,
  pub api_key: String,
  pub base_url: String,
  pub model: String,
}

impl OpenAI {
  pub fn new(api_key: impl Into<String>, base_url: impl Into<String>, model: impl Into<String>) -> Option<Self> {
    // Model calls are slow but bounded; the client-facing API itself has no timeout.
    let client = reqwest::Client::builder()
      .timeout(Duration::from_secs(60))
      .build()
      .ok()?;
    let base_url = base_url.into().trim_end_matches('/').to_string();
    Some(Self { client, api_key: api_key.into(), base_url, model: model.into() })
  }

  /// Construct the client if we find OPENAI_API_KEY; otherwise return None.
  pub fn from_env() -> Option<Self> {
    let api_key = std::env::var("OPENAI_API_KEY").ok().filter(|k| !k.is_empty())?;
    let base_url = std::env::var("OPENAI_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.into());
    let model = std::env::var("OPENAI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.into());
    Self::new(api_key, base_url, model)
  }

  /// JSON-object chat completion. Generic over the target type T.
  #[instrument(level = "info", skip(self, system, user), fields(model = %self.model))]
  async fn chat_json<T: for<'a> Deserialize<'a>>(
    &self,
    system: &str,
    user: &str,
    temperature: f32,
  ) -> Result<T, String> {
    let url = format!("{}/chat/completions", self.base_url);
    let req = ChatCompletionRequest {
      model: self.model.clone(),
      messages: vec![
        ChatMessageReq { role: "system".into(), content: system.into() },
        ChatMessageReq { role: "user".into(), content: user.into() },
      ],
      temperature,
      response_format: Some(ResponseFormat { r#type: "json_object".into() }),
    };

    let res = self.client.post(&url)
      .header(USER_AGENT, "question-forge/0.1")
      .header(CONTENT_TYPE, "application/json")
      .header(AUTHORIZATION, format!("Bearer {}", self.api_key))
      .json(&req).send().await.map_err(|e| e.to_string())?;

    if !res.status().is_success() {
      let status = res.status();
      let body = res.text().await.unwrap_or_default();
      let msg = extract_openai_error(&body).unwrap_or(body);
      return Err(format!("OpenAI HTTP {}: {}", status, msg));
    }

    let body: ChatCompletionResponse = res.json().await.map_err(|e| e.to_string())?;
    if let Some(usage) = &body.usage {
      info!(prompt_tokens = ?usage.prompt_tokens, completion_tokens = ?usage.completion_tokens, total_tokens = ?usage.total_tokens, "OpenAI usage");
    }
    let text = body.choices.first()
      .and_then(|c| c.message.content.clone())
      .unwrap_or_default();

    let cleaned = strip_code_fences(&text);
    serde_json::from_str::<T>(&cleaned).map_err(|e| {
      warn!(raw = %trunc_for_log(&cleaned, 200), "Model returned invalid JSON");
      format!("JSON parse error: {}", e)
    })
  }

  /// Generate one original coding question for `topic` at `difficulty` (API vocabulary).
  #[instrument(level = "info", skip(self, prompts), fields(%topic, %difficulty, model = %self.model))]
  pub async fn generate_question(
    &self,
    prompts: &Prompts,
    topic: &str,
    difficulty: &str,
  ) -> Result<GeneratedItem, String> {
    let pairs = [("topic", topic), ("difficulty", difficulty)];
    let system = fill_template(&prompts.question_system, &pairs);
    let user = fill_template(&prompts.question_user_template, &pairs);

    let start = Instant::now();
    let result = self.chat_json::<GeneratedItem>(&system, &user, 0.9).await;
    let elapsed = start.elapsed();

    let mut item = match result {
      Ok(item) => {
        info!(?elapsed, "Model response received successfully");
        item
      }
      Err(e) => {
        error!(?elapsed, error = %e, "Model call failed during question generation");
        return Err(format!("Model generation failed: {e}"));
      }
    };

    if !item.has_id() {
      item.set_id(Uuid::new_v4().to_string());
    }

    info!(
      question_id = item.id_str().unwrap_or_default(),
      title_preview = %item.title.chars().take(40).collect::<String>(),
      test_cases = item.test_cases.len(),
      "Question successfully generated"
    );
    Ok(item)
  }
}

// --- Chat DTOs ---

#[derive(Serialize)]
struct ChatCompletionRequest {
  model: String,
  messages: Vec<ChatMessageReq>,
  temperature: f32,
  #[serde(skip_serializing_if = "Option::is_none")]
  response_format: Option<ResponseFormat>,
}
#[derive(Serialize)]
struct ChatMessageReq { role: String, content: String }
#[derive(Serialize)]
struct ResponseFormat { #[serde(rename = "type")] r#type: String }

#[derive(Deserialize)]
struct ChatCompletionResponse {
  choices: Vec<ChatChoice>,
  #[serde(default)] usage: Option<Usage>,
}
#[derive(Deserialize)]
struct ChatChoice { message: ChatMessageResp }
#[derive(Deserialize)]
struct ChatMessageResp { content: Option<String> }
#[derive(Deserialize)]
struct Usage {
  #[serde(default)] prompt_tokens: Option<u32>,
  #[serde(default)] completion_tokens: Option<u32>,
  #[serde(default)] total_tokens: Option<u32>,
}

/// Try to extract a clean error message from OpenAI error body.
fn extract_openai_error(body: &str) -> Option<String> {
  #[derive(Deserialize)]
  struct EWrap { error: EObj }
  #[derive(Deserialize)]
  struct EObj { message: String }
  serde_json::from_str::<EWrap>(body).ok().map(|w| w.error.message)
}
