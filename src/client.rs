//! Client for the generation API.
//!
//! `QuestionApi` is the seam the view controller talks through; `HttpQuestionApi`
//! is the reqwest implementation. One attempt per call: no retry, no timeout,
//! no backoff.

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, instrument};

use crate::difficulty::Level;
use crate::domain::GeneratedItem;
use crate::error::RequestError;
use crate::protocol::{GenerateRequest, VerifyAck, VerifyRequest};
use crate::util::trunc_for_log;

pub const GENERATE_PATH: &str = "/api/gen/question";
pub const VERIFY_PATH: &str = "/api/gen/verify";

#[async_trait]
pub trait QuestionApi: Send + Sync {
  /// Ask the server for a fresh question.
  async fn generate(&self, topic: &str, level: Level) -> Result<GeneratedItem, RequestError>;

  /// Forward an unmodified item to the save endpoint together with the
  /// session context it was generated for.
  async fn verify(&self, topic: &str, level: Level, item: &GeneratedItem) -> Result<VerifyAck, RequestError>;
}

#[derive(Clone, Debug)]
pub struct HttpQuestionApi {
  client: reqwest::Client,
  base_url: String,
}

impl HttpQuestionApi {
  /// `base_url` is the origin the API is served from, e.g. `http://127.0.0.1:5000`.
  pub fn new(base_url: impl Into<String>) -> Self {
    Self::with_client(reqwest::Client::new(), base_url)
  }

  pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
    let base_url = base_url.into().trim_end_matches('/').to_string();
    Self { client, base_url }
  }

  pub fn base_url(&self) -> &str {
    &self.base_url
  }

  async fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T, RequestError> {
    let url = format!("{}{}", self.base_url, path);
    let res = self.client.post(&url)
      .header(CONTENT_TYPE, "application/json")
      .json(body)
      .send()
      .await?;

    let status = res.status();
    if !status.is_success() {
      let body = res.text().await.unwrap_or_default();
      return Err(RequestError::Status { status: status.as_u16(), body: trunc_for_log(&body, 512) });
    }

    let text = res.text().await?;
    debug!(target: "question_forge", %url, status = status.as_u16(), body_len = text.len(), "API response received");
    serde_json::from_str::<T>(&text).map_err(|e| RequestError::Decode(e.to_string()))
  }
}

#[async_trait]
impl QuestionApi for HttpQuestionApi {
  #[instrument(level = "info", skip(self), fields(difficulty = %level.api()))]
  async fn generate(&self, topic: &str, level: Level) -> Result<GeneratedItem, RequestError> {
    let body = GenerateRequest { topic, difficulty: level.api() };
    self.post_json(GENERATE_PATH, &body).await
  }

  #[instrument(level = "info", skip(self, item), fields(title = %item.title))]
  async fn verify(&self, topic: &str, level: Level, item: &GeneratedItem) -> Result<VerifyAck, RequestError> {
    let body = VerifyRequest { topic, difficulty: level.as_str(), question: item };
    self.post_json(VERIFY_PATH, &body).await
  }
}
