//! Application state: verified question catalog, prompts and the optional
//! OpenAI client.

use tracing::{info, instrument};

use crate::config::{load_prompts, Prompts, ServerConfig};
use crate::error::StoreError;
use crate::openai::OpenAI;
use crate::store::QuestionStore;

pub struct AppState {
    pub openai: Option<OpenAI>,
    pub prompts: Prompts,
    pub store: QuestionStore,
}

impl AppState {
    pub fn new(openai: Option<OpenAI>, prompts: Prompts, store: QuestionStore) -> Self {
        Self { openai, prompts, store }
    }

    /// Build state from env: prompt overrides, catalog file, OpenAI client.
    #[instrument(level = "info", skip_all)]
    pub async fn from_env(cfg: &ServerConfig) -> Result<Self, StoreError> {
        let prompts = cfg
            .prompts_path
            .as_deref()
            .and_then(load_prompts)
            .unwrap_or_default();

        let store = QuestionStore::open(&cfg.store_path).await?;

        let openai = OpenAI::from_env();
        if let Some(oa) = &openai {
            info!(target: "question_forge", base_url = %oa.base_url, model = %oa.model, "OpenAI enabled.");
        } else {
            info!(target: "question_forge", "OpenAI disabled (no OPENAI_API_KEY). Generation requests will fail.");
        }

        Ok(Self::new(openai, prompts, store))
    }
}
