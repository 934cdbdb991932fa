//! Server configuration from environment variables, plus prompt overrides
//! loaded from TOML.
//!
//! See `PromptConfig` and `Prompts` for the expected TOML schema:
//!
//! ```toml
//! [prompts]
//! question_system = "..."
//! question_user_template = "... {topic} ... {difficulty} ..."
//! ```

use std::{
  net::SocketAddr,
  path::{Path, PathBuf},
};

use serde::Deserialize;
use tracing::{error, info, warn};

const DEFAULT_PORT: u16 = 5000;

#[derive(Clone, Debug)]
pub struct ServerConfig {
  pub port: u16,
  pub store_path: PathBuf,
  pub static_dir: PathBuf,
  pub prompts_path: Option<PathBuf>,
}

impl ServerConfig {
  pub fn from_env() -> Self {
    let port = match std::env::var("PORT") {
      Ok(p) => p.parse::<u16>().unwrap_or_else(|_| {
        warn!(target: "question_forge", value = %p, "PORT is not a valid u16; using default");
        DEFAULT_PORT
      }),
      Err(_) => DEFAULT_PORT,
    };
    let store_path = std::env::var("QUESTION_STORE_PATH")
      .map(PathBuf::from)
      .unwrap_or_else(|_| PathBuf::from("questions.json"));
    let static_dir = std::env::var("STATIC_DIR")
      .map(PathBuf::from)
      .unwrap_or_else(|_| PathBuf::from("./static"));
    let prompts_path = std::env::var("PROMPTS_CONFIG_PATH").ok().map(PathBuf::from);

    Self { port, store_path, static_dir, prompts_path }
  }

  pub fn socket_addr(&self) -> SocketAddr {
    SocketAddr::from(([0, 0, 0, 0], self.port))
  }
}

#[derive(Clone, Debug, Deserialize, Default)]
pub struct PromptConfig {
  #[serde(default)]
  pub prompts: Prompts,
}

/// Prompts used by the generator. `{topic}` and `{difficulty}` are substituted
/// into the user template.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Prompts {
  pub question_system: String,
  pub question_user_template: String,
}

impl Default for Prompts {
  fn default() -> Self {
    Self {
      question_system: "You are an intelligent coding question generator. Respond ONLY with strict JSON, no markdown, no explanation.".into(),
      question_user_template: r#"Create an entirely new, original, high-quality coding problem about '{topic}' at difficulty '{difficulty}'.

Rules:
1. The problem must be unique: do not copy or lightly rephrase well-known problems.
2. The use-case, data structure and real-world context must be original.
3. Every field must be real and meaningful; no placeholders.
4. Return ONLY raw JSON, no markdown fences, no commentary.

Return JSON in exactly this shape:
{"id": "", "difficulty": "{difficulty}", "topic": "{topic}", "title": "", "description": "", "input_format": "", "output_format": "", "constraint": "", "example": {"input": "", "output": ""}, "test_cases": [{"input": "", "output": ""}, {"input": "", "output": ""}], "tags": ["{topic}", "{difficulty}"]}"#.into(),
    }
  }
}

/// Load prompt overrides from `path`. On any parsing/IO error, returns None.
pub fn load_prompts(path: &Path) -> Option<Prompts> {
  match std::fs::read_to_string(path) {
    Ok(s) => match toml::from_str::<PromptConfig>(&s) {
      Ok(cfg) => {
        info!(target: "question_forge", path = %path.display(), "Loaded prompt config (TOML)");
        Some(cfg.prompts)
      }
      Err(e) => {
        error!(target: "question_forge", path = %path.display(), error = %e, "Failed to parse TOML config");
        None
      }
    },
    Err(e) => {
      error!(target: "question_forge", path = %path.display(), error = %e, "Failed to read TOML config file");
      None
    }
  }
}
