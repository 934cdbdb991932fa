//! Question Forge · generation backend
//!
//! - Axum HTTP API under `/api/gen/...`
//! - OpenAI-compatible question generation (via environment variables)
//! - Static frontend fallback (STATIC_DIR/index.html)
//!
//! Important env variables:
//!   PORT                : u16 (default 5000)
//!   QUESTION_STORE_PATH : verified question catalog (default "questions.json")
//!   STATIC_DIR          : frontend directory (default "./static")
//!   OPENAI_API_KEY      : enables question generation if present
//!   OPENAI_BASE_URL     : default "https://api.openai.com/v1"
//!   OPENAI_MODEL        : default "gpt-4o-mini"
//!   PROMPTS_CONFIG_PATH : path to TOML prompt overrides
//!   LOG_LEVEL           : tracing filter, e.g. "debug" or full directives
//!   LOG_FORMAT          : "pretty" (default) or "json"

use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{info, warn};

use question_forge::config::ServerConfig;
use question_forge::routes::build_router;
use question_forge::state::AppState;
use question_forge::telemetry;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
  telemetry::init_tracing();

  let cfg = ServerConfig::from_env();

  // Shared state: catalog file, generator client, prompts.
  let state = Arc::new(AppState::from_env(&cfg).await?);

  let app = build_router(state, &cfg.static_dir);

  let addr = cfg.socket_addr();
  let listener = TcpListener::bind(addr).await?;
  info!(target: "question_forge", %addr, store = %cfg.store_path.display(), "HTTP server listening");
  axum::serve(listener, app)
    .with_graceful_shutdown(shutdown_signal())
    .await?;
  info!(target: "question_forge", "HTTP server stopped");
  Ok(())
}

async fn shutdown_signal() {
  if let Err(e) = tokio::signal::ctrl_c().await {
    warn!(target: "question_forge", error = %e, "Failed to listen for ctrl-c");
    std::future::pending::<()>().await;
  }
}
