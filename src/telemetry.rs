//! Telemetry initialization (tracing/tracing-subscriber).
//!
//! Behavior:
//! - LOG_LEVEL controls the filter (e.g. "debug" or detailed directives like
//!   "info,question_forge=debug,tower_http=info,axum=info").
//! - LOG_FORMAT selects "pretty" (default) or "json" structured logs.
//!
//! The console front-end calls `init_tracing_stderr` so log lines never mix
//! with the rendered view on stdout.

use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info,question_forge=debug,generation=debug,tower_http=info,axum=info";

fn filter_from_env(default: &str) -> EnvFilter {
    EnvFilter::try_from_env("LOG_LEVEL").unwrap_or_else(|_| EnvFilter::new(default))
}

pub fn init_tracing() {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter_from_env(DEFAULT_FILTER))
        .with_target(true)
        .with_file(true)
        .with_line_number(true);

    // Choose JSON vs pretty; don't try to store different layer types.
    match std::env::var("LOG_FORMAT").as_deref() {
        Ok("json") => {
            builder.json().init();
        }
        _ => {
            builder.init();
        }
    }
}

/// Quieter variant for the console: warnings by default, always on stderr.
pub fn init_tracing_stderr() {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter_from_env("warn"))
        .with_target(true)
        .with_writer(std::io::stderr);

    match std::env::var("LOG_FORMAT").as_deref() {
        Ok("json") => {
            builder.json().init();
        }
        _ => {
            builder.init();
        }
    }
}
