//! Question Forge · coding question generator
//!
//! Two halves live in this crate:
//!
//! - the client side: difficulty mapping, an HTTP client for the generation API,
//!   a markup renderer and the view controller that drives the form/loading/result
//!   flow (used by the `console` binary);
//! - the server side: the axum service behind `/api/gen/*`, an OpenAI-compatible
//!   generator and the JSON catalog of verified questions (used by the main binary).

pub mod client;
pub mod config;
pub mod difficulty;
pub mod domain;
pub mod error;
pub mod logic;
pub mod openai;
pub mod protocol;
pub mod render;
pub mod routes;
pub mod state;
pub mod store;
pub mod telemetry;
pub mod util;
pub mod view;
