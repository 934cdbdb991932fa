//! Two difficulty vocabularies and the lookups between them.
//!
//! The form speaks `beginner|intermediate|advanced` (`Level`); the API and the
//! rendered question speak `Easy|Medium|Hard` (`ApiDifficulty`). Unknown values
//! never raise: they fall back to `Medium` towards the API and pass through
//! unchanged for display.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Difficulty as selected in the form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
  Beginner,
  Intermediate,
  Advanced,
}

impl Level {
  pub const ALL: [Level; 3] = [Level::Beginner, Level::Intermediate, Level::Advanced];

  pub fn as_str(self) -> &'static str {
    match self {
      Level::Beginner => "beginner",
      Level::Intermediate => "intermediate",
      Level::Advanced => "advanced",
    }
  }

  /// Exact match on the form vocabulary.
  pub fn parse(s: &str) -> Option<Level> {
    Level::ALL.into_iter().find(|l| l.as_str() == s)
  }

  pub fn api(self) -> ApiDifficulty {
    to_api(self.as_str())
  }
}

impl fmt::Display for Level {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// Difficulty as sent to the generation endpoint and shown to the user.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ApiDifficulty {
  Easy,
  Medium,
  Hard,
}

impl ApiDifficulty {
  pub const ALL: [ApiDifficulty; 3] = [ApiDifficulty::Easy, ApiDifficulty::Medium, ApiDifficulty::Hard];

  pub fn as_str(self) -> &'static str {
    match self {
      ApiDifficulty::Easy => "Easy",
      ApiDifficulty::Medium => "Medium",
      ApiDifficulty::Hard => "Hard",
    }
  }

  pub fn parse(s: &str) -> Option<ApiDifficulty> {
    ApiDifficulty::ALL.into_iter().find(|d| d.as_str() == s)
  }
}

impl fmt::Display for ApiDifficulty {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// Form value -> API value. Anything unknown becomes `Medium`.
pub fn to_api(level: &str) -> ApiDifficulty {
  match level {
    "beginner" => ApiDifficulty::Easy,
    "intermediate" => ApiDifficulty::Medium,
    "advanced" => ApiDifficulty::Hard,
    _ => ApiDifficulty::Medium,
  }
}

/// API value -> display label. Identity on the known set, pass-through otherwise.
pub fn for_display(difficulty: &str) -> &str {
  match ApiDifficulty::parse(difficulty) {
    Some(d) => d.as_str(),
    None => difficulty,
  }
}

/// Server-side normalization: form values are mapped, everything else passes
/// through (generation requests already carry the API vocabulary).
pub fn to_server(difficulty: &str) -> String {
  match Level::parse(difficulty) {
    Some(level) => level.api().as_str().to_string(),
    None => difficulty.to_string(),
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn form_levels_map_to_api_values() {
    assert_eq!(to_api("beginner"), ApiDifficulty::Easy);
    assert_eq!(to_api("intermediate"), ApiDifficulty::Medium);
    assert_eq!(to_api("advanced"), ApiDifficulty::Hard);
  }

  #[test]
  fn unknown_form_values_default_to_medium() {
    for raw in ["", "expert", "Advanced", "Hard", " beginner"] {
      assert_eq!(to_api(raw), ApiDifficulty::Medium, "input {raw:?}");
    }
  }

  #[test]
  fn display_is_identity() {
    for d in ["Easy", "Medium", "Hard"] {
      assert_eq!(for_display(d), d);
    }
    assert_eq!(for_display("Legendary"), "Legendary");
    assert_eq!(for_display(""), "");
  }

  #[test]
  fn server_maps_form_values_and_passes_the_rest() {
    assert_eq!(to_server("advanced"), "Hard");
    assert_eq!(to_server("Hard"), "Hard");
    assert_eq!(to_server("nightmare"), "nightmare");
  }

  #[test]
  fn api_difficulty_serializes_capitalized() {
    assert_eq!(serde_json::to_string(&ApiDifficulty::Hard).unwrap(), "\"Hard\"");
    assert_eq!(serde_json::to_string(&Level::Advanced).unwrap(), "\"advanced\"");
  }
}
