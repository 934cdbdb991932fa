//! Domain models shared by client and server: the generated question and its
//! input/output pairs.
//!
//! Models often emit numbers where we expect text (`"input": 5`), so text fields
//! accept any JSON scalar and store its textual form.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// One input/output pair, used for the worked example and each test case.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct IoPair {
  #[serde(default, deserialize_with = "text")] pub input: String,
  #[serde(default, deserialize_with = "text")] pub output: String,
}

impl IoPair {
  pub fn new(input: impl Into<String>, output: impl Into<String>) -> Self {
    Self { input: input.into(), output: output.into() }
  }
}

/// A generated coding question.
///
/// Created by the server per generation request, held by the client only until
/// it is discarded or forwarded to the save endpoint. Fields the client does not
/// know about are kept in `extra` so the item round-trips unmodified.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GeneratedItem {
  /// Outer `None`: key absent. `Some(None)`: explicit `null`.
  #[serde(default, deserialize_with = "present_text", skip_serializing_if = "Option::is_none")]
  pub id: Option<Option<String>>,
  #[serde(default, deserialize_with = "text")] pub title: String,
  #[serde(default, deserialize_with = "text")] pub topic: String,
  /// API vocabulary (`Easy|Medium|Hard`) as sent by the server; not validated.
  #[serde(default, deserialize_with = "text")] pub difficulty: String,
  #[serde(default, deserialize_with = "text")] pub description: String,
  #[serde(default, deserialize_with = "text")] pub input_format: String,
  #[serde(default, deserialize_with = "text")] pub output_format: String,
  #[serde(default, deserialize_with = "text")] pub constraint: String,
  #[serde(default)] pub example: IoPair,
  #[serde(default)] pub test_cases: Vec<IoPair>,
  #[serde(default, deserialize_with = "text_list")] pub tags: Vec<String>,
  #[serde(flatten)]
  pub extra: serde_json::Map<String, Value>,
}

impl GeneratedItem {
  pub fn id_str(&self) -> Option<&str> {
    self.id.as_ref().and_then(|id| id.as_deref())
  }

  /// True when the item carries a non-empty id.
  pub fn has_id(&self) -> bool {
    self.id_str().is_some_and(|id| !id.is_empty())
  }

  pub fn set_id(&mut self, id: impl Into<String>) {
    self.id = Some(Some(id.into()));
  }
}

fn value_to_text(v: Value) -> String {
  match v {
    Value::Null => String::new(),
    Value::String(s) => s,
    other => other.to_string(),
  }
}

fn text<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
  Value::deserialize(d).map(value_to_text)
}

fn present_text<'de, D: Deserializer<'de>>(d: D) -> Result<Option<Option<String>>, D::Error> {
  Ok(Some(Option::<Value>::deserialize(d)?.map(value_to_text)))
}

fn text_list<'de, D: Deserializer<'de>>(d: D) -> Result<Vec<String>, D::Error> {
  Ok(match Value::deserialize(d)? {
    Value::Array(items) => items.into_iter().map(value_to_text).collect(),
    Value::Null => Vec::new(),
    single => vec![value_to_text(single)],
  })
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  #[test]
  fn unknown_fields_survive_a_round_trip() {
    let raw = json!({
      "title": "Bridges",
      "topic": "graphs",
      "difficulty": "Hard",
      "test_cases": [{"input": "1", "output": "2"}],
      "tags": ["graphs"],
      "source_model": "gpt-4o-mini"
    });
    let item: GeneratedItem = serde_json::from_value(raw).unwrap();
    assert_eq!(item.extra.get("source_model"), Some(&json!("gpt-4o-mini")));

    let back = serde_json::to_value(&item).unwrap();
    assert_eq!(back["source_model"], "gpt-4o-mini");
    assert_eq!(back["test_cases"][0]["output"], "2");
    assert!(back.get("id").is_none());
  }

  #[test]
  fn scalar_values_are_read_as_text() {
    let raw = json!({
      "title": "Sums",
      "constraint": 100000,
      "example": {"input": 5, "output": 10},
      "test_cases": [{"input": [1, 2], "output": true}, {"input": null, "output": 2.5}],
      "tags": ["math", 7]
    });
    let item: GeneratedItem = serde_json::from_value(raw).unwrap();
    assert_eq!(item.constraint, "100000");
    assert_eq!(item.example, IoPair::new("5", "10"));
    assert_eq!(item.test_cases[0], IoPair::new("[1,2]", "true"));
    assert_eq!(item.test_cases[1], IoPair::new("", "2.5"));
    assert_eq!(item.tags, vec!["math".to_string(), "7".to_string()]);
  }

  #[test]
  fn explicit_null_id_is_forwarded_as_null() {
    let item: GeneratedItem = serde_json::from_value(json!({"id": null, "title": "x"})).unwrap();
    assert_eq!(item.id, Some(None));
    assert!(!item.has_id());
    let back = serde_json::to_value(&item).unwrap();
    assert_eq!(back.get("id"), Some(&Value::Null));
  }

  #[test]
  fn numeric_id_becomes_text() {
    let item: GeneratedItem = serde_json::from_value(json!({"id": 17})).unwrap();
    assert_eq!(item.id_str(), Some("17"));
  }

  #[test]
  fn empty_id_does_not_count() {
    let mut item = GeneratedItem::default();
    assert!(!item.has_id());
    item.set_id("");
    assert!(!item.has_id());
    item.set_id("q-1");
    assert!(item.has_id());
    assert_eq!(item.id_str(), Some("q-1"));
  }
}
