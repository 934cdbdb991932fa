//! Verified question catalog, persisted as pretty JSON:
//!
//! ```json
//! { "graphs": { "Easy": [], "Medium": [], "Hard": [ { ...question... } ] } }
//! ```
//!
//! The whole catalog is held in memory behind a `RwLock`. Every accepted save
//! rewrites the file (temp file + rename) while the write lock is held, and the
//! in-memory copy is only updated after the file write succeeded.

use std::{
  collections::BTreeMap,
  path::{Path, PathBuf},
};

use tokio::sync::RwLock;
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

use crate::difficulty::ApiDifficulty;
use crate::domain::GeneratedItem;
use crate::error::StoreError;
use crate::protocol::Catalog;

/// Result of a save: the stored (or already present) question.
#[derive(Debug, Clone)]
pub struct SaveOutcome {
  pub question: GeneratedItem,
  pub inserted: bool,
}

pub struct QuestionStore {
  path: PathBuf,
  catalog: RwLock<Catalog>,
}

impl QuestionStore {
  /// Open the catalog at `path`, creating `{}` if the file does not exist.
  ///
  /// A file that is not JSON at all is treated as an empty catalog. A file that
  /// is JSON but does not have the catalog shape is an error: starting empty
  /// would overwrite it on the next save.
  #[instrument(level = "info", skip_all, fields(path = %path.as_ref().display()))]
  pub async fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
    let path = path.as_ref().to_path_buf();
    let catalog = match tokio::fs::read_to_string(&path).await {
      Ok(s) => match serde_json::from_str::<serde_json::Value>(&s) {
        Ok(value) => serde_json::from_value::<Catalog>(value).map_err(|e| StoreError::Incompatible {
          path: path.display().to_string(),
          reason: e.to_string(),
        })?,
        Err(e) => {
          warn!(target: "question_forge", path = %path.display(), error = %e, "Catalog file is not valid JSON; starting empty");
          Catalog::new()
        }
      },
      Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
          tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(&path, "{}").await?;
        info!(target: "question_forge", path = %path.display(), "Created empty catalog");
        Catalog::new()
      }
      Err(e) => return Err(e.into()),
    };

    let total: usize = catalog.values().flat_map(|b| b.values()).map(Vec::len).sum();
    info!(target: "question_forge", topics = catalog.len(), questions = total, "Catalog loaded");
    Ok(Self { path, catalog: RwLock::new(catalog) })
  }

  /// Add a verified question under `topic` / `difficulty` (API vocabulary).
  ///
  /// A question whose title or id already exists anywhere under the topic is
  /// not stored again; the submitted question is returned as-is.
  #[instrument(level = "info", skip(self, question), fields(%topic, %difficulty, title = %question.title))]
  pub async fn add(&self, topic: &str, difficulty: &str, mut question: GeneratedItem) -> Result<SaveOutcome, StoreError> {
    let bucket = ApiDifficulty::parse(difficulty)
      .ok_or_else(|| StoreError::UnknownDifficulty(difficulty.to_string()))?;

    if !question.has_id() {
      question.set_id(Uuid::new_v4().to_string());
    }

    let mut catalog = self.catalog.write().await;
    let mut by_difficulty = catalog.get(topic).cloned().unwrap_or_else(empty_buckets);

    if is_duplicate(&question, &by_difficulty) {
      debug!(target: "question_forge", %topic, title = %question.title, "Duplicate question; not stored");
      return Ok(SaveOutcome { question, inserted: false });
    }

    by_difficulty
      .entry(bucket.as_str().to_string())
      .or_default()
      .push(question.clone());

    // The in-memory catalog only changes once the file holds the new state.
    let mut next = catalog.clone();
    next.insert(topic.to_string(), by_difficulty);
    write_atomic(&self.path, &serde_json::to_string_pretty(&next)?).await?;
    *catalog = next;

    info!(target: "question_forge", %topic, %difficulty, id = question.id_str().unwrap_or_default(), "Question stored");
    Ok(SaveOutcome { question, inserted: true })
  }

  /// Snapshot of the whole catalog.
  pub async fn all(&self) -> Catalog {
    self.catalog.read().await.clone()
  }
}

fn empty_buckets() -> BTreeMap<String, Vec<GeneratedItem>> {
  ApiDifficulty::ALL
    .into_iter()
    .map(|d| (d.as_str().to_string(), Vec::new()))
    .collect()
}

/// Same title, or same id, anywhere under the topic.
fn is_duplicate(question: &GeneratedItem, by_difficulty: &BTreeMap<String, Vec<GeneratedItem>>) -> bool {
  by_difficulty.values().flatten().any(|q| {
    q.title == question.title || (q.id_str().is_some() && q.id_str() == question.id_str())
  })
}

/// Write to a sibling temp file, then rename over `path`.
async fn write_atomic(path: &Path, contents: &str) -> Result<(), StoreError> {
  let file_name = path.file_name().map(|n| n.to_string_lossy().into_owned()).unwrap_or_default();
  let tmp = path.with_file_name(format!(".{file_name}.tmp"));
  tokio::fs::write(&tmp, contents).await?;
  if let Err(e) = tokio::fs::rename(&tmp, path).await {
    let _ = tokio::fs::remove_file(&tmp).await;
    return Err(e.into());
  }
  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;

  fn question(title: &str, id: Option<&str>) -> GeneratedItem {
    GeneratedItem {
      id: id.map(|id| Some(id.to_string())),
      title: title.into(),
      topic: "graphs".into(),
      difficulty: "Hard".into(),
      ..Default::default()
    }
  }

  #[tokio::test]
  async fn missing_file_is_created_empty() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("questions.json");
    let store = QuestionStore::open(&path).await.unwrap();
    assert!(store.all().await.is_empty());
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "{}");
  }

  #[tokio::test]
  async fn corrupt_file_reads_as_empty() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("questions.json");
    std::fs::write(&path, "not json").unwrap();
    let store = QuestionStore::open(&path).await.unwrap();
    assert!(store.all().await.is_empty());
  }

  #[tokio::test]
  async fn add_creates_all_buckets_and_assigns_an_id() {
    let dir = tempfile::tempdir().unwrap();
    let store = QuestionStore::open(dir.path().join("q.json")).await.unwrap();

    let out = store.add("graphs", "Hard", question("Bridges", None)).await.unwrap();
    assert!(out.inserted);
    assert!(out.question.has_id());

    let all = store.all().await;
    let buckets = &all["graphs"];
    assert_eq!(buckets.keys().collect::<Vec<_>>(), vec!["Easy", "Hard", "Medium"]);
    assert_eq!(buckets["Hard"].len(), 1);
    assert!(buckets["Easy"].is_empty());
  }

  #[tokio::test]
  async fn duplicates_by_title_or_id_are_skipped() {
    let dir = tempfile::tempdir().unwrap();
    let store = QuestionStore::open(dir.path().join("q.json")).await.unwrap();

    store.add("graphs", "Hard", question("Bridges", Some("q-1"))).await.unwrap();
    let same_title = store.add("graphs", "Easy", question("Bridges", Some("q-2"))).await.unwrap();
    let same_id = store.add("graphs", "Medium", question("Other", Some("q-1"))).await.unwrap();
    assert!(!same_title.inserted);
    assert!(!same_id.inserted);

    // Same title under a different topic is fine.
    let other_topic = store.add("trees", "Hard", question("Bridges", Some("q-3"))).await.unwrap();
    assert!(other_topic.inserted);

    let all = store.all().await;
    let graphs: usize = all["graphs"].values().map(Vec::len).sum();
    assert_eq!(graphs, 1);
  }

  #[tokio::test]
  async fn unknown_difficulty_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let store = QuestionStore::open(dir.path().join("q.json")).await.unwrap();
    let err = store.add("graphs", "Legendary", question("Bridges", None)).await.unwrap_err();
    assert!(matches!(err, StoreError::UnknownDifficulty(d) if d == "Legendary"));
    assert!(store.all().await.is_empty());
  }

  #[tokio::test]
  async fn catalog_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("q.json");
    {
      let store = QuestionStore::open(&path).await.unwrap();
      store.add("graphs", "Hard", question("Bridges", Some("q-1"))).await.unwrap();
    }
    let reopened = QuestionStore::open(&path).await.unwrap();
    let all = reopened.all().await;
    assert_eq!(all["graphs"]["Hard"][0].id_str(), Some("q-1"));
  }

  #[tokio::test]
  async fn failed_write_leaves_nothing_behind_and_retry_stores() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("q.json");
    let store = QuestionStore::open(&path).await.unwrap();

    // A directory where the catalog file should be makes the rename fail.
    std::fs::remove_file(&path).unwrap();
    std::fs::create_dir(&path).unwrap();
    std::fs::write(path.join("keep"), "").unwrap();

    let err = store.add("graphs", "Hard", question("Bridges", Some("q-1"))).await.unwrap_err();
    assert!(matches!(err, StoreError::Io(_)), "got {err:?}");
    assert!(store.all().await.is_empty());
    assert!(!dir.path().join(".q.json.tmp").exists());

    std::fs::remove_dir_all(&path).unwrap();
    let retry = store.add("graphs", "Hard", question("Bridges", Some("q-1"))).await.unwrap();
    assert!(retry.inserted);

    let on_disk: Catalog = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(on_disk["graphs"]["Hard"][0].title, "Bridges");
  }

  #[tokio::test]
  async fn legacy_catalog_with_numeric_fields_survives_an_add() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("q.json");
    std::fs::write(
      &path,
      r#"{"arrays": {"Easy": [{"id": "a1", "title": "Old", "test_cases": [{"input": 1, "output": 2}]}], "Medium": [], "Hard": []}}"#,
    )
    .unwrap();

    let store = QuestionStore::open(&path).await.unwrap();
    assert_eq!(store.all().await.len(), 1);
    store.add("graphs", "Hard", question("New", None)).await.unwrap();

    let on_disk: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(on_disk["arrays"]["Easy"][0]["title"], "Old");
    assert_eq!(on_disk["arrays"]["Easy"][0]["test_cases"][0]["input"], "1");
    assert_eq!(on_disk["graphs"]["Hard"][0]["title"], "New");
  }

  #[tokio::test]
  async fn json_with_the_wrong_shape_is_refused() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("q.json");
    std::fs::write(&path, r#"{"arrays": ["not", "buckets"]}"#).unwrap();

    let err = QuestionStore::open(&path).await.err().unwrap();
    assert!(matches!(err, StoreError::Incompatible { .. }), "got {err:?}");
    assert_eq!(std::fs::read_to_string(&path).unwrap(), r#"{"arrays": ["not", "buckets"]}"#);
  }

  #[tokio::test]
  async fn empty_titles_count_as_duplicates() {
    let dir = tempfile::tempdir().unwrap();
    let store = QuestionStore::open(dir.path().join("q.json")).await.unwrap();
    assert!(store.add("graphs", "Hard", question("", None)).await.unwrap().inserted);
    assert!(!store.add("graphs", "Easy", question("", None)).await.unwrap().inserted);
  }
}
