//! View controller: form -> loading -> result, with save / cancel / regenerate / reset.
//!
//! The controller owns an explicit `ViewModel` (what is on screen) and an
//! optional `Session` (what the result view was generated from). All handlers
//! take `&mut self`, so while one request is awaited no other action can start.
//! Everything user-facing goes through a `Surface`.

use tracing::{debug, error, info, instrument};

use crate::client::QuestionApi;
use crate::difficulty::Level;
use crate::domain::GeneratedItem;
use crate::error::ValidationError;
use crate::render::render_to_string;

pub const GENERATE_FAILED: &str = "Error generating content. Please try again.";
pub const REGENERATE_FAILED: &str = "Error generating new content. Please try again.";
pub const SAVE_FAILED: &str = "Failed to save question. Please try again.";
pub const SAVE_OK: &str = "Question saved successfully!";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewState {
  Form,
  Loading,
  /// Fresh result: save and cancel are offered.
  ResultUnverified,
  /// Result after a regenerate: regenerate and reset are offered.
  ResultVerifiedFlow,
}

impl ViewState {
  pub fn is_result(self) -> bool {
    matches!(self, ViewState::ResultUnverified | ViewState::ResultVerifiedFlow)
  }
}

/// Which result-view buttons are visible.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Controls {
  pub save: bool,
  pub cancel: bool,
  pub regenerate: bool,
  pub reset: bool,
}

impl Controls {
  fn unverified() -> Self {
    Self { save: true, cancel: true, regenerate: false, reset: false }
  }

  fn verified_flow() -> Self {
    Self { save: false, cancel: false, regenerate: true, reset: true }
  }
}

impl Default for Controls {
  fn default() -> Self {
    Self::verified_flow()
  }
}

/// Everything a surface needs to draw the screen.
#[derive(Clone, Debug, PartialEq)]
pub struct ViewModel {
  pub state: ViewState,
  pub topic_input: String,
  /// `None` is the selector's default "choose a level" entry.
  pub difficulty: Option<Level>,
  /// Rendered markup of the current result, if any.
  pub content: Option<String>,
  pub controls: Controls,
}

impl Default for ViewModel {
  fn default() -> Self {
    Self {
      state: ViewState::Form,
      topic_input: String::new(),
      difficulty: None,
      content: None,
      controls: Controls::default(),
    }
  }
}

/// Context captured on a successful submit and reused until reset.
#[derive(Clone, Debug, PartialEq)]
pub struct Session {
  pub topic: String,
  pub difficulty: Level,
  pub item: GeneratedItem,
}

/// Where the controller shows things to the user.
pub trait Surface {
  /// Blocking notification.
  fn alert(&mut self, message: &str);

  /// Called after every view change, including the switch to `Loading`.
  fn refresh(&mut self, _view: &ViewModel) {}
}

pub struct Controller<A, S> {
  api: A,
  surface: S,
  view: ViewModel,
  session: Option<Session>,
}

impl<A: QuestionApi, S: Surface> Controller<A, S> {
  pub fn new(api: A, surface: S) -> Self {
    Self { api, surface, view: ViewModel::default(), session: None }
  }

  pub fn view(&self) -> &ViewModel {
    &self.view
  }

  pub fn session(&self) -> Option<&Session> {
    self.session.as_ref()
  }

  pub fn surface(&self) -> &S {
    &self.surface
  }

  pub fn set_topic(&mut self, topic: impl Into<String>) {
    self.view.topic_input = topic.into();
  }

  pub fn select_difficulty(&mut self, level: Option<Level>) {
    self.view.difficulty = level;
  }

  /// Generate button.
  #[instrument(level = "info", skip(self), fields(state = ?self.view.state))]
  pub async fn submit(&mut self) -> ViewState {
    if self.view.state != ViewState::Form {
      debug!(target: "generation", "submit ignored outside the form view");
      return self.view.state;
    }

    let topic = self.view.topic_input.trim().to_string();
    let level = match (topic.is_empty(), self.view.difficulty) {
      (false, Some(level)) => level,
      _ => {
        self.reject(ValidationError::MissingInput);
        return self.view.state;
      }
    };

    self.enter_loading();
    match self.api.generate(&topic, level).await {
      Ok(item) => {
        info!(target: "generation", %topic, %level, title = %item.title, "question generated");
        self.show_result(&item, ViewState::ResultUnverified);
        self.session = Some(Session { topic, difficulty: level, item });
      }
      Err(e) => {
        error!(target: "generation", %topic, %level, error = %e, status = ?e.status(), "Error generating content");
        self.view.state = ViewState::Form;
        self.refresh();
        self.surface.alert(GENERATE_FAILED);
      }
    }
    self.view.state
  }

  /// "Get another response" button.
  #[instrument(level = "info", skip(self), fields(state = ?self.view.state))]
  pub async fn regenerate(&mut self) -> ViewState {
    if !self.view.state.is_result() {
      debug!(target: "generation", "regenerate ignored outside the result view");
      return self.view.state;
    }
    let Some((topic, level)) = self.session.as_ref().map(|s| (s.topic.clone(), s.difficulty)) else {
      self.reject(ValidationError::MissingSession);
      return self.view.state;
    };

    let previous = self.view.state;
    self.enter_loading();
    match self.api.generate(&topic, level).await {
      Ok(item) => {
        info!(target: "generation", %topic, %level, title = %item.title, "question regenerated");
        self.show_result(&item, ViewState::ResultVerifiedFlow);
        if let Some(session) = self.session.as_mut() {
          session.item = item;
        }
      }
      Err(e) => {
        error!(target: "generation", %topic, %level, error = %e, status = ?e.status(), "Error generating new content");
        self.view.state = previous;
        self.refresh();
        self.surface.alert(REGENERATE_FAILED);
      }
    }
    self.view.state
  }

  /// "Verified and save" button.
  #[instrument(level = "info", skip(self), fields(state = ?self.view.state))]
  pub async fn save(&mut self) -> ViewState {
    if !self.view.state.is_result() {
      debug!(target: "generation", "save ignored outside the result view");
      return self.view.state;
    }
    let Some(session) = self.session.as_ref() else {
      self.reject(ValidationError::NothingToSave);
      return self.view.state;
    };

    match self.api.verify(&session.topic, session.difficulty, &session.item).await {
      Ok(ack) => {
        info!(target: "generation", topic = %session.topic, message = %ack.message, "question saved");
        self.surface.alert(SAVE_OK);
        self.reset_view();
      }
      Err(e) => {
        error!(target: "generation", topic = %session.topic, error = %e, status = ?e.status(), "Error saving question");
        self.surface.alert(SAVE_FAILED);
      }
    }
    self.view.state
  }

  /// Discard the result without saving.
  pub fn cancel(&mut self) -> ViewState {
    self.reset_view();
    self.view.state
  }

  /// "Start over" button.
  pub fn reset(&mut self) -> ViewState {
    self.reset_view();
    self.view.state
  }

  /// Shared by cancel, reset and a successful save.
  fn reset_view(&mut self) {
    self.view = ViewModel::default();
    self.session = None;
    self.refresh();
  }

  fn enter_loading(&mut self) {
    self.view.state = ViewState::Loading;
    self.refresh();
  }

  fn show_result(&mut self, item: &GeneratedItem, state: ViewState) {
    self.view.content = Some(render_to_string(item));
    self.view.controls = match state {
      ViewState::ResultUnverified => Controls::unverified(),
      _ => Controls::verified_flow(),
    };
    self.view.state = state;
    self.refresh();
  }

  fn reject(&mut self, e: ValidationError) {
    debug!(target: "generation", reason = %e, "action rejected");
    self.surface.alert(&e.to_string());
  }

  fn refresh(&mut self) {
    self.surface.refresh(&self.view);
  }
}
