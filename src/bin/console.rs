//! Question Forge · console front-end
//!
//! Line-oriented driver for the view controller. Talks to a running backend at
//! GEN_API_BASE_URL (default "http://127.0.0.1:5000").
//!
//! Commands:
//!   topic <text>          set the topic input
//!   level <name|none>     beginner | intermediate | advanced | none
//!   generate              submit the form
//!   regenerate            ask for another question for the same session
//!   save                  verify and save the current question
//!   cancel | reset        back to an empty form
//!   show                  print the current view
//!   quit

use tokio::io::{AsyncBufReadExt, BufReader};

use question_forge::client::HttpQuestionApi;
use question_forge::difficulty::Level;
use question_forge::telemetry;
use question_forge::view::{Controller, Surface, ViewModel, ViewState};

struct Terminal;

impl Surface for Terminal {
  fn alert(&mut self, message: &str) {
    println!("[!] {message}");
  }

  fn refresh(&mut self, view: &ViewModel) {
    print_view(view);
  }
}

fn print_view(view: &ViewModel) {
  match view.state {
    ViewState::Form => {
      let level = view.difficulty.map(Level::as_str).unwrap_or("(select a level)");
      println!("-- form -- topic: {:?}  level: {}", view.topic_input, level);
    }
    ViewState::Loading => println!("-- generating... --"),
    ViewState::ResultUnverified | ViewState::ResultVerifiedFlow => {
      if let Some(content) = &view.content {
        println!("{content}");
      }
      let c = view.controls;
      let actions: Vec<&str> = [
        (c.save, "save"),
        (c.cancel, "cancel"),
        (c.regenerate, "regenerate"),
        (c.reset, "reset"),
      ]
      .into_iter()
      .filter_map(|(visible, name)| visible.then_some(name))
      .collect();
      println!("-- result -- actions: {}", actions.join(", "));
    }
  }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
  telemetry::init_tracing_stderr();

  let base_url = std::env::var("GEN_API_BASE_URL").unwrap_or_else(|_| "http://127.0.0.1:5000".into());
  let mut controller = Controller::new(HttpQuestionApi::new(base_url), Terminal);
  print_view(controller.view());

  let mut lines = BufReader::new(tokio::io::stdin()).lines();
  while let Some(line) = lines.next_line().await? {
    let line = line.trim();
    let (cmd, arg) = line.split_once(' ').map(|(c, a)| (c, a.trim())).unwrap_or((line, ""));
    match cmd {
      "" => {}
      "topic" => controller.set_topic(arg),
      "level" => match (arg, Level::parse(arg)) {
        ("none", _) => controller.select_difficulty(None),
        (_, Some(level)) => controller.select_difficulty(Some(level)),
        (_, None) => println!("unknown level {arg:?}; use beginner, intermediate, advanced or none"),
      },
      "generate" => { controller.submit().await; }
      "regenerate" => { controller.regenerate().await; }
      "save" => { controller.save().await; }
      "cancel" => { controller.cancel(); }
      "reset" => { controller.reset(); }
      "show" => print_view(controller.view()),
      "quit" | "exit" => break,
      other => println!("unknown command {other:?}"),
    }
  }
  Ok(())
}
