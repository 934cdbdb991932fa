//! Markup for a generated question.
//!
//! Rendering is a pure function of the item. Every server-supplied string goes
//! through maud interpolation, which escapes it.

use maud::{html, Markup};

use crate::difficulty::for_display;
use crate::domain::GeneratedItem;

pub fn render(item: &GeneratedItem) -> Markup {
  html! {
    div class="question-container" {
      h3 class="text-xl font-bold mb-2" { (item.title) }
      p { strong { "Topic:" } " " (item.topic) }
      p { strong { "Difficulty:" } " " (for_display(&item.difficulty)) }

      div class="question-description mt-4" {
        h4 class="font-semibold" { "Description:" }
        p class="whitespace-pre-wrap" { (item.description) }
      }

      div class="question-format mt-4" {
        h4 class="font-semibold" { "Input Format:" }
        pre class="bg-gray-100 p-2 rounded" { (item.input_format) }

        h4 class="font-semibold mt-2" { "Output Format:" }
        pre class="bg-gray-100 p-2 rounded" { (item.output_format) }
      }

      div class="question-constraints mt-4" {
        h4 class="font-semibold" { "Constraints:" }
        p { (item.constraint) }
      }

      div class="question-example mt-4" {
        h4 class="font-semibold" { "Example:" }
        p { strong { "Input:" } " " (item.example.input) }
        p { strong { "Output:" } " " (item.example.output) }
      }

      div class="question-test-cases mt-4" {
        h4 class="font-semibold" { "Test Cases:" }
        @for (index, case) in item.test_cases.iter().enumerate() {
          div class="test-case mt-2" {
            p { strong { "Test " (index + 1) ":" } }
            p { strong { "Input:" } " " (case.input) }
            p { strong { "Output:" } " " (case.output) }
          }
        }
      }

      div class="question-tags mt-4" {
        strong { "Tags:" } " " (item.tags.join(", "))
      }
    }
  }
}

/// Convenience for callers that want the markup as a plain string.
pub fn render_to_string(item: &GeneratedItem) -> String {
  render(item).into_string()
}
