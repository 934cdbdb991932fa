//! Small utility helpers used across modules.

/// Very small and safe string templating.
/// Replaces occurrences of `{key}` in the template with provided values.
pub fn fill_template(tpl: &str, pairs: &[(&str, &str)]) -> String {
  let mut out = tpl.to_string();
  for (k, v) in pairs {
    let needle = format!("{{{}}}", k);
    out = out.replace(&needle, v);
  }
  out
}

/// Remove markdown code fences (```json ... ```) models like to wrap JSON in.
pub fn strip_code_fences(s: &str) -> String {
  s.replace("```json", "").replace("```", "").trim().to_string()
}

/// Log-safe truncation for large strings. Cuts on a char boundary.
pub fn trunc_for_log(s: &str, max: usize) -> String {
  if s.len() <= max {
    return s.to_string();
  }
  let mut end = max;
  while !s.is_char_boundary(end) {
    end -= 1;
  }
  format!("{}… ({} bytes total)", &s[..end], s.len())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn fill_template_replaces_every_occurrence() {
    let out = fill_template("{topic}/{difficulty}/{topic}", &[("topic", "graphs"), ("difficulty", "Hard")]);
    assert_eq!(out, "graphs/Hard/graphs");
  }

  #[test]
  fn strips_json_fences() {
    let raw = "```json\n{\"title\": \"x\"}\n```\n";
    assert_eq!(strip_code_fences(raw), "{\"title\": \"x\"}");
  }

  #[test]
  fn truncation_respects_char_boundaries() {
    let s = "ééééé"; // 2 bytes each
    let t = trunc_for_log(s, 3);
    assert!(t.starts_with("é…"));
    assert!(t.ends_with("(10 bytes total)"));
    assert_eq!(trunc_for_log("short", 10), "short");
  }
}
