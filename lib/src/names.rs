//! # Identifier names derived from card and set titles
//!
use regex::Regex;
use std::borrow::Cow;
use std::collections::HashSet;

lazy_static! {
  static ref NOT_IDENTIFIER_REGEX: Regex =
    Regex::new(r"[^0-9a-zA-Z_]").expect("Failed to compile NOT_IDENTIFIER_REGEX");
}

fn strip_non_identifier(s: &str) -> Cow<'_, str> {
  NOT_IDENTIFIER_REGEX.replace_all(s, "")
}

/// "Ral, Izzet Viceroy" -> "RalIzzetViceroy"
pub fn class_case(title: &str) -> String {
  strip_non_identifier(title).into_owned()
}

/// "Ral, Izzet Viceroy" -> "ral_izzet_viceroy"
pub fn snake_case(title: &str) -> String {
  strip_non_identifier(&title.to_lowercase().replace(' ', "_")).into_owned()
}

/// Hands out identifier names that are unique within one generated set
#[derive(Debug, Default, Clone)]
pub struct NameRegistry {
  used: HashSet<String>,
}

impl NameRegistry {
  pub fn new() -> Self {
    Self::default()
  }

  /// Returns `candidate`, or `candidate` suffixed with the first free number
  /// starting at 2, and marks the returned name as used
  pub fn claim(&mut self, candidate: &str) -> String {
    let mut name = candidate.to_string();
    let mut suffix = 2;
    while self.used.contains(&name) {
      name = format!("{}{}", candidate, suffix);
      suffix += 1;
    }
    self.used.insert(name.clone());
    name
  }
}
