//! # Collection
//!
use crate::card::GeneratedCard;
use crate::names::{class_case, snake_case};
use std::ops::Deref;

/// SetCollection holds every card resolved for one set, in input order
#[derive(Debug, Default, Clone)]
pub struct SetCollection {
  /// The set name as requested, e.g. "grn"
  pub set_name: String,
  pub cards: Vec<GeneratedCard>,
}

impl SetCollection {
  pub fn new(set_name: &str, cards: Vec<GeneratedCard>) -> Self {
    Self {
      set_name: set_name.to_string(),
      cards,
    }
  }

  /// Name of the python `Set` variable. Built from the set code so that the
  /// module does not depend on how the set name was typed.
  pub fn class_name(&self) -> String {
    class_case(&self.set_code())
  }

  /// Name passed to the python `Set` constructor
  pub fn snake_name(&self) -> String {
    snake_case(&self.set_name)
  }

  /// Upper cased set code stamped on every card
  pub fn set_code(&self) -> String {
    self.set_name.to_uppercase()
  }
}

impl Deref for SetCollection {
  type Target = [GeneratedCard];

  fn deref(&self) -> &Self::Target {
    &self.cards
  }
}
