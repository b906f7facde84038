//! # Set map generation
//!
//! Resolves the raw arena card records of one set into [`GeneratedCard`]s.
//! Cards that fail to resolve are logged and left out; only an empty set
//! aborts the pass.
use crate::arena::{DataCard, DataEnum, DataLoc};
use crate::card::{Color, GeneratedCard, Rarity};
use crate::collection::SetCollection;
use crate::lookup::{EnumTable, LocalizationTable};
use crate::names::{class_case, snake_case, NameRegistry};
use crate::parse_casting_cost::parse_casting_cost;
use crate::render::render;
use serde::Deserialize;
use serde_json::Value;
use std::error::Error;
use std::fmt;

#[derive(Debug, PartialEq, Eq)]
pub enum GenerateError {
  NoCardsFound(String),
}

impl fmt::Display for GenerateError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::NoCardsFound(set_name) => write!(
        f,
        "No cards found in set {}. Double check your nomenclature, and ensure the input files contain your set!",
        set_name
      ),
    }
  }
}

impl Error for GenerateError {}

/// Why a single card could not be resolved
#[derive(Debug, PartialEq, Eq)]
pub enum CardError {
  Malformed(String),
  MissingTitle(u64),
  MissingEnumValue(&'static str, u64),
  MissingLocalization(u64),
  UnknownColor(u64),
  UnknownRarity(u64),
  BadCollectorNumber(String),
}

impl fmt::Display for CardError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Malformed(e) => write!(f, "malformed card record: {}", e),
      Self::MissingTitle(id) => write!(f, "no localized title for titleId {}", id),
      Self::MissingEnumValue(name, id) => write!(f, "no {} enum value {}", name, id),
      Self::MissingLocalization(id) => write!(f, "no localized text for id {}", id),
      Self::UnknownColor(id) => write!(f, "unknown color id {}", id),
      Self::UnknownRarity(id) => write!(f, "unknown rarity id {}", id),
      Self::BadCollectorNumber(n) => write!(f, "collector number {:?} is not an integer", n),
    }
  }
}

impl Error for CardError {}

/// Resolves the cards of one set. Holds the identifier names handed out so far,
/// so a resolver must not be shared between sets.
pub struct CardResolver<'a> {
  loc: &'a LocalizationTable,
  enums: &'a EnumTable,
  names: NameRegistry,
  set_code: String,
}

impl<'a> CardResolver<'a> {
  pub fn new(loc: &'a LocalizationTable, enums: &'a EnumTable, set_name: &str) -> Self {
    Self {
      loc,
      enums,
      names: NameRegistry::new(),
      set_code: set_name.to_uppercase(),
    }
  }

  /// Resolves a raw card record, as found in the card dump.
  /// The identifier name is claimed as soon as the title resolves, so a record
  /// that fails afterwards, malformed or not, still takes its name.
  pub fn resolve_value(&mut self, value: &Value) -> Result<GeneratedCard, CardError> {
    let title_id = value
      .get("titleId")
      .and_then(Value::as_u64)
      .ok_or_else(|| CardError::Malformed("missing or invalid titleId".to_string()))?;
    let title = self.loc.get(title_id).ok_or(CardError::MissingTitle(title_id))?;
    let identifier_name = self.names.claim(&class_case(title));
    let card = DataCard::deserialize(value).map_err(|e| CardError::Malformed(e.to_string()))?;
    self.resolve_fields(&card, title, identifier_name)
  }

  fn resolve_fields(
    &self,
    card: &DataCard,
    title: &str,
    identifier_name: String,
  ) -> Result<GeneratedCard, CardError> {
    let snake_name = snake_case(title);
    let cost = parse_casting_cost(&card.casting_cost);
    let color_identity = card
      .color_identity
      .iter()
      .map(|&id| Color::from_id(id).ok_or(CardError::UnknownColor(id)))
      .collect::<Result<Vec<_>, _>>()?;
    let card_type = self.enum_text(EnumTable::CARD_TYPE, &card.types)?;
    let sub_types = self.enum_text(EnumTable::SUB_TYPE, &card.subtypes)?;
    let rarity = Rarity::from_id(card.rarity).ok_or(CardError::UnknownRarity(card.rarity))?;
    let set_number = card
      .collector_number
      .parse()
      .map_err(|_| CardError::BadCollectorNumber(card.collector_number.to_string()))?;
    Ok(GeneratedCard {
      identifier_name,
      snake_name,
      pretty_name: title.to_string(),
      cost,
      color_identity,
      card_type,
      sub_types,
      set_code: self.set_code.clone(),
      rarity,
      set_number,
      grp_id: card.grpid,
    })
  }

  /// Enum ids -> localization ids -> text, joined by spaces in input order
  fn enum_text(&self, enum_name: &'static str, ids: &[u64]) -> Result<String, CardError> {
    let texts = ids
      .iter()
      .map(|&id| {
        let loc_id = self
          .enums
          .get(enum_name, id)
          .ok_or(CardError::MissingEnumValue(enum_name, id))?;
        self
          .loc
          .get(loc_id)
          .ok_or(CardError::MissingLocalization(loc_id))
      })
      .collect::<Result<Vec<_>, _>>()?;
    Ok(texts.join(" "))
  }
}

/// True if the raw card record belongs to `set_name`, ignoring case
pub fn in_set(value: &Value, set_name: &str) -> bool {
  value
    .get("set")
    .and_then(Value::as_str)
    .map(|set| set.to_uppercase() == set_name.to_uppercase())
    .unwrap_or(false)
}

fn field_or_unknown(value: &Value, field: &str) -> String {
  match value.get(field) {
    Some(Value::String(s)) => s.clone(),
    Some(Value::Null) | None => "<unknown>".to_string(),
    Some(v) => v.to_string(),
  }
}

fn title_or_unknown(value: &Value, loc: &LocalizationTable) -> String {
  value
    .get("titleId")
    .and_then(Value::as_u64)
    .and_then(|id| loc.get(id))
    .unwrap_or("<unknown>")
    .to_string()
}

/// Resolves every card of `set_name`, skipping the ones that fail
pub fn generate(
  data_locs: &[DataLoc],
  cards: &[Value],
  data_enums: &[DataEnum],
  set_name: &str,
) -> Result<SetCollection, GenerateError> {
  let loc = LocalizationTable::from_data_locs(data_locs);
  let enums = EnumTable::from_data_enums(data_enums);
  let set_cards: Vec<&Value> = cards.iter().filter(|c| in_set(c, set_name)).collect();
  if set_cards.is_empty() {
    return Err(GenerateError::NoCardsFound(set_name.to_string()));
  }
  info!("translating {} cards from set {}", set_cards.len(), set_name);
  let mut resolver = CardResolver::new(&loc, &enums, set_name);
  let mut generated = Vec::with_capacity(set_cards.len());
  for value in &set_cards {
    match resolver.resolve_value(value) {
      Ok(card) => {
        debug!("{} = {} ({})", card.identifier_name, card.pretty_name, card.grp_id);
        generated.push(card);
      }
      Err(e) => {
        error!(
          "hit an error on {} / {} / {}: {}",
          field_or_unknown(value, "grpid"),
          title_or_unknown(value, &loc),
          field_or_unknown(value, "CollectorNumber"),
          e
        );
      }
    }
  }
  info!(
    "generated {}/{} cards for set {}",
    generated.len(),
    set_cards.len(),
    set_name
  );
  Ok(SetCollection::new(set_name, generated))
}

/// Runs a generation pass and renders the set map module text
pub fn generate_set_map(
  data_locs: &[DataLoc],
  cards: &[Value],
  data_enums: &[DataEnum],
  set_name: &str,
) -> Result<String, GenerateError> {
  generate(data_locs, cards, data_enums, set_name).map(|collection| render(&collection))
}
