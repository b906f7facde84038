//! # Lookup tables built from the localization and enum dumps
//!
use crate::arena::{DataEnum, DataLoc};
use std::collections::HashMap;

/// Localization id to display text
#[derive(Debug, Default, Clone)]
pub struct LocalizationTable {
  strings: HashMap<u64, String>,
}

impl LocalizationTable {
  /// Builds the table from the first entry of the localization dump.
  /// Later duplicate ids overwrite earlier ones.
  pub fn from_data_locs(data_locs: &[DataLoc]) -> Self {
    let mut strings = HashMap::new();
    if let Some(data_loc) = data_locs.first() {
      for k in &data_loc.keys {
        if let Some(old) = strings.insert(k.id, k.text.clone()) {
          warn!("overwriting id {} = {} with {}", k.id, old, k.text);
        }
      }
    }
    Self { strings }
  }

  pub fn get(&self, id: u64) -> Option<&str> {
    self.strings.get(&id).map(|s| s.as_str())
  }
}

/// Enum name to (raw enum id to localization id)
#[derive(Debug, Default, Clone)]
pub struct EnumTable {
  enums: HashMap<String, HashMap<u64, u64>>,
}

impl EnumTable {
  pub const CARD_TYPE: &'static str = "CardType";
  pub const SUB_TYPE: &'static str = "SubType";

  pub fn from_data_enums(data_enums: &[DataEnum]) -> Self {
    let enums = data_enums
      .iter()
      .map(|e| {
        let values = e.values.iter().map(|v| (v.id, v.text)).collect();
        (e.name.clone(), values)
      })
      .collect();
    Self { enums }
  }

  /// Returns the localization id for `id` in the enum called `name`
  pub fn get(&self, name: &str, id: u64) -> Option<u64> {
    self.enums.get(name).and_then(|values| values.get(&id)).copied()
  }
}
