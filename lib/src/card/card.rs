//! # Resolved card representation
//!
use super::color::Color;
use super::rarity::Rarity;

/// GeneratedCard is an arena card with every raw id resolved to text,
/// ready to be rendered as one python-mtga `Card(...)` declaration
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct GeneratedCard {
    /// Class cased variable name, unique within one generated set
    pub identifier_name: String,
    /// Snake cased card name, e.g. "ral_izzet_viceroy"
    pub snake_name: String,
    /// The localized card title
    pub pretty_name: String,
    /// Cost tokens in casting order, e.g. ["3", "U", "R"]
    pub cost: Vec<String>,
    pub color_identity: Vec<Color>,
    /// Space separated card types, e.g. "Legendary Planeswalker"
    pub card_type: String,
    /// Space separated sub types, e.g. "Ral"
    pub sub_types: String,
    /// Upper cased set code
    pub set_code: String,
    pub rarity: Rarity,
    pub set_number: i64,
    /// Arena id
    pub grp_id: u64,
}

impl Default for Rarity {
    fn default() -> Self {
        Self::Token
    }
}

impl GeneratedCard {
    /// Returns the color identity as letter codes
    pub fn color_letters(&self) -> Vec<&'static str> {
        self.color_identity.iter().map(|c| c.letter()).collect()
    }

    pub fn rarity_name(&self) -> &'static str {
        self.rarity.name()
    }
}
