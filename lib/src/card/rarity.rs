/// Rarity as numbered by the arena card dump
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rarity {
  Token = 0,
  Basic = 1,
  Common = 2,
  Uncommon = 3,
  Rare = 4,
  MythicRare = 5,
}

impl Rarity {
  pub const ALL: [Rarity; 6] = [
    Rarity::Token,
    Rarity::Basic,
    Rarity::Common,
    Rarity::Uncommon,
    Rarity::Rare,
    Rarity::MythicRare,
  ];

  /// Returns the rarity for an arena rarity id, or None for ids outside 0..=5
  pub fn from_id(id: u64) -> Option<Self> {
    Self::ALL.iter().copied().find(|r| *r as u64 == id)
  }

  /// Display name used by python-mtga
  pub fn name(self) -> &'static str {
    match self {
      Self::Token => "Token",
      Self::Basic => "Basic",
      Self::Common => "Common",
      Self::Uncommon => "Uncommon",
      Self::Rare => "Rare",
      Self::MythicRare => "Mythic Rare",
    }
  }
}
