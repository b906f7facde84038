/// Color represents a [color](https://mtg.gamepedia.com/Color) of a card's color identity
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Color {
  White = 1,
  Blue = 2,
  Black = 3,
  Red = 4,
  Green = 5,
}

impl Color {
  /// Arena color id to color, in WUBRG order
  pub const ALL: [(u64, Color); 5] = [
    (1, Color::White),
    (2, Color::Blue),
    (3, Color::Black),
    (4, Color::Red),
    (5, Color::Green),
  ];

  /// Returns the color for an arena color id, or None for ids outside 1..=5
  pub fn from_id(id: u64) -> Option<Self> {
    Self::ALL
      .iter()
      .find(|(color_id, _)| *color_id == id)
      .map(|&(_, color)| color)
  }

  /// Returns the single letter color code
  pub fn letter(self) -> &'static str {
    match self {
      Self::White => "W",
      Self::Blue => "U",
      Self::Black => "B",
      Self::Red => "R",
      Self::Green => "G",
    }
  }
}

#[cfg(test)]
mod tests {
  use crate::card::*;

  #[test]
  fn color_ids() {
    let letters: Vec<_> = [1, 2, 3, 4, 5]
      .iter()
      .map(|&id| Color::from_id(id).unwrap().letter())
      .collect();
    assert_eq!(letters, vec!["W", "U", "B", "R", "G"]);
  }

  #[test]
  fn red_green_identity() {
    let colors: Vec<_> = [4, 5].iter().filter_map(|&id| Color::from_id(id)).collect();
    assert_eq!(colors, vec![Color::Red, Color::Green]);
  }

  #[test]
  fn unknown_color_ids() {
    assert_eq!(Color::from_id(0), None);
    assert_eq!(Color::from_id(6), None);
  }
}
