mod card;
mod color;
mod rarity;

pub use card::*;
pub use color::*;
pub use rarity::*;
