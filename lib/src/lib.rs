//! # MTG Arena set map generator
//!
//! setmap turns the card, localization and enum dumps downloaded by the MTG Arena client
//! into a [python-mtga](https://github.com/mtgatracker/python-mtga) style set map module:
//! one `Card(...)` declaration per card of the requested set, collected into a `Set`.

#[macro_use]
extern crate serde_derive;
extern crate serde;
extern crate serde_json;
#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate log;
extern crate flate2;
extern crate regex;

pub mod arena;
pub mod card;
pub mod collection;
pub mod data;
pub mod lookup;
pub mod names;
pub mod parse_casting_cost;
pub mod render;
pub mod set_map;

pub use crate::parse_casting_cost::parse_casting_cost;
pub use crate::render::{render, write_set_map};
pub use crate::set_map::{generate, generate_set_map};
