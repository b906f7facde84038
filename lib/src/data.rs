//! # Loading the downloaded game data files
//!
use crate::arena::{DataEnum, DataLoc};
use flate2::read::GzDecoder;
use serde::de::DeserializeOwned;
use std::error::Error;
use std::fmt;
use std::io::prelude::*;
use std::path::{Path, PathBuf};

const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

#[derive(Debug)]
pub enum LoadError {
  Io(PathBuf, std::io::Error),
  Json(PathBuf, serde_json::Error),
}

impl fmt::Display for LoadError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Io(path, e) => write!(f, "cannot read {}: {}", path.display(), e),
      Self::Json(path, e) => write!(f, "cannot parse {}: {}", path.display(), e),
    }
  }
}

impl Error for LoadError {
  fn source(&self) -> Option<&(dyn Error + 'static)> {
    match self {
      Self::Io(_, e) => Some(e),
      Self::Json(_, e) => Some(e),
    }
  }
}

/// The three tables a generation pass needs, all held in memory
#[derive(Debug, Default, Clone)]
pub struct Inputs {
  /// Card records are kept raw so that one malformed record only fails that card
  pub cards: Vec<serde_json::Value>,
  pub locs: Vec<DataLoc>,
  pub enums: Vec<DataEnum>,
}

/// Returns the bytes of `raw`, gunzipped first if they carry the gzip magic
pub fn decompress(raw: Vec<u8>) -> std::io::Result<Vec<u8>> {
  if !raw.starts_with(&GZIP_MAGIC) {
    return Ok(raw);
  }
  let mut gz = GzDecoder::new(&raw[..]);
  let mut s: Vec<u8> = Vec::new();
  gz.read_to_end(&mut s)?;
  Ok(s)
}

/// Reads and deserializes a whole JSON file, plain or gzip compressed
pub fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T, LoadError> {
  info!("Loading JSON file @ {}", path.display());
  let raw = std::fs::read(path).map_err(|e| LoadError::Io(path.to_path_buf(), e))?;
  let bytes = decompress(raw).map_err(|e| LoadError::Io(path.to_path_buf(), e))?;
  serde_json::from_slice(&bytes).map_err(|e| LoadError::Json(path.to_path_buf(), e))
}

/// Loads all three tables before any processing happens
pub fn load_inputs(cards_path: &Path, loc_path: &Path, enums_path: &Path) -> Result<Inputs, LoadError> {
  let cards = load_json(cards_path)?;
  let locs = load_json(loc_path)?;
  let enums = load_json(enums_path)?;
  Ok(Inputs { cards, locs, enums })
}
