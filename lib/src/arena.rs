//! # Structures related to the downloaded game data files
//!
use std::fmt;
use std::num::ParseIntError;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum IsoCode {
    #[serde(rename = "en-US")]
    EnUS,
    #[serde(other)]
    Other,
}

/// One language entry of the localization dump
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataLoc {
    #[serde(rename = "isoCode", default)]
    pub iso_code: Option<IsoCode>,
    pub keys: Vec<DataKey>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataKey {
    pub id: u64,
    pub text: String,
}

/// One named group of the enum dump, e.g. "CardType" or "SubType"
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataEnum {
    pub name: String,
    pub values: Vec<DataEnumValue>,
}

/// Maps a raw enum id to the localization id of its display text
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataEnumValue {
    pub id: u64,
    pub text: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataCard {
    pub grpid: u64,
    #[serde(rename = "titleId")]
    pub titleid: u64,
    pub set: String,
    #[serde(rename = "castingcost")]
    pub casting_cost: String,
    #[serde(rename = "colorIdentity")]
    pub color_identity: Vec<u64>,
    pub types: Vec<u64>,
    pub subtypes: Vec<u64>,
    pub rarity: u64,
    #[serde(rename = "CollectorNumber")]
    pub collector_number: CollectorNumber,
}

/// The dumps store collector numbers as strings, but older ones used bare integers
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum CollectorNumber {
    Number(i64),
    Text(String),
}

impl CollectorNumber {
    pub fn parse(&self) -> Result<i64, ParseIntError> {
        match self {
            Self::Number(n) => Ok(*n),
            Self::Text(s) => s.trim().parse::<i64>(),
        }
    }
}

impl fmt::Display for CollectorNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}", n),
            Self::Text(s) => write!(f, "{}", s),
        }
    }
}
