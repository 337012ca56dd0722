//! Bundled Dataset
//!
//! The restaurant list ships inside the binary and never changes at runtime.

use crate::models::Entry;

const BUNDLED_JSON: &str = include_str!("../assets/ramen.json");

/// Dataset parse failure
#[derive(Debug, Clone, PartialEq)]
pub enum DatasetError {
    Malformed(String),
}

impl std::fmt::Display for DatasetError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DatasetError::Malformed(msg) => write!(f, "Malformed dataset: {}", msg),
        }
    }
}

impl std::error::Error for DatasetError {}

pub fn parse_dataset(json: &str) -> Result<Vec<Entry>, DatasetError> {
    serde_json::from_str(json).map_err(|e| DatasetError::Malformed(e.to_string()))
}

/// Parse the bundled restaurant list
pub fn load_dataset() -> Result<Vec<Entry>, DatasetError> {
    parse_dataset(BUNDLED_JSON)
}
