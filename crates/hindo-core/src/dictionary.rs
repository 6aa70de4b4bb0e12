use serde::{Deserialize, Serialize};

use crate::meta::{DictionaryId, RawMetaRecord};

/// Storage of installed dictionaries and their meta rows
pub trait MetaStore: Send + Sync {
    /// Installed dictionaries in installation order
    fn dictionaries(&self) -> Vec<DictionaryInfo>;

    /// Register a dictionary before inserting its rows
    fn add_dictionary(&mut self, info: DictionaryInfo) -> Result<(), StoreError>;

    fn set_enabled(&mut self, id: &DictionaryId, enabled: bool) -> Result<(), StoreError>;

    /// Batch insert, rows must belong to registered dictionaries
    fn insert_meta(&mut self, records: Vec<RawMetaRecord>) -> Result<usize, StoreError>;

    /// Remove a dictionary and every row it owns, returns the number of rows removed
    fn delete_dictionary(&mut self, id: &DictionaryId) -> Result<usize, StoreError>;

    /// Rows whose normalized expression matches `expression`, restricted to
    /// enabled dictionaries
    fn meta_for(&self, expression: &str) -> Vec<RawMetaRecord>;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DictionaryInfo {
    pub id: DictionaryId,
    pub title: String,
    #[serde(default)]
    pub revision: String,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

fn default_enabled() -> bool {
    true
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Unknown dictionary: {0}")]
    UnknownDictionary(DictionaryId),

    #[error("Dictionary already installed: {0}")]
    DuplicateDictionary(DictionaryId),
}

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    #[error("Parse error: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error(transparent)]
    Store(#[from] StoreError),
}
