use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of an installed dictionary
///
/// Opaque to everything but equality; it is carried from the stored
/// meta rows to the observations shown in the UI.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DictionaryId(String);

impl DictionaryId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DictionaryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for DictionaryId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for DictionaryId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Purpose of a meta record
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum MetaKind {
    Frequency,
    Pitch,
    Ipa,
    Other(String),
}

impl MetaKind {
    /// Parse the mode column of a meta bank row
    pub fn from_mode(mode: &str) -> Self {
        match mode {
            "freq" => MetaKind::Frequency,
            "pitch" => MetaKind::Pitch,
            "ipa" => MetaKind::Ipa,
            other => MetaKind::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            MetaKind::Frequency => "freq",
            MetaKind::Pitch => "pitch",
            MetaKind::Ipa => "ipa",
            MetaKind::Other(mode) => mode,
        }
    }
}

/// A stored meta row, as handed over by the persistence layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawMetaRecord {
    pub dictionary_id: DictionaryId,
    /// Term or kanji the row is keyed by
    pub expression: String,
    pub kind: MetaKind,
    /// Encoded JSON, shape depends on the dictionary
    pub payload: String,
}

impl RawMetaRecord {
    pub fn new(
        dictionary_id: impl Into<DictionaryId>,
        expression: impl Into<String>,
        kind: MetaKind,
        payload: impl Into<String>,
    ) -> Self {
        Self {
            dictionary_id: dictionary_id.into(),
            expression: expression.into(),
            kind,
            payload: payload.into(),
        }
    }

    pub fn is_frequency(&self) -> bool {
        self.kind == MetaKind::Frequency
    }
}

/// One normalized frequency value from one dictionary
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FrequencyObservation {
    /// Empty when the dictionary gives no reading
    pub reading: String,
    /// Never empty
    pub display_text: String,
    /// Lower is more common; `None` for qualitative labels
    pub rank: Option<i64>,
    pub source_dictionary_id: DictionaryId,
}
