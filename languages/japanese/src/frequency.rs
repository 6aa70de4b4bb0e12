//! Frequency resolution over raw meta rows.
//!
//! Dictionary packages disagree on how a frequency is written down. A payload
//! can be any of:
//!
//! ```text
//! 23500
//! "very common"
//! {"reading": "せい", "frequency": 3500}
//! {"reading": "なま", "frequency": {"value": 12000, "displayValue": "Frequent"}}
//! {"value": 18000, "displayValue": "Common Word"}
//! ```
//!
//! [`resolve`] turns any mix of those into one list of
//! [`FrequencyObservation`]s ordered by rank.

use hindo_core::{FrequencyObservation, RawMetaRecord};
use serde_json::{Map, Number, Value};

/// Display text for accepted rows that carry no usable value
pub const UNKNOWN_DISPLAY: &str = "Unknown";

/// Resolve the frequency rows among `records`, most common first.
///
/// Rows of other kinds are ignored. Rows whose payload can't be decoded or
/// has no recognized shape are dropped with a warning. Unranked observations
/// sort last and equal ranks keep their input order.
pub fn resolve<'a, I>(records: I) -> Vec<FrequencyObservation>
where
    I: IntoIterator<Item = &'a RawMetaRecord>,
{
    let mut observations: Vec<FrequencyObservation> = records
        .into_iter()
        .filter(|record| record.is_frequency())
        .filter_map(decode)
        .collect();

    // sort_by_key is stable
    observations.sort_by_key(|o| o.rank.unwrap_or(i64::MAX));
    observations
}

/// Decode a single row, `None` if it has to be dropped
pub fn decode(record: &RawMetaRecord) -> Option<FrequencyObservation> {
    let payload: Value = match serde_json::from_str(&record.payload) {
        Ok(payload) => payload,
        Err(e) => {
            tracing::warn!(
                dictionary = %record.dictionary_id,
                expression = %record.expression,
                "Failed to decode frequency payload: {e}"
            );
            return None;
        }
    };

    let Some((reading, value)) = FrequencyShape::classify(payload).extract() else {
        tracing::warn!(
            dictionary = %record.dictionary_id,
            expression = %record.expression,
            payload = %record.payload,
            "Unrecognized frequency payload"
        );
        return None;
    };

    Some(FrequencyObservation {
        reading,
        display_text: value.display_text,
        rank: value.rank,
        source_dictionary_id: record.dictionary_id.clone(),
    })
}

/// Structural shape of a frequency payload
#[derive(Debug, Clone, PartialEq)]
pub enum FrequencyShape {
    BareNumber(Number),
    BareString(String),
    /// `{"reading"?, "frequency": {"value"?, "displayValue"?}}`
    NestedFrequency {
        reading: String,
        frequency: Map<String, Value>,
    },
    /// `{"reading"?, "frequency": 3500}`
    ScalarFrequency { reading: String, frequency: Value },
    /// `{"reading"?, "value"?, "displayValue"?}`
    ValueDisplay {
        reading: String,
        object: Map<String, Value>,
    },
    Unrecognized,
}

impl FrequencyShape {
    /// Classify a decoded payload. The first matching shape wins, in
    /// declaration order.
    pub fn classify(payload: Value) -> Self {
        match payload {
            Value::Number(n) => FrequencyShape::BareNumber(n),
            Value::String(s) => FrequencyShape::BareString(s),
            Value::Object(mut object) => {
                let reading = reading_of(&object);
                match object.remove("frequency") {
                    Some(Value::Object(frequency)) => {
                        FrequencyShape::NestedFrequency { reading, frequency }
                    }
                    Some(frequency @ (Value::Number(_) | Value::String(_) | Value::Bool(_))) => {
                        FrequencyShape::ScalarFrequency { reading, frequency }
                    }
                    // arrays and null
                    Some(_) => FrequencyShape::Unrecognized,
                    None if object.contains_key("value") || object.contains_key("displayValue") => {
                        FrequencyShape::ValueDisplay { reading, object }
                    }
                    None => FrequencyShape::Unrecognized,
                }
            }
            _ => FrequencyShape::Unrecognized,
        }
    }

    /// Reading and frequency value, `None` for [`FrequencyShape::Unrecognized`]
    pub fn extract(self) -> Option<(String, FrequencyValue)> {
        match self {
            FrequencyShape::BareNumber(n) => Some((
                String::new(),
                FrequencyValue {
                    rank: n.as_i64(),
                    display_text: n.to_string(),
                },
            )),
            FrequencyShape::BareString(s) => Some((
                String::new(),
                FrequencyValue {
                    rank: None,
                    display_text: non_empty_or_unknown(s),
                },
            )),
            FrequencyShape::NestedFrequency { reading, frequency } => {
                Some((reading, FrequencyValue::from_value_display(&frequency)))
            }
            FrequencyShape::ScalarFrequency { reading, frequency } => {
                let value = match integer_of(&frequency) {
                    Some(rank) => FrequencyValue {
                        rank: Some(rank),
                        display_text: rank.to_string(),
                    },
                    None => FrequencyValue {
                        rank: None,
                        display_text: non_empty_or_unknown(
                            scalar_text(&frequency).unwrap_or_default(),
                        ),
                    },
                };
                Some((reading, value))
            }
            FrequencyShape::ValueDisplay { reading, object } => {
                Some((reading, FrequencyValue::from_value_display(&object)))
            }
            FrequencyShape::Unrecognized => None,
        }
    }
}

/// Display text and rank pulled out of a payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyValue {
    pub rank: Option<i64>,
    pub display_text: String,
}

impl FrequencyValue {
    /// Shared rule for `{"value", "displayValue"}` objects.
    ///
    /// The rank always comes from `value`, even when `displayValue` is shown.
    pub fn from_value_display(object: &Map<String, Value>) -> Self {
        let rank = object.get("value").and_then(integer_of);
        let display = object
            .get("displayValue")
            .and_then(scalar_text)
            .filter(|d| !d.is_empty());

        let display_text = display
            .or_else(|| rank.map(|r| r.to_string()))
            .unwrap_or_else(|| UNKNOWN_DISPLAY.to_string());

        Self { rank, display_text }
    }
}

fn reading_of(object: &Map<String, Value>) -> String {
    object
        .get("reading")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

/// JSON integers, or text that parses as one
fn integer_of(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn non_empty_or_unknown(text: String) -> String {
    if text.is_empty() {
        UNKNOWN_DISPLAY.to_string()
    } else {
        text
    }
}

/// Coarse band for a rank, used for badges in the UI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrequencyLevel {
    VeryCommon,
    Common,
    Uncommon,
    Rare,
    Unknown,
}

impl FrequencyLevel {
    pub fn from_rank(rank: Option<i64>) -> Self {
        match rank {
            Some(rank) if rank <= 1000 => FrequencyLevel::VeryCommon,
            Some(rank) if rank <= 5000 => FrequencyLevel::Common,
            Some(rank) if rank <= 10000 => FrequencyLevel::Uncommon,
            Some(_) => FrequencyLevel::Rare,
            None => FrequencyLevel::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FrequencyLevel::VeryCommon => "Very Common",
            FrequencyLevel::Common => "Common",
            FrequencyLevel::Uncommon => "Uncommon",
            FrequencyLevel::Rare => "Rare",
            FrequencyLevel::Unknown => "Unknown",
        }
    }

    /// Star rating, 0 when unranked
    pub fn stars(&self) -> u8 {
        match self {
            FrequencyLevel::VeryCommon => 4,
            FrequencyLevel::Common => 3,
            FrequencyLevel::Uncommon => 2,
            FrequencyLevel::Rare => 1,
            FrequencyLevel::Unknown => 0,
        }
    }
}
