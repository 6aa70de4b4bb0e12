mod dictionary_tests;
mod processor_tests;

use hindo_core::{MetaKind, RawMetaRecord};

pub(crate) fn freq(dictionary: &str, payload: &str) -> RawMetaRecord {
    RawMetaRecord::new(dictionary, "生", MetaKind::Frequency, payload)
}
