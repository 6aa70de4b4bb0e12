pub mod dictionary;
pub mod language;
pub mod meta;
pub mod preprocess;

pub use dictionary::{DictionaryInfo, LoadError, MetaStore, StoreError};
pub use language::FrequencyProvider;
pub use meta::{DictionaryId, FrequencyObservation, MetaKind, RawMetaRecord};
