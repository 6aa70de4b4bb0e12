use std::path::PathBuf;

use hindo_core::preprocess::{DefaultPreprocessor, Preprocessor};
use hindo_core::{FrequencyObservation, FrequencyProvider, MetaStore};

use crate::dictionary::MetaIndex;
use crate::frequency;
use crate::loader::MetaBankLoader;

/// Frequency lookups over a meta store
pub struct FrequencyLookup<S: MetaStore = MetaIndex> {
    store: S,
    preprocessor: DefaultPreprocessor,
}

impl<S: MetaStore> FrequencyLookup<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            preprocessor: DefaultPreprocessor,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }
}

impl FrequencyLookup<MetaIndex> {
    /// Build a lookup from unpacked dictionary directories.
    ///
    /// Dictionaries that fail to load are logged and skipped.
    pub fn with_dictionaries(paths: &[PathBuf]) -> Self {
        let mut store = MetaIndex::new();

        for path in paths {
            if let Err(e) = MetaBankLoader::load_into(&mut store, path) {
                tracing::warn!("Failed to load dictionary from {}: {}", path.display(), e);
            }
        }

        Self::new(store)
    }
}

impl<S: MetaStore> FrequencyProvider for FrequencyLookup<S> {
    fn frequencies(&self, term: &str) -> Vec<FrequencyObservation> {
        let key = self.preprocessor.process(term);
        if key.is_empty() {
            return Vec::new();
        }

        let records = self.store.meta_for(&key);
        let observations = frequency::resolve(&records);
        tracing::debug!(
            "{} of {} meta rows for {key} resolved to frequencies",
            observations.len(),
            records.len()
        );
        observations
    }
}
