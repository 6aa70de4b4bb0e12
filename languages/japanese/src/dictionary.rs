use std::collections::HashMap;

use hindo_core::preprocess::normalize_key;
use hindo_core::{DictionaryId, DictionaryInfo, MetaStore, RawMetaRecord, StoreError};

/// In-memory meta store indexed by normalized expression
#[derive(Debug, Default)]
pub struct MetaIndex {
    dictionaries: Vec<DictionaryInfo>,
    records: Vec<RawMetaRecord>,
    expression_index: HashMap<String, Vec<usize>>,
}

impl MetaIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored rows across all dictionaries
    pub fn record_count(&self) -> usize {
        self.records.len()
    }

    fn dictionary(&self, id: &DictionaryId) -> Option<&DictionaryInfo> {
        self.dictionaries.iter().find(|d| &d.id == id)
    }

    fn dictionary_position(&self, id: &DictionaryId) -> Option<usize> {
        self.dictionaries.iter().position(|d| &d.id == id)
    }

    fn index_record(&mut self, idx: usize) {
        let key = normalize_key(&self.records[idx].expression);
        self.expression_index.entry(key).or_default().push(idx);
    }

    fn rebuild_index(&mut self) {
        self.expression_index.clear();
        for idx in 0..self.records.len() {
            self.index_record(idx);
        }
    }
}

impl MetaStore for MetaIndex {
    fn dictionaries(&self) -> Vec<DictionaryInfo> {
        self.dictionaries.clone()
    }

    fn add_dictionary(&mut self, info: DictionaryInfo) -> Result<(), StoreError> {
        if self.dictionary(&info.id).is_some() {
            return Err(StoreError::DuplicateDictionary(info.id));
        }
        tracing::debug!("Registered dictionary {} ({})", info.title, info.revision);
        self.dictionaries.push(info);
        Ok(())
    }

    fn set_enabled(&mut self, id: &DictionaryId, enabled: bool) -> Result<(), StoreError> {
        let dictionary = self
            .dictionaries
            .iter_mut()
            .find(|d| &d.id == id)
            .ok_or_else(|| StoreError::UnknownDictionary(id.clone()))?;
        dictionary.enabled = enabled;
        Ok(())
    }

    fn insert_meta(&mut self, records: Vec<RawMetaRecord>) -> Result<usize, StoreError> {
        // Validate the whole batch first so a bad row leaves the store untouched
        if let Some(orphan) = records
            .iter()
            .find(|r| self.dictionary(&r.dictionary_id).is_none())
        {
            return Err(StoreError::UnknownDictionary(orphan.dictionary_id.clone()));
        }

        let inserted = records.len();
        for record in records {
            self.records.push(record);
            self.index_record(self.records.len() - 1);
        }

        Ok(inserted)
    }

    fn delete_dictionary(&mut self, id: &DictionaryId) -> Result<usize, StoreError> {
        let position = self
            .dictionary_position(id)
            .ok_or_else(|| StoreError::UnknownDictionary(id.clone()))?;
        self.dictionaries.remove(position);

        let before = self.records.len();
        self.records.retain(|r| &r.dictionary_id != id);
        let removed = before - self.records.len();
        self.rebuild_index();

        tracing::info!("Deleted dictionary {id} with {removed} meta rows");
        Ok(removed)
    }

    fn meta_for(&self, expression: &str) -> Vec<RawMetaRecord> {
        let Some(indices) = self.expression_index.get(&normalize_key(expression)) else {
            return Vec::new();
        };

        let mut rows: Vec<(usize, &RawMetaRecord)> = indices
            .iter()
            .filter_map(|&idx| self.records.get(idx))
            .filter_map(|record| {
                let position = self.dictionary_position(&record.dictionary_id)?;
                self.dictionaries[position]
                    .enabled
                    .then_some((position, record))
            })
            .collect();

        // Dictionary installation order, then row order
        rows.sort_by_key(|(position, _)| *position);
        rows.into_iter().map(|(_, record)| record.clone()).collect()
    }
}
