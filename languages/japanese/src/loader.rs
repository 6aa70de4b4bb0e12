use std::fs;
use std::path::{Path, PathBuf};

use hindo_core::{DictionaryInfo, LoadError, MetaKind, MetaStore, RawMetaRecord};
use serde::Deserialize;
use serde_json::Value;

/// `index.json` of an unpacked dictionary package
#[derive(Debug, Deserialize)]
struct IndexJson {
    title: Option<String>,
    #[serde(default)]
    revision: String,
}

/// Loads unpacked dictionary packages into a [`MetaStore`]
pub struct MetaBankLoader;

impl MetaBankLoader {
    /// Read `index.json` from a dictionary directory
    pub fn read_index(dir: &Path) -> Result<DictionaryInfo, LoadError> {
        let path = dir.join("index.json");
        if !path.exists() {
            return Err(LoadError::FileNotFound(path.display().to_string()));
        }

        let index: IndexJson = serde_json::from_str(&fs::read_to_string(&path)?)?;
        let title = index
            .title
            .filter(|t| !t.is_empty())
            .ok_or_else(|| LoadError::InvalidFormat(format!("{}: missing title", path.display())))?;

        Ok(DictionaryInfo {
            id: title.clone().into(),
            title,
            revision: index.revision,
            enabled: true,
        })
    }

    /// Load every term and kanji meta bank of a dictionary directory.
    ///
    /// Returns the registered dictionary info and the number of rows stored.
    pub fn load_into<S: MetaStore>(
        store: &mut S,
        dir: &Path,
    ) -> Result<(DictionaryInfo, usize), LoadError> {
        tracing::info!("Loading dictionary from: {}", dir.display());
        let info = Self::read_index(dir)?;

        // Parse everything before touching the store
        let mut records = Vec::new();
        for bank in Self::meta_bank_files(dir)? {
            records.extend(Self::read_meta_bank(&bank, &info)?);
        }

        store.add_dictionary(info.clone())?;
        let count = store.insert_meta(records)?;
        tracing::info!("Loaded {} meta rows from {}", count, info.title);

        Ok((info, count))
    }

    /// `term_meta_bank_*.json` and `kanji_meta_bank_*.json`, sorted by file name
    fn meta_bank_files(dir: &Path) -> Result<Vec<PathBuf>, LoadError> {
        let mut banks = Vec::new();
        // An unreadable entry could be a bank, so it fails the whole load
        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            let is_bank = path
                .file_name()
                .and_then(|name| name.to_str())
                .is_some_and(is_meta_bank_name);
            if is_bank {
                banks.push(path);
            }
        }
        banks.sort();
        Ok(banks)
    }

    /// Parse one bank file, skipping malformed rows
    pub fn read_meta_bank(
        path: &Path,
        info: &DictionaryInfo,
    ) -> Result<Vec<RawMetaRecord>, LoadError> {
        let content = fs::read_to_string(path)?;
        let rows = match serde_json::from_str::<Value>(&content)? {
            Value::Array(rows) => rows,
            _ => {
                return Err(LoadError::InvalidFormat(format!(
                    "{}: expected an array of rows",
                    path.display()
                )));
            }
        };

        let mut records = Vec::with_capacity(rows.len());
        for (line, row) in rows.iter().enumerate() {
            match parse_row(row) {
                Some((expression, kind, data)) => records.push(RawMetaRecord::new(
                    info.id.clone(),
                    expression,
                    kind,
                    data.to_string(),
                )),
                None => {
                    tracing::warn!("Skipping malformed row {} in {}", line, path.display());
                }
            }
        }

        Ok(records)
    }
}

fn is_meta_bank_name(name: &str) -> bool {
    (name.starts_with("term_meta_bank_") || name.starts_with("kanji_meta_bank_"))
        && name.ends_with(".json")
}

/// `[expression, mode, data]`
fn parse_row(row: &Value) -> Option<(&str, MetaKind, &Value)> {
    match row.as_array()?.as_slice() {
        [expression, mode, data] => Some((
            expression.as_str()?,
            MetaKind::from_mode(mode.as_str()?),
            data,
        )),
        _ => None,
    }
}
