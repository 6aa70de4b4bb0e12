use std::env;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct DictionaryConfig {
    /// Unpacked dictionary directories loaded at startup
    #[serde(default)]
    pub additional_paths: Vec<PathBuf>,
    /// Titles of dictionaries that stay installed but are skipped on lookup
    #[serde(default)]
    pub disabled: Vec<String>,
}

impl DictionaryConfig {
    pub fn new() -> Self {
        let additional_paths = env::var_os("HINDO_DICT_PATHS")
            .map(|paths| env::split_paths(&paths).collect())
            .unwrap_or_default();

        let disabled = env::var("HINDO_DISABLED_DICTS")
            .map(|v| parse_title_list(&v))
            .unwrap_or_default();

        Self {
            additional_paths,
            disabled,
        }
    }

    pub fn is_disabled(&self, title: &str) -> bool {
        self.disabled.iter().any(|d| d == title)
    }
}

/// Comma separated titles, blanks dropped
fn parse_title_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}
