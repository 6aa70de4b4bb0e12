use std::fmt;
use std::path::{Path, PathBuf};

use hindo_config::Config;

/// Where the active config came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    Profile(PathBuf),
    Environment,
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigSource::Profile(path) => write!(f, "profile {}", path.display()),
            ConfigSource::Environment => f.write_str("environment"),
        }
    }
}

/// Load the profile given on the command line, or build one from the environment.
///
/// Runs before logging is set up, since the log settings live in the config.
/// Call [`report`] once the subscriber is installed.
pub fn load_config(profile: Option<&Path>) -> anyhow::Result<(Config, ConfigSource)> {
    match profile {
        Some(path) => Ok((Config::load(path)?, ConfigSource::Profile(path.to_path_buf()))),
        None => Ok((Config::new(), ConfigSource::Environment)),
    }
}

pub fn report(source: &ConfigSource, config: &Config) {
    tracing::info!(
        "Using config from {source} ({} dictionary paths, {} disabled)",
        config.dictionary.additional_paths.len(),
        config.dictionary.disabled.len()
    );
}
