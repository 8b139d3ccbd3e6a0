use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// A snippet preloaded into the local backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedSnippet {
    pub abbv: String,
    pub value: String,
    #[serde(default)]
    pub usage_count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub language: String,
    pub search_debounce_ms: u64,
    pub translation_timeout_ms: u64,
    pub status_ttl_ms: u64,
    pub result_limit: usize,
    /// Where the local backend keeps its snippets between runs.
    pub store_file: Option<PathBuf>,
    pub snippets: Vec<SeedSnippet>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: "en".to_string(),
            search_debounce_ms: 0,
            translation_timeout_ms: 500,
            status_ttl_ms: 3000,
            result_limit: 20,
            store_file: None,
            snippets: Vec::new(),
        }
    }
}

pub fn get_config_path() -> Option<PathBuf> {
    home::home_dir().map(|mut path| {
        path.push(".config");
        path.push("tylex");
        path.push("config.toml");
        path
    })
}

pub fn get_store_path() -> Option<PathBuf> {
    home::home_dir().map(|mut path| {
        path.push(".config");
        path.push("tylex");
        path.push("snippets.toml");
        path
    })
}

impl Config {
    /// The configured store file, else the default location.
    #[must_use]
    pub fn store_path(&self) -> Option<PathBuf> {
        self.store_file.clone().or_else(get_store_path)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Invalid tylex config")
    }

    /// Loads `path`, or the default location when `None`. A missing file
    /// yields the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => match get_config_path() {
                Some(p) => p,
                None => return Ok(Self::default()),
            },
        };

        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_toml_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(Some(&dir.path().join("nope.toml"))).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
language = "de"
result_limit = 5

[[snippets]]
abbv = "omg"
value = "oh my god"

[[snippets]]
abbv = "btw"
value = "by the way"
usage_count = 7
"#
        )
        .unwrap();

        let config = Config::load(Some(file.path())).unwrap();
        assert_eq!(config.language, "de");
        assert_eq!(config.result_limit, 5);
        assert_eq!(config.status_ttl_ms, 3000);
        assert_eq!(config.translation_timeout_ms, 500);
        assert_eq!(config.snippets.len(), 2);
        assert_eq!(config.snippets[0].usage_count, 0);
        assert_eq!(config.snippets[1].usage_count, 7);
        assert!(config.store_file.is_none());
    }

    #[test]
    fn test_store_file_overrides_default_location() {
        let config = Config::from_toml_str(r#"store_file = "/tmp/tylex/snippets.toml""#).unwrap();
        assert_eq!(
            config.store_path(),
            Some(PathBuf::from("/tmp/tylex/snippets.toml"))
        );
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "result_limit = \"many\"").unwrap();

        let err = Config::load(Some(file.path())).unwrap_err();
        assert!(format!("{err:#}").contains("Failed to parse config file"));
    }
}
