//! Configuration management

use crate::error::{ArchiveError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Default config file name, looked up in the current directory
pub const CONFIG_FILE: &str = "nlarchive.toml";

/// Environment variable overriding the data file location
pub const DATA_ENV: &str = "NLARCHIVE_DATA";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub data_path: PathBuf,
    pub archive_year: i32,
    pub preview_chars: usize,
    pub keyword_limit: usize,
    pub highlight_open: String,
    pub highlight_close: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            data_path: PathBuf::from("data/newsletter_review.csv"),
            archive_year: 2025,
            preview_chars: 150,
            keyword_limit: 18,
            highlight_open: "【".to_string(),
            highlight_close: "】".to_string(),
        }
    }
}

impl Config {
    /// Valid keys for get/set
    pub const KEYS: [&'static str; 6] = [
        "data_path",
        "archive_year",
        "preview_chars",
        "keyword_limit",
        "highlight_open",
        "highlight_close",
    ];

    /// Load config from a file. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::debug!("No config at {}, using defaults", path.display());
                return Ok(Config::default());
            }
            Err(e) => return Err(ArchiveError::Io(e)),
        };

        toml::from_str(&contents).map_err(|e| {
            ArchiveError::Config(format!("Failed to parse {}: {}", path.display(), e))
        })
    }

    /// Save config to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let contents = toml::to_string_pretty(self)?;
        fs::write(path, contents)?;
        Ok(())
    }

    /// Data file to read: `NLARCHIVE_DATA` wins over the configured path
    pub fn resolve_data_path(&self) -> PathBuf {
        std::env::var_os(DATA_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| self.data_path.clone())
    }

    /// Get a single value as text
    pub fn get(&self, key: &str) -> Result<String> {
        match key {
            "data_path" => Ok(self.data_path.display().to_string()),
            "archive_year" => Ok(self.archive_year.to_string()),
            "preview_chars" => Ok(self.preview_chars.to_string()),
            "keyword_limit" => Ok(self.keyword_limit.to_string()),
            "highlight_open" => Ok(self.highlight_open.clone()),
            "highlight_close" => Ok(self.highlight_close.clone()),
            _ => Err(unknown_key(key)),
        }
    }

    /// Set a single value from text
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "data_path" => self.data_path = PathBuf::from(value),
            "archive_year" => self.archive_year = parse_number(key, value)?,
            "preview_chars" => self.preview_chars = parse_number(key, value)?,
            "keyword_limit" => self.keyword_limit = parse_number(key, value)?,
            "highlight_open" => self.highlight_open = value.to_string(),
            "highlight_close" => self.highlight_close = value.to_string(),
            _ => return Err(unknown_key(key)),
        }
        Ok(())
    }
}

fn unknown_key(key: &str) -> ArchiveError {
    ArchiveError::Config(format!(
        "Unknown config key: '{}'. Valid keys are: {}",
        key,
        Config::KEYS.join(", ")
    ))
}

fn parse_number<T: std::str::FromStr>(key: &str, value: &str) -> Result<T> {
    value
        .trim()
        .parse()
        .map_err(|_| ArchiveError::Config(format!("Invalid number for {}: '{}'", key, value)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.preview_chars, 150);
        assert_eq!(config.keyword_limit, 18);
        assert_eq!(config.archive_year, 2025);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let temp = TempDir::new().unwrap();
        let config = Config::load(&temp.path().join(CONFIG_FILE)).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_save_and_load() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(CONFIG_FILE);

        let mut config = Config::default();
        config.set("preview_chars", "80").unwrap();
        config.set("data_path", "archive/april.csv").unwrap();
        config.save(&path).unwrap();

        let loaded = Config::load(&path).unwrap();
        assert_eq!(loaded.preview_chars, 80);
        assert_eq!(loaded.data_path, PathBuf::from("archive/april.csv"));
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(CONFIG_FILE);
        fs::write(&path, "keyword_limit = 6\n").unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.keyword_limit, 6);
        assert_eq!(config.preview_chars, 150);
    }

    #[test]
    fn test_invalid_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(CONFIG_FILE);
        fs::write(&path, "keyword_limit = \"many\"\n").unwrap();

        match Config::load(&path) {
            Err(ArchiveError::Config(msg)) => assert!(msg.contains("Failed to parse")),
            other => panic!("Expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn test_get_set_keys() {
        let mut config = Config::default();
        for key in Config::KEYS {
            assert!(config.get(key).is_ok());
        }
        config.set("highlight_open", "**").unwrap();
        assert_eq!(config.get("highlight_open").unwrap(), "**");
        assert!(config.get("colour").is_err());
        assert!(config.set("colour", "red").is_err());
    }

    #[test]
    fn test_set_rejects_bad_number() {
        let mut config = Config::default();
        match config.set("preview_chars", "lots") {
            Err(ArchiveError::Config(msg)) => assert!(msg.contains("preview_chars")),
            other => panic!("Expected Config error, got {:?}", other),
        }
    }
}
