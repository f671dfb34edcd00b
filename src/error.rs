//! Error types for nlarchive

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the archive
#[derive(Debug, Error)]
pub enum ArchiveError {
    #[error("Failed to read data file {path}: {reason}")]
    DataSource { path: PathBuf, reason: String },

    #[error("Invalid theme: {0}")]
    InvalidTheme(String),

    #[error("No article found for {month}月{day}日")]
    RecordNotFound { month: u32, day: u32 },

    #[error("No keyword number {0}")]
    KeywordOutOfRange(usize),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl ArchiveError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            ArchiveError::DataSource { .. } => 2,
            ArchiveError::InvalidTheme(_) => 3,
            ArchiveError::RecordNotFound { .. } => 4,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            ArchiveError::DataSource { path, reason } => {
                format!(
                    "データが読み込めませんでした: {} ({})\n\n\
                    Suggestions:\n\
                    • Check that {} exists and is readable\n\
                    • Export the newsletter spreadsheet as CSV (month, day, weekday, title, body)\n\
                    • Point to another file with --data or the NLARCHIVE_DATA environment variable\n\
                    • Configure the default: nlarchive config data_path <PATH>",
                    path.display(),
                    reason,
                    path.display()
                )
            }
            ArchiveError::InvalidTheme(theme) => {
                format!(
                    "Invalid theme: '{}'\n\n\
                    Valid themes (name or weekday):\n\
                    • 月 日大一の地理情報\n\
                    • 火 日大一の6年間\n\
                    • 水 日大一の進路\n\
                    • 木 学校行事\n\
                    • 金 日大一の入試\n\
                    • 土 日大一ストーリー\n\n\
                    Examples:\n\
                    nlarchive browse --theme 学校行事\n\
                    nlarchive browse --theme 金",
                    theme
                )
            }
            ArchiveError::RecordNotFound { .. } => {
                format!(
                    "{}\n\n\
                    Suggestions:\n\
                    • Use 'nlarchive browse' to see the available dates\n\
                    • Dates are given as month then day (e.g., nlarchive show 4 1)",
                    self
                )
            }
            ArchiveError::KeywordOutOfRange(_) => {
                format!(
                    "{}\n\n\
                    Suggestions:\n\
                    • Run 'nlarchive keywords' to see the numbered list\n\
                    • Keywords are numbered from 1",
                    self
                )
            }
            ArchiveError::Config(msg) => {
                if msg.contains("Unknown config key") {
                    format!(
                        "{}\n\n\
                        Example: nlarchive config preview_chars 200",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using ArchiveError
pub type Result<T> = std::result::Result<T, ArchiveError>;
