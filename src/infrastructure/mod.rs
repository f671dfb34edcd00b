//! Infrastructure layer - Data files, configuration and caching

pub mod cache;
pub mod config;
pub mod source;

pub use cache::ArchiveSession;
pub use config::Config;
pub use source::{load_records, CsvSource, RecordSource};
