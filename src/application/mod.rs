//! Application layer - Use cases and orchestration

pub mod browse;
pub mod manage_config;
pub mod search_guide;
pub mod show_article;
pub mod statistics;

pub use browse::BrowseService;
pub use manage_config::ConfigService;
pub use search_guide::SearchService;
pub use show_article::{show_article, ArticleDetail};
pub use statistics::{statistics, StatsReport};
