//! CLI layer - Command-line interface

pub mod commands;
pub mod output;

pub use commands::{Cli, Commands};
pub use output::{
    format_article, format_keyword_list, format_stats, format_theme_list, format_view, Markers,
};
