//! CLI command definitions

use crate::infrastructure::config::CONFIG_FILE;
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "nlarchive")]
#[command(about = "Newsletter archive browser: browse by theme, search the daily school guide", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Data file (CSV or TSV: month, day, weekday, title, body)
    #[arg(long, global = true, value_name = "PATH")]
    pub data: Option<PathBuf>,

    /// Config file
    #[arg(long, global = true, value_name = "PATH", default_value = CONFIG_FILE)]
    pub config: PathBuf,

    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List articles, optionally for one theme
    Browse {
        /// Theme name or weekday (e.g., 学校行事, 金)
        #[arg(short, long)]
        theme: Option<String>,

        /// Also print the full article under each card
        #[arg(long)]
        full: bool,
    },

    /// Search the "今日の学校案内" sections
    Search {
        /// Keyword (case-insensitive, matched literally)
        query: String,

        /// Also print the full article for each result
        #[arg(long)]
        full: bool,
    },

    /// Show one article in full
    Show {
        /// Month (1-12)
        month: u32,

        /// Day (1-31)
        day: u32,
    },

    /// Delivery statistics
    Stats {
        /// Also count search results for this keyword
        #[arg(short, long)]
        query: Option<String>,
    },

    /// Popular search keywords
    Keywords {
        /// Number of keywords to list (default: keyword_limit from config)
        #[arg(short, long)]
        limit: Option<usize>,

        /// Search for the keyword with this number
        #[arg(short, long, value_name = "N")]
        pick: Option<usize>,
    },

    /// List the weekday themes
    Themes,

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },
}
