//! nlarchive - Newsletter archive browser
//!
//! Loads a school's daily newsletter archive from a spreadsheet export,
//! groups issues by their weekday theme and searches the
//! "今日の学校案内" (today's school guide) section of each issue.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::ArchiveError;
