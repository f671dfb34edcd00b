//! Extraction of the "今日の学校案内" (today's school guide) section
//!
//! A newsletter body carries its guide as a heading followed by text fenced
//! by two dash lines:
//!
//! ```text
//! 今日の学校案内（火のテーマ：学校行事）
//! -----
//! 明日は文化祭です。
//! -----
//! ```

use crate::domain::record::unescape_newlines;
use regex::Regex;
use std::sync::OnceLock;

/// Topic returned by [`extract_theme`] when the heading carries none
pub const FALLBACK_TOPIC: &str = "その他";

/// Heading, first delimiter, lazily captured content, second delimiter.
/// Must stay lazy: a greedy capture would run into the next issue's guide.
fn guide_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| {
        Regex::new(r"(?s)今日の学校案内（(.+?)）\s*-----\s*(.*?)\s*-----").unwrap()
    })
}

fn topic_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"今日の学校案内（.+?のテーマ：(.+?)）").unwrap())
}

/// The guide section of one body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuideSection {
    /// Raw text inside the heading parentheses, e.g. `火のテーマ：学校行事`
    pub label: String,
    /// Text between the delimiters, unescaped and trimmed
    pub content: String,
}

impl GuideSection {
    /// Leading `max_chars` characters of the content, with `...` appended
    /// when the content was cut.
    pub fn preview(&self, max_chars: usize) -> String {
        if self.content.chars().count() > max_chars {
            let head: String = self.content.chars().take(max_chars).collect();
            format!("{}...", head)
        } else {
            self.content.clone()
        }
    }
}

/// Extract the guide section from a body.
///
/// Returns `None` when the heading or either delimiter is missing, or when
/// nothing but whitespace sits between the delimiters. Only the first
/// section in the body is considered.
pub fn extract_guide(body: &str) -> Option<GuideSection> {
    let caps = guide_regex().captures(body)?;
    let content = unescape_newlines(&caps[2]).trim().to_string();
    if content.is_empty() {
        return None;
    }

    Some(GuideSection {
        label: caps[1].to_string(),
        content,
    })
}

/// Topic named after `のテーマ：` in the guide heading, or [`FALLBACK_TOPIC`].
///
/// This only looks at the heading and does not require the delimiters.
pub fn extract_theme(body: &str) -> String {
    topic_regex()
        .captures(body)
        .map(|caps| caps[1].to_string())
        .unwrap_or_else(|| FALLBACK_TOPIC.to_string())
}
