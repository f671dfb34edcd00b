//! Show a single article use case

use crate::domain::{extract_guide, extract_theme, GuideSection, Record};
use crate::error::{ArchiveError, Result};

/// A full article with its guide details
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleDetail<'a> {
    pub record: &'a Record,
    pub guide: Option<GuideSection>,
    /// Topic named in the guide heading, `その他` when none
    pub topic: String,
    pub body: String,
}

/// First record delivered on the given date
pub fn find_by_date(records: &[Record], month: u32, day: u32) -> Option<&Record> {
    records.iter().find(|r| r.month == month && r.day == day)
}

/// Look up one article by date
pub fn show_article(records: &[Record], month: u32, day: u32) -> Result<ArticleDetail<'_>> {
    let record =
        find_by_date(records, month, day).ok_or(ArchiveError::RecordNotFound { month, day })?;

    Ok(ArticleDetail {
        record,
        guide: extract_guide(&record.body),
        topic: extract_theme(&record.body),
        body: record.readable_body(),
    })
}
