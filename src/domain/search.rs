//! Keyword search over guide sections

use crate::domain::guide::extract_guide;
use crate::domain::highlight::{contains_ignore_case, highlight, Highlighted};
use crate::domain::Record;

/// A record whose guide section contains the query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult<'a> {
    pub record: &'a Record,
    /// Label inside the guide heading parentheses
    pub theme_label: String,
    pub guide_content: String,
    pub highlighted: Highlighted,
}

/// Returns true when the query has something to search for
pub fn is_query(query: &str) -> bool {
    !query.trim().is_empty()
}

/// Find records whose guide content contains `query`, ignoring case.
///
/// Records without a guide section are never returned. Results keep the
/// order of `records`. A blank query returns nothing.
pub fn search<'a>(records: &'a [Record], query: &str) -> Vec<SearchResult<'a>> {
    if !is_query(query) {
        return Vec::new();
    }

    records
        .iter()
        .filter_map(|record| {
            let guide = extract_guide(&record.body)?;
            if !contains_ignore_case(&guide.content, query) {
                return None;
            }
            let highlighted = highlight(&guide.content, query);
            Some(SearchResult {
                record,
                theme_label: guide.label,
                guide_content: guide.content,
                highlighted,
            })
        })
        .collect()
}
