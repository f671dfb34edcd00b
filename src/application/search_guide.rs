//! Guide search use case

use crate::domain::keywords::popular_keywords;
use crate::domain::{compute_view, Record, ViewModel, ViewOptions, ViewState};
use crate::error::{ArchiveError, Result};

/// Service for searching guide sections
pub struct SearchService<'a> {
    records: &'a [Record],
    options: ViewOptions,
}

impl<'a> SearchService<'a> {
    pub fn new(records: &'a [Record], options: ViewOptions) -> Self {
        SearchService { records, options }
    }

    /// Run a query. A blank query yields the browse-everything view.
    pub fn execute(&self, query: &str) -> ViewModel<'a> {
        log::debug!("Searching guide sections for '{}'", query);
        compute_view(
            &ViewState::Searching(query.to_string()),
            self.records,
            &self.options,
        )
    }

    /// Search for the `number`-th popular keyword (1-based), as if typed in
    pub fn execute_keyword(&self, number: usize) -> Result<(&'static str, ViewModel<'a>)> {
        let keyword = number
            .checked_sub(1)
            .and_then(|i| popular_keywords().get(i))
            .copied()
            .ok_or(ArchiveError::KeywordOutOfRange(number))?;
        Ok((keyword, self.execute(keyword)))
    }
}
