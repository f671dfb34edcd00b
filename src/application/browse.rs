//! Browse articles use case

use crate::domain::{compute_view, Record, ThemeFilter, ViewModel, ViewOptions, ViewState};

/// Service for listing articles, optionally narrowed to one theme
pub struct BrowseService<'a> {
    records: &'a [Record],
    options: ViewOptions,
}

impl<'a> BrowseService<'a> {
    pub fn new(records: &'a [Record], options: ViewOptions) -> Self {
        BrowseService { records, options }
    }

    /// Articles for the filter, oldest first
    pub fn execute(&self, filter: ThemeFilter) -> ViewModel<'a> {
        compute_view(&ViewState::Browsing(filter), self.records, &self.options)
    }
}
