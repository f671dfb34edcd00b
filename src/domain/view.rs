//! View state and view model computation
//!
//! A front end holds a [`ViewState`] and asks [`compute_view`] for what to
//! show. The function is pure: the same state and records always give the
//! same model.

use crate::domain::guide::extract_guide;
use crate::domain::search::{is_query, search, SearchResult};
use crate::domain::{Record, Theme};

/// Which records a browse view shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeFilter {
    #[default]
    All,
    Only(Theme),
}

impl ThemeFilter {
    fn accepts(&self, record: &Record) -> bool {
        match self {
            ThemeFilter::All => true,
            ThemeFilter::Only(theme) => record.theme() == Some(*theme),
        }
    }

    fn heading(&self) -> String {
        match self {
            ThemeFilter::All => "全記事一覧".to_string(),
            ThemeFilter::Only(theme) => format!("{} の記事", theme),
        }
    }
}

/// What the user is currently looking at
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewState {
    Browsing(ThemeFilter),
    Searching(String),
}

impl Default for ViewState {
    fn default() -> Self {
        ViewState::Browsing(ThemeFilter::All)
    }
}

/// Rendering options that shape the view model
#[derive(Debug, Clone, Copy)]
pub struct ViewOptions {
    /// Characters of guide content shown in a browse card
    pub preview_chars: usize,
}

impl Default for ViewOptions {
    fn default() -> Self {
        ViewOptions { preview_chars: 150 }
    }
}

/// Guide label and shortened content shown on a browse card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuidePreview {
    pub label: String,
    pub preview: String,
}

/// One article in a browse list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleCard<'a> {
    pub record: &'a Record,
    pub display_date: String,
    pub theme: Option<Theme>,
    pub guide: Option<GuidePreview>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewModel<'a> {
    Browse {
        filter: ThemeFilter,
        heading: String,
        articles: Vec<ArticleCard<'a>>,
    },
    Search {
        query: String,
        results: Vec<SearchResult<'a>>,
    },
}

impl ViewModel<'_> {
    /// True for a search that was run and matched nothing
    pub fn is_empty_search(&self) -> bool {
        matches!(self, ViewModel::Search { results, .. } if results.is_empty())
    }
}

/// Compute the view for a state.
///
/// A search state with a blank query is treated as browsing everything, so
/// "no query yet" is never reported as "nothing found".
pub fn compute_view<'a>(
    state: &ViewState,
    records: &'a [Record],
    options: &ViewOptions,
) -> ViewModel<'a> {
    match state {
        ViewState::Searching(query) if is_query(query) => ViewModel::Search {
            query: query.clone(),
            results: search(records, query),
        },
        ViewState::Searching(_) => browse(ThemeFilter::All, records, options),
        ViewState::Browsing(filter) => browse(*filter, records, options),
    }
}

fn browse<'a>(filter: ThemeFilter, records: &'a [Record], options: &ViewOptions) -> ViewModel<'a> {
    let mut selected: Vec<&Record> = records.iter().filter(|r| filter.accepts(r)).collect();
    selected.sort_by_key(|r| (r.month, r.day));

    let articles = selected
        .into_iter()
        .map(|record| ArticleCard {
            record,
            display_date: record.display_date(),
            theme: record.theme(),
            guide: extract_guide(&record.body).map(|g| GuidePreview {
                preview: g.preview(options.preview_chars),
                label: g.label,
            }),
        })
        .collect();

    ViewModel::Browse {
        filter,
        heading: filter.heading(),
        articles,
    }
}
