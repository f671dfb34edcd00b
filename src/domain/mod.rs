//! Domain layer - Newsletter model, extraction and search

pub mod guide;
pub mod highlight;
pub mod keywords;
pub mod record;
pub mod search;
pub mod stats;
pub mod theme;
pub mod view;

pub use guide::{extract_guide, extract_theme, GuideSection};
pub use highlight::{highlight, Highlighted, Span};
pub use keywords::popular_keywords;
pub use record::Record;
pub use search::{search, SearchResult};
pub use stats::Statistics;
pub use theme::Theme;
pub use view::{compute_view, ThemeFilter, ViewModel, ViewOptions, ViewState};
