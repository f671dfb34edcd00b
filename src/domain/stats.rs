//! Archive statistics

use crate::domain::search::search;
use crate::domain::{Record, Theme};
use chrono::{Datelike, NaiveDate};

/// Delivery statistics over the whole loaded archive
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statistics {
    /// Every loaded record, themed or not
    pub total: usize,
    /// One bucket per theme in [`Theme::ALL`] order
    pub per_theme: Vec<(Theme, usize)>,
    /// First and last delivery dates that exist in the archive year
    pub period: Option<(NaiveDate, NaiveDate)>,
}

impl Statistics {
    pub fn compute(records: &[Record], year: i32) -> Self {
        let per_theme = Theme::ALL
            .iter()
            .map(|theme| {
                let count = records
                    .iter()
                    .filter(|r| r.theme() == Some(*theme))
                    .count();
                (*theme, count)
            })
            .collect();

        let dates: Vec<NaiveDate> = records.iter().filter_map(|r| r.date(year)).collect();
        let period = dates
            .iter()
            .min()
            .copied()
            .zip(dates.iter().max().copied());

        Statistics {
            total: records.len(),
            per_theme,
            period,
        }
    }

    /// Records that fell into one of the six theme buckets
    pub fn themed(&self) -> usize {
        self.per_theme.iter().map(|(_, count)| count).sum()
    }

    /// Delivery period as `2025年4月` or `2025年4月〜2025年5月`
    pub fn period_label(&self) -> Option<String> {
        let (first, last) = self.period?;
        let start = format!("{}年{}月", first.year(), first.month());
        if (first.year(), first.month()) == (last.year(), last.month()) {
            Some(start)
        } else {
            Some(format!("{}〜{}年{}月", start, last.year(), last.month()))
        }
    }
}

/// Number of search results for a query
pub fn search_hits(records: &[Record], query: &str) -> usize {
    search(records, query).len()
}
