//! Delivery statistics use case

use crate::domain::stats::search_hits;
use crate::domain::search::is_query;
use crate::domain::{Record, Statistics};

/// Statistics plus the hit count of an optional query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatsReport {
    pub stats: Statistics,
    pub search: Option<(String, usize)>,
}

/// Compute the statistics view. The totals never depend on the query.
pub fn statistics(records: &[Record], year: i32, query: Option<&str>) -> StatsReport {
    StatsReport {
        stats: Statistics::compute(records, year),
        search: query
            .filter(|q| is_query(q))
            .map(|q| (q.to_string(), search_hits(records, q))),
    }
}
