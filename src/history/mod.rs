// History aggregation: dashboard statistics and filtered views.
//
// Everything here is a pure function over a slice of AnalysisResult in
// insertion (chronological) order. Nothing mutates or reorders the slice.

pub mod filter;
pub mod stats;

pub use filter::{filter, FilterCriterion};
pub use stats::{compute_stats, trust_distribution, ScoreBucket, Stats};

use crate::db::models::AnalysisResult;

/// The `limit` most recent results, newest first.
pub fn recent(history: &[AnalysisResult], limit: usize) -> Vec<&AnalysisResult> {
    history.iter().rev().take(limit).collect()
}
