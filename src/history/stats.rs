// Summary statistics over an analysis history.
//
// The average trust score is rounded half away from zero. Scores are never
// negative, so in practice an exact .5 always rounds up (70.5 -> 71).

use serde::{Deserialize, Serialize};

use crate::db::models::AnalysisResult;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    pub total_analyses: usize,
    pub legitimate_count: usize,
    pub suspicious_count: usize,
    pub average_trust_score: u8,
}

/// Count and average a history. An empty history yields all zeros.
pub fn compute_stats(history: &[AnalysisResult]) -> Stats {
    let total = history.len();
    if total == 0 {
        return Stats::default();
    }

    let legitimate = history.iter().filter(|r| r.is_legitimate).count();
    let sum: u64 = history.iter().map(|r| u64::from(r.trust_score)).sum();

    Stats {
        total_analyses: total,
        legitimate_count: legitimate,
        suspicious_count: total - legitimate,
        average_trust_score: rounded_mean(sum, total as u64),
    }
}

/// Integer mean of non-negative values, rounding .5 up.
fn rounded_mean(sum: u64, count: u64) -> u8 {
    // (sum / count + 1/2) floored, kept in integers to avoid float ties
    let mean = (2 * sum + count) / (2 * count);
    mean.min(100) as u8
}

/// One bar of the trust score histogram. `max` is exclusive except for the
/// top bucket, which also holds a perfect 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBucket {
    pub min: u8,
    pub max: u8,
    pub count: usize,
}

const BUCKET_BOUNDARIES: [u8; 6] = [0, 20, 40, 60, 80, 100];

/// Histogram of trust scores in 20-point buckets.
pub fn trust_distribution(history: &[AnalysisResult]) -> Vec<ScoreBucket> {
    let mut buckets: Vec<ScoreBucket> = BUCKET_BOUNDARIES
        .windows(2)
        .map(|w| ScoreBucket {
            min: w[0],
            max: w[1],
            count: 0,
        })
        .collect();

    let last = buckets.len() - 1;
    for result in history {
        let index = buckets
            .iter()
            .position(|b| result.trust_score < b.max)
            .unwrap_or(last);
        buckets[index].count += 1;
    }

    buckets
}
