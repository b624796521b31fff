// Unit tests for history aggregation.
//
// compute_stats counts and rounding, filter criterion/search semantics,
// the score histogram, and property tests over random histories.

use chrono::{Duration, TimeZone, Utc};
use proptest::prelude::*;

use rapid::db::models::{is_legitimate, AnalysisResult};
use rapid::history::{compute_stats, filter, recent, trust_distribution, FilterCriterion, Stats};

fn record(url: &str, trust_score: u8) -> AnalysisResult {
    AnalysisResult {
        id: format!("id-{url}-{trust_score}"),
        url: url.to_string(),
        trust_score,
        is_legitimate: is_legitimate(trust_score),
        is_accessible: true,
        status_code: None,
        has_ssl: true,
        ssl_valid: true,
        domain_age_days: None,
        suspicious_patterns: vec![],
        analysis_summary: "summary".to_string(),
        timestamp: Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap()
            + Duration::seconds(i64::from(trust_score)),
    }
}

// ============================================================
// compute_stats
// ============================================================

#[test]
fn stats_empty_history_is_all_zero() {
    assert_eq!(
        compute_stats(&[]),
        Stats {
            total_analyses: 0,
            legitimate_count: 0,
            suspicious_count: 0,
            average_trust_score: 0,
        }
    );
}

#[test]
fn stats_two_records() {
    let history = vec![record("a.com", 90), record("b.com", 50)];
    assert_eq!(
        compute_stats(&history),
        Stats {
            total_analyses: 2,
            legitimate_count: 1,
            suspicious_count: 1,
            average_trust_score: 70,
        }
    );
}

#[test]
fn stats_average_exact_half_rounds_up() {
    // (70 + 71) / 2 = 70.5
    let history = vec![record("a.com", 70), record("b.com", 71)];
    assert_eq!(compute_stats(&history).average_trust_score, 71);
}

#[test]
fn stats_average_below_half_rounds_down() {
    // (70 + 70 + 71) / 3 = 70.33
    let history = vec![record("a.com", 70), record("b.com", 70), record("c.com", 71)];
    assert_eq!(compute_stats(&history).average_trust_score, 70);
}

#[test]
fn stats_single_record() {
    let history = vec![record("a.com", 59)];
    let stats = compute_stats(&history);
    assert_eq!(stats.suspicious_count, 1);
    assert_eq!(stats.average_trust_score, 59);
}

#[test]
fn stats_serializes_with_snake_case_keys() {
    let json = serde_json::to_value(compute_stats(&[record("a.com", 80)])).unwrap();
    assert_eq!(json["total_analyses"], 1);
    assert_eq!(json["legitimate_count"], 1);
    assert_eq!(json["average_trust_score"], 80);
}

// ============================================================
// filter
// ============================================================

fn mixed_history() -> Vec<AnalysisResult> {
    vec![
        record("https://google.com", 95),
        record("https://free-prizes.tk", 20),
        record("https://example.com", 75),
        record("http://192.168.0.1", 40),
    ]
}

#[test]
fn filter_legitimate_keeps_order() {
    let history = mixed_history();
    let urls: Vec<&str> = filter(&history, FilterCriterion::Legitimate, "")
        .iter()
        .map(|r| r.url.as_str())
        .collect();
    assert_eq!(urls, vec!["https://google.com", "https://example.com"]);
}

#[test]
fn filter_suspicious() {
    let history = mixed_history();
    let urls: Vec<&str> = filter(&history, FilterCriterion::Suspicious, "")
        .iter()
        .map(|r| r.url.as_str())
        .collect();
    assert_eq!(urls, vec!["https://free-prizes.tk", "http://192.168.0.1"]);
}

#[test]
fn filter_all_with_empty_search_is_everything() {
    let history = mixed_history();
    assert_eq!(filter(&history, FilterCriterion::All, "").len(), history.len());
}

#[test]
fn search_is_case_insensitive() {
    let history = vec![record("google.com", 90), record("example.com", 90)];
    for term in ["goog", "GOOG", "GoOg"] {
        let found = filter(&history, FilterCriterion::All, term);
        assert_eq!(found.len(), 1, "term {term}");
        assert_eq!(found[0].url, "google.com");
    }
}

#[test]
fn search_and_criterion_are_anded() {
    let history = mixed_history();
    assert!(filter(&history, FilterCriterion::Suspicious, "google").is_empty());
    assert_eq!(filter(&history, FilterCriterion::Legitimate, "google").len(), 1);
}

#[test]
fn filter_does_not_touch_source() {
    let history = mixed_history();
    let before = history.clone();
    let _ = filter(&history, FilterCriterion::Suspicious, "tk");
    assert_eq!(history, before);
}

// ============================================================
// recent and trust_distribution
// ============================================================

#[test]
fn recent_is_newest_first() {
    let history = mixed_history();
    let urls: Vec<&str> = recent(&history, 2).iter().map(|r| r.url.as_str()).collect();
    assert_eq!(urls, vec!["http://192.168.0.1", "https://example.com"]);
    assert_eq!(recent(&history, 100).len(), 4);
}

#[test]
fn distribution_buckets_and_edges() {
    let history = vec![
        record("a", 0),
        record("b", 19),
        record("c", 20),
        record("d", 60),
        record("e", 79),
        record("f", 80),
        record("g", 100),
    ];
    let counts: Vec<usize> = trust_distribution(&history).iter().map(|b| b.count).collect();
    assert_eq!(counts, vec![2, 1, 0, 2, 2]);
}

#[test]
fn distribution_of_empty_history_has_empty_buckets() {
    let buckets = trust_distribution(&[]);
    assert_eq!(buckets.len(), 5);
    assert!(buckets.iter().all(|b| b.count == 0));
    assert_eq!(buckets[0].min, 0);
    assert_eq!(buckets[4].max, 100);
}

// ============================================================
// Property tests over random histories
// ============================================================

fn arb_history() -> impl Strategy<Value = Vec<AnalysisResult>> {
    prop::collection::vec(
        ("[a-z]{1,8}\\.(com|tk|org)", 0u8..=100),
        0..40,
    )
    .prop_map(|rows| {
        rows.into_iter()
            .map(|(url, score)| record(&url, score))
            .collect()
    })
}

proptest! {
    #[test]
    fn prop_counts_sum_to_total(history in arb_history()) {
        let stats = compute_stats(&history);
        prop_assert_eq!(stats.total_analyses, history.len());
        prop_assert_eq!(stats.legitimate_count + stats.suspicious_count, stats.total_analyses);
        prop_assert!(stats.average_trust_score <= 100);
    }

    #[test]
    fn prop_average_within_min_and_max(history in arb_history()) {
        prop_assume!(!history.is_empty());
        let stats = compute_stats(&history);
        let min = history.iter().map(|r| r.trust_score).min().unwrap();
        let max = history.iter().map(|r| r.trust_score).max().unwrap();
        prop_assert!(stats.average_trust_score >= min);
        prop_assert!(stats.average_trust_score <= max);
    }

    #[test]
    fn prop_stats_ignore_order(history in arb_history()) {
        let mut reversed = history.clone();
        reversed.reverse();
        prop_assert_eq!(compute_stats(&history), compute_stats(&reversed));
    }

    #[test]
    fn prop_filter_partitions_history(history in arb_history(), term in "[a-z]{0,2}") {
        let legit = filter(&history, FilterCriterion::Legitimate, &term).len();
        let suspicious = filter(&history, FilterCriterion::Suspicious, &term).len();
        let all = filter(&history, FilterCriterion::All, &term).len();
        prop_assert_eq!(legit + suspicious, all);
    }

    #[test]
    fn prop_filter_output_is_ordered_subsequence(history in arb_history(), term in "[a-z]{0,2}") {
        let matched = filter(&history, FilterCriterion::All, &term);
        let mut cursor = history.iter();
        for m in matched {
            prop_assert!(cursor.any(|r| std::ptr::eq(r, m)));
        }
    }

    #[test]
    fn prop_distribution_counts_everything(history in arb_history()) {
        let total: usize = trust_distribution(&history).iter().map(|b| b.count).sum();
        prop_assert_eq!(total, history.len());
    }
}
