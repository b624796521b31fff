// Scoring engine: builds a complete AnalysisResult from gathered facts.
//
// Given an AnalysisInput, this module:
// 1. Computes the trust score from the configured weights
// 2. Derives the legitimacy verdict from the score's band
// 3. Writes the rationale
// 4. Stamps a fresh id and timestamp
//
// There is no failure path. Missing facts are already Options on the input
// and degrade to failing checks inside the formula.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::db::models::{is_legitimate, AnalysisInput, AnalysisResult};
use crate::scoring::summary::generate_summary;
use crate::scoring::trust::{compute_trust_score, TrustWeights};

/// Score an input with the default weights.
pub fn score(input: AnalysisInput) -> AnalysisResult {
    score_with(input, &TrustWeights::default())
}

/// Score an input with custom weights.
pub fn score_with(input: AnalysisInput, weights: &TrustWeights) -> AnalysisResult {
    score_at(input, weights, Uuid::new_v4().to_string(), Utc::now())
}

/// Score an input with caller-supplied creation metadata.
///
/// `id` and `timestamp` are not derived from the input, so two results for
/// identical input differ only in these two fields.
pub fn score_at(
    input: AnalysisInput,
    weights: &TrustWeights,
    id: String,
    timestamp: DateTime<Utc>,
) -> AnalysisResult {
    let trust_score = compute_trust_score(&input, weights);
    let analysis_summary = generate_summary(trust_score, &input);

    AnalysisResult {
        id,
        url: input.url,
        trust_score,
        is_legitimate: is_legitimate(trust_score),
        is_accessible: input.is_accessible,
        status_code: input.status_code,
        has_ssl: input.has_ssl,
        ssl_valid: input.ssl_valid,
        domain_age_days: input.domain_age_days,
        suspicious_patterns: input.suspicious_patterns,
        analysis_summary,
        timestamp,
    }
}
