// Trust score formula.
//
// Points-based: start from a fixed baseline, subtract for failed checks,
// add for an established domain, and subtract a capped penalty for the
// suspicious patterns that fired. The classification bands that read this
// score live in `db::models::TrustBand`.

use crate::db::models::{AnalysisInput, SslState, SuspiciousPattern};

/// Configurable weights for the trust score formula.
pub struct TrustWeights {
    /// Starting score before any adjustment (default 100.0)
    pub baseline: f64,
    /// Deducted when the site did not respond (default 25.0)
    pub inaccessible_penalty: f64,
    /// Deducted when no certificate was presented (default 20.0)
    pub missing_ssl_penalty: f64,
    /// Deducted when a certificate was presented but failed validation (default 10.0)
    pub invalid_ssl_penalty: f64,
    /// Added for domains older than a year (default 15.0)
    pub established_domain_bonus: f64,
    /// Added for domains older than a month (default 8.0)
    pub maturing_domain_bonus: f64,
    /// Deducted for domains younger than a week (default 15.0)
    pub fresh_domain_penalty: f64,
    /// Deducted when the domain age could not be determined (default 8.0)
    pub unknown_age_penalty: f64,
    /// Points deducted per unit of pattern severity (default 1.5)
    pub severity_multiplier: f64,
    /// Ceiling on the total pattern penalty (default 40.0)
    pub max_pattern_penalty: f64,
}

impl Default for TrustWeights {
    fn default() -> Self {
        Self {
            baseline: 100.0,
            inaccessible_penalty: 25.0,
            missing_ssl_penalty: 20.0,
            invalid_ssl_penalty: 10.0,
            established_domain_bonus: 15.0,
            maturing_domain_bonus: 8.0,
            fresh_domain_penalty: 15.0,
            unknown_age_penalty: 8.0,
            severity_multiplier: 1.5,
            max_pattern_penalty: 40.0,
        }
    }
}

/// Domain age adjustment. Thresholds are strict: 365 days is not "over a year".
fn domain_age_adjustment(age_days: Option<u32>, weights: &TrustWeights) -> f64 {
    match age_days {
        Some(age) if age > 365 => weights.established_domain_bonus,
        Some(age) if age > 30 => weights.maturing_domain_bonus,
        Some(age) if age < 7 => -weights.fresh_domain_penalty,
        Some(_) => 0.0,
        None => -weights.unknown_age_penalty,
    }
}

/// Capped penalty for the detected patterns.
pub fn pattern_penalty(patterns: &[SuspiciousPattern], weights: &TrustWeights) -> f64 {
    let total_severity: u64 = patterns.iter().map(|p| u64::from(p.severity)).sum();
    (total_severity as f64 * weights.severity_multiplier).min(weights.max_pattern_penalty)
}

/// Compute the trust score (0-100) for a set of gathered facts.
pub fn compute_trust_score(input: &AnalysisInput, weights: &TrustWeights) -> u8 {
    let mut score = weights.baseline;

    if !input.is_accessible {
        score -= weights.inaccessible_penalty;
    }

    match SslState::from_flags(input.has_ssl, input.ssl_valid) {
        SslState::Missing => score -= weights.missing_ssl_penalty,
        SslState::Invalid => score -= weights.invalid_ssl_penalty,
        SslState::Valid => {}
    }

    score += domain_age_adjustment(input.domain_age_days, weights);
    score -= pattern_penalty(&input.suspicious_patterns, weights);

    // Clamp, then drop the fraction (a 59.5 stays Low Trust)
    score.clamp(0.0, 100.0) as u8
}
