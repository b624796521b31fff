// Data models: the types that flow through scoring, storage and display.
//
// These are separate from the database queries so other modules can use
// them without depending on rusqlite directly. Field names match the JSON
// wire shape used by the analyzer and the dashboard API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A lexical or structural red flag detected in a URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuspiciousPattern {
    pub pattern: String,
    pub description: String,
    /// Weight used by the trust score penalty. Older payloads omit it.
    #[serde(default)]
    pub severity: u32,
}

/// Facts about one URL, gathered by an external analyzer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisInput {
    pub url: String,
    pub is_accessible: bool,
    #[serde(default)]
    pub status_code: Option<u16>,
    pub has_ssl: bool,
    /// Only meaningful when `has_ssl` is true.
    pub ssl_valid: bool,
    /// `None` means the age could not be determined, which is not the same as zero.
    #[serde(default)]
    pub domain_age_days: Option<u32>,
    #[serde(default)]
    pub suspicious_patterns: Vec<SuspiciousPattern>,
}

/// A scored analysis. Created once by the scoring engine and never edited.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub id: String,
    pub url: String,
    pub trust_score: u8,
    pub is_legitimate: bool,
    pub is_accessible: bool,
    #[serde(default)]
    pub status_code: Option<u16>,
    pub has_ssl: bool,
    pub ssl_valid: bool,
    pub domain_age_days: Option<u32>,
    pub suspicious_patterns: Vec<SuspiciousPattern>,
    pub analysis_summary: String,
    pub timestamp: DateTime<Utc>,
}

impl AnalysisResult {
    pub fn ssl_state(&self) -> SslState {
        SslState::from_flags(self.has_ssl, self.ssl_valid)
    }

    pub fn band(&self) -> TrustBand {
        TrustBand::from_score(self.trust_score)
    }

    /// One `Warning:` line per detected pattern, in detection order.
    pub fn pattern_warnings(&self) -> Vec<String> {
        self.suspicious_patterns
            .iter()
            .map(|p| format!("Warning: {}", p.description))
            .collect()
    }
}

/// The three observable certificate outcomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SslState {
    /// No certificate was presented.
    Missing,
    /// A certificate was presented but did not validate.
    Invalid,
    Valid,
}

impl SslState {
    pub fn from_flags(has_ssl: bool, ssl_valid: bool) -> Self {
        match (has_ssl, ssl_valid) {
            (false, _) => SslState::Missing,
            (true, false) => SslState::Invalid,
            (true, true) => SslState::Valid,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SslState::Valid => "Valid SSL",
            SslState::Invalid => "SSL Issues",
            SslState::Missing => "No SSL",
        }
    }
}

/// Display severity attached to a trust band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Warning,
    Error,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }
}

/// Trust bands, highest first. Each row is (band, inclusive lower bound).
///
/// Label, legitimacy and severity are all read off the band picked here, so
/// the three can never disagree about where a score falls.
const BAND_TABLE: [(TrustBand, u8); 3] = [
    (TrustBand::High, 80),
    (TrustBand::Moderate, 60),
    (TrustBand::Low, 0),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrustBand {
    High,
    Moderate,
    Low,
}

impl TrustBand {
    /// Determine the band from a trust score (0-100).
    pub fn from_score(score: u8) -> Self {
        BAND_TABLE
            .iter()
            .find(|(_, floor)| score >= *floor)
            .map(|(band, _)| *band)
            .unwrap_or(TrustBand::Low)
    }

    /// Inclusive lower bound of the band.
    pub fn min_score(&self) -> u8 {
        BAND_TABLE
            .iter()
            .find(|(band, _)| band == self)
            .map(|(_, floor)| *floor)
            .unwrap_or(0)
    }

    pub fn is_legitimate(&self) -> bool {
        match self {
            TrustBand::High | TrustBand::Moderate => true,
            TrustBand::Low => false,
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            TrustBand::High => Severity::Success,
            TrustBand::Moderate => Severity::Warning,
            TrustBand::Low => Severity::Error,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TrustBand::High => "High Trust",
            TrustBand::Moderate => "Moderate Trust",
            TrustBand::Low => "Low Trust",
        }
    }
}

impl std::fmt::Display for TrustBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Legitimacy verdict for a raw score.
pub fn is_legitimate(score: u8) -> bool {
    TrustBand::from_score(score).is_legitimate()
}
