// Analysis summary: the human-readable rationale attached to every result.
//
// Advisory text only; nothing downstream parses it. The headline follows the
// trust band, with the Low band split once more at LOW_TRUST_CAUTION_FLOOR so
// borderline sites read differently from ones with many red flags.

use crate::db::models::{AnalysisInput, SslState, TrustBand};

/// Low Trust scores at or above this still "may be legitimate".
pub const LOW_TRUST_CAUTION_FLOOR: u8 = 40;

/// Number of pattern descriptions quoted in the summary.
pub const MAX_SUMMARY_PATTERNS: usize = 3;

fn plural(n: u32) -> &'static str {
    if n > 1 {
        "s"
    } else {
        ""
    }
}

fn headline(trust_score: u8) -> &'static str {
    match TrustBand::from_score(trust_score) {
        TrustBand::High => "✅ This website appears to be legitimate and trustworthy.",
        TrustBand::Moderate => "✅ This website appears to be legitimate with minor concerns.",
        TrustBand::Low if trust_score >= LOW_TRUST_CAUTION_FLOOR => {
            "⚠️ This website has some concerning indicators but may be legitimate."
        }
        TrustBand::Low => {
            "🚨 This website has multiple red flags and should be approached with caution."
        }
    }
}

fn domain_age_line(age_days: Option<u32>) -> String {
    match age_days {
        Some(age) if age > 365 => {
            let years = age / 365;
            format!(
                "• ✅ Domain is well-established ({years} year{} old).",
                plural(years)
            )
        }
        Some(age) if age > 30 => {
            let months = age / 30;
            format!("• Domain is {months} month{} old.", plural(months))
        }
        Some(age) => format!("• ⚠️ Domain is very new ({age} days old)."),
        None => "• Domain age could not be determined.".to_string(),
    }
}

/// Build the rationale for a scored input. Never empty.
pub fn generate_summary(trust_score: u8, input: &AnalysisInput) -> String {
    let mut parts: Vec<String> = vec![headline(trust_score).to_string()];

    if input.is_accessible {
        parts.push("• The website is accessible and responds to requests.".to_string());
    } else {
        parts.push("• ⚠️ The website is not accessible or not responding.".to_string());
    }

    let ssl_line = match SslState::from_flags(input.has_ssl, input.ssl_valid) {
        SslState::Valid => "• ✅ Uses a valid SSL certificate for secure connections.",
        SslState::Invalid => "• ⚠️ Has SSL but certificate may have issues.",
        SslState::Missing => "• ❌ No SSL certificate - connections are not secure.",
    };
    parts.push(ssl_line.to_string());

    parts.push(domain_age_line(input.domain_age_days));

    let patterns = &input.suspicious_patterns;
    if !patterns.is_empty() {
        let count = patterns.len() as u32;
        parts.push(format!(
            "• 🚨 Found {count} suspicious pattern{}:",
            plural(count)
        ));
        for pattern in patterns.iter().take(MAX_SUMMARY_PATTERNS) {
            parts.push(format!("  - {}", pattern.description));
        }
    }

    parts.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::models::SuspiciousPattern;

    fn input() -> AnalysisInput {
        AnalysisInput {
            url: "https://example.com".to_string(),
            is_accessible: true,
            status_code: Some(200),
            has_ssl: true,
            ssl_valid: true,
            domain_age_days: Some(800),
            suspicious_patterns: vec![],
        }
    }

    #[test]
    fn test_headline_follows_bands() {
        assert!(headline(80).contains("trustworthy"));
        assert!(headline(79).contains("minor concerns"));
        assert!(headline(60).contains("minor concerns"));
        assert!(headline(59).contains("may be legitimate"));
        assert!(headline(40).contains("may be legitimate"));
        assert!(headline(39).contains("red flags"));
    }

    #[test]
    fn test_year_and_month_pluralisation() {
        assert!(domain_age_line(Some(400)).contains("(1 year old)"));
        assert!(domain_age_line(Some(800)).contains("(2 years old)"));
        assert!(domain_age_line(Some(45)).contains("1 month old"));
        assert!(domain_age_line(Some(90)).contains("3 months old"));
        assert!(domain_age_line(Some(3)).contains("very new (3 days old)"));
    }

    #[test]
    fn test_no_pattern_section_without_patterns() {
        let summary = generate_summary(100, &input());
        assert!(!summary.contains("suspicious pattern"));
    }

    #[test]
    fn test_only_first_three_patterns_are_quoted() {
        let mut i = input();
        i.suspicious_patterns = (1..=5)
            .map(|n| SuspiciousPattern {
                pattern: format!("p{n}"),
                description: format!("description {n}"),
                severity: 1,
            })
            .collect();
        let summary = generate_summary(70, &i);
        assert!(summary.contains("Found 5 suspicious patterns:"));
        assert!(summary.contains("description 3"));
        assert!(!summary.contains("description 4"));
    }

    #[test]
    fn test_single_pattern_is_singular() {
        let mut i = input();
        i.suspicious_patterns = vec![SuspiciousPattern {
            pattern: "IP address as domain".to_string(),
            description: "Uses IP address instead of domain name".to_string(),
            severity: 8,
        }];
        let summary = generate_summary(70, &i);
        assert!(summary.contains("Found 1 suspicious pattern:"));
    }
}
