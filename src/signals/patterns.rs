// Suspicious pattern detection: lexical red flags in a URL.
//
// Each rule adds a SuspiciousPattern with a severity weight. The weights
// feed the capped pattern penalty in scoring::trust. Rules run in a fixed
// order so the first patterns quoted in a summary are stable.

use std::sync::LazyLock;

use regex_lite::Regex;

use super::url::{host_of, path_of};
use crate::db::models::SuspiciousPattern;

const SUSPICIOUS_TLDS: &[&str] = &[
    ".tk", ".ml", ".ga", ".cf", ".pw", ".top", ".click", ".download",
];

const SHORTENERS: &[&str] = &[
    "bit.ly",
    "tinyurl.com",
    "t.co",
    "goo.gl",
    "ow.ly",
    "short.link",
];

const PHISHING_KEYWORDS: &[&str] = &[
    "login", "verify", "update", "secure", "account", "bank", "paypal", "amazon",
];

/// More dots than this in the hostname counts as excessive subdomains.
const MAX_HOST_DOTS: usize = 3;

/// Hostnames longer than this many characters are flagged.
const MAX_HOST_LEN: usize = 50;

static IP_LITERAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?:[0-9]{1,3}\.){3}[0-9]{1,3}\b").expect("IP literal pattern compiles")
});

fn flag(pattern: String, description: String, severity: u32) -> SuspiciousPattern {
    SuspiciousPattern {
        pattern,
        description,
        severity,
    }
}

/// Detect lexical red flags in a normalised URL.
pub fn detect_suspicious_patterns(url: &str) -> Vec<SuspiciousPattern> {
    let mut patterns = Vec::new();
    let host = host_of(url).unwrap_or_default();
    let path = path_of(url).to_lowercase();

    for tld in SUSPICIOUS_TLDS {
        if host.ends_with(tld) {
            patterns.push(flag(
                format!("Suspicious TLD: {tld}"),
                format!("Domain uses potentially suspicious top-level domain {tld}"),
                7,
            ));
        }
    }

    if IP_LITERAL.is_match(&host) {
        patterns.push(flag(
            "IP address as domain".to_string(),
            "Uses IP address instead of domain name".to_string(),
            8,
        ));
    }

    let dots = host.matches('.').count();
    if dots > MAX_HOST_DOTS {
        patterns.push(flag(
            "Excessive subdomains".to_string(),
            format!("Domain has {dots} dots, indicating multiple subdomains"),
            6,
        ));
    }

    for shortener in SHORTENERS {
        if host.contains(shortener) {
            patterns.push(flag(
                format!("URL shortener: {shortener}"),
                "Uses URL shortening service which can hide destination".to_string(),
                5,
            ));
        }
    }

    for keyword in PHISHING_KEYWORDS {
        if path.contains(keyword) {
            patterns.push(flag(
                format!("Suspicious keyword: {keyword}"),
                format!("URL contains potentially phishing-related keyword: {keyword}"),
                4,
            ));
        }
    }

    if host.contains("xn--") {
        patterns.push(flag(
            "Punycode domain".to_string(),
            "Domain contains non-Latin characters (internationalized domain)".to_string(),
            6,
        ));
    }

    let host_len = host.chars().count();
    if host_len > MAX_HOST_LEN {
        patterns.push(flag(
            "Extremely long domain".to_string(),
            format!("Domain name is unusually long ({host_len} characters)"),
            5,
        ));
    }

    patterns
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(url: &str) -> Vec<String> {
        detect_suspicious_patterns(url)
            .into_iter()
            .map(|p| p.pattern)
            .collect()
    }

    #[test]
    fn test_clean_url_has_no_patterns() {
        assert!(detect_suspicious_patterns("https://example.com/").is_empty());
    }

    #[test]
    fn test_suspicious_tld() {
        assert_eq!(names("https://free-prizes.tk/"), vec!["Suspicious TLD: .tk"]);
    }

    #[test]
    fn test_ip_literal_host() {
        let found = detect_suspicious_patterns("http://192.168.10.4/");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].pattern, "IP address as domain");
        assert_eq!(found[0].severity, 8);
    }

    #[test]
    fn test_excessive_subdomains() {
        assert_eq!(
            names("https://a.b.c.d.example.com/"),
            vec!["Excessive subdomains"]
        );
        // Three dots is still fine
        assert!(names("https://a.b.example.com/").is_empty());
    }

    #[test]
    fn test_shortener() {
        assert_eq!(names("https://bit.ly/abc"), vec!["URL shortener: bit.ly"]);
    }

    #[test]
    fn test_keywords_only_checked_in_path() {
        assert!(names("https://login.example.com/").is_empty());
        assert_eq!(
            names("https://example.com/secure/login"),
            vec!["Suspicious keyword: login", "Suspicious keyword: secure"]
        );
    }

    #[test]
    fn test_punycode() {
        assert_eq!(names("https://xn--80ak6aa92e.com/"), vec!["Punycode domain"]);
    }

    #[test]
    fn test_long_domain() {
        let host = format!("{}.com", "a".repeat(60));
        let found = detect_suspicious_patterns(&format!("https://{host}/"));
        assert_eq!(found.len(), 1);
        assert_eq!(
            found[0].description,
            "Domain name is unusually long (64 characters)"
        );
    }
}
