// Signal helpers: pure lexical checks that need nothing but the URL string.
//
// Network-derived facts (reachability, certificates, WHOIS age) come from an
// external analyzer. These helpers cover the part that can be computed
// locally so the CLI and API can build an AnalysisInput from a raw URL.

pub mod patterns;
pub mod url;

use anyhow::Result;

use crate::db::models::AnalysisInput;
use self::patterns::detect_suspicious_patterns;
use self::url::{host_of, normalize_url};

/// Build an AnalysisInput from a raw URL and externally gathered facts.
///
/// The URL is normalised and its lexical patterns are detected locally;
/// everything else is passed through. `ssl_valid` is dropped when no
/// certificate was presented.
pub fn build_input(
    raw: &str,
    accessible: bool,
    status: Option<u16>,
    ssl: bool,
    ssl_valid: bool,
    age_days: Option<u32>,
) -> Result<AnalysisInput> {
    let url = normalize_url(raw);
    if host_of(&url).is_none() {
        anyhow::bail!("Invalid URL format: {raw}");
    }

    let suspicious_patterns = detect_suspicious_patterns(&url);
    Ok(AnalysisInput {
        url,
        is_accessible: accessible,
        status_code: status,
        has_ssl: ssl,
        ssl_valid: ssl && ssl_valid,
        domain_age_days: age_days,
        suspicious_patterns,
    })
}
