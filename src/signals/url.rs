// URL normalisation.
//
// Adds an https:// scheme when none is given and lowercases the whole URL,
// so history searches and pattern checks see one canonical spelling.

/// Normalise a user-supplied URL.
pub fn normalize_url(raw: &str) -> String {
    // Schemes are case-insensitive, so lowercase before looking for one
    let lowered = raw.trim().to_lowercase();
    if lowered.starts_with("http://") || lowered.starts_with("https://") {
        lowered
    } else {
        format!("https://{lowered}")
    }
}

/// Extract the hostname from a normalised URL, if it has one.
pub fn host_of(url: &str) -> Option<String> {
    let parsed = ::url::Url::parse(url).ok()?;
    parsed
        .host_str()
        .filter(|h| !h.is_empty())
        .map(|h| h.trim_start_matches('[').trim_end_matches(']').to_string())
}

/// Path component of a URL, empty when it cannot be parsed.
pub fn path_of(url: &str) -> String {
    ::url::Url::parse(url)
        .map(|u| u.path().to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adds_https_scheme() {
        assert_eq!(normalize_url("Example.com"), "https://example.com");
    }

    #[test]
    fn test_keeps_http_scheme() {
        assert_eq!(normalize_url("http://example.com/A"), "http://example.com/a");
        assert_eq!(normalize_url("HTTP://Example.com/A"), "http://example.com/a");
    }

    #[test]
    fn test_upper_case_scheme_is_not_doubled() {
        let url = normalize_url("HTTPS://Bit.ly/login");
        assert_eq!(url, "https://bit.ly/login");
        assert_eq!(host_of(&url), Some("bit.ly".to_string()));
    }

    #[test]
    fn test_trims_whitespace() {
        assert_eq!(normalize_url("  example.com \n"), "https://example.com");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        for raw in ["Foo.Example.org/Path", "HTTPS://Foo.Example.org/Path"] {
            let once = normalize_url(raw);
            assert_eq!(normalize_url(&once), once);
        }
    }

    #[test]
    fn test_host_of() {
        assert_eq!(
            host_of("https://www.example.com/login"),
            Some("www.example.com".to_string())
        );
        assert_eq!(host_of("https://192.168.0.1/"), Some("192.168.0.1".to_string()));
        assert_eq!(host_of("not a url"), None);
    }

    #[test]
    fn test_path_of() {
        assert_eq!(path_of("https://example.com/account/verify"), "/account/verify");
        assert_eq!(path_of("garbage"), "");
    }
}
