// Domain age check: the pass/fail annotation shown next to a result.
//
// Independent of the trust score. All thresholds are strict `>`: a domain
// exactly 730 days old is "1+ year", not "2+ years".

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DomainAgeCheck {
    pub pass: bool,
    pub text: String,
}

/// Classify a domain age for display.
pub fn domain_age_check(age_days: Option<u32>) -> DomainAgeCheck {
    let Some(age) = age_days else {
        return DomainAgeCheck {
            pass: false,
            text: "Unknown".to_string(),
        };
    };

    let (pass, label) = match age {
        a if a > 730 => (true, "2+ years"),
        a if a > 365 => (true, "1+ year"),
        a if a > 30 => (true, "1+ month"),
        _ => (false, "new domain"),
    };

    DomainAgeCheck {
        pass,
        text: format!("{age} days ({label})"),
    }
}
