// Dashboard filtering: verdict criterion ANDed with a URL search.
//
// The search is a case-insensitive substring match on `url`. An empty
// search matches everything. Results keep the history's order.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::db::models::AnalysisResult;

/// Which verdicts to keep.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterCriterion {
    #[default]
    All,
    Legitimate,
    Suspicious,
}

impl FilterCriterion {
    pub fn matches(&self, result: &AnalysisResult) -> bool {
        match self {
            FilterCriterion::All => true,
            FilterCriterion::Legitimate => result.is_legitimate,
            FilterCriterion::Suspicious => !result.is_legitimate,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FilterCriterion::All => "all",
            FilterCriterion::Legitimate => "legitimate",
            FilterCriterion::Suspicious => "suspicious",
        }
    }
}

impl FromStr for FilterCriterion {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(FilterCriterion::All),
            "legitimate" => Ok(FilterCriterion::Legitimate),
            "suspicious" => Ok(FilterCriterion::Suspicious),
            other => anyhow::bail!(
                "Unknown filter '{other}'. Expected one of: all, legitimate, suspicious"
            ),
        }
    }
}

impl std::fmt::Display for FilterCriterion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Keep the results matching both the criterion and the URL search.
pub fn filter<'a>(
    history: &'a [AnalysisResult],
    criterion: FilterCriterion,
    search_term: &str,
) -> Vec<&'a AnalysisResult> {
    let needle = search_term.to_lowercase();
    history
        .iter()
        .filter(|r| criterion.matches(r))
        .filter(|r| r.url.to_lowercase().contains(&needle))
        .collect()
}
