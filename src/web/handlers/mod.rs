// Route handlers for the JSON API.

pub mod analyses;
pub mod score;
pub mod stats;

use crate::db::models::AnalysisResult;
use crate::scoring::domain_age::domain_age_check;

/// Serialize a result with the display fields the dashboard needs.
///
/// `band`, `severity` and `ssl_state` are derived from the stored fields on
/// every response rather than stored, so they always follow the band table.
pub fn result_to_json(result: &AnalysisResult) -> serde_json::Value {
    let band = result.band();
    let mut value = serde_json::to_value(result).unwrap_or(serde_json::Value::Null);
    if let Some(obj) = value.as_object_mut() {
        obj.insert("band".to_string(), band.as_str().into());
        obj.insert("severity".to_string(), band.severity().as_str().into());
        obj.insert("ssl_state".to_string(), result.ssl_state().as_str().into());
        obj.insert(
            "domain_age_check".to_string(),
            serde_json::to_value(domain_age_check(result.domain_age_days))
                .unwrap_or(serde_json::Value::Null),
        );
        obj.insert(
            "pattern_warnings".to_string(),
            result.pattern_warnings().into(),
        );
    }
    value
}
