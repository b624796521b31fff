// GET /api/stats: dashboard counters and the trust score histogram.
//
// Counts come from history::compute_stats over the stored history, so the
// API and the CLI `stats` command report the same figures.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::history::{compute_stats, trust_distribution};
use crate::web::{api_error, AppState};

pub async fn get_stats(State(state): State<AppState>) -> Response {
    let all = match state.db.get_all_analyses().await {
        Ok(all) => all,
        Err(e) => {
            tracing::error!(error = %e, "DB error computing stats");
            return api_error(StatusCode::INTERNAL_SERVER_ERROR, "Database error");
        }
    };

    let stats = compute_stats(&all);
    Json(serde_json::json!({
        "total_analyses": stats.total_analyses,
        "legitimate_count": stats.legitimate_count,
        "suspicious_count": stats.suspicious_count,
        "average_trust_score": stats.average_trust_score,
        "trust_score_distribution": trust_distribution(&all),
    }))
    .into_response()
}
