// POST /api/score: score a set of gathered facts and append it to history.
//
// Returns 201 Created with the stored result.
// Returns 400 if the URL is blank, 500 if the result could not be stored.
// A body that is not a valid AnalysisInput gets axum's status with a JSON error.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::info;

use crate::db::models::AnalysisInput;
use crate::scoring::engine;
use crate::web::handlers::result_to_json;
use crate::web::{api_error, AppState};

pub async fn score_input(
    State(state): State<AppState>,
    body: Result<Json<AnalysisInput>, JsonRejection>,
) -> Response {
    let Json(input) = match body {
        Ok(body) => body,
        Err(rejection) => return api_error(rejection.status(), &rejection.body_text()),
    };
    if input.url.trim().is_empty() {
        return api_error(StatusCode::BAD_REQUEST, "url must not be empty");
    }

    let result = engine::score(input);

    if let Err(e) = state.db.insert_analysis(&result).await {
        tracing::error!(error = %e, url = %result.url, "DB error storing analysis");
        return api_error(StatusCode::INTERNAL_SERVER_ERROR, "Failed to store analysis");
    }

    info!(
        url = %result.url,
        trust_score = result.trust_score,
        band = result.band().as_str(),
        patterns = result.suspicious_patterns.len(),
        "Scored URL"
    );

    (StatusCode::CREATED, Json(result_to_json(&result))).into_response()
}
