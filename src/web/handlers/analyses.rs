// Analysis list and detail handlers.
//
// GET /api/recent        : newest-first, optional ?limit= (default from config, max 100)
// GET /api/history       : newest-first, optional ?filter= verdict and ?q= URL search
// GET /api/analyses/{id} : single analysis detail
//
// Filtering runs in Rust over the loaded history through history::filter,
// the same function the CLI uses.

use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;

use crate::history::{self, FilterCriterion};
use crate::web::handlers::result_to_json;
use crate::web::{api_error, AppState};

const MAX_RECENT: u32 = 100;

#[derive(Deserialize, Default)]
pub struct RecentQuery {
    pub limit: Option<u32>,
}

#[derive(Deserialize, Default)]
pub struct HistoryQuery {
    /// all | legitimate | suspicious
    pub filter: Option<String>,
    /// Case-insensitive URL search
    pub q: Option<String>,
}

/// GET /api/recent: most recent analyses.
pub async fn list_recent(
    State(state): State<AppState>,
    params: Result<Query<RecentQuery>, QueryRejection>,
) -> Response {
    let Query(params) = match params {
        Ok(params) => params,
        Err(rejection) => return api_error(rejection.status(), &rejection.body_text()),
    };
    let limit = params
        .limit
        .unwrap_or(state.config.recent_limit)
        .clamp(1, MAX_RECENT);

    match state.db.get_recent_analyses(limit).await {
        Ok(results) => {
            let analyses: Vec<serde_json::Value> = results.iter().map(result_to_json).collect();
            Json(serde_json::json!({ "analyses": analyses })).into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "DB error listing recent analyses");
            api_error(StatusCode::INTERNAL_SERVER_ERROR, "Database error")
        }
    }
}

/// GET /api/history: filtered history, newest first.
pub async fn list_history(
    State(state): State<AppState>,
    params: Result<Query<HistoryQuery>, QueryRejection>,
) -> Response {
    let Query(params) = match params {
        Ok(params) => params,
        Err(rejection) => return api_error(rejection.status(), &rejection.body_text()),
    };
    let criterion = match params.filter.as_deref() {
        None | Some("") => FilterCriterion::All,
        Some(raw) => match raw.parse::<FilterCriterion>() {
            Ok(c) => c,
            Err(e) => return api_error(StatusCode::BAD_REQUEST, &e.to_string()),
        },
    };
    let search = params.q.unwrap_or_default();

    let all = match state.db.get_all_analyses().await {
        Ok(all) => all,
        Err(e) => {
            tracing::error!(error = %e, "DB error loading history");
            return api_error(StatusCode::INTERNAL_SERVER_ERROR, "Database error");
        }
    };

    let matched = history::filter(&all, criterion, &search);
    let analyses: Vec<serde_json::Value> =
        matched.iter().rev().map(|r| result_to_json(r)).collect();

    Json(serde_json::json!({
        "analyses": analyses,
        "total": matched.len(),
        "filter": criterion.as_str(),
        "q": search,
    }))
    .into_response()
}

/// GET /api/analyses/{id}: single analysis by id.
pub async fn get_analysis(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    match state.db.get_analysis_by_id(&id).await {
        Ok(Some(result)) => Json(result_to_json(&result)).into_response(),
        Ok(None) => api_error(StatusCode::NOT_FOUND, "Analysis not found"),
        Err(e) => {
            tracing::error!(error = %e, id = %id, "DB error fetching analysis");
            api_error(StatusCode::INTERNAL_SERVER_ERROR, "Database error")
        }
    }
}
