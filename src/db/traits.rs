// Database trait: backend-agnostic async interface for the analysis history.
//
// All methods are async so a sync backend (rusqlite behind a Mutex) and the
// axum handlers share one interface. The trait mirrors the queries.rs
// function signatures. History is append-only, so there is no update or
// delete method.

use anyhow::Result;
use async_trait::async_trait;

use super::models::AnalysisResult;

#[async_trait]
pub trait Database: Send + Sync {
    // --- Lifecycle ---

    /// Count the number of user-created tables in the database.
    async fn table_count(&self) -> Result<i64>;

    // --- Analyses ---

    /// Append a scored analysis.
    async fn insert_analysis(&self, result: &AnalysisResult) -> Result<()>;

    /// The full history in chronological order.
    async fn get_all_analyses(&self) -> Result<Vec<AnalysisResult>>;

    /// The most recent analyses, newest first.
    async fn get_recent_analyses(&self, limit: u32) -> Result<Vec<AnalysisResult>>;

    /// Look up one analysis by id.
    async fn get_analysis_by_id(&self, id: &str) -> Result<Option<AnalysisResult>>;

    /// Number of stored analyses.
    async fn count_analyses(&self) -> Result<i64>;
}
