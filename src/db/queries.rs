// Database queries: append and read operations on the analyses table.
//
// Every database interaction goes through this module. This keeps SQL
// contained in one place and gives the rest of the app clean Rust interfaces.
// There are deliberately no update or delete helpers: history is append-only.

use anyhow::Result;
use rusqlite::types::Type;
use rusqlite::{params, Connection, OptionalExtension, Row};

use super::models::{AnalysisResult, SuspiciousPattern};

const SELECT_COLUMNS: &str = "id, url, trust_score, is_legitimate, is_accessible, status_code,
        has_ssl, ssl_valid, domain_age_days, suspicious_patterns, analysis_summary, timestamp";

/// Map a row selected with SELECT_COLUMNS.
fn row_to_result(row: &Row<'_>) -> rusqlite::Result<AnalysisResult> {
    let patterns_json: String = row.get(9)?;
    // A corrupt column is an error, not "no patterns"
    let suspicious_patterns: Vec<SuspiciousPattern> = serde_json::from_str(&patterns_json)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(9, Type::Text, Box::new(e)))?;
    Ok(AnalysisResult {
        id: row.get(0)?,
        url: row.get(1)?,
        trust_score: row.get(2)?,
        is_legitimate: row.get(3)?,
        is_accessible: row.get(4)?,
        status_code: row.get(5)?,
        has_ssl: row.get(6)?,
        ssl_valid: row.get(7)?,
        domain_age_days: row.get(8)?,
        suspicious_patterns,
        analysis_summary: row.get(10)?,
        timestamp: row.get(11)?,
    })
}

/// Append a scored analysis to the history.
pub fn insert_analysis(conn: &Connection, result: &AnalysisResult) -> Result<()> {
    let patterns_json = serde_json::to_string(&result.suspicious_patterns)?;
    conn.execute(
        "INSERT INTO analyses (id, url, trust_score, is_legitimate, is_accessible, status_code,
                has_ssl, ssl_valid, domain_age_days, suspicious_patterns, analysis_summary, timestamp)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)",
        params![
            result.id,
            result.url,
            result.trust_score,
            result.is_legitimate,
            result.is_accessible,
            result.status_code,
            result.has_ssl,
            result.ssl_valid,
            result.domain_age_days,
            patterns_json,
            result.analysis_summary,
            result.timestamp,
        ],
    )?;
    Ok(())
}

/// The full history in insertion (chronological) order.
pub fn get_all_analyses(conn: &Connection) -> Result<Vec<AnalysisResult>> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {SELECT_COLUMNS} FROM analyses ORDER BY seq ASC"
    ))?;
    let rows = stmt.query_map([], row_to_result)?;

    let mut results = Vec::new();
    for row in rows {
        results.push(row?);
    }
    Ok(results)
}

/// The most recent analyses, newest first.
pub fn get_recent_analyses(conn: &Connection, limit: u32) -> Result<Vec<AnalysisResult>> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {SELECT_COLUMNS} FROM analyses ORDER BY seq DESC LIMIT ?1"
    ))?;
    let rows = stmt.query_map(params![limit], row_to_result)?;

    let mut results = Vec::new();
    for row in rows {
        results.push(row?);
    }
    Ok(results)
}

/// Look up one analysis by its id.
pub fn get_analysis_by_id(conn: &Connection, id: &str) -> Result<Option<AnalysisResult>> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {SELECT_COLUMNS} FROM analyses WHERE id = ?1"
    ))?;
    let result = stmt.query_row(params![id], row_to_result).optional()?;
    Ok(result)
}

/// Number of stored analyses.
pub fn count_analyses(conn: &Connection) -> Result<i64> {
    let count: i64 = conn.query_row("SELECT COUNT(*) FROM analyses", [], |row| row.get(0))?;
    Ok(count)
}
