// Database schema: table creation and migrations.
//
// We use a simple version-based migration approach: a `schema_version` table
// tracks which migrations have run, and each migration is a function that
// executes SQL statements.

use anyhow::{Context, Result};
use rusqlite::Connection;

/// Create all tables if they don't exist yet.
///
/// This is idempotent and safe to call on every startup.
pub fn create_tables(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "
        -- Tracks schema version for future migrations
        CREATE TABLE IF NOT EXISTS schema_version (
            version INTEGER PRIMARY KEY,
            applied_at TEXT NOT NULL DEFAULT (datetime('now'))
        );

        -- Scored analyses, one row per run. seq preserves insertion order.
        CREATE TABLE IF NOT EXISTS analyses (
            seq INTEGER PRIMARY KEY AUTOINCREMENT,
            id TEXT NOT NULL UNIQUE,
            url TEXT NOT NULL,
            trust_score INTEGER NOT NULL CHECK (trust_score BETWEEN 0 AND 100),
            is_legitimate INTEGER NOT NULL,
            is_accessible INTEGER NOT NULL,
            status_code INTEGER,               -- NULL when the site never answered
            has_ssl INTEGER NOT NULL,
            ssl_valid INTEGER NOT NULL,
            domain_age_days INTEGER,           -- NULL when WHOIS had no answer
            suspicious_patterns TEXT NOT NULL, -- JSON array of {pattern, description, severity}
            analysis_summary TEXT NOT NULL,
            timestamp TEXT NOT NULL
        );
        ",
    )
    .context("Failed to create database tables")?;

    // Record initial schema version if not already set
    conn.execute(
        "INSERT OR IGNORE INTO schema_version (version) VALUES (?1)",
        [1],
    )?;

    // Migration v2: analyses are append-only. Reject edits and deletes at
    // the storage layer so no code path can rewrite history.
    run_migration(conn, 2, |c| {
        c.execute_batch(
            "
            CREATE TRIGGER analyses_no_update BEFORE UPDATE ON analyses
            BEGIN
                SELECT RAISE(ABORT, 'analyses are append-only');
            END;

            CREATE TRIGGER analyses_no_delete BEFORE DELETE ON analyses
            BEGIN
                SELECT RAISE(ABORT, 'analyses are append-only');
            END;
            ",
        )
    })?;

    Ok(())
}

/// Run a migration if it hasn't been applied yet.
/// The migration function receives the connection and should execute its SQL.
fn run_migration<F>(conn: &Connection, version: i64, migrate: F) -> Result<()>
where
    F: FnOnce(&Connection) -> rusqlite::Result<()>,
{
    let already_applied: bool = conn.query_row(
        "SELECT COUNT(*) > 0 FROM schema_version WHERE version = ?1",
        [version],
        |row| row.get(0),
    )?;

    if !already_applied {
        migrate(conn).with_context(|| format!("Migration v{version} failed"))?;
        conn.execute(
            "INSERT INTO schema_version (version) VALUES (?1)",
            [version],
        )?;
    }

    Ok(())
}

/// Count the number of tables in the database (useful for init confirmation).
pub fn table_count(conn: &Connection) -> Result<i64> {
    let count: i64 = conn.query_row(
        "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name NOT LIKE 'sqlite_%'",
        [],
        |row| row.get(0),
    )?;
    Ok(count)
}
