// SqliteDatabase: rusqlite backend implementing the Database trait.
//
// The Connection is wrapped in tokio::sync::Mutex because Connection is !Sync.
// Trait methods lock the mutex, do synchronous rusqlite work, and return.
// The lock is never held across an .await on anything else.

use anyhow::Result;
use async_trait::async_trait;
use rusqlite::Connection;
use tokio::sync::Mutex;

use super::models::AnalysisResult;
use super::traits::Database;

pub struct SqliteDatabase {
    conn: Mutex<Connection>,
}

impl SqliteDatabase {
    /// Wrap an already-opened rusqlite Connection.
    pub fn new(conn: Connection) -> Self {
        Self {
            conn: Mutex::new(conn),
        }
    }
}

#[async_trait]
impl Database for SqliteDatabase {
    async fn table_count(&self) -> Result<i64> {
        let conn = self.conn.lock().await;
        super::schema::table_count(&conn)
    }

    async fn insert_analysis(&self, result: &AnalysisResult) -> Result<()> {
        let conn = self.conn.lock().await;
        super::queries::insert_analysis(&conn, result)
    }

    async fn get_all_analyses(&self) -> Result<Vec<AnalysisResult>> {
        let conn = self.conn.lock().await;
        super::queries::get_all_analyses(&conn)
    }

    async fn get_recent_analyses(&self, limit: u32) -> Result<Vec<AnalysisResult>> {
        let conn = self.conn.lock().await;
        super::queries::get_recent_analyses(&conn, limit)
    }

    async fn get_analysis_by_id(&self, id: &str) -> Result<Option<AnalysisResult>> {
        let conn = self.conn.lock().await;
        super::queries::get_analysis_by_id(&conn, id)
    }

    async fn count_analyses(&self) -> Result<i64> {
        let conn = self.conn.lock().await;
        super::queries::count_analyses(&conn)
    }
}
