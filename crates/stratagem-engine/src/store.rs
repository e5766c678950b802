//! Durable store for optimization results.
//!
//! One SQLite table keyed by run id; the record itself is stored as its
//! JSON serialization, since the reporting layer consumes it whole.

use std::path::Path;
use std::sync::{Mutex, MutexGuard};

use rusqlite::{params, Connection};
use tracing::info;

use stratagem_core::config::DEFAULT_BUSY_TIMEOUT_MS;
use stratagem_core::errors::{EngineError, EngineResult};
use stratagem_core::types::OptimizationResult;

/// SQLite-backed audit store for optimization results.
pub struct ResultStore {
    conn: Mutex<Connection>,
}

impl ResultStore {
    /// Open (or create) a store at the given database file.
    pub fn open(path: &Path) -> EngineResult<Self> {
        let conn = Connection::open(path).map_err(to_storage_err)?;
        conn.pragma_update(None, "journal_mode", "WAL")
            .map_err(to_storage_err)?;
        conn.busy_timeout(std::time::Duration::from_millis(
            DEFAULT_BUSY_TIMEOUT_MS as u64,
        ))
        .map_err(to_storage_err)?;
        Self::init(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Open an in-memory store (for testing).
    pub fn open_in_memory() -> EngineResult<Self> {
        let conn = Connection::open_in_memory().map_err(to_storage_err)?;
        Self::init(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn init(conn: &Connection) -> EngineResult<()> {
        conn.execute(
            "CREATE TABLE IF NOT EXISTS optimization_results (
                run_id     TEXT PRIMARY KEY,
                created_at TEXT NOT NULL,
                payload    TEXT NOT NULL
            )",
            [],
        )
        .map_err(to_storage_err)?;
        Ok(())
    }

    fn lock(&self) -> EngineResult<MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|_| EngineError::Storage("connection mutex poisoned".to_string()))
    }

    /// Persist one result keyed by its run id.
    pub fn save(&self, result: &OptimizationResult) -> EngineResult<()> {
        let payload = serde_json::to_string(result)?;
        let conn = self.lock()?;
        conn.execute(
            "INSERT INTO optimization_results (run_id, created_at, payload)
             VALUES (?1, ?2, ?3)",
            params![
                result.run_id,
                result.created_at.to_rfc3339(),
                payload
            ],
        )
        .map_err(to_storage_err)?;
        info!(run_id = %result.run_id, "persisted optimization result");
        Ok(())
    }

    /// Load one result by run id.
    pub fn get(&self, run_id: &str) -> EngineResult<Option<OptimizationResult>> {
        let conn = self.lock()?;
        let payload: Option<String> = conn
            .query_row(
                "SELECT payload FROM optimization_results WHERE run_id = ?1",
                params![run_id],
                |row| row.get(0),
            )
            .map(Some)
            .or_else(|e| match e {
                rusqlite::Error::QueryReturnedNoRows => Ok(None),
                other => Err(to_storage_err(other)),
            })?;

        match payload {
            Some(json) => Ok(Some(serde_json::from_str(&json)?)),
            None => Ok(None),
        }
    }

    /// Run ids in insertion order.
    pub fn list_run_ids(&self) -> EngineResult<Vec<String>> {
        let conn = self.lock()?;
        let mut stmt = conn
            .prepare("SELECT run_id FROM optimization_results ORDER BY rowid")
            .map_err(to_storage_err)?;
        let ids = stmt
            .query_map([], |row| row.get(0))
            .map_err(to_storage_err)?
            .filter_map(|r| r.ok())
            .collect();
        Ok(ids)
    }
}

fn to_storage_err(e: rusqlite::Error) -> EngineError {
    EngineError::Storage(e.to_string())
}
