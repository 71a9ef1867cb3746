//! Per-domain durable audit history.
//!
//! Each audited domain gets its own SQLite file under the data root, holding a
//! single `kv` table. A run is stored under `run:<ts>` and the most recently
//! saved record is mirrored into the fixed `latest` key. Concurrent writers to
//! the same partition are serialized by SQLite itself (WAL + busy timeout);
//! no locking is layered on top.

use std::path::{Path, PathBuf};
use std::time::Duration;

use rusqlite::{Connection, OptionalExtension, params};
use thiserror::Error;
use tracing::warn;

use super::model::AuditRecord;

/// Maximum number of runs returned by `list`. Storage itself is unbounded;
/// only the read window is capped.
pub const HISTORY_LIMIT: usize = 20;

const LATEST_KEY: &str = "latest";
const UPSERT_SQL: &str = "INSERT INTO kv (key, value) VALUES (?1, ?2) \
     ON CONFLICT(key) DO UPDATE SET value = excluded.value";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage failure: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("record codec failure: {0}")]
    Codec(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Default)]
pub struct SiteHistory {
    pub latest: Option<AuditRecord>,
    pub history: Vec<AuditRecord>,
}

/// Handle to one domain partition. Opening is idempotent: the schema is
/// established with `CREATE TABLE IF NOT EXISTS` and existing rows are never
/// touched, so the same partition may be opened repeatedly and concurrently.
pub struct SiteStore {
    conn: Connection,
}

impl SiteStore {
    pub fn open(root: &Path, domain: &str) -> Result<Self, StoreError> {
        let conn = Connection::open(partition_path(root, domain))?;
        conn.busy_timeout(Duration::from_secs(5))?;
        let _mode: String = conn.query_row("PRAGMA journal_mode=WAL", [], |row| row.get(0))?;
        conn.execute(
            "CREATE TABLE IF NOT EXISTS kv (key TEXT PRIMARY KEY, value TEXT NOT NULL)",
            [],
        )?;
        Ok(Self { conn })
    }

    /// Upserts the run row keyed by the record's `ts` and overwrites the
    /// `latest` slot, in one transaction. Saving the same `ts` twice replaces
    /// that run's payload; `latest` always reflects the last save to commit,
    /// regardless of timestamp ordering. A zero `ts` is a valid identity.
    pub fn save(&mut self, record: &AuditRecord) -> Result<(), StoreError> {
        let payload = serde_json::to_string(record)?;
        let tx = self.conn.transaction()?;
        tx.execute(UPSERT_SQL, params![run_key(record.ts), payload])?;
        tx.execute(UPSERT_SQL, params![LATEST_KEY, payload])?;
        tx.commit()?;
        Ok(())
    }

    /// Reads every run row, newest first, capped at `HISTORY_LIMIT`, plus the
    /// `latest` slot. A row that no longer parses is skipped, not fatal.
    pub fn list(&self) -> Result<SiteHistory, StoreError> {
        let mut stmt = self
            .conn
            .prepare("SELECT key, value FROM kv WHERE key LIKE 'run:%'")?;
        let rows = stmt.query_map([], |row| {
            Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?))
        })?;

        let mut history: Vec<AuditRecord> = Vec::new();
        for row in rows {
            let (key, value) = row?;
            match serde_json::from_str::<AuditRecord>(&value) {
                Ok(record) => history.push(record),
                Err(e) => warn!(key = %key, error = %e, "skipping unreadable history row"),
            }
        }
        history.sort_by_key(|r| std::cmp::Reverse(r.ts));
        history.truncate(HISTORY_LIMIT);

        let latest = self
            .conn
            .query_row(
                "SELECT value FROM kv WHERE key = ?1",
                params![LATEST_KEY],
                |row| row.get::<_, String>(0),
            )
            .optional()?
            .and_then(|value| match serde_json::from_str::<AuditRecord>(&value) {
                Ok(record) => Some(record),
                Err(e) => {
                    warn!(error = %e, "skipping unreadable latest row");
                    None
                }
            });

        Ok(SiteHistory { latest, history })
    }
}

fn run_key(ts: i64) -> String {
    format!("run:{ts}")
}

/// File path of a domain's partition. The domain is an URL authority, so
/// anything outside the filename-safe set (the port colon, mostly) is mapped
/// to `_`.
pub fn partition_path(root: &Path, domain: &str) -> PathBuf {
    let stem: String = domain
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '.' || c == '-' {
                c
            } else {
                '_'
            }
        })
        .collect();
    root.join(format!("{stem}.db"))
}
