//! Best-effort holiday cache.
//!
//! The proxy persists fetched records so repeated queries can be served from
//! storage later; persistence is strictly best-effort, and per-record
//! failures (typically duplicates on the country+date key) never affect the
//! response to the caller.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use sqlx::sqlite::SqlitePool;
use thiserror::Error;
use vc_time::Date;

use crate::record::HolidayRecord;

/// Failure modes of a single insert.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// A record with the same country+date already exists.
    #[error("duplicate record")]
    Duplicate,

    /// The storage backend failed.
    #[error("storage error: {0}")]
    Backend(String),
}

/// A holiday cache keyed on (country, date).
#[async_trait]
pub trait HolidayStore: Send + Sync {
    /// Insert one record.
    async fn insert(&self, record: &HolidayRecord) -> Result<(), StoreError>;

    /// Insert a batch best-effort: every record is attempted and individual
    /// failures are logged and ignored.
    async fn insert_many(&self, records: &[HolidayRecord]) {
        for record in records {
            if let Err(err) = self.insert(record).await {
                tracing::debug!(
                    country = %record.country,
                    date = %record.date,
                    %err,
                    "cache insert skipped"
                );
            }
        }
    }
}

/// In-memory store, used when no database is configured and in tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: Mutex<HashMap<(String, Date), HolidayRecord>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        MemoryStore::default()
    }

    /// Number of cached records.
    pub fn len(&self) -> usize {
        self.records.lock().expect("store mutex poisoned").len()
    }

    /// Return `true` if the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Return the cached record for (country, date), if any.
    pub fn get(&self, country: &str, date: Date) -> Option<HolidayRecord> {
        self.records
            .lock()
            .expect("store mutex poisoned")
            .get(&(country.to_owned(), date))
            .cloned()
    }
}

#[async_trait]
impl HolidayStore for MemoryStore {
    async fn insert(&self, record: &HolidayRecord) -> Result<(), StoreError> {
        let mut records = self.records.lock().expect("store mutex poisoned");
        let key = (record.country.clone(), record.date);
        if records.contains_key(&key) {
            return Err(StoreError::Duplicate);
        }
        records.insert(key, record.clone());
        Ok(())
    }
}

/// SQLite-backed store.
#[derive(Debug, Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// Connect and make sure the holidays table exists.
    pub async fn connect(url: &str) -> Result<Self, StoreError> {
        let pool = SqlitePool::connect(url)
            .await
            .map_err(|e| StoreError::Backend(e.to_string()))?;
        Self::from_pool(pool).await
    }

    /// Wrap an existing pool and make sure the holidays table exists.
    pub async fn from_pool(pool: SqlitePool) -> Result<Self, StoreError> {
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS holidays (
                country     TEXT NOT NULL,
                date        TEXT NOT NULL,
                local_name  TEXT NOT NULL,
                name        TEXT NOT NULL,
                description TEXT NOT NULL DEFAULT '',
                kind        TEXT NOT NULL DEFAULT '',
                UNIQUE (country, date)
            )",
        )
        .execute(&pool)
        .await
        .map_err(|e| StoreError::Backend(e.to_string()))?;
        Ok(SqliteStore { pool })
    }
}

#[async_trait]
impl HolidayStore for SqliteStore {
    async fn insert(&self, record: &HolidayRecord) -> Result<(), StoreError> {
        let result = sqlx::query(
            "INSERT INTO holidays (country, date, local_name, name, description, kind)
             VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(&record.country)
        .bind(record.date.to_string())
        .bind(&record.local_name)
        .bind(&record.name)
        .bind(&record.description)
        .bind(&record.kind)
        .execute(&self.pool)
        .await;
        match result {
            Ok(_) => Ok(()),
            Err(sqlx::Error::Database(db)) if db.is_unique_violation() => {
                Err(StoreError::Duplicate)
            }
            Err(e) => Err(StoreError::Backend(e.to_string())),
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
