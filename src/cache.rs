use crate::error::{CadenceError, Result};
use crate::model::{CommitterCategory, Observation, Region, SCHEMA_VERSION};
use chrono::NaiveDate;
use rusqlite::{params, Connection, OptionalExtension};
use tracing::debug;

/// Identifies one extraction: a region's file over a window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub region: Region,
    pub window_start: NaiveDate,
}

impl CacheKey {
    pub fn new(region: Region, window_start: NaiveDate) -> Self {
        Self {
            region,
            window_start,
        }
    }
}

/// Memoizes extracted observations for the lifetime of the process.
pub struct Cache {
    conn: Connection,
}

impl Cache {
    pub fn new() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let mut cache = Self { conn };
        cache.initialize()?;
        Ok(cache)
    }

    fn initialize(&mut self) -> Result<()> {
        self.conn.execute_batch(
            "
            CREATE TABLE IF NOT EXISTS extractions (
                region TEXT NOT NULL,
                window_start TEXT NOT NULL,
                PRIMARY KEY (region, window_start)
            );
            CREATE TABLE IF NOT EXISTS observations (
                region TEXT NOT NULL,
                window_start TEXT NOT NULL,
                seq INTEGER NOT NULL,
                date TEXT NOT NULL,
                committer TEXT NOT NULL,
                PRIMARY KEY (region, window_start, seq),
                FOREIGN KEY (region, window_start) REFERENCES extractions(region, window_start)
            );
            ",
        )?;
        self.check_schema_version()?;
        Ok(())
    }

    fn check_schema_version(&mut self) -> Result<()> {
        let user_version: i64 = self
            .conn
            .query_row("PRAGMA user_version;", [], |row| row.get(0))?;

        if user_version == 0 {
            let set_stmt = format!("PRAGMA user_version = {SCHEMA_VERSION};");
            self.conn.execute_batch(&set_stmt)?;
        } else if user_version != SCHEMA_VERSION as i64 {
            return Err(CadenceError::CacheSchema(format!(
                "Schema version mismatch: expected {}, found {}",
                SCHEMA_VERSION, user_version
            )));
        }

        Ok(())
    }

    /// Cached observations for `key`. An extraction that found nothing is
    /// `Some(vec![])`; `None` means it was never stored.
    pub fn get(&self, key: &CacheKey) -> Result<Option<Vec<Observation>>> {
        let known = self
            .conn
            .query_row(
                "SELECT 1 FROM extractions WHERE region = ? AND window_start = ?",
                params![key.region.as_str(), key.window_start],
                |_| Ok(()),
            )
            .optional()?;
        if known.is_none() {
            debug!("Cache miss for {} since {}", key.region, key.window_start);
            return Ok(None);
        }

        let mut stmt = self.conn.prepare(
            "SELECT date, committer FROM observations
             WHERE region = ? AND window_start = ?
             ORDER BY seq",
        )?;
        let rows = stmt.query_map(params![key.region.as_str(), key.window_start], |row| {
            let date: NaiveDate = row.get(0)?;
            let label: String = row.get(1)?;
            let committer = parse_category(&label).ok_or_else(|| {
                rusqlite::Error::FromSqlConversionFailure(
                    1,
                    rusqlite::types::Type::Text,
                    format!("unknown committer category '{label}'").into(),
                )
            })?;
            Ok(Observation {
                region: key.region,
                date,
                committer,
            })
        })?;

        let observations = rows.collect::<rusqlite::Result<Vec<_>>>()?;
        debug!(
            "Cache hit for {} since {} ({} observations)",
            key.region,
            key.window_start,
            observations.len()
        );
        Ok(Some(observations))
    }

    /// Replaces whatever is stored for `key`.
    pub fn store(&mut self, key: &CacheKey, observations: &[Observation]) -> Result<()> {
        let tx = self.conn.transaction()?;

        tx.execute(
            "DELETE FROM observations WHERE region = ? AND window_start = ?",
            params![key.region.as_str(), key.window_start],
        )?;
        tx.execute(
            "INSERT OR REPLACE INTO extractions (region, window_start) VALUES (?, ?)",
            params![key.region.as_str(), key.window_start],
        )?;

        {
            let mut insert_stmt = tx.prepare(
                "INSERT INTO observations (region, window_start, seq, date, committer)
                 VALUES (?, ?, ?, ?, ?)",
            )?;
            for (seq, obs) in observations.iter().enumerate() {
                insert_stmt.execute(params![
                    key.region.as_str(),
                    key.window_start,
                    seq as i64,
                    obs.date,
                    obs.committer.label()
                ])?;
            }
        }

        tx.commit()?;
        Ok(())
    }

    /// Drops the entry for `key`, returning whether one existed.
    pub fn invalidate(&mut self, key: &CacheKey) -> Result<bool> {
        let tx = self.conn.transaction()?;
        tx.execute(
            "DELETE FROM observations WHERE region = ? AND window_start = ?",
            params![key.region.as_str(), key.window_start],
        )?;
        let removed = tx.execute(
            "DELETE FROM extractions WHERE region = ? AND window_start = ?",
            params![key.region.as_str(), key.window_start],
        )?;
        tx.commit()?;

        debug!("Invalidated cache for {} since {}", key.region, key.window_start);
        Ok(removed > 0)
    }

    pub fn clear(&mut self) -> Result<()> {
        self.conn
            .execute_batch("DELETE FROM observations; DELETE FROM extractions;")?;
        Ok(())
    }
}

fn parse_category(label: &str) -> Option<CommitterCategory> {
    match label {
        "Scraper" => Some(CommitterCategory::Scraper),
        "Other" => Some(CommitterCategory::Other),
        _ => None,
    }
}
