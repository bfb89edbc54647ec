//! State-database reads: the classified history list and the raw dump.

use anyhow::{Context, Result};
use serde_json::Value;
use sqlx::Row;
use std::collections::HashSet;
use std::path::Path;

use super::db::StateDb;
use super::types::HistoryList;
use crate::classify::{classify, Entry};

/// ItemTable key holding the recently-opened workspace list.
const HISTORY_KEY: &str = "history.recentlyOpenedPathsList";

impl StateDb {
    /// Loads the recently-opened list, classified and deduplicated by URI
    /// (first occurrence wins, order preserved).
    pub async fn load_recent(&self, home: &Path) -> Result<Vec<Entry>> {
        let row = sqlx::query("SELECT value FROM ItemTable WHERE key = ?1")
            .bind(HISTORY_KEY)
            .fetch_optional(&self.pool)
            .await?;
        let Some(row) = row else {
            anyhow::bail!("state database has no {HISTORY_KEY} entry");
        };
        let value: Vec<u8> = row.get("value");
        let list: HistoryList = serde_json::from_slice(&value)
            .with_context(|| format!("parse {HISTORY_KEY}"))?;

        let mut seen = HashSet::new();
        let mut out = Vec::new();
        for history_entry in list.entries {
            let Some((uri, kind)) = history_entry.uri_and_kind() else {
                continue;
            };
            if !seen.insert(uri.to_string()) {
                continue;
            }
            out.push(classify(uri, kind, home)?);
        }
        Ok(out)
    }

    /// Dumps every ItemTable row as one JSON object. Values that parse as
    /// JSON are embedded as such; everything else stays a string.
    pub async fn dump_all(&self) -> Result<serde_json::Map<String, Value>> {
        let rows = sqlx::query("SELECT key, value FROM ItemTable")
            .fetch_all(&self.pool)
            .await?;

        let mut out = serde_json::Map::new();
        for row in rows {
            let key: String = row.get("key");
            let value: Vec<u8> = row.get("value");
            let parsed = serde_json::from_slice::<Value>(&value)
                .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&value).into_owned()));
            out.insert(key, parsed);
        }
        Ok(out)
    }
}
