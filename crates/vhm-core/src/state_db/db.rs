//! SQLite connection handling for the editor's state database.

use anyhow::{Context, Result};
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::{Pool, Sqlite};
use std::path::Path;

/// Percent-encode a path for use in a sqlite:// URI so spaces and special
/// chars don't break parsing.
fn path_to_sqlite_uri(path: &Path) -> String {
    let s = path.to_string_lossy();
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '%' => out.push_str("%25"),
            ' ' => out.push_str("%20"),
            '#' => out.push_str("%23"),
            '?' => out.push_str("%3F"),
            '&' => out.push_str("%26"),
            c => out.push(c),
        }
    }
    format!("sqlite://{}", out)
}

/// Handle to the editor's state database.
///
/// The file is owned by the editor and opened strictly read-only; a missing
/// or unopenable database is an error for the caller to surface.
#[derive(Clone)]
pub struct StateDb {
    pub(crate) pool: Pool<Sqlite>,
}

impl StateDb {
    /// Open the state database at `path` read-only.
    pub async fn open_read_only(path: &Path) -> Result<Self> {
        let uri = path_to_sqlite_uri(path) + "?mode=ro";
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect(&uri)
            .await
            .with_context(|| format!("open state database: {}", path.display()))?;
        Ok(StateDb { pool })
    }
}

#[cfg(test)]
/// In-memory ItemTable for tests (writable so fixtures can be inserted).
pub(crate) async fn open_memory() -> Result<StateDb> {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await?;
    sqlx::query("CREATE TABLE ItemTable (key TEXT UNIQUE ON CONFLICT REPLACE, value BLOB)")
        .execute(&pool)
        .await?;
    Ok(StateDb { pool })
}
