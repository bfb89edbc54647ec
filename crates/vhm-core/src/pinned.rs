//! Pinned-entry persistence: a small JSON file owned by vhm.
//!
//! A missing or undecodable file means "no pinned entries"; pin and unpin
//! rewrite the whole list. Write failures are surfaced (a lost pin is worth
//! knowing about), read failures are not.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::classify::Entry;

/// On-disk shape: one top-level field holding the ordered entry list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PinnedList {
    #[serde(default)]
    pub pinned: Vec<Entry>,
}

impl PinnedList {
    /// Loads the pinned list; storage problems yield an empty list.
    pub fn load(path: &Path) -> Self {
        let bytes = match std::fs::read(path) {
            Ok(bytes) => bytes,
            Err(e) => {
                if e.kind() != std::io::ErrorKind::NotFound {
                    tracing::warn!("read pinned list {}: {}", path.display(), e);
                }
                return Self::default();
            }
        };
        match serde_json::from_slice(&bytes) {
            Ok(list) => list,
            Err(e) => {
                tracing::warn!("parse pinned list {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Saves the list as pretty JSON, creating parent directories.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create dir: {}", parent.display()))?;
        }
        let json = serde_json::to_string_pretty(self).context("serialize pinned list")?;
        std::fs::write(path, json)
            .with_context(|| format!("write pinned list: {}", path.display()))?;
        Ok(())
    }

    pub fn contains(&self, uri: &str) -> bool {
        self.pinned.iter().any(|entry| entry.uri == uri)
    }
}

/// Appends `entry` unless its URI is already pinned. Returns whether the
/// list changed.
pub fn pin(path: &Path, entry: Entry) -> Result<bool> {
    let mut list = PinnedList::load(path);
    if list.contains(&entry.uri) {
        return Ok(false);
    }
    list.pinned.push(entry);
    list.save(path)?;
    Ok(true)
}

/// Removes the entry with `uri`, preserving the order of the rest. Returns
/// whether the list changed.
pub fn unpin(path: &Path, uri: &str) -> Result<bool> {
    let mut list = PinnedList::load(path);
    let before = list.pinned.len();
    list.pinned.retain(|entry| entry.uri != uri);
    if list.pinned.len() == before {
        return Ok(false);
    }
    list.save(path)?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::{classify, EntryKind};
    use std::path::PathBuf;

    fn entry(uri: &str) -> Entry {
        classify(uri, EntryKind::Folder, Path::new("/Users/me")).unwrap()
    }

    fn pin_path(dir: &tempfile::TempDir) -> PathBuf {
        dir.path().join("state/pinned.json")
    }

    #[test]
    fn missing_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        assert!(PinnedList::load(&pin_path(&dir)).pinned.is_empty());
    }

    #[test]
    fn garbage_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pinned.json");
        std::fs::write(&path, "{ not json").unwrap();
        assert!(PinnedList::load(&path).pinned.is_empty());
    }

    #[test]
    fn pin_then_unpin_restores_prior_contents() {
        let dir = tempfile::tempdir().unwrap();
        let path = pin_path(&dir);
        assert!(pin(&path, entry("file:///Users/me/a")).unwrap());
        assert!(pin(&path, entry("file:///Users/me/b")).unwrap());
        let before = PinnedList::load(&path);

        assert!(pin(&path, entry("file:///Users/me/c")).unwrap());
        assert!(unpin(&path, "file:///Users/me/c").unwrap());

        let after = PinnedList::load(&path);
        assert_eq!(after.pinned, before.pinned);
        assert_eq!(
            after
                .pinned
                .iter()
                .map(|e| e.uri.as_str())
                .collect::<Vec<_>>(),
            vec!["file:///Users/me/a", "file:///Users/me/b"]
        );
    }

    #[test]
    fn pin_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let path = pin_path(&dir);
        assert!(pin(&path, entry("file:///Users/me/a")).unwrap());
        assert!(!pin(&path, entry("file:///Users/me/a")).unwrap());
        assert_eq!(PinnedList::load(&path).pinned.len(), 1);
    }

    #[test]
    fn unpin_unknown_uri_changes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let path = pin_path(&dir);
        assert!(pin(&path, entry("file:///Users/me/a")).unwrap());
        assert!(!unpin(&path, "file:///Users/me/zzz").unwrap());
        assert_eq!(PinnedList::load(&path).pinned.len(), 1);
    }

    #[test]
    fn entries_roundtrip_through_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = pin_path(&dir);
        let original = entry("vscode-remote://ssh-remote%2Bmyhost/srv/app");
        pin(&path, original.clone()).unwrap();
        let loaded = PinnedList::load(&path);
        assert_eq!(loaded.pinned, vec![original]);
    }
}
