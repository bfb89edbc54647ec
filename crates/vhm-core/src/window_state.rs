//! Window-state reader: which folders are open in editor windows right now.
//!
//! Parses the `windowsState` section of the editor's `storage.json`.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;

use crate::classify::{classify, Entry, EntryKind};

#[derive(Debug, Deserialize)]
struct StorageJson {
    #[serde(default, rename = "windowsState")]
    windows_state: Option<WindowsState>,
}

#[derive(Debug, Default, Deserialize)]
struct WindowsState {
    #[serde(default, rename = "lastActiveWindow")]
    last_active_window: Option<WindowRef>,
    #[serde(default, rename = "openedWindows")]
    opened_windows: Vec<WindowRef>,
}

/// Windows opened on something other than a folder carry no `folder` field.
#[derive(Debug, Deserialize)]
struct WindowRef {
    #[serde(default)]
    folder: Option<String>,
}

/// An open editor window: the classified folder and whether the window is
/// the last active one.
#[derive(Debug, Clone)]
pub struct OpenWindow {
    pub entry: Entry,
    pub active: bool,
}

/// Loads open windows from `storage.json`: the last active window first,
/// then the remaining opened windows, deduplicated by folder URI.
pub fn load_windows(path: &Path, home: &Path) -> Result<Vec<OpenWindow>> {
    let bytes = std::fs::read(path)
        .with_context(|| format!("read window state: {}", path.display()))?;
    let storage: StorageJson = serde_json::from_slice(&bytes)
        .with_context(|| format!("parse window state: {}", path.display()))?;
    let state = storage.windows_state.unwrap_or_default();

    let mut seen = HashSet::new();
    let mut out = Vec::new();
    if let Some(uri) = state.last_active_window.and_then(|w| w.folder) {
        let entry = classify(&uri, EntryKind::Folder, home)?;
        seen.insert(uri);
        out.push(OpenWindow {
            entry,
            active: true,
        });
    }
    for window in state.opened_windows {
        let Some(uri) = window.folder else {
            continue;
        };
        if seen.contains(&uri) {
            continue;
        }
        let entry = classify(&uri, EntryKind::Folder, home)?;
        seen.insert(uri);
        out.push(OpenWindow {
            entry,
            active: false,
        });
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_storage(json: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();
        file
    }

    fn home() -> &'static Path {
        Path::new("/Users/me")
    }

    #[test]
    fn last_active_window_comes_first_and_is_active() {
        let file = write_storage(
            r#"{
                "windowsState": {
                    "lastActiveWindow": { "folder": "file:///Users/me/active" },
                    "openedWindows": [
                        { "folder": "file:///Users/me/other" },
                        { "folder": "file:///Users/me/active" },
                        { "workspace": "not a folder window" }
                    ]
                }
            }"#,
        );
        let windows = load_windows(file.path(), home()).unwrap();
        assert_eq!(windows.len(), 2);
        assert!(windows[0].active);
        assert_eq!(windows[0].entry.label, "~/active");
        assert!(!windows[1].active);
        assert_eq!(windows[1].entry.label, "~/other");
    }

    #[test]
    fn missing_windows_state_means_no_windows() {
        let file = write_storage(r#"{ "telemetry.machineId": "abc" }"#);
        assert!(load_windows(file.path(), home()).unwrap().is_empty());
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_windows(&dir.path().join("storage.json"), home()).is_err());
    }
}
