//! Serde shapes for the recently-opened history JSON.

use serde::Deserialize;

use crate::classify::EntryKind;

/// Value of the `history.recentlyOpenedPathsList` ItemTable row.
#[derive(Debug, Deserialize)]
pub struct HistoryList {
    #[serde(default)]
    pub entries: Vec<HistoryEntry>,
}

/// One history entry. The editor sets exactly one of the URI carriers.
#[derive(Debug, Deserialize)]
pub struct HistoryEntry {
    #[serde(default, rename = "folderUri")]
    pub folder_uri: Option<String>,
    #[serde(default, rename = "fileUri")]
    pub file_uri: Option<String>,
    #[serde(default)]
    pub workspace: Option<WorkspaceRef>,
}

/// Multi-root workspace reference inside a history entry.
#[derive(Debug, Deserialize)]
pub struct WorkspaceRef {
    #[serde(default, rename = "configPath")]
    pub config_path: Option<String>,
}

impl HistoryEntry {
    /// URI and caller-known kind, or `None` for entries vhm cannot open
    /// (no URI at all, or a workspace without a config path).
    pub fn uri_and_kind(&self) -> Option<(&str, EntryKind)> {
        if let Some(uri) = self.folder_uri.as_deref() {
            return Some((uri, EntryKind::Folder));
        }
        if let Some(uri) = self.file_uri.as_deref() {
            return Some((uri, EntryKind::File));
        }
        if let Some(workspace) = &self.workspace {
            if let Some(uri) = workspace.config_path.as_deref() {
                return Some((uri, EntryKind::Workspace));
            }
        }
        None
    }
}
