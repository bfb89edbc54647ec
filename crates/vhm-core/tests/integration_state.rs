//! End-to-end test against a real on-disk fixture: a state database file,
//! a window-state file and a pinned list in a temp directory.

use serde_json::json;
use sqlx::sqlite::SqlitePoolOptions;
use std::path::Path;

use vhm_core::classify::{EntryKind, SchemeClass};
use vhm_core::pinned::{self, PinnedList};
use vhm_core::state_db::StateDb;
use vhm_core::window_state;

const HOME: &str = "/Users/me";

async fn write_fixture_db(path: &Path, history: &serde_json::Value) {
    let uri = format!("sqlite://{}?mode=rwc", path.display());
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect(&uri)
        .await
        .unwrap();
    sqlx::query("CREATE TABLE ItemTable (key TEXT UNIQUE ON CONFLICT REPLACE, value BLOB)")
        .execute(&pool)
        .await
        .unwrap();
    sqlx::query("INSERT INTO ItemTable (key, value) VALUES (?1, ?2)")
        .bind("history.recentlyOpenedPathsList")
        .bind(history.to_string().into_bytes())
        .execute(&pool)
        .await
        .unwrap();
    pool.close().await;
}

#[tokio::test]
async fn history_windows_and_pins_from_fixture_files() {
    let dir = tempfile::tempdir().unwrap();
    let home = Path::new(HOME);

    // History database with a local folder, an SSH remote and a file.
    let db_path = dir.path().join("state.vscdb");
    let history = json!({
        "entries": [
            { "folderUri": "file:///Users/me/proj" },
            { "folderUri": "vscode-remote://ssh-remote%2Bmyhost/home/me/app" },
            { "fileUri": "file:///Users/me/notes.txt" }
        ]
    });
    write_fixture_db(&db_path, &history).await;

    let db = StateDb::open_read_only(&db_path).await.unwrap();
    let recent = db.load_recent(home).await.unwrap();
    assert_eq!(recent.len(), 3);
    assert_eq!(recent[0].label, "~/proj");
    assert_eq!(recent[1].scheme, SchemeClass::SshRemote);
    assert_eq!(recent[1].label, "[SSH myhost] /home/me/app");
    assert_eq!(recent[2].kind, EntryKind::File);

    // Window state referencing one of the history folders.
    let storage_path = dir.path().join("storage.json");
    std::fs::write(
        &storage_path,
        json!({
            "windowsState": {
                "lastActiveWindow": { "folder": "file:///Users/me/proj" },
                "openedWindows": [
                    { "folder": "vscode-remote://ssh-remote%2Bmyhost/home/me/app" }
                ]
            }
        })
        .to_string(),
    )
    .unwrap();
    let windows = window_state::load_windows(&storage_path, home).unwrap();
    assert_eq!(windows.len(), 2);
    assert!(windows[0].active);
    assert_eq!(windows[0].entry.uri, recent[0].uri);

    // Pin the SSH entry, reload, unpin again.
    let pinned_path = dir.path().join("pinned.json");
    assert!(pinned::pin(&pinned_path, recent[1].clone()).unwrap());
    let list = PinnedList::load(&pinned_path);
    assert_eq!(list.pinned.len(), 1);
    assert_eq!(list.pinned[0], recent[1]);
    assert!(pinned::unpin(&pinned_path, &recent[1].uri).unwrap());
    assert!(PinnedList::load(&pinned_path).pinned.is_empty());
}

#[tokio::test]
async fn open_read_only_fails_for_missing_database() {
    let dir = tempfile::tempdir().unwrap();
    assert!(StateDb::open_read_only(&dir.path().join("absent.vscdb"))
        .await
        .is_err());
}
