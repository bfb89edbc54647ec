//! `vhm export-recent` – classified recent entries as JSON in a new editor
//! window.

use anyhow::Result;
use serde_json::json;
use vhm_core::config::Locations;
use vhm_core::state_db::StateDb;

use super::open_in_editor;

pub async fn run_export_recent(loc: &Locations) -> Result<()> {
    let db = StateDb::open_read_only(&loc.state_db).await?;
    let recent = db.load_recent(&loc.home).await?;
    let export = json!({ "recent": recent });
    let json = serde_json::to_string_pretty(&export)?;
    open_in_editor(&loc.code_bin, &json)
}
