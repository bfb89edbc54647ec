//! `vhm dump-state` – the raw state database as JSON in a new editor window.

use anyhow::Result;
use vhm_core::config::Locations;
use vhm_core::state_db::StateDb;

use super::open_in_editor;

pub async fn run_dump_state(loc: &Locations) -> Result<()> {
    let db = StateDb::open_read_only(&loc.state_db).await?;
    let dump = db.dump_all().await?;
    let json = serde_json::to_string_pretty(&dump)?;
    open_in_editor(&loc.code_bin, &json)
}
