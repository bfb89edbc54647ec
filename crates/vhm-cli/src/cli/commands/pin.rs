//! `vhm pin <uri> <kind>` – add an entry to the pinned list.

use anyhow::Result;
use vhm_core::classify::{classify, EntryKind};
use vhm_core::config::Locations;
use vhm_core::pinned;

pub fn run_pin(loc: &Locations, uri: &str, kind: EntryKind) -> Result<()> {
    let entry = classify(uri, kind, &loc.home)?;
    if pinned::pin(&loc.pinned_file, entry)? {
        tracing::info!("pinned {uri}");
    } else {
        tracing::debug!("already pinned: {uri}");
    }
    Ok(())
}
