//! `vhm unpin <uri>` – remove an entry from the pinned list.

use anyhow::Result;
use vhm_core::config::Locations;
use vhm_core::pinned;

pub fn run_unpin(loc: &Locations, uri: &str) -> Result<()> {
    if pinned::unpin(&loc.pinned_file, uri)? {
        tracing::info!("unpinned {uri}");
    } else {
        tracing::debug!("not pinned: {uri}");
    }
    Ok(())
}
