//! CLI command handlers, one file per command.

mod dump_state;
mod export_recent;
mod menu;
mod pin;
mod unpin;

pub use dump_state::run_dump_state;
pub use export_recent::run_export_recent;
pub use menu::run_menu;
pub use pin::run_pin;
pub use unpin::run_unpin;

use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;
use std::process::{Command, Stdio};

/// Pipes `content` into a new editor window (`<code> -n -`).
pub(crate) fn open_in_editor(code_bin: &Path, content: &str) -> Result<()> {
    let mut child = Command::new(code_bin)
        .args(["-n", "-"])
        .stdin(Stdio::piped())
        .spawn()
        .with_context(|| format!("spawn editor: {}", code_bin.display()))?;
    child
        .stdin
        .take()
        .context("editor stdin not captured")?
        .write_all(content.as_bytes())?;
    let status = child.wait()?;
    if !status.success() {
        anyhow::bail!("editor exited with {status}");
    }
    Ok(())
}
