//! CLI for the vhm status-bar menu.

mod commands;
mod logo;
mod xbar;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use vhm_core::classify::EntryKind;
use vhm_core::config::{self, Locations};

use commands::{run_dump_state, run_export_recent, run_menu, run_pin, run_unpin};

/// Top-level CLI. Without a subcommand, renders the xbar menu to stdout.
#[derive(Debug, Parser)]
#[command(name = "vhm")]
#[command(about = "vhm: VSCode workspace history as an xbar menu", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Pin an entry so it stays at the top of the menu.
    Pin {
        /// Location URI exactly as shown in the entry's metadata.
        uri: String,
        /// Entry kind: folder, file or workspace.
        kind: String,
    },

    /// Unpin a previously pinned entry.
    Unpin {
        /// Location URI of the pinned entry.
        uri: String,
    },

    /// Dump the editor's raw state database as JSON into a new editor window.
    DumpState,

    /// Export classified recent entries as JSON into a new editor window.
    ExportRecent,
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);
        let loc = Locations::resolve(&cfg)?;

        match cli.command {
            None => run_menu(&cfg, &loc).await?,
            Some(CliCommand::Pin { uri, kind }) => {
                let Some(kind) = EntryKind::from_str(&kind) else {
                    bail!("unknown entry kind: {kind} (expected folder, file or workspace)");
                };
                run_pin(&loc, &uri, kind)?;
            }
            Some(CliCommand::Unpin { uri }) => run_unpin(&loc, &uri)?,
            Some(CliCommand::DumpState) => run_dump_state(&loc).await?,
            Some(CliCommand::ExportRecent) => run_export_recent(&loc).await?,
        }

        Ok(())
    }
}
