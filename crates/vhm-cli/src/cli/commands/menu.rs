//! Default command: render the whole xbar menu to stdout.
//!
//! Menu shape, top to bottom: menubar logo, pinned entries, recent entries
//! with an Advanced submenu, currently opened windows. Every entry carries a
//! pin/unpin action and a metadata submenu with copyable values.

use anyhow::{Context, Result};
use std::path::Path;

use vhm_core::classify::{Entry, EntryKind};
use vhm_core::config::{Locations, VhmConfig};
use vhm_core::pinned::PinnedList;
use vhm_core::state_db::StateDb;
use vhm_core::window_state::{self, OpenWindow};

use crate::cli::logo::{LOGO_INSIDERS, LOGO_STABLE};
use crate::cli::xbar::{MenuLine, SEPARATOR};

const ICON_PIN: &str = "\u{1F4CC}";
const ICON_METADATA: &str = "\u{2139}\u{FE0F}";
const ICON_WORKSPACE: &str = "\u{1F3E2}";
const ICON_FOLDER: &str = "\u{1F4C2}";
const ICON_FILE: &str = "\u{1F4C4}";
const ICON_EDIT_PINNED: &str = "\u{2699}\u{FE0F}";
const ICON_RECENT: &str = "\u{1F516}";
const ICON_ADVANCED: &str = "\u{1F527}";
const ICON_OPENED: &str = "\u{1F525}";
const ICON_NEW_WINDOW: &str = "\u{2795}";
const ICON_ACTIVE_WINDOW: &str = "\u{1F7E2}";
const ICON_INACTIVE_WINDOW: &str = "\u{26AA}";

pub async fn run_menu(cfg: &VhmConfig, loc: &Locations) -> Result<()> {
    let db = StateDb::open_read_only(&loc.state_db).await?;
    let recent = db.load_recent(&loc.home).await?;
    let pinned = PinnedList::load(&loc.pinned_file);
    let windows = window_state::load_windows(&loc.window_state, &loc.home)?;
    let exe = std::env::current_exe().context("resolve current executable")?;

    let menu = render_menu(cfg, loc, &exe, &pinned.pinned, &recent, &windows);
    print!("{menu}");
    Ok(())
}

/// Everything line rendering needs, in display form.
struct MenuCtx<'a> {
    shell: &'a str,
    max_label_length: usize,
    code_bin: String,
    exe: String,
}

/// Pure assembly of the full menu text; separated from `run_menu` so tests
/// can feed it fixture data.
fn render_menu(
    cfg: &VhmConfig,
    loc: &Locations,
    exe: &Path,
    pinned: &[Entry],
    recent: &[Entry],
    windows: &[OpenWindow],
) -> String {
    let ctx = MenuCtx {
        shell: &cfg.shell,
        max_label_length: cfg.max_label_length,
        code_bin: loc.code_bin.display().to_string(),
        exe: exe.display().to_string(),
    };
    let logo = if cfg.insiders {
        LOGO_INSIDERS
    } else {
        LOGO_STABLE
    };

    let mut out = String::new();

    // Menubar icon.
    push(&mut out, MenuLine::new("").image(logo));
    push_raw(&mut out, SEPARATOR);

    // Pinned entries stay above the fold.
    push(&mut out, MenuLine::new("Pinned").icon(ICON_PIN));
    push_categorized(&mut out, &ctx, pinned, true);
    push(
        &mut out,
        MenuLine::new("Edit")
            .icon(ICON_EDIT_PINNED)
            .refresh()
            .command(
                ctx.shell,
                format!(
                    "'{}' -n --wait '{}'",
                    ctx.code_bin,
                    loc.pinned_file.display()
                ),
            ),
    );
    push_raw(&mut out, SEPARATOR);

    // Recently opened.
    push(&mut out, MenuLine::new("Recent").icon(ICON_RECENT));
    push_categorized(&mut out, &ctx, recent, false);
    push(&mut out, MenuLine::new("Advanced").icon(ICON_ADVANCED));
    push(
        &mut out,
        MenuLine::new("Export entries")
            .depth(1)
            .command(ctx.shell, format!("'{}' export-recent", ctx.exe)),
    );
    push(
        &mut out,
        MenuLine::new("Dump state database")
            .depth(1)
            .command(ctx.shell, format!("'{}' dump-state", ctx.exe)),
    );
    push(
        &mut out,
        MenuLine::new("Open global storage directory")
            .depth(1)
            .command(
                ctx.shell,
                format!("open '{}'", loc.global_storage_dir.display()),
            ),
    );
    push_raw(&mut out, SEPARATOR);

    // Currently opened windows.
    push(&mut out, MenuLine::new("Opened").icon(ICON_OPENED));
    for window in windows {
        let marker = if window.active {
            ICON_ACTIVE_WINDOW
        } else {
            ICON_INACTIVE_WINDOW
        };
        push_entry(&mut out, &ctx, &window.entry, false, Some(marker));
    }
    push(
        &mut out,
        MenuLine::new("New")
            .icon(ICON_NEW_WINDOW)
            .command(ctx.shell, format!("'{}' -n", ctx.code_bin)),
    );

    out
}

/// Entries grouped by kind, with a group header only when non-empty.
fn push_categorized(out: &mut String, ctx: &MenuCtx<'_>, entries: &[Entry], pinned: bool) {
    let groups = [
        ("Workspaces", ICON_WORKSPACE, EntryKind::Workspace),
        ("Folders", ICON_FOLDER, EntryKind::Folder),
        ("Files", ICON_FILE, EntryKind::File),
    ];
    for (title, icon, kind) in groups {
        let group: Vec<&Entry> = entries.iter().filter(|e| e.kind == kind).collect();
        if group.is_empty() {
            continue;
        }
        push(out, MenuLine::new(title).icon(icon));
        for entry in group {
            push_entry(out, ctx, entry, pinned, None);
        }
    }
}

/// One entry: open action, pin/unpin submenu, metadata submenu.
fn push_entry(
    out: &mut String,
    ctx: &MenuCtx<'_>,
    entry: &Entry,
    pinned: bool,
    marker: Option<&str>,
) {
    let mut icon = entry.icon.render();
    if let Some(marker) = marker {
        icon = format!("{marker}{icon}");
    }
    push(
        out,
        MenuLine::new(&entry.label)
            .icon(icon)
            .depth(1)
            .length(ctx.max_label_length)
            .command(
                ctx.shell,
                format!("'{}' --folder-uri '{}'", ctx.code_bin, entry.uri),
            ),
    );

    if pinned {
        push(
            out,
            MenuLine::new("Unpin")
                .icon(ICON_PIN)
                .depth(2)
                .refresh()
                .command(ctx.shell, format!("'{}' unpin '{}'", ctx.exe, entry.uri)),
        );
    } else {
        push(
            out,
            MenuLine::new("Pin")
                .icon(ICON_PIN)
                .depth(2)
                .refresh()
                .command(
                    ctx.shell,
                    format!(
                        "'{}' pin '{}' '{}'",
                        ctx.exe,
                        entry.uri,
                        entry.kind.as_str()
                    ),
                ),
        );
    }

    push(out, MenuLine::new("Metadata").icon(ICON_METADATA).depth(2));
    for (key, value) in &entry.metadata {
        push_metadata(out, ctx, key, value);
    }
    // The URI itself is copyable like the rest of the metadata.
    push_metadata(out, ctx, "uri", &entry.uri);
}

fn push_metadata(out: &mut String, ctx: &MenuCtx<'_>, key: &str, value: &str) {
    push(
        out,
        MenuLine::new(format!("{key}: {value}"))
            .depth(3)
            .command(ctx.shell, format!("printf '%s' '{value}' | pbcopy")),
    );
}

fn push(out: &mut String, line: MenuLine) {
    out.push_str(&line.render());
    out.push('\n');
}

fn push_raw(out: &mut String, line: &str) {
    out.push_str(line);
    out.push('\n');
}
