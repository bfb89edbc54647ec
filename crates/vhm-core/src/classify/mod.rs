//! URI classification and entry normalization.
//!
//! Turns an opaque workspace location URI (local path, SSH remote, container
//! reference) into a structured [`Entry`]: scheme class, icon, display label
//! and key/value metadata. Three stages run in a pipeline: scheme dispatch
//! (`scheme`), remote descriptor decode (`descriptor`) and label synthesis
//! (`label`).

mod descriptor;
mod flatten;
mod label;
mod scheme;

pub use descriptor::Descriptor;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// What the caller knows the location to be. Never inferred from the URI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Folder,
    File,
    Workspace,
}

impl EntryKind {
    pub fn as_str(self) -> &'static str {
        match self {
            EntryKind::Folder => "folder",
            EntryKind::File => "file",
            EntryKind::Workspace => "workspace",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "folder" => Some(EntryKind::Folder),
            "file" => Some(EntryKind::File),
            "workspace" => Some(EntryKind::Workspace),
            _ => None,
        }
    }
}

/// Connection class inferred from the URI scheme (and remote mode).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SchemeClass {
    Local,
    DevContainer,
    AttachedContainer,
    SshRemote,
    Unknown,
}

/// Base symbol for an entry, rendered as an emoji in the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IconBase {
    Unknown,
    Local,
    DevContainer,
    Container,
    Ssh,
}

impl IconBase {
    pub fn glyph(self) -> &'static str {
        match self {
            IconBase::Unknown => "\u{1F984}",      // unicorn
            IconBase::Local => "\u{1F4BB}",        // laptop
            IconBase::DevContainer => "\u{1F4E6}", // package
            IconBase::Container => "\u{1F40B}",    // whale
            IconBase::Ssh => "\u{1F50C}",          // plug
        }
    }
}

/// Entry icon: a base symbol plus an optional SSH transport overlay appended
/// when rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryIcon {
    pub base: IconBase,
    #[serde(default)]
    pub ssh_overlay: bool,
}

impl EntryIcon {
    pub fn base(base: IconBase) -> Self {
        Self {
            base,
            ssh_overlay: false,
        }
    }

    pub fn render(self) -> String {
        if self.ssh_overlay {
            format!("{}{}", self.base.glyph(), IconBase::Ssh.glyph())
        } else {
            self.base.glyph().to_string()
        }
    }
}

/// A classified workspace location, ready for menu rendering or pinning.
///
/// `uri` is the stable identity: two entries with the same URI are the same
/// entry. The metadata map is key-ordered; remote entries always carry at
/// least `mode`, `folder` and a `config` view of the descriptor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    pub uri: String,
    pub kind: EntryKind,
    pub scheme: SchemeClass,
    pub icon: EntryIcon,
    pub label: String,
    #[serde(default)]
    pub metadata: BTreeMap<String, String>,
}

/// Classification failure: a structured remote descriptor was missing a
/// field its mode requires.
///
/// Decode failures never produce this; only label synthesis on a descriptor
/// already confirmed structured is strict, because at that point the data
/// comes from the editor itself and a hole in it is worth surfacing.
#[derive(Debug, thiserror::Error)]
pub enum ClassifyError {
    #[error("descriptor for mode `{mode}` has no usable `{field}` field")]
    MissingField { mode: String, field: &'static str },
}

/// Classifies a location URI into an [`Entry`].
///
/// `kind` is supplied by the caller (the history and window readers know
/// which list an entry came from); `home` is the process-wide home directory
/// used for `~`-relative labels.
///
/// Unknown schemes, non-matching remote remainders and undecodable
/// descriptor tokens all degrade to the best partial entry instead of
/// failing. The only error is [`ClassifyError::MissingField`].
pub fn classify(uri: &str, kind: EntryKind, home: &Path) -> Result<Entry, ClassifyError> {
    let mut entry = Entry {
        uri: uri.to_string(),
        kind,
        scheme: SchemeClass::Unknown,
        icon: EntryIcon::base(IconBase::Unknown),
        label: uri.to_string(),
        metadata: BTreeMap::new(),
    };
    scheme::dispatch(&mut entry, home)?;
    Ok(entry)
}
