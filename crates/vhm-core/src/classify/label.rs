//! Label synthesis: per-mode display labels and icons for remote entries.

use serde_json::Value;
use std::path::Path;

use super::scheme::unexpand_home;
use super::{ClassifyError, Descriptor, Entry, EntryIcon, IconBase, SchemeClass};

const MODE_DEV_CONTAINER: &str = "dev-container";
const MODE_ATTACHED_CONTAINER: &str = "attached-container";
const MODE_SSH_REMOTE: &str = "ssh-remote";

/// Hosts on a local daemon socket are not worth naming in the label.
const UNIX_SOCKET_PREFIX: &str = "unix://";
const SSH_HOST_PREFIX: &str = "ssh://";

/// Fills in scheme class, icon and label for a decoded remote entry.
///
/// Unrecognized modes keep the raw-URI label and unknown icon from the
/// dispatch fallback. Recognized container modes are strict about their
/// identifying field: a structured descriptor without it is an error.
pub(super) fn synthesize(
    entry: &mut Entry,
    mode: &str,
    folder: &str,
    desc: &Descriptor,
    home: &Path,
) -> Result<(), ClassifyError> {
    match mode {
        MODE_DEV_CONTAINER => {
            entry.scheme = SchemeClass::DevContainer;
            let mut icon = EntryIcon::base(IconBase::DevContainer);
            let mut host_path = match desc {
                Descriptor::Structured { fields, .. } => {
                    let path = str_field(fields, "hostPath")
                        .ok_or_else(|| missing(mode, "hostPath"))?;
                    unexpand_home(path, home)
                }
                _ => unexpand_home(desc.text(), home),
            };
            append_host(&mut host_path, &mut icon, desc);
            entry.icon = icon;
            entry.label = format!("[DevContainer {host_path}] {folder}");
        }
        MODE_ATTACHED_CONTAINER => {
            entry.scheme = SchemeClass::AttachedContainer;
            let mut icon = EntryIcon::base(IconBase::Container);
            let mut container = match desc {
                Descriptor::Structured { fields, .. } => {
                    let name = str_field(fields, "containerName")
                        .ok_or_else(|| missing(mode, "containerName"))?;
                    strip_name_separator(name)
                }
                _ => desc.text().to_string(),
            };
            append_host(&mut container, &mut icon, desc);
            entry.icon = icon;
            entry.label = format!("[Container {container}] {folder}");
        }
        MODE_SSH_REMOTE => {
            entry.scheme = SchemeClass::SshRemote;
            entry.icon = EntryIcon::base(IconBase::Ssh);
            entry.label = format!("[SSH {}] {}", desc.text(), folder);
        }
        _ => {}
    }
    Ok(())
}

/// Appends ` @ {host}` for a named `settings.host`, and flips the SSH
/// overlay for `ssh://` hosts.
fn append_host(target: &mut String, icon: &mut EntryIcon, desc: &Descriptor) {
    let Some(host) = settings_host(desc) else {
        return;
    };
    if host.starts_with(UNIX_SOCKET_PREFIX) {
        return;
    }
    target.push_str(" @ ");
    target.push_str(host);
    if host.starts_with(SSH_HOST_PREFIX) {
        icon.ssh_overlay = true;
    }
}

/// `settings.host` when present and a string.
fn settings_host(desc: &Descriptor) -> Option<&str> {
    match desc {
        Descriptor::Structured { fields, .. } => fields
            .get("settings")
            .and_then(Value::as_object)
            .and_then(|settings| settings.get("host"))
            .and_then(Value::as_str),
        _ => None,
    }
}

fn str_field<'a>(fields: &'a serde_json::Map<String, Value>, name: &str) -> Option<&'a str> {
    fields.get(name).and_then(Value::as_str)
}

/// Container names come from the engine with a leading separator; drop it.
fn strip_name_separator(name: &str) -> String {
    let mut chars = name.chars();
    chars.next();
    chars.as_str().to_string()
}

fn missing(mode: &str, field: &'static str) -> ClassifyError {
    ClassifyError::MissingField {
        mode: mode.to_string(),
        field,
    }
}
