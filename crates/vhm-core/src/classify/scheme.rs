//! Scheme dispatch: select the classification rule from the URI prefix.

use std::path::Path;

use super::{descriptor, label, ClassifyError, Entry, EntryIcon, IconBase, SchemeClass};

const LOCAL_SCHEME: &str = "file://";
const REMOTE_SCHEME: &str = "vscode-remote://";

/// Applies the rule matching the URI's scheme prefix to `entry`.
///
/// Unrecognized prefixes leave the entry as built by `classify`: unknown
/// scheme class, raw-URI label, empty metadata. That degradation is the
/// contract, not an error.
pub(super) fn dispatch(entry: &mut Entry, home: &Path) -> Result<(), ClassifyError> {
    let uri = entry.uri.clone();

    if let Some(rest) = uri.strip_prefix(LOCAL_SCHEME) {
        let target = percent_decode(rest);
        entry.scheme = SchemeClass::Local;
        entry.icon = EntryIcon::base(IconBase::Local);
        entry.label = unexpand_home(&target, home);
        entry.metadata.insert("path".to_string(), target);
        return Ok(());
    }

    if let Some(rest) = uri.strip_prefix(REMOTE_SCHEME) {
        if let Some(parts) = descriptor::split_remote(rest) {
            let desc = descriptor::decode(&parts, &mut entry.metadata);
            label::synthesize(entry, parts.mode, parts.folder, &desc, home)?;
        }
        return Ok(());
    }

    Ok(())
}

/// Replaces a leading home-directory prefix with `~`.
pub(super) fn unexpand_home(target: &str, home: &Path) -> String {
    let home = home.to_string_lossy();
    match target.strip_prefix(home.as_ref()) {
        Some(rest) => format!("~{rest}"),
        None => target.to_string(),
    }
}

/// Decodes `%XX` escapes. Invalid escapes are kept verbatim; byte sequences
/// that are not UTF-8 decode to replacement characters.
pub(super) fn percent_decode(input: &str) -> String {
    let bytes = input.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' && i + 2 < bytes.len() {
            if let (Some(high), Some(low)) = (hex_digit(bytes[i + 1]), hex_digit(bytes[i + 2])) {
                out.push(high << 4 | low);
                i += 3;
                continue;
            }
        }
        out.push(bytes[i]);
        i += 1;
    }
    String::from_utf8_lossy(&out).into_owned()
}

fn hex_digit(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}
