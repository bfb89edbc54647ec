//! Remote descriptor decode: split the remote-URI remainder and decode the
//! embedded configuration token (hex -> text -> JSON).

use serde_json::Value;
use std::collections::BTreeMap;

use super::flatten::flatten_into;

/// Captured pieces of a remote-URI remainder: `mode%2Btoken[/folder]`.
#[derive(Debug, PartialEq, Eq)]
pub(super) struct RemoteParts<'a> {
    pub mode: &'a str,
    pub config_token: &'a str,
    pub folder: &'a str,
}

/// Splits the remainder after `vscode-remote://` into mode, config token and
/// folder suffix.
///
/// The `+` joining mode and token arrives percent-encoded as `%2B`, and the
/// mode itself contains no `%`; the token runs to the next `/` and the folder
/// keeps its leading `/`. Returns `None` when the remainder does not have
/// this shape.
pub(super) fn split_remote(rest: &str) -> Option<RemoteParts<'_>> {
    let (mode, after) = rest.split_once("%2B")?;
    if mode.is_empty() || mode.contains('%') {
        return None;
    }
    let (config_token, folder) = match after.find('/') {
        Some(i) => (&after[..i], &after[i..]),
        None => (after, ""),
    };
    if config_token.is_empty() {
        return None;
    }
    Some(RemoteParts {
        mode,
        config_token,
        folder,
    })
}

/// Decoded configuration payload embedded in a remote URI's authority.
///
/// The token is sometimes a plain hostname, sometimes hex-encoded text,
/// sometimes hex-encoded JSON. Each decode stage can fail independently and
/// the classifier keeps whatever the last successful stage produced.
#[derive(Debug, Clone, PartialEq)]
pub enum Descriptor {
    /// Token was not valid hex-encoded text; kept verbatim.
    RawToken(String),
    /// Hex-decoded to text, but the text is not a JSON object.
    Decoded(String),
    /// Hex-decoded to a JSON object.
    Structured {
        text: String,
        fields: serde_json::Map<String, Value>,
    },
}

impl Descriptor {
    /// The descriptor as text: the raw token, or the hex-decoded string.
    pub fn text(&self) -> &str {
        match self {
            Descriptor::RawToken(s) | Descriptor::Decoded(s) => s,
            Descriptor::Structured { text, .. } => text,
        }
    }
}

/// Decodes a config token, recording each stage's outcome in `metadata`.
///
/// `mode` and `folder` are always set, and a `config` view of the token is
/// always present: the raw token, the hex-decoded text, or (for JSON
/// objects) one `config.`-prefixed key per flattened leaf with the plain
/// `config` key removed.
pub(super) fn decode(parts: &RemoteParts<'_>, metadata: &mut BTreeMap<String, String>) -> Descriptor {
    metadata.insert("mode".to_string(), parts.mode.to_string());
    metadata.insert("folder".to_string(), parts.folder.to_string());
    metadata.insert("config".to_string(), parts.config_token.to_string());

    let decoded = hex::decode(parts.config_token)
        .ok()
        .and_then(|bytes| String::from_utf8(bytes).ok());
    let text = match decoded {
        Some(text) => text,
        None => return Descriptor::RawToken(parts.config_token.to_string()),
    };
    metadata.insert("config".to_string(), text.clone());

    match serde_json::from_str::<Value>(&text) {
        Ok(Value::Object(fields)) => {
            metadata.remove("config");
            flatten_into("config", &Value::Object(fields.clone()), metadata);
            Descriptor::Structured { text, fields }
        }
        _ => Descriptor::Decoded(text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parts<'a>(rest: &'a str) -> RemoteParts<'a> {
        split_remote(rest).expect("remainder should split")
    }

    #[test]
    fn split_mode_token_folder() {
        let p = parts("ssh-remote%2Bmyhost/home/me/app");
        assert_eq!(p.mode, "ssh-remote");
        assert_eq!(p.config_token, "myhost");
        assert_eq!(p.folder, "/home/me/app");
    }

    #[test]
    fn split_without_folder() {
        let p = parts("ssh-remote%2Bmyhost");
        assert_eq!(p.config_token, "myhost");
        assert_eq!(p.folder, "");
    }

    #[test]
    fn split_rejects_missing_marker_or_empty_pieces() {
        assert!(split_remote("ssh-remote+myhost/x").is_none());
        assert!(split_remote("%2Bmyhost/x").is_none());
        assert!(split_remote("ssh-remote%2B/x").is_none());
        assert!(split_remote("a%41b%2Bhost/x").is_none());
    }

    #[test]
    fn token_may_contain_further_escapes() {
        let p = parts("mode%2Ba%2Bb");
        assert_eq!(p.mode, "mode");
        assert_eq!(p.config_token, "a%2Bb");
    }

    #[test]
    fn decode_raw_token_when_not_hex() {
        let mut md = BTreeMap::new();
        let desc = decode(&parts("ssh-remote%2Bmyhost/x"), &mut md);
        assert_eq!(desc, Descriptor::RawToken("myhost".to_string()));
        assert_eq!(md.get("config").map(String::as_str), Some("myhost"));
        assert_eq!(md.get("mode").map(String::as_str), Some("ssh-remote"));
        assert_eq!(md.get("folder").map(String::as_str), Some("/x"));
    }

    #[test]
    fn decode_hex_text_that_is_not_json() {
        let token = hex::encode("plain text host");
        let rest = format!("dev-container%2B{token}/x");
        let mut md = BTreeMap::new();
        let desc = decode(&parts(&rest), &mut md);
        assert_eq!(desc, Descriptor::Decoded("plain text host".to_string()));
        assert_eq!(md.get("config").map(String::as_str), Some("plain text host"));
    }

    #[test]
    fn decode_hex_json_scalar_stays_decoded() {
        let token = hex::encode("42");
        let rest = format!("dev-container%2B{token}/x");
        let mut md = BTreeMap::new();
        let desc = decode(&parts(&rest), &mut md);
        assert_eq!(desc, Descriptor::Decoded("42".to_string()));
        assert_eq!(md.get("config").map(String::as_str), Some("42"));
    }

    #[test]
    fn decode_hex_json_object_flattens_under_config_prefix() {
        let token = hex::encode(r#"{"hostPath":"/srv","settings":{"host":"tcp://h:1"}}"#);
        let rest = format!("dev-container%2B{token}/x");
        let mut md = BTreeMap::new();
        let desc = decode(&parts(&rest), &mut md);
        assert!(matches!(desc, Descriptor::Structured { .. }));
        assert!(!md.contains_key("config"));
        assert_eq!(md.get("config.hostPath").map(String::as_str), Some("/srv"));
        assert_eq!(
            md.get("config.settings.host").map(String::as_str),
            Some("tcp://h:1")
        );
    }

    #[test]
    fn decode_invalid_utf8_hex_stays_raw() {
        // 0xff 0xfe is valid hex but not UTF-8 text.
        let mut md = BTreeMap::new();
        let desc = decode(&parts("mode%2Bfffe/x"), &mut md);
        assert_eq!(desc, Descriptor::RawToken("fffe".to_string()));
        assert_eq!(md.get("config").map(String::as_str), Some("fffe"));
    }
}
