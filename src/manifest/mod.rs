//! Info.plist loading and `CFBundleExecutable` extraction.
//!
//! Two manifest encodings are understood:
//! - XML (and anything else that is text): a tolerant scan for the single
//!   key of interest, with XML comments removed first so commented-out keys
//!   never match.
//! - Binary property lists (`bplist00`): parsed structurally with `plist`.

use regex::Regex;
use std::borrow::Cow;
use std::io;
use std::path::Path;
use std::sync::LazyLock;

/// Manifest key naming the bundle's main executable
pub const EXECUTABLE_KEY: &str = "CFBundleExecutable";

/// Header shared by every binary property list version
const BINARY_PLIST_HEADER: &[u8] = b"bplist";

// Truncated manifests may end inside a comment, which then runs to the end.
static XML_COMMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)<!--.*?(?:-->|\z)").expect("comment pattern is valid")
});

// The value is captured verbatim: no entity decoding, no trimming.
static EXECUTABLE_ENTRY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<key>CFBundleExecutable</key>\s*(?:<string>([^<]*)</string>|<string\s*/>)")
        .expect("executable pattern is valid")
});

/// Loads a bundle manifest as raw bytes.
///
/// The handle is opened, fully consumed and closed inside this call.
pub fn read_manifest(path: &Path) -> io::Result<Vec<u8>> {
    std::fs::read(path)
}

/// Returns the executable declared under `CFBundleExecutable`.
///
/// `None` when the key is absent, the value is not a string, or the value
/// is empty. If the key occurs more than once the first string-typed entry
/// in document order wins.
pub fn executable_name(content: &[u8]) -> Option<String> {
    if content.starts_with(BINARY_PLIST_HEADER) {
        return binary_executable_name(content);
    }

    let text = String::from_utf8_lossy(content);
    xml_executable_name(&text)
}

/// Tolerant scan over XML manifest text.
fn xml_executable_name(text: &str) -> Option<String> {
    let text: Cow<'_, str> = if text.contains("<!--") {
        XML_COMMENT.replace_all(text, "")
    } else {
        Cow::Borrowed(text)
    };

    EXECUTABLE_ENTRY
        .captures(&text)
        .and_then(|caps| caps.get(1))
        .map(|value| value.as_str())
        .filter(|value| !value.is_empty())
        .map(String::from)
}

/// Structured lookup in a binary property list.
fn binary_executable_name(content: &[u8]) -> Option<String> {
    let value = match plist::Value::from_reader(io::Cursor::new(content)) {
        Ok(value) => value,
        Err(e) => {
            log::debug!("Failed to parse binary plist: {}", e);
            return None;
        }
    };

    value
        .as_dictionary()
        .and_then(|dict| dict.get(EXECUTABLE_KEY))
        .and_then(|v| v.as_string())
        .filter(|name| !name.is_empty())
        .map(String::from)
}
