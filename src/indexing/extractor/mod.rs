pub mod csharp;

use crate::error::{Result, ScriptDocError};
use encoding_rs::{GBK, UTF_8};
use log::{debug, error, trace, warn};
use std::fs;
use std::path::Path;

/// Best-effort declaration scanning for one source language.
pub trait LanguageExtractor {
    /// First declared namespace, if any.
    fn extract_namespace(&self, content: &str) -> Option<String>;
    /// First class, struct or interface name, in that priority order.
    fn extract_type_name(&self, content: &str) -> Option<String>;
}

/// Reads a source file as text.
///
/// Tries plain UTF-8, then UTF-8 with the byte-order mark stripped, then GBK.
/// Line endings are normalized to `\n`. Fails rather than returning lossy text.
pub fn read_source(file_path: &Path) -> Result<String> {
    trace!("Reading source file: {:?}", file_path);

    let bytes = fs::read(file_path).map_err(|e| {
        error!("Failed to read file {:?}: {}", file_path, e);
        ScriptDocError::Read {
            path: file_path.to_path_buf(),
            source: e,
        }
    })?;

    match decode(&bytes) {
        Some(text) => Ok(normalize_newlines(text)),
        None => {
            error!("No supported encoding could decode {:?}", file_path);
            Err(ScriptDocError::Encoding {
                path: file_path.to_path_buf(),
            })
        }
    }
}

fn decode(bytes: &[u8]) -> Option<String> {
    if let Ok(text) = std::str::from_utf8(bytes) {
        return Some(text.to_string());
    }

    debug!("Plain UTF-8 decode failed, retrying with BOM removal");
    let (text, had_errors) = UTF_8.decode_with_bom_removal(bytes);
    if !had_errors {
        return Some(text.into_owned());
    }

    warn!("UTF-8 decode failed, falling back to GBK");
    if !is_two_byte_gbk(bytes) {
        return None;
    }
    GBK.decode_without_bom_handling_and_without_replacement(bytes)
        .map(|text| text.into_owned())
}

/// `encoding_rs::GBK` also accepts the GB18030 extensions: a single-byte `0x80`
/// and four-byte sequences (second byte `0x30..=0x39`). Plain GBK has neither.
fn is_two_byte_gbk(bytes: &[u8]) -> bool {
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            0x00..=0x7F => i += 1,
            0x80 => return false,
            _ => match bytes.get(i + 1) {
                Some(0x30..=0x39) | None => return false,
                Some(_) => i += 2,
            },
        }
    }
    true
}

fn normalize_newlines(text: String) -> String {
    if !text.contains('\r') {
        return text;
    }
    text.replace("\r\n", "\n").replace('\r', "\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn reads_utf8_and_keeps_bom() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("Bom.cs");
        fs::write(&path, b"\xEF\xBB\xBFpublic class Bom {}").unwrap();

        let text = read_source(&path).unwrap();
        assert_eq!(text, "\u{feff}public class Bom {}");
    }

    #[test]
    fn falls_back_to_gbk() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("Gbk.cs");
        // "// 玩家" encoded as GBK
        fs::write(&path, b"// \xCD\xE6\xBC\xD2\npublic class Player {}").unwrap();

        let text = read_source(&path).unwrap();
        assert_eq!(text, "// 玩家\npublic class Player {}");
    }

    #[test]
    fn gb18030_only_sequences_are_rejected() {
        let tmp = TempDir::new().unwrap();
        let euro = tmp.path().join("Euro.cs");
        fs::write(&euro, b"public class Euro {} // \x80").unwrap();
        let four = tmp.path().join("Four.cs");
        fs::write(&four, b"public class Four {} // \x81\x30\x81\x30").unwrap();

        for path in [euro, four] {
            let err = read_source(&path).unwrap_err();
            assert!(matches!(err, ScriptDocError::Encoding { .. }), "{:?}", path);
        }
    }

    #[test]
    fn undecodable_bytes_fail() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("Broken.cs");
        fs::write(&path, b"class A {} \xFF\xFF").unwrap();

        let err = read_source(&path).unwrap_err();
        assert!(matches!(err, ScriptDocError::Encoding { .. }));
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let tmp = TempDir::new().unwrap();
        let err = read_source(&tmp.path().join("Nope.cs")).unwrap_err();
        assert!(matches!(err, ScriptDocError::Read { .. }));
    }

    #[test]
    fn normalizes_line_endings() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("Crlf.cs");
        fs::write(&path, "class A\r\n{\r}\r\n").unwrap();

        assert_eq!(read_source(&path).unwrap(), "class A\n{\n}\n");
    }
}
