/*!
 * File content extraction with encoding fallback
 */

use std::fs;
use std::path::Path;

use tracing::{debug, warn};

/// How a file's text was obtained
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decoding {
    /// Valid UTF-8
    Utf8,
    /// Decoded byte-for-byte as ISO-8859-1
    Latin1,
    /// Reading failed; the text is an error placeholder
    Failed,
}

/// Text extracted from a file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedContent {
    /// Text to place in the report
    pub text: String,
    /// Decoding that produced the text
    pub decoding: Decoding,
}

/// Read a file as text, never failing
///
/// Tries UTF-8 first and falls back to ISO-8859-1, which accepts any byte
/// sequence. I/O failures produce an `Error reading file: ...` placeholder.
pub fn extract_content(path: &Path) -> ExtractedContent {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) => {
            warn!("Failed to read {}: {}", path.display(), e);
            return ExtractedContent {
                text: format!("Error reading file: {}", e),
                decoding: Decoding::Failed,
            };
        }
    };

    let (text, decoding) = decode(bytes);
    if decoding == Decoding::Latin1 {
        debug!("{} is not valid UTF-8, decoded as Latin-1", path.display());
    }

    ExtractedContent {
        text: normalize_newlines(text),
        decoding,
    }
}

/// Convenience wrapper returning only the text
pub fn read_file_content(path: &Path) -> String {
    extract_content(path).text
}

fn decode(bytes: Vec<u8>) -> (String, Decoding) {
    match String::from_utf8(bytes) {
        Ok(text) => (text, Decoding::Utf8),
        Err(e) => (decode_latin1(e.as_bytes()), Decoding::Latin1),
    }
}

/// ISO-8859-1 maps every byte to the code point with the same value
fn decode_latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b)).collect()
}

/// Translate `\r\n` and lone `\r` line endings to `\n`
fn normalize_newlines(text: String) -> String {
    if !text.contains('\r') {
        return text;
    }
    text.replace("\r\n", "\n").replace('\r', "\n")
}
