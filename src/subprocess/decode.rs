//! Tolerant decoding of captured stream bytes

use crate::config::DecodeMode;
use std::fmt::Write;

/// Decode `bytes` as UTF-8 without ever failing.
pub fn decode(bytes: &[u8], mode: DecodeMode) -> String {
    match mode {
        DecodeMode::Lossy => String::from_utf8_lossy(bytes).into_owned(),
        DecodeMode::Backslash => decode_backslash(bytes),
    }
}

fn decode_backslash(bytes: &[u8]) -> String {
    let mut decoded = String::with_capacity(bytes.len());
    for chunk in bytes.utf8_chunks() {
        decoded.push_str(chunk.valid());
        for byte in chunk.invalid() {
            let _ = write!(decoded, "\\x{byte:02x}");
        }
    }
    decoded
}
