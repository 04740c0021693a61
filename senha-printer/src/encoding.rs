//! Windows-1252 encoding utilities for Latin thermal printers
//!
//! The ticket text is Brazilian Portuguese, so printers are driven on the
//! WPC1252 code page (ESC t 16). This module provides utilities for:
//! - Calculating printed widths (1252 is single-byte, accents included)
//! - Truncating/padding strings to printed widths
//! - Converting UTF-8 to Windows-1252 while preserving ESC/POS commands

use tracing::instrument;

/// ESC t 16 - select the WPC1252 code page
const SELECT_CP1252: [u8; 3] = [0x1B, 0x74, 0x10];

/// Get the printed byte width of a string on the 1252 code page
///
/// Every encodable character (including accented Latin) is 1 byte.
pub fn latin_width(s: &str) -> usize {
    let (cow, _, _) = encoding_rs::WINDOWS_1252.encode(s);
    cow.len()
}

/// Truncate a string to fit within a printed width
pub fn truncate_latin(s: &str, max_width: usize) -> String {
    let mut width = 0;
    let mut result = String::new();
    for c in s.chars() {
        let s_char = c.to_string();
        let (cow, _, _) = encoding_rs::WINDOWS_1252.encode(&s_char);
        let char_len = cow.len();

        if width + char_len > max_width {
            break;
        }
        result.push(c);
        width += char_len;
    }
    result
}

/// Pad a string to a specific printed width
///
/// If the string is longer than the width, it will be truncated.
pub fn pad_latin(s: &str, width: usize, align_right: bool) -> String {
    let current_width = latin_width(s);
    if current_width >= width {
        return truncate_latin(s, width);
    }
    let spaces = width - current_width;
    if align_right {
        format!("{}{}", " ".repeat(spaces), s)
    } else {
        format!("{}{}", s, " ".repeat(spaces))
    }
}

/// Convert mixed UTF-8 content (with ESC/POS commands) to Windows-1252
///
/// This function preserves ASCII bytes (0x00-0x7F) exactly as is,
/// which protects ESC/POS commands from being corrupted.
/// Only bytes >= 0x80 are treated as UTF-8 sequences and converted.
///
/// Also re-selects the code page after an INIT command (ESC @), which
/// resets the printer to its default character table.
#[instrument(skip(bytes))]
pub fn convert_to_cp1252(bytes: &[u8]) -> Vec<u8> {
    let mut result = Vec::with_capacity(bytes.len() + 16);

    // Select WPC1252 at the start
    result.extend_from_slice(&SELECT_CP1252);

    let mut buffer = Vec::new();
    let mut i = 0;

    while i < bytes.len() {
        let b = bytes[i];

        // Check for INIT command (ESC @ = 0x1B 0x40)
        // INIT resets the character table, so the code page must be re-selected
        if b == 0x1B && i + 1 < bytes.len() && bytes[i + 1] == 0x40 {
            flush_buffer(&mut buffer, &mut result);

            result.push(0x1B);
            result.push(0x40);
            result.extend_from_slice(&SELECT_CP1252);

            i += 2;
            continue;
        }

        if b < 128 {
            // ASCII byte (command or ASCII text)
            flush_buffer(&mut buffer, &mut result);
            result.push(b);
        } else {
            // Non-ASCII byte (part of a UTF-8 sequence)
            buffer.push(b);
        }
        i += 1;
    }

    flush_buffer(&mut buffer, &mut result);

    result
}

/// Flush the non-ASCII buffer, converting UTF-8 to Windows-1252
fn flush_buffer(buffer: &mut Vec<u8>, result: &mut Vec<u8>) {
    if buffer.is_empty() {
        return;
    }

    let s = String::from_utf8_lossy(buffer);
    let (encoded, _, _) = encoding_rs::WINDOWS_1252.encode(&s);
    result.extend_from_slice(&encoded);
    buffer.clear();
}
