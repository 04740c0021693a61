//! Attendee input normalizers and loose text coercion
//!
//! Phone numbers are normalized to the local `(92) 98123-1234` shape the
//! spreadsheet and tickets carry. Header matching and flag parsing on the
//! configuration tab is case- and accent-insensitive, so all of it funnels
//! through [`fold`].

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

use crate::core::{AppError, AppResult};

/// Country code stripped from oversized phone inputs
const COUNTRY_PREFIX: &str = "55";

/// Fixed area code printed on every formatted phone
const PHONE_AREA_CODE: &str = "92";

/// Affirmative tokens accepted for the active flag (after folding)
const TRUTHY_TOKENS: [&str; 10] = [
    "sim", "s", "true", "1", "y", "yes", "ativo", "ativa", "on", "ok",
];

/// Fold text for comparisons: NFKD, strip combining marks, trim, lowercase
pub fn fold(s: &str) -> String {
    s.nfkd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .trim()
        .to_lowercase()
}

/// Normalize a phone number to `(92) XXXXX-XXXX`
///
/// Strips every non-digit, drops a leading country code when more than 11
/// digits remain, and requires exactly 11 digits (DDD included).
pub fn format_phone(raw: &str) -> AppResult<String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(AppError::validation("Telefone é obrigatório."));
    }

    let mut digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return Err(AppError::validation(
            "Telefone deve conter apenas números válidos.",
        ));
    }

    // Drop the country code (55) when present, keeping the last 11 digits
    if digits.starts_with(COUNTRY_PREFIX) && digits.len() > 11 {
        digits.drain(..2);
    }

    if digits.len() != 11 {
        return Err(AppError::validation(
            "Telefone deve conter 11 dígitos (incluindo DDD).",
        ));
    }

    let local = &digits[digits.len() - 9..];
    Ok(format!(
        "({}) {}-{}",
        PHONE_AREA_CODE,
        &local[..5],
        &local[5..]
    ))
}

/// Uppercase a name, trimming outer whitespace
pub fn format_name(raw: &str) -> String {
    raw.trim().to_uppercase()
}

/// Parse a free-text active flag
///
/// Accepts a fixed affirmative vocabulary; anything else is false.
pub fn truthy(raw: &str) -> bool {
    let folded = fold(raw);
    TRUTHY_TOKENS.contains(&folded.as_str())
}

/// Best-effort positive integer coercion
///
/// Non-digit characters are stripped before parsing; coercion failure or
/// non-positive values yield `None`, never an error.
pub fn parse_positive_int(raw: &str) -> Option<u32> {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return None;
    }
    match digits.parse::<u32>() {
        Ok(n) if n > 0 => Some(n),
        _ => None,
    }
}
