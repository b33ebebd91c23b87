//! Query normalization: numeral rewriting and Latin case folding.
//!
//! Produces a normalized copy of the raw query that all extraction passes
//! match against:
//!
//! 1. NFC composition, so decomposed forms compare equal to composed ones
//! 2. Arabic-Indic digits (٠–٩) and Extended Arabic-Indic digits (۰–۹)
//!    rewritten to ASCII digits
//! 3. Latin letters lowercased
//!
//! Arabic letters are left untouched — Arabic has no case, and the lexicons
//! carry dialect/diacritic spelling variants as explicit aliases instead.

use unicode_normalization::UnicodeNormalization;

/// A query in both its raw and normalized forms.
///
/// Passes match against `normalized`; `raw` is kept for callers that want to
/// echo the original phrase.
#[derive(Debug, Clone)]
pub struct NormalizedQuery {
    pub raw: String,
    pub normalized: String,
}

/// Rewrite one digit character to ASCII, or return it unchanged.
fn fold_digit(c: char) -> char {
    match c {
        // Arabic-Indic ٠–٩
        '\u{0660}'..='\u{0669}' => {
            char::from(b'0' + (c as u32 - 0x0660) as u8)
        }
        // Extended Arabic-Indic ۰–۹
        '\u{06F0}'..='\u{06F9}' => {
            char::from(b'0' + (c as u32 - 0x06F0) as u8)
        }
        _ => c,
    }
}

/// Normalize a trimmed query string.
pub fn normalize(input: &str) -> NormalizedQuery {
    let raw = input.trim().to_string();

    let mut normalized = String::with_capacity(raw.len());
    for c in raw.nfc() {
        let c = fold_digit(c);
        if c.is_ascii_uppercase() {
            normalized.push(c.to_ascii_lowercase());
        } else if c.is_uppercase() {
            normalized.extend(c.to_lowercase());
        } else {
            normalized.push(c);
        }
    }

    NormalizedQuery { raw, normalized }
}
