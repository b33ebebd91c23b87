//! Price pass: an ordered grammar of mutually exclusive branches.
//!
//! Branch priority, first satisfied wins:
//!
//! 1. explicit range ("between X and Y" / "بين X و Y")
//! 2. explicit upper bound ("under …" / "اقل من …")
//! 3. explicit lower bound ("over …" / "اعلى من …")
//! 4. approximate ("around …" / "بحدود …") — sets an upper bound and
//!    leaves the lower bound explicitly unset
//! 5. bare number — currency-gated, treated as an upper bound
//!
//! Amounts are digits with an optional scale suffix (k/الف/مليون) or a
//! spelled-out Arabic amount word. An amount immediately followed by an
//! area unit belongs to the size pass and is rejected here.

use std::sync::LazyLock;

use regex::Regex;

use crate::filter::ExtractedFilter;
use crate::lexicon::numbers::{
    AMOUNT_WORDS, CURRENCY_TOKENS, SCALE_SUFFIXES, contains_currency, starts_with_area_unit,
};
use crate::normalize::NormalizedQuery;

// ── Branch patterns ─────────────────────────────────────────────────────

static RE_RANGE_EN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"between\s+(.{1,40}?)\s+and\s+(.{1,40})").unwrap());

static RE_RANGE_AR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"بين\s+(.{1,40}?)\s+و\s*(.{1,40})").unwrap());

static RE_UPPER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:under|below|less than|up to|max(?:imum)?|اقل من|أقل من|ما دون|تحت)\s+(.{1,40})")
        .unwrap()
});

static RE_LOWER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?:over|above|more than|at least|min(?:imum)?|اكثر من|أكثر من|اعلى من|أعلى من|فوق)\s+(.{1,40})",
    )
    .unwrap()
});

static RE_APPROX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:around|about|approximately|بحدود|بحوالي|حوالي|تقريبا)\s+(.{1,40})").unwrap()
});

static RE_DIGIT_AMOUNT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+(?:,\d{3})*(?:\.\d+)?)").unwrap());

#[derive(Debug, Clone, Copy)]
enum PriceBranch {
    Range,
    Upper,
    Lower,
    Approximate,
}

struct BranchRule {
    branch: PriceBranch,
    regex: &'static LazyLock<Regex>,
}

/// Checked in this order; the branches are mutually exclusive by
/// construction (first satisfied wins).
const PRICE_BRANCHES: &[BranchRule] = &[
    BranchRule { branch: PriceBranch::Range, regex: &RE_RANGE_EN },
    BranchRule { branch: PriceBranch::Range, regex: &RE_RANGE_AR },
    BranchRule { branch: PriceBranch::Upper, regex: &RE_UPPER },
    BranchRule { branch: PriceBranch::Lower, regex: &RE_LOWER },
    BranchRule { branch: PriceBranch::Approximate, regex: &RE_APPROX },
];

/// Parse an amount at the start of `s` (after leading whitespace).
///
/// Returns the value and the byte length consumed, so the caller can
/// inspect what follows the amount. Spelled-out amount words are tried
/// before digits; a digit run may carry one scale suffix.
pub(crate) fn parse_amount(s: &str) -> Option<(f64, usize)> {
    let trimmed = s.trim_start();
    let lead = s.len() - trimmed.len();

    for (word, value) in AMOUNT_WORDS {
        if trimmed.starts_with(word) && token_ends_at(trimmed, word.len()) {
            return Some((*value, lead + word.len()));
        }
    }

    let caps = RE_DIGIT_AMOUNT.captures(trimmed)?;
    let digits = caps.get(1)?.as_str();
    let value: f64 = digits.replace(',', "").parse().ok()?;
    let consumed = digits.len();

    let rest = &trimmed[consumed..];
    let rest_trimmed = rest.trim_start();
    let gap = rest.len() - rest_trimmed.len();
    for (suffix, multiplier) in SCALE_SUFFIXES {
        if rest_trimmed.starts_with(suffix) && token_ends_at(rest_trimmed, suffix.len()) {
            return Some((value * multiplier, lead + consumed + gap + suffix.len()));
        }
    }

    Some((value, lead + consumed))
}

/// Whether the token ending at byte offset `end` is not glued to more
/// letters or digits ("50km" is not "50k").
fn token_ends_at(s: &str, end: usize) -> bool {
    s[end..].chars().next().is_none_or(|c| !c.is_alphanumeric())
}

/// Parse a branch capture into a price amount, rejecting amounts that the
/// size grammar owns.
fn price_amount(capture: &str) -> Option<f64> {
    let (value, consumed) = parse_amount(capture)?;
    if starts_with_area_unit(&capture[consumed..]) {
        return None;
    }
    Some(value)
}

pub fn extract(query: &NormalizedQuery, filter: &mut ExtractedFilter) {
    let text = &query.normalized;

    for rule in PRICE_BRANCHES {
        let Some(caps) = rule.regex.captures(text) else {
            continue;
        };
        match rule.branch {
            PriceBranch::Range => {
                let (Some(a), Some(b)) = (
                    caps.get(1).and_then(|m| price_amount(m.as_str())),
                    caps.get(2).and_then(|m| price_amount(m.as_str())),
                ) else {
                    continue;
                };
                filter.price_min = Some(a.min(b));
                filter.price_max = Some(a.max(b));
                return;
            }
            PriceBranch::Upper => {
                let Some(v) = caps.get(1).and_then(|m| price_amount(m.as_str())) else {
                    continue;
                };
                filter.price_max = Some(v);
                return;
            }
            PriceBranch::Lower => {
                let Some(v) = caps.get(1).and_then(|m| price_amount(m.as_str())) else {
                    continue;
                };
                filter.price_min = Some(v);
                return;
            }
            PriceBranch::Approximate => {
                let Some(v) = caps.get(1).and_then(|m| price_amount(m.as_str())) else {
                    continue;
                };
                // Approximate means "up to about X": the upper bound is set
                // and the lower bound is explicitly null, not merely absent.
                filter.price_max = Some(v);
                filter.price_min = None;
                return;
            }
        }
    }

    bare_amount(text, filter);
}

/// Bare-number fallback: a number followed by a currency token is an upper
/// bound. Gated on the query mentioning a currency at all, so room counts
/// and sizes never read as prices.
fn bare_amount(text: &str, filter: &mut ExtractedFilter) {
    if !contains_currency(text) {
        return;
    }

    let mut search_from = 0;
    while let Some(rel) = text[search_from..].find(|c: char| c.is_ascii_digit()) {
        let start = search_from + rel;
        if let Some((value, consumed)) = parse_amount(&text[start..]) {
            let rest = text[start + consumed..].trim_start();
            if CURRENCY_TOKENS.iter().any(|tok| rest.starts_with(tok)) {
                filter.price_max = Some(value);
                return;
            }
            search_from = start + consumed.max(1);
        } else {
            search_from = start + 1;
        }
    }

    // Spelled-out amount followed by a currency token ("مليون ليرة").
    for (word, value) in AMOUNT_WORDS {
        for (start, _) in text.match_indices(word) {
            let rest = text[start + word.len()..].trim_start();
            if CURRENCY_TOKENS.iter().any(|tok| rest.starts_with(tok)) {
                filter.price_max = Some(*value);
                return;
            }
        }
    }
}
