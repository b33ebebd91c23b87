//! The extraction pipeline: fixed-order passes over one shared result.
//!
//! ```text
//! input ──→ validate ──→ normalize ──→ PropertyType → Status → RoomCounts
//!                                      → Location → Price → Size
//!                                      → Amenities/Keywords/View
//!                                    ──→ assemble (cross-field) ──→ ExtractedFilter
//! ```
//!
//! Passes are independent except where documented: the assembler applies the
//! salon→bedroom increment and the utility→bathroom default, the two
//! adjustments that cross pass boundaries. The pipeline is a pure function —
//! no I/O, no shared mutable state — and deterministic: identical input
//! always yields an identical record.

pub mod amenities;
pub mod location;
pub mod price;
pub mod property_type;
pub mod rooms;
pub mod size;
pub mod status;

use crate::error::{ExtractError, ExtractResult};
use crate::filter::ExtractedFilter;
use crate::normalize::normalize;

/// Maximum query length in Unicode characters, counted after trimming.
/// Bounds worst-case pattern-matching cost.
pub const MAX_QUERY_CHARS: usize = 500;

/// Parse a free-form, mixed-script real-estate search phrase into a
/// structured filter.
///
/// The only failure mode is input validation ([`ExtractError`]); a field for
/// which no rule fired resolves to its `None`/empty default and is never an
/// error.
pub fn parse_query(input: &str) -> ExtractResult<ExtractedFilter> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ExtractError::EmptyQuery);
    }
    let length = trimmed.chars().count();
    if length > MAX_QUERY_CHARS {
        return Err(ExtractError::QueryTooLong {
            length,
            max: MAX_QUERY_CHARS,
        });
    }

    let query = normalize(trimmed);
    tracing::trace!(normalized = %query.normalized, "query normalized");

    let mut filter = ExtractedFilter::default();

    property_type::extract(&query, &mut filter);
    status::extract(&query, &mut filter);
    let signals = rooms::extract(&query, &mut filter);
    location::extract(&query, &mut filter);
    price::extract(&query, &mut filter);
    size::extract(&query, &mut filter);
    amenities::extract(&query, &mut filter);

    assemble(signals, &mut filter);

    tracing::debug!(
        property_type = ?filter.property_type,
        status = ?filter.status,
        bedrooms = ?filter.bedrooms,
        bathrooms = ?filter.bathrooms,
        city = ?filter.city,
        "query extracted"
    );

    Ok(filter)
}

/// Cross-field adjustments not expressible inside a single pass.
fn assemble(signals: rooms::RoomSignals, filter: &mut ExtractedFilter) {
    // A salon counts as an extra room; with no explicit count it reads as
    // "one room + salon".
    if signals.salon_seen {
        filter.bedrooms = Some(filter.bedrooms.unwrap_or(1) + 1);
    }
    // A utility-room mention implies at least one bathroom.
    if signals.utility_seen && filter.bathrooms.is_none() {
        filter.bathrooms = Some(1);
    }
}

/// Whether `text` contains `word` delimited by non-alphanumeric characters.
/// Used for Latin keywords, where substring hits inside longer words are
/// false positives; Arabic keywords match as substrings because prefixed
/// forms (بدمشق, وشقة) are standard.
pub(crate) fn contains_word(text: &str, word: &str) -> bool {
    for (start, _) in text.match_indices(word) {
        let end = start + word.len();
        let before_ok = text[..start]
            .chars()
            .next_back()
            .is_none_or(|c| !c.is_ascii_alphanumeric());
        let after_ok = text[end..]
            .chars()
            .next()
            .is_none_or(|c| !c.is_ascii_alphanumeric());
        if before_ok && after_ok {
            return true;
        }
    }
    false
}

/// Keyword hit with the per-script matching rule: Latin tokens on word
/// boundaries, Arabic tokens as substrings (prefixed forms like وشقة are
/// standard).
pub(crate) fn token_hit(text: &str, token: &str) -> bool {
    if token.is_ascii() {
        contains_word(text, token)
    } else {
        text.contains(token)
    }
}

/// Whether the span `[start, end)` lies strictly inside an occurrence of a
/// blocking word. One auditable guard instead of scattered inline checks.
pub(crate) fn span_in_blocked_context(
    text: &str,
    start: usize,
    end: usize,
    blocking: &[&str],
) -> bool {
    for word in blocking {
        for (b_start, _) in text.match_indices(word) {
            let b_end = b_start + word.len();
            if b_start <= start && end <= b_end && b_end - b_start > end - start {
                return true;
            }
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_query_is_validation_error() {
        assert!(matches!(parse_query(""), Err(ExtractError::EmptyQuery)));
        assert!(matches!(parse_query("   "), Err(ExtractError::EmptyQuery)));
    }

    #[test]
    fn over_length_query_is_validation_error() {
        let long = "ش".repeat(501);
        match parse_query(&long) {
            Err(ExtractError::QueryTooLong { length, max }) => {
                assert_eq!(length, 501);
                assert_eq!(max, 500);
            }
            other => panic!("expected QueryTooLong, got {other:?}"),
        }
    }

    #[test]
    fn max_length_query_is_accepted() {
        let at_cap = "a".repeat(500);
        assert!(parse_query(&at_cap).is_ok());
    }

    #[test]
    fn no_match_is_not_an_error() {
        let filter = parse_query("hello world").unwrap();
        assert!(filter.is_empty());
    }

    #[test]
    fn salon_increments_found_count() {
        let filter = parse_query("شقة غرفتين وصالون").unwrap();
        assert_eq!(filter.bedrooms, Some(3));
    }

    #[test]
    fn salon_alone_defaults_to_two() {
        let filter = parse_query("شقة صالون").unwrap();
        assert_eq!(filter.bedrooms, Some(2));
    }

    #[test]
    fn utility_defaults_bathrooms_to_one() {
        let filter = parse_query("شقة منافع").unwrap();
        assert_eq!(filter.bathrooms, Some(1));
    }

    #[test]
    fn utility_does_not_override_explicit_count() {
        let filter = parse_query("شقة حمامين منافع").unwrap();
        assert_eq!(filter.bathrooms, Some(2));
    }

    #[test]
    fn contains_word_boundaries() {
        assert!(contains_word("villa for sale", "villa"));
        assert!(!contains_word("savilla road", "villa"));
        assert!(contains_word("a villa.", "villa"));
    }
}
