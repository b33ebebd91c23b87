//! Amenity, furnished, garage, keyword-tag, and view passes.
//!
//! All of these are keyword-table scans. Amenity hits merge into a unique
//! set keyed by canonical value. Furnished is tri-state: the negated forms
//! are checked first because غير مفروش contains مفروش. View classification
//! keeps only the highest-priority rule that fires. Keyword tags append in
//! table order; a hit whose span lies inside an earlier, wider hit is
//! skipped so طابو does not re-fire inside طابو اخضر.

use crate::extract::{contains_word, token_hit};
use crate::filter::ExtractedFilter;
use crate::lexicon::amenities::{
    AMENITY_KEYWORDS, FURNISHED_NEGATIVE, FURNISHED_POSITIVE, GARAGE_TOKENS, KEYWORD_TAGS,
    VIEW_RULES,
};
use crate::normalize::NormalizedQuery;

pub fn extract(query: &NormalizedQuery, filter: &mut ExtractedFilter) {
    let text = &query.normalized;

    for (keyword, amenity) in AMENITY_KEYWORDS {
        if token_hit(text, keyword) {
            filter.add_amenity(*amenity);
        }
    }

    if FURNISHED_NEGATIVE.iter().any(|t| token_hit(text, t)) {
        filter.furnished = Some(false);
    } else if FURNISHED_POSITIVE.iter().any(|t| token_hit(text, t)) {
        filter.furnished = Some(true);
    }

    if GARAGE_TOKENS.iter().any(|t| token_hit(text, t)) {
        filter.garages = Some(true);
    }

    keyword_tags(text, filter);

    for (view, tokens) in VIEW_RULES {
        if tokens.iter().any(|t| token_hit(text, t)) {
            filter.view_type = Some(*view);
            break;
        }
    }
}

/// Append keyword tags in table order, skipping any occurrence that falls
/// strictly inside a span an earlier table row already claimed.
fn keyword_tags(text: &str, filter: &mut ExtractedFilter) {
    let mut claimed: Vec<(usize, usize)> = Vec::new();

    for (phrase, tag) in KEYWORD_TAGS {
        for (start, _) in text.match_indices(phrase) {
            let end = start + phrase.len();
            if phrase.is_ascii() && !contains_word(text, phrase) {
                continue;
            }
            let inside_wider = claimed
                .iter()
                .any(|&(c_start, c_end)| c_start <= start && end <= c_end && c_end - c_start > end - start);
            if inside_wider {
                continue;
            }
            claimed.push((start, end));
            filter.keywords.push((*tag).to_string());
            break;
        }
    }
}
