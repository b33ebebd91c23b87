//! Property-type pass: first category with a keyword hit wins.

use crate::filter::ExtractedFilter;
use crate::lexicon::property::PROPERTY_CATEGORIES;
use crate::normalize::NormalizedQuery;

use super::contains_word;

/// Walk the priority-ordered category list; exactly one or zero categories
/// is ever selected.
pub fn extract(query: &NormalizedQuery, filter: &mut ExtractedFilter) {
    let text = &query.normalized;

    for category in PROPERTY_CATEGORIES {
        let en_hit = category.en.iter().any(|kw| contains_word(text, kw));
        let ar_hit = category.ar.iter().any(|kw| text.contains(kw));
        if en_hit || ar_hit {
            filter.property_type = Some(category.kind);
            return;
        }
    }
}
