//! Location pass: city and neighborhood.
//!
//! City resolution: a fast path for the colloquial Damascus aliases
//! (شام/الشام), then a fixed-order scan of the province alias table. Every
//! candidate span goes through [`span_in_blocked_context`] — a substring hit
//! found inside a blocking word (e.g. the Hama alias حما inside حمامين) is
//! discarded and scanning continues.
//!
//! Neighborhood resolution is a secondary, lower-confidence pass anchored on
//! explicit markers (حي, area) and looser ones (في, قرب, in, near). Explicit
//! markers accept free-form candidates; loose markers accept curated aliases
//! only. A candidate equal to a recognized city name is always rejected.

use std::sync::LazyLock;

use regex::Regex;

use crate::filter::{City, ExtractedFilter};
use crate::lexicon::cities::{
    CITY_ALIASES, CITY_BLOCKING_WORDS, DAMASCUS_COLLOQUIAL, DAMASCUS_COLLOQUIAL_BLOCKING,
    NEIGHBORHOOD_BLOCKING_WORDS, NEIGHBORHOODS,
};
use crate::normalize::NormalizedQuery;

use super::span_in_blocked_context;

// ── Neighborhood markers ────────────────────────────────────────────────

static RE_HOOD_AR_EXPLICIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:^|\s)حي\s+(\S+(?:\s\S+)?)").unwrap());

static RE_HOOD_EN_EXPLICIT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?:area|neighborhood|neighbourhood|district)\s+([a-z][a-z' -]{2,30})").unwrap()
});

static RE_HOOD_AR_LOOSE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:^|\s)(?:في|قرب|بجانب)\s+(\S+(?:\s\S+)?)").unwrap());

static RE_HOOD_EN_LOOSE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(?:in|near)\s+([a-z][a-z' -]{2,30})").unwrap());

struct HoodMarker {
    regex: &'static LazyLock<Regex>,
    /// Whether a candidate that resolves through no curated alias may still
    /// be accepted verbatim.
    allow_freeform: bool,
}

/// Explicit markers first; loose markers accept curated aliases only.
const HOOD_MARKERS: &[HoodMarker] = &[
    HoodMarker { regex: &RE_HOOD_AR_EXPLICIT, allow_freeform: true },
    HoodMarker { regex: &RE_HOOD_EN_EXPLICIT, allow_freeform: true },
    HoodMarker { regex: &RE_HOOD_AR_LOOSE, allow_freeform: false },
    HoodMarker { regex: &RE_HOOD_EN_LOOSE, allow_freeform: false },
];

/// Latin aliases must sit on word boundaries; "hama" inside "hamam" is not
/// a city.
fn latin_boundary_ok(text: &str, start: usize, end: usize) -> bool {
    let before_ok = text[..start]
        .chars()
        .next_back()
        .is_none_or(|c| !c.is_ascii_alphanumeric());
    let after_ok = text[end..]
        .chars()
        .next()
        .is_none_or(|c| !c.is_ascii_alphanumeric());
    before_ok && after_ok
}

fn find_city(text: &str) -> Option<City> {
    // Colloquial Damascus fast path, itself guarded against شامل/شاملة.
    for alias in DAMASCUS_COLLOQUIAL {
        for (start, _) in text.match_indices(alias) {
            let end = start + alias.len();
            if !span_in_blocked_context(text, start, end, DAMASCUS_COLLOQUIAL_BLOCKING) {
                return Some(City::Damascus);
            }
        }
    }

    for entry in CITY_ALIASES {
        for alias in entry.aliases {
            for (start, _) in text.match_indices(alias) {
                let end = start + alias.len();
                if alias.is_ascii() && !latin_boundary_ok(text, start, end) {
                    continue;
                }
                if span_in_blocked_context(text, start, end, CITY_BLOCKING_WORDS) {
                    continue;
                }
                return Some(entry.city);
            }
        }
    }

    None
}

/// Whether a candidate string names a recognized city.
fn is_city_name(candidate: &str) -> bool {
    let candidate = candidate.trim();
    CITY_ALIASES.iter().any(|entry| {
        entry.aliases.iter().any(|a| *a == candidate)
            || entry.city.english_name() == candidate
    }) || DAMASCUS_COLLOQUIAL.contains(&candidate)
}

/// Resolve a marker capture to a canonical neighborhood.
///
/// Tries the curated alias map against the two-token and one-token prefixes
/// of the capture; free-form acceptance (explicit markers only) takes the
/// first token when it is alphabetic, at least three characters, and not a
/// city name.
fn resolve_candidate(capture: &str, allow_freeform: bool) -> Option<String> {
    let capture = capture.trim_matches(|c: char| c.is_ascii_punctuation() || c.is_whitespace());
    let tokens: Vec<&str> = capture.split_whitespace().collect();
    if tokens.is_empty() {
        return None;
    }

    let two = if tokens.len() >= 2 {
        Some(format!("{} {}", tokens[0], tokens[1]))
    } else {
        None
    };

    for entry in NEIGHBORHOODS {
        for alias in entry.aliases {
            if two.as_deref() == Some(*alias) || tokens[0] == *alias {
                return Some(entry.canonical.to_string());
            }
        }
    }

    if !allow_freeform {
        return None;
    }

    let first = tokens[0];
    if first.chars().count() < 3 || !first.chars().all(char::is_alphabetic) {
        return None;
    }
    if is_city_name(first) {
        return None;
    }
    Some(first.to_string())
}

fn find_neighborhood(text: &str) -> Option<String> {
    for marker in HOOD_MARKERS {
        for caps in marker.regex.captures_iter(text) {
            if let Some(m) = caps.get(1)
                && let Some(hood) = resolve_candidate(m.as_str(), marker.allow_freeform)
            {
                return Some(hood);
            }
        }
    }

    // Curated aliases can also appear with attached prepositions (بالمزة),
    // which no marker regex sees. Substring scan over the Arabic aliases,
    // longest first within each entry.
    for entry in NEIGHBORHOODS {
        for alias in entry.aliases {
            if alias.is_ascii() {
                continue;
            }
            for (start, _) in text.match_indices(alias) {
                let end = start + alias.len();
                if !span_in_blocked_context(text, start, end, NEIGHBORHOOD_BLOCKING_WORDS) {
                    return Some(entry.canonical.to_string());
                }
            }
        }
    }

    None
}

pub fn extract(query: &NormalizedQuery, filter: &mut ExtractedFilter) {
    let text = &query.normalized;

    filter.city = find_city(text);

    if let Some(hood) = find_neighborhood(text) {
        // Never store a city name as a neighborhood.
        if !is_city_name(&hood.to_lowercase()) {
            filter.neighborhood = Some(hood);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::normalize;

    fn run(input: &str) -> (Option<City>, Option<String>) {
        let query = normalize(input);
        let mut filter = ExtractedFilter::default();
        extract(&query, &mut filter);
        (filter.city, filter.neighborhood)
    }

    #[test]
    fn arabic_city_names() {
        assert_eq!(run("شقة في دمشق").0, Some(City::Damascus));
        assert_eq!(run("فيلا في حلب").0, Some(City::Aleppo));
        assert_eq!(run("بيت في حمص").0, Some(City::Homs));
        assert_eq!(run("أرض في اللاذقية").0, Some(City::Latakia));
    }

    #[test]
    fn english_city_names() {
        assert_eq!(run("villa for sale in damascus").0, Some(City::Damascus));
        assert_eq!(run("apartment in Aleppo").0, Some(City::Aleppo));
    }

    #[test]
    fn colloquial_sham_is_damascus() {
        assert_eq!(run("شقة بالشام").0, Some(City::Damascus));
        assert_eq!(run("بدي بيت بالشام القديمة").0, Some(City::Damascus));
    }

    #[test]
    fn shamel_does_not_mean_damascus() {
        // شامل contains شام; the fast path must not fire.
        assert_eq!(run("تشطيب شامل").0, None);
    }

    #[test]
    fn hama_alias_blocked_inside_bathroom_words() {
        assert_eq!(run("شقة حمام").0, None);
        assert_eq!(run("شقة غرفتين حمامين").0, None);
        assert_eq!(run("شقة حمامات").0, None);
    }

    #[test]
    fn hama_still_matches_alone() {
        assert_eq!(run("شقة في حماة").0, Some(City::Hama));
        assert_eq!(run("apartment in hama").0, Some(City::Hama));
    }

    #[test]
    fn hama_blocked_but_real_city_elsewhere_wins() {
        assert_eq!(run("شقة حمامين في حلب").0, Some(City::Aleppo));
    }

    #[test]
    fn latin_alias_needs_word_boundary() {
        assert_eq!(run("hamam spa").0, None);
    }

    #[test]
    fn neighborhood_via_explicit_marker() {
        let (_, hood) = run("شقة حي المزة");
        assert_eq!(hood.as_deref(), Some("Mezzeh"));
    }

    #[test]
    fn neighborhood_via_loose_marker_curated_only() {
        assert_eq!(run("شقة في المالكي").1.as_deref(), Some("Malki"));
        // Loose marker + non-curated candidate: rejected.
        assert_eq!(run("apartment in perfect condition").1, None);
    }

    #[test]
    fn neighborhood_freeform_after_explicit_marker() {
        let (_, hood) = run("بيت حي القصور");
        assert_eq!(hood.as_deref(), Some("القصور"));
    }

    #[test]
    fn neighborhood_never_a_city() {
        assert_eq!(run("شقة في دمشق").1, None);
        assert_eq!(run("apartment in damascus").1, None);
    }

    #[test]
    fn attached_preposition_alias() {
        assert_eq!(run("شقة بالمزة").1.as_deref(), Some("Mezzeh"));
    }

    #[test]
    fn city_and_neighborhood_together() {
        let (city, hood) = run("شقة في دمشق حي المزة");
        assert_eq!(city, Some(City::Damascus));
        assert_eq!(hood.as_deref(), Some("Mezzeh"));
    }

    #[test]
    fn blocked_span_guard_is_directional() {
        // A city alias standing alone is not blocked just because the
        // blocking word appears elsewhere in the text.
        assert_eq!(run("شقة في حماة مع حمام").0, Some(City::Hama));
    }

    #[test]
    fn dummar_alias_blocked_inside_other_words() {
        assert_eq!(run("بيت مدمر للبيع").1, None);
        assert_eq!(run("أرض قرب تدمر").1, None);
        assert_eq!(run("شقة بدمر").1.as_deref(), Some("Dummar"));
    }

    #[test]
    fn mezzeh_alias_blocked_inside_names() {
        assert_eq!(run("شقة شارع حمزة").1, None);
        assert_eq!(run("بناء حمزه").1, None);
        assert_eq!(run("شقة بالمزة").1.as_deref(), Some("Mezzeh"));
    }

    #[test]
    fn no_location_is_none() {
        let (city, hood) = run("villa with pool");
        assert_eq!(city, None);
        assert_eq!(hood, None);
    }
}
