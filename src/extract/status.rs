//! Status pass: sale vs rent.
//!
//! Precedence is data, not incidental order: [`STATUS_RULES`] lists rent
//! before sale, so a phrase matching both classifies as rent. شراء ("to
//! buy") classifies as Sale, matching listing convention.
//!
//! Arabic tokens match as substrings, so the short Sale token بيع needs the
//! same blocked-context discipline as the city aliases: a hit found inside
//! طبيعية or ربيع is not a sale.

use std::sync::LazyLock;

use regex::Regex;

use crate::filter::{ExtractedFilter, ListingStatus};
use crate::normalize::NormalizedQuery;

use super::span_in_blocked_context;

static RE_RENT_EN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(?:for\s+rent|rentals?|renting|rent)\b").unwrap());

static RE_SALE_EN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?:for\s+sale|sales?|sell(?:ing)?|buy(?:ing)?|purchase)\b").unwrap()
});

/// Words containing بيع that have nothing to do with selling.
const SALE_BLOCKING_WORDS: &[&str] = &["طبيعية", "طبيعيه", "طبيعي", "ربيع", "مبيت"];

struct StatusRule {
    status: ListingStatus,
    en: &'static LazyLock<Regex>,
    ar: &'static [&'static str],
    /// Blocked contexts for the Arabic tokens of this rule.
    ar_blocking: &'static [&'static str],
}

/// Rent is evaluated before sale; the first matching rule wins.
const STATUS_RULES: &[StatusRule] = &[
    StatusRule {
        status: ListingStatus::Rent,
        en: &RE_RENT_EN,
        ar: &["للايجار", "للإيجار", "ايجار", "إيجار", "آجار", "اجار"],
        ar_blocking: &[],
    },
    StatusRule {
        status: ListingStatus::Sale,
        en: &RE_SALE_EN,
        ar: &["للبيع", "بيع", "شراء"],
        ar_blocking: SALE_BLOCKING_WORDS,
    },
];

/// Any occurrence of `token` outside the rule's blocked contexts.
fn ar_token_hit(text: &str, token: &str, blocking: &[&str]) -> bool {
    text.match_indices(token)
        .any(|(start, _)| !span_in_blocked_context(text, start, start + token.len(), blocking))
}

pub fn extract(query: &NormalizedQuery, filter: &mut ExtractedFilter) {
    let text = &query.normalized;

    for rule in STATUS_RULES {
        let ar_hit = rule
            .ar
            .iter()
            .any(|kw| ar_token_hit(text, kw, rule.ar_blocking));
        if rule.en.is_match(text) || ar_hit {
            filter.status = Some(rule.status);
            return;
        }
    }
}
