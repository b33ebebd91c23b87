//! Room-count pass: bedrooms and bathrooms.
//!
//! Counts appear as digits (Arabic-Indic forms already normalized), English
//! number words, or Arabic count words with gender/number inflection. Each
//! field has an ordered rule table tried longest-most-specific first, so
//! غرفتين resolves to 2 before the bare-غرفة rule can fire, and حمامين
//! resolves to 2 before the bare-حمام default.
//!
//! Salon and utility-room tokens are reported back as signals; the
//! assembler in [`super`] applies the cross-field adjustments.

use std::sync::LazyLock;

use regex::Regex;

use crate::filter::ExtractedFilter;
use crate::lexicon::numbers::{ar_number, en_number};
use crate::normalize::NormalizedQuery;

use super::token_hit;

/// Tokens whose presence feeds the cross-field assembly step.
#[derive(Debug, Clone, Copy, Default)]
pub struct RoomSignals {
    /// A living/reception-room token (صالون/صالة/صاله) was seen.
    pub salon_seen: bool,
    /// A utility/washroom token (منتفعات/منافع/منفعة) was seen.
    pub utility_seen: bool,
}

const SALON_TOKENS: &[&str] = &[
    "صالون",
    "صالة",
    "صاله",
    "living room",
    "living-room",
    "livingroom",
    "salon",
];

const UTILITY_TOKENS: &[&str] = &["منتفعات", "منافع", "منفعة", "منفعه"];

/// Where a rule's count comes from.
enum CountSource {
    /// First capture group is an ASCII digit run.
    Digits,
    /// First capture group is an English number word.
    EnglishWord,
    /// First capture group is an Arabic count word.
    ArabicWord,
    /// The pattern itself implies the count (duals, bare singulars).
    Fixed(u32),
}

struct CountRule {
    regex: &'static LazyLock<Regex>,
    source: CountSource,
}

// ── Bedroom patterns ────────────────────────────────────────────────────

static RE_BED_DIGIT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d+)\s*(?:bed\s?rooms?|beds?\b|rooms?\b|br\b|غرف|اوض|أوض)").unwrap()
});

static RE_BED_EN_WORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\b(one|two|three|four|five|six|seven|eight|nine|ten)\s+(?:bed\s?rooms?|beds?|rooms?)\b",
    )
    .unwrap()
});

static RE_BED_AR_DUAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"غرفتين|غرفتان|اوضتين|أوضتين").unwrap());

static RE_BED_AR_WORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(اثنتين|اثنين|ثلاثة|ثلاث|اربعة|أربعة|اربع|أربع|خمسة|خمس|ستة|ست|سبعة|سبع|ثمانية|ثماني|ثمان|تسعة|تسع|عشرة|عشر)\s+(?:غرف|اوض|أوض)",
    )
    .unwrap()
});

static RE_BED_AR_SINGLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"غرفة|غرفه|اوضة|أوضة").unwrap());

/// Longest, most specific pattern first. The bare-singular rule is last so
/// it can never shadow a counted phrase.
const BEDROOM_RULES: &[CountRule] = &[
    CountRule { regex: &RE_BED_DIGIT, source: CountSource::Digits },
    CountRule { regex: &RE_BED_EN_WORD, source: CountSource::EnglishWord },
    CountRule { regex: &RE_BED_AR_DUAL, source: CountSource::Fixed(2) },
    CountRule { regex: &RE_BED_AR_WORD, source: CountSource::ArabicWord },
    CountRule { regex: &RE_BED_AR_SINGLE, source: CountSource::Fixed(1) },
];

// ── Bathroom patterns ───────────────────────────────────────────────────

static RE_BATH_DIGIT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d+)\s*(?:bath\s?rooms?|baths?\b|toilets?\b|wc\b|حمامات|حمام)").unwrap()
});

static RE_BATH_EN_WORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\b(one|two|three|four|five|six|seven|eight|nine|ten)\s+(?:bath\s?rooms?|baths?)\b",
    )
    .unwrap()
});

static RE_BATH_AR_DUAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"حمامين|حمامان").unwrap());

static RE_BATH_AR_WORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(ثلاثة|ثلاث|اربعة|أربعة|اربع|أربع|خمسة|خمس|ستة|ست|سبعة|سبع|ثمانية|ثماني|ثمان|تسعة|تسع|عشرة|عشر)\s+(?:حمامات|حمام)",
    )
    .unwrap()
});

static RE_BATH_BARE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"حمامات|حمام|bath\s?rooms?|\bbaths?\b|\btoilets?\b").unwrap()
});

/// Same discipline as [`BEDROOM_RULES`]: حمامين must resolve before the
/// bare-حمام default of 1.
const BATHROOM_RULES: &[CountRule] = &[
    CountRule { regex: &RE_BATH_DIGIT, source: CountSource::Digits },
    CountRule { regex: &RE_BATH_EN_WORD, source: CountSource::EnglishWord },
    CountRule { regex: &RE_BATH_AR_DUAL, source: CountSource::Fixed(2) },
    CountRule { regex: &RE_BATH_AR_WORD, source: CountSource::ArabicWord },
    CountRule { regex: &RE_BATH_BARE, source: CountSource::Fixed(1) },
];

/// First matching rule wins; a rule whose capture fails to resolve to a
/// count ≥ 1 is skipped.
fn first_count(rules: &[CountRule], text: &str) -> Option<u32> {
    for rule in rules {
        let Some(caps) = rule.regex.captures(text) else {
            continue;
        };
        let count = match rule.source {
            CountSource::Fixed(n) => Some(n),
            CountSource::Digits => caps
                .get(1)
                .and_then(|m| m.as_str().parse::<u32>().ok()),
            CountSource::EnglishWord => caps.get(1).and_then(|m| en_number(m.as_str())),
            CountSource::ArabicWord => caps.get(1).and_then(|m| ar_number(m.as_str())),
        };
        if let Some(n) = count
            && n >= 1
        {
            return Some(n);
        }
    }
    None
}

pub fn extract(query: &NormalizedQuery, filter: &mut ExtractedFilter) -> RoomSignals {
    let text = &query.normalized;

    filter.bedrooms = first_count(BEDROOM_RULES, text);
    filter.bathrooms = first_count(BATHROOM_RULES, text);

    RoomSignals {
        salon_seen: SALON_TOKENS.iter().any(|tok| token_hit(text, tok)),
        utility_seen: UTILITY_TOKENS.iter().any(|tok| token_hit(text, tok)),
    }
}
