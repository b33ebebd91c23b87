//! Number words, amount words, scales, currency, and area units.
//!
//! Two numeral systems feed the extractor: digits (Arabic-Indic forms are
//! already rewritten to ASCII by the normalizer) and spelled-out words.
//! Arabic count words inflect for gender and number, so each value carries
//! its common variants; within any prefix-overlapping group the longer
//! variant is listed first.

/// English number words accepted in room counts.
pub const EN_NUMBER_WORDS: &[(&str, u32)] = &[
    ("one", 1),
    ("two", 2),
    ("three", 3),
    ("four", 4),
    ("five", 5),
    ("six", 6),
    ("seven", 7),
    ("eight", 8),
    ("nine", 9),
    ("ten", 10),
];

/// Arabic count words with gender/number inflection variants.
/// Longer variants precede their own prefixes (ثلاثة before ثلاث).
pub const AR_NUMBER_WORDS: &[(&str, u32)] = &[
    ("اثنتين", 2),
    ("اثنين", 2),
    ("ثلاثة", 3),
    ("ثلاث", 3),
    ("اربعة", 4),
    ("أربعة", 4),
    ("اربع", 4),
    ("أربع", 4),
    ("خمسة", 5),
    ("خمس", 5),
    ("ستة", 6),
    ("ست", 6),
    ("سبعة", 7),
    ("سبع", 7),
    ("ثمانية", 8),
    ("ثماني", 8),
    ("ثمان", 8),
    ("تسعة", 9),
    ("تسع", 9),
    ("عشرة", 10),
    ("عشر", 10),
];

/// Spelled-out Arabic price amounts mapped through a fixed table.
/// Checked before digit parsing; longer phrases precede their prefixes
/// (مليون ونص before مليون).
pub const AMOUNT_WORDS: &[(&str, f64)] = &[
    ("مليون ونص", 1_500_000.0),
    ("مليون ونصف", 1_500_000.0),
    ("مليونين", 2_000_000.0),
    ("نص مليون", 500_000.0),
    ("نصف مليون", 500_000.0),
    ("ربع مليون", 250_000.0),
    ("مليون", 1_000_000.0),
    ("مئتين الف", 200_000.0),
    ("مئتين ألف", 200_000.0),
    ("مئة وخمسين الف", 150_000.0),
    ("مئة الف", 100_000.0),
    ("مئة ألف", 100_000.0),
    ("مية الف", 100_000.0),
    ("ميه الف", 100_000.0),
    ("تسعين الف", 90_000.0),
    ("ثمانين الف", 80_000.0),
    ("سبعين الف", 70_000.0),
    ("ستين الف", 60_000.0),
    ("خمسين الف", 50_000.0),
    ("خمسين ألف", 50_000.0),
    ("اربعين الف", 40_000.0),
    ("أربعين ألف", 40_000.0),
    ("ثلاثين الف", 30_000.0),
    ("عشرين الف", 20_000.0),
];

/// Scale suffixes applied to a digit amount ("50 الف" → 50000).
pub const SCALE_SUFFIXES: &[(&str, f64)] = &[
    ("thousand", 1_000.0),
    ("آلاف", 1_000.0),
    ("الاف", 1_000.0),
    ("ألف", 1_000.0),
    ("الف", 1_000.0),
    ("k", 1_000.0),
    ("million", 1_000_000.0),
    ("مليون", 1_000_000.0),
];

/// Currency tokens. Recognized, never converted — the raw magnitude is
/// taken as-is. Longer phrases precede their prefixes.
pub const CURRENCY_TOKENS: &[&str] = &[
    "دولار امريكي",
    "دولار أميركي",
    "دولار أمريكي",
    "دولار",
    "ليرة سورية",
    "ليرة سوريه",
    "ليرة",
    "ليره",
    "ل.س",
    "usd",
    "dollars",
    "dollar",
    "syp",
    "lira",
];

/// Area-unit tokens for the size grammar. Longer phrases precede their
/// prefixes (متر مربع before متر).
pub const AREA_UNITS: &[&str] = &[
    "متر مربع",
    "متر",
    "م2",
    "square meters",
    "square metres",
    "square meter",
    "square metre",
    "square feet",
    "sqm",
    "sq m",
    "sqft",
    "m2",
    "م²",
];

/// Look up an English number word.
pub fn en_number(word: &str) -> Option<u32> {
    EN_NUMBER_WORDS
        .iter()
        .find(|(w, _)| *w == word)
        .map(|(_, n)| *n)
}

/// Look up an Arabic count word.
pub fn ar_number(word: &str) -> Option<u32> {
    AR_NUMBER_WORDS
        .iter()
        .find(|(w, _)| *w == word)
        .map(|(_, n)| *n)
}

/// Whether `text` (already past an amount) starts with an area unit,
/// ignoring leading whitespace. Used by the price pass to hand such
/// amounts over to the size pass.
pub fn starts_with_area_unit(text: &str) -> bool {
    let t = text.trim_start();
    AREA_UNITS.iter().any(|unit| t.starts_with(unit))
}

/// Whether the query mentions any currency token.
pub fn contains_currency(text: &str) -> bool {
    CURRENCY_TOKENS.iter().any(|tok| text.contains(tok))
}
