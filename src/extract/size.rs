//! Size pass: the price grammar transposed onto area units.
//!
//! Branch priority, first satisfied wins:
//!
//! 1. explicit range ("between X and Y sqm" / "بين X و Y متر")
//! 2. explicit upper bound
//! 3. explicit lower bound
//! 4. bare number with a unit, treated as an upper bound
//!
//! Unlike the price pass there is no approximate branch and no amount-word
//! table: sizes are written in digits. The trailing unit is what routes an
//! amount here instead of to the price pass.

use std::sync::LazyLock;

use regex::Regex;

use crate::filter::ExtractedFilter;
use crate::normalize::NormalizedQuery;

/// Alternation over the recognized area units, longest first so متر مربع
/// never degrades to متر.
const UNIT: &str = "(?:متر مربع|متر|square meters|square metres|square meter|square metre|square feet|sq m|sqm|sqft|m2|م2|م²)";

const NUM: &str = r"(\d+(?:,\d{3})*(?:\.\d+)?)";

static RE_RANGE_EN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"between\s+{NUM}\s+and\s+{NUM}\s*{UNIT}")).unwrap()
});

static RE_RANGE_AR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"بين\s+{NUM}\s+و\s*{NUM}\s*{UNIT}")).unwrap()
});

static RE_UPPER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?:under|below|less than|up to|max(?:imum)?|اقل من|أقل من|ما دون|تحت)\s+{NUM}\s*{UNIT}"
    ))
    .unwrap()
});

static RE_LOWER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?:over|above|more than|at least|min(?:imum)?|اكثر من|أكثر من|اعلى من|أعلى من|فوق)\s+{NUM}\s*{UNIT}"
    ))
    .unwrap()
});

static RE_BARE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&format!(r"{NUM}\s*{UNIT}")).unwrap());

fn amount(m: Option<regex::Match<'_>>) -> Option<f64> {
    m?.as_str().replace(',', "").parse().ok()
}

pub fn extract(query: &NormalizedQuery, filter: &mut ExtractedFilter) {
    let text = &query.normalized;

    for regex in [&RE_RANGE_EN, &RE_RANGE_AR] {
        if let Some(caps) = regex.captures(text)
            && let (Some(a), Some(b)) = (amount(caps.get(1)), amount(caps.get(2)))
        {
            filter.size_min = Some(a.min(b));
            filter.size_max = Some(a.max(b));
            return;
        }
    }

    if let Some(caps) = RE_UPPER.captures(text)
        && let Some(v) = amount(caps.get(1))
    {
        filter.size_max = Some(v);
        return;
    }

    if let Some(caps) = RE_LOWER.captures(text)
        && let Some(v) = amount(caps.get(1))
    {
        filter.size_min = Some(v);
        return;
    }

    if let Some(caps) = RE_BARE.captures(text)
        && let Some(v) = amount(caps.get(1))
    {
        filter.size_max = Some(v);
    }
}
