//! Property-type categories, in priority order.
//!
//! The first category with a keyword hit wins; list order is the tie-break
//! for genuinely ambiguous tokens. A category may carry an empty Arabic set,
//! in which case it simply never matches via Arabic text.

use crate::filter::PropertyType;

/// One category: the canonical type plus its EN and AR keyword sets.
pub struct PropertyCategory {
    pub kind: PropertyType,
    pub en: &'static [&'static str],
    pub ar: &'static [&'static str],
}

/// Priority-ordered category list. Exactly one or zero categories is ever
/// selected per query.
pub const PROPERTY_CATEGORIES: &[PropertyCategory] = &[
    PropertyCategory {
        kind: PropertyType::Apartment,
        en: &["apartment", "apartments", "flat", "studio", "duplex"],
        ar: &["شقة", "شقه", "شقق", "ستوديو", "دوبلكس"],
    },
    PropertyCategory {
        kind: PropertyType::Villa,
        en: &["villa", "villas"],
        ar: &["فيلا", "فيلة", "فلل", "فيلات"],
    },
    PropertyCategory {
        kind: PropertyType::Office,
        en: &["office", "offices", "clinic"],
        ar: &["مكتب", "مكاتب", "عيادة", "عياده"],
    },
    PropertyCategory {
        kind: PropertyType::Land,
        en: &["land", "lands", "plot"],
        ar: &["ارض", "أرض", "اراضي", "أراضي", "مقسم"],
    },
    PropertyCategory {
        kind: PropertyType::Commercial,
        en: &["commercial", "shop", "store", "warehouse"],
        ar: &["محل", "محلات", "تجاري", "مستودع"],
    },
    PropertyCategory {
        kind: PropertyType::HolidayHome,
        en: &["chalet", "holiday home", "farm"],
        ar: &["شاليه", "مزرعة", "مزرعه"],
    },
];
