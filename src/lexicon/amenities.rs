//! Amenity, furnished, garage, view, and free-keyword tables.

use crate::filter::{Amenity, ViewType};

/// Surface keyword → canonical amenity. Repeated hits for the same canonical
/// value merge into one set entry.
pub const AMENITY_KEYWORDS: &[(&str, Amenity)] = &[
    ("balcony", Amenity::Balcony),
    ("بلكونة", Amenity::Balcony),
    ("بلكونه", Amenity::Balcony),
    ("بلكون", Amenity::Balcony),
    ("شرفة", Amenity::Balcony),
    ("شرفه", Amenity::Balcony),
    ("garden", Amenity::Garden),
    ("حديقة", Amenity::Garden),
    ("حديقه", Amenity::Garden),
    ("جنينة", Amenity::Garden),
    ("جنينه", Amenity::Garden),
    ("elevator", Amenity::Elevator),
    ("lift", Amenity::Elevator),
    ("مصعد", Amenity::Elevator),
    ("اصنصير", Amenity::Elevator),
    ("أصنصير", Amenity::Elevator),
    ("swimming pool", Amenity::Pool),
    ("pool", Amenity::Pool),
    ("مسبح", Amenity::Pool),
    ("central heating", Amenity::Heating),
    ("heating", Amenity::Heating),
    ("تدفئة", Amenity::Heating),
    ("تدفئه", Amenity::Heating),
    ("شوفاج", Amenity::Heating),
    ("air conditioning", Amenity::AirConditioning),
    ("air-conditioned", Amenity::AirConditioning),
    ("تكييف", Amenity::AirConditioning),
    ("مكيفة", Amenity::AirConditioning),
    ("مكيف", Amenity::AirConditioning),
    ("terrace", Amenity::Terrace),
    ("تراس", Amenity::Terrace),
    ("solar", Amenity::Solar),
    ("طاقة شمسية", Amenity::Solar),
    ("طاقه شمسيه", Amenity::Solar),
];

/// Negated forms, checked before the positive set — غير مفروش contains
/// مفروش as a substring.
pub const FURNISHED_NEGATIVE: &[&str] = &[
    "unfurnished",
    "not furnished",
    "غير مفروشة",
    "غير مفروشه",
    "غير مفروش",
    "بدون فرش",
    "بلا فرش",
];

pub const FURNISHED_POSITIVE: &[&str] = &["furnished", "مفروشة", "مفروشه", "مفروش"];

pub const GARAGE_TOKENS: &[&str] = &[
    "garages",
    "garage",
    "parking",
    "كراجات",
    "كراج",
    "موقف سيارة",
    "موقف سياره",
    "موقف",
];

/// View classification rules in priority order: sea > mountain > open >
/// generic. Only the first matching classification is kept.
pub const VIEW_RULES: &[(ViewType, &[&str])] = &[
    (
        ViewType::Sea,
        &[
            "sea view",
            "اطلالة بحرية",
            "إطلالة بحرية",
            "اطلاله بحريه",
            "على البحر",
        ],
    ),
    (
        ViewType::Mountain,
        &[
            "mountain view",
            "اطلالة جبلية",
            "إطلالة جبلية",
            "اطلاله جبليه",
            "على الجبل",
        ],
    ),
    (
        ViewType::Open,
        &[
            "open view",
            "اطلالة مفتوحة",
            "إطلالة مفتوحة",
            "كاشفة",
            "كاشفه",
        ],
    ),
    (
        ViewType::Generic,
        &["nice view", "اطلالة", "إطلالة", "اطلاله", "view"],
    ),
];

/// Surface phrase → free keyword tag, appended in table order. Longer
/// phrases precede their prefixes (طابو اخضر before طابو); the scanner
/// skips hits whose span falls inside an earlier, wider hit.
pub const KEYWORD_TAGS: &[(&str, &str)] = &[
    ("طابو اخضر", "green-deed"),
    ("طابو أخضر", "green-deed"),
    ("green deed", "green-deed"),
    ("طابو", "title-deed"),
    ("title deed", "title-deed"),
    ("بناء جديد", "new-building"),
    ("new building", "new-building"),
    ("newly built", "new-building"),
    ("مجددة", "renovated"),
    ("مجدد", "renovated"),
    ("renovated", "renovated"),
    ("سوبر ديلوكس", "super-deluxe"),
    ("super deluxe", "super-deluxe"),
    ("ديلوكس", "deluxe"),
    ("deluxe", "deluxe"),
    ("فاخرة", "luxury"),
    ("فاخر", "luxury"),
    ("luxurious", "luxury"),
    ("luxury", "luxury"),
];
