//! City aliases, the collision blocklist, and the curated neighborhood map.
//!
//! City aliases cover standard Arabic, common dialect/diacritic-free
//! variants, and an English spelling. Arabic aliases are matched as
//! substrings (prefixed forms like بدمشق are common), which makes a
//! collision guard mandatory: the Hama alias حما is a substring of the
//! bathroom words حمام/حمامين, so any alias hit found inside a member of
//! [`CITY_BLOCKING_WORDS`] is discarded.

use crate::filter::City;

/// One province and its accepted spellings. Arabic aliases first, longest
/// variants before shorter prefixes of themselves.
pub struct CityEntry {
    pub city: City,
    pub aliases: &'static [&'static str],
}

/// Scan order is fixed; the first verified, non-colliding hit wins.
pub const CITY_ALIASES: &[CityEntry] = &[
    CityEntry {
        city: City::Damascus,
        aliases: &["دمشق", "damascus"],
    },
    CityEntry {
        city: City::Aleppo,
        aliases: &["حلب", "aleppo"],
    },
    CityEntry {
        city: City::Homs,
        aliases: &["حمص", "homs"],
    },
    CityEntry {
        city: City::Hama,
        aliases: &["حماة", "حماه", "حما", "hama"],
    },
    CityEntry {
        city: City::Latakia,
        aliases: &["اللاذقية", "اللاذقيه", "لاذقية", "لاذقيه", "latakia", "lattakia"],
    },
    CityEntry {
        city: City::Tartus,
        aliases: &["طرطوس", "tartus", "tartous"],
    },
    CityEntry {
        city: City::Daraa,
        aliases: &["درعا", "daraa"],
    },
    CityEntry {
        city: City::DeirEzzor,
        aliases: &["دير الزور", "ديرالزور", "deir ezzor", "deir ez-zor"],
    },
    CityEntry {
        city: City::Raqqa,
        aliases: &["الرقة", "الرقه", "رقة", "raqqa"],
    },
    CityEntry {
        city: City::Hasakah,
        aliases: &["الحسكة", "الحسكه", "حسكة", "hasakah", "hasakeh"],
    },
    CityEntry {
        city: City::Idlib,
        aliases: &["ادلب", "إدلب", "idlib"],
    },
    CityEntry {
        city: City::Sweida,
        aliases: &["السويداء", "سويداء", "sweida", "suwayda"],
    },
    CityEntry {
        city: City::Quneitra,
        aliases: &["القنيطرة", "القنيطره", "قنيطرة", "quneitra"],
    },
];

/// Words whose interior must never yield a city match. Longest first so the
/// widest blocking span is found.
pub const CITY_BLOCKING_WORDS: &[&str] = &["حمامين", "حمامات", "حمام"];

/// Colloquial Damascus aliases, checked on a fast path before the general
/// scan. الشام before شام so the wider span is preferred.
pub const DAMASCUS_COLLOQUIAL: &[&str] = &["الشام", "شام"];

/// Words that contain شام without meaning Damascus.
pub const DAMASCUS_COLLOQUIAL_BLOCKING: &[&str] = &["شاملة", "شامله", "شامل"];

/// Words whose interior must never yield a neighborhood match. The Dummar
/// alias دمر is a substring of مدمر ("destroyed") and تدمر (Palmyra); the
/// Mezzeh alias مزة is a substring of the name حمزة.
pub const NEIGHBORHOOD_BLOCKING_WORDS: &[&str] =
    &["مدمرة", "مدمره", "مدمر", "تدمر", "حمزة", "حمزه"];

/// One neighborhood and its accepted spellings.
pub struct NeighborhoodEntry {
    pub canonical: &'static str,
    pub aliases: &'static [&'static str],
}

/// Curated neighborhood alias map. Within an entry, longer aliases precede
/// their own prefixes.
pub const NEIGHBORHOODS: &[NeighborhoodEntry] = &[
    NeighborhoodEntry {
        canonical: "Mezzeh",
        aliases: &["المزة", "المزه", "مزة", "مزه", "mezzeh", "mazzeh", "mezze"],
    },
    NeighborhoodEntry {
        canonical: "Malki",
        aliases: &["المالكي", "مالكي", "malki"],
    },
    NeighborhoodEntry {
        canonical: "Abu Rummaneh",
        aliases: &["ابو رمانة", "أبو رمانة", "ابو رمانه", "abu rummaneh"],
    },
    NeighborhoodEntry {
        canonical: "Kafar Souseh",
        aliases: &["كفر سوسة", "كفرسوسة", "كفرسوسه", "kafar souseh", "kafarsouseh"],
    },
    NeighborhoodEntry {
        canonical: "Dummar",
        aliases: &["مشروع دمر", "دمر", "dummar"],
    },
    NeighborhoodEntry {
        canonical: "Baramkeh",
        aliases: &["البرامكة", "برامكة", "baramkeh"],
    },
    NeighborhoodEntry {
        canonical: "Midan",
        aliases: &["الميدان", "ميدان", "midan"],
    },
    NeighborhoodEntry {
        canonical: "New Aleppo",
        aliases: &["حلب الجديدة", "حلب الجديده", "new aleppo"],
    },
    NeighborhoodEntry {
        canonical: "Hamdaniyeh",
        aliases: &["الحمدانية", "الحمدانيه", "حمدانية", "hamdaniyeh"],
    },
    NeighborhoodEntry {
        canonical: "Inshaat",
        aliases: &["الانشاءات", "انشاءات", "inshaat"],
    },
];
