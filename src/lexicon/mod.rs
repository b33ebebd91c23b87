//! Immutable, process-wide lexicon tables.
//!
//! Every table here is `const` data with an explicit, documented order.
//! Rule priority is inspectable data, not control flow: swapping two rows
//! changes results on ambiguous input, so the ordering comments are part of
//! the contract.
//!
//! - [`property`]: priority-ordered property-type categories (EN + AR sets)
//! - [`cities`]: province aliases, the substring collision blocklist, and
//!   the curated neighborhood map
//! - [`numbers`]: EN/AR number words, amount words, scale suffixes,
//!   currency tokens, area units
//! - [`amenities`]: amenity keyword map, furnished/garage tokens, view
//!   priority rules, free keyword tags

pub mod amenities;
pub mod cities;
pub mod numbers;
pub mod property;
