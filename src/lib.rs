//! aqari — bilingual real-estate search query extraction.
//!
//! Turns a free-form Arabic/English (often code-switched) search phrase into
//! a structured [`ExtractedFilter`] a query builder can consume:
//!
//! ```
//! use aqari::parse_query;
//!
//! let filter = parse_query("شقة غرفتين حمامين في حلب").unwrap();
//! assert_eq!(filter.bedrooms, Some(2));
//! assert_eq!(filter.bathrooms, Some(2));
//! assert_eq!(filter.city, Some(aqari::City::Aleppo));
//! ```
//!
//! The pipeline is a fixed sequence of independent extraction passes over a
//! normalized copy of the input (property type, listing status, room counts,
//! location, price, size, amenities), each driven by priority-ordered static
//! lexicon tables. Extraction is best-effort: a phrase no rule matches
//! leaves its field unset, and the only errors are input validation
//! ([`ExtractError`]).
//!
//! The parser is a pure function over immutable statics and is safe to call
//! from any number of threads.

pub mod error;
pub mod extract;
pub mod filter;
pub mod lexicon;
pub mod normalize;

pub use error::{ExtractError, ExtractResult};
pub use extract::{MAX_QUERY_CHARS, parse_query};
pub use filter::{Amenity, City, ExtractedFilter, ListingStatus, PropertyType, ViewType};
