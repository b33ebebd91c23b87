//! Rich diagnostic error types for the extraction engine.
//!
//! Failure semantics are two-tier: input validation problems are surfaced as
//! [`ExtractError`] with miette error codes and help text; a field for which
//! no rule fired is never an error — it resolves to that field's `None`/empty
//! default inside [`ExtractedFilter`](crate::filter::ExtractedFilter).

use miette::Diagnostic;
use thiserror::Error;

/// Input validation errors raised by [`parse_query`](crate::parse_query).
///
/// These are the only failure mode of the extractor. "Nothing matched" is a
/// per-field default, not an error.
#[derive(Debug, Error, Diagnostic)]
pub enum ExtractError {
    #[error("query is empty after trimming")]
    #[diagnostic(
        code(aqari::query::empty),
        help("Provide at least one non-whitespace character to search for.")
    )]
    EmptyQuery,

    #[error("query is too long: {length} characters, maximum is {max}")]
    #[diagnostic(
        code(aqari::query::too_long),
        help(
            "Search phrases are capped to bound pattern-matching cost. \
             Shorten the query — the extractor only needs the descriptive part \
             (type, rooms, location, price, size)."
        )
    )]
    QueryTooLong { length: usize, max: usize },
}

/// Convenience alias for functions returning extraction results.
pub type ExtractResult<T> = std::result::Result<T, ExtractError>;
