//! Error types for the site index calculator.

use polars::prelude::PolarsError;
use thiserror::Error;

/// Failures that abort a whole call.
///
/// Per-row problems (unsupported species code, numeric domain violations)
/// are not errors: they yield a missing value for that row only.
#[derive(Debug, Error)]
pub enum SiteIndexError {
    /// Method token not one of the documented spellings.
    #[error(
        "unknown site index method '{0}' (expected \"default\", \"SHARMA-BRUNNER\" or \"TVEITE-BRAASTAD\")"
    )]
    UnknownMethod(String),

    /// Parallel input sequences disagree on length.
    #[error(
        "input length mismatch: age has {age} rows, top_height has {top_height}, species_code has {species_code}"
    )]
    LengthMismatch {
        age: usize,
        top_height: usize,
        species_code: usize,
    },

    /// Column access or dtype failure in the data-frame interface.
    #[error(transparent)]
    Frame(#[from] PolarsError),
}
