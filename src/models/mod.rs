//! Site index curve models.
//!
//! One module per published curve family. All functions take breast-height
//! age [years] and top height above breast height [m], and return site
//! index [m] at the 40-year reference age. Out-of-domain inputs are left
//! to IEEE arithmetic (NaN/infinity) for the dispatch layer to discard.

pub mod eriksson;
pub mod sharma_brunner;
pub mod tveite_braastad;

/// Breast height datum [m]. Ages are breast-height ages; top heights are
/// reduced by this before entering any model and it is added back to the
/// final index.
pub const BREAST_HEIGHT_M: f64 = 1.3;

/// Reference age [years] at which site index is read off the curves.
pub const REFERENCE_AGE: f64 = 40.0;
