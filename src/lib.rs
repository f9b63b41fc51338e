//! Norwegian forest site index curves.
//!
//! Computes site index — the expected top height at a 40-year reference
//! age, a standard measure of site productivity — from breast-height age,
//! top height and species, using either the Sharma–Brunner GADA curves
//! (the default) or the Tveite (1977) / Braastad (1980) difference
//! curves. Birch uses the Eriksson (1997) model under both.
//!
//! Three layers produce identical numbers:
//! - scalar: [`site_index`]
//! - slices: [`compute_site_index`] / [`compute_site_index_par`]
//! - Polars: [`frame::site_index_series`] / [`frame::with_site_index`]
//!
//! Unsupported species codes and numeric domain violations (e.g.
//! `age <= 0`) are per-row missing values, never batch aborts. Only an
//! unknown method token or mismatched input lengths fail a whole call.

pub mod calculator;
pub mod error;
pub mod frame;
pub mod method;
pub mod models;
pub mod species;

// Re-export the public surface
pub use calculator::{compute_site_index, compute_site_index_par, site_index};
pub use error::SiteIndexError;
pub use frame::{site_index_series, with_site_index};
pub use method::SiteIndexMethod;
pub use species::Species;
