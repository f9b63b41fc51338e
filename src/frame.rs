//! Polars interface: site index as a nullable Float64 column.
//!
//! Mirrors the vectorized call shape of the R originals while keeping
//! per-row dispatch underneath. Rows where any input is null, the
//! species code is unsupported, or the formula leaves its numeric domain
//! come back null.

use polars::prelude::*;

use crate::calculator;
use crate::error::SiteIndexError;
use crate::method::SiteIndexMethod;
use crate::species::Species;

pub const AGE_COL: &str = "age";
pub const TOP_HEIGHT_COL: &str = "top_height";
pub const SPECIES_CODE_COL: &str = "species_code";
pub const SITE_INDEX_COL: &str = "site_index";

/// Compute the site index column for a frame carrying [`AGE_COL`],
/// [`TOP_HEIGHT_COL`] and [`SPECIES_CODE_COL`].
///
/// Numeric input columns are cast to Float64 / Int32 first, so integer
/// ages or i64 species codes are accepted.
pub fn site_index_series(df: &DataFrame, method: SiteIndexMethod) -> Result<Series, SiteIndexError> {
    let age = df.column(AGE_COL)?.cast(&DataType::Float64)?;
    let age = age.f64()?;
    let top_height = df.column(TOP_HEIGHT_COL)?.cast(&DataType::Float64)?;
    let top_height = top_height.f64()?;
    let species_code = df.column(SPECIES_CODE_COL)?.cast(&DataType::Int32)?;
    let species_code = species_code.i32()?;

    let out: Float64Chunked = (0..df.height())
        .map(|i| -> Option<f64> {
            let species = Species::from_code(species_code.get(i)?)?;
            calculator::site_index(age.get(i)?, top_height.get(i)?, species, method)
        })
        .collect();

    Ok(out.with_name(SITE_INDEX_COL.into()).into_series())
}

/// Return a copy of the frame with the [`SITE_INDEX_COL`] column appended.
pub fn with_site_index(df: &DataFrame, method: SiteIndexMethod) -> Result<DataFrame, SiteIndexError> {
    let si = site_index_series(df, method)?;
    let mut out = df.clone();
    out.with_column(si)?;
    Ok(out)
}
