//! Site index computation over stand records.
//!
//! The R originals evaluate every species formula over the whole batch
//! and mask-select by species code. Here each row dispatches to its own
//! species formula instead, so a discarded branch is never evaluated and
//! an out-of-domain spruce intermediate cannot leak into a pine row. The
//! numbers are identical. Rows stay independent throughout: an unsupported
//! species code or a numeric domain failure yields `None` for that row
//! only, never a batch abort.

use rayon::prelude::*;

use crate::error::SiteIndexError;
use crate::method::SiteIndexMethod;
use crate::models::{eriksson, sharma_brunner, tveite_braastad, BREAST_HEIGHT_M};
use crate::species::Species;

/// Site index [m] for a single stand observation.
///
/// `age` is breast-height age [years], `top_height` total top height [m].
/// Returns `None` when the result leaves the model's numeric domain
/// (non-finite under IEEE arithmetic, e.g. `age <= 0`).
pub fn site_index(
    age: f64,
    top_height: f64,
    species: Species,
    method: SiteIndexMethod,
) -> Option<f64> {
    let h = top_height - BREAST_HEIGHT_M;
    let si = match (method, species) {
        (SiteIndexMethod::SharmaBrunner, Species::Spruce) => {
            sharma_brunner::site_index(age, h, &sharma_brunner::SPRUCE)
        }
        (SiteIndexMethod::SharmaBrunner, Species::Pine) => {
            sharma_brunner::site_index(age, h, &sharma_brunner::PINE)
        }
        (SiteIndexMethod::TveiteBraastad, Species::Spruce) => tveite_braastad::spruce(age, h),
        (SiteIndexMethod::TveiteBraastad, Species::Pine) => tveite_braastad::pine(age, h),
        // Birch is method-invariant: Eriksson under both curve sets.
        (_, Species::Birch) => eriksson::birch(age, h),
    };
    si.is_finite().then_some(si)
}

/// One batch row: unsupported species codes become `None` without touching
/// the formulas.
fn site_index_row(
    age: f64,
    top_height: f64,
    species_code: i32,
    method: SiteIndexMethod,
) -> Option<f64> {
    let species = Species::from_code(species_code)?;
    site_index(age, top_height, species, method)
}

fn check_lengths(
    age: &[f64],
    top_height: &[f64],
    species_code: &[i32],
) -> Result<usize, SiteIndexError> {
    if age.len() != top_height.len() || age.len() != species_code.len() {
        return Err(SiteIndexError::LengthMismatch {
            age: age.len(),
            top_height: top_height.len(),
            species_code: species_code.len(),
        });
    }
    Ok(age.len())
}

/// Batch site index over parallel input slices.
///
/// Output order mirrors input order; row `i` depends only on inputs at
/// `i`. An empty batch yields an empty result, not an error.
pub fn compute_site_index(
    age: &[f64],
    top_height: &[f64],
    species_code: &[i32],
    method: SiteIndexMethod,
) -> Result<Vec<Option<f64>>, SiteIndexError> {
    let n = check_lengths(age, top_height, species_code)?;
    Ok((0..n)
        .map(|i| site_index_row(age[i], top_height[i], species_code[i], method))
        .collect())
}

/// Rayon variant of [`compute_site_index`] for large batches.
///
/// Rows are independent, so the parallel result is identical to the
/// sequential one, in the same order.
pub fn compute_site_index_par(
    age: &[f64],
    top_height: &[f64],
    species_code: &[i32],
    method: SiteIndexMethod,
) -> Result<Vec<Option<f64>>, SiteIndexError> {
    let n = check_lengths(age, top_height, species_code)?;
    Ok((0..n)
        .into_par_iter()
        .map(|i| site_index_row(age[i], top_height[i], species_code[i], method))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_batch_matches_scalar_evaluation() {
        let age = [40.0, 40.0, 40.0];
        let top_height = [20.0, 18.0, 15.0];
        let species_code = [1, 2, 3];

        for method in [SiteIndexMethod::SharmaBrunner, SiteIndexMethod::TveiteBraastad] {
            let out = compute_site_index(&age, &top_height, &species_code, method).unwrap();
            assert_eq!(out.len(), 3);
            for i in 0..3 {
                let species = Species::from_code(species_code[i]).unwrap();
                let expected = site_index(age[i], top_height[i], species, method).unwrap();
                assert_relative_eq!(out[i].unwrap(), expected, epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn test_unsupported_species_yields_missing_row_only() {
        let out = compute_site_index(
            &[40.0, 40.0, 40.0],
            &[20.0, 18.0, 15.0],
            &[1, 99, 3],
            SiteIndexMethod::SharmaBrunner,
        )
        .unwrap();
        assert!(out[0].is_some());
        assert!(out[1].is_none());
        assert!(out[2].is_some());
    }

    #[test]
    fn test_nonpositive_age_yields_missing_row_only() {
        let out = compute_site_index(
            &[0.0, 40.0],
            &[18.0, 18.0],
            &[1, 1],
            SiteIndexMethod::SharmaBrunner,
        )
        .unwrap();
        assert!(out[0].is_none());
        assert!(out[1].is_some());
    }

    #[test]
    fn test_length_mismatch_is_an_error() {
        let err = compute_site_index(&[40.0, 50.0], &[20.0], &[1, 1], SiteIndexMethod::default())
            .unwrap_err();
        assert!(matches!(
            err,
            SiteIndexError::LengthMismatch {
                age: 2,
                top_height: 1,
                species_code: 2
            }
        ));
    }

    #[test]
    fn test_empty_batch_yields_empty_result() {
        let out = compute_site_index(&[], &[], &[], SiteIndexMethod::default()).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let n = 1000;
        let age: Vec<f64> = (0..n).map(|i| 20.0 + (i % 120) as f64).collect();
        let top_height: Vec<f64> = (0..n).map(|i| 5.0 + (i % 25) as f64).collect();
        let species_code: Vec<i32> = (0..n).map(|i| (i % 4) as i32).collect(); // includes code 0

        let seq =
            compute_site_index(&age, &top_height, &species_code, SiteIndexMethod::TveiteBraastad)
                .unwrap();
        let par = compute_site_index_par(
            &age,
            &top_height,
            &species_code,
            SiteIndexMethod::TveiteBraastad,
        )
        .unwrap();
        assert_eq!(seq, par);
    }
}
