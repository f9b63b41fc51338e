//! Sharma–Brunner site index curves for Norway spruce and Scots pine.
//!
//! Generalized algebraic difference (GADA) form fitted to Norwegian
//! National Forest Inventory data (Sharma et al. 2011). Both species share
//! one functional form and differ only in their `(b1, b2, b3)` parameter
//! set. Birch under this method uses the Eriksson model instead (see
//! [`super::eriksson`]).

use libm::{pow, sqrt};

use super::{BREAST_HEIGHT_M, REFERENCE_AGE};

/// GADA parameter set for one species.
#[derive(Debug, Clone, Copy)]
pub struct GadaParams {
    pub b1: f64,
    pub b2: f64,
    pub b3: f64,
}

/// Norway spruce (Picea abies).
pub const SPRUCE: GadaParams = GadaParams {
    b1: 18.9206,
    b2: 5175.18,
    b3: 1.1576,
};

/// Scots pine (Pinus sylvestris).
pub const PINE: GadaParams = GadaParams {
    b1: 12.8361,
    b2: 3263.99,
    b3: 1.1758,
};

/// Site index [m] at the reference age.
///
/// `age` is breast-height age [years], `h` top height above breast height
/// [m]. `age <= 0` drives `age^(-b3)` out of the real domain and `h = 0`
/// sends the solved site-specific parameter `r` to zero; both surface as
/// NaN/infinity rather than a panic.
pub fn site_index(age: f64, h: f64, p: &GadaParams) -> f64 {
    let hb = h - p.b1;
    let r = 0.5 * (hb + sqrt(hb * hb + 4.0 * p.b2 * h * pow(age, -p.b3)));
    (p.b1 + r) / (1.0 + (p.b2 / r) * pow(REFERENCE_AGE, -p.b3)) + BREAST_HEIGHT_M
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    // Reference values computed independently in double precision from the
    // published equation.

    #[test]
    fn test_spruce_matches_reference_curve() {
        assert_relative_eq!(site_index(40.0, 20.0 - 1.3, &SPRUCE), 20.0, epsilon = 1e-6);
        assert_relative_eq!(
            site_index(80.0, 25.0 - 1.3, &SPRUCE),
            15.776238127343722,
            epsilon = 1e-6
        );
    }

    #[test]
    fn test_pine_matches_reference_curve() {
        assert_relative_eq!(site_index(40.0, 18.0 - 1.3, &PINE), 18.0, epsilon = 1e-6);
        assert_relative_eq!(
            site_index(60.0, 15.0 - 1.3, &PINE),
            11.433770487256176,
            epsilon = 1e-6
        );
    }

    #[test]
    fn test_site_index_equals_top_height_at_reference_age() {
        // At age 40 the curve passes through the observation itself.
        for top_height in [12.0, 17.5, 23.0] {
            let h = top_height - 1.3;
            assert_relative_eq!(site_index(40.0, h, &SPRUCE), top_height, epsilon = 1e-9);
            assert_relative_eq!(site_index(40.0, h, &PINE), top_height, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_nonpositive_age_is_not_finite() {
        assert!(!site_index(0.0, 18.7, &SPRUCE).is_finite());
        assert!(site_index(-5.0, 18.7, &PINE).is_nan());
    }
}
