//! Eriksson birch site index curves.
//!
//! Birch (Betula pendula / B. pubescens) model from Eriksson et al.
//! (1997). Both supported methods use this model for birch rows, so birch
//! results are method-invariant.

use libm::{pow, sqrt};

use super::{BREAST_HEIGHT_M, REFERENCE_AGE};

const B1: f64 = 394.0;
const B2: f64 = 1.387;
/// Anchor height class of the published curves.
const K: f64 = 7.0;

/// Birch site index [m] at the reference age.
///
/// `age` is breast-height age [years], `h` top height above breast height
/// [m]. Requires `age > 0` for the real-valued power; violations surface
/// as NaN/infinity.
pub fn birch(age: f64, h: f64) -> f64 {
    let d1 = B1 / pow(K, B2);
    let hd = h - d1;
    let r1 = sqrt(hd * hd + 4.0 * B1 * h / pow(age, B2));
    (h + d1 + r1) / (2.0 + 4.0 * B1 * pow(REFERENCE_AGE, -B2) / (hd + r1)) + BREAST_HEIGHT_M
}
