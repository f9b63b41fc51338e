//! Tveite spruce and Braastad pine site index curves.
//!
//! Difference models from Tveite (1977) for Norway spruce and Braastad
//! (1980) for Scots pine: the observed top height is compared against a
//! guide curve (H17 for spruce, H14 for pine) and the deviation is scaled
//! by an age-dependent spread polynomial `diff`. Past the oldest fitted
//! age the spread is held at its plateau value.

use libm::{exp, pow};

use super::BREAST_HEIGHT_M;

// Oldest fitted ages; beyond them `diff` is a constant.
const SPRUCE_PLATEAU_AGE: f64 = 100.0;
const SPRUCE_PLATEAU_DIFF: f64 = 3.755;
const PINE_PLATEAU_AGE: f64 = 119.0;
const PINE_PLATEAU_DIFF: f64 = 3.913;

/// Norway spruce site index [m], Tveite (1977).
pub fn spruce(age: f64, h: f64) -> f64 {
    let a = (age - 40.0) / 10.0;
    let a2 = a * a;
    let a3 = a2 * a;
    let a4 = a3 * a;
    let a5 = a4 * a;

    let diff = if age > SPRUCE_PLATEAU_AGE {
        SPRUCE_PLATEAU_DIFF
    } else {
        3.0 + 0.40183 * a - 0.104701 * a2 + 0.679104 * a3 / 100.0 + 0.184402 * a4 / 100.0
            - 0.224249 * a5 / 1000.0
    };

    // H17 guide curve: height above breast height of an SI 17 stand.
    let b = age * 0.1 + 0.55;
    let h17 = pow(b / (0.430606 + 0.164818 * b), 2.1);

    17.0 + 3.0 * ((h - h17) / diff) + BREAST_HEIGHT_M
}

/// Scots pine site index [m], Braastad (1980).
pub fn pine(age: f64, h: f64) -> f64 {
    let a = (age - 40.0) / 10.0;
    let a2 = a * a;
    let a3 = a2 * a;
    let a4 = a3 * a;

    let diff = if age > PINE_PLATEAU_AGE {
        PINE_PLATEAU_DIFF
    } else {
        3.0 + 0.394624 * a - 0.0649695 * a2 + 0.487394 * a3 / 100.0 - 0.141827 * a4 / 1000.0
    };

    // H14 guide curve: total height of an SI 14 stand.
    let h14 = 1.3 + 24.7 * pow(1.0 - exp(-0.02105 * age), 1.18029);

    14.0 + 3.0 * ((h - h14) / diff) + BREAST_HEIGHT_M
}
