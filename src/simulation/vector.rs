//! Normalization policy for `NVec2`.
//!
//! nalgebra already provides add/sub/scale/`norm`; the sandbox keeps its own
//! normalization rule: a vector whose magnitude is exactly 1 maps to zero,
//! anything else is scaled by `1 / magnitude` (so the zero vector gives NaN).

use super::states::NVec2;

pub fn magnitude(v: &NVec2) -> f64 {
    v.norm()
}

pub fn normalized(v: &NVec2) -> NVec2 {
    let mag = magnitude(v);
    if mag != 1.0 {
        v * (1.0 / mag)
    } else {
        NVec2::zeros()
    }
}
