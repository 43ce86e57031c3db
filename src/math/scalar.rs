//! Scalar helpers

use std::f32::consts::PI;

/// Returns `min` if `x < min`, `max` if `x > max`, else `x`
///
/// Unlike `f32::clamp` this never panics when `min > max`.
#[inline]
pub fn clamp(x: f32, min: f32, max: f32) -> f32 {
    if x < min {
        min
    } else if x > max {
        max
    } else {
        x
    }
}

#[inline]
pub fn deg_to_rad(deg: f32) -> f32 {
    deg * (PI / 180.0)
}

#[inline]
pub fn rad_to_deg(rad: f32) -> f32 {
    rad * (180.0 / PI)
}

/// Linear interpolation from `a` to `b`
///
/// `t` is clamped to `[0, 1]` unless `allow_extrapolation` is set.
#[inline]
pub fn lerp(a: f32, b: f32, t: f32, allow_extrapolation: bool) -> f32 {
    let t = if allow_extrapolation {
        t
    } else {
        clamp(t, 0.0, 1.0)
    };
    a + t * (b - a)
}
