//! Vector helpers over `glam::Vec2`
//!
//! Each function returns a new vector; inputs are never mutated.

use glam::Vec2;

use super::scalar;

#[inline]
pub fn add(a: Vec2, b: Vec2) -> Vec2 {
    Vec2::new(a.x + b.x, a.y + b.y)
}

#[inline]
pub fn scale(v: Vec2, k: f32) -> Vec2 {
    Vec2::new(v.x * k, v.y * k)
}

/// `v / divisor`; a zero divisor gives non-finite components
#[inline]
pub fn divide(v: Vec2, divisor: f32) -> Vec2 {
    scale(v, 1.0 / divisor)
}

#[inline]
pub fn length(v: Vec2) -> f32 {
    (v.x * v.x + v.y * v.y).sqrt()
}

#[inline]
pub fn distance(a: Vec2, b: Vec2) -> f32 {
    length((a - b).abs())
}

/// Unit vector in the direction of `v`, or the zero vector when `v` has no length
pub fn normalize(v: Vec2) -> Vec2 {
    let len = length(v);
    if len == 0.0 {
        return Vec2::ZERO;
    }
    divide(v, len)
}

/// Componentwise lerp, see [`scalar::lerp`]
pub fn lerp_vec(a: Vec2, b: Vec2, t: f32, allow_extrapolation: bool) -> Vec2 {
    Vec2::new(
        scalar::lerp(a.x, b.x, t, allow_extrapolation),
        scalar::lerp(a.y, b.y, t, allow_extrapolation),
    )
}

#[inline]
pub fn rad_to_vec(rad: f32) -> Vec2 {
    Vec2::new(rad.cos(), rad.sin())
}

#[inline]
pub fn deg_to_vec(deg: f32) -> Vec2 {
    rad_to_vec(scalar::deg_to_rad(deg))
}

#[inline]
pub fn vec_to_rad(v: Vec2) -> f32 {
    v.y.atan2(v.x)
}

#[inline]
pub fn vec_to_deg(v: Vec2) -> f32 {
    scalar::rad_to_deg(vec_to_rad(v))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    fn approx(a: Vec2, b: Vec2) -> bool {
        (a - b).length() < 1e-5
    }

    #[test]
    fn test_arithmetic() {
        let a = Vec2::new(1.0, 2.0);
        let b = Vec2::new(3.0, -4.0);
        assert_eq!(add(a, b), Vec2::new(4.0, -2.0));
        assert_eq!(scale(a, 3.0), Vec2::new(3.0, 6.0));
        assert_eq!(divide(Vec2::new(4.0, 8.0), 4.0), Vec2::new(1.0, 2.0));
        assert_eq!(length(Vec2::new(3.0, 4.0)), 5.0);
        assert_eq!(distance(Vec2::new(1.0, 1.0), Vec2::new(4.0, 5.0)), 5.0);
        assert_eq!(distance(Vec2::new(4.0, 5.0), Vec2::new(1.0, 1.0)), 5.0);
    }

    #[test]
    fn test_normalize() {
        assert!(approx(normalize(Vec2::new(10.0, 0.0)), Vec2::X));
        assert!((length(normalize(Vec2::new(3.0, -7.0))) - 1.0).abs() < 1e-6);
        assert_eq!(normalize(Vec2::ZERO), Vec2::ZERO);
    }

    #[test]
    fn test_lerp_vec() {
        let a = Vec2::new(0.0, 10.0);
        let b = Vec2::new(10.0, 20.0);
        assert_eq!(lerp_vec(a, b, 0.0, false), a);
        assert_eq!(lerp_vec(a, b, 1.0, false), b);
        assert_eq!(lerp_vec(a, b, 2.0, false), b);
        assert_eq!(lerp_vec(a, b, 2.0, true), a + 2.0 * (b - a));
    }

    #[test]
    fn test_angle_vectors() {
        assert!(approx(rad_to_vec(0.0), Vec2::X));
        assert!(approx(rad_to_vec(PI / 2.0), Vec2::Y));
        assert!(approx(deg_to_vec(180.0), -Vec2::X));
        assert!((vec_to_rad(Vec2::Y) - PI / 2.0).abs() < 1e-6);
        assert!((vec_to_deg(Vec2::new(-1.0, 0.0)) - 180.0).abs() < 1e-4);
        assert!((vec_to_deg(deg_to_vec(-45.0)) + 45.0).abs() < 1e-4);
    }
}
