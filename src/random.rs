//! Uniform random helpers
//!
//! Every draw goes through a seeded PCG generator owned by the caller, so
//! runs are reproducible when the seed is.

use std::f32::consts::PI;
use std::str::FromStr;

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::error::{ClibError, Result};
use crate::math::rad_to_vec;

/// Unit for [`Random::angle`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AngleUnit {
    #[default]
    Degrees,
    Radians,
}

impl AngleUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            AngleUnit::Degrees => "deg",
            AngleUnit::Radians => "rad",
        }
    }
}

impl FromStr for AngleUnit {
    type Err = ClibError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "d" | "deg" | "degrees" => Ok(AngleUnit::Degrees),
            "r" | "rad" | "radians" => Ok(AngleUnit::Radians),
            other => Err(ClibError::UnsupportedUnit(other.to_string())),
        }
    }
}

/// Random number source
#[derive(Debug, Clone)]
pub struct Random {
    rng: Pcg32,
}

impl Random {
    /// Deterministic generator for a given seed
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Generator seeded from the thread-local entropy source
    pub fn from_entropy() -> Self {
        Self {
            rng: Pcg32::from_rng(&mut rand::rng()),
        }
    }

    /// Uniform float in `[min, max)`
    pub fn range(&mut self, min: f32, max: f32) -> f32 {
        range_from_unit(self.rng.random::<f32>(), min, max)
    }

    /// Uniform float in `[0, max)`
    pub fn range_to(&mut self, max: f32) -> f32 {
        self.range(0.0, max)
    }

    /// `range` taking one (`max`) or two (`min, max`) positional values
    pub fn range_args(&mut self, args: &[f32]) -> Result<f32> {
        match *args {
            [max] => Ok(self.range_to(max)),
            [min, max] => Ok(self.range(min, max)),
            _ => Err(ClibError::ArgumentCount {
                min: 1,
                max: 2,
                got: args.len(),
            }),
        }
    }

    /// `floor(range(min, max))`
    ///
    /// Computed in double precision so `max` itself is never produced when
    /// `min < max`.
    pub fn int_range(&mut self, min: f32, max: f32) -> i32 {
        let (min, max) = (min as f64, max as f64);
        (self.unit() * (max - min) + min).floor() as i32
    }

    pub fn int_range_to(&mut self, max: f32) -> i32 {
        self.int_range(0.0, max)
    }

    /// Vector of magnitude `len` pointing in a uniformly chosen direction
    pub fn vector(&mut self, len: f32) -> Vec2 {
        let angle = self.range(-PI, PI);
        rad_to_vec(angle) * len
    }

    /// Uniform angle: `[0, 360)` degrees or `[-π, π)` radians
    pub fn angle(&mut self, unit: AngleUnit) -> f32 {
        match unit {
            AngleUnit::Degrees => self.range(0.0, 360.0),
            AngleUnit::Radians => self.range(-PI, PI),
        }
    }

    /// [`Random::angle`] with the unit given by name
    pub fn angle_str(&mut self, unit: &str) -> Result<f32> {
        Ok(self.angle(unit.parse()?))
    }

    #[inline]
    fn unit(&mut self) -> f64 {
        self.rng.random::<f64>()
    }
}

/// Map a unit draw `u` in `[0, 1)` onto `[min, max)`.
///
/// The f32 sum can round up to `max` when `u` is just below 1, so such results
/// are pulled back to the float just below `max`.
fn range_from_unit(u: f32, min: f32, max: f32) -> f32 {
    let value = u * (max - min) + min;
    if min < max && value >= max {
        return float_below(max).max(min);
    }
    value
}

/// Largest finite f32 strictly less than `x`
fn float_below(x: f32) -> f32 {
    if x == 0.0 {
        -f32::from_bits(1)
    } else if x > 0.0 {
        f32::from_bits(x.to_bits() - 1)
    } else {
        f32::from_bits(x.to_bits() + 1)
    }
}

impl Default for Random {
    fn default() -> Self {
        Self::from_entropy()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = Random::new(42);
        let mut b = Random::new(42);
        for _ in 0..10 {
            assert_eq!(a.range(0.0, 100.0), b.range(0.0, 100.0));
        }
    }

    #[test]
    fn test_range_bounds() {
        let mut rng = Random::new(1);
        for _ in 0..10_000 {
            let x = rng.range(-5.0, 5.0);
            assert!((-5.0..5.0).contains(&x));
            let y = rng.range_to(2.0);
            assert!((0.0..2.0).contains(&y));
        }
    }

    #[test]
    fn test_range_excludes_max_for_top_draw() {
        let top = 1.0 - f32::EPSILON / 2.0;
        assert!(range_from_unit(top, 1.0, 2.0) < 2.0);
        assert!(range_from_unit(top, 1.0, 2.0) >= 1.0);
        assert!(range_from_unit(top, -PI, PI) < PI);
        assert!(range_from_unit(top, 0.0, 360.0) < 360.0);
        assert!(range_from_unit(top, -3.0, 0.0) < 0.0);
        assert!(range_from_unit(top, 1000.0, 1000.5) < 1000.5);
        assert_eq!(range_from_unit(0.0, 1.0, 2.0), 1.0);
    }

    #[test]
    fn test_float_below() {
        assert!(float_below(2.0) < 2.0);
        assert_eq!(float_below(2.0).to_bits() + 1, 2.0f32.to_bits());
        assert!(float_below(-2.0) < -2.0);
        assert!(float_below(0.0) < 0.0);
    }

    #[test]
    fn test_range_args_arity() {
        let mut rng = Random::new(1);
        assert!(rng.range_args(&[3.0]).unwrap() < 3.0);
        let v = rng.range_args(&[10.0, 11.0]).unwrap();
        assert!((10.0..11.0).contains(&v));
        assert_eq!(
            rng.range_args(&[]),
            Err(ClibError::ArgumentCount { min: 1, max: 2, got: 0 })
        );
        assert!(rng.range_args(&[1.0, 2.0, 3.0]).is_err());
    }

    #[test]
    fn test_int_range_never_hits_max() {
        let mut rng = Random::new(7);
        for _ in 0..10_000 {
            let n = rng.int_range(0.0, 10.0);
            assert!((0..10).contains(&n), "got {}", n);
        }
        for _ in 0..1_000 {
            assert!((0..3).contains(&rng.int_range_to(3.0)));
        }
    }

    #[test]
    fn test_vector_length() {
        let mut rng = Random::new(3);
        for _ in 0..100 {
            assert!((rng.vector(1.0).length() - 1.0).abs() < 1e-5);
            assert!((rng.vector(4.0).length() - 4.0).abs() < 1e-4);
        }
    }

    #[test]
    fn test_vector_directions_cover_all_quadrants() {
        let mut rng = Random::new(11);
        let mut quadrants = [false; 4];
        for _ in 0..1_000 {
            let v = rng.vector(1.0);
            let q = match (v.x >= 0.0, v.y >= 0.0) {
                (true, true) => 0,
                (false, true) => 1,
                (false, false) => 2,
                (true, false) => 3,
            };
            quadrants[q] = true;
        }
        assert!(quadrants.iter().all(|&q| q));
    }

    #[test]
    fn test_angle_units() {
        let mut rng = Random::new(5);
        for _ in 0..1_000 {
            let d = rng.angle(AngleUnit::Degrees);
            assert!((0.0..360.0).contains(&d));
            let r = rng.angle(AngleUnit::Radians);
            assert!((-PI..PI).contains(&r));
        }
        assert!(rng.angle_str("radians").unwrap() < PI);
        assert!(rng.angle_str("d").is_ok());
        assert_eq!(
            rng.angle_str("grad"),
            Err(ClibError::UnsupportedUnit("grad".into()))
        );
    }
}
