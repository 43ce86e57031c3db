//! Stateless math helpers
//!
//! - `scalar`: clamp, degree/radian conversion, lerp
//! - `vector`: `Vec2` arithmetic and angle/vector conversions

pub mod scalar;
pub mod vector;

pub use scalar::{clamp, deg_to_rad, lerp, rad_to_deg};
pub use vector::{
    add, deg_to_vec, distance, divide, lerp_vec, length, normalize, rad_to_vec, scale,
    vec_to_deg, vec_to_rad,
};
