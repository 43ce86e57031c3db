//! 2D shapes and the collision predicates between them
//!
//! All predicates are pure and allocation free. There is no broad phase:
//! callers test the pairs they care about.

pub mod collision;
pub mod shapes;

pub use collision::{
    aabb_vs_aabb, aabb_vs_circle, circle_vs_aabb, circle_vs_circle, point_in_aabb,
    point_in_circle,
};
pub use shapes::{Aabb, Circle};
