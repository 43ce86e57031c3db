//! Collision predicates for circles, boxes and points
//!
//! Circles are boundary inclusive, boxes are boundary exclusive. Callers rely
//! on that difference, so keep it.

use glam::Vec2;

use super::shapes::{Aabb, Circle};
use crate::math::distance;

/// Circles overlap or touch
#[inline]
pub fn circle_vs_circle(a: &Circle, b: &Circle) -> bool {
    distance(a.center(), b.center()) <= a.radius + b.radius
}

/// Separating-axis test; boxes that only share an edge do not overlap
#[inline]
pub fn aabb_vs_aabb(a: &Aabb, b: &Aabb) -> bool {
    a.left() < b.right() && a.right() > b.left() && a.top() < b.bottom() && a.bottom() > b.top()
}

/// Point inside or on the circle
#[inline]
pub fn point_in_circle(circle: &Circle, point: Vec2) -> bool {
    distance(circle.center(), point) <= circle.radius
}

/// Point strictly inside the box
#[inline]
pub fn point_in_aabb(aabb: &Aabb, point: Vec2) -> bool {
    point.x > aabb.left() && point.x < aabb.right() && point.y > aabb.top() && point.y < aabb.bottom()
}

/// Exact circle vs box test, split into regions of the Minkowski sum.
///
/// The circle overlaps the box when its center lies strictly inside the box
/// widened by the radius on either axis, or within the radius of a corner.
pub fn circle_vs_aabb(circle: &Circle, aabb: &Aabb) -> bool {
    let center = circle.center();
    let r = circle.radius;

    let widened = aabb.expanded(r, 0.0);
    let heightened = aabb.expanded(0.0, r);
    if point_in_aabb(&widened, center) || point_in_aabb(&heightened, center) {
        return true;
    }

    aabb.corners()
        .iter()
        .any(|&corner| point_in_circle(&Circle::from_center(corner, r), center))
}

/// Argument-swapped [`circle_vs_aabb`]
#[inline]
pub fn aabb_vs_circle(aabb: &Aabb, circle: &Circle) -> bool {
    circle_vs_aabb(circle, aabb)
}
