//! Circle and axis-aligned box value types

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// A circle given by its center and radius
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub x: f32,
    pub y: f32,
    /// Expected to be >= 0
    pub radius: f32,
}

impl Circle {
    pub fn new(x: f32, y: f32, radius: f32) -> Self {
        Self { x, y, radius }
    }

    pub fn from_center(center: Vec2, radius: f32) -> Self {
        Self::new(center.x, center.y, radius)
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

/// Axis-aligned box; `x, y` is the top-left corner
///
/// Width and height should be non-negative for the predicates to mean
/// anything. This is not checked.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Aabb {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Corners clockwise from the top-left
    pub fn corners(&self) -> [Vec2; 4] {
        [
            Vec2::new(self.left(), self.top()),
            Vec2::new(self.right(), self.top()),
            Vec2::new(self.right(), self.bottom()),
            Vec2::new(self.left(), self.bottom()),
        ]
    }

    /// Grow the box by `dx` on the left and right and by `dy` on the top and bottom
    pub fn expanded(&self, dx: f32, dy: f32) -> Self {
        Self::new(
            self.x - dx,
            self.y - dy,
            self.width + 2.0 * dx,
            self.height + 2.0 * dy,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aabb_edges_and_corners() {
        let b = Aabb::new(10.0, 20.0, 30.0, 40.0);
        assert_eq!(b.right(), 40.0);
        assert_eq!(b.bottom(), 60.0);
        assert_eq!(
            b.corners(),
            [
                Vec2::new(10.0, 20.0),
                Vec2::new(40.0, 20.0),
                Vec2::new(40.0, 60.0),
                Vec2::new(10.0, 60.0),
            ]
        );
    }

    #[test]
    fn test_aabb_expanded() {
        let b = Aabb::new(0.0, 0.0, 10.0, 10.0).expanded(2.0, 0.0);
        assert_eq!(b, Aabb::new(-2.0, 0.0, 14.0, 10.0));
    }

    #[test]
    fn test_circle_center() {
        let c = Circle::from_center(Vec2::new(3.0, 4.0), 1.0);
        assert_eq!(c.center(), Vec2::new(3.0, 4.0));
        assert_eq!(c.radius, 1.0);
    }
}
