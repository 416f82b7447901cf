use crate::error::Result;
use crate::math::measure_2d::Aabb;
use crate::math::{Point2, Vector2};

use super::{unit_tangent, Curve};

/// A straight line segment between two points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSegment {
    a: Point2,
    b: Point2,
}

impl LineSegment {
    #[must_use]
    pub fn new(a: Point2, b: Point2) -> Self {
        Self { a, b }
    }

    #[must_use]
    pub fn a(&self) -> Point2 {
        self.a
    }

    #[must_use]
    pub fn b(&self) -> Point2 {
        self.b
    }

    pub fn set_a(&mut self, a: Point2) {
        self.a = a;
    }

    pub fn set_b(&mut self, b: Point2) {
        self.b = b;
    }

    /// The unnormalized direction vector `b - a`.
    #[must_use]
    pub fn direction(&self) -> Vector2 {
        self.b - self.a
    }
}

impl Curve for LineSegment {
    fn start(&self) -> Point2 {
        self.a
    }

    fn end(&self) -> Point2 {
        self.b
    }

    fn point_at(&self, t: f64) -> Point2 {
        Point2::new(
            self.a.x + t * (self.b.x - self.a.x),
            self.a.y + t * (self.b.y - self.a.y),
        )
    }

    fn tangent(&self, _t: f64) -> Result<Vector2> {
        unit_tangent(self.direction())
    }

    fn length(&self) -> f64 {
        self.direction().norm()
    }

    fn bounds(&self) -> Aabb {
        Aabb::new(self.a, self.b)
    }
}
