use std::cell::OnceCell;

use crate::error::Result;
use crate::math::measure_2d::{curve_length, Aabb};
use crate::math::{Point2, Vector2};

use super::{
    derive_points, directions_within_simple_bound, extrema_values, hull_points, reduce_segments,
    unit_normal, unit_tangent, Curve, Reducible, Subcurve,
};

/// A quadratic Bézier segment with control polygon `a`, `b`, `c`.
///
/// All derived quantities are pure functions of the control points,
/// memoized per instance; mutating a control point resets the memo.
#[derive(Debug, Clone)]
pub struct QuadraticBezier {
    a: Point2,
    b: Point2,
    c: Point2,
    cache: QuadCache,
}

#[derive(Debug, Clone, Default)]
struct QuadCache {
    derivative: OnceCell<Vec<Vec<Vector2>>>,
    extrema: OnceCell<Vec<f64>>,
    length: OnceCell<f64>,
    bounds: OnceCell<Aabb>,
}

impl PartialEq for QuadraticBezier {
    fn eq(&self, other: &Self) -> bool {
        self.a == other.a && self.b == other.b && self.c == other.c
    }
}

impl QuadraticBezier {
    #[must_use]
    pub fn new(a: Point2, b: Point2, c: Point2) -> Self {
        Self {
            a,
            b,
            c,
            cache: QuadCache::default(),
        }
    }

    #[must_use]
    pub fn a(&self) -> Point2 {
        self.a
    }

    #[must_use]
    pub fn b(&self) -> Point2 {
        self.b
    }

    #[must_use]
    pub fn c(&self) -> Point2 {
        self.c
    }

    pub fn set_a(&mut self, a: Point2) {
        self.a = a;
        self.cache = QuadCache::default();
    }

    pub fn set_b(&mut self, b: Point2) {
        self.b = b;
        self.cache = QuadCache::default();
    }

    pub fn set_c(&mut self, c: Point2) {
        self.c = c;
        self.cache = QuadCache::default();
    }

    #[must_use]
    pub fn points(&self) -> [Point2; 3] {
        [self.a, self.b, self.c]
    }

    /// The chain of successively-differenced control polygons.
    #[must_use]
    pub fn derivative_points(&self) -> &[Vec<Vector2>] {
        self.cache
            .derivative
            .get_or_init(|| derive_points(&self.points()))
    }

    /// First derivative at `t`.
    #[must_use]
    pub fn derivative_at(&self, t: f64) -> Vector2 {
        let d = &self.derivative_points()[0];
        d[0].lerp(&d[1], t)
    }

    /// Unit tangent at `t`.
    ///
    /// # Errors
    ///
    /// Returns an error if the derivative vanishes at `t`.
    pub fn tangent_at(&self, t: f64) -> Result<Vector2> {
        unit_tangent(self.derivative_at(t))
    }

    /// Unit normal at `t` (tangent rotated a quarter turn CCW).
    ///
    /// # Errors
    ///
    /// Returns an error if the derivative vanishes at `t`.
    pub fn normal_at(&self, t: f64) -> Result<Vector2> {
        unit_normal(self.derivative_at(t))
    }

    /// Derivative roots of both axes in `[0, 1]`, sorted ascending.
    #[must_use]
    pub fn extrema(&self) -> &[f64] {
        self.cache
            .extrema
            .get_or_init(|| extrema_values(self.derivative_points()))
    }

    /// A quadratic is simple when its start and end tangents stay within
    /// the 60° rotation bound.
    #[must_use]
    pub fn is_simple(&self) -> bool {
        directions_within_simple_bound(&self.derivative_at(0.0), &self.derivative_at(1.0))
    }

    /// De Casteljau expansion at `t`: the 3 control points, the 2
    /// first-level interpolants, and the point on the curve (6 points).
    #[must_use]
    pub fn hull(&self, t: f64) -> Vec<Point2> {
        hull_points(&self.points(), t)
    }

    /// Splits at `t` into two quadratic segments covering `[0, t]` and
    /// `[t, 1]`.
    #[must_use]
    pub fn split(&self, t: f64) -> (Self, Self) {
        let q = self.hull(t);
        (Self::new(q[0], q[3], q[5]), Self::new(q[5], q[4], q[2]))
    }

    /// The sub-curve over `[t1, t2]` reparameterized to `[0, 1]`.
    #[must_use]
    pub fn portion(&self, t1: f64, t2: f64) -> Self {
        if t1 == 0.0 {
            if t2 == 1.0 {
                return self.clone();
            }
            return self.split(t2).0;
        }
        let right = self.split(t1).1;
        if t2 == 1.0 {
            return right;
        }
        right.split((t2 - t1) / (1.0 - t1)).0
    }

    /// Splits into simple sub-curves; empty when unreducible.
    #[must_use]
    pub fn reduce(&self) -> Vec<Subcurve<Self>> {
        reduce_segments(self, self.extrema())
    }
}

impl Reducible for QuadraticBezier {
    fn portion(&self, t1: f64, t2: f64) -> Self {
        Self::portion(self, t1, t2)
    }

    fn is_simple(&self) -> bool {
        Self::is_simple(self)
    }
}

impl Curve for QuadraticBezier {
    fn start(&self) -> Point2 {
        self.a
    }

    fn end(&self) -> Point2 {
        self.c
    }

    fn point_at(&self, t: f64) -> Point2 {
        if t == 0.0 {
            return self.a;
        }
        if t == 1.0 {
            return self.c;
        }
        let mt = 1.0 - t;
        let w0 = mt * mt;
        let w1 = 2.0 * mt * t;
        let w2 = t * t;
        Point2::new(
            w0 * self.a.x + w1 * self.b.x + w2 * self.c.x,
            w0 * self.a.y + w1 * self.b.y + w2 * self.c.y,
        )
    }

    fn tangent(&self, t: f64) -> Result<Vector2> {
        self.tangent_at(t)
    }

    fn length(&self) -> f64 {
        *self
            .cache
            .length
            .get_or_init(|| curve_length(|t| self.derivative_at(t)))
    }

    fn bounds(&self) -> Aabb {
        *self.cache.bounds.get_or_init(|| {
            let mut bb = Aabb::new(self.a, self.c);
            for &t in self.extrema() {
                bb.expand(&self.point_at(t));
            }
            bb
        })
    }
}
