use std::cell::OnceCell;

use crate::error::Result;
use crate::math::measure_2d::{curve_length, Aabb};
use crate::math::{Point2, Vector2};

use super::{
    align_points, derive_points, directions_within_simple_bound, extrema_values, hull_points,
    reduce_segments, signed_angle, unit_normal, unit_tangent, Curve, Reducible, Subcurve,
};

/// A cubic Bézier segment with control polygon `a`, `b`, `c`, `d`.
///
/// All derived quantities are pure functions of the control points,
/// memoized per instance; mutating a control point resets the memo.
#[derive(Debug, Clone)]
pub struct CubicBezier {
    a: Point2,
    b: Point2,
    c: Point2,
    d: Point2,
    cache: CubicCache,
}

#[derive(Debug, Clone, Default)]
struct CubicCache {
    derivative: OnceCell<Vec<Vec<Vector2>>>,
    extrema: OnceCell<Vec<f64>>,
    inflections: OnceCell<Vec<f64>>,
    length: OnceCell<f64>,
    bounds: OnceCell<Aabb>,
}

impl PartialEq for CubicBezier {
    fn eq(&self, other: &Self) -> bool {
        self.a == other.a && self.b == other.b && self.c == other.c && self.d == other.d
    }
}

impl CubicBezier {
    #[must_use]
    pub fn new(a: Point2, b: Point2, c: Point2, d: Point2) -> Self {
        Self {
            a,
            b,
            c,
            d,
            cache: CubicCache::default(),
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

    #[must_use]
    pub fn d(&self) -> Point2 {
        self.d
    }

    pub fn set_a(&mut self, a: Point2) {
        self.a = a;
        self.cache = CubicCache::default();
    }

    pub fn set_b(&mut self, b: Point2) {
        self.b = b;
        self.cache = CubicCache::default();
    }

    pub fn set_c(&mut self, c: Point2) {
        self.c = c;
        self.cache = CubicCache::default();
    }

    pub fn set_d(&mut self, d: Point2) {
        self.d = d;
        self.cache = CubicCache::default();
    }

    #[must_use]
    pub fn points(&self) -> [Point2; 4] {
        [self.a, self.b, self.c, self.d]
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
        let mt = 1.0 - t;
        d[0] * (mt * mt) + d[1] * (2.0 * mt * t) + d[2] * (t * t)
    }

    /// Second derivative at `t`.
    #[must_use]
    pub fn second_derivative_at(&self, t: f64) -> Vector2 {
        let d = &self.derivative_points()[1];
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

    /// First- and second-derivative roots of both axes in `[0, 1]`,
    /// sorted ascending.
    #[must_use]
    pub fn extrema(&self) -> &[f64] {
        self.cache
            .extrema
            .get_or_init(|| extrema_values(self.derivative_points()))
    }

    /// Curvature-sign changes in `[0, 1]`.
    ///
    /// Solves the quadratic derived from the chord-aligned control
    /// polygon; empty when the leading coefficient is near zero.
    #[must_use]
    pub fn inflections(&self) -> &[f64] {
        self.cache.inflections.get_or_init(|| {
            let p = align_points(&self.points(), &self.a, &self.d);
            let a = p[2].x * p[1].y;
            let b = p[3].x * p[1].y;
            let c = p[1].x * p[2].y;
            let d = p[3].x * p[2].y;
            let v1 = 18.0 * (-3.0 * a + 2.0 * b + 3.0 * c - d);
            let v2 = 18.0 * (3.0 * a - b - 3.0 * c);
            let v3 = 18.0 * (c - a);

            if v1.abs() < 1e-6 {
                return Vec::new();
            }
            let trm = v2 * v2 - 4.0 * v1 * v3;
            if trm < 0.0 {
                return Vec::new();
            }
            let sq = trm.sqrt();
            let d2 = 2.0 * v1;
            let mut out: Vec<f64> = [(sq - v2) / d2, -(v2 + sq) / d2]
                .into_iter()
                .filter(|t| (0.0..=1.0).contains(t))
                .collect();
            crate::math::roots::sort_dedup(&mut out, 1e-9);
            out
        })
    }

    /// A cubic is simple when both off-curve handles lie on the same side
    /// of the chord (no S-shape) and the start/end tangents stay within
    /// the 60° rotation bound.
    #[must_use]
    pub fn is_simple(&self) -> bool {
        let a1 = signed_angle(&self.a, &self.d, &self.b);
        let a2 = signed_angle(&self.a, &self.d, &self.c);
        if (a1 > 0.0 && a2 < 0.0) || (a1 < 0.0 && a2 > 0.0) {
            return false;
        }
        directions_within_simple_bound(&self.derivative_at(0.0), &self.derivative_at(1.0))
    }

    /// De Casteljau expansion at `t`: 4 control points, 3 + 2 interpolant
    /// levels, and the point on the curve (10 points).
    #[must_use]
    pub fn hull(&self, t: f64) -> Vec<Point2> {
        hull_points(&self.points(), t)
    }

    /// Splits at `t` into two cubic segments covering `[0, t]` and
    /// `[t, 1]`.
    #[must_use]
    pub fn split(&self, t: f64) -> (Self, Self) {
        let q = self.hull(t);
        (
            Self::new(q[0], q[4], q[7], q[9]),
            Self::new(q[9], q[8], q[6], q[3]),
        )
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

impl Reducible for CubicBezier {
    fn portion(&self, t1: f64, t2: f64) -> Self {
        Self::portion(self, t1, t2)
    }

    fn is_simple(&self) -> bool {
        Self::is_simple(self)
    }
}

impl Curve for CubicBezier {
    fn start(&self) -> Point2 {
        self.a
    }

    fn end(&self) -> Point2 {
        self.d
    }

    fn point_at(&self, t: f64) -> Point2 {
        if t == 0.0 {
            return self.a;
        }
        if t == 1.0 {
            return self.d;
        }
        let mt = 1.0 - t;
        let mt2 = mt * mt;
        let t2 = t * t;
        let w0 = mt2 * mt;
        let w1 = 3.0 * mt2 * t;
        let w2 = 3.0 * mt * t2;
        let w3 = t * t2;
        Point2::new(
            w0 * self.a.x + w1 * self.b.x + w2 * self.c.x + w3 * self.d.x,
            w0 * self.a.y + w1 * self.b.y + w2 * self.c.y + w3 * self.d.y,
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
            let mut bb = Aabb::new(self.a, self.d);
            for &t in self.extrema() {
                bb.expand(&self.point_at(t));
            }
            bb
        })
    }
}
