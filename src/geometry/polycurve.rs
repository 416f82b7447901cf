use std::cell::OnceCell;

use crate::error::{GeometryError, Result};
use crate::math::measure_2d::Aabb;
use crate::math::{Point2, Vector2};

use super::curve::{CubicBezier, Curve, EllipticalArc, LineSegment, QuadraticBezier};

/// One segment of a composite path.
#[derive(Debug, Clone, PartialEq)]
pub enum PathSegment {
    Line(LineSegment),
    Arc(EllipticalArc),
    Quadratic(QuadraticBezier),
    Cubic(CubicBezier),
}

impl Curve for PathSegment {
    fn start(&self) -> Point2 {
        match self {
            Self::Line(s) => s.start(),
            Self::Arc(s) => s.start(),
            Self::Quadratic(s) => s.start(),
            Self::Cubic(s) => s.start(),
        }
    }

    fn end(&self) -> Point2 {
        match self {
            Self::Line(s) => s.end(),
            Self::Arc(s) => s.end(),
            Self::Quadratic(s) => s.end(),
            Self::Cubic(s) => s.end(),
        }
    }

    fn point_at(&self, t: f64) -> Point2 {
        match self {
            Self::Line(s) => s.point_at(t),
            Self::Arc(s) => s.point_at(t),
            Self::Quadratic(s) => s.point_at(t),
            Self::Cubic(s) => s.point_at(t),
        }
    }

    fn tangent(&self, t: f64) -> Result<Vector2> {
        match self {
            Self::Line(s) => s.tangent(t),
            Self::Arc(s) => s.tangent(t),
            Self::Quadratic(s) => s.tangent(t),
            Self::Cubic(s) => s.tangent(t),
        }
    }

    fn length(&self) -> f64 {
        match self {
            Self::Line(s) => s.length(),
            Self::Arc(s) => s.length(),
            Self::Quadratic(s) => s.length(),
            Self::Cubic(s) => s.length(),
        }
    }

    fn bounds(&self) -> Aabb {
        match self {
            Self::Line(s) => s.bounds(),
            Self::Arc(s) => s.bounds(),
            Self::Quadratic(s) => s.bounds(),
            Self::Cubic(s) => s.bounds(),
        }
    }
}

/// An ordered chain of heterogeneous curve segments.
///
/// Every appended segment starts at the current tail, so consecutive
/// segments always connect. The whole-path arc length and cumulative
/// length table are computed lazily and reset on mutation.
#[derive(Debug, Clone)]
pub struct Polycurve {
    start: Point2,
    segments: Vec<PathSegment>,
    closed: bool,
    cache: PathCache,
}

#[derive(Debug, Clone, Default)]
struct PathCache {
    cumulative: OnceCell<Vec<f64>>,
}

impl PartialEq for Polycurve {
    fn eq(&self, other: &Self) -> bool {
        self.start == other.start && self.segments == other.segments && self.closed == other.closed
    }
}

impl Polycurve {
    /// Creates an empty path anchored at `start`.
    #[must_use]
    pub fn new(start: Point2) -> Self {
        Self {
            start,
            segments: Vec::new(),
            closed: false,
            cache: PathCache::default(),
        }
    }

    /// The anchor point the path begins at.
    #[must_use]
    pub fn start(&self) -> Point2 {
        self.start
    }

    /// The current tail: the end of the last segment, or the anchor for an
    /// empty path.
    #[must_use]
    pub fn tail(&self) -> Point2 {
        self.segments.last().map_or(self.start, Curve::end)
    }

    #[must_use]
    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    #[must_use]
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    fn push(&mut self, segment: PathSegment) {
        self.segments.push(segment);
        self.cache = PathCache::default();
    }

    /// Appends a straight segment from the tail to `p`.
    pub fn add_line_to(&mut self, p: Point2) {
        let tail = self.tail();
        self.push(PathSegment::Line(LineSegment::new(tail, p)));
    }

    /// Appends an elliptical arc from the tail to `end`.
    pub fn add_arc_to(
        &mut self,
        rx: f64,
        ry: f64,
        x_rotation: f64,
        large_arc: bool,
        sweep: bool,
        end: Point2,
    ) {
        let tail = self.tail();
        self.push(PathSegment::Arc(EllipticalArc::new(
            tail, end, rx, ry, x_rotation, large_arc, sweep,
        )));
    }

    /// Appends a quadratic Bézier from the tail to `end`.
    pub fn add_quadratic_to(&mut self, control: Point2, end: Point2) {
        let tail = self.tail();
        self.push(PathSegment::Quadratic(QuadraticBezier::new(
            tail, control, end,
        )));
    }

    /// Appends a cubic Bézier from the tail to `end`.
    pub fn add_cubic_to(&mut self, control1: Point2, control2: Point2, end: Point2) {
        let tail = self.tail();
        self.push(PathSegment::Cubic(CubicBezier::new(
            tail, control1, control2, end,
        )));
    }

    /// Appends a cardinal spline through `points`, starting from the tail,
    /// as a run of cubic segments. `tension` in `[0, 1]`: 0 is a slack
    /// Catmull-Rom-like curve, 1 degenerates to straight lines.
    ///
    /// # Errors
    ///
    /// `GeometryError::InsufficientPoints` when `points` is empty.
    pub fn add_cardinal_to(&mut self, points: &[Point2], tension: f64) -> Result<()> {
        if points.is_empty() {
            return Err(GeometryError::InsufficientPoints {
                context: "cardinal curve",
                required: 1,
                actual: 0,
            }
            .into());
        }

        let mut chain = Vec::with_capacity(points.len() + 1);
        chain.push(self.tail());
        chain.extend_from_slice(points);

        let s = (1.0 - tension) / 2.0;
        let n = chain.len();
        let tangent_at = |i: usize| -> Vector2 {
            let prev = chain[i.saturating_sub(1)];
            let next = chain[(i + 1).min(n - 1)];
            (next - prev) * s
        };

        for i in 0..n - 1 {
            let m0 = tangent_at(i);
            let m1 = tangent_at(i + 1);
            let c1 = chain[i] + m0 / 3.0;
            let c2 = chain[i + 1] - m1 / 3.0;
            self.add_cubic_to(c1, c2, chain[i + 1]);
        }
        Ok(())
    }

    /// Closes the path: appends a line segment back to the anchor unless
    /// the tail already sits there, then marks the path closed.
    /// Idempotent.
    pub fn close(&mut self) {
        let tail = self.tail();
        if tail != self.start {
            self.add_line_to(self.start);
        }
        self.closed = true;
    }

    /// Cumulative per-segment arc lengths; last entry is the total.
    fn cumulative_lengths(&self) -> &[f64] {
        self.cache.cumulative.get_or_init(|| {
            let mut acc = 0.0;
            self.segments
                .iter()
                .map(|s| {
                    acc += s.length();
                    acc
                })
                .collect()
        })
    }

    /// Total arc length: the sum of each segment's own length.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.cumulative_lengths().last().copied().unwrap_or(0.0)
    }

    /// Maps the normalized parameter `t` to a point by distance traveled
    /// along the path.
    ///
    /// # Errors
    ///
    /// `GeometryError::ParameterOutOfRange` when `t` is outside `[0, 1]`.
    pub fn interpolate(&self, t: f64) -> Result<Point2> {
        if !(0.0..=1.0).contains(&t) {
            return Err(GeometryError::ParameterOutOfRange {
                parameter: "t",
                value: t,
                min: 0.0,
                max: 1.0,
            }
            .into());
        }
        // Boundary shortcuts avoid a degenerate table lookup.
        if t == 0.0 {
            return Ok(self.start);
        }
        if t == 1.0 {
            return Ok(self.tail());
        }

        let cumulative = self.cumulative_lengths();
        let total = cumulative.last().copied().unwrap_or(0.0);
        if total <= 0.0 {
            return Ok(self.start);
        }

        let target = t * total;
        let idx = cumulative
            .iter()
            .position(|&len| len >= target)
            .unwrap_or(self.segments.len() - 1);
        let seg_start = if idx == 0 { 0.0 } else { cumulative[idx - 1] };
        let seg_len = cumulative[idx] - seg_start;
        let local = if seg_len <= 0.0 {
            0.0
        } else {
            (target - seg_start) / seg_len
        };
        Ok(self.segments[idx].point_at(local))
    }

    /// Bounding box of the whole path (the anchor alone for an empty one).
    #[must_use]
    pub fn bounds(&self) -> Aabb {
        let mut bb = Aabb::new(self.start, self.start);
        for seg in &self.segments {
            bb = bb.union(&seg.bounds());
        }
        bb
    }
}
