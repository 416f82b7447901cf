mod arc;
mod cubic;
mod line;
mod quadratic;

pub use arc::EllipticalArc;
pub use cubic::CubicBezier;
pub use line::LineSegment;
pub use quadratic::QuadraticBezier;

use std::f64::consts::PI;

use crate::error::Result;
use crate::math::measure_2d::Aabb;
use crate::math::{Point2, Vector2, EPSILON};

/// Trait for parametric curve segments over the `[0, 1]` domain.
pub trait Curve {
    /// The segment head (`point_at(0)`).
    fn start(&self) -> Point2;

    /// The segment tail (`point_at(1)`).
    fn end(&self) -> Point2;

    /// Evaluates the segment at parameter `t`.
    fn point_at(&self, t: f64) -> Point2;

    /// Unit tangent vector at parameter `t`.
    ///
    /// # Errors
    ///
    /// Returns an error if the derivative vanishes at `t`.
    fn tangent(&self, t: f64) -> Result<Vector2>;

    /// Arc length of the whole segment.
    fn length(&self) -> f64;

    /// Axis-aligned bounding box of the segment.
    fn bounds(&self) -> Aabb;
}

/// A sub-curve produced by [`reduce`](CubicBezier::reduce), carrying the
/// parameter range it occupies on the parent curve.
#[derive(Debug, Clone, PartialEq)]
pub struct Subcurve<C> {
    pub curve: C,
    /// Parent-curve parameter where this piece starts.
    pub t1: f64,
    /// Parent-curve parameter where this piece ends.
    pub t2: f64,
}

/// Step size of the simple-arc reduction scan.
pub(crate) const REDUCTION_STEP: f64 = 0.01;

/// Bézier segments that can be subdivided and simplicity-tested, the two
/// operations the reduction driver needs.
pub(crate) trait Reducible: Sized + Clone {
    fn portion(&self, t1: f64, t2: f64) -> Self;
    fn is_simple(&self) -> bool;
}

/// Splits a curve into simple sub-curves: first at every extremum, then by
/// stepping each piece forward until simplicity fails and committing the
/// last simple candidate.
///
/// Returns an empty vector when a piece can never be made simple (two
/// candidate split points converge within one step) — callers fall back to
/// dense flattening.
pub(crate) fn reduce_segments<C: Reducible>(curve: &C, extrema: &[f64]) -> Vec<Subcurve<C>> {
    let step = REDUCTION_STEP;

    // First pass: cut at the extrema, with 0 and 1 as outer boundaries.
    let mut cuts = vec![0.0_f64];
    for &t in extrema {
        if t > cuts[cuts.len() - 1] + 1e-9 && t < 1.0 - 1e-9 {
            cuts.push(t);
        }
    }
    cuts.push(1.0);

    let mut pass1 = Vec::with_capacity(cuts.len() - 1);
    for w in cuts.windows(2) {
        pass1.push(Subcurve {
            curve: curve.portion(w[0], w[1]),
            t1: w[0],
            t2: w[1],
        });
    }

    // Second pass: scan each piece in fixed steps, committing the largest
    // simple prefix each round.
    let mut pass2 = Vec::new();
    for p1 in &pass1 {
        let span = p1.t2 - p1.t1;
        let mut t1 = 0.0_f64;
        'piece: loop {
            if t1 >= 1.0 {
                break;
            }
            let mut t2 = t1 + step;
            while t2 <= 1.0 + step {
                if !p1.curve.portion(t1, t2).is_simple() {
                    t2 -= step;
                    if (t1 - t2).abs() < step {
                        // The split points converged without producing a
                        // simple piece: unreducible.
                        return Vec::new();
                    }
                    pass2.push(Subcurve {
                        curve: p1.curve.portion(t1, t2),
                        t1: p1.t1 + t1 * span,
                        t2: p1.t1 + t2 * span,
                    });
                    t1 = t2;
                    continue 'piece;
                }
                t2 += step;
            }
            // The remainder is simple through the end of the piece.
            pass2.push(Subcurve {
                curve: p1.curve.portion(t1, 1.0),
                t1: p1.t1 + t1 * span,
                t2: p1.t2,
            });
            break;
        }
    }
    pass2
}

/// Successively-differenced control polygons scaled by degree: the control
/// points of each derivative down to the constant one.
pub(crate) fn derive_points(points: &[Point2]) -> Vec<Vec<Vector2>> {
    let mut values: Vec<Vector2> = points.iter().map(|p| p.coords).collect();
    let mut levels = Vec::with_capacity(points.len().saturating_sub(1));
    while values.len() > 1 {
        let c = values.len() as f64 - 1.0;
        let next: Vec<Vector2> = values.windows(2).map(|w| (w[1] - w[0]) * c).collect();
        levels.push(next.clone());
        values = next;
    }
    levels
}

/// De Casteljau expansion at `t`: the control points followed by every
/// intermediate point of every interpolation level. The final element is
/// the point on the curve.
pub(crate) fn hull_points(points: &[Point2], t: f64) -> Vec<Point2> {
    let mut q: Vec<Point2> = points.to_vec();
    let mut level: Vec<Point2> = points.to_vec();
    while level.len() > 1 {
        let next: Vec<Point2> = level
            .windows(2)
            .map(|w| Point2::from(w[0].coords.lerp(&w[1].coords, t)))
            .collect();
        q.extend_from_slice(&next);
        level = next;
    }
    q
}

/// Parameters in `[0, 1]` where either axis of the first or second
/// derivative polynomial crosses zero, sorted ascending without
/// duplicates. `levels` is the output of [`derive_points`].
pub(crate) fn extrema_values(levels: &[Vec<Vector2>]) -> Vec<f64> {
    let mut out = Vec::new();
    for dim in 0..2 {
        let first: Vec<f64> = levels[0].iter().map(|v| v[dim]).collect();
        out.extend(crate::math::roots::unit_derivative_roots(&first));
        if levels[0].len() == 3 {
            // Cubic: the second derivative contributes roots as well.
            let second: Vec<f64> = levels[1].iter().map(|v| v[dim]).collect();
            out.extend(crate::math::roots::unit_derivative_roots(&second));
        }
    }
    crate::math::roots::sort_dedup(&mut out, 1e-9);
    out
}

/// Translates and rotates `points` so the chord `a`→`b` lies on the
/// positive x-axis starting at the origin.
pub(crate) fn align_points(points: &[Point2], a: &Point2, b: &Point2) -> Vec<Point2> {
    let angle = -(b.y - a.y).atan2(b.x - a.x);
    let (sin_a, cos_a) = angle.sin_cos();
    points
        .iter()
        .map(|p| {
            let dx = p.x - a.x;
            let dy = p.y - a.y;
            Point2::new(dx * cos_a - dy * sin_a, dx * sin_a + dy * cos_a)
        })
        .collect()
}

/// Signed angle at `o` from ray `o`→`a` to ray `o`→`b`.
pub(crate) fn signed_angle(o: &Point2, a: &Point2, b: &Point2) -> f64 {
    let dx1 = a.x - o.x;
    let dy1 = a.y - o.y;
    let dx2 = b.x - o.x;
    let dy2 = b.y - o.y;
    (dx1 * dy2 - dy1 * dx2).atan2(dx1 * dx2 + dy1 * dy2)
}

/// True when the angle between the two direction vectors stays below the
/// 60° simplicity bound. Vanishing directions are never simple.
pub(crate) fn directions_within_simple_bound(d0: &Vector2, d1: &Vector2) -> bool {
    let m0 = d0.norm();
    let m1 = d1.norm();
    if m0 < EPSILON || m1 < EPSILON {
        return false;
    }
    let s = ((d0.x * d1.x + d0.y * d1.y) / (m0 * m1)).clamp(-1.0, 1.0);
    s.acos().abs() < PI / 3.0
}

/// Unit tangent from a raw derivative vector.
pub(crate) fn unit_tangent(d: Vector2) -> Result<Vector2> {
    let m = d.norm();
    if m < EPSILON {
        return Err(crate::error::GeometryError::ZeroVector.into());
    }
    Ok(d / m)
}

/// Unit normal: the tangent rotated a quarter turn counter-clockwise.
pub(crate) fn unit_normal(d: Vector2) -> Result<Vector2> {
    let t = unit_tangent(d)?;
    Ok(Vector2::new(-t.y, t.x))
}
