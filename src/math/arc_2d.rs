//! Endpoint-parameterized elliptical arc math.
//!
//! Arcs arrive as SVG-style endpoint parameterizations (two endpoints,
//! radii, x-axis rotation, large-arc and sweep flags) and are converted to
//! a center parameterization for evaluation.

use std::f64::consts::PI;

use super::{Point2, Vector2};

/// Center parameterization of an elliptical arc.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CenterArc {
    pub center: Point2,
    /// Effective radii after scale-up of too-small input radii.
    pub rx: f64,
    pub ry: f64,
    /// Rotation of the ellipse x-axis, in radians.
    pub x_rotation: f64,
    pub start_angle: f64,
    /// Signed sweep; positive is counter-clockwise in angle space.
    pub sweep_angle: f64,
}

/// Converts an endpoint parameterization to a center parameterization.
///
/// Input radii are taken by absolute value and scaled up when no ellipse
/// of the given radii can reach both endpoints. Returns `None` when either
/// radius is (near) zero or the endpoints coincide — both are degenerate
/// arcs that callers should treat as a straight line or a no-op.
#[must_use]
#[allow(clippy::too_many_arguments)]
pub fn endpoint_to_center(
    start: &Point2,
    end: &Point2,
    rx: f64,
    ry: f64,
    x_rotation: f64,
    large_arc: bool,
    sweep: bool,
    eps: f64,
) -> Option<CenterArc> {
    let mut rx = rx.abs();
    let mut ry = ry.abs();
    if rx < eps || ry < eps {
        return None;
    }
    if (start.x - end.x).abs() < eps && (start.y - end.y).abs() < eps {
        return None;
    }

    let (sin_phi, cos_phi) = x_rotation.sin_cos();

    // Step 1: midpoint-relative coordinates in the rotated frame.
    let dx2 = (start.x - end.x) / 2.0;
    let dy2 = (start.y - end.y) / 2.0;
    let x1p = cos_phi * dx2 + sin_phi * dy2;
    let y1p = -sin_phi * dx2 + cos_phi * dy2;

    // Step 2: scale radii up if the endpoints are out of reach.
    let lambda = (x1p * x1p) / (rx * rx) + (y1p * y1p) / (ry * ry);
    if lambda > 1.0 {
        let s = lambda.sqrt();
        rx *= s;
        ry *= s;
    }

    // Step 3: center in the rotated frame.
    let num = rx * rx * ry * ry - rx * rx * y1p * y1p - ry * ry * x1p * x1p;
    let den = rx * rx * y1p * y1p + ry * ry * x1p * x1p;
    let mut co = (num.max(0.0) / den).sqrt();
    if large_arc == sweep {
        co = -co;
    }
    let cxp = co * rx * y1p / ry;
    let cyp = -co * ry * x1p / rx;

    // Step 4: back to the original frame.
    let cx = cos_phi * cxp - sin_phi * cyp + (start.x + end.x) / 2.0;
    let cy = sin_phi * cxp + cos_phi * cyp + (start.y + end.y) / 2.0;

    let start_angle = vector_angle(1.0, 0.0, (x1p - cxp) / rx, (y1p - cyp) / ry);
    let mut sweep_angle = vector_angle(
        (x1p - cxp) / rx,
        (y1p - cyp) / ry,
        (-x1p - cxp) / rx,
        (-y1p - cyp) / ry,
    );
    if !sweep && sweep_angle > 0.0 {
        sweep_angle -= 2.0 * PI;
    }
    if sweep && sweep_angle < 0.0 {
        sweep_angle += 2.0 * PI;
    }

    Some(CenterArc {
        center: Point2::new(cx, cy),
        rx,
        ry,
        x_rotation,
        start_angle,
        sweep_angle,
    })
}

/// Evaluates a point on the arc at parameter `t` in `[0, 1]`.
#[must_use]
pub fn arc_point_at(arc: &CenterArc, t: f64) -> Point2 {
    let theta = arc.start_angle + t * arc.sweep_angle;
    let (sin_t, cos_t) = theta.sin_cos();
    let (sin_phi, cos_phi) = arc.x_rotation.sin_cos();
    Point2::new(
        arc.center.x + arc.rx * cos_phi * cos_t - arc.ry * sin_phi * sin_t,
        arc.center.y + arc.rx * sin_phi * cos_t + arc.ry * cos_phi * sin_t,
    )
}

/// First derivative with respect to `t` at parameter `t` in `[0, 1]`.
#[must_use]
pub fn arc_derivative_at(arc: &CenterArc, t: f64) -> Vector2 {
    let theta = arc.start_angle + t * arc.sweep_angle;
    let (sin_t, cos_t) = theta.sin_cos();
    let (sin_phi, cos_phi) = arc.x_rotation.sin_cos();
    Vector2::new(
        arc.sweep_angle * (-arc.rx * cos_phi * sin_t - arc.ry * sin_phi * cos_t),
        arc.sweep_angle * (-arc.rx * sin_phi * sin_t + arc.ry * cos_phi * cos_t),
    )
}

/// Signed angle from vector `(ux, uy)` to vector `(vx, vy)`.
fn vector_angle(ux: f64, uy: f64, vx: f64, vy: f64) -> f64 {
    let dot = ux * vx + uy * vy;
    let len = (ux * ux + uy * uy).sqrt() * (vx * vx + vy * vy).sqrt();
    let mut a = (dot / len).clamp(-1.0, 1.0).acos();
    if ux * vy - uy * vx < 0.0 {
        a = -a;
    }
    a
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::EPSILON;

    const TOL: f64 = 1e-9;

    #[test]
    fn semicircle_center_and_sweep() {
        // Upper unit semicircle from (1,0) to (-1,0), CCW.
        let arc = endpoint_to_center(
            &Point2::new(1.0, 0.0),
            &Point2::new(-1.0, 0.0),
            1.0,
            1.0,
            0.0,
            false,
            true,
            EPSILON,
        )
        .unwrap();
        assert!(arc.center.x.abs() < TOL && arc.center.y.abs() < TOL);
        assert!((arc.sweep_angle - PI).abs() < TOL, "sweep={}", arc.sweep_angle);
        // Midpoint of the sweep is the circle top.
        let mid = arc_point_at(&arc, 0.5);
        assert!(mid.x.abs() < TOL && (mid.y - 1.0).abs() < TOL, "mid={mid:?}");
    }

    #[test]
    fn endpoints_are_reproduced() {
        let start = Point2::new(3.0, 1.0);
        let end = Point2::new(0.5, -2.0);
        let arc =
            endpoint_to_center(&start, &end, 4.0, 2.5, 0.3, true, false, EPSILON).unwrap();
        let p0 = arc_point_at(&arc, 0.0);
        let p1 = arc_point_at(&arc, 1.0);
        assert!((p0.x - start.x).abs() < TOL && (p0.y - start.y).abs() < TOL);
        assert!((p1.x - end.x).abs() < TOL && (p1.y - end.y).abs() < TOL);
    }

    #[test]
    fn small_radii_are_scaled_up() {
        // Radii too small to span the endpoints get scaled to fit.
        let start = Point2::new(0.0, 0.0);
        let end = Point2::new(10.0, 0.0);
        let arc = endpoint_to_center(&start, &end, 1.0, 1.0, 0.0, false, true, EPSILON).unwrap();
        assert!(arc.rx >= 5.0 - TOL, "rx={}", arc.rx);
        let p0 = arc_point_at(&arc, 0.0);
        assert!((p0.x - start.x).abs() < TOL);
    }

    #[test]
    fn large_arc_flag_selects_long_way() {
        let start = Point2::new(1.0, 0.0);
        let end = Point2::new(0.0, 1.0);
        let small =
            endpoint_to_center(&start, &end, 1.0, 1.0, 0.0, false, true, EPSILON).unwrap();
        let large =
            endpoint_to_center(&start, &end, 1.0, 1.0, 0.0, true, true, EPSILON).unwrap();
        assert!(small.sweep_angle.abs() < large.sweep_angle.abs());
        assert!((small.sweep_angle.abs() + large.sweep_angle.abs() - 2.0 * PI).abs() < TOL);
    }

    #[test]
    fn sweep_flag_flips_direction() {
        let start = Point2::new(1.0, 0.0);
        let end = Point2::new(-1.0, 0.0);
        let ccw = endpoint_to_center(&start, &end, 1.0, 1.0, 0.0, false, true, EPSILON).unwrap();
        let cw = endpoint_to_center(&start, &end, 1.0, 1.0, 0.0, false, false, EPSILON).unwrap();
        assert!(ccw.sweep_angle > 0.0);
        assert!(cw.sweep_angle < 0.0);
    }

    #[test]
    fn degenerate_radius_is_none() {
        assert!(endpoint_to_center(
            &Point2::new(0.0, 0.0),
            &Point2::new(1.0, 0.0),
            0.0,
            1.0,
            0.0,
            false,
            true,
            EPSILON,
        )
        .is_none());
    }

    #[test]
    fn coincident_endpoints_is_none() {
        let p = Point2::new(2.0, 2.0);
        assert!(endpoint_to_center(&p, &p, 1.0, 1.0, 0.0, false, true, EPSILON).is_none());
    }

    #[test]
    fn derivative_is_tangent_to_circle() {
        let arc = endpoint_to_center(
            &Point2::new(1.0, 0.0),
            &Point2::new(-1.0, 0.0),
            1.0,
            1.0,
            0.0,
            false,
            true,
            EPSILON,
        )
        .unwrap();
        // On a circle the derivative is perpendicular to the radius vector.
        let t = 0.3;
        let p = arc_point_at(&arc, t);
        let d = arc_derivative_at(&arc, t);
        let radial = Vector2::new(p.x - arc.center.x, p.y - arc.center.y);
        assert!((radial.x * d.x + radial.y * d.y).abs() < TOL);
    }
}
