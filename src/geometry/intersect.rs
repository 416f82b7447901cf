//! Locus classification of point / segment / line intersection queries.
//!
//! These functions layer on the numeric primitives in [`crate::math`] and
//! answer queries in terms of [`Locus`] variants: degenerate inputs,
//! parallel and coincident configurations are first-class outcomes here,
//! never errors.

use crate::error::{GeometryError, Result};
use crate::math::distance_2d::{point_to_line_dist, point_to_segment_dist};
use crate::math::intersect_2d::{point_on_segment, segment_intersection};
use crate::math::Point2;

use super::locus::Locus;

/// Classifies a point against a line segment.
///
/// The distance test is bounded to the segment span: a point beyond the
/// endpoints classifies as `Empty` even when it lies on the carrier line.
#[must_use]
pub fn point_segment(p: &Point2, a: &Point2, b: &Point2, eps: f64) -> Locus {
    if point_to_segment_dist(p, a, b) <= eps {
        Locus::Point(*p)
    } else {
        Locus::Empty
    }
}

/// Classifies the intersection of two line segments.
///
/// Parallel segments classify as `Parallel`, segments on the same carrier
/// line as `CoincidentLine`; a crossing inside both spans is a `Point`,
/// one outside either span is `Empty`. The determinant comparison uses the
/// same `eps` tolerance as the point-producing intersection queries.
#[must_use]
pub fn segment_segment(a1: &Point2, a2: &Point2, b1: &Point2, b2: &Point2, eps: f64) -> Locus {
    let a_degenerate = a1 == a2;
    let b_degenerate = b1 == b2;

    if a_degenerate && b_degenerate {
        if (a1.x - b1.x).abs() <= eps && (a1.y - b1.y).abs() <= eps {
            return Locus::Point(*a1);
        }
        return Locus::Empty;
    }
    if a_degenerate {
        return point_segment(a1, b1, b2, eps);
    }
    if b_degenerate {
        return point_segment(b1, a1, a2, eps);
    }

    let det = (b2.y - b1.y) * (a2.x - a1.x) - (b2.x - b1.x) * (a2.y - a1.y);
    let ua_t = (b2.x - b1.x) * (a1.y - b1.y) - (b2.y - b1.y) * (a1.x - b1.x);
    let ub_t = (a2.x - a1.x) * (a1.y - b1.y) - (a2.y - a1.y) * (a1.x - b1.x);

    if det.abs() <= eps {
        if ua_t.abs() <= eps && ub_t.abs() <= eps {
            return Locus::CoincidentLine;
        }
        return Locus::Parallel;
    }

    let ua = ua_t / det;
    let ub = ub_t / det;
    if (0.0..=1.0).contains(&ua) && (0.0..=1.0).contains(&ub) {
        Locus::Point(Point2::new(
            a1.x + ua * (a2.x - a1.x),
            a1.y + ua * (a2.y - a1.y),
        ))
    } else {
        Locus::Empty
    }
}

/// Classifies the intersection of two infinite lines, each given by two
/// points.
///
/// A degenerate definition (coincident defining points) is treated as a
/// point query against the other line.
#[must_use]
pub fn line_line(a1: &Point2, a2: &Point2, b1: &Point2, b2: &Point2, eps: f64) -> Locus {
    let a_degenerate = a1 == a2;
    let b_degenerate = b1 == b2;

    if a_degenerate && b_degenerate {
        if (a1.x - b1.x).abs() <= eps && (a1.y - b1.y).abs() <= eps {
            return Locus::Point(*a1);
        }
        return Locus::Empty;
    }
    if a_degenerate {
        if point_to_line_dist(a1, b1, b2) <= eps {
            return Locus::Point(*a1);
        }
        return Locus::Empty;
    }
    if b_degenerate {
        if point_to_line_dist(b1, a1, a2) <= eps {
            return Locus::Point(*b1);
        }
        return Locus::Empty;
    }

    let det = (b2.y - b1.y) * (a2.x - a1.x) - (b2.x - b1.x) * (a2.y - a1.y);
    let ua_t = (b2.x - b1.x) * (a1.y - b1.y) - (b2.y - b1.y) * (a1.x - b1.x);
    let ub_t = (a2.x - a1.x) * (a1.y - b1.y) - (a2.y - a1.y) * (a1.x - b1.x);

    if det.abs() <= eps {
        if ua_t.abs() <= eps && ub_t.abs() <= eps {
            return Locus::CoincidentLine;
        }
        return Locus::Parallel;
    }

    let ua = ua_t / det;
    Locus::Point(Point2::new(
        a1.x + ua * (a2.x - a1.x),
        a1.y + ua * (a2.y - a1.y),
    ))
}

/// Segment-segment intersection with collinear overlaps resolved to
/// geometry: `Empty`, a single `Point`, or the overlapping `Segment`.
#[must_use]
pub fn segment_overlap(a1: &Point2, a2: &Point2, b1: &Point2, b2: &Point2, eps: f64) -> Locus {
    let mut pts = segment_intersection(a1, a2, b1, b2, eps);
    match pts.len() {
        0 => Locus::Empty,
        1 => Locus::Point(pts.remove(0)),
        _ => Locus::Segment(pts[0], pts[1]),
    }
}

/// Intersections of an open polyline with a line segment, in traversal
/// order: `Empty`, `Point`, or `PointSet`.
#[must_use]
pub fn polyline_segment(points: &[Point2], a: &Point2, b: &Point2, eps: f64) -> Locus {
    let mut hits: Vec<Point2> = Vec::new();
    for w in points.windows(2) {
        for p in segment_intersection(&w[0], &w[1], a, b, eps) {
            let duplicate = hits
                .iter()
                .any(|h| (h.x - p.x).abs() <= eps && (h.y - p.y).abs() <= eps);
            if !duplicate {
                hits.push(p);
            }
        }
    }
    Locus::from_points(hits)
}

/// Classifies a point against a closed polygon contour: `Point` for
/// inside or on the boundary, `Outside` otherwise (even-odd rule).
///
/// # Errors
///
/// `GeometryError::InsufficientPoints` when the ring has fewer than 3
/// vertices.
pub fn point_polygon(p: &Point2, ring: &[Point2], eps: f64) -> Result<Locus> {
    let n = ring.len();
    if n < 3 {
        return Err(GeometryError::InsufficientPoints {
            context: "point-in-polygon classification",
            required: 3,
            actual: n,
        }
        .into());
    }

    for i in 0..n {
        if point_on_segment(p, &ring[i], &ring[(i + 1) % n], eps) {
            return Ok(Locus::Point(*p));
        }
    }

    // Even-odd ray cast toward +x.
    let mut inside = false;
    for i in 0..n {
        let a = ring[i];
        let b = ring[(i + 1) % n];
        if (a.y > p.y) != (b.y > p.y) {
            let x_cross = a.x + (p.y - a.y) * (b.x - a.x) / (b.y - a.y);
            if x_cross > p.x {
                inside = !inside;
            }
        }
    }
    Ok(if inside { Locus::Point(*p) } else { Locus::Outside })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::EPSILON;

    const TOL: f64 = 1e-10;

    fn pt(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    #[test]
    fn point_inside_segment_span() {
        let l = point_segment(&pt(1.0, 0.0), &pt(0.0, 0.0), &pt(2.0, 0.0), EPSILON);
        assert_eq!(l, Locus::Point(pt(1.0, 0.0)));
    }

    #[test]
    fn point_on_carrier_line_beyond_span_is_empty() {
        // On the infinite line but past the endpoint: bounded test says no.
        let l = point_segment(&pt(5.0, 0.0), &pt(0.0, 0.0), &pt(2.0, 0.0), EPSILON);
        assert_eq!(l, Locus::Empty);
    }

    #[test]
    fn crossing_segments_classify_as_point() {
        let l = segment_segment(
            &pt(0.0, 0.0),
            &pt(10.0, 10.0),
            &pt(0.0, 10.0),
            &pt(10.0, 0.0),
            EPSILON,
        );
        match l {
            Locus::Point(p) => {
                assert!((p.x - 5.0).abs() < TOL && (p.y - 5.0).abs() < TOL);
            }
            other => panic!("expected Point, got {other:?}"),
        }
    }

    #[test]
    fn crossing_beyond_span_is_empty() {
        let l = segment_segment(
            &pt(0.0, 0.0),
            &pt(1.0, 1.0),
            &pt(0.0, 10.0),
            &pt(10.0, 0.0),
            EPSILON,
        );
        assert_eq!(l, Locus::Empty);
    }

    #[test]
    fn parallel_segments_classify_as_parallel() {
        let l = segment_segment(
            &pt(0.0, 0.0),
            &pt(10.0, 0.0),
            &pt(0.0, 1.0),
            &pt(10.0, 1.0),
            EPSILON,
        );
        assert_eq!(l, Locus::Parallel);
    }

    #[test]
    fn collinear_segments_classify_as_coincident_line() {
        let l = segment_segment(
            &pt(0.0, 0.0),
            &pt(10.0, 0.0),
            &pt(20.0, 0.0),
            &pt(30.0, 0.0),
            EPSILON,
        );
        assert_eq!(l, Locus::CoincidentLine);
    }

    #[test]
    fn degenerate_operands() {
        let p = pt(1.0, 1.0);
        assert_eq!(segment_segment(&p, &p, &p, &p, EPSILON), Locus::Point(p));
        assert_eq!(
            segment_segment(&p, &p, &pt(3.0, 3.0), &pt(3.0, 3.0), EPSILON),
            Locus::Empty
        );
        assert_eq!(
            segment_segment(&p, &p, &pt(0.0, 0.0), &pt(2.0, 2.0), EPSILON),
            Locus::Point(p)
        );
    }

    #[test]
    fn infinite_lines_cross_beyond_segment_spans() {
        // As segments these don't touch; as lines they cross at (5, 5).
        let l = line_line(
            &pt(0.0, 0.0),
            &pt(1.0, 1.0),
            &pt(0.0, 10.0),
            &pt(1.0, 9.0),
            EPSILON,
        );
        match l {
            Locus::Point(p) => {
                assert!((p.x - 5.0).abs() < TOL && (p.y - 5.0).abs() < TOL);
            }
            other => panic!("expected Point, got {other:?}"),
        }
    }

    #[test]
    fn coincident_lines_classify_as_coincident() {
        let l = line_line(
            &pt(0.0, 0.0),
            &pt(1.0, 1.0),
            &pt(5.0, 5.0),
            &pt(9.0, 9.0),
            EPSILON,
        );
        assert_eq!(l, Locus::CoincidentLine);
    }

    #[test]
    fn segment_overlap_returns_shared_subsegment() {
        let l = segment_overlap(
            &pt(0.0, 0.0),
            &pt(10.0, 0.0),
            &pt(5.0, 0.0),
            &pt(15.0, 0.0),
            EPSILON,
        );
        match l {
            Locus::Segment(a, b) => {
                assert!((a.x - 5.0).abs() < TOL && (b.x - 10.0).abs() < TOL);
            }
            other => panic!("expected Segment, got {other:?}"),
        }
    }

    #[test]
    fn polyline_crossings_accumulate_in_order() {
        // Zig-zag crossing the x-axis twice.
        let poly = [pt(0.0, 1.0), pt(2.0, -1.0), pt(4.0, 1.0)];
        let l = polyline_segment(&poly, &pt(0.0, 0.0), &pt(4.0, 0.0), EPSILON);
        match l {
            Locus::PointSet(pts) => {
                assert_eq!(pts.len(), 2);
                assert!((pts[0].x - 1.0).abs() < TOL);
                assert!((pts[1].x - 3.0).abs() < TOL);
            }
            other => panic!("expected PointSet, got {other:?}"),
        }
    }

    #[test]
    fn polyline_single_touch_is_point() {
        let poly = [pt(0.0, 1.0), pt(2.0, -1.0)];
        let l = polyline_segment(&poly, &pt(0.0, 0.0), &pt(4.0, 0.0), EPSILON);
        assert!(matches!(l, Locus::Point(_)));
    }

    #[test]
    fn point_in_polygon_inside_and_outside() {
        let square = [pt(0.0, 0.0), pt(4.0, 0.0), pt(4.0, 4.0), pt(0.0, 4.0)];
        assert_eq!(
            point_polygon(&pt(2.0, 2.0), &square, EPSILON).unwrap(),
            Locus::Point(pt(2.0, 2.0))
        );
        assert_eq!(
            point_polygon(&pt(5.0, 2.0), &square, EPSILON).unwrap(),
            Locus::Outside
        );
    }

    #[test]
    fn point_on_polygon_boundary() {
        let square = [pt(0.0, 0.0), pt(4.0, 0.0), pt(4.0, 4.0), pt(0.0, 4.0)];
        assert_eq!(
            point_polygon(&pt(4.0, 2.0), &square, EPSILON).unwrap(),
            Locus::Point(pt(4.0, 2.0))
        );
    }

    #[test]
    fn tiny_ring_is_an_error() {
        let err = point_polygon(&pt(0.0, 0.0), &[pt(0.0, 0.0), pt(1.0, 0.0)], EPSILON);
        assert!(err.is_err());
    }
}
