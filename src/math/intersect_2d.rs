use super::distance_2d::point_to_segment_dist;
use super::Point2;

/// Bounded containment test: is `p` on the segment `a`→`b` within `eps`?
#[must_use]
pub fn point_on_segment(p: &Point2, a: &Point2, b: &Point2, eps: f64) -> bool {
    point_to_segment_dist(p, a, b) <= eps
}

/// Segment-segment intersection, degenerate cases included.
///
/// Returns 0, 1, or 2 points: the single crossing point, or for collinear
/// segments the boundary points of their shared sub-segment.
///
/// Both operands may degenerate to points (`a1 == a2` and/or `b1 == b2`);
/// those cases resolve to point-equality and point-on-segment tests.
/// Parallel disjoint segments and non-overlapping collinear segments
/// return an empty vector.
#[must_use]
pub fn segment_intersection(
    a1: &Point2,
    a2: &Point2,
    b1: &Point2,
    b2: &Point2,
    eps: f64,
) -> Vec<Point2> {
    let a_degenerate = a1 == a2;
    let b_degenerate = b1 == b2;

    if a_degenerate && b_degenerate {
        if (a1.x - b1.x).abs() <= eps && (a1.y - b1.y).abs() <= eps {
            return vec![*a1];
        }
        return Vec::new();
    }
    if a_degenerate {
        if point_on_segment(a1, b1, b2, eps) {
            return vec![*a1];
        }
        return Vec::new();
    }
    if b_degenerate {
        if point_on_segment(b1, a1, a2, eps) {
            return vec![*b1];
        }
        return Vec::new();
    }

    let u_b = (b2.y - b1.y) * (a2.x - a1.x) - (b2.x - b1.x) * (a2.y - a1.y);
    let ua_t = (b2.x - b1.x) * (a1.y - b1.y) - (b2.y - b1.y) * (a1.x - b1.x);
    let ub_t = (a2.x - a1.x) * (a1.y - b1.y) - (a2.y - a1.y) * (a1.x - b1.x);

    if u_b.abs() > eps {
        // Not parallel: a crossing exists only if both segment parameters
        // lie in [0, 1].
        let ua = ua_t / u_b;
        let ub = ub_t / u_b;
        if (0.0..=1.0).contains(&ua) && (0.0..=1.0).contains(&ub) {
            return vec![Point2::new(
                a1.x + ua * (a2.x - a1.x),
                a1.y + ua * (a2.y - a1.y),
            )];
        }
        return Vec::new();
    }

    // Parallel. The connecting-vector cross products vanish only when both
    // segments lie on the same infinite line.
    if ua_t.abs() <= eps && ub_t.abs() <= eps {
        return collinear_overlap(a1, a2, b1, b2);
    }

    Vec::new()
}

/// One-dimensional overlap of two collinear segments (0, 1, or 2 points).
///
/// Projects both segments onto the coordinate axis with the larger extent
/// on segment A, so the normalizing span is never near zero. Segment A must
/// be non-degenerate; segment B may be a point.
#[must_use]
pub fn collinear_overlap(a1: &Point2, a2: &Point2, b1: &Point2, b2: &Point2) -> Vec<Point2> {
    // Normalized (unclamped) positions of B's endpoints along A.
    let (u1, u2) = if (a2.x - a1.x).abs() >= (a2.y - a1.y).abs() {
        let span = a2.x - a1.x;
        ((b1.x - a1.x) / span, (b2.x - a1.x) / span)
    } else {
        let span = a2.y - a1.y;
        ((b1.y - a1.y) / span, (b2.y - a1.y) / span)
    };

    let lo = u1.min(u2).max(0.0);
    let hi = u1.max(u2).min(1.0);

    let at = |u: f64| Point2::new(a1.x + u * (a2.x - a1.x), a1.y + u * (a2.y - a1.y));

    if lo > hi {
        Vec::new()
    } else if lo == hi {
        vec![at(lo)]
    } else {
        vec![at(lo), at(hi)]
    }
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
    fn crossing_segments() {
        let r = segment_intersection(
            &pt(0.0, 0.0),
            &pt(10.0, 10.0),
            &pt(0.0, 10.0),
            &pt(10.0, 0.0),
            EPSILON,
        );
        assert_eq!(r.len(), 1);
        assert!((r[0].x - 5.0).abs() < TOL);
        assert!((r[0].y - 5.0).abs() < TOL);
    }

    #[test]
    fn crossing_outside_span_is_empty() {
        // The infinite lines cross at (5, 5) but segment B stops short.
        let r = segment_intersection(
            &pt(0.0, 0.0),
            &pt(10.0, 10.0),
            &pt(0.0, 10.0),
            &pt(4.0, 6.0),
            EPSILON,
        );
        assert!(r.is_empty(), "r={r:?}");
    }

    #[test]
    fn parallel_disjoint_is_empty() {
        let r = segment_intersection(
            &pt(0.0, 0.0),
            &pt(10.0, 0.0),
            &pt(0.0, 1.0),
            &pt(10.0, 1.0),
            EPSILON,
        );
        assert!(r.is_empty());
    }

    #[test]
    fn collinear_partial_overlap() {
        let r = segment_intersection(
            &pt(0.0, 0.0),
            &pt(10.0, 0.0),
            &pt(5.0, 0.0),
            &pt(15.0, 0.0),
            EPSILON,
        );
        assert_eq!(r.len(), 2);
        assert!((r[0].x - 5.0).abs() < TOL);
        assert!((r[1].x - 10.0).abs() < TOL);
        assert!(r[0].y.abs() < TOL && r[1].y.abs() < TOL);
    }

    #[test]
    fn collinear_touching_endpoints() {
        let r = segment_intersection(
            &pt(0.0, 0.0),
            &pt(5.0, 0.0),
            &pt(5.0, 0.0),
            &pt(9.0, 0.0),
            EPSILON,
        );
        assert_eq!(r.len(), 1);
        assert!((r[0].x - 5.0).abs() < TOL);
    }

    #[test]
    fn collinear_disjoint_is_empty() {
        let r = segment_intersection(
            &pt(0.0, 0.0),
            &pt(1.0, 0.0),
            &pt(2.0, 0.0),
            &pt(3.0, 0.0),
            EPSILON,
        );
        assert!(r.is_empty());
    }

    #[test]
    fn both_degenerate_equal() {
        let p = pt(2.0, 3.0);
        let r = segment_intersection(&p, &p, &p, &p, EPSILON);
        assert_eq!(r.len(), 1);
        assert!((r[0].x - 2.0).abs() < TOL && (r[0].y - 3.0).abs() < TOL);
    }

    #[test]
    fn both_degenerate_distinct() {
        let p = pt(2.0, 3.0);
        let q = pt(4.0, 3.0);
        assert!(segment_intersection(&p, &p, &q, &q, EPSILON).is_empty());
    }

    #[test]
    fn one_degenerate_on_segment() {
        let p = pt(5.0, 0.0);
        let r = segment_intersection(&p, &p, &pt(0.0, 0.0), &pt(10.0, 0.0), EPSILON);
        assert_eq!(r.len(), 1);
        assert!((r[0].x - 5.0).abs() < TOL);
    }

    #[test]
    fn one_degenerate_off_segment() {
        let p = pt(5.0, 1.0);
        let r = segment_intersection(&p, &p, &pt(0.0, 0.0), &pt(10.0, 0.0), EPSILON);
        assert!(r.is_empty());
    }

    #[test]
    fn symmetric_in_operand_order() {
        let (a1, a2) = (pt(0.0, 0.0), pt(10.0, 10.0));
        let (b1, b2) = (pt(0.0, 10.0), pt(10.0, 0.0));
        let ab = segment_intersection(&a1, &a2, &b1, &b2, EPSILON);
        let ba = segment_intersection(&b1, &b2, &a1, &a2, EPSILON);
        assert_eq!(ab.len(), ba.len());
        assert!((ab[0].x - ba[0].x).abs() < TOL);
        assert!((ab[0].y - ba[0].y).abs() < TOL);
    }

    #[test]
    fn overlap_on_steep_segment_projects_onto_y() {
        // Near-vertical segments: the X extent is tiny, so the overlap
        // projection must pick the Y axis.
        let r = segment_intersection(
            &pt(0.0, 0.0),
            &pt(0.0, 10.0),
            &pt(0.0, 4.0),
            &pt(0.0, 14.0),
            EPSILON,
        );
        assert_eq!(r.len(), 2);
        assert!((r[0].y - 4.0).abs() < TOL);
        assert!((r[1].y - 10.0).abs() < TOL);
    }

    #[test]
    fn overlap_with_degenerate_b() {
        let p = pt(3.0, 0.0);
        let r = collinear_overlap(&pt(0.0, 0.0), &pt(10.0, 0.0), &p, &p);
        assert_eq!(r.len(), 1);
        assert!((r[0].x - 3.0).abs() < TOL);
    }

    #[test]
    fn containment_overlap_returns_inner_segment() {
        // B entirely inside A.
        let r = segment_intersection(
            &pt(0.0, 0.0),
            &pt(10.0, 0.0),
            &pt(2.0, 0.0),
            &pt(6.0, 0.0),
            EPSILON,
        );
        assert_eq!(r.len(), 2);
        assert!((r[0].x - 2.0).abs() < TOL);
        assert!((r[1].x - 6.0).abs() < TOL);
    }
}
