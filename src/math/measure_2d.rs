use super::{Point2, Vector2};

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Point2,
    pub max: Point2,
}

impl Aabb {
    /// Creates a box from two corner points, normalizing the ordering.
    #[must_use]
    pub fn new(a: Point2, b: Point2) -> Self {
        Self {
            min: Point2::new(a.x.min(b.x), a.y.min(b.y)),
            max: Point2::new(a.x.max(b.x), a.y.max(b.y)),
        }
    }

    /// Tight box around a point set. Returns `None` for an empty slice.
    #[must_use]
    pub fn from_points(points: &[Point2]) -> Option<Self> {
        let first = points.first()?;
        let mut bb = Self::new(*first, *first);
        for p in &points[1..] {
            bb.expand(p);
        }
        Some(bb)
    }

    /// Grows the box to contain `p`.
    pub fn expand(&mut self, p: &Point2) {
        self.min.x = self.min.x.min(p.x);
        self.min.y = self.min.y.min(p.y);
        self.max.x = self.max.x.max(p.x);
        self.max.y = self.max.y.max(p.y);
    }

    /// Smallest box containing both operands.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        Self {
            min: Point2::new(self.min.x.min(other.min.x), self.min.y.min(other.min.y)),
            max: Point2::new(self.max.x.max(other.max.x), self.max.y.max(other.max.y)),
        }
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// Half-open containment test (boundary counts as inside).
    #[must_use]
    pub fn contains(&self, p: &Point2) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }
}

/// Sum of chord lengths of an open point chain.
#[must_use]
pub fn polyline_length(points: &[Point2]) -> f64 {
    points
        .windows(2)
        .map(|w| ((w[1].x - w[0].x).powi(2) + (w[1].y - w[0].y).powi(2)).sqrt())
        .sum()
}

/// Computes the signed area of a polygon (shoelace formula).
///
/// Positive for counter-clockwise, negative for clockwise.
#[must_use]
pub fn signed_area(points: &[Point2]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += points[i].x * points[j].y - points[j].x * points[i].y;
    }
    sum * 0.5
}

/// Closed-ring length of a polygon contour, including the closing edge.
#[must_use]
pub fn perimeter(points: &[Point2]) -> f64 {
    let n = points.len();
    if n < 2 {
        return 0.0;
    }
    let mut sum = polyline_length(points);
    let (first, last) = (points[0], points[n - 1]);
    sum += ((first.x - last.x).powi(2) + (first.y - last.y).powi(2)).sqrt();
    sum
}

// 24-point Gauss-Legendre abscissae and weights on [-1, 1].
const GL_T: [f64; 24] = [
    -0.064_056_892_862_605_63,
    0.064_056_892_862_605_63,
    -0.191_118_867_473_616_3,
    0.191_118_867_473_616_3,
    -0.315_042_679_696_163_44,
    0.315_042_679_696_163_44,
    -0.433_793_507_626_045_14,
    0.433_793_507_626_045_14,
    -0.545_421_471_388_839_54,
    0.545_421_471_388_839_54,
    -0.648_093_651_936_975_6,
    0.648_093_651_936_975_6,
    -0.740_124_191_578_554_4,
    0.740_124_191_578_554_4,
    -0.820_001_985_973_902_9,
    0.820_001_985_973_902_9,
    -0.886_415_527_004_401_1,
    0.886_415_527_004_401_1,
    -0.938_274_552_002_732_8,
    0.938_274_552_002_732_8,
    -0.974_728_555_971_309_5,
    0.974_728_555_971_309_5,
    -0.995_187_219_997_021_4,
    0.995_187_219_997_021_4,
];

const GL_C: [f64; 24] = [
    0.127_938_195_346_752_16,
    0.127_938_195_346_752_16,
    0.125_837_456_346_828_3,
    0.125_837_456_346_828_3,
    0.121_670_472_927_803_39,
    0.121_670_472_927_803_39,
    0.115_505_668_053_725_6,
    0.115_505_668_053_725_6,
    0.107_444_270_115_965_63,
    0.107_444_270_115_965_63,
    0.097_618_652_104_113_89,
    0.097_618_652_104_113_89,
    0.086_190_161_531_953_28,
    0.086_190_161_531_953_28,
    0.073_346_481_411_080_31,
    0.073_346_481_411_080_31,
    0.059_298_584_915_436_78,
    0.059_298_584_915_436_78,
    0.044_277_438_817_419_806,
    0.044_277_438_817_419_806,
    0.028_531_388_628_933_663,
    0.028_531_388_628_933_663,
    0.012_341_229_799_987_2,
    0.012_341_229_799_987_2,
];

/// Arc length of a parametric curve over `t ∈ [0, 1]` by 24-point
/// Gauss-Legendre quadrature of the derivative magnitude.
///
/// `derivative_at` must evaluate the curve's first derivative at `t`.
pub fn curve_length(mut derivative_at: impl FnMut(f64) -> Vector2) -> f64 {
    let z = 0.5;
    let mut sum = 0.0;
    for (abscissa, weight) in GL_T.iter().zip(GL_C.iter()) {
        let t = z * abscissa + z;
        let d = derivative_at(t);
        sum += weight * (d.x * d.x + d.y * d.y).sqrt();
    }
    z * sum
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-10;

    #[test]
    fn aabb_from_points() {
        let pts = vec![
            Point2::new(1.0, 2.0),
            Point2::new(-1.0, 0.5),
            Point2::new(0.0, 3.0),
        ];
        let bb = Aabb::from_points(&pts).unwrap();
        assert!((bb.min.x + 1.0).abs() < TOL);
        assert!((bb.min.y - 0.5).abs() < TOL);
        assert!((bb.max.x - 1.0).abs() < TOL);
        assert!((bb.max.y - 3.0).abs() < TOL);
    }

    #[test]
    fn aabb_empty() {
        assert!(Aabb::from_points(&[]).is_none());
    }

    #[test]
    fn aabb_union_and_contains() {
        let a = Aabb::new(Point2::new(0.0, 0.0), Point2::new(1.0, 1.0));
        let b = Aabb::new(Point2::new(2.0, -1.0), Point2::new(3.0, 0.5));
        let u = a.union(&b);
        assert!(u.contains(&Point2::new(1.5, 0.0)));
        assert!(!u.contains(&Point2::new(1.5, 2.0)));
        assert!((u.width() - 3.0).abs() < TOL);
        assert!((u.height() - 2.0).abs() < TOL);
    }

    #[test]
    fn polyline_length_right_angle() {
        let pts = vec![
            Point2::new(0.0, 0.0),
            Point2::new(3.0, 0.0),
            Point2::new(3.0, 4.0),
        ];
        assert!((polyline_length(&pts) - 7.0).abs() < TOL);
    }

    #[test]
    fn signed_area_ccw_square() {
        let pts = vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(0.0, 1.0),
        ];
        assert!((signed_area(&pts) - 1.0).abs() < TOL);
    }

    #[test]
    fn signed_area_cw_square() {
        let pts = vec![
            Point2::new(0.0, 0.0),
            Point2::new(0.0, 1.0),
            Point2::new(1.0, 1.0),
            Point2::new(1.0, 0.0),
        ];
        assert!((signed_area(&pts) + 1.0).abs() < TOL);
    }

    #[test]
    fn signed_area_degenerate() {
        assert!(signed_area(&[Point2::new(0.0, 0.0)]).abs() < TOL);
        assert!(signed_area(&[]).abs() < TOL);
    }

    #[test]
    fn perimeter_closes_the_ring() {
        let pts = vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(0.0, 1.0),
        ];
        assert!((perimeter(&pts) - 4.0).abs() < TOL);
    }

    #[test]
    fn curve_length_straight_line() {
        // Derivative of the line (0,0)→(3,4) parameterized over [0,1].
        let len = curve_length(|_| Vector2::new(3.0, 4.0));
        approx::assert_relative_eq!(len, 5.0, epsilon = 1e-9);
    }

    #[test]
    fn curve_length_quarter_circle() {
        // Unit quarter circle: x = cos(πt/2), y = sin(πt/2).
        let half_pi = std::f64::consts::FRAC_PI_2;
        let len = curve_length(|t| {
            Vector2::new(
                -half_pi * (half_pi * t).sin(),
                half_pi * (half_pi * t).cos(),
            )
        });
        approx::assert_relative_eq!(len, half_pi, epsilon = 1e-9);
    }
}
