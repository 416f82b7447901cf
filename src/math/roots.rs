/// Root finding for Bézier derivative polynomials in Bernstein form.
///
/// A derivative control polygon of 2 values describes a linear polynomial,
/// one of 3 values a quadratic. Roots are returned unfiltered; callers
/// restrict to the parameter interval they care about.

/// Roots of the polynomial described by 2 or 3 Bernstein-form control values.
///
/// Values outside those arities produce no roots.
#[must_use]
pub fn derivative_roots(values: &[f64]) -> Vec<f64> {
    match *values {
        [a, b, c] => {
            let d = a - 2.0 * b + c;
            if d != 0.0 {
                let m1 = -(b * b - a * c).sqrt();
                let m2 = -a + b;
                let v1 = -(m1 + m2) / d;
                let v2 = -(-m1 + m2) / d;
                vec![v1, v2]
            } else if b != c {
                vec![(2.0 * b - c) / (2.0 * (b - c))]
            } else {
                Vec::new()
            }
        }
        [a, b] => {
            if a == b {
                Vec::new()
            } else {
                vec![a / (a - b)]
            }
        }
        _ => Vec::new(),
    }
}

/// Roots of the Bernstein-form polynomial restricted to `[0, 1]`.
///
/// NaN roots from a negative discriminant are dropped by the range filter.
#[must_use]
pub fn unit_derivative_roots(values: &[f64]) -> Vec<f64> {
    let mut r = derivative_roots(values);
    r.retain(|t| (0.0..=1.0).contains(t));
    r
}

/// Sorts ascending and removes duplicates closer than `tol`.
pub fn sort_dedup(values: &mut Vec<f64>, tol: f64) {
    values.sort_by(f64::total_cmp);
    values.dedup_by(|a, b| (*a - *b).abs() < tol);
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-12;

    #[test]
    fn linear_root() {
        // Bernstein linear with values 2, -2 crosses zero at t = 0.5.
        let r = derivative_roots(&[2.0, -2.0]);
        assert_eq!(r.len(), 1);
        assert!((r[0] - 0.5).abs() < TOL);
    }

    #[test]
    fn linear_constant_has_no_root() {
        assert!(derivative_roots(&[3.0, 3.0]).is_empty());
    }

    #[test]
    fn quadratic_two_roots() {
        // Values 1, -1, 1: B(t) = (1-t)² - 2t(1-t) + t² = (2t-1)² ... roots at 0.5 (double).
        let r = unit_derivative_roots(&[1.0, -1.0, 1.0]);
        for t in &r {
            assert!((t - 0.5).abs() < 1e-9, "t={t}");
        }
        assert!(!r.is_empty());
    }

    #[test]
    fn quadratic_no_real_roots_filtered() {
        // All-positive values: no sign change, discriminant negative → NaN → filtered.
        let r = unit_derivative_roots(&[1.0, 2.0, 4.0]);
        assert!(r.is_empty(), "r={r:?}");
    }

    #[test]
    fn degenerate_quadratic_falls_back_to_linear() {
        // a - 2b + c == 0 with b != c.
        let r = derivative_roots(&[0.0, 1.0, 2.0]);
        // B(t) = 2t, root at t = 0 only.
        assert_eq!(r.len(), 1);
        assert!(r[0].abs() < TOL);
    }

    #[test]
    fn sort_dedup_merges_close_values() {
        let mut v = vec![0.5, 0.1, 0.5 + 1e-9, 0.9];
        sort_dedup(&mut v, 1e-6);
        assert_eq!(v.len(), 3);
        assert!((v[0] - 0.1).abs() < TOL);
        assert!((v[1] - 0.5).abs() < TOL);
        assert!((v[2] - 0.9).abs() < TOL);
    }
}
