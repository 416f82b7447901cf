use std::cell::OnceCell;
use std::f64::consts::{FRAC_PI_2, PI};

use crate::error::Result;
use crate::math::arc_2d::{arc_derivative_at, arc_point_at, endpoint_to_center, CenterArc};
use crate::math::measure_2d::{curve_length, Aabb};
use crate::math::{Point2, Vector2, EPSILON};

use super::{unit_tangent, Curve};

/// An elliptical arc segment in endpoint parameterization: two endpoints,
/// radii, an x-axis rotation, and the large-arc / sweep flags.
///
/// A degenerate arc (zero radius or coincident endpoints) evaluates as the
/// straight chord between its endpoints.
#[derive(Debug, Clone)]
pub struct EllipticalArc {
    start: Point2,
    end: Point2,
    rx: f64,
    ry: f64,
    x_rotation: f64,
    large_arc: bool,
    sweep: bool,
    cache: ArcCache,
}

#[derive(Debug, Clone, Default)]
struct ArcCache {
    center: OnceCell<Option<CenterArc>>,
    length: OnceCell<f64>,
    bounds: OnceCell<Aabb>,
}

impl PartialEq for EllipticalArc {
    fn eq(&self, other: &Self) -> bool {
        self.start == other.start
            && self.end == other.end
            && self.rx == other.rx
            && self.ry == other.ry
            && self.x_rotation == other.x_rotation
            && self.large_arc == other.large_arc
            && self.sweep == other.sweep
    }
}

impl EllipticalArc {
    #[must_use]
    pub fn new(
        start: Point2,
        end: Point2,
        rx: f64,
        ry: f64,
        x_rotation: f64,
        large_arc: bool,
        sweep: bool,
    ) -> Self {
        Self {
            start,
            end,
            rx,
            ry,
            x_rotation,
            large_arc,
            sweep,
            cache: ArcCache::default(),
        }
    }

    #[must_use]
    pub fn rx(&self) -> f64 {
        self.rx
    }

    #[must_use]
    pub fn ry(&self) -> f64 {
        self.ry
    }

    #[must_use]
    pub fn x_rotation(&self) -> f64 {
        self.x_rotation
    }

    #[must_use]
    pub fn large_arc(&self) -> bool {
        self.large_arc
    }

    #[must_use]
    pub fn sweep(&self) -> bool {
        self.sweep
    }

    pub fn set_start(&mut self, start: Point2) {
        self.start = start;
        self.cache = ArcCache::default();
    }

    pub fn set_end(&mut self, end: Point2) {
        self.end = end;
        self.cache = ArcCache::default();
    }

    /// The center parameterization, or `None` for a degenerate arc.
    #[must_use]
    pub fn center_parameterization(&self) -> Option<&CenterArc> {
        self.cache
            .center
            .get_or_init(|| {
                endpoint_to_center(
                    &self.start,
                    &self.end,
                    self.rx,
                    self.ry,
                    self.x_rotation,
                    self.large_arc,
                    self.sweep,
                    EPSILON,
                )
            })
            .as_ref()
    }

    /// True when the arc degenerates to its chord.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.center_parameterization().is_none()
    }

    fn chord_point_at(&self, t: f64) -> Point2 {
        Point2::new(
            self.start.x + t * (self.end.x - self.start.x),
            self.start.y + t * (self.end.y - self.start.y),
        )
    }
}

impl Curve for EllipticalArc {
    fn start(&self) -> Point2 {
        self.start
    }

    fn end(&self) -> Point2 {
        self.end
    }

    fn point_at(&self, t: f64) -> Point2 {
        match self.center_parameterization() {
            Some(center) => arc_point_at(center, t),
            None => self.chord_point_at(t),
        }
    }

    fn tangent(&self, t: f64) -> Result<Vector2> {
        match self.center_parameterization() {
            Some(center) => unit_tangent(arc_derivative_at(center, t)),
            None => unit_tangent(self.end - self.start),
        }
    }

    fn length(&self) -> f64 {
        *self.cache.length.get_or_init(|| {
            let Some(center) = self.center_parameterization().copied() else {
                return (self.end - self.start).norm();
            };
            // Integrate per quarter-turn subinterval to keep the
            // quadrature accurate on long sweeps.
            let pieces = (center.sweep_angle.abs() / FRAC_PI_2).ceil().max(1.0);
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let n = pieces as usize;
            let mut total = 0.0;
            for i in 0..n {
                let u0 = i as f64 / pieces;
                let u1 = (i as f64 + 1.0) / pieces;
                let sub = CenterArc {
                    start_angle: center.start_angle + u0 * center.sweep_angle,
                    sweep_angle: (u1 - u0) * center.sweep_angle,
                    ..center
                };
                total += curve_length(|t| arc_derivative_at(&sub, t));
            }
            total
        })
    }

    fn bounds(&self) -> Aabb {
        *self.cache.bounds.get_or_init(|| {
            let mut bb = Aabb::new(self.start, self.end);
            let Some(center) = self.center_parameterization() else {
                return bb;
            };
            // Angles where the rotated ellipse is extremal in x and y;
            // each candidate has a second branch half a turn away.
            let theta_x = (-center.ry * center.x_rotation.sin())
                .atan2(center.rx * center.x_rotation.cos());
            let theta_y =
                (center.ry * center.x_rotation.cos()).atan2(center.rx * center.x_rotation.sin());
            for base in [theta_x, theta_y] {
                for branch in [base, base + PI] {
                    if let Some(t) = sweep_parameter(center, branch) {
                        bb.expand(&arc_point_at(center, t));
                    }
                }
            }
            bb
        })
    }
}

/// Maps an absolute angle into the arc's `[0, 1]` parameter range, or
/// `None` when the angle is not covered by the sweep.
fn sweep_parameter(arc: &CenterArc, angle: f64) -> Option<f64> {
    let eps = 1e-9;
    let mut delta = angle - arc.start_angle;
    if arc.sweep_angle > 0.0 {
        while delta < -eps {
            delta += 2.0 * PI;
        }
        while delta > 2.0 * PI + eps {
            delta -= 2.0 * PI;
        }
    } else {
        while delta > eps {
            delta -= 2.0 * PI;
        }
        while delta < -2.0 * PI - eps {
            delta += 2.0 * PI;
        }
    }
    let t = delta / arc.sweep_angle;
    if (-eps..=1.0 + eps).contains(&t) {
        Some(t.clamp(0.0, 1.0))
    } else {
        None
    }
}
