use crate::error::{GeometryError, ParseError, Result};
use crate::math::measure_2d::{perimeter, polyline_length, signed_area, Aabb};
use crate::math::Point2;

use super::intersect::point_polygon;
use super::locus::Locus;

/// An open chain of points connected by straight segments.
#[derive(Debug, Clone, PartialEq)]
pub struct Polyline {
    points: Vec<Point2>,
}

impl Polyline {
    /// # Errors
    ///
    /// `GeometryError::InsufficientPoints` for fewer than 2 points.
    pub fn new(points: Vec<Point2>) -> Result<Self> {
        if points.len() < 2 {
            return Err(GeometryError::InsufficientPoints {
                context: "polyline",
                required: 2,
                actual: points.len(),
            }
            .into());
        }
        Ok(Self { points })
    }

    #[must_use]
    pub fn points(&self) -> &[Point2] {
        &self.points
    }

    #[must_use]
    pub fn length(&self) -> f64 {
        polyline_length(&self.points)
    }

    #[must_use]
    pub fn bounds(&self) -> Aabb {
        // The constructor guarantees at least two points.
        Aabb::from_points(&self.points).unwrap_or_else(|| Aabb::new(self.points[0], self.points[0]))
    }

    /// Arc-length interpolation along the chain.
    ///
    /// # Errors
    ///
    /// `GeometryError::ParameterOutOfRange` when `t` is outside `[0, 1]`.
    pub fn interpolate(&self, t: f64) -> Result<Point2> {
        interpolate_chain(&self.points, false, t)
    }
}

/// A closed polygon contour. The closing edge from the last point back to
/// the first is implicit.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    points: Vec<Point2>,
}

impl Polygon {
    /// # Errors
    ///
    /// `GeometryError::InsufficientPoints` for fewer than 3 points.
    pub fn new(points: Vec<Point2>) -> Result<Self> {
        if points.len() < 3 {
            return Err(GeometryError::InsufficientPoints {
                context: "polygon",
                required: 3,
                actual: points.len(),
            }
            .into());
        }
        Ok(Self { points })
    }

    /// Parses a flat coordinate string: numbers separated by whitespace
    /// and/or the separator character, consumed in x/y pairs.
    ///
    /// # Errors
    ///
    /// `ParseError::OddCoordinateCount` for an odd number of values,
    /// `ParseError::MalformedNumber` for an unparseable token, and the
    /// constructor's `InsufficientPoints` for short rings.
    pub fn from_coordinate_string(text: &str, separator: char) -> Result<Self> {
        let tokens: Vec<&str> = text
            .split(|c: char| c.is_whitespace() || c == separator)
            .filter(|s| !s.is_empty())
            .collect();
        if tokens.len() % 2 != 0 {
            return Err(ParseError::OddCoordinateCount(tokens.len()).into());
        }
        let mut values = Vec::with_capacity(tokens.len());
        for tok in tokens {
            let v: f64 = tok
                .parse()
                .map_err(|_| ParseError::MalformedNumber(tok.to_string()))?;
            values.push(v);
        }
        let points = values
            .chunks_exact(2)
            .map(|c| Point2::new(c[0], c[1]))
            .collect();
        Self::new(points)
    }

    /// Serializes the ring as `x,y x,y ...` using the given separator.
    #[must_use]
    pub fn to_coordinate_string(&self, separator: char) -> String {
        self.points
            .iter()
            .map(|p| format!("{}{}{}", p.x, separator, p.y))
            .collect::<Vec<_>>()
            .join(" ")
    }

    #[must_use]
    pub fn points(&self) -> &[Point2] {
        &self.points
    }

    #[must_use]
    pub fn signed_area(&self) -> f64 {
        signed_area(&self.points)
    }

    #[must_use]
    pub fn perimeter(&self) -> f64 {
        perimeter(&self.points)
    }

    #[must_use]
    pub fn bounds(&self) -> Aabb {
        Aabb::from_points(&self.points).unwrap_or_else(|| Aabb::new(self.points[0], self.points[0]))
    }

    /// Classifies `p` against the contour: `Point` for inside or on the
    /// boundary, `Outside` otherwise.
    ///
    /// # Errors
    ///
    /// Propagates the ring-size precondition of the classifier (cannot
    /// trigger through a constructed `Polygon`).
    pub fn contains(&self, p: &Point2, eps: f64) -> Result<Locus> {
        point_polygon(p, &self.points, eps)
    }

    /// Arc-length interpolation around the closed ring, closing edge
    /// included.
    ///
    /// # Errors
    ///
    /// `GeometryError::ParameterOutOfRange` when `t` is outside `[0, 1]`.
    pub fn interpolate(&self, t: f64) -> Result<Point2> {
        interpolate_chain(&self.points, true, t)
    }
}

/// Shared arc-length interpolation over a point chain, optionally closed.
fn interpolate_chain(points: &[Point2], closed: bool, t: f64) -> Result<Point2> {
    if !(0.0..=1.0).contains(&t) {
        return Err(GeometryError::ParameterOutOfRange {
            parameter: "t",
            value: t,
            min: 0.0,
            max: 1.0,
        }
        .into());
    }
    if t == 0.0 {
        return Ok(points[0]);
    }
    if t == 1.0 {
        return Ok(if closed { points[0] } else { points[points.len() - 1] });
    }

    let total = if closed {
        perimeter(points)
    } else {
        polyline_length(points)
    };
    if total <= 0.0 {
        return Ok(points[0]);
    }

    let mut remaining = t * total;
    let edge_count = if closed { points.len() } else { points.len() - 1 };
    for i in 0..edge_count {
        let a = points[i];
        let b = points[(i + 1) % points.len()];
        let len = (b - a).norm();
        if remaining <= len {
            if len <= 0.0 {
                return Ok(a);
            }
            let u = remaining / len;
            return Ok(Point2::new(a.x + u * (b.x - a.x), a.y + u * (b.y - a.y)));
        }
        remaining -= len;
    }
    Ok(if closed { points[0] } else { points[points.len() - 1] })
}
