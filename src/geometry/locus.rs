use crate::error::{ConversionError, Result};
use crate::math::Point2;

/// The classified outcome of a geometric intersection query.
///
/// Exactly one variant is active per result. `Outside` is a refinement of
/// `Empty` meaning the query shape lies entirely outside the other;
/// `Union`, `Overlap`, `Parallel` and `CoincidentLine` are classification
/// markers carrying no geometry of their own.
#[derive(Debug, Clone, PartialEq)]
pub enum Locus {
    Empty,
    Outside,
    Point(Point2),
    PointSet(Vec<Point2>),
    Segment(Point2, Point2),
    Polyline(Vec<Point2>),
    PolylineSet(Vec<Vec<Point2>>),
    Polygon(Vec<Point2>),
    PolygonSet(Vec<Vec<Point2>>),
    Union,
    Overlap,
    Parallel,
    CoincidentLine,
}

impl Locus {
    /// True for `Empty` and its refinement `Outside`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty | Self::Outside)
    }

    /// The variant name, used in conversion errors.
    #[must_use]
    pub fn variant_name(&self) -> &'static str {
        match self {
            Self::Empty => "Empty",
            Self::Outside => "Outside",
            Self::Point(_) => "Point",
            Self::PointSet(_) => "PointSet",
            Self::Segment(..) => "Segment",
            Self::Polyline(_) => "Polyline",
            Self::PolylineSet(_) => "PolylineSet",
            Self::Polygon(_) => "Polygon",
            Self::PolygonSet(_) => "PolygonSet",
            Self::Union => "Union",
            Self::Overlap => "Overlap",
            Self::Parallel => "Parallel",
            Self::CoincidentLine => "CoincidentLine",
        }
    }

    /// Builds the most specific variant for a discrete point list:
    /// `Empty`, `Point`, or `PointSet`.
    #[must_use]
    pub fn from_points(mut points: Vec<Point2>) -> Self {
        match points.len() {
            0 => Self::Empty,
            1 => Self::Point(points.remove(0)),
            _ => Self::PointSet(points),
        }
    }

    /// The concrete points of a geometric variant.
    ///
    /// # Errors
    ///
    /// `ConversionError::WrongVariant` for marker and empty variants.
    pub fn try_points(&self) -> Result<Vec<Point2>> {
        match self {
            Self::Point(p) => Ok(vec![*p]),
            Self::Segment(a, b) => Ok(vec![*a, *b]),
            Self::PointSet(pts) | Self::Polyline(pts) | Self::Polygon(pts) => Ok(pts.clone()),
            other => Err(ConversionError::WrongVariant {
                expected: "a point-bearing variant",
                found: other.variant_name(),
            }
            .into()),
        }
    }

    /// Converts a point-sequence variant into `Polygon`.
    ///
    /// # Errors
    ///
    /// `ConversionError::EmptyPointSet` when the sequence is empty, and
    /// `ConversionError::WrongVariant` for variants that carry no ordered
    /// point sequence.
    pub fn try_into_polygon(self) -> Result<Self> {
        match self {
            Self::Polygon(pts) | Self::PointSet(pts) | Self::Polyline(pts) => {
                if pts.is_empty() {
                    Err(ConversionError::EmptyPointSet.into())
                } else {
                    Ok(Self::Polygon(pts))
                }
            }
            other => Err(ConversionError::WrongVariant {
                expected: "Polygon",
                found: other.variant_name(),
            }
            .into()),
        }
    }

    /// Converts a point-sequence variant into `Polyline`.
    ///
    /// # Errors
    ///
    /// Same failure conditions as [`Locus::try_into_polygon`]; a `Segment`
    /// additionally converts to its two-point polyline.
    pub fn try_into_polyline(self) -> Result<Self> {
        match self {
            Self::Segment(a, b) => Ok(Self::Polyline(vec![a, b])),
            Self::Polyline(pts) | Self::PointSet(pts) | Self::Polygon(pts) => {
                if pts.is_empty() {
                    Err(ConversionError::EmptyPointSet.into())
                } else {
                    Ok(Self::Polyline(pts))
                }
            }
            other => Err(ConversionError::WrongVariant {
                expected: "Polyline",
                found: other.variant_name(),
            }
            .into()),
        }
    }
}
