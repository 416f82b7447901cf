pub mod curve;
pub mod intersect;
pub mod locus;
pub mod pathdata;
pub mod polycurve;
pub mod polyline;

pub use curve::{CubicBezier, Curve, EllipticalArc, LineSegment, QuadraticBezier, Subcurve};
pub use locus::Locus;
pub use pathdata::ParseOptions;
pub use polycurve::{PathSegment, Polycurve};
pub use polyline::{Polygon, Polyline};
