pub mod arc_2d;
pub mod distance_2d;
pub mod intersect_2d;
pub mod measure_2d;
pub mod roots;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Default geometric tolerance for floating-point "treat as zero" decisions.
///
/// Every classification function takes an explicit `eps` parameter so that
/// callers working at unusual coordinate scales can tune it; this constant
/// is the documented default for ordinary coordinate ranges.
pub const EPSILON: f64 = 1e-10;
