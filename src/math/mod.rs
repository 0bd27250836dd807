pub mod intersect_2d;
pub mod polygon_2d;
pub mod vector_2d;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Hard cap on loop walks (vertex rings, merge traversals) so a malformed
/// input can never spin forever.
pub const ITERATION_LIMIT: usize = 1000;
