pub mod polygon;
pub mod segment;

pub use polygon::{polygons_equivalent, Fill, Polygon, Vertex, MAX_POLYGON_VERTICES};
pub use segment::{LineSegment, PolygonLineSegment};
