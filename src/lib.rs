pub mod error;
pub mod geometry;
pub mod math;
pub mod obstacles;
pub mod operations;
pub mod pathfinding;

pub use error::{NavError, Result};
pub use geometry::{Fill, Polygon};
pub use obstacles::{NavMesh, ObstacleId, ObstacleMap};
pub use operations::merge::merge;
pub use operations::offset::expand;
pub use operations::query::is_inside;
pub use pathfinding::find_path;
