//! Corner-walking shortest path search between two points among polygon
//! walls.

mod config;
mod debug;
mod path;
mod search;

pub use config::{PathfinderConfig, DEFAULT_MAX_DEPTH};
pub use debug::{NoopDebugSink, PathDebugSink};
pub use path::{Path, Route};
pub use search::{
    closest_intersection_with_walls, find_path, prev_and_next_corners_from_intersecting_wall,
    walk_around_a_poly, FindPath, WallHit,
};
