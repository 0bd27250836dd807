mod branch;
mod engine;

pub use branch::{get_closest_branch, grow_overlapping_collinear_lines_in_direction_of_p2, Branch};
pub use engine::{merge, MergePolygons};
