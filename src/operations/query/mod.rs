mod point_in_polygon;

pub use point_in_polygon::{find_first_point_not_inside_another_poly, is_inside};
