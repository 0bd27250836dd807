mod expand;

pub use expand::{expand, ExpandPolygon};
