use crate::error::PathfindingError;
use crate::geometry::{Polygon, PolygonLineSegment};
use crate::math::Point2;
use crate::operations::query::is_inside;
use crate::pathfinding::{FindPath, PathfinderConfig, Route};

/// Non-overlapping obstacle polygons ready for path queries.
#[derive(Debug, Clone, Default)]
pub struct NavMesh {
    polygons: Vec<Polygon>,
    config: PathfinderConfig,
}

impl NavMesh {
    /// Wraps polygons that are already expanded and merged.
    #[must_use]
    pub fn from_polygons(polygons: Vec<Polygon>) -> Self {
        Self {
            polygons,
            config: PathfinderConfig::default(),
        }
    }

    /// Replaces the settings used by [`Self::route`].
    #[must_use]
    pub fn with_config(mut self, config: PathfinderConfig) -> Self {
        self.config = config;
        self
    }

    /// The merged polygons, holes included.
    #[must_use]
    pub fn polygons(&self) -> &[Polygon] {
        &self.polygons
    }

    /// Every edge of every polygon, solid side on the right.
    #[must_use]
    pub fn walls(&self) -> Vec<PolygonLineSegment<'_>> {
        self.polygons.iter().flat_map(Polygon::to_line_segments).collect()
    }

    /// Returns `true` if `point` is outside every polygon's solid area.
    /// Points on a boundary are not walkable.
    #[must_use]
    pub fn is_walkable(&self, point: &Point2) -> bool {
        !self.polygons.iter().any(|polygon| is_inside(point, polygon))
    }

    /// Shortest route from `start` to `target`.
    ///
    /// # Errors
    ///
    /// Returns a [`PathfindingError`] when the search finds no route.
    pub fn route(&self, start: Point2, target: Point2) -> Result<Route, PathfindingError> {
        FindPath::new(start, target)
            .with_config(self.config)
            .execute(&self.walls())
    }

    /// Waypoints from `start` to `target`, empty when there is no route.
    #[must_use]
    pub fn find_path(&self, start: Point2, target: Point2) -> Vec<Point2> {
        self.route(start, target).map(|route| route.points).unwrap_or_default()
    }
}
