use thiserror::Error;

/// Top-level error type for the navigation core.
#[derive(Debug, Error)]
pub enum NavError {
    #[error(transparent)]
    Polygon(#[from] PolygonError),

    #[error(transparent)]
    Pathfinding(#[from] PathfindingError),

    #[error(transparent)]
    Obstacle(#[from] ObstacleError),
}

/// Errors raised while constructing polygons.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PolygonError {
    #[error("polygon needs at least 3 points, got {0}")]
    TooFewPoints(usize),

    #[error("polygon has {count} points, more than the limit of {limit}")]
    TooManyPoints { count: usize, limit: usize },
}

/// Recoverable outcomes of a path search that produced no route.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PathfindingError {
    #[error("search gave up after {depth} passes")]
    SearchDepthExceeded { depth: usize },

    #[error("no path to the target exists")]
    NoPathFound,
}

/// Errors related to the obstacle arena.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ObstacleError {
    #[error("obstacle not found")]
    NotFound,
}

/// Convenience type alias for results using [`NavError`].
pub type Result<T> = std::result::Result<T, NavError>;
