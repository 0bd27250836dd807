use crate::geometry::PolygonLineSegment;
use crate::math::Point2;

use super::path::{Path, Route};

/// Observer for the intermediate state of a search, e.g. to draw it.
///
/// Every hook defaults to doing nothing.
pub trait PathDebugSink {
    /// A candidate's last segment hit `wall` at `point`.
    fn on_intersection(&mut self, _point: &Point2, _wall: &PolygonLineSegment<'_>) {}

    /// A candidate finished walking around an obstacle.
    fn on_candidate(&mut self, _path: &Path) {}

    /// The search picked `route`.
    fn on_route(&mut self, _route: &Route) {}
}

/// Discards every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopDebugSink;

impl PathDebugSink for NoopDebugSink {}
