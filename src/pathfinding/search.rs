use crate::error::PathfindingError;
use crate::geometry::{LineSegment, Polygon, PolygonLineSegment};
use crate::math::intersect_2d::{point_on_segment_2d, segment_segment_intersect_2d};
use crate::math::vector_2d::distance;
use crate::math::Point2;
use crate::operations::query::is_inside;

use super::config::PathfinderConfig;
use super::debug::{NoopDebugSink, PathDebugSink};
use super::path::{Path, Route};

/// Where a segment first meets a wall.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WallHit<'a> {
    pub point: Point2,
    pub wall: PolygonLineSegment<'a>,
}

/// Shortest obstacle-avoiding route from `start` to `target`.
///
/// The search keeps a list of candidate paths, initially the straight line.
/// Each pass checks every unfinished candidate's unverified segments in order
/// and finds the first one that runs into a wall. A candidate with no such
/// segment is finished. Otherwise it is cut back to the start of the blocked
/// segment and split in two: one copy walks around the obstacle backwards
/// from the wall's first corner, the other forwards from its second, each
/// until the target is in sight or another obstacle is in the way. A leg
/// that leaves a corner straight into that corner's own obstacle is cut
/// back the same way and walked around from the corner's neighbours.
///
/// The shortest finished candidate wins.
#[derive(Debug, Clone, Copy)]
pub struct FindPath {
    start: Point2,
    target: Point2,
    config: PathfinderConfig,
}

impl FindPath {
    /// Creates a new search from `start` to `target` with default settings.
    #[must_use]
    pub fn new(start: Point2, target: Point2) -> Self {
        Self {
            start,
            target,
            config: PathfinderConfig::default(),
        }
    }

    /// Replaces the search settings.
    #[must_use]
    pub fn with_config(mut self, config: PathfinderConfig) -> Self {
        self.config = config;
        self
    }

    /// Executes the search against `walls`.
    ///
    /// # Errors
    ///
    /// Returns [`PathfindingError::SearchDepthExceeded`] if no candidate
    /// reached the target within the configured depth, or
    /// [`PathfindingError::NoPathFound`] if every candidate was abandoned.
    pub fn execute(&self, walls: &[PolygonLineSegment<'_>]) -> Result<Route, PathfindingError> {
        self.execute_with_sink(walls, &mut NoopDebugSink)
    }

    /// Same as [`Self::execute`], reporting intermediate state to `sink`.
    ///
    /// # Errors
    ///
    /// See [`Self::execute`].
    pub fn execute_with_sink(
        &self,
        walls: &[PolygonLineSegment<'_>],
        sink: &mut dyn PathDebugSink,
    ) -> Result<Route, PathfindingError> {
        let mut paths = vec![Path::new(vec![self.start, self.target])];
        let mut depth = 0;
        let mut exceeded = false;

        loop {
            let pending: Vec<usize> = (0..paths.len()).filter(|&i| paths[i].is_pending()).collect();
            if pending.is_empty() {
                break;
            }
            if depth > self.config.max_depth {
                tracing::error!(
                    depth,
                    unfinished = pending.len(),
                    "path search exceeded its depth limit"
                );
                for i in pending {
                    paths[i].invalidate();
                }
                exceeded = true;
                break;
            }

            for i in pending {
                let len = paths[i].points.len();
                let target = match paths[i].points.as_slice() {
                    [_, .., target] => *target,
                    _ => {
                        tracing::error!(points = len, "path too short to extend");
                        paths[i].invalidate();
                        continue;
                    }
                };
                let (blocked, polygon, (prev, next)) = match check_segments(&paths[i], walls) {
                    SegmentCheck::Clear => {
                        paths[i].finish();
                        continue;
                    }
                    SegmentCheck::Blocked { index, hit } => {
                        sink.on_intersection(&hit.point, &hit.wall);
                        (index, hit.wall.polygon, prev_and_next_corners_from_intersecting_wall(&hit.wall))
                    }
                    SegmentCheck::IntoSolid { index, polygon } => {
                        let corner = paths[i].points[index];
                        let Some(at) = polygon.points().position(|p| *p == corner) else {
                            tracing::trace!(segment = index, "candidate heads into an obstacle");
                            paths[i].invalidate();
                            continue;
                        };
                        (index, polygon, (polygon.prev_of(at), polygon.next_of(at)))
                    }
                };

                paths[i].truncate_at(blocked);
                let mut branched = paths[i].clone();
                walk_around_a_poly(
                    &polygon.vertices_backward_from(prev),
                    polygon,
                    target,
                    walls,
                    &mut paths[i],
                );
                walk_around_a_poly(&polygon.vertices_from(next), polygon, target, walls, &mut branched);
                sink.on_candidate(&paths[i]);
                sink.on_candidate(&branched);
                paths.push(branched);
            }
            depth += 1;
        }

        let finished = paths.len();
        let best = paths
            .into_iter()
            .filter(|p| p.done && !p.invalid)
            .reduce(|best, p| if p.distance < best.distance { p } else { best });

        match best {
            Some(path) => {
                let route = Route::from(path);
                tracing::debug!(
                    candidates = finished,
                    depth,
                    distance = route.distance,
                    "path found"
                );
                sink.on_route(&route);
                Ok(route)
            }
            None if exceeded => Err(PathfindingError::SearchDepthExceeded { depth }),
            None => Err(PathfindingError::NoPathFound),
        }
    }
}

/// Waypoints from `start` to `target` around `walls`, or an empty list when
/// no route was found. See [`FindPath`].
#[must_use]
pub fn find_path(start: Point2, target: Point2, walls: &[PolygonLineSegment<'_>]) -> Vec<Point2> {
    match FindPath::new(start, target).execute(walls) {
        Ok(route) => route.points,
        Err(err) => {
            tracing::debug!(%err, "no route");
            Vec::new()
        }
    }
}

/// The wall hit nearest to `line.p1`. Hits exactly at `line.p1` are ignored
/// so that a segment leaving a corner does not collide with that corner.
#[must_use]
pub fn closest_intersection_with_walls<'a>(
    line: &LineSegment,
    walls: &[PolygonLineSegment<'a>],
) -> Option<WallHit<'a>> {
    let mut closest: Option<(f64, WallHit<'a>)> = None;
    for wall in walls {
        let Some((point, _, _)) = segment_segment_intersect_2d(&line.p1, &line.p2, &wall.p1, &wall.p2)
        else {
            continue;
        };
        if point == line.p1 {
            continue;
        }
        let dist = distance(&line.p1, &point);
        if closest.as_ref().is_none_or(|(best, _)| dist < *best) {
            closest = Some((dist, WallHit { point, wall: *wall }));
        }
    }
    closest.map(|(_, hit)| hit)
}

/// Arena indices of the wall's corners as `(prev, next)` in the owning
/// polygon's traversal order.
#[must_use]
pub fn prev_and_next_corners_from_intersecting_wall(wall: &PolygonLineSegment<'_>) -> (usize, usize) {
    if wall.polygon.prev_of(wall.start) == wall.end {
        (wall.end, wall.start)
    } else {
        (wall.start, wall.end)
    }
}

/// Appends `corners` (arena indices of `polygon`) to `path` until the target
/// is visible from the newest corner or the view is blocked by a different
/// polygon, then appends `target`.
///
/// A corner replaces the previous one when it is strictly closer to the
/// point before that and directly reachable from it.
pub fn walk_around_a_poly(
    corners: &[usize],
    polygon: &Polygon,
    target: Point2,
    walls: &[PolygonLineSegment<'_>],
    path: &mut Path,
) {
    for &corner in corners {
        let vertex = polygon.vertex(corner).point;

        let shortcut = match path.points.as_slice() {
            [.., penultimate, last] => {
                distance(penultimate, last) > distance(penultimate, &vertex)
                    && is_unobstructed(penultimate, &vertex, walls)
            }
            _ => false,
        };
        if shortcut {
            path.points.pop();
            path.verified = path.verified.min(path.points.len().saturating_sub(1));
        }
        path.points.push(vertex);

        match closest_intersection_with_walls(&LineSegment::new(vertex, target), walls) {
            Some(hit) if hit.wall.belongs_to(polygon) => {}
            _ => break,
        }
    }
    path.points.push(target);
}

enum SegmentCheck<'a> {
    Clear,
    Blocked { index: usize, hit: WallHit<'a> },
    /// The leg leaving the corner at `index` heads straight into `polygon`.
    IntoSolid { index: usize, polygon: &'a Polygon },
}

/// Checks the unverified segments of `path` in order. Touching a wall at
/// either end of a segment does not block it.
fn check_segments<'a>(path: &Path, walls: &[PolygonLineSegment<'a>]) -> SegmentCheck<'a> {
    for (index, line) in path.unverified_segments() {
        let hit = closest_intersection_with_walls(&line, walls).filter(|hit| hit.point != line.p2);
        let reach = hit.map_or(line.p2, |hit| hit.point);
        if index > 0 {
            if let Some(polygon) = solid_around_middle(&line.p1, &reach, walls) {
                return SegmentCheck::IntoSolid { index, polygon };
            }
        }
        if let Some(hit) = hit {
            return SegmentCheck::Blocked { index, hit };
        }
    }
    SegmentCheck::Clear
}

/// The polygon whose solid part strictly contains the middle of
/// `from → to`. A leg along a wall, or whose middle is on one, is never
/// contained.
fn solid_around_middle<'a>(
    from: &Point2,
    to: &Point2,
    walls: &[PolygonLineSegment<'a>],
) -> Option<&'a Polygon> {
    // The rounded middle of an edge leg can miss a slanted edge.
    let along_wall = |wall: &PolygonLineSegment<'_>| {
        (wall.p1 == *from && wall.p2 == *to) || (wall.p1 == *to && wall.p2 == *from)
    };
    let middle = nalgebra::center(from, to);
    if walls
        .iter()
        .any(|wall| along_wall(wall) || point_on_segment_2d(&middle, &wall.p1, &wall.p2))
    {
        return None;
    }
    let mut checked: Vec<&Polygon> = Vec::new();
    walls.iter().map(|wall| wall.polygon).find(|&polygon| {
        if checked.iter().any(|seen| std::ptr::eq(*seen, polygon)) {
            return false;
        }
        checked.push(polygon);
        is_inside(&middle, polygon)
    })
}

fn is_unobstructed(from: &Point2, to: &Point2, walls: &[PolygonLineSegment<'_>]) -> bool {
    closest_intersection_with_walls(&LineSegment::new(*from, *to), walls).is_none_or(|hit| hit.point == *to)
        && solid_around_middle(from, to, walls).is_none()
}
