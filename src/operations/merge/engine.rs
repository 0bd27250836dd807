use crate::geometry::{polygons_equivalent, Fill, LineSegment, Polygon, PolygonLineSegment};
use crate::math::intersect_2d::point_on_segment_2d;
use crate::math::polygon_2d::signed_area_2d;
use crate::math::vector_2d::distance;
use crate::math::{Point2, ITERATION_LIMIT};
use crate::operations::query::find_first_point_not_inside_another_poly;

use super::branch::{closest_branch_on, grow_collinear};

/// Unions a set of polygons by walking their combined outer boundary.
///
/// Equivalent inputs are collapsed first. Each remaining polygon that still
/// has a point outside every other polygon starts a walk from that point.
/// The walk always takes the nearest left turn, so it traces the outline of
/// everything it touches; the polygons whose walls it used are consumed.
/// Polygons with every point covered are dropped.
///
/// Result fills come from the winding of the traced loop: a loop that closes
/// counter-clockwise encloses open space and becomes a [`Fill::Hole`].
///
/// Disjoint inputs come back unchanged. Interiors enclosed by a ring of
/// separate polygons are not detected.
#[derive(Debug)]
pub struct MergePolygons<'a> {
    polygons: &'a [Polygon],
}

impl<'a> MergePolygons<'a> {
    /// Creates a new merge over `polygons`.
    #[must_use]
    pub fn new(polygons: &'a [Polygon]) -> Self {
        Self { polygons }
    }

    /// Executes the merge.
    #[must_use]
    pub fn execute(&self) -> Vec<Polygon> {
        let mut unique: Vec<Polygon> = Vec::with_capacity(self.polygons.len());
        for polygon in self.polygons {
            if !unique.iter().any(|u| polygons_equivalent(u, polygon)) {
                unique.push(polygon.clone());
            }
        }
        tracing::debug!(
            input = self.polygons.len(),
            unique = unique.len(),
            "merging polygons"
        );

        let mut consumed = vec![false; unique.len()];
        let mut merged = Vec::new();

        for i in 0..unique.len() {
            if consumed[i] {
                continue;
            }
            let Some(start) = find_first_point_not_inside_another_poly(&unique[i], &unique) else {
                tracing::trace!(polygon = i, "polygon fully covered, dropping");
                continue;
            };

            let walls: Vec<PolygonLineSegment<'_>> = unique
                .iter()
                .zip(&consumed)
                .filter(|(_, done)| !**done)
                .flat_map(|(polygon, _)| polygon.to_line_segments())
                .collect();
            let walk = walk_boundary(&unique[i], start, &walls);

            consumed[i] = true;
            for wall in walk.used.iter().map(|&w| &walls[w]) {
                if let Some(j) = unique.iter().position(|p| wall.belongs_to(p)) {
                    consumed[j] = true;
                }
            }

            merged.push(into_polygon(walk.points).unwrap_or_else(|| unique[i].clone()));
        }

        tracing::debug!(output = merged.len(), "merge complete");
        merged
    }
}

/// Unions `polygons`. See [`MergePolygons`].
#[must_use]
pub fn merge(polygons: &[Polygon]) -> Vec<Polygon> {
    MergePolygons::new(polygons).execute()
}

struct Walk {
    points: Vec<Point2>,
    used: Vec<usize>,
}

/// Traces the outline starting at vertex `start` of `polygon`, leaving along
/// its traversal edge. `used` holds indices into `walls`.
fn walk_boundary(polygon: &Polygon, start: usize, walls: &[PolygonLineSegment<'_>]) -> Walk {
    let origin = polygon.vertex(start).point;
    let plain: Vec<LineSegment> = walls.iter().map(PolygonLineSegment::line).collect();
    let mut walk = Walk {
        points: vec![origin],
        used: Vec::new(),
    };
    let mut current = LineSegment::new(origin, polygon.vertex(polygon.next_of(start)).point);

    for _ in 0..ITERATION_LIMIT {
        let (grown, extended_by) = grow_collinear(current, &plain);
        walk.used.extend(extended_by);

        let back_home = (origin != grown.p1 && point_on_segment_2d(&origin, &grown.p1, &grown.p2))
            .then(|| distance(&grown.p1, &origin));

        match (closest_branch_on(&grown, walls), back_home) {
            (Some((_, branch)), Some(home)) if home <= branch.distance => return walk,
            (None, Some(_)) => return walk,
            (Some((wall, branch)), _) => {
                if branch.next_line.p1 == origin {
                    return walk;
                }
                walk.points.push(branch.next_line.p1);
                walk.used.push(wall);
                current = branch.next_line.line();
            }
            (None, None) => {
                tracing::warn!(at = ?grown.p2, "merge walk lost the boundary");
                return walk;
            }
        }
    }

    tracing::error!(
        limit = ITERATION_LIMIT,
        "merge walk did not close, keeping partial outline"
    );
    walk
}

/// Builds the merged polygon from a closed walk. Returns `None` when the walk
/// did not produce a usable ring.
fn into_polygon(mut points: Vec<Point2>) -> Option<Polygon> {
    let fill = if signed_area_2d(&points) > 0.0 {
        points.reverse();
        Fill::Hole
    } else {
        Fill::Solid
    };
    match Polygon::new(points, fill) {
        Ok(polygon) => Some(polygon),
        Err(err) => {
            tracing::warn!(%err, "discarding merge walk");
            None
        }
    }
}
