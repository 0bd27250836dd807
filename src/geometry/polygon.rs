use crate::error::PolygonError;
use crate::math::polygon_2d::{is_cyclic_rotation, loopable_index};
use crate::math::{Point2, ITERATION_LIMIT};

use super::segment::PolygonLineSegment;

/// Largest vertex count accepted by [`Polygon::new`]. Matches the loop-walk
/// cap so every well-formed ring closes before the cap is reached.
pub const MAX_POLYGON_VERTICES: usize = ITERATION_LIMIT;

/// Which side of a polygon's boundary blocks movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Fill {
    /// The enclosed area is solid (an obstacle).
    #[default]
    Solid,
    /// The enclosed area is open and everything outside it is solid
    /// (level bounds). This is the "inverted" polygon.
    Hole,
}

impl Fill {
    /// Returns the opposite fill.
    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            Fill::Solid => Fill::Hole,
            Fill::Hole => Fill::Solid,
        }
    }
}

/// A corner of a polygon ring.
///
/// `prev` and `next` index into the owning polygon's vertex arena and follow
/// the traversal direction: walking `prev → vertex → next` always keeps the
/// solid side on the right.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    pub point: Point2,
    pub prev: usize,
    pub next: usize,
}

/// A closed polygon with an explicit fill.
///
/// Points are stored clockwise (y-up) for both fills. A [`Fill::Hole`] is
/// traversed in reverse stored order, so the solid side of every traversed
/// edge is on its right regardless of fill.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    vertices: Vec<Vertex>,
    fill: Fill,
}

impl Polygon {
    /// Builds a polygon from its ordered points.
    ///
    /// # Errors
    ///
    /// - `PolygonError::TooFewPoints` for fewer than 3 points
    /// - `PolygonError::TooManyPoints` for more than [`MAX_POLYGON_VERTICES`]
    pub fn new(points: Vec<Point2>, fill: Fill) -> Result<Self, PolygonError> {
        let n = points.len();
        if n < 3 {
            return Err(PolygonError::TooFewPoints(n));
        }
        if n > MAX_POLYGON_VERTICES {
            return Err(PolygonError::TooManyPoints {
                count: n,
                limit: MAX_POLYGON_VERTICES,
            });
        }
        Ok(Self::link(points, fill))
    }

    /// Builds a solid obstacle.
    ///
    /// # Errors
    ///
    /// See [`Polygon::new`].
    pub fn solid(points: Vec<Point2>) -> Result<Self, PolygonError> {
        Self::new(points, Fill::Solid)
    }

    /// Builds an inverted polygon whose outside is solid.
    ///
    /// # Errors
    ///
    /// See [`Polygon::new`].
    pub fn hole(points: Vec<Point2>) -> Result<Self, PolygonError> {
        Self::new(points, Fill::Hole)
    }

    /// Links the arena. Callers guarantee `3 <= points.len() <= MAX`.
    pub(crate) fn link(points: Vec<Point2>, fill: Fill) -> Self {
        let n = points.len();
        let vertices = points
            .into_iter()
            .enumerate()
            .map(|(i, point)| {
                let before = (i + n - 1) % n;
                let after = (i + 1) % n;
                let (prev, next) = match fill {
                    Fill::Solid => (before, after),
                    Fill::Hole => (after, before),
                };
                Vertex { point, prev, next }
            })
            .collect();
        Self { vertices, fill }
    }

    /// Returns the fill of this polygon.
    #[must_use]
    pub fn fill(&self) -> Fill {
        self.fill
    }

    /// Returns `true` for a [`Fill::Hole`] polygon.
    #[must_use]
    pub fn is_inverted(&self) -> bool {
        self.fill == Fill::Hole
    }

    /// Returns the same points with a different fill.
    #[must_use]
    pub fn with_fill(&self, fill: Fill) -> Self {
        Self::link(self.to_points(), fill)
    }

    /// Returns the same points with the opposite fill.
    #[must_use]
    pub fn inverted(&self) -> Self {
        self.with_fill(self.fill.flipped())
    }

    /// Number of vertices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Always `false` for a constructed polygon.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns the vertex at arena index `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= self.len()`.
    #[must_use]
    pub fn vertex(&self, i: usize) -> &Vertex {
        &self.vertices[i]
    }

    /// Returns the point at arena index `i`, which wraps around the ring.
    #[must_use]
    pub fn point(&self, i: isize) -> &Point2 {
        &self.vertices[loopable_index(i, self.len())].point
    }

    /// Arena index of the vertex following `i` in traversal order.
    ///
    /// # Panics
    ///
    /// Panics if `i >= self.len()`.
    #[must_use]
    pub fn next_of(&self, i: usize) -> usize {
        self.vertices[i].next
    }

    /// Arena index of the vertex preceding `i` in traversal order.
    ///
    /// # Panics
    ///
    /// Panics if `i >= self.len()`.
    #[must_use]
    pub fn prev_of(&self, i: usize) -> usize {
        self.vertices[i].prev
    }

    /// Iterates the points in stored order.
    pub fn points(&self) -> impl Iterator<Item = &Point2> + '_ {
        self.vertices.iter().map(|v| &v.point)
    }

    /// Copies the points in stored order.
    #[must_use]
    pub fn to_points(&self) -> Vec<Point2> {
        self.points().copied().collect()
    }

    /// Walks `next` links from `start` until the ring closes.
    ///
    /// The walk stops after [`ITERATION_LIMIT`] vertices even if the ring has
    /// not closed; the vertices gathered so far are returned and the overrun
    /// is logged.
    #[must_use]
    pub fn vertices_from(&self, start: usize) -> Vec<usize> {
        let mut indices = Vec::with_capacity(self.len());
        let mut current = start;
        loop {
            indices.push(current);
            current = self.vertices[current].next;
            if current == start {
                break;
            }
            if indices.len() >= ITERATION_LIMIT {
                tracing::error!(
                    start,
                    limit = ITERATION_LIMIT,
                    "polygon ring did not close within the iteration limit"
                );
                break;
            }
        }
        indices
    }

    /// Walks `prev` links from `start`, the mirror of [`Self::vertices_from`].
    #[must_use]
    pub fn vertices_backward_from(&self, start: usize) -> Vec<usize> {
        let mut indices = self.vertices_from(start);
        // [start, n1, n2, ..., p1] -> [start, p1, ..., n2, n1]
        indices[1..].reverse();
        indices
    }

    /// Indices from `start` in traversal order: forward through the stored
    /// points for a solid polygon, backward for a hole.
    pub fn traversal_indices(&self, start: usize) -> impl Iterator<Item = usize> + '_ {
        self.vertices_from(start).into_iter()
    }

    /// All edges in traversal order, each `p1 → p2` with the solid side on
    /// its right. For a solid polygon these are the stored consecutive
    /// pairs, the last one wrapping to the first point.
    #[must_use]
    pub fn to_line_segments(&self) -> Vec<PolygonLineSegment<'_>> {
        self.traversal_indices(0)
            .map(|i| PolygonLineSegment::from_edge(self, i))
            .collect()
    }
}

/// Two polygons are equivalent when they have the same fill and the same
/// points in the same cyclic order (a rotation, never a reversal).
#[must_use]
pub fn polygons_equivalent(a: &Polygon, b: &Polygon) -> bool {
    a.fill == b.fill && is_cyclic_rotation(&a.to_points(), &b.to_points())
}
