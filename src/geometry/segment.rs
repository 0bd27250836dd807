use crate::math::{Point2, Vector2};

use super::polygon::Polygon;

/// A directed line segment `p1 → p2`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSegment {
    pub p1: Point2,
    pub p2: Point2,
}

impl LineSegment {
    /// Creates a new segment.
    #[must_use]
    pub fn new(p1: Point2, p2: Point2) -> Self {
        Self { p1, p2 }
    }

    /// Vector from `p1` to `p2`.
    #[must_use]
    pub fn direction(&self) -> Vector2 {
        self.p2 - self.p1
    }

    /// Euclidean length.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.direction().norm()
    }
}

/// A wall: a segment lying on an edge of a polygon, with a back-reference to
/// that polygon.
///
/// `start` and `end` are the arena indices of the polygon edge the segment
/// lies on. For a segment produced by [`Polygon::to_line_segments`] the
/// endpoints are exactly those corners; segments trimmed during a merge walk
/// may start part-way along the edge.
#[derive(Debug, Clone, Copy)]
pub struct PolygonLineSegment<'a> {
    pub p1: Point2,
    pub p2: Point2,
    pub polygon: &'a Polygon,
    pub start: usize,
    pub end: usize,
}

impl<'a> PolygonLineSegment<'a> {
    /// The edge of `polygon` leaving vertex `start` in traversal order.
    #[must_use]
    pub fn from_edge(polygon: &'a Polygon, start: usize) -> Self {
        let end = polygon.next_of(start);
        Self {
            p1: polygon.vertex(start).point,
            p2: polygon.vertex(end).point,
            polygon,
            start,
            end,
        }
    }

    /// The same wall, starting at `p1` instead of its first corner.
    #[must_use]
    pub fn starting_at(&self, p1: Point2) -> Self {
        Self { p1, ..*self }
    }

    /// Drops the polygon reference.
    #[must_use]
    pub fn line(&self) -> LineSegment {
        LineSegment::new(self.p1, self.p2)
    }

    /// Vector from `p1` to `p2`.
    #[must_use]
    pub fn direction(&self) -> Vector2 {
        self.p2 - self.p1
    }

    /// Returns `true` if this wall lies on `polygon` (identity, not shape).
    #[must_use]
    pub fn belongs_to(&self, polygon: &Polygon) -> bool {
        std::ptr::eq(self.polygon, polygon)
    }
}

impl PartialEq for PolygonLineSegment<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.p1 == other.p1
            && self.p2 == other.p2
            && std::ptr::eq(self.polygon, other.polygon)
            && self.start == other.start
            && self.end == other.end
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    fn triangle() -> Polygon {
        Polygon::solid(vec![
            Point2::new(0.0, 0.0),
            Point2::new(0.0, 3.0),
            Point2::new(4.0, 0.0),
        ])
        .unwrap()
    }

    #[test]
    fn line_segment_length() {
        let seg = LineSegment::new(Point2::new(0.0, 3.0), Point2::new(4.0, 0.0));
        assert_relative_eq!(seg.length(), 5.0);
        assert_eq!(seg.direction(), Vector2::new(4.0, -3.0));
    }

    #[test]
    fn from_edge_uses_traversal_neighbour() {
        let poly = triangle();
        let wall = PolygonLineSegment::from_edge(&poly, 2);
        assert_eq!(wall.end, 0);
        assert_eq!(wall.p2, Point2::new(0.0, 0.0));
    }

    #[test]
    fn starting_at_keeps_owner() {
        let poly = triangle();
        let wall = PolygonLineSegment::from_edge(&poly, 0);
        let trimmed = wall.starting_at(Point2::new(0.0, 1.0));
        assert!(trimmed.belongs_to(&poly));
        assert_eq!(trimmed.start, 0);
        assert_eq!(trimmed.p2, wall.p2);
        assert_ne!(trimmed, wall);
    }

    #[test]
    fn belongs_to_is_identity() {
        let a = triangle();
        let b = triangle();
        let wall = PolygonLineSegment::from_edge(&a, 0);
        assert!(wall.belongs_to(&a));
        assert!(!wall.belongs_to(&b));
    }
}
