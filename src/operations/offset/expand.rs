use crate::geometry::Polygon;
use crate::math::vector_2d::{cross_2d, left_normal, with_magnitude};
use crate::math::{Point2, Vector2};

/// Grows every vertex of a polygon away from its solid side.
///
/// Each vertex moves by exactly `magnitude` along the anti-bisector of its
/// two edges. Neighbours are taken in traversal order, where the solid side
/// is always on the right, so a [`Fill::Hole`](crate::geometry::Fill::Hole)
/// shrinks its open interior with the same per-vertex math.
///
/// The result keeps the stored point order, fill and vertex count.
/// Aggressive shrinking can self-intersect; that is not repaired.
#[derive(Debug)]
pub struct ExpandPolygon<'a> {
    polygon: &'a Polygon,
    magnitude: f64,
}

impl<'a> ExpandPolygon<'a> {
    /// Creates a new expansion of `polygon` by `magnitude`.
    #[must_use]
    pub fn new(polygon: &'a Polygon, magnitude: f64) -> Self {
        Self { polygon, magnitude }
    }

    /// Executes the expansion.
    #[must_use]
    pub fn execute(&self) -> Polygon {
        if self.magnitude == 0.0 {
            return self.polygon.clone();
        }
        let points = (0..self.polygon.len())
            .map(|i| {
                let v = self.polygon.vertex(i);
                let prev = self.polygon.vertex(v.prev).point;
                let next = self.polygon.vertex(v.next).point;
                v.point + with_magnitude(&offset_direction(&prev, &v.point, &next), self.magnitude)
            })
            .collect();
        Polygon::link(points, self.polygon.fill())
    }
}

/// Grows `polygon` by `magnitude`. See [`ExpandPolygon`].
#[must_use]
pub fn expand(polygon: &Polygon, magnitude: f64) -> Polygon {
    ExpandPolygon::new(polygon, magnitude).execute()
}

/// Unnormalised direction that points away from the solid side at `vertex`.
fn offset_direction(prev: &Point2, vertex: &Point2, next: &Point2) -> Vector2 {
    let to_prev = prev - vertex;
    let to_next = next - vertex;
    let sum = to_prev + to_next;

    if sum == Vector2::zeros() {
        // Straight corner: the edge normal on the open (left) side.
        return left_normal(&(vertex - prev));
    }

    // Right turns are convex for a ring with the solid on its right; the
    // edge vectors then fold around the solid and must be flipped.
    let turn = cross_2d(&(vertex - prev), &(next - vertex));
    if turn > 0.0 {
        sum
    } else {
        -sum
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::f64::consts::SQRT_2;

    use approx::assert_relative_eq;

    use super::*;
    use crate::geometry::{polygons_equivalent, Fill};

    fn pts(raw: &[(f64, f64)]) -> Vec<Point2> {
        raw.iter().map(|&(x, y)| Point2::new(x, y)).collect()
    }

    fn assert_points_eq(actual: &[Point2], expected: &[(f64, f64)]) {
        assert_eq!(actual.len(), expected.len(), "{actual:?}");
        for (a, &(x, y)) in actual.iter().zip(expected) {
            assert_relative_eq!(a.x, x, epsilon = 1e-12);
            assert_relative_eq!(a.y, y, epsilon = 1e-12);
        }
    }

    #[test]
    fn grows_solid_square_at_every_corner() {
        let poly = Polygon::solid(pts(&[(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0)])).unwrap();
        let grown = expand(&poly, SQRT_2);
        assert_eq!(grown.fill(), Fill::Solid);
        assert_points_eq(
            &grown.to_points(),
            &[(-1.0, -1.0), (-1.0, 2.0), (2.0, 2.0), (2.0, -1.0)],
        );
    }

    #[test]
    fn shrinks_hole_towards_its_centre() {
        let poly = Polygon::hole(pts(&[(0.0, 0.0), (0.0, 2.0), (2.0, 2.0), (2.0, 0.0)])).unwrap();
        let shrunk = ExpandPolygon::new(&poly, SQRT_2).execute();
        assert!(shrunk.is_inverted());
        assert_points_eq(
            &shrunk.to_points(),
            &[(1.0, 1.0), (1.0, 1.0), (1.0, 1.0), (1.0, 1.0)],
        );
    }

    #[test]
    fn reflex_corner_moves_into_the_notch() {
        // L-shape with its inner corner at (1, 1).
        let poly = Polygon::solid(pts(&[
            (0.0, 0.0),
            (0.0, 2.0),
            (1.0, 2.0),
            (1.0, 1.0),
            (2.0, 1.0),
            (2.0, 0.0),
        ]))
        .unwrap();
        let grown = expand(&poly, SQRT_2);
        let inner = grown.vertex(3).point;
        assert_relative_eq!(inner.x, 2.0, epsilon = 1e-12);
        assert_relative_eq!(inner.y, 2.0, epsilon = 1e-12);
    }

    #[test]
    fn straight_corner_moves_along_edge_normal() {
        let poly = Polygon::solid(pts(&[(0.0, 0.0), (0.0, 1.0), (0.0, 2.0), (2.0, 2.0), (2.0, 0.0)])).unwrap();
        let grown = expand(&poly, 0.5);
        let mid = grown.vertex(1).point;
        assert_relative_eq!(mid.x, -0.5);
        assert_relative_eq!(mid.y, 1.0);
    }

    #[test]
    fn zero_margin_is_identity() {
        let poly = Polygon::solid(pts(&[(0.0, 0.0), (1.0, 3.0), (4.0, 1.0), (2.0, -1.0)])).unwrap();
        let same = expand(&poly, 0.0);
        assert!(polygons_equivalent(&poly, &same));
        let hole = poly.inverted();
        assert!(polygons_equivalent(&hole, &expand(&hole, 0.0)));
    }

    #[test]
    fn keeps_vertex_count_and_order() {
        let poly = Polygon::solid(pts(&[(0.0, 0.0), (0.0, 4.0), (4.0, 4.0), (4.0, 0.0)])).unwrap();
        let grown = expand(&poly, 1.0);
        assert_eq!(grown.len(), poly.len());
        // The first stored point is still the bottom-left corner.
        assert!(grown.vertex(0).point.x < 0.0 && grown.vertex(0).point.y < 0.0);
    }
}
