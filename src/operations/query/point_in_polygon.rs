use crate::geometry::Polygon;
use crate::math::intersect_2d::point_on_segment_2d;
use crate::math::Point2;

/// Tests whether `point` is inside the solid part of `polygon`.
///
/// Casts a ray towards +x and counts edge crossings with the half-open
/// rule `(a.y > p.y) != (b.y > p.y)`: a vertex shared by two edges is counted
/// once when the edges continue across the ray and not at all when they
/// turn back, and horizontal edges never count. Odd crossings mean the point
/// is enclosed; a [`Fill::Hole`](crate::geometry::Fill::Hole) flips that.
///
/// Points on a vertex or an edge are inside for both fills.
///
/// Never fails. Degenerate rings (collinear triples) give an unspecified
/// answer.
#[must_use]
pub fn is_inside(point: &Point2, polygon: &Polygon) -> bool {
    let n = polygon.len();
    let mut enclosed = false;
    for (i, a) in polygon.points().enumerate() {
        let b = polygon.vertex((i + 1) % n).point;
        if point_on_segment_2d(point, a, &b) {
            return true;
        }
        if (a.y > point.y) != (b.y > point.y) {
            let x = a.x + (point.y - a.y) * (b.x - a.x) / (b.y - a.y);
            if x > point.x {
                enclosed = !enclosed;
            }
        }
    }
    enclosed != polygon.is_inverted()
}

/// Returns the index (stored order) of the first point of `polygon` that is
/// not inside any other polygon in `polygons`.
///
/// `polygons` may contain `polygon` itself; it is skipped by identity.
/// `None` means every point is covered, so the polygon is subsumed.
#[must_use]
pub fn find_first_point_not_inside_another_poly(
    polygon: &Polygon,
    polygons: &[Polygon],
) -> Option<usize> {
    polygon.points().position(|p| {
        !polygons
            .iter()
            .filter(|other| !std::ptr::eq(*other, polygon))
            .any(|other| is_inside(p, other))
    })
}
