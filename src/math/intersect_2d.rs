use super::vector_2d::{cross_2d, is_between};
use super::Point2;

/// Bounded segment-segment intersection in 2D.
///
/// Returns `(intersection_point, t, u)` where `t` is the parameter along
/// `a0 → a1` and `u` the parameter along `b0 → b1`, both in `[0, 1]`.
/// Parallel (including collinear) segments never intersect.
///
/// Comparisons are exact: when the crossing falls on an endpoint the
/// endpoint itself is returned, so callers can test it with `==`.
#[must_use]
pub fn segment_segment_intersect_2d(
    a0: &Point2,
    a1: &Point2,
    b0: &Point2,
    b1: &Point2,
) -> Option<(Point2, f64, f64)> {
    let da = a1 - a0;
    let db = b1 - b0;

    let cross = cross_2d(&da, &db);
    if cross == 0.0 {
        return None;
    }

    let offset = b0 - a0;
    let t = cross_2d(&offset, &db) / cross;
    let u = cross_2d(&offset, &da) / cross;
    if !(0.0..=1.0).contains(&t) || !(0.0..=1.0).contains(&u) {
        return None;
    }

    let pt = if t == 0.0 {
        *a0
    } else if t == 1.0 {
        *a1
    } else if u == 0.0 {
        *b0
    } else if u == 1.0 {
        *b1
    } else {
        a0 + da * t
    };
    Some((pt, t, u))
}

/// Returns `true` if `p` lies on the closed segment `a → b`.
#[must_use]
pub fn point_on_segment_2d(p: &Point2, a: &Point2, b: &Point2) -> bool {
    cross_2d(&(b - a), &(p - a)) == 0.0 && is_between(p, a, b)
}

/// Returns `true` if segments `a0 → a1` and `b0 → b1` lie on the same
/// infinite line.
#[must_use]
pub fn collinear_2d(a0: &Point2, a1: &Point2, b0: &Point2, b1: &Point2) -> bool {
    let da = a1 - a0;
    cross_2d(&da, &(b1 - b0)) == 0.0 && cross_2d(&da, &(b0 - a0)) == 0.0
}
