use std::f64::consts::TAU;

use super::{Point2, Vector2};

/// Z component of the 3D cross product of two planar vectors.
///
/// Positive when `b` is counter-clockwise from `a`.
#[must_use]
pub fn cross_2d(a: &Vector2, b: &Vector2) -> f64 {
    a.x * b.y - a.y * b.x
}

/// Euclidean distance between two points.
#[must_use]
pub fn distance(a: &Point2, b: &Point2) -> f64 {
    (b - a).norm()
}

/// Counter-clockwise angle of the ray from `origin` to `point`, measured
/// from the +x axis, in `(-π, π]`.
#[must_use]
pub fn angle_between(origin: &Point2, point: &Point2) -> f64 {
    let d = point - origin;
    d.y.atan2(d.x)
}

/// Angle swept when rotating clockwise from direction `from` to direction
/// `to` (both absolute angles in radians). Result lies in `[0, 2π)`.
#[must_use]
pub fn clockwise_angle(from: f64, to: f64) -> f64 {
    (from - to).rem_euclid(TAU)
}

/// Returns `true` if `p` lies within the axis-aligned box spanned by `a` and
/// `b` (inclusive).
#[must_use]
pub fn is_between(p: &Point2, a: &Point2, b: &Point2) -> bool {
    a.x.min(b.x) <= p.x && p.x <= a.x.max(b.x) && a.y.min(b.y) <= p.y && p.y <= a.y.max(b.y)
}

/// Rescales `v` to the given length. A zero vector stays zero.
#[must_use]
pub fn with_magnitude(v: &Vector2, magnitude: f64) -> Vector2 {
    let len = v.norm();
    if len == 0.0 {
        return Vector2::zeros();
    }
    v * (magnitude / len)
}

/// Left-pointing normal (`v` rotated a quarter turn counter-clockwise).
#[must_use]
pub fn left_normal(v: &Vector2) -> Vector2 {
    Vector2::new(-v.y, v.x)
}
