use super::Point2;

/// Computes the signed area of a closed point loop (shoelace formula).
///
/// Positive for counter-clockwise, negative for clockwise.
#[must_use]
pub fn signed_area_2d(points: &[Point2]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += points[i].x * points[j].y - points[j].x * points[i].y;
    }
    sum * 0.5
}

/// Maps any index, including negative ones or ones past the end, onto
/// `[0, len)` as if the sequence repeated forever.
///
/// `len` must be non-zero.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_sign_loss
)]
pub fn loopable_index(index: isize, len: usize) -> usize {
    index.rem_euclid(len as isize) as usize
}

/// Returns `true` if `b` is `a` rotated by some offset (same cyclic order,
/// not reversed). Comparison is exact.
#[must_use]
pub fn is_cyclic_rotation(a: &[Point2], b: &[Point2]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    if a.is_empty() {
        return true;
    }
    let n = a.len();
    (0..n).any(|offset| (0..n).all(|i| a[i] == b[(i + offset) % n]))
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    fn square_cw() -> Vec<Point2> {
        vec![
            Point2::new(0.0, 0.0),
            Point2::new(0.0, 1.0),
            Point2::new(1.0, 1.0),
            Point2::new(1.0, 0.0),
        ]
    }

    #[test]
    fn signed_area_cw_square() {
        assert_relative_eq!(signed_area_2d(&square_cw()), -1.0);
    }

    #[test]
    fn signed_area_ccw_square() {
        let mut pts = square_cw();
        pts.reverse();
        assert_relative_eq!(signed_area_2d(&pts), 1.0);
    }

    #[test]
    fn signed_area_degenerate() {
        assert_relative_eq!(signed_area_2d(&[Point2::new(0.0, 0.0)]), 0.0);
        assert_relative_eq!(signed_area_2d(&[]), 0.0);
    }

    #[test]
    fn loopable_index_within_range() {
        assert_eq!(loopable_index(1, 4), 1);
    }

    #[test]
    fn loopable_index_past_end() {
        assert_eq!(loopable_index(6, 4), 2);
    }

    #[test]
    fn loopable_index_negative() {
        assert_eq!(loopable_index(-1, 4), 3);
        assert_eq!(loopable_index(-9, 4), 3);
    }

    #[test]
    fn cyclic_rotation_matches_offset_start() {
        let a = square_cw();
        let mut b = a.clone();
        b.rotate_left(1);
        assert!(is_cyclic_rotation(&a, &b));
    }

    #[test]
    fn cyclic_rotation_rejects_reversal() {
        let a = square_cw();
        let mut b = a.clone();
        b.reverse();
        assert!(!is_cyclic_rotation(&a, &b));
    }

    #[test]
    fn cyclic_rotation_rejects_different_lengths() {
        let a = square_cw();
        let mut b = a.clone();
        b.push(Point2::new(1.0, -1.0));
        assert!(!is_cyclic_rotation(&a, &b));
    }
}
