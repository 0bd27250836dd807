use crate::geometry::LineSegment;
use crate::math::Point2;

/// A candidate path explored by the search.
#[derive(Debug, Clone, PartialEq)]
pub struct Path {
    pub points: Vec<Point2>,
    /// Total length, only meaningful once `done`.
    pub distance: f64,
    pub done: bool,
    /// Abandoned without reaching the target.
    pub invalid: bool,
    /// Number of leading segments already checked against the walls.
    pub verified: usize,
}

impl Path {
    /// A fresh, unfinished candidate through `points`.
    #[must_use]
    pub fn new(points: Vec<Point2>) -> Self {
        Self {
            points,
            distance: 0.0,
            done: false,
            invalid: false,
            verified: 0,
        }
    }

    /// Still needs processing.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        !self.done && !self.invalid
    }

    /// Consecutive point pairs from start to target.
    pub fn segments(&self) -> impl Iterator<Item = LineSegment> + '_ {
        self.points.windows(2).map(|pair| LineSegment::new(pair[0], pair[1]))
    }

    /// Segments not yet checked against the walls, with their positions.
    pub fn unverified_segments(&self) -> impl Iterator<Item = (usize, LineSegment)> + '_ {
        self.segments().enumerate().skip(self.verified)
    }

    /// Drops every point after segment `index`'s start, keeping the
    /// segments before it verified.
    pub fn truncate_at(&mut self, index: usize) {
        self.points.truncate(index + 1);
        self.verified = index;
    }

    /// Marks the path complete and sums the length of every segment.
    pub fn finish(&mut self) {
        self.distance = self.segments().map(|line| line.length()).sum();
        self.verified = self.points.len().saturating_sub(1);
        self.done = true;
    }

    /// Abandons the path.
    pub fn invalidate(&mut self) {
        self.invalid = true;
        self.done = true;
    }
}

/// The waypoints of a found path, start and target included.
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    pub points: Vec<Point2>,
    pub distance: f64,
}

impl From<Path> for Route {
    fn from(path: Path) -> Self {
        Self {
            points: path.points,
            distance: path.distance,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn finish_counts_every_segment() {
        let mut path = Path::new(vec![
            Point2::new(0.0, 0.0),
            Point2::new(3.0, 4.0),
            Point2::new(3.0, 0.0),
        ]);
        assert!(path.is_pending());
        path.finish();
        assert!(path.done);
        assert_relative_eq!(path.distance, 9.0);
    }

    #[test]
    fn single_point_has_no_segments() {
        assert_eq!(Path::new(vec![Point2::origin()]).segments().count(), 0);
    }

    #[test]
    fn truncate_keeps_verified_prefix() {
        let mut path = Path::new(vec![
            Point2::origin(),
            Point2::new(1.0, 2.0),
            Point2::new(5.0, 5.0),
            Point2::new(9.0, 0.0),
        ]);
        path.truncate_at(1);
        assert_eq!(path.points, vec![Point2::origin(), Point2::new(1.0, 2.0)]);
        assert_eq!(path.verified, 1);

        path.points.push(Point2::new(9.0, 0.0));
        let (index, line) = path.unverified_segments().next().unwrap();
        assert_eq!(index, 1);
        assert_eq!(line.p1, Point2::new(1.0, 2.0));
        assert_eq!(line.p2, Point2::new(9.0, 0.0));
        assert_eq!(path.unverified_segments().count(), 1);
    }

    #[test]
    fn invalid_path_is_not_pending() {
        let mut path = Path::new(vec![Point2::origin(), Point2::new(1.0, 0.0)]);
        path.invalidate();
        assert!(!path.is_pending());
        assert!(path.invalid);
    }
}
