use std::f64::consts::PI;

use crate::geometry::{LineSegment, PolygonLineSegment};
use crate::math::intersect_2d::{collinear_2d, segment_segment_intersect_2d};
use crate::math::vector_2d::{angle_between, clockwise_angle, distance};

/// A candidate continuation of a boundary walk.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Branch<'a> {
    /// Clockwise angle from the reversed walking direction to the branch.
    /// Below `π` is a left turn, `π` is straight on, above `π` a right turn.
    pub branch_angle: f64,
    /// Distance from the start of the walked line to where the branch leaves it.
    pub distance: f64,
    /// The wall to follow next, trimmed to start where it leaves the line.
    pub next_line: PolygonLineSegment<'a>,
}

/// Extends `line.p2` through every collinear wall that points the same way
/// and overlaps (or touches) the line's far end, repeating until no wall
/// reaches further.
#[must_use]
pub fn grow_overlapping_collinear_lines_in_direction_of_p2(
    line: LineSegment,
    walls: &[LineSegment],
) -> LineSegment {
    grow_collinear(line, walls).0
}

/// Same as [`grow_overlapping_collinear_lines_in_direction_of_p2`], also
/// returning the indices of the walls that extended the line.
pub(super) fn grow_collinear(line: LineSegment, walls: &[LineSegment]) -> (LineSegment, Vec<usize>) {
    let dir = line.direction();
    let reach = |p: &crate::math::Point2| dir.dot(&(p - line.p1));

    let mut grown = line;
    let mut end = reach(&line.p2);
    let mut used = Vec::new();
    loop {
        let mut extended = false;
        for (i, wall) in walls.iter().enumerate() {
            if dir.dot(&wall.direction()) <= 0.0
                || !collinear_2d(&line.p1, &line.p2, &wall.p1, &wall.p2)
            {
                continue;
            }
            let (from, to) = (reach(&wall.p1), reach(&wall.p2));
            if from <= end && to > end {
                grown.p2 = wall.p2;
                end = to;
                used.push(i);
                extended = true;
            }
        }
        if !extended {
            return (grown, used);
        }
    }
}

/// Picks the wall to follow after walking `line`.
///
/// The line is first grown through overlapping collinear walls. Every wall
/// that meets the grown line past its start, and leaves it before the wall's
/// own end, is a branch. The nearest left-turning branch (angle below `π`)
/// wins, ties going to the sharper turn. When nothing turns left, the branch
/// leaving the grown line's far end with the smallest angle is taken.
#[must_use]
pub fn get_closest_branch<'a>(
    line: LineSegment,
    walls: &[PolygonLineSegment<'a>],
) -> Option<Branch<'a>> {
    let plain: Vec<LineSegment> = walls.iter().map(PolygonLineSegment::line).collect();
    let (grown, _) = grow_collinear(line, &plain);
    closest_branch_on(&grown, walls).map(|(_, branch)| branch)
}

/// Branch selection on an already grown line. Returns the index of the
/// chosen wall alongside the branch.
pub(super) fn closest_branch_on<'a>(
    line: &LineSegment,
    walls: &[PolygonLineSegment<'a>],
) -> Option<(usize, Branch<'a>)> {
    let back = angle_between(&line.p2, &line.p1);
    let mut left_turn: Option<(usize, Branch<'a>)> = None;
    let mut at_end: Option<(usize, Branch<'a>)> = None;

    for (i, wall) in walls.iter().enumerate() {
        let Some((point, _, _)) = segment_segment_intersect_2d(&line.p1, &line.p2, &wall.p1, &wall.p2)
        else {
            continue;
        };
        if point == line.p1 || point == wall.p2 {
            continue;
        }
        let branch = Branch {
            branch_angle: clockwise_angle(back, angle_between(&point, &wall.p2)),
            distance: distance(&line.p1, &point),
            next_line: wall.starting_at(point),
        };

        if branch.branch_angle < PI
            && left_turn.as_ref().is_none_or(|(_, best)| {
                branch.distance < best.distance
                    || (branch.distance == best.distance && branch.branch_angle < best.branch_angle)
            })
        {
            left_turn = Some((i, branch));
        }
        if point == line.p2
            && at_end
                .as_ref()
                .is_none_or(|(_, best)| branch.branch_angle < best.branch_angle)
        {
            at_end = Some((i, branch));
        }
    }

    left_turn.or(at_end)
}
