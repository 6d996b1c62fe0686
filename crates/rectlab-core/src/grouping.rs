//! Alignment detection over a point set.
//!
//! Three or more points on one vertical or horizontal line mark a line
//! along which two rectangles cross or touch. Pairs carry no signal (every
//! rectangle side already contributes two), so smaller groups are dropped.

use std::collections::{BTreeMap, BTreeSet};

use crate::geometry::Point;

/// Smallest group worth reporting.
pub const MIN_GROUP_SIZE: usize = 3;

/// The coordinate a group of points shares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Points share an x coordinate (a vertical line).
    X,
    /// Points share a y coordinate (a horizontal line).
    Y,
}

impl Axis {
    /// The coordinate shared by every point on a line of this axis.
    pub fn key(self, p: Point) -> i32 {
        match self {
            Self::X => p.x,
            Self::Y => p.y,
        }
    }

    /// The position of `p` along a line of this axis.
    pub fn along(self, p: Point) -> i32 {
        match self {
            Self::X => p.y,
            Self::Y => p.x,
        }
    }
}

/// Points grouped by shared x and by shared y.
///
/// Every group holds at least [`MIN_GROUP_SIZE`] points, sorted by their
/// position along the line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AxisGroups {
    pub by_x: BTreeMap<i32, Vec<Point>>,
    pub by_y: BTreeMap<i32, Vec<Point>>,
}

impl AxisGroups {
    /// Returns the groups keyed on `axis`.
    pub fn on(&self, axis: Axis) -> &BTreeMap<i32, Vec<Point>> {
        match axis {
            Axis::X => &self.by_x,
            Axis::Y => &self.by_y,
        }
    }

    /// Iterates every group, vertical lines first, each in ascending key order.
    pub fn iter(&self) -> impl Iterator<Item = (Axis, i32, &[Point])> + '_ {
        [Axis::X, Axis::Y].into_iter().flat_map(move |axis| {
            self.on(axis)
                .iter()
                .map(move |(key, points)| (axis, *key, points.as_slice()))
        })
    }

    pub fn is_empty(&self) -> bool {
        self.by_x.is_empty() && self.by_y.is_empty()
    }
}

/// Groups `points` by shared x and by shared y, keeping groups of three or more.
pub fn group_points(points: &BTreeSet<Point>) -> AxisGroups {
    AxisGroups {
        by_x: group_on(Axis::X, points),
        by_y: group_on(Axis::Y, points),
    }
}

fn group_on(axis: Axis, points: &BTreeSet<Point>) -> BTreeMap<i32, Vec<Point>> {
    let mut groups: BTreeMap<i32, Vec<Point>> = BTreeMap::new();
    for &p in points {
        groups.entry(axis.key(p)).or_default().push(p);
    }
    groups.retain(|_, line| line.len() >= MIN_GROUP_SIZE);
    for line in groups.values_mut() {
        line.sort_by_key(|&p| axis.along(p));
    }
    groups
}
