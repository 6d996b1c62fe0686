//! Describes how two overlapping rectangles cross each other.
//!
//! Corners of both rectangles and of their overlap are grouped by shared
//! coordinate. On each line with three or more corners, the first and last
//! corner are extremes of the shapes; the ones in between are where one
//! rectangle's side crosses the other's. When the rectangles overlap while
//! sharing part of a side, that side comes back as a segment instead.

use std::collections::BTreeSet;
use std::fmt;

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::Rect;
use crate::geometry::{Point, Segment, dedup_by_key};
use crate::grouping::group_points;

/// Below this many distinct corners, every line is checked for a shared side.
const SHARED_SIDE_TOTAL: usize = 10;
/// At exactly [`SHARED_SIDE_TOTAL`] corners, a line is checked only when this
/// many of its points are corners of the two input rectangles.
const SHARED_SIDE_OWNED: usize = 4;

/// A point or segment describing where two rectangles cross.
///
/// Features carry geometry only. The sentence naming the rectangles lives
/// on [`crate::report::Relation`], whose `Intersects` variant holds these
/// features, and on [`crate::Adjacency::describe`] for touching pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Feature {
    Point(Point),
    Segment(Segment),
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Point(p) => write!(f, "{p}"),
            Self::Segment(s) => write!(f, "along all points from {s}"),
        }
    }
}

/// Returns the crossing points and shared segments of `a` and `b`.
///
/// `overlap` must be `intersect(a, b)`. When it is `None` there is nothing
/// to describe and the result is empty.
pub fn features(overlap: Option<&Rect>, a: &Rect, b: &Rect) -> Vec<Feature> {
    let Some(overlap) = overlap else {
        return Vec::new();
    };

    let overlap_corners = overlap.vertices();
    let owned: BTreeSet<Point> = a.vertices().union(&b.vertices()).copied().collect();
    let all: BTreeSet<Point> = overlap_corners.union(&owned).copied().collect();
    let total = all.len();
    debug!("{a} x {b}: {total} distinct corners, overlap {overlap}");

    let found: Vec<Feature> = group_points(&all)
        .iter()
        .flat_map(|(axis, line, points)| {
            trace!("{axis:?} line {line}: {points:?}");
            line_features(points, total, &overlap_corners, &owned)
        })
        .collect();
    dedup_by_key(found, |feature| *feature)
}

/// Features on one aligned group. `points` is sorted along the line.
fn line_features(
    points: &[Point],
    total: usize,
    overlap_corners: &BTreeSet<Point>,
    owned: &BTreeSet<Point>,
) -> Vec<Feature> {
    let owned_on_line = points.iter().filter(|p| owned.contains(p)).count();
    let check_shared_side = total < SHARED_SIDE_TOTAL
        || (total == SHARED_SIDE_TOTAL && owned_on_line == SHARED_SIDE_OWNED);

    let side = if check_shared_side {
        let ends: Vec<Point> = points
            .iter()
            .copied()
            .filter(|p| overlap_corners.contains(p) && owned.contains(p))
            .collect();
        match ends.as_slice() {
            &[p, q] => Some(Segment::new(p, q)),
            _ => None,
        }
    } else {
        None
    };

    let rest: Vec<Point> = points
        .iter()
        .copied()
        .filter(|&p| !side.is_some_and(|s| s.has_endpoint(p)))
        .collect();
    let crossings = match rest.len() {
        0..=2 => &[][..],
        n => &rest[1..n - 1],
    };

    side.map(Feature::Segment)
        .into_iter()
        .chain(crossings.iter().copied().map(Feature::Point))
        .collect()
}
