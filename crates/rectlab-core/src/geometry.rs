//! Point and segment value types shared by every relationship query.

use std::collections::HashSet;
use std::fmt;
use std::hash::Hash;

use serde::{Deserialize, Serialize};

/// An integer point in a downward-y coordinate system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

/// An unordered pair of points.
///
/// The endpoints are stored sorted, so `Segment::new(p, q)` and
/// `Segment::new(q, p)` are the same value and hash identically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Segment {
    start: Point,
    end: Point,
}

impl Segment {
    pub fn new(a: Point, b: Point) -> Self {
        if a <= b {
            Self { start: a, end: b }
        } else {
            Self { start: b, end: a }
        }
    }

    /// The smaller endpoint in `(x, y)` order.
    pub fn start(&self) -> Point {
        self.start
    }

    /// The larger endpoint in `(x, y)` order.
    pub fn end(&self) -> Point {
        self.end
    }

    /// Returns true if `p` is one of the two endpoints.
    pub fn has_endpoint(&self, p: Point) -> bool {
        self.start == p || self.end == p
    }

    /// Distance between the endpoints along the axes.
    ///
    /// Engine segments are always axis-aligned, so this is the plain
    /// length for every segment the engine produces.
    pub fn length(&self) -> u64 {
        u64::from(self.end.x.abs_diff(self.start.x)) + u64::from(self.end.y.abs_diff(self.start.y))
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {}", self.start, self.end)
    }
}

/// Removes repeated items by `key`, keeping the first occurrence.
pub(crate) fn dedup_by_key<T, K, F>(items: impl IntoIterator<Item = T>, key: F) -> Vec<T>
where
    K: Eq + Hash,
    F: Fn(&T) -> K,
{
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(key(item)))
        .collect()
}
