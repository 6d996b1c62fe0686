//! Classification of rectangles that touch without overlapping.
//!
//! The union of both rectangles' corners decides the shape of the contact:
//!
//! - six distinct corners: a full side is shared ([`AdjacencyKind::Proper`]);
//! - seven: one corner is shared and the contact runs from it along the
//!   shorter of the two sides ([`AdjacencyKind::SubLine`]);
//! - otherwise: three or more corners on one line, whose interior points
//!   bound the contact ([`AdjacencyKind::SubLine`] when one side lies
//!   wholly on the other, [`AdjacencyKind::Partial`] when they only overlap).

use std::collections::BTreeSet;
use std::fmt;

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::Rect;
use crate::geometry::{Point, Segment, dedup_by_key};
use crate::grouping::{Axis, group_points};
use crate::intersect::intersect;

/// How two rectangles share boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdjacencyKind {
    /// Both endpoints of a side coincide.
    Proper,
    /// One whole side lies on the other rectangle's side.
    SubLine,
    /// The sides overlap for part of their length.
    Partial,
}

impl AdjacencyKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::Proper => "Proper Adjacent",
            Self::SubLine => "Sub-Line Adjacent",
            Self::Partial => "Partial Adjacent",
        }
    }
}

impl fmt::Display for AdjacencyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A shared boundary segment and its classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Adjacency {
    pub segment: Segment,
    pub kind: AdjacencyKind,
}

impl Adjacency {
    pub fn new(segment: Segment, kind: AdjacencyKind) -> Self {
        Self { segment, kind }
    }

    /// Human-readable sentence naming both rectangles, e.g.
    /// `"b is Proper Adjacent to a"`.
    pub fn describe(&self, subject: &str, object: &str) -> String {
        format!("{subject} is {} to {object}", self.kind)
    }
}

impl fmt::Display for Adjacency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} along {}", self.kind, self.segment)
    }
}

/// Returns the boundary segments `a` and `b` share.
///
/// Empty when the rectangles are apart, touch only at a corner, or
/// overlap in area. The result does not depend on argument order.
pub fn adjacency(a: &Rect, b: &Rect) -> Vec<Adjacency> {
    if intersect(a, b).is_some() {
        debug!("{a} and {b} overlap, skipping adjacency");
        return Vec::new();
    }

    let va = a.vertices();
    let vb = b.vertices();
    let shared: Vec<Point> = va.intersection(&vb).copied().collect();
    let all: BTreeSet<Point> = va.union(&vb).copied().collect();

    let found = match (all.len(), shared.as_slice()) {
        (6, &[p, q]) => {
            debug!("{a} and {b} share the side {p} to {q}");
            vec![Adjacency::new(Segment::new(p, q), AdjacencyKind::Proper)]
        }
        (7, &[corner]) => {
            debug!("{a} and {b} share the corner {corner}");
            from_shared_corner(a, b, corner, &all)
        }
        _ => from_aligned_corners(a, b, &all),
    };
    dedup_by_key(found, |adj| adj.segment)
}

/// Seven-corner case: the contact starts at `corner` and spans the shorter
/// of the two touching sides.
fn from_shared_corner(
    a: &Rect,
    b: &Rect,
    corner: Point,
    all: &BTreeSet<Point>,
) -> Vec<Adjacency> {
    let span_y = a.height().min(b.height()).unsigned_abs();
    let span_x = a.width().min(b.width()).unsigned_abs();
    let side_by_side = a.x() == b.right() || b.x() == a.right();
    let stacked = a.y() == b.bottom() || b.y() == a.bottom();

    all.iter()
        .copied()
        .filter(|&p| p != corner)
        .filter(|&p| {
            let vertical = side_by_side && p.x == corner.x && p.y.abs_diff(corner.y) == span_y;
            let horizontal = stacked && p.y == corner.y && p.x.abs_diff(corner.x) == span_x;
            (vertical || horizontal) && a.encloses(p) && b.encloses(p)
        })
        .map(|p| Adjacency::new(Segment::new(corner, p), AdjacencyKind::SubLine))
        .collect()
}

/// General case: interior points of each aligned group bound a contact
/// span, provided the span reaches past both rectangles' near edges.
fn from_aligned_corners(a: &Rect, b: &Rect, all: &BTreeSet<Point>) -> Vec<Adjacency> {
    group_points(all)
        .iter()
        .filter_map(|(axis, line, points)| {
            let interior = &points[1..points.len() - 1];
            let (&first, &last) = (interior.first()?, interior.last()?);
            if first == last {
                return None;
            }

            let (min, max) = (axis.along(first), axis.along(last));
            let (near_a, near_b, extent) = match axis {
                Axis::X => (a.y(), b.y(), a.height().min(b.height())),
                Axis::Y => (a.x(), b.x(), a.width().min(b.width())),
            };
            if max <= near_a || max <= near_b {
                trace!("{axis:?} line {line}: span {min}..{max} does not touch both rects");
                return None;
            }

            let kind = if max.abs_diff(min) == extent.unsigned_abs() {
                AdjacencyKind::SubLine
            } else {
                AdjacencyKind::Partial
            };
            debug!("{axis:?} line {line}: {kind} from {min} to {max}");
            Some(Adjacency::new(Segment::new(first, last), kind))
        })
        .collect()
}

#[cfg(test)]
#[path = "adjacency_tests.rs"]
mod tests;
