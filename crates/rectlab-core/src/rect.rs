use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{GeometryError, Result};
use crate::geometry::Point;

/// An axis-aligned rectangle with its origin at the top-left corner.
///
/// Width and height are never negative and the far edges always fit in
/// `i32`, which is checked once in [`Rect::new`]. Zero-sized rectangles
/// are allowed; they never intersect anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RectFields", into = "RectFields")]
pub struct Rect {
    x: i32,
    y: i32,
    width: i32,
    height: i32,
}

/// Unchecked wire form of [`Rect`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct RectFields {
    x: i32,
    y: i32,
    width: i32,
    height: i32,
}

impl Rect {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Result<Self> {
        if width < 0 || height < 0 {
            return Err(GeometryError::InvalidRectangle { width, height });
        }
        if x.checked_add(width).is_none() || y.checked_add(height).is_none() {
            return Err(GeometryError::Overflow {
                x,
                y,
                width,
                height,
            });
        }
        Ok(Self {
            x,
            y,
            width,
            height,
        })
    }

    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn y(&self) -> i32 {
        self.y
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// X coordinate of the right edge.
    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    /// Y coordinate of the bottom edge.
    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    /// True when the rectangle has no area.
    pub fn is_degenerate(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Returns the distinct corners of the rectangle.
    ///
    /// A regular rectangle has four; a zero-width or zero-height one
    /// collapses to two, and a zero-sized one to a single point.
    pub fn vertices(&self) -> BTreeSet<Point> {
        BTreeSet::from([
            Point::new(self.x, self.y),
            Point::new(self.right(), self.y),
            Point::new(self.x, self.bottom()),
            Point::new(self.right(), self.bottom()),
        ])
    }

    /// Returns true if `p` lies inside the rectangle or on its boundary.
    pub fn encloses(&self, p: Point) -> bool {
        (self.x..=self.right()).contains(&p.x) && (self.y..=self.bottom()).contains(&p.y)
    }
}

impl TryFrom<RectFields> for Rect {
    type Error = GeometryError;

    fn try_from(f: RectFields) -> Result<Self> {
        Rect::new(f.x, f.y, f.width, f.height)
    }
}

impl From<Rect> for RectFields {
    fn from(r: Rect) -> Self {
        Self {
            x: r.x,
            y: r.y,
            width: r.width,
            height: r.height,
        }
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{}) {}x{}", self.x, self.y, self.width, self.height)
    }
}
