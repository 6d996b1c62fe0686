//! Overlap and containment between two rectangles.

use crate::Rect;

/// Returns the rectangle where `a` and `b` overlap, if they share any area.
///
/// Rectangles that only touch along an edge or at a corner do not
/// intersect; that case belongs to `adjacency`.
pub fn intersect(a: &Rect, b: &Rect) -> Option<Rect> {
    let left = a.x().max(b.x());
    let right = a.right().min(b.right());
    let top = a.y().max(b.y());
    let bottom = a.bottom().min(b.bottom());
    if left >= right || top >= bottom {
        return None;
    }
    Rect::new(left, top, right - left, bottom - top).ok()
}

/// Returns true if `outer` fully contains `inner`.
///
/// Every rectangle with area contains itself. Zero-area rectangles are
/// never contained, since they cannot produce an overlap.
pub fn contains(outer: &Rect, inner: &Rect) -> bool {
    let overlap = intersect(outer, inner);
    contains_with(outer, inner, overlap.as_ref())
}

/// Same as [`contains`], reusing an overlap the caller already computed
/// with [`intersect`].
///
/// `outer` contains `inner` exactly when `overlap` equals `inner`; an
/// absent overlap means no containment.
pub fn contains_with(_outer: &Rect, inner: &Rect, overlap: Option<&Rect>) -> bool {
    overlap == Some(inner)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(x: i32, y: i32, w: i32, h: i32) -> Rect {
        Rect::new(x, y, w, h).unwrap()
    }

    /// Pairs covering overlap, containment, edge and corner contact,
    /// separation and zero-area rectangles.
    fn pairs() -> Vec<(Rect, Rect)> {
        vec![
            (rect(0, 0, 20, 30), rect(10, 10, 30, 40)),
            (rect(0, 0, 20, 30), rect(400, 400, 10, 10)),
            (rect(0, 0, 20, 30), rect(20, 0, 20, 20)),
            (rect(0, 0, 20, 30), rect(0, 30, 20, 30)),
            (rect(0, 0, 30, 30), rect(5, 5, 5, 5)),
            (rect(0, 0, 10, 10), rect(10, 10, 5, 5)),
            (rect(0, 0, 10, 10), rect(5, 0, 0, 10)),
            (rect(0, 0, 10, 10), rect(2, 2, 6, 0)),
            (rect(-10, -10, 5, 30), rect(-12, 0, 40, 2)),
        ]
    }

    #[test]
    fn overlapping_rects_produce_overlap() {
        // Arrange
        let a = rect(0, 0, 20, 30);
        let b = rect(10, 10, 30, 40);

        // Act
        let overlap = intersect(&a, &b);

        // Assert
        assert_eq!(overlap, Some(rect(10, 10, 10, 20)));
    }

    #[test]
    fn distant_rects_do_not_intersect() {
        let a = rect(0, 0, 20, 30);
        let b = rect(400, 400, 10, 10);

        assert_eq!(intersect(&a, &b), None);
    }

    #[test]
    fn touching_edges_do_not_intersect() {
        let a = rect(0, 0, 20, 30);

        assert_eq!(intersect(&a, &rect(20, 0, 20, 20)), None);
        assert_eq!(intersect(&a, &rect(0, 30, 20, 30)), None);
        assert_eq!(intersect(&a, &rect(20, 30, 5, 5)), None);
    }

    #[test]
    fn intersect_is_symmetric() {
        for (a, b) in pairs() {
            assert_eq!(intersect(&a, &b), intersect(&b, &a), "{a} / {b}");
        }
    }

    #[test]
    fn rect_intersects_itself() {
        for (a, _) in pairs() {
            assert_eq!(intersect(&a, &a), Some(a));
            assert!(contains(&a, &a));
        }
    }

    #[test]
    fn degenerate_rects_never_intersect() {
        // Arrange
        let big = rect(-100, -100, 200, 200);
        let line = rect(0, -50, 0, 100);
        let flat = rect(-50, 0, 100, 0);
        let dot = rect(3, 3, 0, 0);

        // Act / Assert
        for thin in [line, flat, dot] {
            assert_eq!(intersect(&big, &thin), None);
            assert_eq!(intersect(&thin, &thin), None);
            assert!(!contains(&big, &thin));
        }
    }

    #[test]
    fn outer_contains_inner_but_not_reverse() {
        // Arrange
        let outer = rect(0, 0, 30, 30);
        let inner = rect(5, 5, 5, 5);

        // Act / Assert
        assert!(contains(&outer, &inner));
        assert!(!contains(&inner, &outer));
    }

    #[test]
    fn containment_is_antisymmetric_except_equality() {
        for (a, b) in pairs() {
            if contains(&a, &b) && a != b {
                assert!(!contains(&b, &a), "{a} / {b}");
            }
        }
    }

    #[test]
    fn partial_overlap_is_not_containment() {
        let a = rect(0, 0, 20, 30);
        let b = rect(10, 10, 30, 40);

        assert!(!contains(&a, &b));
        assert!(!contains(&b, &a));
    }

    #[test]
    fn contains_with_reuses_overlap() {
        // Arrange
        let outer = rect(0, 0, 30, 30);
        let inner = rect(0, 0, 30, 10);
        let overlap = intersect(&outer, &inner);

        // Act / Assert
        assert!(contains_with(&outer, &inner, overlap.as_ref()));
        assert!(!contains_with(&inner, &outer, overlap.as_ref()));
    }

    #[test]
    fn contains_with_missing_overlap_is_false() {
        let outer = rect(0, 0, 30, 30);
        let inner = rect(5, 5, 5, 5);

        assert!(!contains_with(&outer, &inner, None));
        assert!(!contains_with(&inner, &outer, None));
    }
}
