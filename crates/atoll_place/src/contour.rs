//! The packing contour: a piecewise-constant skyline.
//!
//! The contour is the upper envelope of every rectangle placed so far,
//! scanned left to right. Between a point `(x_i, h_i)` and its successor the
//! height is `h_i`; before the first point and past the last it is 0. Points
//! are kept strictly sorted by `x`.
//!
//! A contour lives inside a single pack call: the packer creates one, feeds
//! it every placed rectangle, and drops it with the call.

/// One breakpoint of the skyline.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct ContourPoint {
    /// Horizontal coordinate where this segment starts.
    pub x: i32,
    /// Skyline height from this point to the next.
    pub height: i32,
}

/// The skyline over all rectangles inserted so far.
#[derive(Debug, Default)]
pub struct Contour {
    points: Vec<ContourPoint>,
}

impl Contour {
    /// Creates an empty contour.
    pub fn new() -> Self {
        Self::default()
    }

    /// Drops all points, producing the empty contour.
    pub fn reset(&mut self) {
        self.points.clear();
    }

    /// Returns the breakpoints, strictly sorted by `x`.
    pub fn points(&self) -> &[ContourPoint] {
        &self.points
    }

    /// Returns the skyline height at coordinate `x` (0 where undefined).
    pub fn height_at(&self, x: i32) -> i32 {
        let idx = self.points.partition_point(|p| p.x <= x);
        if idx == 0 {
            0
        } else {
            self.points[idx - 1].height
        }
    }

    /// Returns the maximum skyline height over the half-open interval
    /// `[x, x + width)`; 0 if the contour does not reach into it.
    pub fn max_height_over(&self, x: i32, width: i32) -> i32 {
        let end = x + width;
        let start = self.points.partition_point(|p| p.x <= x);
        let mut max_h = if start == 0 {
            0
        } else {
            self.points[start - 1].height
        };
        for p in &self.points[start..] {
            if p.x >= end {
                break;
            }
            max_h = max_h.max(p.height);
        }
        max_h
    }

    /// Raises the skyline to cover the rectangle
    /// `[x, x + width) x [y, y + height)`.
    ///
    /// The point at the rectangle's right edge carries the height the skyline
    /// had just past the rectangle before this insertion, so queries beyond
    /// the covered interval are unaffected.
    pub fn insert(&mut self, x: i32, y: i32, width: i32, height: i32) {
        let right = x + width;
        let top = y + height;

        if self.points.is_empty() {
            self.points.push(ContourPoint { x, height: top });
            self.points.push(ContourPoint {
                x: right,
                height: 0,
            });
            return;
        }

        let carry = self.height_at(right);

        // Locate or create the point at the rectangle's left edge.
        let at = self.points.partition_point(|p| p.x < x);
        let mut cursor = if at < self.points.len() && self.points[at].x == x {
            self.points[at].height = self.points[at].height.max(top);
            at + 1
        } else {
            self.points.insert(at, ContourPoint { x, height: top });
            at + 1
        };

        // Drop covered breakpoints; keep any that still poke above the new top.
        while cursor < self.points.len() && self.points[cursor].x < right {
            if self.points[cursor].height <= top {
                self.points.remove(cursor);
            } else {
                cursor += 1;
            }
        }

        // Right edge: restore the pre-insertion height past the rectangle.
        if cursor >= self.points.len() || self.points[cursor].x > right {
            self.points.insert(
                cursor,
                ContourPoint {
                    x: right,
                    height: carry,
                },
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn heights(contour: &Contour) -> Vec<(i32, i32)> {
        contour.points().iter().map(|p| (p.x, p.height)).collect()
    }

    #[test]
    fn empty_contour_is_flat_zero() {
        let contour = Contour::new();
        assert_eq!(contour.height_at(0), 0);
        assert_eq!(contour.height_at(100), 0);
        assert_eq!(contour.max_height_over(-5, 50), 0);
        assert!(contour.points().is_empty());
    }

    #[test]
    fn first_insert_creates_two_points() {
        let mut contour = Contour::new();
        contour.insert(0, 0, 4, 2);
        assert_eq!(heights(&contour), vec![(0, 2), (4, 0)]);
        assert_eq!(contour.height_at(0), 2);
        assert_eq!(contour.height_at(3), 2);
        assert_eq!(contour.height_at(4), 0);
    }

    #[test]
    fn adjacent_insert_extends_skyline() {
        let mut contour = Contour::new();
        contour.insert(0, 0, 4, 2);
        contour.insert(4, 0, 3, 3);
        assert_eq!(heights(&contour), vec![(0, 2), (4, 3), (7, 0)]);
        assert_eq!(contour.height_at(5), 3);
        assert_eq!(contour.height_at(7), 0);
    }

    #[test]
    fn stacked_insert_raises_segment() {
        let mut contour = Contour::new();
        contour.insert(0, 0, 4, 2);
        contour.insert(0, 2, 4, 3);
        assert_eq!(heights(&contour), vec![(0, 5), (4, 0)]);
    }

    #[test]
    fn covering_insert_swallows_breakpoints() {
        let mut contour = Contour::new();
        contour.insert(0, 0, 2, 1);
        contour.insert(2, 0, 2, 2);
        contour.insert(4, 0, 2, 1);
        contour.insert(0, 2, 6, 3);
        assert_eq!(heights(&contour), vec![(0, 5), (6, 0)]);
    }

    #[test]
    fn taller_breakpoints_survive() {
        let mut contour = Contour::new();
        contour.insert(0, 0, 2, 1);
        contour.insert(2, 0, 2, 4);
        contour.insert(4, 0, 2, 2);
        // A rectangle over [0, 6) with top 3 covers the outer segments but
        // leaves the taller middle segment in place.
        contour.insert(0, 2, 6, 1);
        assert_eq!(heights(&contour), vec![(0, 3), (2, 4), (6, 0)]);
        assert_eq!(contour.height_at(1), 3);
        assert_eq!(contour.height_at(3), 4);
    }

    #[test]
    fn right_edge_keeps_old_height_inside_wide_segment() {
        let mut contour = Contour::new();
        contour.insert(0, 0, 9, 5);
        // Insert fully inside the [0, 9) segment; past x = 4 the skyline must
        // still report the old height of 5, not the new top.
        contour.insert(1, 5, 3, 2);
        assert_eq!(heights(&contour), vec![(0, 5), (1, 7), (4, 5), (9, 0)]);
        assert_eq!(contour.height_at(4), 5);
        assert_eq!(contour.height_at(2), 7);
    }

    #[test]
    fn right_edge_zero_past_everything() {
        let mut contour = Contour::new();
        contour.insert(0, 0, 4, 2);
        contour.insert(4, 0, 3, 3);
        // Height past the last rectangle is 0, not the new top.
        assert_eq!(contour.max_height_over(7, 10), 0);
    }

    #[test]
    fn max_height_over_spans_segments() {
        let mut contour = Contour::new();
        contour.insert(0, 0, 2, 1);
        contour.insert(2, 0, 2, 4);
        contour.insert(4, 0, 2, 2);
        assert_eq!(contour.max_height_over(0, 6), 4);
        assert_eq!(contour.max_height_over(0, 2), 1);
        assert_eq!(contour.max_height_over(3, 2), 4);
        assert_eq!(contour.max_height_over(4, 2), 2);
    }

    #[test]
    fn max_height_over_interval_before_contour() {
        let mut contour = Contour::new();
        contour.insert(10, 0, 2, 3);
        assert_eq!(contour.max_height_over(0, 5), 0);
        assert_eq!(contour.max_height_over(0, 11), 3);
    }

    #[test]
    fn points_stay_strictly_sorted() {
        let mut contour = Contour::new();
        contour.insert(0, 0, 4, 2);
        contour.insert(2, 2, 4, 1);
        contour.insert(1, 3, 2, 2);
        let xs: Vec<i32> = contour.points().iter().map(|p| p.x).collect();
        let mut sorted = xs.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(xs, sorted);
    }

    #[test]
    fn reset_empties() {
        let mut contour = Contour::new();
        contour.insert(0, 0, 4, 2);
        contour.reset();
        assert!(contour.points().is_empty());
        assert_eq!(contour.height_at(1), 0);
    }
}
