//! Bresenham line rasterization.
//!
//! # Algorithm Overview
//!
//! The segment is first normalized so that traversal runs along the dominant
//! (major) axis in increasing order:
//!
//! 1. **Transpose** x and y when `|dy| > |dx|` (steep line), so the major axis is x
//! 2. **Swap** endpoints when the start lies right of the end
//! 3. **Step** one unit along x per output point, tracking the error term `p`
//!
//! ```text
//! p0 = 2*dy - dx
//! p >= 0  =>  y += y_step,  p += 2*(dy - dx)
//! p <  0  =>                p += 2*dy
//! ```
//!
//! The `p >= 0` comparison is the tie-break: when the ideal line passes exactly
//! between two rows, the step is taken.
//!
//! Because of the normalization, `rasterize_line(a, b)` and
//! `rasterize_line(b, a)` produce the same sequence.

use std::iter::FusedIterator;

use crate::math::GridPoint;

/// Lazy Bresenham line iterator.
///
/// Yields exactly `max(|dx|, |dy|) + 1` points, starting at the normalized
/// start point and ending at the normalized end point.
#[derive(Clone, Debug)]
pub struct BresenhamLine {
    x: i32,
    y: i32,
    end_x: i32,
    y_step: i32,
    dx: i64,
    dy: i64,
    // Decision term; i64 so that 2*dy cannot overflow for any i32 endpoints.
    p: i64,
    steep: bool,
    done: bool,
}

impl BresenhamLine {
    pub fn new(p1: GridPoint, p2: GridPoint) -> Self {
        let steep = (p2.y as i64 - p1.y as i64).abs() > (p2.x as i64 - p1.x as i64).abs();
        let (mut a, mut b) = if steep {
            (p1.transpose(), p2.transpose())
        } else {
            (p1, p2)
        };

        // Left-to-right along the major axis
        if a.x > b.x {
            std::mem::swap(&mut a, &mut b);
        }

        let dx = b.x as i64 - a.x as i64;
        let dy = (b.y as i64 - a.y as i64).abs();

        Self {
            x: a.x,
            y: a.y,
            end_x: b.x,
            y_step: if a.y < b.y { 1 } else { -1 },
            dx,
            dy,
            p: 2 * dy - dx,
            steep,
            done: false,
        }
    }

    /// True when the line was traversed with x and y roles swapped.
    pub fn is_steep(&self) -> bool {
        self.steep
    }

    fn remaining(&self) -> usize {
        if self.done {
            0
        } else {
            (self.end_x as i64 - self.x as i64 + 1) as usize
        }
    }
}

impl Iterator for BresenhamLine {
    type Item = GridPoint;

    fn next(&mut self) -> Option<GridPoint> {
        if self.done {
            return None;
        }

        let current = GridPoint::new(self.x, self.y);
        let out = if self.steep {
            current.transpose()
        } else {
            current
        };

        // A zero-length segment stops here after its single point.
        if self.x == self.end_x {
            self.done = true;
            return Some(out);
        }

        if self.p >= 0 {
            self.y += self.y_step;
            self.p += 2 * (self.dy - self.dx);
        } else {
            self.p += 2 * self.dy;
        }
        self.x += 1;

        Some(out)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining();
        (n, Some(n))
    }
}

impl ExactSizeIterator for BresenhamLine {}

impl FusedIterator for BresenhamLine {}

/// Rasterize the segment `p1`-`p2` into grid points.
///
/// One point per unit step along the dominant axis. Horizontal, vertical,
/// diagonal, and single-point segments need no special casing.
pub fn rasterize_line(p1: GridPoint, p2: GridPoint) -> Vec<GridPoint> {
    BresenhamLine::new(p1, p2).collect()
}
