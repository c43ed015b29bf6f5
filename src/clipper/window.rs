//! Axis-aligned clip window and Cohen-Sutherland region codes.

use std::fmt;
use std::ops::{BitAnd, BitOr, BitOrAssign};

use crate::error::{KernelError, Result};
use crate::math::Point;

/// 4-bit classification of a point against a [`ClipWindow`].
///
/// ```text
///        |        |
///  1001  |  1000  | 1010
///        |        |
/// -------+--------+-------- top
///        |        |
///  0001  |  0000  | 0010
///        |        |
/// -------+--------+-------- bottom
///        |        |
///  0101  |  0100  | 0110
///        |        |
///      left     right
/// ```
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct RegionCode(u8);

impl RegionCode {
    pub const INSIDE: Self = Self(0);
    pub const LEFT: Self = Self(1);
    pub const RIGHT: Self = Self(2);
    pub const BOTTOM: Self = Self(4);
    pub const TOP: Self = Self(8);

    pub const fn bits(self) -> u8 {
        self.0
    }

    #[inline]
    pub const fn is_inside(self) -> bool {
        self.0 == 0
    }

    /// True if every bit of `flag` is set in `self`.
    #[inline]
    pub const fn contains(self, flag: Self) -> bool {
        self.0 & flag.0 == flag.0
    }

    /// True if `self` and `other` share at least one outside bit.
    #[inline]
    pub const fn intersects(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }
}

impl BitOr for RegionCode {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for RegionCode {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for RegionCode {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

impl fmt::Debug for RegionCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RegionCode({:04b})", self.0)
    }
}

/// Rectangular clip region with `left <= right` and `bottom <= top`.
///
/// Bounds are inclusive: points on an edge are inside.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClipWindow {
    left: f64,
    right: f64,
    bottom: f64,
    top: f64,
}

impl ClipWindow {
    /// Create a window, refusing inverted or NaN bounds.
    ///
    /// # Errors
    /// [`KernelError::InvalidWindow`] when `left > right`, `bottom > top`, or a
    /// bound is NaN.
    pub fn new(left: f64, right: f64, bottom: f64, top: f64) -> Result<Self> {
        // Written so NaN fails the check too
        if !(left <= right && bottom <= top) {
            return Err(KernelError::InvalidWindow {
                left,
                right,
                bottom,
                top,
            });
        }
        Ok(Self {
            left,
            right,
            bottom,
            top,
        })
    }

    pub fn left(&self) -> f64 {
        self.left
    }

    pub fn right(&self) -> f64 {
        self.right
    }

    pub fn bottom(&self) -> f64 {
        self.bottom
    }

    pub fn top(&self) -> f64 {
        self.top
    }

    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    pub fn height(&self) -> f64 {
        self.top - self.bottom
    }

    pub fn contains(&self, p: Point) -> bool {
        self.region_code(p).is_inside()
    }

    /// Classify `p`. Left/right and bottom/top are mutually exclusive.
    pub fn region_code(&self, p: Point) -> RegionCode {
        let mut code = RegionCode::INSIDE;
        if p.x > self.right {
            code |= RegionCode::RIGHT;
        } else if p.x < self.left {
            code |= RegionCode::LEFT;
        }
        if p.y > self.top {
            code |= RegionCode::TOP;
        } else if p.y < self.bottom {
            code |= RegionCode::BOTTOM;
        }
        code
    }

    /// Corners counter-clockwise from bottom-left.
    pub fn corners(&self) -> [Point; 4] {
        [
            Point::new(self.left, self.bottom),
            Point::new(self.right, self.bottom),
            Point::new(self.right, self.top),
            Point::new(self.left, self.top),
        ]
    }
}
