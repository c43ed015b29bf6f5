//! The four boundaries of a [`ClipWindow`], each an infinite line splitting
//! the plane into an inside and an outside half-plane.

use super::window::{ClipWindow, RegionCode};
use crate::math::Point;

/// One boundary of a clip window.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ClipEdge {
    /// Left edge: x >= left
    Left,
    /// Right edge: x <= right
    Right,
    /// Bottom edge: y >= bottom
    Bottom,
    /// Top edge: y <= top
    Top,
}

impl ClipEdge {
    /// Half-plane order used by polygon clipping.
    pub const ORDER: [ClipEdge; 4] = [
        ClipEdge::Left,
        ClipEdge::Right,
        ClipEdge::Bottom,
        ClipEdge::Top,
    ];

    /// The region-code bit set for points outside this edge.
    pub const fn code(self) -> RegionCode {
        match self {
            Self::Left => RegionCode::LEFT,
            Self::Right => RegionCode::RIGHT,
            Self::Bottom => RegionCode::BOTTOM,
            Self::Top => RegionCode::TOP,
        }
    }

    /// Fixed coordinate of this edge (x for left/right, y for bottom/top).
    pub fn bound(self, window: &ClipWindow) -> f64 {
        match self {
            Self::Left => window.left(),
            Self::Right => window.right(),
            Self::Bottom => window.bottom(),
            Self::Top => window.top(),
        }
    }

    pub const fn is_vertical(self) -> bool {
        matches!(self, Self::Left | Self::Right)
    }

    /// True if `p` lies in the inside half-plane (boundary included).
    #[inline]
    pub fn is_inside(self, p: Point, window: &ClipWindow) -> bool {
        match self {
            Self::Left => p.x >= window.left(),
            Self::Right => p.x <= window.right(),
            Self::Bottom => p.y >= window.bottom(),
            Self::Top => p.y <= window.top(),
        }
    }

    /// Where the line through `a` and `b` crosses this edge.
    ///
    /// The edge's own coordinate is assigned exactly; the other one is
    /// interpolated along the segment. A segment parallel to the edge has no crossing,
    /// so the free coordinate is copied from `a` instead of dividing by zero.
    pub fn intersect(self, a: Point, b: Point, window: &ClipWindow) -> Point {
        let bound = self.bound(window);
        let hit = if self.is_vertical() {
            Point::new(bound, interpolate(a.x, b.x, a.y, b.y, bound))
        } else {
            Point::new(interpolate(a.y, b.y, a.x, b.x, bound), bound)
        };
        debug_assert!(
            !(a.is_finite() && b.is_finite()) || hit.is_finite(),
            "non-finite crossing for {a:?} -> {b:?}"
        );
        hit
    }
}

/// Value of the free coordinate `v` where the segment reaches `u = bound`.
///
/// Uses the direct form while every intermediate is finite. Deltas between
/// coordinates near `f64::MAX` overflow, so those fall back to halved
/// coordinates, whose differences always fit, anchored at the endpoint nearer
/// the boundary so the small result is not lost to cancellation.
#[inline]
fn interpolate(a_u: f64, b_u: f64, a_v: f64, b_v: f64, bound: f64) -> f64 {
    let du = b_u - a_u;
    if du == 0.0 {
        return a_v;
    }

    let num = (b_v - a_v) * (bound - a_u);
    if num.is_finite() && du.is_finite() {
        return a_v + num / du;
    }

    let a_gap = (bound * 0.5 - a_u * 0.5).abs();
    let b_gap = (bound * 0.5 - b_u * 0.5).abs();
    let (a_u, b_u, a_v, b_v) = if a_gap <= b_gap {
        (a_u, b_u, a_v, b_v)
    } else {
        (b_u, a_u, b_v, a_v)
    };
    let t = (bound * 0.5 - a_u * 0.5) / (b_u * 0.5 - a_u * 0.5);
    let half_dv = b_v * 0.5 - a_v * 0.5;
    // Added twice so no intermediate exceeds the span between a_v and b_v
    a_v + t * half_dv + t * half_dv
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn window() -> ClipWindow {
        ClipWindow::new(0.0, 10.0, 0.0, 10.0).unwrap()
    }

    #[test]
    fn test_inside_tests_include_boundary() {
        let w = window();
        let on_left = Point::new(0.0, 5.0);
        assert!(ClipEdge::Left.is_inside(on_left, &w));
        assert!(!ClipEdge::Left.is_inside(Point::new(-0.1, 5.0), &w));
        assert!(ClipEdge::Top.is_inside(Point::new(5.0, 10.0), &w));
        assert!(!ClipEdge::Top.is_inside(Point::new(5.0, 10.5), &w));
    }

    #[test]
    fn test_intersect_vertical_edge() {
        let w = window();
        let hit = ClipEdge::Left.intersect(Point::new(-5.0, 0.0), Point::new(5.0, 10.0), &w);
        assert_eq!(hit.x, 0.0);
        assert_relative_eq!(hit.y, 5.0);
    }

    #[test]
    fn test_intersect_horizontal_edge() {
        let w = window();
        let hit = ClipEdge::Top.intersect(Point::new(2.0, 5.0), Point::new(6.0, 15.0), &w);
        assert_eq!(hit.y, 10.0);
        assert_relative_eq!(hit.x, 4.0);
    }

    #[test]
    fn test_parallel_segment_copies_coordinate() {
        let w = window();
        let hit = ClipEdge::Right.intersect(Point::new(3.0, 1.0), Point::new(3.0, 9.0), &w);
        assert_eq!(hit, Point::new(10.0, 1.0));

        let hit = ClipEdge::Bottom.intersect(Point::new(2.0, 4.0), Point::new(8.0, 4.0), &w);
        assert_eq!(hit, Point::new(2.0, 0.0));
    }

    #[test]
    fn test_intersect_near_f64_limits() {
        let w = window();
        let a = Point::new(-1e308, -1e308);
        let b = Point::new(1e308, 1e308);

        let hit = ClipEdge::Bottom.intersect(a, b, &w);
        assert!(hit.is_finite());
        assert_relative_eq!(hit.x, 0.0);
        assert_eq!(hit.y, 0.0);

        let hit = ClipEdge::Left.intersect(b, a, &w);
        assert!(hit.is_finite());
        assert_eq!(hit.x, 0.0);
        assert_relative_eq!(hit.y, 0.0);

        // Product of deltas overflows even though each delta is finite
        let hit = ClipEdge::Top.intersect(Point::ORIGIN, b, &w);
        assert!(hit.is_finite());
        assert_relative_eq!(hit.x, 10.0, epsilon = 1e-9);
    }

    #[test]
    fn test_codes_match_region_bits() {
        assert_eq!(ClipEdge::Left.code().bits(), 1);
        assert_eq!(ClipEdge::Right.code().bits(), 2);
        assert_eq!(ClipEdge::Bottom.code().bits(), 4);
        assert_eq!(ClipEdge::Top.code().bits(), 8);
    }
}
