//! Bresenham circle rasterization with 8-way symmetry.
//!
//! Only the octant from 90° down to 45° (`0 <= x <= y`) is computed. Every
//! offset found there is mirrored into the other seven octants:
//!
//! ```text
//!          (-x,+y) | (+x,+y)
//!     (-y,+x)      |      (+y,+x)
//!   ---------------+---------------
//!     (-y,-x)      |      (+y,-x)
//!          (-x,-y) | (+x,-y)
//! ```
//!
//! The output keeps sequence semantics: where `x == 0` or `x == y` the mirrored
//! points coincide and appear more than once. Use [`dedup_points`] when a true
//! point set is needed.

use std::collections::HashSet;

use crate::error::{KernelError, Result};
use crate::math::{GridPoint, Point};

/// Offsets `(x, y)` of one octant of a circle of the given radius, centered at
/// the origin, in generation order.
pub fn octant(radius: i32) -> Result<Vec<GridPoint>> {
    if radius < 0 {
        return Err(KernelError::NegativeRadius(radius));
    }

    let mut offsets = Vec::with_capacity(radius as usize * 3 / 4 + 1);
    let mut x: i32 = 0;
    let mut y: i32 = radius;
    let mut p: i64 = 3 - 2 * radius as i64;

    while x <= y {
        offsets.push(GridPoint::new(x, y));
        if p < 0 {
            p += 4 * x as i64 + 6;
        } else {
            p += 4 * (x as i64 - y as i64) + 10;
            y -= 1;
        }
        x += 1;
    }

    Ok(offsets)
}

/// Mirror one octant offset into all eight octants around `center`.
#[inline]
fn mirror(center: GridPoint, offset: GridPoint) -> [GridPoint; 8] {
    let (x, y) = (offset.x, offset.y);
    [
        center.offset(x, y),
        center.offset(-x, y),
        center.offset(x, -y),
        center.offset(-x, -y),
        center.offset(y, x),
        center.offset(-y, x),
        center.offset(y, -x),
        center.offset(-y, -x),
    ]
}

/// Rasterize a circle of `radius` around `center`.
///
/// Emits 8 points per octant step, so the result length is always a multiple
/// of 8. A zero radius yields the center eight times.
///
/// # Errors
/// [`KernelError::NegativeRadius`] when `radius < 0`, and
/// [`KernelError::CoordinateOverflow`] when `center ± radius` leaves `i32`.
pub fn rasterize_circle(center: GridPoint, radius: i32) -> Result<Vec<GridPoint>> {
    let offsets = octant(radius)?;
    check_extent(center, radius)?;
    let mut points = Vec::with_capacity(offsets.len() * 8);
    for offset in offsets {
        points.extend_from_slice(&mirror(center, offset));
    }
    Ok(points)
}

/// Rasterize a circle around a real-valued center, rounded to the nearest
/// grid point first.
///
/// # Errors
/// [`KernelError::CenterOutOfGrid`] when the center is not finite or rounds
/// outside `i32`, plus everything [`rasterize_circle`] can return.
pub fn rasterize_circle_at(center: Point, radius: i32) -> Result<Vec<GridPoint>> {
    let (x, y) = (center.x.round(), center.y.round());
    let on_grid = |v: f64| (i32::MIN as f64..=i32::MAX as f64).contains(&v);
    if !(on_grid(x) && on_grid(y)) {
        return Err(KernelError::CenterOutOfGrid {
            x: center.x,
            y: center.y,
        });
    }
    rasterize_circle(GridPoint::new(x as i32, y as i32), radius)
}

/// Every mirrored point lies within `radius` of the center on both axes.
fn check_extent(center: GridPoint, radius: i32) -> Result<()> {
    let fits = |c: i32| c.checked_sub(radius).is_some() && c.checked_add(radius).is_some();
    if fits(center.x) && fits(center.y) {
        Ok(())
    } else {
        Err(KernelError::CoordinateOverflow {
            x: center.x,
            y: center.y,
            radius,
        })
    }
}

/// Remove repeated points, keeping the first occurrence of each.
pub fn dedup_points(points: impl IntoIterator<Item = GridPoint>) -> Vec<GridPoint> {
    let mut seen = HashSet::new();
    points.into_iter().filter(|p| seen.insert(*p)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_radius_rejected() {
        assert_eq!(
            rasterize_circle(GridPoint::new(0, 0), -1),
            Err(KernelError::NegativeRadius(-1))
        );
        assert!(octant(-5).is_err());
    }

    #[test]
    fn test_zero_radius_collapses_to_center() {
        let c = GridPoint::new(4, -2);
        let points = rasterize_circle(c, 0).unwrap();
        assert_eq!(points.len(), 8);
        assert!(points.iter().all(|&p| p == c));
        assert_eq!(dedup_points(points), vec![c]);
    }

    #[test]
    fn test_radius_one_keeps_poles() {
        let points = dedup_points(rasterize_circle(GridPoint::new(0, 0), 1).unwrap());
        for pole in [(0, 1), (0, -1), (1, 0), (-1, 0)] {
            assert!(points.contains(&GridPoint::from(pole)), "missing {pole:?}");
        }
        assert_eq!(points.len(), 4);
    }

    #[test]
    fn test_radius_three_octant() {
        let offsets = octant(3).unwrap();
        assert_eq!(
            offsets,
            vec![GridPoint::new(0, 3), GridPoint::new(1, 3), GridPoint::new(2, 2)]
        );

        let points = rasterize_circle(GridPoint::new(0, 0), 3).unwrap();
        assert_eq!(points.len(), 24);
        // (0,3) and (2,2) each mirror onto only four distinct points
        assert_eq!(dedup_points(points).len(), 16);
    }

    #[test]
    fn test_mirror_order() {
        let points = rasterize_circle(GridPoint::new(10, 20), 3).unwrap();
        // Second octant step is offset (1, 3)
        let expected = [
            (11, 23),
            (9, 23),
            (11, 17),
            (9, 17),
            (13, 21),
            (7, 21),
            (13, 19),
            (7, 19),
        ];
        let got: Vec<_> = points[8..16].iter().map(|p| (p.x, p.y)).collect();
        assert_eq!(got, expected);
    }

    #[test]
    fn test_points_stay_within_one_pixel_of_radius() {
        let center = GridPoint::new(-7, 12);
        for r in 1..60 {
            let lo = ((r - 1) * (r - 1)) as i64;
            let hi = ((r + 1) * (r + 1)) as i64;
            for p in rasterize_circle(center, r).unwrap() {
                let d2 = center.distance_squared(p);
                assert!(lo <= d2 && d2 <= hi, "r={r} point {p:?} d2={d2}");
            }
        }
    }

    #[test]
    fn test_octant_is_monotone() {
        let offsets = octant(100).unwrap();
        assert_eq!(offsets[0], GridPoint::new(0, 100));
        for pair in offsets.windows(2) {
            assert_eq!(pair[1].x, pair[0].x + 1);
            assert!(pair[0].y - pair[1].y <= 1);
            assert!(pair[1].x <= pair[1].y);
        }
    }

    #[test]
    fn test_circle_leaving_grid_rejected() {
        let edge = GridPoint::new(i32::MAX, 0);
        assert_eq!(
            rasterize_circle(edge, 1),
            Err(KernelError::CoordinateOverflow {
                x: i32::MAX,
                y: 0,
                radius: 1
            })
        );
        assert!(rasterize_circle(GridPoint::new(0, i32::MIN), 2).is_err());
        // Radius zero never moves off the center
        assert_eq!(rasterize_circle(edge, 0).unwrap().len(), 8);
    }

    #[test]
    fn test_circle_touching_grid_limit() {
        let center = GridPoint::new(i32::MAX - 1, i32::MIN + 1);
        let points = dedup_points(rasterize_circle(center, 1).unwrap());
        assert_eq!(points.len(), 4);
        assert!(points.contains(&GridPoint::new(i32::MAX, i32::MIN + 1)));
        assert!(points.contains(&GridPoint::new(i32::MAX - 1, i32::MIN)));
    }

    #[test]
    fn test_circle_at_rounds_center() {
        let points = rasterize_circle_at(Point::new(9.6, 20.4), 3).unwrap();
        assert_eq!(points, rasterize_circle(GridPoint::new(10, 20), 3).unwrap());

        let points = rasterize_circle_at(Point::new(-0.4, -2.5), 0).unwrap();
        assert!(points.iter().all(|&p| p == GridPoint::new(0, -3)));
    }

    #[test]
    fn test_circle_at_rejects_off_grid_center() {
        for center in [
            Point::new(f64::NAN, 0.0),
            Point::new(0.0, f64::INFINITY),
            Point::new(3e9, 0.0),
            Point::new(0.0, -3e9),
        ] {
            assert!(
                matches!(
                    rasterize_circle_at(center, 1),
                    Err(KernelError::CenterOutOfGrid { .. })
                ),
                "{center:?}"
            );
        }
        assert_eq!(
            rasterize_circle_at(Point::ORIGIN, -1),
            Err(KernelError::NegativeRadius(-1))
        );
    }

    #[test]
    fn test_dedup_keeps_first_occurrence_order() {
        let input = [(1, 1), (2, 2), (1, 1), (3, 3), (2, 2)].map(GridPoint::from);
        assert_eq!(
            dedup_points(input),
            vec![GridPoint::new(1, 1), GridPoint::new(2, 2), GridPoint::new(3, 3)]
        );
    }
}
