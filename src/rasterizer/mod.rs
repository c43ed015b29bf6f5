//! Integer-grid rasterization of lines and circles.
//!
//! Both algorithms are incremental: a small integer decision term picks the
//! next grid step, so no division or floating point is involved.
//!
//! - [`line`]: Bresenham line, all octants (steep lines by transposition)
//! - [`circle`]: Bresenham/midpoint circle with 8-way octant mirroring

pub mod circle;
pub mod line;

pub use circle::{dedup_points, octant, rasterize_circle, rasterize_circle_at};
pub use line::{rasterize_line, BresenhamLine};
