//! Geometric value types shared by the rasterizers and clippers.

pub mod grid;
pub mod point;
pub mod segment;

pub use grid::GridPoint;
pub use point::Point;
pub use segment::Segment;
