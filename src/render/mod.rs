//! Consumers of kernel output.
//!
//! The kernel never draws. It returns points and clipped geometry, and
//! anything implementing [`PixelSink`] turns them into marks. [`Canvas`] is an
//! off-screen ARGB buffer that can be exported as PNG.

pub mod canvas;
pub mod colors;
pub mod fill;

pub use canvas::{Canvas, CanvasConfig};
pub use fill::fill_triangle;

use crate::math::GridPoint;

/// Receives rasterized points in kernel (world) coordinates.
pub trait PixelSink {
    /// Mark a single grid point.
    fn plot(&mut self, p: GridPoint, color: u32);

    /// Mark every point of a sequence, e.g. a rasterized line or circle.
    fn plot_all<I>(&mut self, points: I, color: u32)
    where
        I: IntoIterator<Item = GridPoint>,
        Self: Sized,
    {
        for p in points {
            self.plot(p, color);
        }
    }
}
