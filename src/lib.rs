//! A small 2D geometry kernel for raster output.
//!
//! Four stateless algorithms turn continuous primitives into what a renderer
//! needs:
//!
//! - [`rasterize_line`]: Bresenham line into integer grid points
//! - [`rasterize_circle`]: Bresenham circle, one octant mirrored 8 ways
//! - [`clip_line`]: Cohen-Sutherland segment clipping to a rectangle
//! - [`clip_polygon`]: Sutherland-Hodgman polygon clipping to a rectangle
//!
//! The kernel never draws. The [`render`] module holds consumers that turn its
//! output into pixels.
//!
//! # Quick Start
//!
//! ```
//! use raster2d::prelude::*;
//!
//! let window = ClipWindow::new(120.0, 500.0, 100.0, 350.0)?;
//! let visible = clip_line(Segment::from_coords(50.0, 100.0, 600.0, 300.0), &window);
//! assert!(visible.is_some());
//!
//! let pixels = rasterize_line(GridPoint::new(0, 0), GridPoint::new(5, 2));
//! assert_eq!(pixels.len(), 6);
//! # Ok::<(), raster2d::KernelError>(())
//! ```

pub mod clipper;
pub mod error;
pub mod math;
pub mod rasterizer;
pub mod render;

// Re-export the kernel surface at crate root
pub use clipper::{clip_line, clip_polygon, ClipEdge, ClipWindow, Polygon, RegionCode};
pub use error::{KernelError, Result};
pub use math::{GridPoint, Point, Segment};
pub use rasterizer::{
    dedup_points, rasterize_circle, rasterize_circle_at, rasterize_line, BresenhamLine,
};

/// Prelude module for convenient imports.
///
/// # Example
/// ```
/// use raster2d::prelude::*;
/// ```
pub mod prelude {
    // Geometry
    pub use crate::math::{GridPoint, Point, Segment};

    // Rasterization
    pub use crate::rasterizer::{
        dedup_points, rasterize_circle, rasterize_circle_at, rasterize_line, BresenhamLine,
    };

    // Clipping
    pub use crate::clipper::{clip_line, clip_polygon, ClipEdge, ClipWindow, Polygon, RegionCode};

    // Errors
    pub use crate::error::KernelError;

    // Rendering
    pub use crate::render::{Canvas, CanvasConfig, PixelSink};
}

/// Module exposing internals for benchmarking. Not part of the stable API.
pub mod bench {
    pub use crate::clipper::line::violated_edge;
    pub use crate::rasterizer::octant;
}
