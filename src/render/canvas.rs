//! Off-screen ARGB pixel buffer.
//!
//! World coordinates follow the kernel convention (y grows upward). The
//! canvas maps `config.origin` to the bottom-left pixel, and row 0 of the
//! buffer is the top of the image.

use std::path::Path;

use image::RgbaImage;

use super::{colors, fill, PixelSink};
use crate::clipper::{ClipWindow, Polygon};
use crate::math::{GridPoint, Point, Segment};
use crate::rasterizer::BresenhamLine;

pub const DEFAULT_WIDTH: u32 = 800;
pub const DEFAULT_HEIGHT: u32 = 600;

/// Canvas size, fill color, and world placement.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CanvasConfig {
    pub width: u32,
    pub height: u32,
    pub background: u32,
    /// World point shown at the bottom-left pixel.
    pub origin: GridPoint,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            background: colors::BACKGROUND,
            origin: GridPoint::new(0, 0),
        }
    }
}

impl CanvasConfig {
    /// A config whose world origin sits at the center of the canvas.
    pub fn centered(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            origin: GridPoint::new(-(width as i32 / 2), -(height as i32 / 2)),
            ..Self::default()
        }
    }
}

pub struct Canvas {
    color_buffer: Vec<u32>,
    config: CanvasConfig,
}

impl Canvas {
    pub fn new(config: CanvasConfig) -> Self {
        let size = (config.width * config.height) as usize;
        Self {
            color_buffer: vec![config.background; size],
            config,
        }
    }

    pub fn width(&self) -> u32 {
        self.config.width
    }

    pub fn height(&self) -> u32 {
        self.config.height
    }

    /// Fill every pixel with `color`.
    pub fn clear(&mut self, color: u32) {
        self.color_buffer.fill(color);
    }

    /// Map a world point to a pixel (column, row). The result may be off-canvas.
    #[inline]
    pub fn world_to_pixel(&self, p: GridPoint) -> (i32, i32) {
        let col = p.x - self.config.origin.x;
        let row = self.config.height as i32 - 1 - (p.y - self.config.origin.y);
        (col, row)
    }

    /// Smallest and largest visible world points.
    pub fn world_bounds(&self) -> (GridPoint, GridPoint) {
        let o = self.config.origin;
        let max = o.offset(self.config.width as i32 - 1, self.config.height as i32 - 1);
        (o, max)
    }

    /// Silently ignores out-of-bounds pixels.
    #[inline]
    pub fn set_pixel(&mut self, x: i32, y: i32, color: u32) {
        if x >= 0 && x < self.width() as i32 && y >= 0 && y < self.height() as i32 {
            let index = (y as u32 * self.width() + x as u32) as usize;
            self.color_buffer[index] = color;
        }
    }

    /// Color at pixel (x, y), or None if out of bounds.
    #[inline]
    pub fn get_pixel(&self, x: i32, y: i32) -> Option<u32> {
        if x >= 0 && x < self.width() as i32 && y >= 0 && y < self.height() as i32 {
            Some(self.color_buffer[(y as u32 * self.width() + x as u32) as usize])
        } else {
            None
        }
    }

    /// Color at a world point, or None if it is off-canvas.
    pub fn color_at(&self, p: GridPoint) -> Option<u32> {
        let (x, y) = self.world_to_pixel(p);
        self.get_pixel(x, y)
    }

    /// Draw a real-valued segment by rounding its endpoints to the grid.
    pub fn draw_segment(&mut self, segment: &Segment, color: u32) {
        let line = BresenhamLine::new(round(segment.start), round(segment.end));
        self.plot_all(line, color);
    }

    /// Draw the closed outline of a vertex loop.
    pub fn draw_polygon_outline(&mut self, vertices: &[Point], color: u32) {
        let Some(&last) = vertices.last() else {
            return;
        };
        let mut prev = last;
        for &current in vertices {
            self.draw_segment(&Segment::new(prev, current), color);
            prev = current;
        }
    }

    pub fn draw_window(&mut self, window: &ClipWindow, color: u32) {
        self.draw_polygon_outline(&window.corners(), color);
    }

    /// Fill a convex polygon, such as a clip result.
    pub fn fill_polygon(&mut self, polygon: &Polygon, color: u32) {
        let (min, max) = self.world_bounds();
        for tri in polygon.triangulate() {
            fill::fill_triangle(self, tri, min, max, color);
        }
    }

    pub fn to_rgba_image(&self) -> RgbaImage {
        RgbaImage::from_fn(self.width(), self.height(), |x, y| {
            let color = self.color_buffer[(y * self.width() + x) as usize];
            image::Rgba(colors::to_rgba(color))
        })
    }

    pub fn save_png<P: AsRef<Path>>(&self, path: P) -> Result<(), image::ImageError> {
        self.to_rgba_image()
            .save_with_format(path, image::ImageFormat::Png)
    }
}

impl PixelSink for Canvas {
    #[inline]
    fn plot(&mut self, p: GridPoint, color: u32) {
        let (x, y) = self.world_to_pixel(p);
        self.set_pixel(x, y, color);
    }
}

#[inline]
fn round(p: Point) -> GridPoint {
    GridPoint::new(p.x.round() as i32, p.y.round() as i32)
}
