//! Renders the four classic kernel scenes to PNG files.
//!
//! Output goes to `$RASTER2D_OUT_DIR` (default `target/scenes`). Set
//! `RUST_LOG=raster2d=trace` to watch the clippers work.

use std::path::{Path, PathBuf};

use raster2d::prelude::*;
use raster2d::render::colors;
use tracing::info;
use tracing_subscriber::EnvFilter;

const OUT_DIR_VAR: &str = "RASTER2D_OUT_DIR";
const DEFAULT_OUT_DIR: &str = "target/scenes";

fn line_scene(out: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let mut canvas = Canvas::new(CanvasConfig::centered(800, 600));
    let points = rasterize_line(GridPoint::new(-200, -100), GridPoint::new(200, 170));
    info!(points = points.len(), "rasterized line");
    canvas.plot_all(points, colors::BLACK);
    canvas.save_png(out.join("bresenham_line.png"))?;
    Ok(())
}

fn circle_scene(out: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let mut canvas = Canvas::new(CanvasConfig::centered(800, 600));
    let points = rasterize_circle(GridPoint::new(0, 0), 100)?;
    info!(
        points = points.len(),
        distinct = dedup_points(points.iter().copied()).len(),
        "rasterized circle"
    );
    canvas.plot_all(points, colors::BLUE);
    canvas.save_png(out.join("bresenham_circle.png"))?;
    Ok(())
}

fn line_clip_scene(out: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let mut canvas = Canvas::new(CanvasConfig {
        width: 600,
        height: 500,
        ..CanvasConfig::default()
    });
    let window = ClipWindow::new(120.0, 500.0, 100.0, 350.0)?;
    let line = Segment::from_coords(50.0, 100.0, 600.0, 300.0);

    canvas.draw_window(&window, colors::GREEN);
    canvas.draw_segment(&line, colors::RED);
    match clip_line(line, &window) {
        Some(visible) => {
            info!(?visible, "segment clipped");
            canvas.draw_segment(&visible, colors::BLUE);
        }
        None => info!("segment rejected"),
    }
    canvas.save_png(out.join("cohen_sutherland.png"))?;
    Ok(())
}

fn polygon_clip_scene(out: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let mut canvas = Canvas::new(CanvasConfig {
        width: 900,
        height: 700,
        ..CanvasConfig::default()
    });
    let window = ClipWindow::new(200.0, 600.0, 150.0, 450.0)?;
    let decagon: Vec<Point> = [
        (100.0, 400.0),
        (300.0, 400.0),
        (400.0, 500.0),
        (500.0, 400.0),
        (700.0, 400.0),
        (550.0, 250.0),
        (500.0, 100.0),
        (400.0, 200.0),
        (300.0, 100.0),
        (250.0, 250.0),
    ]
    .into_iter()
    .map(Point::from)
    .collect();

    let clipped = Polygon::new(clip_polygon(&decagon, &window));
    info!(input = decagon.len(), output = clipped.len(), "polygon clipped");

    // The decagon is not convex, so the clip result is outlined, not filled.
    canvas.draw_polygon_outline(&decagon, colors::GRAY);
    canvas.draw_polygon_outline(&clipped.vertices, colors::BLUE);
    canvas.draw_window(&window, colors::RED);
    canvas.save_png(out.join("sutherland_hodgman.png"))?;
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let out = std::env::var_os(OUT_DIR_VAR)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUT_DIR));
    std::fs::create_dir_all(&out)?;

    line_scene(&out)?;
    circle_scene(&out)?;
    line_clip_scene(&out)?;
    polygon_clip_scene(&out)?;

    info!(dir = %out.display(), "scenes written");
    Ok(())
}
