//! Clipping against an axis-aligned rectangular window.
//!
//! Two algorithms share the same window and edge model:
//!
//! - [`line`]: Cohen-Sutherland segment clipping driven by region codes
//! - [`polygon`]: Sutherland-Hodgman polygon clipping, one half-plane per edge

pub mod edge;
pub mod line;
pub mod polygon;
pub mod window;

pub use edge::ClipEdge;
pub use line::{clip_line, CLIP_PRIORITY};
pub use polygon::{clip_polygon, Polygon};
pub use window::{ClipWindow, RegionCode};
