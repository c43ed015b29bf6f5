//! Sutherland-Hodgman polygon clipping against a [`ClipWindow`].
//!
//! The window is the intersection of four half-planes. The polygon is clipped
//! against each in turn ([`ClipEdge::ORDER`]: left, right, bottom, top), and the
//! output of one pass is the input of the next.
//!
//! A single pass walks every polygon edge `prev -> current`, with the last
//! vertex as the predecessor of the first:
//!
//! | prev    | current | emitted                  |
//! |---------|---------|--------------------------|
//! | inside  | inside  | current                  |
//! | outside | inside  | intersection, current    |
//! | inside  | outside | intersection             |
//! | outside | outside | nothing                  |
//!
//! Each pass keeps a simple polygon simple, because a convex half-plane cannot
//! introduce self-intersections.

use tracing::{debug, trace};

use super::edge::ClipEdge;
use super::window::ClipWindow;
use crate::math::Point;

/// A closed vertex loop. The last vertex connects back to the first.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Polygon {
    pub vertices: Vec<Point>,
}

impl Polygon {
    pub fn new(vertices: Vec<Point>) -> Self {
        Self { vertices }
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// True when no vertices remain.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Clip against a single window edge.
    pub fn clip_against_edge(&self, edge: ClipEdge, window: &ClipWindow) -> Self {
        let Some(&last) = self.vertices.last() else {
            return Self::default();
        };

        let mut output = Vec::with_capacity(self.vertices.len() + 2);
        let mut prev = last;
        let mut prev_inside = edge.is_inside(prev, window);

        for &current in &self.vertices {
            let current_inside = edge.is_inside(current, window);

            if current_inside {
                if !prev_inside {
                    // Entering: crossing point first
                    output.push(edge.intersect(prev, current, window));
                }
                output.push(current);
            } else if prev_inside {
                // Leaving
                output.push(edge.intersect(prev, current, window));
            }

            prev = current;
            prev_inside = current_inside;
        }

        Self { vertices: output }
    }

    /// Clip against all four window edges.
    ///
    /// Stops early once a pass leaves nothing, since later passes cannot add
    /// vertices back.
    pub fn clip(&self, window: &ClipWindow) -> Self {
        let mut result = self.clone();

        for edge in ClipEdge::ORDER {
            if result.is_empty() {
                debug!(?edge, "polygon fully clipped");
                break;
            }
            result = result.clip_against_edge(edge, window);
            trace!(?edge, vertices = result.len(), "clipped against edge");
        }

        result
    }

    /// Fan triangulation.
    ///
    /// Returns an iterator of (v0, v1, v2) triangles. Assumes the polygon is
    /// convex, which holds for any convex input after clipping.
    pub fn triangulate(&self) -> impl Iterator<Item = (Point, Point, Point)> + '_ {
        (1..self.vertices.len().saturating_sub(1))
            .map(move |i| (self.vertices[0], self.vertices[i], self.vertices[i + 1]))
    }
}

impl From<Vec<Point>> for Polygon {
    fn from(vertices: Vec<Point>) -> Self {
        Self::new(vertices)
    }
}

impl FromIterator<Point> for Polygon {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Clip the vertex loop `polygon` to `window`.
///
/// The result may have more, fewer, or the same number of vertices as the
/// input, and is empty when the two do not overlap.
pub fn clip_polygon(polygon: &[Point], window: &ClipWindow) -> Vec<Point> {
    Polygon::new(polygon.to_vec()).clip(window).vertices
}
