//! Cohen-Sutherland segment clipping.
//!
//! Each endpoint carries a [`RegionCode`]. Per iteration:
//!
//! 1. Both codes zero: the segment is inside, accept it
//! 2. Codes share a bit: both endpoints are beyond the same edge, reject
//! 3. Otherwise move an outside endpoint (the start one first) onto the
//!    boundary it violates and reclassify it
//!
//! When an endpoint violates two boundaries at once, the boundary is chosen by
//! [`CLIP_PRIORITY`]. Every move assigns the boundary coordinate exactly, so
//! the moved endpoint loses that bit; at most one bit per axis per endpoint
//! can be cleared, which bounds the loop.

use tracing::{debug, trace, warn};

use super::edge::ClipEdge;
use super::window::{ClipWindow, RegionCode};
use crate::math::Segment;

/// Order in which violated boundaries are resolved: top, bottom, left, right.
pub const CLIP_PRIORITY: [ClipEdge; 4] = [
    ClipEdge::Top,
    ClipEdge::Bottom,
    ClipEdge::Left,
    ClipEdge::Right,
];

// Four moves settle any segment in exact arithmetic. Rounding near a window
// corner can re-set a cleared bit, so allow some slack before giving up.
const MAX_CLIP_STEPS: usize = 16;

/// The boundary to resolve first for an outside endpoint, or `None` if the
/// code is inside.
pub fn violated_edge(code: RegionCode) -> Option<ClipEdge> {
    CLIP_PRIORITY
        .iter()
        .copied()
        .find(|edge| code.contains(edge.code()))
}

/// Clip `segment` to `window`.
///
/// Returns the visible part with the input's direction preserved, or `None`
/// when no part of the segment lies inside the window.
pub fn clip_line(segment: Segment, window: &ClipWindow) -> Option<Segment> {
    clip_line_within(segment, window, MAX_CLIP_STEPS)
}

/// Cohen-Sutherland loop with at most `max_steps` endpoint moves. A segment
/// still unclassified after that is rejected.
fn clip_line_within(segment: Segment, window: &ClipWindow, max_steps: usize) -> Option<Segment> {
    let mut p1 = segment.start;
    let mut p2 = segment.end;
    let mut code1 = window.region_code(p1);
    let mut code2 = window.region_code(p2);

    for step in 0..max_steps {
        if code1.is_inside() && code2.is_inside() {
            return Some(Segment::new(p1, p2));
        }
        if code1.intersects(code2) {
            debug!(?code1, ?code2, step, "segment rejected");
            return None;
        }

        let clip_start = !code1.is_inside();
        let code = if clip_start { code1 } else { code2 };
        let Some(edge) = violated_edge(code) else {
            break;
        };

        let hit = edge.intersect(p1, p2, window);
        trace!(step, ?edge, x = hit.x, y = hit.y, clip_start, "moved endpoint");

        if clip_start {
            p1 = hit;
            code1 = window.region_code(p1);
        } else {
            p2 = hit;
            code2 = window.region_code(p2);
        }
    }

    if code1.is_inside() && code2.is_inside() {
        return Some(Segment::new(p1, p2));
    }
    debug_assert!(max_steps < MAX_CLIP_STEPS, "clip did not settle: {segment:?}");
    warn!(?code1, ?code2, max_steps, "clip did not settle, rejecting segment");
    None
}
