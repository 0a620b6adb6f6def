//! Trapezoidal fan-out bridges.

use tracing::debug;

use maskkit_core::{LayoutError, Polygon, Result};

use crate::edge::{edge_span, facing_edges, PadEdge};
use crate::pad::Pad;

/// Centers closer than this are considered coincident.
const COINCIDENT_TOL: f64 = 1e-6;

/// Join the facing edges of two pads with one 4-vertex polygon.
///
/// Vertex order is `[inner_start, inner_end, outer_end, outer_start]`, so
/// swapping the inner/outer roles yields the point-reversed polygon.
///
/// # Errors
///
/// `Geometry` if the pad centers coincide (the facing direction would be
/// ambiguous and the polygon degenerate).
pub fn trapezoidal_bridge(
    inner: &Pad,
    outer: &Pad,
    inner_edge: Option<PadEdge>,
    outer_edge: Option<PadEdge>,
) -> Result<Polygon> {
    if inner.center.distance_to(&outer.center) < COINCIDENT_TOL {
        return Err(LayoutError::geometry(format!(
            "pad centers coincide at ({}, {}); bridge direction is ambiguous",
            inner.center.x, inner.center.y
        )));
    }

    let (ie, oe) = facing_edges(inner, outer, inner_edge, outer_edge);
    let ispan = edge_span(inner, ie);
    let ospan = edge_span(outer, oe);

    debug!(inner_edge = ?ie, outer_edge = ?oe, "built trapezoidal bridge");
    Ok(Polygon::new(vec![
        ispan.start,
        ispan.end,
        ospan.end,
        ospan.start,
    ]))
}
