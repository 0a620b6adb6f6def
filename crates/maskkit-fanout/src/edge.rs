//! Facing-edge selection between two pads.
//!
//! Edges are derived on demand, never stored: given two pads, the dominant
//! axis of the center-to-center vector decides which edge of each pad
//! faces the other, and the returned endpoints are already shortened by
//! the chamfer cut at each end.

use serde::{Deserialize, Serialize};

use maskkit_core::Point;

use crate::pad::Pad;

/// One of the four edges of a pad.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PadEdge {
    Left,
    Right,
    Top,
    Bottom,
}

/// The two endpoints of a pad edge, chamfer cut-offs applied.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EdgeSpan {
    pub start: Point,
    pub end: Point,
}

impl EdgeSpan {
    pub fn midpoint(&self) -> Point {
        Point::new(
            (self.start.x + self.end.x) / 2.0,
            (self.start.y + self.end.y) / 2.0,
        )
    }

    pub fn length(&self) -> f64 {
        self.start.distance_to(&self.end)
    }
}

/// The endpoints of `edge` on `pad`, shortened by the chamfer cut.
pub fn edge_span(pad: &Pad, edge: PadEdge) -> EdgeSpan {
    let (x, y) = (pad.center.x, pad.center.y);
    let hl = pad.length / 2.0;
    let hw = pad.width / 2.0;
    let c = pad.chamfer_cut();
    let (start, end) = match edge {
        PadEdge::Left => (
            Point::new(x - hl, y - hw + c),
            Point::new(x - hl, y + hw - c),
        ),
        PadEdge::Right => (
            Point::new(x + hl, y - hw + c),
            Point::new(x + hl, y + hw - c),
        ),
        PadEdge::Top => (
            Point::new(x - hl + c, y + hw),
            Point::new(x + hl - c, y + hw),
        ),
        PadEdge::Bottom => (
            Point::new(x - hl + c, y - hw),
            Point::new(x + hl - c, y - hw),
        ),
    };
    EdgeSpan { start, end }
}

/// Pick the facing edges of two pads.
///
/// The dominant axis of the inner-to-outer displacement decides: a larger
/// horizontal component pairs {right, left} (or the reverse), otherwise
/// {top, bottom}. Explicit overrides bypass the heuristic per pad.
pub fn facing_edges(
    inner: &Pad,
    outer: &Pad,
    inner_override: Option<PadEdge>,
    outer_override: Option<PadEdge>,
) -> (PadEdge, PadEdge) {
    let dx = outer.center.x - inner.center.x;
    let dy = outer.center.y - inner.center.y;
    let inner_edge = inner_override.unwrap_or(if dx.abs() > dy.abs() {
        if dx > 0.0 {
            PadEdge::Right
        } else {
            PadEdge::Left
        }
    } else if dy > 0.0 {
        PadEdge::Top
    } else {
        PadEdge::Bottom
    });
    let outer_edge = outer_override.unwrap_or(if dx.abs() > dy.abs() {
        if dx > 0.0 {
            PadEdge::Left
        } else {
            PadEdge::Right
        }
    } else if dy > 0.0 {
        PadEdge::Bottom
    } else {
        PadEdge::Top
    });
    (inner_edge, outer_edge)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pad::Chamfer;

    fn pad_at(x: f64, y: f64) -> Pad {
        Pad::new(Point::new(x, y), 10.0, 6.0, Chamfer::none()).unwrap()
    }

    #[test]
    fn test_horizontal_displacement_picks_right_left() {
        let a = pad_at(0.0, 0.0);
        let b = pad_at(50.0, 10.0);
        let (ea, eb) = facing_edges(&a, &b, None, None);
        assert_eq!(ea, PadEdge::Right);
        assert_eq!(eb, PadEdge::Left);
    }

    #[test]
    fn test_vertical_displacement_picks_top_bottom() {
        let a = pad_at(0.0, 0.0);
        let b = pad_at(5.0, -40.0);
        let (ea, eb) = facing_edges(&a, &b, None, None);
        assert_eq!(ea, PadEdge::Bottom);
        assert_eq!(eb, PadEdge::Top);
    }

    #[test]
    fn test_overrides_bypass_heuristic() {
        let a = pad_at(0.0, 0.0);
        let b = pad_at(50.0, 0.0);
        let (ea, eb) = facing_edges(&a, &b, Some(PadEdge::Top), None);
        assert_eq!(ea, PadEdge::Top);
        assert_eq!(eb, PadEdge::Left);
    }

    #[test]
    fn test_edge_span_plain_pad() {
        let pad = pad_at(0.0, 0.0);
        let span = edge_span(&pad, PadEdge::Right);
        assert_eq!(span.start, Point::new(5.0, -3.0));
        assert_eq!(span.end, Point::new(5.0, 3.0));
        assert!((span.length() - 6.0).abs() < 1e-12);
    }

    #[test]
    fn test_edge_span_shortened_by_chamfer() {
        let pad = Pad::new(Point::new(0.0, 0.0), 10.0, 6.0, Chamfer::straight(1.5)).unwrap();
        let span = edge_span(&pad, PadEdge::Right);
        assert_eq!(span.start, Point::new(5.0, -1.5));
        assert_eq!(span.end, Point::new(5.0, 1.5));
        let top = edge_span(&pad, PadEdge::Top);
        assert_eq!(top.start, Point::new(-3.5, 3.0));
        assert_eq!(top.end, Point::new(3.5, 3.0));
    }
}
