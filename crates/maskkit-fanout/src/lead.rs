//! Bent lead routing between two pad centers.
//!
//! The route is an L-shaped centerline bending on the axis with the
//! smaller displacement, with an optional straight or round chamfer at the
//! bend, widened into the final filled trace.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use maskkit_core::{LayoutError, Point, Polygon, Result};
use maskkit_curves::widen::{arc_between, widen, JoinStyle};
use maskkit_curves::Centerline;

/// Centers closer than this are considered coincident.
const COINCIDENT_TOL: f64 = 1e-6;

/// Tangent directions with a cross product below this are treated as
/// collinear and connected by a straight cut instead of an arc.
const COLLINEAR_TOL: f64 = 1e-8;

/// Corner treatment at the bend of a lead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CornerStyle {
    /// Sharp 90-degree bend.
    RightAngle,
    /// Straight cut between the two retreat points.
    StraightChamfer,
    /// Circular arc tangent to both segments.
    RoundChamfer,
}

/// Parameters of a bent lead.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LeadStyle {
    pub line_width: f64,
    pub corner: CornerStyle,
    /// Retreat distance from the bend for the chamfer styles.
    pub chamfer_size: f64,
}

/// A routed lead: the bent centerline and its widened trace.
#[derive(Debug, Clone, PartialEq)]
pub struct LeadRoute {
    pub centerline: Centerline,
    pub polygon: Polygon,
}

/// Route a lead from `from` to `to`.
///
/// The bend sits at `(from.x, to.y)` when `|dx| < |dy|`, else at
/// `(to.x, from.y)`. Chamfer styles retreat each adjoining segment from
/// the bend by `min(chamfer_size, segment/2)` and connect the retreat
/// points by a straight cut or by the arc tangent to both segments.
/// Near-collinear tangent directions fall back to the straight cut.
///
/// # Errors
///
/// `Configuration` for a non-positive line width or (for chamfer styles)
/// chamfer size; `Geometry` if the centers coincide.
pub fn lead_route(from: Point, to: Point, style: &LeadStyle) -> Result<LeadRoute> {
    if !style.line_width.is_finite() || style.line_width <= 0.0 {
        return Err(LayoutError::Configuration {
            what: "lead line width",
            requested: style.line_width,
            limit: 0.0,
        });
    }
    if style.corner != CornerStyle::RightAngle
        && (!style.chamfer_size.is_finite() || style.chamfer_size <= 0.0)
    {
        return Err(LayoutError::Configuration {
            what: "lead chamfer size",
            requested: style.chamfer_size,
            limit: 0.0,
        });
    }
    if from.distance_to(&to) < COINCIDENT_TOL {
        return Err(LayoutError::geometry(format!(
            "lead endpoints coincide at ({}, {})",
            from.x, from.y
        )));
    }

    let bend = if (to.x - from.x).abs() < (to.y - from.y).abs() {
        Point::new(from.x, to.y)
    } else {
        Point::new(to.x, from.y)
    };

    let points = match style.corner {
        CornerStyle::RightAngle => vec![from, bend, to],
        CornerStyle::StraightChamfer | CornerStyle::RoundChamfer => {
            chamfered_bend(from, bend, to, style)
        }
    };

    let centerline = Centerline::dedup(points);
    let polygon = widen(&centerline, style.line_width, JoinStyle::Round { resolution: 8 })?;
    debug!(
        corner = ?style.corner,
        vertices = polygon.len(),
        "routed lead"
    );
    Ok(LeadRoute {
        centerline,
        polygon,
    })
}

/// Centerline points through the bend with the chamfer applied.
fn chamfered_bend(from: Point, bend: Point, to: Point, style: &LeadStyle) -> Vec<Point> {
    let seg1 = from.distance_to(&bend);
    let seg2 = bend.distance_to(&to);
    if seg1 < COINCIDENT_TOL || seg2 < COINCIDENT_TOL {
        // Axis-aligned endpoints: no bend to chamfer.
        return vec![from, bend, to];
    }
    let dir1 = ((bend.x - from.x) / seg1, (bend.y - from.y) / seg1);
    let dir2 = ((to.x - bend.x) / seg2, (to.y - bend.y) / seg2);

    // Retreat is capped at half of the shorter adjoining segment.
    let c1 = style.chamfer_size.min(seg1 / 2.0);
    let c2 = style.chamfer_size.min(seg2 / 2.0);
    let a = Point::new(bend.x - dir1.0 * c1, bend.y - dir1.1 * c1);
    let b = Point::new(bend.x + dir2.0 * c2, bend.y + dir2.1 * c2);

    if style.corner == CornerStyle::StraightChamfer {
        return vec![from, a, b, to];
    }

    // Arc center from the perpendicular-offset intersection of the two
    // tangent lines.
    let n1 = (-dir1.1, dir1.0);
    let n2 = (-dir2.1, dir2.0);
    let det = n1.0 * n2.1 - n1.1 * n2.0;
    if det.abs() < COLLINEAR_TOL {
        // Explicit fallback: nearly collinear segments have no finite
        // tangent circle.
        warn!(
            det,
            "round chamfer degenerated to a straight cut (collinear tangents)"
        );
        return vec![from, a, b, to];
    }
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    let t1 = (dx * n2.1 - dy * n2.0) / det;
    let center = Point::new(a.x + n1.0 * t1, a.y + n1.1 * t1);

    let a0 = (a.y - center.y).atan2(a.x - center.x);
    let a1 = (b.y - center.y).atan2(b.x - center.x);
    let mut sweep = a1 - a0;
    while sweep <= -std::f64::consts::PI {
        sweep += 2.0 * std::f64::consts::PI;
    }
    while sweep > std::f64::consts::PI {
        sweep -= 2.0 * std::f64::consts::PI;
    }
    let resolution = ((sweep.abs() / (std::f64::consts::PI / 24.0)).ceil() as usize).max(8);

    let mut points = vec![from];
    points.extend(arc_between(center, a, b, resolution));
    points.push(to);
    points
}

#[cfg(test)]
mod tests {
    use super::*;

    fn style(corner: CornerStyle) -> LeadStyle {
        LeadStyle {
            line_width: 3.0,
            corner,
            chamfer_size: 10.0,
        }
    }

    #[test]
    fn test_right_angle_bend_point() {
        // |dx| = 50 > |dy| = 30: bend at (to.x, from.y).
        let route = lead_route(
            Point::new(0.0, 0.0),
            Point::new(50.0, -30.0),
            &style(CornerStyle::RightAngle),
        )
        .unwrap();
        assert_eq!(route.centerline.len(), 3);
        assert_eq!(route.centerline.points()[1], Point::new(50.0, 0.0));
        assert!(route.polygon.area() > 0.0);
    }

    #[test]
    fn test_bend_on_smaller_axis() {
        // |dx| = 20 < |dy| = 60: bend at (from.x, to.y).
        let route = lead_route(
            Point::new(0.0, 0.0),
            Point::new(20.0, 60.0),
            &style(CornerStyle::RightAngle),
        )
        .unwrap();
        assert_eq!(route.centerline.points()[1], Point::new(0.0, 60.0));
    }

    #[test]
    fn test_straight_chamfer_retreats_from_bend() {
        let route = lead_route(
            Point::new(0.0, 0.0),
            Point::new(50.0, -30.0),
            &style(CornerStyle::StraightChamfer),
        )
        .unwrap();
        let pts = route.centerline.points();
        assert_eq!(pts.len(), 4);
        assert_eq!(pts[1], Point::new(40.0, 0.0));
        assert_eq!(pts[2], Point::new(50.0, -10.0));
    }

    #[test]
    fn test_chamfer_capped_at_half_segment() {
        // Short first segment: 8 long, retreat capped at 4.
        let route = lead_route(
            Point::new(0.0, 0.0),
            Point::new(8.0, -60.0),
            &style(CornerStyle::StraightChamfer),
        )
        .unwrap();
        let pts = route.centerline.points();
        // Bend at (0, -60)? No: |dx| = 8 < |dy| = 60, bend at (0, -60).
        assert_eq!(pts[1], Point::new(0.0, -50.0));
        assert_eq!(pts[2], Point::new(4.0, -60.0));
    }

    #[test]
    fn test_round_chamfer_arc_is_tangent_radius() {
        let route = lead_route(
            Point::new(0.0, 0.0),
            Point::new(50.0, -30.0),
            &style(CornerStyle::RoundChamfer),
        )
        .unwrap();
        let pts = route.centerline.points();
        // Arc points stay within the corner square cut by the retreats.
        assert!(pts.len() > 4);
        for p in &pts[1..pts.len() - 1] {
            assert!(p.x >= 40.0 - 1e-9 && p.x <= 50.0 + 1e-9);
            assert!(p.y <= 1e-9 && p.y >= -10.0 - 1e-9);
        }
        // First and last arc points are the retreat points.
        assert!(pts[1].distance_to(&Point::new(40.0, 0.0)) < 1e-9);
        assert!(pts[pts.len() - 2].distance_to(&Point::new(50.0, -10.0)) < 1e-9);
        assert!(route.polygon.area() > 0.0);
    }

    #[test]
    fn test_axis_aligned_lead_is_straight() {
        let route = lead_route(
            Point::new(0.0, 0.0),
            Point::new(30.0, 0.0),
            &style(CornerStyle::RightAngle),
        )
        .unwrap();
        // Bend coincides with an endpoint and is deduplicated away.
        assert_eq!(route.centerline.len(), 2);
        assert!((route.polygon.area() - 90.0).abs() < 1e-9);
    }

    #[test]
    fn test_coincident_centers_rejected() {
        let err = lead_route(
            Point::new(5.0, 5.0),
            Point::new(5.0, 5.0),
            &style(CornerStyle::RightAngle),
        )
        .unwrap_err();
        assert!(matches!(err, LayoutError::Geometry(_)));
    }

    #[test]
    fn test_non_positive_width_rejected() {
        let mut s = style(CornerStyle::RightAngle);
        s.line_width = 0.0;
        let err = lead_route(Point::new(0.0, 0.0), Point::new(10.0, 5.0), &s).unwrap_err();
        assert!(matches!(err, LayoutError::Configuration { .. }));
    }

    #[test]
    fn test_chamfer_styles_need_positive_size() {
        let mut s = style(CornerStyle::RoundChamfer);
        s.chamfer_size = 0.0;
        let err = lead_route(Point::new(0.0, 0.0), Point::new(10.0, 5.0), &s).unwrap_err();
        assert!(matches!(err, LayoutError::Configuration { .. }));
    }
}
