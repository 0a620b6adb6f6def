//! Centerline widening: offset an open polyline by half the trace width on
//! each side and close the two offset rails into one filled polygon.
//!
//! At every interior vertex the inner side of the turn always receives the
//! offset-line intersection (miter) point; the join style only governs the
//! outer side, where the offsets diverge. Endpoints receive flat caps.

use serde::{Deserialize, Serialize};
use tracing::debug;

use maskkit_core::{LayoutError, Point, Polygon, Result};

use crate::centerline::Centerline;

/// Default miter limit as a multiple of the half-width (SVG convention:
/// clips at turn angles sharper than ~30°).
pub const DEFAULT_MITER_LIMIT: f64 = 4.0;

/// Directions closer to parallel than this cross-product magnitude are
/// treated as collinear.
const COLLINEAR_TOL: f64 = 1e-9;

/// How two successive offset segments connect at an outer corner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JoinStyle {
    /// Sharp corner, clipped to a bevel when the miter length exceeds
    /// `limit` times the half-width (`DEFAULT_MITER_LIMIT` when `None`).
    Miter { limit: Option<f64> },
    /// Straight cut between the two offset points.
    Bevel,
    /// Circular arc swept through the turn angle, subdivided into
    /// `resolution` points.
    Round { resolution: usize },
}

/// Points of the circular arc centered at `center` from `from` to `to`,
/// swept the short way around, subdivided into `resolution` points
/// (inclusive of both endpoints).
///
/// The radius is taken from `from`; `to` is assumed to lie on the same
/// circle. Isolated so corner-arc synthesis is testable independent of
/// whole-polygon assembly.
pub fn arc_between(center: Point, from: Point, to: Point, resolution: usize) -> Vec<Point> {
    let radius = center.distance_to(&from);
    let a0 = (from.y - center.y).atan2(from.x - center.x);
    let a1 = (to.y - center.y).atan2(to.x - center.x);
    let mut sweep = a1 - a0;
    while sweep <= -std::f64::consts::PI {
        sweep += 2.0 * std::f64::consts::PI;
    }
    while sweep > std::f64::consts::PI {
        sweep -= 2.0 * std::f64::consts::PI;
    }
    let n = resolution.max(2);
    (0..n)
        .map(|i| {
            let a = a0 + sweep * i as f64 / (n - 1) as f64;
            Point::new(center.x + radius * a.cos(), center.y + radius * a.sin())
        })
        .collect()
}

/// Left unit normal of a unit direction.
fn left_normal(d: (f64, f64)) -> (f64, f64) {
    (-d.1, d.0)
}

/// Widen a centerline into a closed trace polygon.
///
/// # Errors
///
/// `Geometry` if `width` is not strictly positive, fewer than 2 distinct
/// points remain after deduplication, or the path reverses onto itself.
pub fn widen(centerline: &Centerline, width: f64, join: JoinStyle) -> Result<Polygon> {
    if !width.is_finite() || width <= 0.0 {
        return Err(LayoutError::geometry(format!(
            "trace width must be positive, got {width}"
        )));
    }
    if let JoinStyle::Round { resolution } = join {
        if resolution < 2 {
            return Err(LayoutError::InvalidParameter {
                name: "resolution",
                value: resolution as f64,
                expected: ">= 2",
            });
        }
    }

    let points = centerline.points();
    if points.len() < 2 {
        return Err(LayoutError::geometry(format!(
            "need at least 2 distinct centerline points, got {}",
            points.len()
        )));
    }

    let h = width / 2.0;
    let dirs: Vec<(f64, f64)> = points
        .windows(2)
        .map(|w| {
            let dx = w[1].x - w[0].x;
            let dy = w[1].y - w[0].y;
            let len = (dx * dx + dy * dy).sqrt();
            (dx / len, dy / len)
        })
        .collect();

    let mut left: Vec<Point> = Vec::with_capacity(points.len() + 2);
    let mut right: Vec<Point> = Vec::with_capacity(points.len() + 2);

    let offset = |p: &Point, n: (f64, f64), d: f64| Point::new(p.x + n.0 * d, p.y + n.1 * d);

    // Flat start cap.
    let n0 = left_normal(dirs[0]);
    left.push(offset(&points[0], n0, h));
    right.push(offset(&points[0], n0, -h));

    for i in 1..points.len() - 1 {
        let u = dirs[i - 1];
        let v = dirs[i];
        let p = &points[i];
        let cross = u.0 * v.1 - u.1 * v.0;
        let dot = u.0 * v.0 + u.1 * v.1;
        let n1 = left_normal(u);
        let n2 = left_normal(v);

        if cross.abs() < COLLINEAR_TOL {
            if dot < 0.0 {
                return Err(LayoutError::geometry(format!(
                    "centerline reverses direction at vertex {i}"
                )));
            }
            // Straight-through vertex.
            left.push(offset(p, n1, h));
            right.push(offset(p, n1, -h));
            continue;
        }

        // Offset-line intersection at signed distance d from the vertex:
        // p + (n1 + n2) * d / (1 + u.v).
        let miter_at = |d: f64| {
            Point::new(
                p.x + (n1.0 + n2.0) * d / (1.0 + dot),
                p.y + (n1.1 + n2.1) * d / (1.0 + dot),
            )
        };
        let miter_len = h * (2.0 / (1.0 + dot)).sqrt();

        if cross > 0.0 {
            // Left turn: left side is inner, right side is outer.
            left.push(miter_at(h));
            push_outer_join(&mut right, p, n1, n2, -h, miter_at, miter_len, h, join);
        } else {
            right.push(miter_at(-h));
            push_outer_join(&mut left, p, n1, n2, h, miter_at, miter_len, h, join);
        }
    }

    // Flat end cap.
    let nl = left_normal(dirs[dirs.len() - 1]);
    let last = &points[points.len() - 1];
    left.push(offset(last, nl, h));
    right.push(offset(last, nl, -h));

    right.reverse();
    left.extend(right);
    let polygon = Polygon::new(left);
    debug!(
        vertices = polygon.len(),
        width, "widened centerline into trace polygon"
    );
    Ok(polygon)
}

/// Emit the outer-side join points in walking order.
#[allow(clippy::too_many_arguments)]
fn push_outer_join(
    rail: &mut Vec<Point>,
    p: &Point,
    n1: (f64, f64),
    n2: (f64, f64),
    side: f64,
    miter_at: impl Fn(f64) -> Point,
    miter_len: f64,
    h: f64,
    join: JoinStyle,
) {
    let a = Point::new(p.x + n1.0 * side, p.y + n1.1 * side);
    let b = Point::new(p.x + n2.0 * side, p.y + n2.1 * side);
    match join {
        JoinStyle::Miter { limit } => {
            let limit = limit.unwrap_or(DEFAULT_MITER_LIMIT);
            if miter_len <= limit * h {
                rail.push(miter_at(side));
            } else {
                rail.push(a);
                rail.push(b);
            }
        }
        JoinStyle::Bevel => {
            rail.push(a);
            rail.push(b);
        }
        JoinStyle::Round { resolution } => {
            rail.extend(arc_between(*p, a, b, resolution));
        }
    }
}
