//! Alignment-mark primitives.
//!
//! Simple mark shapes returned as plain polygon lists; compositing
//! (unions, subtractions, frames with slots) belongs to the external
//! layout database and is not done here.

use serde::{Deserialize, Serialize};

use maskkit_core::{LayoutError, Point, Polygon, Result};

/// Pointing direction of a triangle mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkDirection {
    Up,
    Down,
    Left,
    Right,
}

fn require_positive(name: &'static str, value: f64) -> Result<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(LayoutError::InvalidParameter {
            name,
            value,
            expected: "> 0",
        });
    }
    Ok(())
}

/// Axis-aligned rectangle from opposite corners.
fn rect(x1: f64, y1: f64, x2: f64, y2: f64) -> Polygon {
    Polygon::new(vec![
        Point::new(x1, y1),
        Point::new(x2, y1),
        Point::new(x2, y2),
        Point::new(x1, y2),
    ])
}

/// Cross mark: two center-aligned rectangles of full length `size` and
/// line width `width`.
pub fn cross_mark(center: Point, size: f64, width: f64) -> Result<Vec<Polygon>> {
    require_positive("size", size)?;
    require_positive("width", width)?;
    let half = size / 2.0;
    let half_w = width / 2.0;
    Ok(vec![
        rect(center.x - half, center.y - half_w, center.x + half, center.y + half_w),
        rect(center.x - half_w, center.y - half, center.x + half_w, center.y + half),
    ])
}

/// L mark with its corner at `corner`, arms extending left and down.
///
/// `ratio` is line width over size, `arm_ratio` arm length over size.
pub fn l_mark(corner: Point, size: f64, ratio: f64, arm_ratio: f64) -> Result<Vec<Polygon>> {
    require_positive("size", size)?;
    require_positive("ratio", ratio)?;
    require_positive("arm_ratio", arm_ratio)?;
    let width = size * ratio;
    let arm = size * arm_ratio;
    Ok(vec![
        rect(corner.x - arm, corner.y - width, corner.x, corner.y),
        rect(corner.x - width, corner.y - arm, corner.x, corner.y),
    ])
}

/// T mark centered on the horizontal arm, vertical arm hanging down.
pub fn t_mark(center: Point, size: f64, ratio: f64, arm_ratio: f64) -> Result<Vec<Polygon>> {
    require_positive("size", size)?;
    require_positive("ratio", ratio)?;
    require_positive("arm_ratio", arm_ratio)?;
    let width = size * ratio;
    let v_len = size * arm_ratio;
    let h_arm = rect(
        center.x - size / 2.0,
        center.y - width,
        center.x + size / 2.0,
        center.y,
    );
    let v_arm = rect(
        center.x - width / 2.0,
        center.y - v_len,
        center.x + width / 2.0,
        center.y,
    );
    Ok(vec![v_arm, h_arm])
}

/// Solid square mark of edge length `size`.
pub fn square_mark(center: Point, size: f64) -> Result<Polygon> {
    require_positive("size", size)?;
    let half = size / 2.0;
    Ok(rect(center.x - half, center.y - half, center.x + half, center.y + half))
}

/// Diamond mark with diagonal length `size`.
pub fn diamond_mark(center: Point, size: f64) -> Result<Polygon> {
    require_positive("size", size)?;
    let half = size / 2.0;
    Ok(Polygon::new(vec![
        Point::new(center.x, center.y - half),
        Point::new(center.x + half, center.y),
        Point::new(center.x, center.y + half),
        Point::new(center.x - half, center.y),
    ]))
}

/// Triangle mark within a `size` bounding box, pointing in `direction`.
pub fn triangle_mark(center: Point, size: f64, direction: MarkDirection) -> Result<Polygon> {
    require_positive("size", size)?;
    let half = size / 2.0;
    let (x, y) = (center.x, center.y);
    let points = match direction {
        MarkDirection::Up => vec![
            Point::new(x, y + half),
            Point::new(x - half, y - half),
            Point::new(x + half, y - half),
        ],
        MarkDirection::Down => vec![
            Point::new(x, y - half),
            Point::new(x - half, y + half),
            Point::new(x + half, y + half),
        ],
        MarkDirection::Left => vec![
            Point::new(x - half, y),
            Point::new(x + half, y - half),
            Point::new(x + half, y + half),
        ],
        MarkDirection::Right => vec![
            Point::new(x + half, y),
            Point::new(x - half, y - half),
            Point::new(x - half, y + half),
        ],
    };
    Ok(Polygon::new(points))
}

/// Regular-looking octagon made by chamfering a square's corners.
///
/// `chamfer_ratio` is the fraction of the half-side cut at each corner
/// (0 < ratio <= 1).
pub fn chamfered_octagon(center: Point, size: f64, chamfer_ratio: f64) -> Result<Polygon> {
    require_positive("size", size)?;
    if !(0.0..=1.0).contains(&chamfer_ratio) || chamfer_ratio == 0.0 {
        return Err(LayoutError::InvalidParameter {
            name: "chamfer_ratio",
            value: chamfer_ratio,
            expected: "in (0, 1]",
        });
    }
    let half = size / 2.0;
    let c = half * chamfer_ratio;
    let (x, y) = (center.x, center.y);
    Ok(Polygon::new(vec![
        Point::new(x - half + c, y + half),
        Point::new(x + half - c, y + half),
        Point::new(x + half, y + half - c),
        Point::new(x + half, y - half + c),
        Point::new(x + half - c, y - half),
        Point::new(x - half + c, y - half),
        Point::new(x - half, y - half + c),
        Point::new(x - half, y + half - c),
    ]))
}
