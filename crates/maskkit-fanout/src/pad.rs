//! Electrode pad geometry.
//!
//! A pad is an axis-aligned rectangle centered on a point, optionally with
//! its four corners cut straight or rounded. The chamfer precondition
//! `2 * size <= min(length, width)` is enforced at construction so the
//! outline builders below are infallible.

use serde::{Deserialize, Serialize};
use tracing::debug;

use maskkit_core::{LayoutError, Point, Polygon, Result};

/// Corner treatment of a pad.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChamferKind {
    /// Plain rectangle.
    None,
    /// Right-triangular cut of leg `size` at each corner.
    Straight,
    /// Circular arc of radius `size` at each corner.
    Round,
}

/// Chamfer configuration of a pad.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Chamfer {
    pub kind: ChamferKind,
    pub size: f64,
    /// Points per corner arc for [`ChamferKind::Round`].
    pub resolution: usize,
}

impl Chamfer {
    pub fn none() -> Self {
        Self {
            kind: ChamferKind::None,
            size: 0.0,
            resolution: 4,
        }
    }

    pub fn straight(size: f64) -> Self {
        Self {
            kind: ChamferKind::Straight,
            size,
            resolution: 4,
        }
    }

    pub fn round(size: f64, resolution: usize) -> Self {
        Self {
            kind: ChamferKind::Round,
            size,
            resolution,
        }
    }
}

/// An axis-aligned electrode pad.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pad {
    pub center: Point,
    /// Extent along x.
    pub length: f64,
    /// Extent along y.
    pub width: f64,
    pub chamfer: Chamfer,
}

impl Pad {
    /// Validate and construct a pad.
    ///
    /// # Errors
    ///
    /// `InvalidParameter` for non-positive extents, a negative chamfer
    /// size, or a round-chamfer resolution below 2; `Configuration`
    /// (carrying the requested chamfer span and the limiting side) when
    /// `2 * size` exceeds the smaller pad side.
    pub fn new(center: Point, length: f64, width: f64, chamfer: Chamfer) -> Result<Self> {
        if !length.is_finite() || length <= 0.0 {
            return Err(LayoutError::InvalidParameter {
                name: "length",
                value: length,
                expected: "> 0",
            });
        }
        if !width.is_finite() || width <= 0.0 {
            return Err(LayoutError::InvalidParameter {
                name: "width",
                value: width,
                expected: "> 0",
            });
        }
        if chamfer.size < 0.0 {
            return Err(LayoutError::InvalidParameter {
                name: "chamfer size",
                value: chamfer.size,
                expected: ">= 0",
            });
        }
        if chamfer.kind != ChamferKind::None {
            let min_side = length.min(width);
            if 2.0 * chamfer.size > min_side {
                return Err(LayoutError::Configuration {
                    what: "pad chamfer span (2 x size)",
                    requested: 2.0 * chamfer.size,
                    limit: min_side,
                });
            }
            if chamfer.kind == ChamferKind::Round && chamfer.resolution < 2 {
                return Err(LayoutError::InvalidParameter {
                    name: "chamfer resolution",
                    value: chamfer.resolution as f64,
                    expected: ">= 2",
                });
            }
        }
        Ok(Self {
            center,
            length,
            width,
            chamfer,
        })
    }

    /// Effective chamfer cut, zero unless a chamfer is configured.
    pub(crate) fn chamfer_cut(&self) -> f64 {
        if self.chamfer.kind == ChamferKind::None || self.chamfer.size <= 0.0 {
            0.0
        } else {
            self.chamfer.size
        }
    }

    /// The pad outline polygon (counter-clockwise).
    pub fn outline(&self) -> Polygon {
        let (x, y) = (self.center.x, self.center.y);
        let hl = self.length / 2.0;
        let hw = self.width / 2.0;
        let c = self.chamfer_cut();

        let polygon = if c == 0.0 {
            Polygon::new(vec![
                Point::new(x - hl, y - hw),
                Point::new(x + hl, y - hw),
                Point::new(x + hl, y + hw),
                Point::new(x - hl, y + hw),
            ])
        } else if self.chamfer.kind == ChamferKind::Straight {
            Polygon::new(vec![
                Point::new(x - hl + c, y - hw),
                Point::new(x + hl - c, y - hw),
                Point::new(x + hl, y - hw + c),
                Point::new(x + hl, y + hw - c),
                Point::new(x + hl - c, y + hw),
                Point::new(x - hl + c, y + hw),
                Point::new(x - hl, y + hw - c),
                Point::new(x - hl, y - hw + c),
            ])
        } else {
            // Round: quarter arcs about the four inset corner centers,
            // walked counter-clockwise starting at the top-right corner.
            let r = c;
            let corners = [
                (x + hl - r, y + hw - r, 0.0, 90.0),
                (x - hl + r, y + hw - r, 90.0, 180.0),
                (x - hl + r, y - hw + r, 180.0, 270.0),
                (x + hl - r, y - hw + r, 270.0, 360.0),
            ];
            let n = self.chamfer.resolution;
            let mut points = Vec::with_capacity(4 * n);
            for (cx, cy, a0, a1) in corners {
                for i in 0..n {
                    let a = (a0 + (a1 - a0) * i as f64 / (n - 1) as f64).to_radians();
                    points.push(Point::new(cx + r * a.cos(), cy + r * a.sin()));
                }
            }
            Polygon::new(points)
        };

        debug!(
            vertices = polygon.len(),
            kind = ?self.chamfer.kind,
            "built pad outline"
        );
        polygon
    }
}
