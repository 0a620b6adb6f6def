//! Length-unit to integer-grid conversion.
//!
//! The consuming design database addresses shapes on an integer coordinate
//! grid. A single process-wide scale factor converts the engine's
//! floating-point length units to that grid (default: 1000, i.e. µm
//! lengths on a nm grid). The factor must be configured before any
//! conversion and is read-only afterwards.

use std::sync::OnceLock;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{LayoutError, Result};
use crate::geometry::{Point, Polygon};

/// Default length-to-grid scale: 1 length unit = 1000 grid units.
pub const DEFAULT_UNIT_SCALE: f64 = 1000.0;

static UNIT_SCALE: OnceLock<f64> = OnceLock::new();

/// Fix the process-wide unit scale.
///
/// Must be called at most once, before any conversion; the first call to
/// [`unit_scale`] otherwise fixes the default.
///
/// # Errors
///
/// `Configuration` if `scale` is not strictly positive or the scale has
/// already been fixed.
pub fn set_unit_scale(scale: f64) -> Result<()> {
    if !scale.is_finite() || scale <= 0.0 {
        return Err(LayoutError::Configuration {
            what: "unit scale",
            requested: scale,
            limit: 0.0,
        });
    }
    UNIT_SCALE
        .set(scale)
        .map(|()| debug!(scale, "unit scale fixed"))
        .map_err(|_| LayoutError::Configuration {
            what: "unit scale already fixed",
            requested: scale,
            limit: unit_scale(),
        })
}

/// The current unit scale, fixing the default on first use.
pub fn unit_scale() -> f64 {
    *UNIT_SCALE.get_or_init(|| DEFAULT_UNIT_SCALE)
}

/// A vertex on the integer coordinate grid of the design database.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridPoint {
    pub x: i64,
    pub y: i64,
}

impl Point {
    /// Scale this point by the process-wide unit scale and round to the
    /// integer grid.
    pub fn to_grid(&self) -> GridPoint {
        let s = unit_scale();
        GridPoint {
            x: (self.x * s).round() as i64,
            y: (self.y * s).round() as i64,
        }
    }
}

impl Polygon {
    /// The polygon's vertices on the integer grid, in order.
    pub fn to_grid(&self) -> Vec<GridPoint> {
        self.vertices().iter().map(Point::to_grid).collect()
    }
}
