//! The full generate-interpret-widen pipeline behind one parameter record.

use serde::{Deserialize, Serialize};
use tracing::debug;

use maskkit_core::{LayoutError, Polygon, Result};

use crate::lsystem::{generate, CurveFamily};
use crate::turtle::interpret;
use crate::widen::{widen, JoinStyle};

/// Complete description of a fill-curve trace.
///
/// This record is the memoization key the calling assembly layer should
/// use when many identical fills are placed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurveSpec {
    pub family: CurveFamily,
    pub order: u32,
    /// Centerline step length.
    pub step: f64,
    /// Final trace width.
    pub trace_width: f64,
}

/// Generate a filled fractal trace polygon from `spec`.
///
/// Hex-family corners are rounded (the 120° Gosper turns would otherwise
/// leave spikes at high widths); grid-family corners stay mitered square.
///
/// # Errors
///
/// `InvalidParameter` for a bad order or step, `Geometry` for a
/// non-positive trace width.
pub fn fill_curve(spec: &CurveSpec) -> Result<Polygon> {
    if !spec.trace_width.is_finite() || spec.trace_width <= 0.0 {
        return Err(LayoutError::geometry(format!(
            "trace width must be positive, got {}",
            spec.trace_width
        )));
    }
    let symbols = generate(spec.family, spec.order)?;
    let centerline = interpret(&symbols, spec.family, spec.step)?;
    let join = match spec.family {
        CurveFamily::Grid => JoinStyle::Miter { limit: None },
        CurveFamily::Hex => JoinStyle::Round { resolution: 6 },
    };
    let polygon = widen(&centerline, spec.trace_width, join)?;
    debug!(
        family = spec.family.name(),
        order = spec.order,
        vertices = polygon.len(),
        "generated fill curve"
    );
    Ok(polygon)
}
