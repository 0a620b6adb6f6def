//! Boustrophedon (serpentine) meander centerlines.
//!
//! The non-fractal workhorse fill: back-and-forth lanes across a
//! rectangular region, centered on the origin, ready for [`crate::widen`].

use serde::{Deserialize, Serialize};
use tracing::debug;

use maskkit_core::{LayoutError, Point, Result};

use crate::centerline::Centerline;

/// Direction of the meander lanes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MeanderDirection {
    /// Lanes run left-right, stepping upward.
    Horizontal,
    /// Lanes run bottom-top, stepping rightward.
    Vertical,
}

/// Parameters of a serpentine meander fill.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MeanderSpec {
    pub region_width: f64,
    pub region_height: f64,
    pub line_width: f64,
    pub line_spacing: f64,
    pub direction: MeanderDirection,
    /// Clearance kept to the region boundary on all sides.
    pub margin: f64,
}

/// Build the meander centerline for `spec`, centered at the origin.
///
/// The lane count is the number of whole pitches (`line_width +
/// line_spacing`) that fit in the region across the lane direction.
///
/// # Errors
///
/// `InvalidParameter` if the line width is not positive, the spacing or
/// margin is negative, or fewer than 2 lanes fit the region.
pub fn serpentine_centerline(spec: &MeanderSpec) -> Result<Centerline> {
    if !spec.line_width.is_finite() || spec.line_width <= 0.0 {
        return Err(LayoutError::InvalidParameter {
            name: "line_width",
            value: spec.line_width,
            expected: "> 0",
        });
    }
    if spec.line_spacing < 0.0 {
        return Err(LayoutError::InvalidParameter {
            name: "line_spacing",
            value: spec.line_spacing,
            expected: ">= 0",
        });
    }
    if spec.margin < 0.0 {
        return Err(LayoutError::InvalidParameter {
            name: "margin",
            value: spec.margin,
            expected: ">= 0",
        });
    }

    let pitch = spec.line_width + spec.line_spacing;
    let across = match spec.direction {
        MeanderDirection::Horizontal => spec.region_height,
        MeanderDirection::Vertical => spec.region_width,
    };
    let along = match spec.direction {
        MeanderDirection::Horizontal => spec.region_width,
        MeanderDirection::Vertical => spec.region_height,
    };
    let lanes = ((across - 2.0 * spec.margin) / pitch).floor() as i64;
    if lanes < 2 {
        return Err(LayoutError::InvalidParameter {
            name: "region",
            value: across,
            expected: "room for at least 2 lanes at the given pitch",
        });
    }

    let lane_extent = lanes as f64 * pitch;
    let first_lane = -lane_extent / 2.0 + spec.line_width / 2.0;
    let near_bound = -along / 2.0 + spec.margin + spec.line_width / 2.0;
    let far_bound = along / 2.0 - spec.margin - spec.line_width / 2.0;

    let mut points = Vec::with_capacity(2 * lanes as usize);
    for lane in 0..lanes {
        let across_pos = first_lane + lane as f64 * pitch;
        let (from, to) = if lane % 2 == 0 {
            (near_bound, far_bound)
        } else {
            (far_bound, near_bound)
        };
        match spec.direction {
            MeanderDirection::Horizontal => {
                points.push(Point::new(from, across_pos));
                points.push(Point::new(to, across_pos));
            }
            MeanderDirection::Vertical => {
                points.push(Point::new(across_pos, from));
                points.push(Point::new(across_pos, to));
            }
        }
    }

    debug!(lanes, pitch, "built serpentine centerline");
    Ok(Centerline::new(points))
}
