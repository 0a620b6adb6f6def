//! Electrode spacing planning for multi-electrode test structures.
//!
//! Produces the N-1 gaps between N collinear electrodes under a chosen
//! distribution law, arranges them, and prefix-sums the result into
//! electrode positions centered on the origin.

use serde::{Deserialize, Serialize};
use tracing::debug;

use maskkit_core::{LayoutError, Result};

/// How spacing values are interpolated between the minimum and maximum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DistributionLaw {
    /// Equal increments.
    Linear,
    /// Geometric progression (equal ratios).
    Logarithmic,
    /// Interpolation in the exponential domain.
    Exponential,
    /// Harmonic progression (equal reciprocal increments).
    Reciprocal,
}

/// How the interpolated spacings are ordered along the electrode row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArrangementMode {
    /// Smallest gap in the middle, growing toward both ends.
    Centered,
    /// Monotonically increasing left to right.
    LeftToRight,
}

/// The planned gaps and the resulting electrode positions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpacingPlan {
    /// N-1 gaps in row order.
    pub spacings: Vec<f64>,
    /// N positions, re-centered so the row midpoint sits at 0.
    pub positions: Vec<f64>,
}

/// Plan the spacing of `electrode_count` collinear electrodes.
///
/// # Errors
///
/// `InvalidParameter` if `electrode_count < 3` or either spacing bound is
/// not strictly positive.
pub fn plan_spacing(
    electrode_count: usize,
    min_spacing: f64,
    max_spacing: f64,
    law: DistributionLaw,
    mode: ArrangementMode,
) -> Result<SpacingPlan> {
    if electrode_count < 3 {
        return Err(LayoutError::InvalidParameter {
            name: "electrode_count",
            value: electrode_count as f64,
            expected: ">= 3",
        });
    }
    if !min_spacing.is_finite() || min_spacing <= 0.0 {
        return Err(LayoutError::InvalidParameter {
            name: "min_spacing",
            value: min_spacing,
            expected: "> 0",
        });
    }
    if !max_spacing.is_finite() || max_spacing <= 0.0 {
        return Err(LayoutError::InvalidParameter {
            name: "max_spacing",
            value: max_spacing,
            expected: "> 0",
        });
    }

    let n = electrode_count;
    let denom = (n - 2) as f64;
    let interpolate = |t: f64| -> f64 {
        match law {
            DistributionLaw::Linear => min_spacing + (max_spacing - min_spacing) * t,
            DistributionLaw::Logarithmic => {
                min_spacing * (max_spacing / min_spacing).powf(t)
            }
            DistributionLaw::Exponential => {
                let lo = min_spacing.exp();
                let hi = max_spacing.exp();
                (lo + (hi - lo) * t).ln()
            }
            DistributionLaw::Reciprocal => {
                1.0 / (1.0 / min_spacing + (1.0 / max_spacing - 1.0 / min_spacing) * t)
            }
        }
    };
    let mut spacings: Vec<f64> = (0..n - 1).map(|i| interpolate(i as f64 / denom)).collect();

    if mode == ArrangementMode::Centered {
        let mut sorted = spacings.clone();
        sorted.sort_by(f64::total_cmp);
        let mut arranged = vec![0.0; n - 1];
        let center = (n - 2) / 2;
        let mut left = center;
        let mut right = center + 1;
        for (idx, &value) in sorted.iter().enumerate() {
            if idx == 0 {
                arranged[center] = value;
            } else if idx % 2 == 1 {
                arranged[right] = value;
                right += 1;
            } else {
                arranged[left - 1] = value;
                left -= 1;
            }
        }
        spacings = arranged;
    }

    let mut positions = Vec::with_capacity(n);
    let mut cursor = 0.0;
    positions.push(cursor);
    for &s in &spacings {
        cursor += s;
        positions.push(cursor);
    }
    let shift = (positions[0] + positions[n - 1]) / 2.0;
    for p in &mut positions {
        *p -= shift;
    }

    debug!(
        electrodes = n,
        ?law,
        ?mode,
        span = positions[n - 1] - positions[0],
        "planned electrode spacing"
    );
    Ok(SpacingPlan {
        spacings,
        positions,
    })
}
