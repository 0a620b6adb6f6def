//! Turtle interpretation of curve symbol sequences.
//!
//! The turtle starts at the origin heading along +x. Move symbols advance
//! by the step length along the current heading and record a vertex; turn
//! symbols rotate the heading by the family's angular unit. Coordinates
//! are snapped to a fixed decimal precision so lattice points that should
//! coincide actually compare equal.

use tracing::debug;

use maskkit_core::{LayoutError, Point, Result};

use crate::centerline::Centerline;
use crate::lsystem::{CurveFamily, Symbol};

/// Snap to 9 decimal places to remove floating-point drift.
fn snap(v: f64) -> f64 {
    (v * 1e9).round() / 1e9
}

/// Walk a symbol sequence and produce the curve centerline.
///
/// # Errors
///
/// `InvalidParameter` if `step` is not strictly positive.
///
/// # Panics
///
/// If the recorded segment count disagrees with the move-symbol count.
/// That is an internal-consistency failure of the generator, not a
/// recoverable condition.
pub fn interpret(symbols: &[Symbol], family: CurveFamily, step: f64) -> Result<Centerline> {
    if !step.is_finite() || step <= 0.0 {
        return Err(LayoutError::InvalidParameter {
            name: "step",
            value: step,
            expected: "> 0",
        });
    }

    let headings = family.heading_count() as i64;
    let unit = family.angular_unit_degrees();
    // One unit vector per lattice heading.
    let directions: Vec<(f64, f64)> = (0..headings)
        .map(|i| {
            let angle = (i as f64 * unit).to_radians();
            (angle.cos(), angle.sin())
        })
        .collect();

    let move_count = symbols.iter().filter(|s| s.is_move()).count();
    let mut points = Vec::with_capacity(move_count + 1);
    let mut x = 0.0;
    let mut y = 0.0;
    let mut heading: i64 = 0;
    points.push(Point::new(x, y));

    for symbol in symbols {
        match symbol {
            Symbol::MoveA | Symbol::MoveB => {
                let (dx, dy) = directions[heading.rem_euclid(headings) as usize];
                x = snap(x + dx * step);
                y = snap(y + dy * step);
                points.push(Point::new(x, y));
            }
            Symbol::TurnLeft => heading += 1,
            Symbol::TurnRight => heading -= 1,
        }
    }

    assert_eq!(
        points.len() - 1,
        move_count,
        "segment count diverged from move-symbol count"
    );
    debug!(
        family = family.name(),
        segments = move_count,
        "interpreted curve centerline"
    );
    Ok(Centerline::new(points))
}
