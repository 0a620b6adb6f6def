//! Centerline validation.
//!
//! Test-support checks for generated curves: turn-angle legality and
//! absence of self-intersection. Production builders never call these;
//! they assume already-validated parameter ranges.

use maskkit_core::{LayoutError, Result};

use crate::centerline::Centerline;
use crate::lsystem::CurveFamily;

/// Tolerance in degrees for the turn-angle check.
const ANGLE_TOL_DEG: f64 = 1e-3;

/// Check that every interior turn is an integer multiple of the angular
/// unit, within floating tolerance.
///
/// # Errors
///
/// `Geometry` naming the first offending vertex and its angle.
pub fn check_turn_angles(centerline: &Centerline, unit_degrees: f64) -> Result<()> {
    let points = centerline.points();
    for i in 1..points.len().saturating_sub(1) {
        let v1 = (points[i].x - points[i - 1].x, points[i].y - points[i - 1].y);
        let v2 = (points[i + 1].x - points[i].x, points[i + 1].y - points[i].y);
        let mag1 = (v1.0 * v1.0 + v1.1 * v1.1).sqrt();
        let mag2 = (v2.0 * v2.0 + v2.1 * v2.1).sqrt();
        if mag1 == 0.0 || mag2 == 0.0 {
            continue;
        }
        let cos = ((v1.0 * v2.0 + v1.1 * v2.1) / (mag1 * mag2)).clamp(-1.0, 1.0);
        let angle = cos.acos().to_degrees();
        let remainder = angle % unit_degrees;
        if remainder > ANGLE_TOL_DEG && remainder < unit_degrees - ANGLE_TOL_DEG {
            return Err(LayoutError::geometry(format!(
                "turn of {angle:.4} degrees at vertex {i} is not a multiple of {unit_degrees}"
            )));
        }
    }
    Ok(())
}

/// Check that no two non-adjacent segments strictly cross.
///
/// O(n²) pairwise test; crossings at shared endpoints are not reported and
/// parallel segments are skipped. Intended for the small orders used in
/// tests.
///
/// # Errors
///
/// `SelfIntersection` with the indices of the first crossing pair.
pub fn check_self_intersection(centerline: &Centerline) -> Result<()> {
    let points = centerline.points();
    if points.len() < 4 {
        return Ok(());
    }
    for i in 0..points.len() - 1 {
        for j in (i + 2)..points.len() - 1 {
            let (p1, p2) = (points[i], points[i + 1]);
            let (p3, p4) = (points[j], points[j + 1]);
            let denom = (p1.x - p2.x) * (p3.y - p4.y) - (p1.y - p2.y) * (p3.x - p4.x);
            if denom.abs() < 1e-10 {
                continue;
            }
            let t =
                ((p1.x - p3.x) * (p3.y - p4.y) - (p1.y - p3.y) * (p3.x - p4.x)) / denom;
            let u =
                -((p1.x - p2.x) * (p1.y - p3.y) - (p1.y - p2.y) * (p1.x - p3.x)) / denom;
            if t > 1e-9 && t < 1.0 - 1e-9 && u > 1e-9 && u < 1.0 - 1e-9 {
                return Err(LayoutError::SelfIntersection { first: i, second: j });
            }
        }
    }
    Ok(())
}

/// Run both checks for a family-generated centerline.
pub fn validate(centerline: &Centerline, family: CurveFamily) -> Result<()> {
    check_turn_angles(centerline, family.angular_unit_degrees())?;
    check_self_intersection(centerline)
}

#[cfg(test)]
mod tests {
    use super::*;
    use maskkit_core::Point;

    #[test]
    fn test_right_angle_turns_pass_grid_check() {
        let line = Centerline::new(vec![
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(0.0, 1.0),
        ]);
        assert!(check_turn_angles(&line, 90.0).is_ok());
    }

    #[test]
    fn test_diagonal_turn_fails_grid_check() {
        let line = Centerline::new(vec![
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(2.0, 0.5),
        ]);
        assert!(check_turn_angles(&line, 90.0).is_err());
    }

    #[test]
    fn test_crossing_detected() {
        let line = Centerline::new(vec![
            Point::new(0.0, 0.0),
            Point::new(2.0, 0.0),
            Point::new(2.0, 1.0),
            Point::new(1.0, -1.0),
        ]);
        let err = check_self_intersection(&line).unwrap_err();
        assert!(matches!(
            err,
            LayoutError::SelfIntersection { first: 0, second: 2 }
        ));
    }

    #[test]
    fn test_touching_endpoint_not_reported() {
        // Closed square: the last segment ends at the first segment's
        // start point but does not cross it.
        let line = Centerline::new(vec![
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(0.0, 1.0),
            Point::new(0.0, 0.0),
        ]);
        assert!(check_self_intersection(&line).is_ok());
    }
}
