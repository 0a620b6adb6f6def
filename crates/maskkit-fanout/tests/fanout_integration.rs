//! Integration tests for pad, bridge, lead, and spacing builders.

use maskkit_core::{LayoutError, Point};
use maskkit_fanout::{
    lead_route, plan_spacing, trapezoidal_bridge, ArrangementMode, Chamfer, CornerStyle,
    DistributionLaw, LeadStyle, Pad,
};

#[test]
fn test_pad_chamfer_vertex_counts() {
    let center = Point::new(0.0, 0.0);
    assert_eq!(
        Pad::new(center, 10.0, 6.0, Chamfer::none())
            .unwrap()
            .outline()
            .len(),
        4
    );
    assert_eq!(
        Pad::new(center, 10.0, 6.0, Chamfer::straight(2.0))
            .unwrap()
            .outline()
            .len(),
        8
    );
    assert_eq!(
        Pad::new(center, 10.0, 6.0, Chamfer::round(2.0, 6))
            .unwrap()
            .outline()
            .len(),
        24
    );
}

#[test]
fn test_oversized_chamfer_is_configuration_error() {
    // Pad 10 x 6 with straight chamfer 4: 2*4 = 8 > 6.
    let err = Pad::new(Point::new(0.0, 0.0), 10.0, 6.0, Chamfer::straight(4.0)).unwrap_err();
    assert!(matches!(err, LayoutError::Configuration { .. }));
}

#[test]
fn test_full_fanout_assembly() {
    // One inner/outer pad pair connected by a bridge and by a lead, the
    // way a device assembly script drives the builders.
    let inner = Pad::new(Point::new(0.0, 0.0), 8.0, 4.0, Chamfer::none()).unwrap();
    let outer = Pad::new(
        Point::new(50.0, -30.0),
        20.0,
        20.0,
        Chamfer::straight(4.0),
    )
    .unwrap();

    let bridge = trapezoidal_bridge(&inner, &outer, None, None).unwrap();
    assert_eq!(bridge.len(), 4);
    assert!(bridge.area() > 0.0);

    for corner in [
        CornerStyle::RightAngle,
        CornerStyle::StraightChamfer,
        CornerStyle::RoundChamfer,
    ] {
        let style = LeadStyle {
            line_width: 3.0,
            corner,
            chamfer_size: 10.0,
        };
        let route = lead_route(inner.center, outer.center, &style).unwrap();
        assert!(route.polygon.area() > 0.0, "{corner:?}");
        // The route runs from pad center to pad center.
        let pts = route.centerline.points();
        assert_eq!(pts[0], inner.center);
        assert_eq!(*pts.last().unwrap(), outer.center);
    }
}

#[test]
fn test_bridge_mirror_invariant() {
    let a = Pad::new(Point::new(0.0, 0.0), 8.0, 4.0, Chamfer::none()).unwrap();
    let b = Pad::new(Point::new(0.0, 40.0), 12.0, 12.0, Chamfer::round(2.0, 4)).unwrap();
    let fwd = trapezoidal_bridge(&a, &b, None, None).unwrap();
    let rev = trapezoidal_bridge(&b, &a, None, None).unwrap();
    assert_eq!(rev, fwd.reversed());
}

#[test]
fn test_spacing_plan_positions_feed_pad_placement() {
    let plan = plan_spacing(
        8,
        1.0,
        20.0,
        DistributionLaw::Logarithmic,
        ArrangementMode::Centered,
    )
    .unwrap();
    assert_eq!(plan.positions.len(), 8);

    // Positions are usable as pad centers directly.
    for &x in &plan.positions {
        let pad = Pad::new(Point::new(x, 0.0), 0.5, 6.0, Chamfer::none()).unwrap();
        assert!(pad.outline().area() > 0.0);
    }

    // Smallest gap sits in the middle of the row.
    let gaps: Vec<f64> = plan
        .positions
        .windows(2)
        .map(|w| w[1] - w[0])
        .collect();
    let min_idx = gaps
        .iter()
        .enumerate()
        .min_by(|a, b| a.1.partial_cmp(b.1).unwrap())
        .unwrap()
        .0;
    assert_eq!(min_idx, 3);
}

#[test]
fn test_grid_output_boundary() {
    // Polygons convert to integer-grid vertex lists at the engine edge.
    let pad = Pad::new(Point::new(1.0, 2.0), 8.0, 4.0, Chamfer::none()).unwrap();
    let grid = pad.outline().to_grid();
    assert_eq!(grid.len(), 4);
    assert_eq!(grid[0].x, -3000);
    assert_eq!(grid[0].y, 0);
}

mod property {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn spacing_values_positive_and_mode_invariant(
            n in 3usize..12,
            min in 0.1f64..5.0,
            spread in 0.1f64..50.0,
            law_idx in 0usize..4,
        ) {
            let law = [
                DistributionLaw::Linear,
                DistributionLaw::Logarithmic,
                DistributionLaw::Exponential,
                DistributionLaw::Reciprocal,
            ][law_idx];
            let max = min + spread;
            let centered =
                plan_spacing(n, min, max, law, ArrangementMode::Centered).unwrap();
            let ordered =
                plan_spacing(n, min, max, law, ArrangementMode::LeftToRight).unwrap();
            prop_assert_eq!(centered.spacings.len(), n - 1);
            for &s in &centered.spacings {
                prop_assert!(s > 0.0);
            }
            let mut a = centered.spacings.clone();
            let mut b = ordered.spacings.clone();
            a.sort_by(|x, y| x.partial_cmp(y).unwrap());
            b.sort_by(|x, y| x.partial_cmp(y).unwrap());
            prop_assert_eq!(a, b);
        }

        #[test]
        fn pad_outline_vertex_count_follows_chamfer(
            length in 1.0f64..50.0,
            width in 1.0f64..50.0,
            frac in 0.01f64..0.49,
            resolution in 2usize..12,
        ) {
            let size = length.min(width) * frac;
            let center = Point::new(0.0, 0.0);
            let plain = Pad::new(center, length, width, Chamfer::none()).unwrap();
            prop_assert_eq!(plain.outline().len(), 4);
            let straight = Pad::new(center, length, width, Chamfer::straight(size)).unwrap();
            prop_assert_eq!(straight.outline().len(), 8);
            let round = Pad::new(center, length, width, Chamfer::round(size, resolution)).unwrap();
            prop_assert_eq!(round.outline().len(), 4 * resolution);
            prop_assert!(round.outline().area() > 0.0);
        }
    }
}
