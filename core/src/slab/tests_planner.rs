use super::*;
use crate::geometry::ApproxEq;

fn centers(plan: &IntervalPlan) -> Vec<f64> {
    plan.slabs().map(|s| s.center_z()).collect()
}

#[test]
fn test_exact_fit_emits_single_slab() {
    let plan = plan_interval(1.0, 3.0, 2.0, 0.02).unwrap();

    assert_eq!(plan.kind, PlanKind::Single);
    assert_eq!(centers(&plan), vec![2.0]);
    assert_eq!(plan.combinations().count(), 0);
}

#[test]
fn test_fit_within_tolerance_is_single() {
    let plan = plan_interval(0.0, 2.0 + 1e-12, 2.0, 0.02).unwrap();

    assert_eq!(plan.kind, PlanKind::Single);
    assert_eq!(plan.steps.len(), 1);
    assert!(centers(&plan)[0].approx_eq(&1.0));
}

#[test]
fn test_narrow_interval_is_clipped_by_intersection() {
    let plan = plan_interval(-1.0, 0.0, 2.0, 0.02).unwrap();

    assert_eq!(plan.kind, PlanKind::Clipped);
    let z = centers(&plan);
    assert_eq!(z.len(), 2);
    assert!(z[0].approx_eq(&-1.0));
    assert!(z[1].approx_eq(&0.0));
    assert_eq!(
        plan.combinations().collect::<Vec<_>>(),
        vec![BooleanOp::Intersection]
    );
    assert!(matches!(plan.steps[2], PlanStep::Combine(BooleanOp::Intersection)));
}

#[test]
fn test_clipped_centers_are_symmetric() {
    for (low, high, side) in [(4.0, 4.1, 2.0), (-3.5, -2.0, 5.0), (0.25, 0.5, 1.0)] {
        let plan = plan_interval(low, high, side, 0.1).unwrap();
        let z = centers(&plan);
        let mid = 0.5 * (low + high);

        assert!((0.5 * (z[0] + z[1])).approx_eq(&mid), "not symmetric for {low}..{high}");
        assert!((z[1] - z[0]).approx_eq(&(side - (high - low))));
    }
}

#[test]
fn test_clipped_overlap_matches_interval() {
    let side = 2.0;
    let plan = plan_interval(4.0, 4.1, side, 0.02).unwrap();
    let z = centers(&plan);

    let overlap_low = z[1] - 0.5 * side;
    let overlap_high = z[0] + 0.5 * side;
    assert!(overlap_low.approx_eq(&4.0));
    assert!(overlap_high.approx_eq(&4.1));
}

#[test]
fn test_tall_interval_is_stacked_by_union() {
    let plan = plan_interval(0.0, 4.0, 2.0, 0.02).unwrap();

    assert_eq!(plan.kind, PlanKind::Stacked { extra: 2 });
    assert_eq!(centers(&plan), vec![1.0, 3.0, 1.0]);
    assert_eq!(plan.combinations().count(), 2);

    // base slab, then each extra slab is immediately folded in
    assert!(matches!(plan.steps[0], PlanStep::Slab(_)));
    assert!(matches!(plan.steps[1], PlanStep::Slab(_)));
    assert!(matches!(plan.steps[2], PlanStep::Combine(BooleanOp::Union)));
    assert!(matches!(plan.steps[3], PlanStep::Slab(_)));
    assert!(matches!(plan.steps[4], PlanStep::Combine(BooleanOp::Union)));
}

#[test]
fn test_stacked_counts_follow_rounded_ratio() {
    let cases = [
        (0.0, 3.0, 2.0, 2),  // 1.5 -> 2
        (0.0, 5.0, 2.0, 2),  // 2.5 -> 2, ties go to even
        (0.0, 7.0, 2.0, 4),  // 3.5 -> 4
        (0.0, 6.4, 2.0, 3),  // 3.2 -> 3
        (-1.0, 10.0, 1.0, 11),
    ];
    for (low, high, side, extra) in cases {
        let plan = plan_interval(low, high, side, 0.02).unwrap();
        assert_eq!(plan.kind, PlanKind::Stacked { extra });
        assert_eq!(plan.slabs().count(), extra + 1);
        assert!(plan.combinations().all(|op| op == BooleanOp::Union));
        assert_eq!(plan.combinations().count(), extra);
    }
}

#[test]
fn test_slabs_carry_voxel_and_side() {
    let plan = plan_interval(0.0, 10.0, 2.5, 0.05).unwrap();
    for slab in plan.slabs() {
        assert_eq!(slab.voxel_size, 0.05);
        assert_eq!(slab.side_length, 2.5);
        assert_eq!(slab.center.x, 0.0);
        assert_eq!(slab.center.y, 0.0);
    }
}

#[test]
fn test_planning_is_deterministic() {
    let a = plan_interval(-2.0, 7.3, 1.5, 0.02).unwrap();
    let b = plan_interval(-2.0, 7.3, 1.5, 0.02).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_invalid_inputs_are_rejected() {
    assert_eq!(
        plan_interval(1.0, 1.0, 2.0, 0.02),
        Err(PlanError::InvalidInterval { low: 1.0, high: 1.0 })
    );
    assert!(matches!(
        plan_interval(2.0, 1.0, 2.0, 0.02),
        Err(PlanError::InvalidInterval { .. })
    ));
    assert_eq!(plan_interval(0.0, 1.0, 0.0, 0.02), Err(PlanError::InvalidSide(0.0)));
    assert_eq!(plan_interval(0.0, 1.0, 2.0, -0.1), Err(PlanError::InvalidVoxelSize(-0.1)));
    assert!(plan_interval(0.0, f64::INFINITY, 2.0, 0.02).is_err());
    assert!(plan_interval(0.0, 1.0, f64::NAN, 0.02).is_err());
}

#[test]
fn test_overflowing_span_is_rejected() {
    // both bounds are finite but their difference is not
    assert_eq!(
        plan_interval(-1.0e308, 1.0e308, 2.0, 0.02),
        Err(PlanError::InvalidInterval { low: -1.0e308, high: 1.0e308 })
    );
    assert!(HeightInterval::new(-f64::MAX, f64::MAX).is_err());
}

#[test]
fn test_huge_slab_count_is_rejected() {
    assert_eq!(
        plan_interval(0.0, 1.0e12, 1.0, 0.02),
        Err(PlanError::TooManySlabs { ratio: 1.0e12, max: MAX_STACKED_SLABS })
    );
    assert!(matches!(
        plan_interval(0.0, 1.0e300, 1.0e-300, 0.02),
        Err(PlanError::TooManySlabs { .. })
    ));

    let plan = plan_interval(0.0, MAX_STACKED_SLABS as f64, 1.0, 0.02).unwrap();
    assert_eq!(plan.kind, PlanKind::Stacked { extra: MAX_STACKED_SLABS });
}

#[test]
fn test_mid_of_large_bounds_stays_finite() {
    let interval = HeightInterval::new(1.0e308, 1.7e308).unwrap();
    assert!(interval.mid().is_finite());
    assert!(interval.mid() > interval.low() && interval.mid() < interval.high());
}
