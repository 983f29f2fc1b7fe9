//! Property-based invariant tests for the scatter pipeline.
//!
//! Verifies structural guarantees of the time scale, size scale, placer,
//! and the full engine pass:
//!
//! 1.  Time scale is a monotonic inversion: later years land higher
//! 2.  Scale endpoints pin the track edges exactly
//! 3.  Radii always land in `[min_size, max_size]` and are finite
//! 4.  `radius_for` is pure: identical inputs, identical output
//! 5.  Degenerate magnitude batches collapse to `min_size`, never NaN
//! 6.  The placer never touches `y` and preserves order and count
//! 7.  A placement pass with no exhaustion leaves every pair separated
//! 8.  Era: future exactly when `year > current_year`, missing year is past
//! 9.  Engine output is finite, bounded, and accounts for every record
//! 10. Same seed, same records, same layout
//!
//! Plus the four end-to-end scenarios at the bottom: range filtering,
//! forced collision, missing magnitudes, and the tall-track scale check.

use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use tidemark_core::{Era, FixedClock, PlotPoint, TemporalRecord};
use tidemark_layout::{LayoutConfig, LayoutEngine, Placer, SizeScale, TimeScale};

// ── Helpers ──────────────────────────────────────────────────────────

fn arb_record() -> impl Strategy<Value = TemporalRecord> {
    (
        prop::option::of(1800i32..2100),
        prop::option::of(any::<f64>()),
        prop::option::of(0.0f64..=1.0),
        prop_oneof![
            Just("Storm"),
            Just("Flood"),
            Just("Earthquake"),
            Just("Kraken"),
            Just(""),
        ],
    )
        .prop_map(|(year, magnitude, horizontal_seed, category)| TemporalRecord {
            year,
            magnitude,
            horizontal_seed,
            category: category.to_owned(),
            ..TemporalRecord::default()
        })
}

fn arb_batch() -> impl Strategy<Value = Vec<TemporalRecord>> {
    prop::collection::vec(arb_record(), 0..40)
}

fn pairwise_min_distance(points: &[PlotPoint]) -> f64 {
    let mut min = f64::INFINITY;
    for i in 0..points.len() {
        for j in 0..i {
            min = min.min(points[i].distance(&points[j]));
        }
    }
    min
}

// ═════════════════════════════════════════════════════════════════════════
// 1. Monotonic inversion
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn later_years_always_land_higher(
        a in 1800i32..2099,
        gap in 1i32..200,
        height in 100.0f64..20_000.0,
    ) {
        let b = a + gap.min(2099 - a).max(1);
        prop_assume!(a < b);
        let scale = TimeScale::new(1800, 2100, height).unwrap();
        prop_assert!(
            scale.position(a) > scale.position(b),
            "year {} at {} should sit below year {} at {}",
            a, scale.position(a), b, scale.position(b)
        );
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2. Endpoints pin the track edges
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn scale_endpoints_are_exact(
        year_min in 1000i32..2000,
        span in 1i32..500,
        height in 100.0f64..20_000.0,
    ) {
        let year_max = year_min + span;
        let scale = TimeScale::new(year_min, year_max, height).unwrap();
        prop_assert_eq!(scale.position(year_max), 0.0);
        prop_assert_eq!(scale.position(year_min), height);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. Radii stay inside the configured range
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn radii_are_finite_and_bounded(
        magnitudes in prop::collection::vec(any::<f64>(), 0..60),
        probe in any::<f64>(),
    ) {
        let scale = SizeScale::from_magnitudes(magnitudes.iter().copied(), 8.0, 60.0);
        for m in magnitudes.iter().copied().map(Some).chain([None, Some(probe)]) {
            let radius = scale.radius_for(m);
            prop_assert!(radius.is_finite());
            prop_assert!((8.0..=60.0).contains(&radius), "radius {} for {:?}", radius, m);
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. radius_for is pure
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn radius_for_is_pure(
        magnitudes in prop::collection::vec(0.1f64..1.0e9, 1..40),
        probe in prop::option::of(any::<f64>()),
    ) {
        let scale = SizeScale::from_magnitudes(magnitudes.iter().copied(), 8.0, 60.0);
        let first = scale.radius_for(probe);
        let second = scale.radius_for(probe);
        prop_assert!(first == second || (first.is_nan() && second.is_nan()));
        prop_assert!(!first.is_nan());
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5. Degenerate batches collapse to min_size
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn degenerate_batches_collapse(
        magnitude in 0.1f64..1.0e9,
        copies in 1usize..30,
        probe in any::<f64>(),
    ) {
        let scale = SizeScale::from_magnitudes(
            std::iter::repeat(magnitude).take(copies),
            8.0,
            60.0,
        );
        prop_assert_eq!(scale.radius_for(Some(magnitude)), 8.0);
        let radius = scale.radius_for(Some(probe));
        prop_assert!(radius.is_finite());
        prop_assert_eq!(radius, 8.0);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 6. The placer never touches y, order, or count
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn placer_moves_x_only(
        coords in prop::collection::vec((-800.0f64..800.0, 0.0f64..10_000.0), 0..40),
        seed in any::<u64>(),
    ) {
        let mut points: Vec<PlotPoint> =
            coords.iter().map(|&(x, y)| PlotPoint::new(x, y)).collect();
        let before_y: Vec<f64> = points.iter().map(|p| p.y).collect();
        let placer = Placer::new(30.0, 20);
        let mut rng = SmallRng::seed_from_u64(seed);
        let report = placer.separate(&mut points, &mut rng);
        prop_assert_eq!(points.len(), coords.len());
        for (point, y) in points.iter().zip(before_y) {
            prop_assert_eq!(point.y, y);
        }
        prop_assert!(report.moved <= points.len());
        prop_assert!(report.exhausted <= points.len());
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 7. No exhaustion means full separation
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn non_exhausted_passes_are_separated(
        cluster in 2usize..10,
        seed in any::<u64>(),
    ) {
        let mut points = vec![PlotPoint::new(0.0, 0.0); cluster];
        let placer = Placer::new(10.0, 10_000);
        let mut rng = SmallRng::seed_from_u64(seed);
        let report = placer.separate(&mut points, &mut rng);
        if report.exhausted == 0 {
            prop_assert!(
                pairwise_min_distance(&points) >= 10.0,
                "closest pair at {}",
                pairwise_min_distance(&points)
            );
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 8. Era boundary
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn future_is_strictly_after_now(year in any::<i32>(), current in any::<i32>()) {
        let era = Era::of(Some(year), current);
        prop_assert_eq!(era.is_future(), year > current);
        prop_assert_eq!(Era::of(None, current), Era::Past);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 9. Engine output is finite, bounded, and complete
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn engine_accounts_for_every_record(
        records in arb_batch(),
        seed in any::<u64>(),
        current_year in 1900i32..2100,
    ) {
        let config = LayoutConfig::default().with_seed(seed);
        let min_size = config.min_dot_size;
        let max_size = config.max_dot_size;
        let mut engine = LayoutEngine::new(config);
        let layout = engine
            .layout(&records, &[], &FixedClock(current_year))
            .unwrap();

        prop_assert_eq!(layout.points.len() + layout.skipped, records.len());
        for point in &layout.points {
            prop_assert!(point.x.is_finite());
            prop_assert!(point.y.is_finite());
            prop_assert!(point.radius.is_finite());
            prop_assert!((min_size..=max_size).contains(&point.radius));
            let year = point.record.year.unwrap();
            prop_assert!((1922..=2025).contains(&year));
            prop_assert_eq!(point.era.is_future(), year > current_year);
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 10. Seeded layouts are reproducible
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn same_seed_same_layout(records in arb_batch(), seed in any::<u64>()) {
        let clock = FixedClock(2025);
        let mut a = LayoutEngine::new(LayoutConfig::default().with_seed(seed));
        let mut b = LayoutEngine::new(LayoutConfig::default().with_seed(seed));
        let first = a.layout(&records, &[], &clock).unwrap();
        let second = b.layout(&records, &[], &clock).unwrap();
        prop_assert_eq!(first, second);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// End-to-end scenarios
// ═════════════════════════════════════════════════════════════════════════

#[test]
fn scenario_out_of_range_future_record_is_filtered() {
    let records = vec![
        TemporalRecord::for_year(1950).with_magnitude(100.0),
        TemporalRecord::for_year(2050).with_magnitude(200.0),
    ];
    let mut engine = LayoutEngine::new(LayoutConfig::default().with_seed(1));
    let layout = engine.layout(&records, &[], &FixedClock(2024)).unwrap();

    assert_eq!(layout.points.len(), 1);
    assert_eq!(layout.skipped, 1);
    assert_eq!(layout.points[0].record.year, Some(1950));
    assert!(!layout.points[0].is_future());
}

#[test]
fn scenario_forced_collision_separates_horizontally() {
    let colliding = TemporalRecord::for_year(1970)
        .with_magnitude(50.0)
        .with_horizontal_seed(0.5);
    let records = vec![colliding.clone(), colliding];

    let mut config = LayoutConfig::default().with_seed(2);
    config.axis_jitter_px = 0.0;
    config.max_tries = 10_000;
    let min_distance = config.min_distance;

    let mut engine = LayoutEngine::new(config);
    let layout = engine.layout(&records, &[], &FixedClock(2025)).unwrap();

    assert_eq!(layout.points.len(), 2);
    assert_eq!(layout.placement.exhausted, 0);
    let dx = (layout.points[0].x - layout.points[1].x).abs();
    assert!(dx >= min_distance, "columns {dx} px apart");
    assert_eq!(layout.points[0].y, layout.points[1].y);
}

#[test]
fn scenario_missing_magnitudes_all_get_the_minimum_size() {
    let records: Vec<TemporalRecord> =
        (1960..1990).map(TemporalRecord::for_year).collect();
    let mut engine = LayoutEngine::new(LayoutConfig::default().with_seed(3));
    let layout = engine.layout(&records, &[], &FixedClock(2025)).unwrap();

    assert_eq!(layout.points.len(), 30);
    assert!(layout.points.iter().all(|p| p.radius == 8.0));
}

#[test]
fn scenario_tall_track_endpoints() {
    let scale = TimeScale::new(1922, 2025, 10_000.0).unwrap();
    assert_eq!(scale.position(2025), 0.0);
    assert_eq!(scale.position(1922), 10_000.0);
}
