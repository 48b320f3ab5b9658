// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of gantt-connectors and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use rstest::rstest;

use super::{route_connector, start_shift_steps, RouteKind, RouteMetrics, START_SHIFT_STEP};
use crate::model::fixtures::{instant, tid};
use crate::model::{Bar, ChartConfig, ChartOptions, Endpoint, Task};

fn row_task(id: &str, index: usize) -> Task {
    Task::new(tid(id), instant(1, 0), instant(2, 0)).expect("task").with_index(index)
}

fn metrics() -> RouteMetrics {
    RouteMetrics::new(&ChartOptions::default(), &ChartConfig::default())
}

fn route_d(metrics: &RouteMetrics, from: (&Task, Bar), to: (&Task, Bar)) -> (RouteKind, f64, String) {
    let route = route_connector(metrics, Endpoint::new(from.0, &from.1), Endpoint::new(to.0, &to.1));
    (route.kind(), route.curve(), route.path().to_string())
}

/// The stepwise search the closed form replaces.
fn stepwise_start_x(start_x: f64, from_x: f64, to_x: f64, padding: f64) -> f64 {
    let mut x = start_x;
    while to_x < x + padding && x > from_x + padding {
        x -= START_SHIFT_STEP;
    }
    x - START_SHIFT_STEP
}

#[test]
fn direct_route_for_target_clearly_right() {
    let a = row_task("a", 0);
    let b = row_task("b", 2);
    let (kind, curve, d) = route_d(
        &metrics(),
        (&a, Bar::new(0.0, 0.0, 40.0, 20.0)),
        (&b, Bar::new(200.0, 40.0, 60.0, 20.0)),
    );

    assert_eq!(kind, RouteKind::Direct);
    assert_eq!(curve, 5.0);
    assert_eq!(d, "M 10 79 V 140 a 5 5 0 0 0 5 5 L 187 145 m -5 -5 l 5 5 l -5 5");
}

#[test]
fn direct_route_from_lower_row_bends_up_clockwise() {
    let a = row_task("a", 2);
    let b = row_task("b", 0);
    let (kind, _, d) = route_d(
        &metrics(),
        (&a, Bar::new(0.0, 135.0, 40.0, 20.0)),
        (&b, Bar::new(200.0, 59.0, 60.0, 20.0)),
    );

    assert_eq!(kind, RouteKind::Direct);
    assert_eq!(d, "M 10 155 V 74 a 5 5 0 0 1 5 5 L 187 69 m -5 -5 l 5 5 l -5 5");
}

#[test]
fn direct_route_clamps_curve_to_anchor_distance() {
    let a = row_task("a", 0);
    let b = row_task("b", 1);
    let (kind, curve, d) = route_d(
        &metrics(),
        (&a, Bar::new(0.0, 59.0, 56.0, 20.0)),
        (&b, Bar::new(24.0, 97.0, 40.0, 20.0)),
    );

    assert_eq!(kind, RouteKind::Direct);
    // start x = 28 - 10 (overlap) - 10 (final step) = 8, end x = 24 - 13 = 11
    assert_eq!(curve, 3.0);
    assert_eq!(d, "M 8 79 V 104 a 3 3 0 0 0 3 3 L 11 107 m -5 -5 l 5 5 l -5 5");
}

#[test]
fn wrap_route_for_target_left_of_source() {
    let a = row_task("a", 0);
    let b = row_task("b", 1);
    let metrics = metrics();
    let route = route_connector(
        &metrics,
        Endpoint::new(&a, &Bar::new(100.0, 59.0, 80.0, 20.0)),
        Endpoint::new(&b, &Bar::new(40.0, 97.0, 50.0, 20.0)),
    );

    assert_eq!(route.kind(), RouteKind::Wrap);
    assert_eq!(route.path().count('a'), 3);
    assert_eq!(route.path().count('H'), 1);
    assert_eq!(
        route.path().to_string(),
        "M 100 79 v 4 a 5 5 0 0 1 -5 5 H 22 a 5 5 0 0 0 -5 5 V 102 a 5 5 0 0 0 5 5 \
         L 27 107 m -5 -5 l 5 5 l -5 5"
    );
}

#[test]
fn wrap_route_enlarges_curve_when_drop_would_be_negative() {
    let a = row_task("a", 0);
    let b = row_task("b", 1);
    let options = ChartOptions {
        arrow_curve: 12.0,
        ..ChartOptions::default()
    };
    let metrics = RouteMetrics::new(&options, &ChartConfig::default());
    let (kind, curve, d) = route_d(
        &metrics,
        (&a, Bar::new(100.0, 59.0, 80.0, 20.0)),
        (&b, Bar::new(40.0, 97.0, 50.0, 20.0)),
    );

    assert_eq!(kind, RouteKind::Wrap);
    assert_eq!(curve, 9.0);
    assert_eq!(
        d,
        "M 100 79 v 0 a 9 9 0 0 1 -9 9 H 22 a 9 9 0 0 0 -9 9 V 98 a 9 9 0 0 0 9 9 \
         L 27 107 m -5 -5 l 5 5 l -5 5"
    );
}

#[test]
fn wrap_route_chosen_at_exact_padding_boundary() {
    let a = row_task("a", 0);
    let b = row_task("b", 1);
    let (kind, _, d) = route_d(
        &metrics(),
        (&a, Bar::new(100.0, 59.0, 80.0, 20.0)),
        (&b, Bar::new(118.0, 97.0, 50.0, 20.0)),
    );

    assert_eq!(kind, RouteKind::Wrap);
    assert!(d.ends_with("m -5 -5 l 5 5 l -5 5"));
}

#[test]
fn routing_is_deterministic() {
    let a = row_task("a", 3);
    let b = row_task("b", 1);
    let from_bar = Bar::new(320.5, 173.0, 75.25, 20.0);
    let to_bar = Bar::new(90.0, 97.0, 33.0, 20.0);
    let first = route_d(&metrics(), (&a, from_bar), (&b, to_bar));
    let second = route_d(&metrics(), (&a, from_bar), (&b, to_bar));
    assert_eq!(first, second);
}

#[rstest]
// no overlap: only the final step
#[case(20.0, 0.0, 200.0, 18.0)]
// target overlaps, stopped by clearing the target
#[case(140.0, 100.0, 150.0, 18.0)]
// target overlaps, stopped by the source-edge guard
#[case(140.0, 100.0, 40.0, 18.0)]
// exact clearance after whole steps
#[case(50.0, 0.0, 48.0, 18.0)]
// start already at the source-edge guard
#[case(18.0, 0.0, 10.0, 18.0)]
// guard lands on a rounding boundary: 112.95 - 90 is just above 4.95 + 18
#[case(112.95, 4.95, 27.3, 18.0)]
#[case(50.0, 0.0, 20.0, 7.3)]
fn closed_form_shift_matches_stepwise_search(
    #[case] start_x: f64,
    #[case] from_x: f64,
    #[case] to_x: f64,
    #[case] padding: f64,
) {
    let steps = start_shift_steps(start_x, from_x, to_x, padding);
    let closed = start_x - (steps + 1.0) * START_SHIFT_STEP;
    assert_eq!(closed, stepwise_start_x(start_x, from_x, to_x, padding));
}

#[test]
fn closed_form_shift_matches_stepwise_search_on_fractional_grid() {
    for padding in [18.0, 7.3] {
        for start_hundredths in (0..20_000).step_by(37) {
            let start_x = f64::from(start_hundredths) / 100.0;
            for offset_hundredths in [0, 495, 1_730, 5_005, 10_800] {
                let from_x = (start_x - f64::from(offset_hundredths) / 100.0).max(0.0);
                for to_hundredths in [0, 930, 2_730, 6_115, 14_000] {
                    let to_x = f64::from(to_hundredths) / 100.0;
                    let steps = start_shift_steps(start_x, from_x, to_x, padding);
                    let closed = start_x - (steps + 1.0) * START_SHIFT_STEP;
                    let stepwise = stepwise_start_x(start_x, from_x, to_x, padding);
                    assert_eq!(
                        closed, stepwise,
                        "start {start_x} from {from_x} to {to_x} padding {padding}"
                    );
                }
            }
        }
    }
}
