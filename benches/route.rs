// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of gantt-connectors and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use gantt_connectors::layout::{route_connector, RouteMetrics};
use gantt_connectors::model::TaskIndex;
use gantt_connectors::render::{render_connectors_svg, ConnectorSet};

mod fixtures;

use fixtures::Case;

// Benchmark identity (keep stable):
// - Group names in this file: `route.connector`, `route.lifecycle`
// - Case IDs (the string after the `/`) must remain stable across refactors so
//   results stay comparable over time.
fn benches_route(c: &mut Criterion) {
    let mut group = c.benchmark_group("route.connector");

    let chart = fixtures::chart(Case::StaggeredMedium);
    let metrics = RouteMetrics::new(chart.options(), chart.config());
    let edges: Vec<(TaskIndex, TaskIndex)> = chart
        .dependency_edges()
        .into_iter()
        .map(|edge| (edge.from, edge.to))
        .collect();
    group.bench_function("all_edges_medium", |b| {
        b.iter(|| {
            let mut acc = 0u64;
            for &(from, to) in &edges {
                let (Some(from), Some(to)) = (chart.endpoint(from), chart.endpoint(to)) else {
                    continue;
                };
                let route = route_connector(black_box(&metrics), from, to);
                acc = acc.wrapping_mul(131).wrapping_add(route.path().commands().len() as u64);
            }
            black_box(acc)
        })
    });
    group.finish();

    let mut group = c.benchmark_group("route.lifecycle");

    let small = fixtures::chart(Case::ChainSmall);
    group.bench_function("build_and_render_small", |b| {
        b.iter(|| {
            let set = ConnectorSet::from_chart(black_box(&small)).expect("connectors");
            black_box(render_connectors_svg(&set).len())
        })
    });

    let medium = fixtures::chart(Case::StaggeredMedium);
    let moved = medium.task_index(&fixtures::task_id(250)).expect("row 250");
    group.bench_function("move_one_bar_medium", |b| {
        b.iter_batched_ref(
            || {
                let chart = medium.clone();
                let set = ConnectorSet::from_chart(&chart).expect("connectors");
                (chart, set)
            },
            |(chart, set)| {
                if let Some(bar) = chart.bar_mut(moved) {
                    bar.set_position(bar.x() + 120.0, bar.y());
                }
                black_box(set.update_for_task(chart, moved).expect("update"))
            },
            BatchSize::SmallInput,
        )
    });
    group.bench_function("update_all_medium", |b| {
        b.iter_batched_ref(
            || ConnectorSet::from_chart(&medium).expect("connectors"),
            |set| {
                set.update_all(black_box(&medium)).expect("update");
                black_box(set.len())
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

criterion_group!(benches, benches_route);
criterion_main!(benches);
