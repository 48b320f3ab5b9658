// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of gantt-connectors and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use chrono::{NaiveDate, NaiveDateTime};

use super::bar::Bar;
use super::chart::Chart;
use super::ids::TaskId;
use super::options::{ChartConfig, ChartOptions};
use super::task::Task;

pub(crate) fn tid(value: &str) -> TaskId {
    TaskId::new(value).expect("task id")
}

/// An instant in March 2024.
pub(crate) fn instant(day: u32, hour: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 3, day)
        .and_then(|date| date.and_hms_opt(hour, 0, 0))
        .expect("valid instant")
}

/// One chart row: id, start/end day (midnight), bar, dependency ids.
pub(crate) type Row<'a> = (&'a str, (u32, u32), Bar, &'a [&'a str]);

pub(crate) fn chart_from_rows(options: ChartOptions, rows: &[Row<'_>]) -> Chart {
    let mut chart = Chart::new(options, ChartConfig::default());
    for &(id, (start_day, end_day), bar, deps) in rows {
        let task = Task::new(tid(id), instant(start_day, 0), instant(end_day, 0))
            .expect("task")
            .with_dependencies(deps.iter().map(|dep| tid(dep)));
        chart.push_task(task, bar).expect("push task");
    }
    chart
}

/// Source on row 0, target on row 2, target clearly right of the source.
pub(crate) fn direct_route_chart() -> Chart {
    chart_from_rows(
        ChartOptions::default(),
        &[
            ("a", (1, 3), Bar::new(0.0, 0.0, 40.0, 20.0), &[]),
            ("spacer", (2, 4), Bar::new(60.0, 20.0, 40.0, 20.0), &[]),
            ("b", (4, 6), Bar::new(200.0, 40.0, 60.0, 20.0), &["a"]),
        ],
    )
}

/// Source on row 0, target on row 1 starting left of the source.
pub(crate) fn wrap_route_chart() -> Chart {
    chart_from_rows(
        ChartOptions::default(),
        &[
            ("a", (5, 8), Bar::new(100.0, 59.0, 80.0, 20.0), &[]),
            ("b", (2, 4), Bar::new(40.0, 97.0, 50.0, 20.0), &["a"]),
        ],
    )
}
