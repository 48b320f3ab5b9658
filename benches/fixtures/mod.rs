// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of gantt-connectors and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

#![allow(dead_code)]

// Shared deterministic benchmark fixtures (no RNG).

use chrono::{Duration, NaiveDate, NaiveDateTime};

use gantt_connectors::model::{Bar, Chart, ChartConfig, ChartOptions, Task, TaskId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Case {
    /// 50 tasks, each depending on its predecessor.
    ChainSmall,
    /// 500 tasks, predecessor edges plus a back edge every fifth row.
    StaggeredMedium,
}

impl Case {
    fn rows(self) -> usize {
        match self {
            Self::ChainSmall => 50,
            Self::StaggeredMedium => 500,
        }
    }
}

fn epoch() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 1, 1)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .expect("valid epoch")
}

pub fn task_id(row: usize) -> TaskId {
    TaskId::new(format!("t{row:04}")).expect("valid task id")
}

pub fn chart(case: Case) -> Chart {
    let options = ChartOptions {
        critical_path: true,
        ..ChartOptions::default()
    };
    let mut chart = Chart::new(options, ChartConfig::default());

    for row in 0..case.rows() {
        // x wanders so that some rows start left of their predecessor and need a wrap route
        let x = ((row * 37) % 400) as f64;
        let width = 30.0 + ((row * 13) % 60) as f64;
        let start = epoch() + Duration::days(row as i64);
        let end = start + Duration::days(1 + (row % 4) as i64);

        let mut dependencies = Vec::new();
        if row > 0 {
            dependencies.push(task_id(row - 1));
        }
        if case == Case::StaggeredMedium && row >= 3 && row % 5 == 0 {
            dependencies.push(task_id(row - 3));
        }

        let task = Task::new(task_id(row), start, end)
            .expect("start before end")
            .with_critical(row % 3 == 0)
            .with_dependencies(dependencies);
        let y = 69.0 + 38.0 * row as f64;
        chart.push_task(task, Bar::new(x, y, width, 20.0)).expect("unique id");
    }

    chart
}
