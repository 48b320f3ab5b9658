// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of gantt-connectors and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Dependency classification: critical-path membership and constraint violations.

use crate::model::{ChartOptions, DependencyKind, Endpoint, Task};

/// `true` iff critical-path styling is enabled and both tasks are flagged critical.
pub fn is_critical_dependency(options: &ChartOptions, from: &Task, to: &Task) -> bool {
    options.critical_path && from.is_critical() && to.is_critical()
}

/// The constraint kind governing an edge: the target's override, else the chart default.
pub fn effective_dependency_kind<'a>(
    options: &'a ChartOptions,
    to: &'a Task,
) -> &'a DependencyKind {
    to.dependency_type().unwrap_or(&options.dependencies_type)
}

/// Whether the edge `from -> to` violates its constraint.
///
/// `Fixed` compares bar positions, so this must be re-evaluated whenever bars move. Unrecognized
/// kinds are never invalid.
pub fn is_invalid_dependency(
    options: &ChartOptions,
    from: Endpoint<'_>,
    to: Endpoint<'_>,
) -> bool {
    let (parent, child) = (from.task, to.task);
    match effective_dependency_kind(options, to.task) {
        DependencyKind::Fixed => to.bar.x() < from.bar.x(),
        DependencyKind::FinishToStart => child.start() < parent.end(),
        DependencyKind::StartToStart => child.start() < parent.start(),
        DependencyKind::FinishToFinish => child.end() < parent.end(),
        DependencyKind::StartToFinish => child.end() < parent.start(),
        DependencyKind::Other(_) => false,
    }
}
