// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of gantt-connectors and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Data model read by the connector core.
//!
//! A [`Chart`] owns tasks and their bars; everything else refers to them through [`TaskIndex`].

pub mod bar;
pub mod chart;
pub mod dependency;
#[cfg(test)]
pub(crate) mod fixtures;
pub mod ids;
pub mod options;
pub mod task;

pub use bar::Bar;
pub use chart::{Chart, ChartError, DependencyEdge, Endpoint, TaskIndex};
pub use dependency::DependencyKind;
pub use ids::{Id, IdError, TaskId};
pub use options::{ChartConfig, ChartOptions};
pub use task::{Task, TaskError};
