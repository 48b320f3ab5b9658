// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of gantt-connectors and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Gantt dependency connectors.
//!
//! Given a chart of tasks whose bars are already laid out, this crate decides how each dependency
//! arrow is styled (critical, invalid or plain) and computes its SVG path. Connectors can be
//! recomputed after a bar moves without rebuilding the chart.
//!
//! ```
//! use gantt_connectors::store::parse_chart_document;
//! use gantt_connectors::render::render_chart_connectors_svg;
//!
//! let chart = parse_chart_document(
//!     r#"{ "tasks": [
//!         { "id": "a", "start": "2024-03-01", "end": "2024-03-02",
//!           "bar": { "x": 0, "y": 69, "width": 40, "height": 20 } },
//!         { "id": "b", "start": "2024-03-03", "end": "2024-03-04", "dependencies": ["a"],
//!           "bar": { "x": 200, "y": 107, "width": 60, "height": 20 } }
//!     ] }"#,
//! )
//! .unwrap();
//! let svg = render_chart_connectors_svg(&chart).unwrap();
//! assert!(svg.contains(r#"data-from="a" data-to="b""#));
//! ```

pub mod classify;
pub mod layout;
pub mod model;
pub mod render;
pub mod store;

pub use model::{Chart, ChartConfig, ChartOptions, DependencyKind, Task, TaskId, TaskIndex};
pub use render::{Connector, ConnectorSet};
