// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of gantt-connectors and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Connector routing.
//!
//! Computes the curved path between two bars: the start anchor under the source bar, the arrow tip
//! left of the target bar, and either a wrap or a direct route between them.

pub mod path;
pub mod route;

pub use path::{PathCommand, PathData, Sweep};
pub use route::{
    route_connector, ConnectorRoute, Point, RouteKind, RouteMetrics, ARROWHEAD_OFFSET, END_INSET,
    START_SHIFT_STEP,
};
