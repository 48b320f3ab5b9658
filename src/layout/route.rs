// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of gantt-connectors and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use log::trace;

use super::path::{PathCommand, PathData, Sweep};
use crate::model::{Bar, ChartConfig, ChartOptions, Endpoint};

/// Horizontal step used when moving the start anchor off an overlapping target.
pub const START_SHIFT_STEP: f64 = 10.0;
/// Gap between the arrow tip and the target bar's left edge.
pub const END_INSET: f64 = 13.0;
/// Leg length of the arrowhead chevron. Independent of the curve radius.
pub const ARROWHEAD_OFFSET: f64 = 5.0;

/// Layout constants a route depends on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RouteMetrics {
    pub padding: f64,
    pub bar_height: f64,
    pub arrow_curve: f64,
    pub header_height: f64,
}

impl RouteMetrics {
    pub fn new(options: &ChartOptions, config: &ChartConfig) -> Self {
        Self {
            padding: options.padding,
            bar_height: options.bar_height,
            arrow_curve: options.arrow_curve,
            header_height: config.header_height,
        }
    }

    fn row_pitch(&self) -> f64 {
        self.padding + self.bar_height
    }

    fn row_top(&self, index: usize) -> f64 {
        self.header_height + self.row_pitch() * index as f64 + self.padding / 2.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteKind {
    /// Target does not clearly lie right of the source: drop, run left, climb or descend.
    Wrap,
    /// Target lies clearly right of the source: one vertical run and a single curve.
    Direct,
}

/// A computed connector: chosen branch, anchors, effective curve radius and the path itself.
#[derive(Debug, Clone, PartialEq)]
pub struct ConnectorRoute {
    kind: RouteKind,
    start: Point,
    end: Point,
    curve: f64,
    path: PathData,
}

impl ConnectorRoute {
    pub fn kind(&self) -> RouteKind {
        self.kind
    }

    pub fn start(&self) -> Point {
        self.start
    }

    pub fn end(&self) -> Point {
        self.end
    }

    /// The curve radius actually used, after any clamping.
    pub fn curve(&self) -> f64 {
        self.curve
    }

    pub fn path(&self) -> &PathData {
        &self.path
    }

    pub fn into_path(self) -> PathData {
        self.path
    }
}

/// Routes a connector from the bottom-center of `from`'s bar to an arrow tip left of `to`'s bar.
///
/// The result depends only on the two endpoints and `metrics`.
pub fn route_connector(
    metrics: &RouteMetrics,
    from: Endpoint<'_>,
    to: Endpoint<'_>,
) -> ConnectorRoute {
    let start = Point::new(
        shifted_start_x(metrics, from.bar, to.bar),
        metrics.row_top(from.task.index()) + metrics.bar_height,
    );
    let end = Point::new(
        to.bar.x() - END_INSET,
        metrics.row_top(to.task.index()) + metrics.bar_height / 2.0,
    );

    let from_is_below_to = from.task.index() > to.task.index();
    let sweep = if from_is_below_to {
        Sweep::Clockwise
    } else {
        Sweep::CounterClockwise
    };
    let bend = |curve: f64| if from_is_below_to { -curve } else { curve };

    trace!(
        "route {} -> {}: start=({}, {}) end=({}, {}) below={from_is_below_to}",
        from.task.id(),
        to.task.id(),
        start.x,
        start.y,
        end.x,
        end.y
    );

    let mut path = PathData::new();
    path.push(PathCommand::MoveTo { x: start.x, y: start.y });

    let (kind, curve) = if to.bar.x() <= from.bar.x() + metrics.padding {
        let mut curve = metrics.arrow_curve;
        let mut drop = metrics.padding / 2.0 - curve;
        if drop < 0.0 {
            drop = 0.0;
            curve = metrics.padding / 2.0;
        }
        let curve_y = bend(curve);
        let down_to = to.bar.center_y() - curve_y;
        let left = to.bar.x() - metrics.padding;

        path.extend([
            PathCommand::VerticalBy { dy: drop },
            PathCommand::ArcBy { radius: curve, sweep: Sweep::Clockwise, dx: -curve, dy: curve },
            PathCommand::HorizontalTo { x: left },
            PathCommand::ArcBy { radius: curve, sweep, dx: -curve, dy: curve_y },
            PathCommand::VerticalTo { y: down_to },
            PathCommand::ArcBy { radius: curve, sweep, dx: curve, dy: curve_y },
            PathCommand::LineTo { x: end.x, y: end.y },
        ]);
        (RouteKind::Wrap, curve)
    } else {
        let mut curve = metrics.arrow_curve;
        if end.x < start.x + curve {
            curve = end.x - start.x;
        }
        let offset = end.y - bend(curve);

        path.extend([
            PathCommand::VerticalTo { y: offset },
            PathCommand::ArcBy { radius: curve, sweep, dx: curve, dy: curve },
            PathCommand::LineTo { x: end.x, y: end.y },
        ]);
        (RouteKind::Direct, curve)
    };

    push_arrowhead(&mut path);

    ConnectorRoute {
        kind,
        start,
        end,
        curve,
        path,
    }
}

fn push_arrowhead(path: &mut PathData) {
    path.extend([
        PathCommand::MoveBy { dx: -ARROWHEAD_OFFSET, dy: -ARROWHEAD_OFFSET },
        PathCommand::LineBy { dx: ARROWHEAD_OFFSET, dy: ARROWHEAD_OFFSET },
        PathCommand::LineBy { dx: -ARROWHEAD_OFFSET, dy: ARROWHEAD_OFFSET },
    ]);
}

/// Start x after moving left off an overlapping target, plus one unconditional step.
fn shifted_start_x(metrics: &RouteMetrics, from: &Bar, to: &Bar) -> f64 {
    let start_x = from.center_x();
    let steps = start_shift_steps(start_x, from.x(), to.x(), metrics.padding);
    start_x - (steps + 1.0) * START_SHIFT_STEP
}

/// Smallest number of steps after which the target clears the start by `padding`, or the start
/// reaches `padding` right of the source's left edge. Zero if neither is violated to begin with.
pub(crate) fn start_shift_steps(start_x: f64, from_x: f64, to_x: f64, padding: f64) -> f64 {
    let keeps_shifting = |steps: f64| {
        let x = start_x - steps * START_SHIFT_STEP;
        to_x < x + padding && x > from_x + padding
    };
    if !keeps_shifting(0.0) {
        return 0.0;
    }

    let clear_target = ((start_x + padding - to_x) / START_SHIFT_STEP).ceil();
    let reach_source_edge = ((start_x - from_x - padding) / START_SHIFT_STEP).ceil();
    let mut steps = clear_target.min(reach_source_edge).max(1.0);

    // the division can round across a step boundary; settle on the exact threshold
    while steps > 1.0 && !keeps_shifting(steps - 1.0) {
        steps -= 1.0;
    }
    while keeps_shifting(steps) {
        steps += 1.0;
    }
    steps
}

#[cfg(test)]
mod tests;
