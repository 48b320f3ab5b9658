// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of gantt-connectors and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use log::debug;

use super::element::PathElement;
use super::style::{resolve_arrow_class, ArrowClass};
use crate::classify::{is_critical_dependency, is_invalid_dependency};
use crate::layout::{route_connector, ConnectorRoute, PathData, RouteKind, RouteMetrics};
use crate::model::{Chart, Endpoint, TaskIndex};

/// A rendered dependency arrow between two chart rows.
///
/// Holds only row handles into the chart. `is_critical` is computed once at construction;
/// [`Connector::update`] recomputes the path and `is_invalid` from the chart's current state and
/// leaves `is_critical` alone. Use [`Connector::refresh_critical`] after the critical-path
/// analysis has rerun.
#[derive(Debug, Clone, PartialEq)]
pub struct Connector {
    from: TaskIndex,
    to: TaskIndex,
    is_critical: bool,
    is_invalid: bool,
    route_kind: RouteKind,
    path: PathData,
    element: PathElement,
}

impl Connector {
    pub fn new(chart: &Chart, from: TaskIndex, to: TaskIndex) -> Result<Self, ConnectorError> {
        let (from_end, to_end) = endpoints(chart, from, to)?;
        let options = chart.options();

        let is_critical = is_critical_dependency(options, from_end.task, to_end.task);
        let is_invalid = is_invalid_dependency(options, from_end, to_end);
        let route = compute_route(chart, from_end, to_end);
        let class = resolve_arrow_class(is_invalid, is_critical);

        debug!(
            "connector {} -> {}: {:?} route, class {:?}",
            from_end.task.id(),
            to_end.task.id(),
            route.kind(),
            class
        );

        let element =
            PathElement::new(route.path().to_string(), from_end.task.id(), to_end.task.id(), class);
        let route_kind = route.kind();

        Ok(Self {
            from,
            to,
            is_critical,
            is_invalid,
            route_kind,
            path: route.into_path(),
            element,
        })
    }

    /// Re-lays the connector after bars may have moved.
    pub fn update(&mut self, chart: &Chart) -> Result<(), ConnectorError> {
        let (from_end, to_end) = endpoints(chart, self.from, self.to)?;

        let route = compute_route(chart, from_end, to_end);
        self.route_kind = route.kind();
        self.path = route.into_path();
        self.element.set_d(self.path.to_string());

        self.is_invalid = is_invalid_dependency(chart.options(), from_end, to_end);
        self.element.set_class(self.class());

        debug!(
            "connector {} -> {} updated: {:?} route, class {:?}",
            from_end.task.id(),
            to_end.task.id(),
            self.route_kind,
            self.class()
        );
        Ok(())
    }

    /// Recomputes critical-path membership and reapplies the class.
    pub fn refresh_critical(&mut self, chart: &Chart) -> Result<(), ConnectorError> {
        let (from_end, to_end) = endpoints(chart, self.from, self.to)?;
        self.is_critical = is_critical_dependency(chart.options(), from_end.task, to_end.task);
        self.element.set_class(self.class());
        Ok(())
    }

    pub fn from(&self) -> TaskIndex {
        self.from
    }

    pub fn to(&self) -> TaskIndex {
        self.to
    }

    pub fn touches(&self, task: TaskIndex) -> bool {
        self.from == task || self.to == task
    }

    pub fn is_critical(&self) -> bool {
        self.is_critical
    }

    pub fn is_invalid(&self) -> bool {
        self.is_invalid
    }

    pub fn class(&self) -> ArrowClass {
        resolve_arrow_class(self.is_invalid, self.is_critical)
    }

    pub fn route_kind(&self) -> RouteKind {
        self.route_kind
    }

    pub fn path(&self) -> &PathData {
        &self.path
    }

    pub fn element(&self) -> &PathElement {
        &self.element
    }
}

fn compute_route(chart: &Chart, from: Endpoint<'_>, to: Endpoint<'_>) -> ConnectorRoute {
    let metrics = RouteMetrics::new(chart.options(), chart.config());
    route_connector(&metrics, from, to)
}

fn endpoints(
    chart: &Chart,
    from: TaskIndex,
    to: TaskIndex,
) -> Result<(Endpoint<'_>, Endpoint<'_>), ConnectorError> {
    let from_end = chart
        .endpoint(from)
        .ok_or(ConnectorError::UnknownTask { index: from })?;
    let to_end = chart
        .endpoint(to)
        .ok_or(ConnectorError::UnknownTask { index: to })?;
    Ok((from_end, to_end))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConnectorError {
    UnknownTask { index: TaskIndex },
}

impl fmt::Display for ConnectorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownTask { index } => write!(f, "connector references unknown task {index}"),
        }
    }
}

impl std::error::Error for ConnectorError {}
