// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of gantt-connectors and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use log::debug;

use super::connector::{Connector, ConnectorError};
use crate::model::{Chart, TaskIndex};

/// All connectors of one chart, one per resolvable dependency edge.
///
/// Updates run sequentially on the caller's thread; connectors share no state.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ConnectorSet {
    connectors: Vec<Connector>,
}

impl ConnectorSet {
    pub fn from_chart(chart: &Chart) -> Result<Self, ConnectorError> {
        let edges = chart.dependency_edges();
        let mut connectors = Vec::with_capacity(edges.len());
        for edge in edges {
            connectors.push(Connector::new(chart, edge.from, edge.to)?);
        }
        debug!("built {} connectors for {} tasks", connectors.len(), chart.len());
        Ok(Self { connectors })
    }

    pub fn len(&self) -> usize {
        self.connectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.connectors.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Connector> {
        self.connectors.iter()
    }

    pub fn get(&self, idx: usize) -> Option<&Connector> {
        self.connectors.get(idx)
    }

    pub fn connectors_for_task(&self, task: TaskIndex) -> impl Iterator<Item = &Connector> + '_ {
        self.connectors.iter().filter(move |connector| connector.touches(task))
    }

    pub fn update_all(&mut self, chart: &Chart) -> Result<(), ConnectorError> {
        for connector in &mut self.connectors {
            connector.update(chart)?;
        }
        Ok(())
    }

    /// Updates only the connectors attached to `task`, e.g. after its bar was dragged.
    /// Returns how many were updated.
    pub fn update_for_task(
        &mut self,
        chart: &Chart,
        task: TaskIndex,
    ) -> Result<usize, ConnectorError> {
        let mut updated = 0;
        for connector in self.connectors.iter_mut().filter(|connector| connector.touches(task)) {
            connector.update(chart)?;
            updated += 1;
        }
        Ok(updated)
    }

    pub fn refresh_critical_all(&mut self, chart: &Chart) -> Result<(), ConnectorError> {
        for connector in &mut self.connectors {
            connector.refresh_critical(chart)?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a ConnectorSet {
    type Item = &'a Connector;
    type IntoIter = std::slice::Iter<'a, Connector>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
