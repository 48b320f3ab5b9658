// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of gantt-connectors and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use chrono::NaiveDateTime;

use super::dependency::DependencyKind;
use super::ids::TaskId;

/// A scheduled activity as seen by the connector core.
///
/// Connectors only read tasks. Row placement (`index`) and the critical flag are owned by the
/// surrounding chart and its critical-path analysis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    id: TaskId,
    start: NaiveDateTime,
    end: NaiveDateTime,
    index: usize,
    is_critical: bool,
    dependency_type: Option<DependencyKind>,
    dependencies: Vec<TaskId>,
}

impl Task {
    pub fn new(id: TaskId, start: NaiveDateTime, end: NaiveDateTime) -> Result<Self, TaskError> {
        if end < start {
            return Err(TaskError::EndBeforeStart { id, start, end });
        }
        Ok(Self {
            id,
            start,
            end,
            index: 0,
            is_critical: false,
            dependency_type: None,
            dependencies: Vec::new(),
        })
    }

    #[cfg(test)]
    pub(crate) fn with_index(mut self, index: usize) -> Self {
        self.index = index;
        self
    }

    pub fn with_critical(mut self, is_critical: bool) -> Self {
        self.is_critical = is_critical;
        self
    }

    pub fn with_dependency_type(mut self, kind: DependencyKind) -> Self {
        self.dependency_type = Some(kind);
        self
    }

    pub fn with_dependencies(mut self, dependencies: impl IntoIterator<Item = TaskId>) -> Self {
        self.dependencies = dependencies.into_iter().collect();
        self
    }

    pub fn id(&self) -> &TaskId {
        &self.id
    }

    pub fn start(&self) -> NaiveDateTime {
        self.start
    }

    pub fn end(&self) -> NaiveDateTime {
        self.end
    }

    /// Zero-based row position; determines vertical stacking.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn is_critical(&self) -> bool {
        self.is_critical
    }

    /// Per-task constraint override; `None` falls back to the chart-wide default.
    pub fn dependency_type(&self) -> Option<&DependencyKind> {
        self.dependency_type.as_ref()
    }

    /// Ids of the tasks this task depends on (the sources of its incoming edges).
    pub fn dependencies(&self) -> &[TaskId] {
        &self.dependencies
    }

    pub(crate) fn set_index(&mut self, index: usize) {
        self.index = index;
    }

    pub(crate) fn set_critical(&mut self, is_critical: bool) {
        self.is_critical = is_critical;
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskError {
    EndBeforeStart {
        id: TaskId,
        start: NaiveDateTime,
        end: NaiveDateTime,
    },
}

impl fmt::Display for TaskError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EndBeforeStart { id, start, end } => {
                write!(f, "task {id} ends ({end}) before it starts ({start})")
            }
        }
    }
}

impl std::error::Error for TaskError {}
