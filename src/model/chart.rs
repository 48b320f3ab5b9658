// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of gantt-connectors and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeMap;
use std::fmt;

use log::warn;

use super::bar::Bar;
use super::ids::TaskId;
use super::options::{ChartConfig, ChartOptions};
use super::task::Task;

/// Row handle into a [`Chart`]'s task and bar tables.
///
/// Connectors hold these instead of references; the chart controls task and bar lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskIndex(usize);

impl TaskIndex {
    pub fn get(self) -> usize {
        self.0
    }
}

impl fmt::Display for TaskIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A task together with its bar, borrowed from a chart for one computation.
#[derive(Debug, Clone, Copy)]
pub struct Endpoint<'a> {
    pub task: &'a Task,
    pub bar: &'a Bar,
}

impl<'a> Endpoint<'a> {
    pub fn new(task: &'a Task, bar: &'a Bar) -> Self {
        Self { task, bar }
    }
}

/// A directed dependency edge: `to` depends on `from`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DependencyEdge {
    pub from: TaskIndex,
    pub to: TaskIndex,
}

/// The externally owned state a render pass reads: options, config, tasks and their bars.
#[derive(Debug, Clone, PartialEq)]
pub struct Chart {
    options: ChartOptions,
    config: ChartConfig,
    tasks: Vec<Task>,
    bars: Vec<Bar>,
    by_id: BTreeMap<TaskId, TaskIndex>,
}

impl Chart {
    pub fn new(options: ChartOptions, config: ChartConfig) -> Self {
        Self {
            options,
            config,
            tasks: Vec::new(),
            bars: Vec::new(),
            by_id: BTreeMap::new(),
        }
    }

    pub fn options(&self) -> &ChartOptions {
        &self.options
    }

    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    /// Appends a task and its bar. The task's row index becomes its table position.
    pub fn push_task(&mut self, mut task: Task, bar: Bar) -> Result<TaskIndex, ChartError> {
        if self.by_id.contains_key(task.id()) {
            return Err(ChartError::DuplicateTask {
                task_id: task.id().clone(),
            });
        }

        let index = TaskIndex(self.tasks.len());
        task.set_index(index.0);
        self.by_id.insert(task.id().clone(), index);
        self.tasks.push(task);
        self.bars.push(bar);
        Ok(index)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn task_index(&self, task_id: &TaskId) -> Option<TaskIndex> {
        self.by_id.get(task_id).copied()
    }

    pub fn task(&self, index: TaskIndex) -> Option<&Task> {
        self.tasks.get(index.0)
    }

    pub fn bar(&self, index: TaskIndex) -> Option<&Bar> {
        self.bars.get(index.0)
    }

    /// Mutable bar access for the external layout (drag, resize, re-layout).
    pub fn bar_mut(&mut self, index: TaskIndex) -> Option<&mut Bar> {
        self.bars.get_mut(index.0)
    }

    /// Records the result of an external critical-path analysis. Returns `false` for an unknown
    /// index.
    pub fn set_critical(&mut self, index: TaskIndex, is_critical: bool) -> bool {
        match self.tasks.get_mut(index.0) {
            Some(task) => {
                task.set_critical(is_critical);
                true
            }
            None => false,
        }
    }

    pub fn endpoint(&self, index: TaskIndex) -> Option<Endpoint<'_>> {
        let task = self.tasks.get(index.0)?;
        let bar = self.bars.get(index.0)?;
        Some(Endpoint::new(task, bar))
    }

    pub fn tasks(&self) -> impl Iterator<Item = (TaskIndex, &Task)> + '_ {
        self.tasks
            .iter()
            .enumerate()
            .map(|(idx, task)| (TaskIndex(idx), task))
    }

    /// Every resolvable dependency edge, in task order then dependency-list order.
    ///
    /// Dependencies naming an unknown task are skipped; the chart does not draw what it cannot
    /// resolve.
    pub fn dependency_edges(&self) -> Vec<DependencyEdge> {
        let mut edges = Vec::new();
        for (to, task) in self.tasks() {
            for dependency in task.dependencies() {
                match self.task_index(dependency) {
                    Some(from) => edges.push(DependencyEdge { from, to }),
                    None => warn!(
                        "task {} depends on unknown task {dependency}; skipping edge",
                        task.id()
                    ),
                }
            }
        }
        edges
    }
}

impl Default for Chart {
    fn default() -> Self {
        Self::new(ChartOptions::default(), ChartConfig::default())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChartError {
    DuplicateTask { task_id: TaskId },
}

impl fmt::Display for ChartError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateTask { task_id } => write!(f, "duplicate task id {task_id}"),
        }
    }
}

impl std::error::Error for ChartError {}
