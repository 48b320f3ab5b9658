// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of gantt-connectors and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::{NaiveDate, NaiveDateTime};
use log::debug;
use schemars::{JsonSchema, Schema};
use serde::{Deserialize, Serialize};

use crate::model::{
    Bar, Chart, ChartConfig, ChartError, ChartOptions, DependencyKind, IdError, Task, TaskError,
    TaskId,
};

const DATE_TIME_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
];
const DATE_FORMAT: &str = "%Y-%m-%d";

/// On-disk description of one render pass: options, config and the laid-out tasks.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ChartDocument {
    #[serde(default)]
    pub options: ChartOptions,
    #[serde(default)]
    pub config: ChartConfig,
    #[serde(default)]
    pub tasks: Vec<TaskJson>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct TaskJson {
    pub id: String,
    /// `YYYY-MM-DD`, optionally followed by ` HH:MM[:SS]` or `THH:MM[:SS]`.
    pub start: String,
    /// Same formats as `start`; a date-only end means the end of that day.
    pub end: String,
    #[serde(default)]
    pub dependencies: DependenciesJson,
    /// Per-task constraint kind; blank falls back to the chart default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dependencies_type: Option<String>,
    #[serde(default)]
    pub critical: bool,
    pub bar: Bar,
}

/// Either a list of task ids or a comma-separated string of them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum DependenciesJson {
    List(Vec<String>),
    Joined(String),
}

impl Default for DependenciesJson {
    fn default() -> Self {
        Self::List(Vec::new())
    }
}

impl DependenciesJson {
    pub fn ids(&self) -> Vec<&str> {
        match self {
            Self::List(ids) => ids
                .iter()
                .map(|id| id.trim())
                .filter(|id| !id.is_empty())
                .collect(),
            Self::Joined(raw) => raw
                .split(',')
                .map(str::trim)
                .filter(|id| !id.is_empty())
                .collect(),
        }
    }
}

impl ChartDocument {
    pub fn from_json(json: &str) -> Result<Self, StoreError> {
        serde_json::from_str(json).map_err(|source| StoreError::Parse { source })
    }

    /// Builds the chart. Tasks keep document order, which is also their row order.
    pub fn to_chart(&self) -> Result<Chart, StoreError> {
        let mut chart = Chart::new(self.options.clone(), self.config);
        for task_json in &self.tasks {
            let task = task_from_json(task_json)?;
            chart
                .push_task(task, task_json.bar)
                .map_err(|source| StoreError::Chart { source })?;
        }
        debug!("chart document: {} tasks", chart.len());
        Ok(chart)
    }
}

fn task_from_json(task_json: &TaskJson) -> Result<Task, StoreError> {
    let id = parse_id("tasks.id", &task_json.id)?;
    let start = parse_instant(&task_json.start, DayBoundary::Start).ok_or_else(|| {
        StoreError::InvalidDate {
            task_id: task_json.id.clone(),
            field: "start",
            value: task_json.start.clone(),
        }
    })?;
    let end = parse_instant(&task_json.end, DayBoundary::End).ok_or_else(|| {
        StoreError::InvalidDate {
            task_id: task_json.id.clone(),
            field: "end",
            value: task_json.end.clone(),
        }
    })?;

    let dependencies = task_json
        .dependencies
        .ids()
        .into_iter()
        .map(|dep| parse_id("tasks.dependencies", dep))
        .collect::<Result<Vec<_>, _>>()?;

    let mut task = Task::new(id, start, end)
        .map_err(|source| StoreError::InvalidTask { source })?
        .with_critical(task_json.critical)
        .with_dependencies(dependencies);
    let override_kind = task_json
        .dependencies_type
        .as_deref()
        .map(str::trim)
        .filter(|kind| !kind.is_empty());
    if let Some(kind) = override_kind {
        task = task.with_dependency_type(DependencyKind::parse(kind));
    }
    Ok(task)
}

fn parse_id(field: &'static str, value: &str) -> Result<TaskId, StoreError> {
    TaskId::new(value).map_err(|source| StoreError::InvalidId {
        field,
        value: value.to_owned(),
        source,
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DayBoundary {
    Start,
    End,
}

/// Parses an instant. A bare date is midnight for a start and the following midnight for an end.
fn parse_instant(raw: &str, boundary: DayBoundary) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    for format in DATE_TIME_FORMATS {
        if let Ok(instant) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(instant);
        }
    }

    let date = NaiveDate::parse_from_str(raw, DATE_FORMAT).ok()?;
    match boundary {
        DayBoundary::Start => date.and_hms_opt(0, 0, 0),
        DayBoundary::End => date.succ_opt()?.and_hms_opt(0, 0, 0),
    }
}

pub fn parse_chart_document(json: &str) -> Result<Chart, StoreError> {
    ChartDocument::from_json(json)?.to_chart()
}

pub fn load_chart_document(path: &Path) -> Result<Chart, StoreError> {
    let json = fs::read_to_string(path).map_err(|source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let document: ChartDocument = serde_json::from_str(&json).map_err(|source| StoreError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("loaded chart document from {}", path.display());
    document.to_chart()
}

pub fn chart_document_schema() -> Schema {
    schemars::schema_for!(ChartDocument)
}

#[derive(Debug)]
pub enum StoreError {
    Io {
        path: PathBuf,
        source: io::Error,
    },
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
    Parse {
        source: serde_json::Error,
    },
    InvalidId {
        field: &'static str,
        value: String,
        source: IdError,
    },
    InvalidDate {
        task_id: String,
        field: &'static str,
        value: String,
    },
    InvalidTask {
        source: TaskError,
    },
    Chart {
        source: ChartError,
    },
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "io error at {path:?}: {source}"),
            Self::Json { path, source } => write!(f, "json error at {path:?}: {source}"),
            Self::Parse { source } => write!(f, "invalid chart document: {source}"),
            Self::InvalidId {
                field,
                value,
                source,
            } => write!(f, "invalid id for {field}: {value:?}: {source}"),
            Self::InvalidDate {
                task_id,
                field,
                value,
            } => write!(f, "task {task_id}: invalid {field} date {value:?}"),
            Self::InvalidTask { source } => write!(f, "invalid task: {source}"),
            Self::Chart { source } => write!(f, "invalid chart: {source}"),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Json { source, .. } => Some(source),
            Self::Parse { source } => Some(source),
            Self::InvalidId { source, .. } => Some(source),
            Self::InvalidDate { .. } => None,
            Self::InvalidTask { source } => Some(source),
            Self::Chart { source } => Some(source),
        }
    }
}
