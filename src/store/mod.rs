// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of gantt-connectors and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Chart documents on disk.
//!
//! A chart document is the JSON description of one render pass: chart options, layout config and
//! the tasks with their already laid-out bars. The store module parses and validates it into a
//! [`Chart`](crate::model::Chart) and publishes its JSON schema.

pub mod chart_document;

pub use chart_document::{
    chart_document_schema, load_chart_document, parse_chart_document, ChartDocument,
    DependenciesJson, StoreError, TaskJson,
};
