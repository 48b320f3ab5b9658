// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of gantt-connectors and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::dependency::DependencyKind;

pub const DEFAULT_PADDING: f64 = 18.0;
pub const DEFAULT_BAR_HEIGHT: f64 = 20.0;
pub const DEFAULT_ARROW_CURVE: f64 = 5.0;
pub const DEFAULT_HEADER_HEIGHT: f64 = 50.0;

/// Chart-wide options that stay fixed for a render pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct ChartOptions {
    /// Gap unit between rows and around bars.
    pub padding: f64,
    pub bar_height: f64,
    /// Nominal corner radius of connector curves.
    pub arrow_curve: f64,
    /// Enables critical-path styling of connectors.
    pub critical_path: bool,
    /// Constraint kind for tasks without their own override, e.g. `fixed` or `finish-to-start`.
    #[schemars(with = "String")]
    pub dependencies_type: DependencyKind,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            padding: DEFAULT_PADDING,
            bar_height: DEFAULT_BAR_HEIGHT,
            arrow_curve: DEFAULT_ARROW_CURVE,
            critical_path: false,
            dependencies_type: DependencyKind::Fixed,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct ChartConfig {
    /// Vertical offset before the first row.
    pub header_height: f64,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            header_height: DEFAULT_HEADER_HEIGHT,
        }
    }
}
