// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of gantt-connectors and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

/// Visual class of a connector, ordered by precedence: a higher variant always wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum ArrowClass {
    #[default]
    Normal,
    Critical,
    Invalid,
}

impl ArrowClass {
    /// The CSS class written to the primitive; empty for [`ArrowClass::Normal`].
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Normal => "",
            Self::Critical => "arrow-critical",
            Self::Invalid => "arrow-invalid",
        }
    }
}

impl fmt::Display for ArrowClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Highest-precedence class among those that apply.
pub fn resolve_arrow_class(is_invalid: bool, is_critical: bool) -> ArrowClass {
    [
        (true, ArrowClass::Normal),
        (is_critical, ArrowClass::Critical),
        (is_invalid, ArrowClass::Invalid),
    ]
    .into_iter()
    .filter_map(|(applies, class)| applies.then_some(class))
    .max()
    .unwrap_or_default()
}
