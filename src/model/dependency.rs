// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of gantt-connectors and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use smol_str::SmolStr;

/// The temporal constraint a dependency edge is checked against.
///
/// Parsing is total: names that are not recognized are kept as [`DependencyKind::Other`] and are
/// never reported as violated.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum DependencyKind {
    /// Purely positional: the target bar must not start left of the source bar.
    #[default]
    Fixed,
    FinishToStart,
    StartToStart,
    FinishToFinish,
    StartToFinish,
    Other(SmolStr),
}

impl DependencyKind {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Fixed => "fixed",
            Self::FinishToStart => "finish-to-start",
            Self::StartToStart => "start-to-start",
            Self::FinishToFinish => "finish-to-finish",
            Self::StartToFinish => "start-to-finish",
            Self::Other(name) => name.as_str(),
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, Self::Other(_))
    }

    pub fn parse(name: &str) -> Self {
        match name {
            "fixed" => Self::Fixed,
            "finish-to-start" => Self::FinishToStart,
            "start-to-start" => Self::StartToStart,
            "finish-to-finish" => Self::FinishToFinish,
            "start-to-finish" => Self::StartToFinish,
            other => Self::Other(SmolStr::new(other)),
        }
    }
}

impl fmt::Display for DependencyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DependencyKind {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl Serialize for DependencyKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for DependencyKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::parse(&raw))
    }
}
