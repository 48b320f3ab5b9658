// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of gantt-connectors and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use super::style::ArrowClass;
use crate::model::TaskId;

/// The drawn primitive of a connector: an SVG `<path>` and its attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathElement {
    d: String,
    data_from: String,
    data_to: String,
    class: ArrowClass,
}

impl PathElement {
    pub fn new(d: impl Into<String>, from: &TaskId, to: &TaskId, class: ArrowClass) -> Self {
        Self {
            d: d.into(),
            data_from: from.as_str().to_owned(),
            data_to: to.as_str().to_owned(),
            class,
        }
    }

    pub fn d(&self) -> &str {
        &self.d
    }

    pub fn data_from(&self) -> &str {
        &self.data_from
    }

    pub fn data_to(&self) -> &str {
        &self.data_to
    }

    pub fn class(&self) -> ArrowClass {
        self.class
    }

    pub fn set_d(&mut self, d: impl Into<String>) {
        self.d = d.into();
    }

    pub fn set_class(&mut self, class: ArrowClass) {
        self.class = class;
    }

    /// Attribute lookup by SVG name (`d`, `data-from`, `data-to`, `class`).
    pub fn attribute(&self, name: &str) -> Option<&str> {
        match name {
            "d" => Some(&self.d),
            "data-from" => Some(&self.data_from),
            "data-to" => Some(&self.data_to),
            "class" => Some(self.class.as_str()),
            _ => None,
        }
    }
}

impl fmt::Display for PathElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            r#"<path d="{}" data-from="{}" data-to="{}""#,
            escape_xml_attr(&self.d),
            escape_xml_attr(&self.data_from),
            escape_xml_attr(&self.data_to)
        )?;
        if self.class != ArrowClass::Normal {
            write!(f, r#" class="{}""#, self.class.as_str())?;
        }
        f.write_str("/>")
    }
}

pub(crate) fn escape_xml_attr(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(ch),
        }
    }
    out
}
