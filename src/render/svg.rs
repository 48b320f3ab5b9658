// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of gantt-connectors and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::connector::ConnectorError;
use super::set::ConnectorSet;
use crate::model::Chart;

/// The group wrapping every connector path, one `<path>` per line.
pub fn render_connectors_svg(set: &ConnectorSet) -> String {
    let mut out = String::from("<g class=\"arrow\">\n");
    for connector in set {
        out.push_str(&connector.element().to_string());
        out.push('\n');
    }
    out.push_str("</g>\n");
    out
}

pub fn render_chart_connectors_svg(chart: &Chart) -> Result<String, ConnectorError> {
    let set = ConnectorSet::from_chart(chart)?;
    Ok(render_connectors_svg(&set))
}
