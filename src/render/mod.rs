// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of gantt-connectors and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Connector lifecycle and SVG output.
//!
//! A [`Connector`] ties classification and routing together and owns its drawn [`PathElement`].
//! [`ConnectorSet`] manages every connector of a chart; [`render_connectors_svg`] serializes them.

pub mod connector;
pub mod element;
pub mod set;
pub mod style;
pub mod svg;

pub use connector::{Connector, ConnectorError};
pub use element::PathElement;
pub use set::ConnectorSet;
pub use style::{resolve_arrow_class, ArrowClass};
pub use svg::{render_chart_connectors_svg, render_connectors_svg};
