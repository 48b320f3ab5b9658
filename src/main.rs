// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of gantt-connectors and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! `gantt-connectors` CLI entrypoint.
//!
//! Reads a chart document (JSON) and writes the `<g class="arrow">` SVG group with one path per
//! dependency. `--schema` prints the chart document JSON schema instead.
//!
//! Environment:
//! - `RUST_LOG`: log level (default: warn)

use std::error::Error;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

use log::info;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::FmtSubscriber;

fn print_usage(program: &str) {
    eprintln!(
        "Usage:\n  {program} <chart.json> [--out <file>]\n  {program} --schema\n\nRenders the dependency connectors of a chart document as an SVG group.\nOutput goes to stdout unless --out is given.\n\n--schema prints the JSON schema of the chart document format."
    );
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct CliOptions {
    schema: bool,
    chart: Option<PathBuf>,
    out: Option<PathBuf>,
}

fn parse_options(mut args: impl Iterator<Item = String>) -> Result<CliOptions, ()> {
    let mut options = CliOptions::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--schema" => {
                if options.schema {
                    return Err(());
                }
                options.schema = true;
            }
            "--out" | "-o" => {
                if options.out.is_some() {
                    return Err(());
                }
                let path = args.next().ok_or(())?;
                options.out = Some(PathBuf::from(path));
            }
            _ if arg.starts_with('-') => return Err(()),
            _ => {
                if options.chart.is_some() {
                    return Err(());
                }
                options.chart = Some(PathBuf::from(arg));
            }
        }
    }

    if options.schema && options.chart.is_some() {
        return Err(());
    }

    if !options.schema && options.chart.is_none() {
        return Err(());
    }

    Ok(options)
}

fn init_logging() {
    FmtSubscriber::builder()
        .with_max_level(
            std::env::var("RUST_LOG")
                .ok()
                .and_then(|level| level.parse::<LevelFilter>().ok())
                .unwrap_or(LevelFilter::WARN),
        )
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

fn write_output(out: Option<&PathBuf>, text: &str) -> Result<(), Box<dyn Error>> {
    match out {
        Some(path) => {
            fs::write(path, text)?;
            info!("wrote {} bytes to {}", text.len(), path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(text.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}

fn main() {
    let result = (|| -> Result<(), Box<dyn Error>> {
        let mut args = std::env::args();
        let program = args.next().unwrap_or_else(|| "gantt-connectors".to_owned());

        let options = match parse_options(args) {
            Ok(options) => options,
            Err(()) => {
                print_usage(&program);
                std::process::exit(2);
            }
        };

        init_logging();

        if options.schema {
            let schema = gantt_connectors::store::chart_document_schema();
            let mut json = serde_json::to_string_pretty(&schema)?;
            json.push('\n');
            return write_output(options.out.as_ref(), &json);
        }

        let Some(chart_path) = options.chart.as_deref() else {
            print_usage(&program);
            std::process::exit(2);
        };
        let chart = gantt_connectors::store::load_chart_document(chart_path)?;
        let svg = gantt_connectors::render::render_chart_connectors_svg(&chart)?;
        info!("rendered connectors for {} tasks", chart.len());
        write_output(options.out.as_ref(), &svg)
    })();

    if let Err(err) = result {
        eprintln!("gantt-connectors: {err}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::{parse_options, CliOptions};

    fn args(raw: &[&str]) -> impl Iterator<Item = String> {
        raw.iter().map(|arg| (*arg).to_owned()).collect::<Vec<_>>().into_iter()
    }

    #[test]
    fn parses_chart_path() {
        let options = parse_options(args(&["chart.json"])).expect("parse options");
        assert_eq!(
            options,
            CliOptions {
                chart: Some(PathBuf::from("chart.json")),
                ..CliOptions::default()
            }
        );
    }

    #[test]
    fn parses_out_before_or_after_chart() {
        let expected = CliOptions {
            chart: Some(PathBuf::from("chart.json")),
            out: Some(PathBuf::from("arrows.svg")),
            ..CliOptions::default()
        };
        let options =
            parse_options(args(&["chart.json", "--out", "arrows.svg"])).expect("parse options");
        assert_eq!(options, expected);
        let options = parse_options(args(&["-o", "arrows.svg", "chart.json"])).expect("parse options");
        assert_eq!(options, expected);
    }

    #[test]
    fn parses_schema_flag() {
        let options = parse_options(args(&["--schema"])).expect("parse options");
        assert!(options.schema);
        assert_eq!(options.chart, None);
    }

    #[test]
    fn rejects_missing_chart() {
        assert!(parse_options(std::iter::empty()).is_err());
        assert!(parse_options(args(&["--out", "arrows.svg"])).is_err());
    }

    #[test]
    fn rejects_invalid_combinations() {
        assert!(parse_options(args(&["--schema", "chart.json"])).is_err());
        assert!(parse_options(args(&["a.json", "b.json"])).is_err());
        assert!(parse_options(args(&["chart.json", "--out"])).is_err());
        assert!(parse_options(args(&["chart.json", "--out", "a", "--out", "b"])).is_err());
        assert!(parse_options(args(&["chart.json", "--verbose"])).is_err());
        assert!(parse_options(args(&["--schema", "--schema"])).is_err());
    }
}
