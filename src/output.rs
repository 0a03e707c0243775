//! Rendering of command results for the terminal.

use std::fmt::Write as _;

use deviceinfo_classifier::Classification;
use deviceinfo_presenter::{format, MemoryPage};
use serde::Serialize;

use crate::app::ExecutionReport;
use crate::errors::{DeviceInfoError, DeviceInfoResult};

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Human,
    Json,
    Yaml,
    Html,
}

/// Classification as the page would show it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ClassificationView {
    pub window_size: String,
    pub screen_type: String,
    pub screen_position: String,
}

impl From<&Classification> for ClassificationView {
    fn from(labels: &Classification) -> Self {
        Self {
            window_size: labels.window_state.to_string(),
            screen_type: format::screen_type(labels.screen_role).text().to_string(),
            screen_position: labels.screen_position.to_string(),
        }
    }
}

pub fn render_inspection(
    format: OutputFormat,
    report: &ExecutionReport,
    page: &MemoryPage,
) -> DeviceInfoResult<String> {
    match format {
        OutputFormat::Human => Ok(render_report_table(report)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
        OutputFormat::Yaml => Ok(serde_yaml::to_string(report)?),
        OutputFormat::Html => Ok(page.render_html()),
    }
}

pub fn render_classification(
    format: OutputFormat,
    labels: &Classification,
) -> DeviceInfoResult<String> {
    let view = ClassificationView::from(labels);
    match format {
        OutputFormat::Human => Ok(format!(
            "Window Size:     {}\nScreen Type:     {}\nScreen Position: {}\n",
            view.window_size, view.screen_type, view.screen_position
        )),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&view)?),
        OutputFormat::Yaml => Ok(serde_yaml::to_string(&view)?),
        OutputFormat::Html => Err(DeviceInfoError::invalid_argument(
            "html output is only available for inspect",
        )),
    }
}

fn render_report_table(report: &ExecutionReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{:<24} {:<20} {}", "TARGET", "VALUE", "STATUS");
    for outcome in &report.outcomes {
        let status = if outcome.written {
            outcome.status.to_string()
        } else {
            "missing target".to_string()
        };
        let _ = writeln!(
            out,
            "{:<24} {:<20} {}",
            outcome.target.as_str(),
            outcome.text,
            status
        );
    }
    out
}

/// Parse `WIDTHxHEIGHT`, e.g. `1024x768`.
pub fn parse_size(raw: &str) -> DeviceInfoResult<(f64, f64)> {
    parse_pair(raw, 'x')
}

/// Parse `X,Y`, e.g. `-1280,0`.
pub fn parse_position(raw: &str) -> DeviceInfoResult<(f64, f64)> {
    parse_pair(raw, ',')
}

fn parse_pair(raw: &str, separator: char) -> DeviceInfoResult<(f64, f64)> {
    let (first, second) = raw.split_once(separator).ok_or_else(|| {
        DeviceInfoError::invalid_argument(format!("expected A{separator}B, got {raw:?}"))
    })?;
    let parse = |part: &str| {
        part.trim().parse::<f64>().map_err(|_| {
            DeviceInfoError::invalid_argument(format!("{part:?} is not a number in {raw:?}"))
        })
    };
    Ok((parse(first)?, parse(second)?))
}
