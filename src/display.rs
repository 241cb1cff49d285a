//! Terminal rendering of the dashboard

use crate::classifier::{classify_component_status, classify_service_description, Severity};
use crate::errors::Result;
use crate::report::{ServiceReport, SubComponent};
use crate::state::DashboardState;
use colored::*;

const TITLE: &str = "DownDevDetector";
const RULE_WIDTH: usize = 60;

fn paint(text: &str, severity: Severity) -> ColoredString {
    match severity.color() {
        Some(color) => text.color(color),
        None => text.normal(),
    }
}

fn muted(text: &str) -> ColoredString {
    text.bright_black()
}

/// Title line plus the colour legend
pub fn render_header() -> String {
    let legend: Vec<String> = Severity::ALL
        .iter()
        .filter(|severity| **severity != Severity::Unknown)
        .map(|severity| paint(severity.label(), *severity).to_string())
        .collect();

    format!("{}\n{}\n", TITLE.bold(), legend.join("  "))
}

fn render_component(component: &SubComponent) -> String {
    let severity = classify_component_status(component.status());
    let line = format!("{} - {}", component.name(), component.status());
    match severity {
        Severity::Unknown => format!("    {}\n", muted(&line)),
        _ => format!("    {}\n", paint(&line, severity)),
    }
}

/// One service card: title, summary, component list and update time
pub fn render_card(report: &ServiceReport) -> String {
    let mut out = String::new();

    out.push_str(&format!("{}\n", "━".repeat(RULE_WIDTH).bright_black()));
    out.push_str(&format!(" {}\n", report.display_name().bold()));

    let description = report.description();
    out.push_str(&format!(
        " {}\n",
        paint(description, classify_service_description(description))
    ));

    for component in report.components() {
        out.push_str(&render_component(component));
    }

    out.push_str(&format!(
        " {}\n",
        muted(&format!("Last updated: {}", report.updated_at_display()))
    ));

    out
}

/// Full screen for the current state
pub fn render_dashboard(state: &DashboardState) -> String {
    let mut out = render_header();
    out.push('\n');

    if state.loading {
        out.push_str(&format!("{}\n", muted("Loading…")));
        return out;
    }

    let visible = state.visible();
    if visible.is_empty() {
        out.push_str(&format!(
            "{}\n",
            muted(&format!("No services match \"{}\"", state.query))
        ));
        return out;
    }

    for report in visible {
        out.push_str(&render_card(report));
    }

    out
}

/// Visible reports as pretty-printed JSON
pub fn render_json(state: &DashboardState) -> Result<String> {
    Ok(serde_json::to_string_pretty(&state.visible())?)
}
