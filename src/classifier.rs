//! Status string to severity mapping
//!
//! Status pages speak two vocabularies: machine-readable component states
//! (`partial_outage`) and human-readable page summaries
//! (`"Partial System Outage"`). Each has its own table; both land on the same
//! [`Severity`] scale. Lookups are exact and case-sensitive.

use colored::Color;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Severity {
    Operational,
    Minor,
    Partial,
    Major,
    Maintenance,
    Unknown,
}

impl Severity {
    /// Every severity, in legend order
    pub const ALL: [Severity; 6] = [
        Severity::Operational,
        Severity::Minor,
        Severity::Major,
        Severity::Partial,
        Severity::Maintenance,
        Severity::Unknown,
    ];

    /// Foreground colour, `None` for the muted default
    pub fn color(self) -> Option<Color> {
        match self {
            Severity::Operational => Some(Color::Green),
            Severity::Minor => Some(Color::Yellow),
            Severity::Partial => Some(Color::TrueColor {
                r: 249,
                g: 115,
                b: 22,
            }),
            Severity::Major => Some(Color::Red),
            Severity::Maintenance => Some(Color::Blue),
            Severity::Unknown => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Severity::Operational => "Operational",
            Severity::Minor => "Unstable",
            Severity::Partial => "Partial Outage",
            Severity::Major => "Down",
            Severity::Maintenance => "Under Maintenance",
            Severity::Unknown => "Unknown",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Component-level `status` values
pub const COMPONENT_STATUS_TABLE: &[(&str, Severity)] = &[
    ("operational", Severity::Operational),
    ("unstable", Severity::Minor),
    ("degraded_performance", Severity::Minor),
    ("partial_outage", Severity::Partial),
    ("major_outage", Severity::Major),
    ("down", Severity::Major),
    ("under_maintenance", Severity::Maintenance),
];

/// Page-level `status.description` values
pub const SERVICE_DESCRIPTION_TABLE: &[(&str, Severity)] = &[
    ("All Systems Operational", Severity::Operational),
    ("Minor Service Outage", Severity::Minor),
    ("Partial System Outage", Severity::Partial),
    ("Degraded System Service", Severity::Partial),
    ("Partially Degraded Service", Severity::Partial),
    ("Major System Outage", Severity::Major),
    ("Service Under Maintenance", Severity::Maintenance),
];

fn lookup(table: &[(&str, Severity)], value: &str) -> Severity {
    table
        .iter()
        .find(|(key, _)| *key == value)
        .map(|(_, severity)| *severity)
        .unwrap_or(Severity::Unknown)
}

pub fn classify_component_status(status: &str) -> Severity {
    lookup(COMPONENT_STATUS_TABLE, status)
}

pub fn classify_service_description(description: &str) -> Severity {
    lookup(SERVICE_DESCRIPTION_TABLE, description)
}
