//! Status summary data structures
//!
//! Mirrors the Atlassian Statuspage `summary.json` document. Every field is
//! optional because nothing upstream guarantees the shape; absent values render
//! blank instead of failing.

use chrono::{DateTime, FixedOffset, Local, TimeZone};
use serde::{Deserialize, Serialize};

/// Description shown for a source whose fetch failed
pub const FETCH_ERROR_DESCRIPTION: &str = "Error fetching status";

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct SubComponent {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct ServiceStatus {
    #[serde(default)]
    pub indicator: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct ServicePage {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Result of polling one source for one cycle
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct ServiceReport {
    /// Registry name of the source that produced this report
    #[serde(default, skip_deserializing)]
    pub source: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub components: Option<Vec<SubComponent>>,
    #[serde(default)]
    pub status: ServiceStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<ServicePage>,
}

impl ServiceReport {
    /// Parse a summary body and tag it with the source it came from
    pub fn from_json(source: &str, body: &[u8]) -> serde_json::Result<Self> {
        let mut report: ServiceReport = serde_json::from_slice(body)?;
        report.source = source.to_string();
        Ok(report)
    }

    /// Stand-in report for a source that could not be fetched
    pub fn placeholder(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            components: None,
            status: ServiceStatus {
                indicator: None,
                description: Some(FETCH_ERROR_DESCRIPTION.to_string()),
            },
            page: None,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        self.page.is_none()
            && self.components.is_none()
            && self.status.description.as_deref() == Some(FETCH_ERROR_DESCRIPTION)
    }

    /// Name used for sorting, filtering and card titles.
    /// Falls back to the registry name when the page block is missing.
    pub fn display_name(&self) -> &str {
        self.page
            .as_ref()
            .and_then(|page| page.name.as_deref())
            .unwrap_or(&self.source)
    }

    pub fn description(&self) -> &str {
        self.status.description.as_deref().unwrap_or("")
    }

    pub fn components(&self) -> &[SubComponent] {
        self.components.as_deref().unwrap_or(&[])
    }

    pub fn updated_at(&self) -> Option<DateTime<FixedOffset>> {
        self.page
            .as_ref()
            .and_then(|page| page.updated_at.as_deref())
            .and_then(|raw| DateTime::parse_from_rfc3339(raw).ok())
    }

    /// Last update in local time, or an empty string when unknown
    pub fn updated_at_display(&self) -> String {
        self.updated_at()
            .map(|dt| format_updated_at(&dt.with_timezone(&Local)))
            .unwrap_or_default()
    }
}

impl SubComponent {
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }

    pub fn status(&self) -> &str {
        self.status.as_deref().unwrap_or("")
    }
}

/// en-US short date and time, e.g. `1/1/2024, 12:00:00 AM`
pub fn format_updated_at<Tz: TimeZone>(dt: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    dt.format("%-m/%-d/%Y, %-I:%M:%S %p").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    const NOTION_BODY: &str = r#"{
        "page": {"id": "p1", "name": "Notion", "url": "https://status.notion.so", "updated_at": "2024-01-01T00:00:00Z", "time_zone": "Etc/UTC"},
        "status": {"indicator": "none", "description": "All Systems Operational"},
        "components": [{"id": "1", "name": "API", "status": "operational", "position": 1}],
        "incidents": []
    }"#;

    #[test]
    fn test_parse_summary_ignores_extra_fields() {
        let report = ServiceReport::from_json("Notion", NOTION_BODY.as_bytes()).unwrap();

        assert_eq!(report.source, "Notion");
        assert_eq!(report.display_name(), "Notion");
        assert_eq!(report.description(), "All Systems Operational");
        assert_eq!(report.components().len(), 1);
        assert_eq!(report.components()[0].status(), "operational");
        assert!(!report.is_placeholder());
    }

    #[test]
    fn test_parse_tolerates_missing_blocks() {
        let report = ServiceReport::from_json("Bare", b"{}").unwrap();

        assert!(report.page.is_none());
        assert!(report.components.is_none());
        assert_eq!(report.description(), "");
        assert_eq!(report.display_name(), "Bare");
        assert_eq!(report.updated_at_display(), "");
    }

    #[test]
    fn test_parse_rejects_conflicting_types() {
        let body = br#"{"components": "none"}"#;
        assert!(ServiceReport::from_json("Odd", body).is_err());
    }

    #[test]
    fn test_placeholder_shape() {
        let report = ServiceReport::placeholder("Figma");

        assert_eq!(report.description(), FETCH_ERROR_DESCRIPTION);
        assert!(report.components.is_none());
        assert!(report.page.is_none());
        assert!(report.components().is_empty());
        assert_eq!(report.display_name(), "Figma");
        assert!(report.is_placeholder());
    }

    #[test]
    fn test_placeholder_serializes_without_absent_blocks() {
        let value = serde_json::to_value(ServiceReport::placeholder("Figma")).unwrap();
        assert_eq!(value["status"]["description"], FETCH_ERROR_DESCRIPTION);
        assert!(value.get("components").is_none());
        assert!(value.get("page").is_none());
    }

    #[test]
    fn test_format_updated_at_en_us() {
        let midnight = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(format_updated_at(&midnight), "1/1/2024, 12:00:00 AM");

        let afternoon = Utc.with_ymd_and_hms(2023, 11, 25, 15, 4, 9).unwrap();
        assert_eq!(format_updated_at(&afternoon), "11/25/2023, 3:04:09 PM");
    }

    #[test]
    fn test_unparseable_timestamp_renders_blank() {
        let report = ServiceReport {
            page: Some(ServicePage {
                updated_at: Some("yesterday".to_string()),
                ..ServicePage::default()
            }),
            ..ServiceReport::default()
        };
        assert!(report.updated_at().is_none());
        assert_eq!(report.updated_at_display(), "");
    }
}
