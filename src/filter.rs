//! Free-text search over the collected reports

use crate::report::ServiceReport;

/// Whether the display name of `report` contains `query`, ignoring case
pub fn matches(report: &ServiceReport, query: &str) -> bool {
    query.is_empty()
        || report
            .display_name()
            .to_lowercase()
            .contains(&query.to_lowercase())
}

/// Reports whose display name contains `query`, ignoring case.
/// Order is preserved and an empty query matches everything.
pub fn filter_reports<'a>(reports: &'a [ServiceReport], query: &str) -> Vec<&'a ServiceReport> {
    reports
        .iter()
        .filter(|report| matches(report, query))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregator::sort_reports;
    use crate::report::ServicePage;

    fn named(name: &str) -> ServiceReport {
        ServiceReport {
            source: name.to_string(),
            page: Some(ServicePage {
                name: Some(name.to_string()),
                ..ServicePage::default()
            }),
            ..ServiceReport::default()
        }
    }

    fn sample() -> Vec<ServiceReport> {
        sort_reports(vec![
            named("Discord"),
            named("Digital Ocean"),
            named("GitHub"),
            ServiceReport::placeholder("Figma"),
            named("Notion"),
        ])
    }

    fn names(reports: &[&ServiceReport]) -> Vec<String> {
        reports.iter().map(|r| r.display_name().to_string()).collect()
    }

    #[test]
    fn test_empty_query_returns_everything_in_order() {
        let reports = sample();
        let filtered = filter_reports(&reports, "");
        assert_eq!(filtered.len(), reports.len());
        assert!(filtered.iter().zip(reports.iter()).all(|(a, b)| std::ptr::eq(*a, b)));
    }

    #[test]
    fn test_case_insensitive() {
        let reports = sample();
        assert_eq!(
            names(&filter_reports(&reports, "DISCORD")),
            names(&filter_reports(&reports, "discord"))
        );
        assert_eq!(names(&filter_reports(&reports, "dIsCoRd")), vec!["Discord"]);
    }

    #[test]
    fn test_substring_not_prefix() {
        let reports = sample();
        assert_eq!(names(&filter_reports(&reports, "ocean")), vec!["Digital Ocean"]);
        assert_eq!(names(&filter_reports(&reports, "di")), vec!["Digital Ocean", "Discord"]);
        assert!(filter_reports(&reports, "gthb").is_empty());
    }

    #[test]
    fn test_matches_single_report() {
        let discord = named("Discord");
        assert!(matches(&discord, ""));
        assert!(matches(&discord, "CORD"));
        assert!(!matches(&discord, "zzz"));
        assert!(matches(&ServiceReport::placeholder("Figma"), "fig"));
    }

    #[test]
    fn test_idempotent() {
        let reports = sample();
        let once: Vec<ServiceReport> = filter_reports(&reports, "o").into_iter().cloned().collect();
        let twice: Vec<ServiceReport> = filter_reports(&once, "o").into_iter().cloned().collect();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_query_matches_placeholder_by_source_name() {
        let reports = sample();
        let filtered = filter_reports(&reports, "fig");
        assert_eq!(filtered.len(), 1);
        assert!(filtered[0].is_placeholder());
    }
}
