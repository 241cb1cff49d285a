//! Dashboard state and its transitions
//!
//! The report collection is only ever replaced wholesale by `complete_cycle`
//! or `fail_cycle`; filtering reads it without touching it.

use crate::aggregator::sort_reports;
use crate::filter::filter_reports;
use crate::report::ServiceReport;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardState {
    pub reports: Vec<ServiceReport>,
    pub loading: bool,
    pub query: String,
}

impl DashboardState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin_cycle(self) -> Self {
        Self {
            loading: true,
            ..self
        }
    }

    /// Replace the collection with a freshly fetched one, sorted by name
    pub fn complete_cycle(self, reports: Vec<ServiceReport>) -> Self {
        Self {
            reports: sort_reports(reports),
            loading: false,
            ..self
        }
    }

    pub fn fail_cycle(self) -> Self {
        Self {
            reports: Vec::new(),
            loading: false,
            ..self
        }
    }

    pub fn set_query(self, query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..self
        }
    }

    /// Reports matching the current query, in sorted order
    pub fn visible(&self) -> Vec<&ServiceReport> {
        filter_reports(&self.reports, &self.query)
    }
}
