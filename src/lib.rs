//! Status page aggregation dashboard
//!
//! Polls a fixed list of Atlassian Statuspage summaries, collects one report
//! per service, and renders them sorted, searchable and colour-coded by
//! severity.

pub mod config;
pub mod registry;
pub mod report;
pub mod fetcher;
pub mod aggregator;
pub mod filter;
pub mod classifier;
pub mod state;
pub mod display;
pub mod errors;

pub use config::Config;
pub use registry::{Source, default_sources};
pub use report::{ServiceReport, ServiceStatus, ServicePage, SubComponent};
pub use fetcher::{ReportFetcher, HttpStatusFetcher};
pub use aggregator::{run_cycle, stream_cycle, collect_incrementally, sort_reports, CycleSummary};
pub use filter::{filter_reports, matches};
pub use classifier::{Severity, classify_component_status, classify_service_description};
pub use state::DashboardState;
pub use errors::{DashboardError, Result};
