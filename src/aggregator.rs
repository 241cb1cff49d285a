//! Fetch cycle orchestration and ordering of the collected reports

use crate::errors::Result;
use crate::fetcher::ReportFetcher;
use crate::filter::matches;
use crate::registry::Source;
use crate::report::ServiceReport;

use futures::future::join_all;
use futures::stream::{FuturesUnordered, Stream, StreamExt};
use std::cmp::Ordering;
use std::sync::Arc;
use tokio::time::Instant;
use tracing::{error, info, instrument};
use uuid::Uuid;

/// Outcome counts for one cycle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CycleSummary {
    pub total: usize,
    pub succeeded: usize,
    pub failed: usize,
}

impl CycleSummary {
    pub fn from_reports(reports: &[ServiceReport]) -> Self {
        let failed = reports.iter().filter(|r| r.is_placeholder()).count();
        Self {
            total: reports.len(),
            succeeded: reports.len() - failed,
            failed,
        }
    }
}

/// Fetch every source concurrently and wait for all of them to settle.
///
/// Reports come back in registry order, one per source. Individual fetch
/// failures are already placeholders at this point; an `Err` here means a
/// fetch task itself died and the cycle as a whole is unusable.
#[instrument(skip(fetcher, sources), fields(cycle_id = %Uuid::new_v4(), sources = sources.len()))]
pub async fn run_cycle<F>(fetcher: Arc<F>, sources: &[Source]) -> Result<Vec<ServiceReport>>
where
    F: ReportFetcher + ?Sized + 'static,
{
    let started = Instant::now();

    let handles = sources.iter().cloned().map(|source| {
        let fetcher = Arc::clone(&fetcher);
        tokio::spawn(async move { fetcher.fetch(&source).await })
    });

    let reports = join_all(handles)
        .await
        .into_iter()
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|e| {
            error!("Error fetching data: {}", e);
            e
        })?;

    let summary = CycleSummary::from_reports(&reports);
    info!(
        "Cycle complete - {} sources, {} ok, {} failed in {}ms",
        summary.total,
        summary.succeeded,
        summary.failed,
        started.elapsed().as_millis()
    );

    Ok(reports)
}

/// Fetch every source concurrently, yielding `(registry index, report)` as
/// each one settles rather than waiting for the slowest.
pub fn stream_cycle<'a, F>(
    fetcher: &'a F,
    sources: &'a [Source],
) -> impl Stream<Item = (usize, ServiceReport)> + Unpin + 'a
where
    F: ReportFetcher + ?Sized,
{
    sources
        .iter()
        .enumerate()
        .map(|(index, source)| async move { (index, fetcher.fetch(source).await) })
        .collect::<FuturesUnordered<_>>()
}

/// Drive [`stream_cycle`] to completion, handing each report that matches
/// `query` to `on_visible` in arrival order.
///
/// Returns every report, matching or not, in registry order.
pub async fn collect_incrementally<F>(
    fetcher: &F,
    sources: &[Source],
    query: &str,
    mut on_visible: impl FnMut(&ServiceReport),
) -> Vec<ServiceReport>
where
    F: ReportFetcher + ?Sized,
{
    let mut slots: Vec<Option<ServiceReport>> = vec![None; sources.len()];
    let mut settled = stream_cycle(fetcher, sources);

    while let Some((index, report)) = settled.next().await {
        if matches(&report, query) {
            on_visible(&report);
        }
        slots[index] = Some(report);
    }

    slots
        .into_iter()
        .zip(sources)
        .map(|(slot, source)| slot.unwrap_or_else(|| ServiceReport::placeholder(source.name.clone())))
        .collect()
}

/// Locale-style name ordering: case-insensitive first, then lowercase ahead
/// of uppercase on case-only ties.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| b.cmp(a))
}

/// Stable ascending sort by [`ServiceReport::display_name`]
pub fn sort_reports(mut reports: Vec<ServiceReport>) -> Vec<ServiceReport> {
    reports.sort_by(|a, b| compare_names(a.display_name(), b.display_name()));
    reports
}
