//! HTTP retrieval of status summaries

use crate::config::Config;
use crate::errors::{DashboardError, Result};
use crate::registry::Source;
use crate::report::ServiceReport;
use async_trait::async_trait;
use reqwest::header::{self, HeaderMap, HeaderValue};
use reqwest::Client;
use tracing::{debug, error};

/// Produces one report per source per call.
///
/// `fetch` never fails: anything that goes wrong in `try_fetch` is logged and
/// replaced with [`ServiceReport::placeholder`].
#[async_trait]
pub trait ReportFetcher: Send + Sync {
    async fn try_fetch(&self, source: &Source) -> Result<ServiceReport>;

    async fn fetch(&self, source: &Source) -> ServiceReport {
        match self.try_fetch(source).await {
            Ok(report) => report,
            Err(e) => {
                error!(
                    source = %source.name,
                    endpoint = %source.endpoint,
                    "Error getting status: {}",
                    e
                );
                ServiceReport::placeholder(source.name.clone())
            }
        }
    }
}

/// Single-attempt GET against a status page
#[derive(Debug, Clone)]
pub struct HttpStatusFetcher {
    client: Client,
}

impl HttpStatusFetcher {
    pub fn new(config: &Config) -> Result<Self> {
        config.validate().map_err(DashboardError::Config)?;

        let mut headers = HeaderMap::new();
        headers.insert(header::ACCEPT, HeaderValue::from_static("application/json"));

        let mut builder = Client::builder()
            .user_agent(config.user_agent.clone())
            .default_headers(headers);

        if let Some(timeout) = config.http_timeout {
            builder = builder.timeout(timeout);
        }

        let client = builder.build().map_err(DashboardError::Http)?;

        Ok(Self { client })
    }
}

#[async_trait]
impl ReportFetcher for HttpStatusFetcher {
    async fn try_fetch(&self, source: &Source) -> Result<ServiceReport> {
        debug!("Requesting status for {} from {}", source.name, source.endpoint);

        let response = self.client.get(&source.endpoint).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(DashboardError::Status(status.as_u16()));
        }

        let body = response.bytes().await?;
        let report = ServiceReport::from_json(&source.name, &body)?;

        debug!(
            "Received status for {}: {} ({} components)",
            source.name,
            report.description(),
            report.components().len()
        );

        Ok(report)
    }
}
