use std::time::Duration;

use super::error::OemError;
use super::parser::parse_oem;
use super::types::OemDataset;
use crate::web::config::UpstreamConfig;

/// Fetches the OEM ephemeris document from the upstream feed.
pub struct OemClient {
    http: reqwest::Client,
    url: String,
}

impl OemClient {
    pub fn new(config: &UpstreamConfig) -> Result<Self, OemError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_s))
            .build()?;
        Ok(Self {
            http,
            url: config.url.clone(),
        })
    }

    /// One round-trip against the feed: GET, then parse. Any failure leaves
    /// the caller's store untouched; a dataset is only handed back whole.
    pub async fn fetch(&self) -> Result<OemDataset, OemError> {
        log::info!("fetching ephemeris from {}", self.url);
        let body = self
            .http
            .get(&self.url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;
        let dataset = parse_oem(&body)?;
        log::info!("parsed {} state vectors", dataset.records.len());
        Ok(dataset)
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}
