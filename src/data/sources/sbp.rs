//! State Bank of Pakistan rate sheet client
//!
//! Downloads the daily mark-to-market PDF for a date and parses it into
//! exchange rate records.

use crate::config::ClientConfig;
use crate::currency::Currency;
use crate::data::pdf::parse_pdf_content;
use crate::data::save_rate_sheet;
use crate::error::{Result, SbpError};
use crate::query::RateQuery;
use crate::types::{ExchangeRate, ParseContext, RateSheet};
use reqwest::Client;
use std::path::Path;
use std::time::Duration;

/// SBP rate sheet client
#[derive(Debug, Clone)]
pub struct SbpClient {
    client: Client,
    base_url: String,
}

impl SbpClient {
    /// Create a client against the public SBP site
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a client from explicit settings
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| SbpError::Http(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL of the rate sheet for `query`
    pub fn url(&self, query: &RateQuery) -> String {
        query.url(&self.base_url)
    }

    /// Download the raw rate sheet bytes
    pub async fn fetch_rate_sheet(&self, query: &RateQuery) -> Result<Vec<u8>> {
        let path = query.path();
        let url = self.url(query);
        log::info!("Fetching rate sheet {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| SbpError::Http(format!("failed to download PDF: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SbpError::RateSheetNotFound {
                status: status.as_u16(),
                path,
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| SbpError::Http(format!("failed to read PDF: {}", e)))?;

        log::debug!("Downloaded {} bytes from {}", bytes.len(), url);
        Ok(bytes.to_vec())
    }

    /// Fetch and parse the rate sheet for `query`
    pub async fn get_exchange_rates(&self, query: &RateQuery) -> Result<RateSheet> {
        let content = self.fetch_rate_sheet(query).await?;
        let ctx = ParseContext::new(query.date, self.url(query));
        parse_pdf_content(&content, &ctx)
    }

    /// Fetch the rate sheet and return the record for a single currency
    pub async fn get_exchange_rate(
        &self,
        currency: Currency,
        query: &RateQuery,
    ) -> Result<ExchangeRate> {
        let mut rates = self.get_exchange_rates(query).await?;
        rates
            .remove(&currency)
            .ok_or(SbpError::RateNotFound(currency))
    }

    /// Save the raw rate sheet PDF to `path` without parsing it
    ///
    /// Returns the number of bytes written.
    pub async fn download_rate_sheet(
        &self,
        path: impl AsRef<Path>,
        query: &RateQuery,
    ) -> Result<u64> {
        let content = self.fetch_rate_sheet(query).await?;
        let written = save_rate_sheet(path.as_ref(), &content)?;
        log::info!("Saved rate sheet to {}", path.as_ref().display());
        Ok(written)
    }
}
