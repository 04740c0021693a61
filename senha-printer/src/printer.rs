//! Printer adapters for sending ESC/POS data
//!
//! The deployment prints through an HTTP relay sitting next to the physical
//! printer: the relay receives raw document bytes and spools them to the
//! device. This module provides the `Printer` trait and the relay adapter.

use std::time::Duration;

use crate::error::{PrintError, PrintResult};
use tracing::{info, instrument};

/// Trait for printer adapters
#[allow(async_fn_in_trait)]
pub trait Printer {
    /// Send raw ESC/POS data to the printer
    async fn print(&self, data: &[u8]) -> PrintResult<()>;
}

/// HTTP print relay
///
/// POSTs raw document bytes to `{base}/print/raw` with an `X-Token`
/// header. Any 2xx response is success; other statuses surface the
/// response body as diagnostic text.
#[derive(Debug, Clone)]
pub struct RelayPrinter {
    client: reqwest::Client,
    base_url: String,
    token: String,
}

impl RelayPrinter {
    /// Create a new relay printer
    pub fn new(base_url: &str, token: &str) -> PrintResult<Self> {
        let base_url = base_url.trim_end_matches('/').to_string();
        if base_url.is_empty() {
            return Err(PrintError::InvalidConfig("empty relay URL".to_string()));
        }
        reqwest::Url::parse(&base_url)
            .map_err(|_| PrintError::InvalidConfig(format!("Invalid relay URL: {}", base_url)))?;

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| PrintError::InvalidConfig(e.to_string()))?;

        Ok(Self {
            client,
            base_url,
            token: token.to_string(),
        })
    }

    /// Get the relay endpoint that jobs are POSTed to
    pub fn endpoint(&self) -> String {
        format!("{}/print/raw", self.base_url)
    }

    fn map_err(e: reqwest::Error) -> PrintError {
        if e.is_timeout() {
            PrintError::Timeout(e.to_string())
        } else {
            PrintError::Connection(e.to_string())
        }
    }
}

impl Printer for RelayPrinter {
    #[instrument(skip(self, data), fields(endpoint = %self.endpoint(), data_len = data.len()))]
    async fn print(&self, data: &[u8]) -> PrintResult<()> {
        info!("Sending job to print relay");

        let response = self
            .client
            .post(self.endpoint())
            .header("X-Token", &self.token)
            .header(reqwest::header::CONTENT_TYPE, "application/octet-stream")
            .body(data.to_vec())
            .send()
            .await
            .map_err(Self::map_err)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(PrintError::Rejected(format!("HTTP {}: {}", status, body)));
        }

        info!("Print job accepted by relay");
        Ok(())
    }
}
