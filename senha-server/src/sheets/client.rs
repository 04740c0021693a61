//! Google Sheets REST backend
//!
//! Talks to the v4 values API with a bearer token taken from
//! configuration. Token acquisition (service-account exchange, refresh) is
//! owned by the deployment, not by this process.

use serde::Deserialize;
use serde_json::json;
use tracing::instrument;

use super::{AppendAck, RowStore};
use crate::core::{AppError, AppResult, Config};

/// Sheets v4 REST client
///
/// # Example
///
/// ```ignore
/// let client = SheetsClient::from_config(&config)?;
/// let rows = client.read_rows("Nomes!A:Z").await?;
/// ```
#[derive(Debug, Clone)]
pub struct SheetsClient {
    http: reqwest::Client,
    base_url: String,
    spreadsheet_id: String,
    token: String,
}

#[derive(Debug, Deserialize)]
struct ValueRange {
    #[serde(default)]
    values: Vec<Vec<String>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AppendResponse {
    updates: Option<AppendUpdates>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AppendUpdates {
    #[serde(default)]
    updated_range: String,
}

#[derive(Debug, Deserialize)]
struct SpreadsheetMeta {
    #[serde(default)]
    sheets: Vec<SheetEntry>,
}

#[derive(Debug, Deserialize)]
struct SheetEntry {
    properties: SheetProperties,
}

#[derive(Debug, Deserialize)]
struct SheetProperties {
    title: String,
}

impl SheetsClient {
    /// Create a client for one spreadsheet
    pub fn new(
        base_url: impl Into<String>,
        spreadsheet_id: impl Into<String>,
        token: impl Into<String>,
    ) -> Self {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            http,
            base_url: base_url.into(),
            spreadsheet_id: spreadsheet_id.into(),
            token: token.into(),
        }
    }

    /// Build a client from configuration, validating the required values
    pub fn from_config(config: &Config) -> AppResult<Self> {
        if config.spreadsheet_id.trim().is_empty() {
            return Err(AppError::configuration(
                "SPREADSHEET_ID não configurado (defina a variável de ambiente).",
            ));
        }
        if config.sheets_token.trim().is_empty() {
            return Err(AppError::configuration(
                "Credenciais ausentes. Defina SHEETS_TOKEN com o token de acesso.",
            ));
        }
        Ok(Self::new(
            config.sheets_api_base.trim_end_matches('/'),
            config.spreadsheet_id.trim(),
            config.sheets_token.trim(),
        ))
    }

    fn spreadsheet_url(&self) -> String {
        format!("{}/{}", self.base_url, self.spreadsheet_id)
    }

    fn values_url(&self, range: &str) -> String {
        format!("{}/values/{}", self.spreadsheet_url(), range)
    }

    async fn handle_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> AppResult<T> {
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return match status {
                reqwest::StatusCode::UNAUTHORIZED | reqwest::StatusCode::FORBIDDEN => Err(
                    AppError::configuration(format!("Sheets API {}: {}", status, body)),
                ),
                _ => Err(AppError::persistence(format!(
                    "Sheets API {}: {}",
                    status, body
                ))),
            };
        }

        response
            .json()
            .await
            .map_err(|e| AppError::persistence(e.to_string()))
    }
}

impl RowStore for SheetsClient {
    #[instrument(skip(self))]
    async fn read_rows(&self, range: &str) -> AppResult<Vec<Vec<String>>> {
        let response = self
            .http
            .get(self.values_url(range))
            .bearer_auth(&self.token)
            .send()
            .await?;

        let value_range: ValueRange = Self::handle_response(response).await?;
        Ok(value_range.values)
    }

    #[instrument(skip(self, row), fields(cols = row.len()))]
    async fn append_row(&self, sheet: &str, row: Vec<String>) -> AppResult<AppendAck> {
        let response = self
            .http
            .post(format!("{}:append", self.values_url(&format!("{}!A1", sheet))))
            .query(&[
                ("valueInputOption", "RAW"),
                ("insertDataOption", "INSERT_ROWS"),
            ])
            .bearer_auth(&self.token)
            .json(&json!({ "values": [row] }))
            .send()
            .await?;

        let append: AppendResponse = Self::handle_response(response).await?;
        Ok(AppendAck {
            updated_range: append.updates.map(|u| u.updated_range).unwrap_or_default(),
        })
    }

    #[instrument(skip(self, values))]
    async fn write_range(&self, range: &str, values: Vec<Vec<String>>) -> AppResult<()> {
        let response = self
            .http
            .put(self.values_url(range))
            .query(&[("valueInputOption", "RAW")])
            .bearer_auth(&self.token)
            .json(&json!({ "values": values }))
            .send()
            .await?;

        Self::handle_response::<serde_json::Value>(response).await?;
        Ok(())
    }

    #[instrument(skip(self))]
    async fn list_sheets(&self) -> AppResult<Vec<String>> {
        let response = self
            .http
            .get(self.spreadsheet_url())
            .query(&[("fields", "sheets.properties.title")])
            .bearer_auth(&self.token)
            .send()
            .await?;

        let meta: SpreadsheetMeta = Self::handle_response(response).await?;
        Ok(meta.sheets.into_iter().map(|s| s.properties.title).collect())
    }

    #[instrument(skip(self))]
    async fn create_sheet(&self, title: &str) -> AppResult<()> {
        let response = self
            .http
            .post(format!("{}:batchUpdate", self.spreadsheet_url()))
            .bearer_auth(&self.token)
            .json(&json!({
                "requests": [{ "addSheet": { "properties": { "title": title } } }]
            }))
            .send()
            .await?;

        Self::handle_response::<serde_json::Value>(response).await?;
        Ok(())
    }
}
