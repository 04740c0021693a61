//! Row-store collaborators
//!
//! One spreadsheet, one tab per area. The [`RowStore`] trait is the
//! issuing workflow's only view of persistence:
//!
//! - [`SheetsClient`] - Google Sheets v4 REST backend
//! - [`MemoryStore`] - in-memory backend for tests and offline development
//!
//! Appends acknowledge the range they wrote; ticket numbering derives the
//! inserted row from that acknowledgement and from nothing else.

pub mod client;
pub mod memory;
pub mod range;

pub use client::SheetsClient;
pub use memory::MemoryStore;

use crate::core::AppResult;

/// Acknowledgement returned by [`RowStore::append_row`]
#[derive(Debug, Clone)]
pub struct AppendAck {
    /// A1 range the store reports having written (`Senha!A5:H5`)
    pub updated_range: String,
}

/// Persistence operations the issuer needs from a spreadsheet-like store
#[allow(async_fn_in_trait)]
pub trait RowStore {
    /// Read a range (`Nomes!A:Z`, `Senha!1:1`) as rows of string cells
    async fn read_rows(&self, range: &str) -> AppResult<Vec<Vec<String>>>;

    /// Append a row after the last data row of a tab
    async fn append_row(&self, sheet: &str, row: Vec<String>) -> AppResult<AppendAck>;

    /// Overwrite a range with the given values
    async fn write_range(&self, range: &str, values: Vec<Vec<String>>) -> AppResult<()>;

    /// List the spreadsheet's tab titles
    async fn list_sheets(&self) -> AppResult<Vec<String>>;

    /// Create an empty tab
    async fn create_sheet(&self, title: &str) -> AppResult<()>;
}
