//! In-memory row store
//!
//! Backs tests and offline development. Range handling covers the forms
//! the application actually issues (`Tab`, `Tab!A:Z`, `Tab!A:A`,
//! `Tab!1:1`, `Tab!A5`), and append acknowledgements are reported in the
//! same A1 text format the Sheets API uses, so the number-recovery parsing
//! path is exercised against this store too.

use std::sync::Mutex;

use super::range::{column_letter, parse_cell};
use super::{AppendAck, RowStore};
use crate::core::{AppError, AppResult};

/// In-memory spreadsheet: ordered tabs of string-cell rows
#[derive(Debug, Default)]
pub struct MemoryStore {
    sheets: Mutex<Vec<(String, Vec<Vec<String>>)>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a tab with rows (builder style, for tests)
    pub fn with_sheet(self, title: &str, rows: Vec<Vec<String>>) -> Self {
        self.sheets.lock().unwrap().push((title.to_string(), rows));
        self
    }

    /// Snapshot a tab's rows (empty when the tab does not exist)
    pub fn rows(&self, title: &str) -> Vec<Vec<String>> {
        self.sheets
            .lock()
            .unwrap()
            .iter()
            .find(|(t, _)| t == title)
            .map(|(_, rows)| rows.clone())
            .unwrap_or_default()
    }

    /// Split `Tab!A:Z` into the tab title and the range spec
    fn split_range(range: &str) -> (&str, Option<&str>) {
        match range.split_once('!') {
            Some((sheet, spec)) => (sheet, Some(spec)),
            None => (range, None),
        }
    }
}

impl RowStore for MemoryStore {
    async fn read_rows(&self, range: &str) -> AppResult<Vec<Vec<String>>> {
        let (sheet, spec) = Self::split_range(range);
        let sheets = self.sheets.lock().unwrap();
        let rows = sheets
            .iter()
            .find(|(t, _)| t == sheet)
            .map(|(_, rows)| rows)
            .ok_or_else(|| AppError::persistence(format!("unknown sheet: {}", sheet)))?;

        let rows = match spec {
            // first row only
            Some("1:1") => rows.iter().take(1).cloned().collect(),
            // first column only
            Some("A:A") => rows
                .iter()
                .map(|row| row.iter().take(1).cloned().collect())
                .collect(),
            _ => rows.clone(),
        };
        Ok(rows)
    }

    async fn append_row(&self, sheet: &str, row: Vec<String>) -> AppResult<AppendAck> {
        let mut sheets = self.sheets.lock().unwrap();
        let rows = sheets
            .iter_mut()
            .find(|(t, _)| t == sheet)
            .map(|(_, rows)| rows)
            .ok_or_else(|| AppError::persistence(format!("unknown sheet: {}", sheet)))?;

        let last_col = column_letter(row.len().saturating_sub(1));
        rows.push(row);
        let row_idx = rows.len();

        Ok(AppendAck {
            updated_range: format!("{}!A{}:{}{}", sheet, row_idx, last_col, row_idx),
        })
    }

    async fn write_range(&self, range: &str, values: Vec<Vec<String>>) -> AppResult<()> {
        let (sheet, spec) = Self::split_range(range);
        let start = spec
            .map(|s| s.split(':').next().unwrap_or(s))
            .and_then(parse_cell)
            .ok_or_else(|| AppError::persistence(format!("unsupported range: {}", range)))?;

        let (col, row) = (start.0, start.1 as usize);
        let mut sheets = self.sheets.lock().unwrap();
        let rows = sheets
            .iter_mut()
            .find(|(t, _)| t == sheet)
            .map(|(_, rows)| rows)
            .ok_or_else(|| AppError::persistence(format!("unknown sheet: {}", sheet)))?;

        for (r, value_row) in values.into_iter().enumerate() {
            let target_row = row - 1 + r;
            while rows.len() <= target_row {
                rows.push(Vec::new());
            }
            let target = &mut rows[target_row];
            for (c, cell) in value_row.into_iter().enumerate() {
                let target_col = col + c;
                while target.len() <= target_col {
                    target.push(String::new());
                }
                target[target_col] = cell;
            }
        }
        Ok(())
    }

    async fn list_sheets(&self) -> AppResult<Vec<String>> {
        Ok(self
            .sheets
            .lock()
            .unwrap()
            .iter()
            .map(|(t, _)| t.clone())
            .collect())
    }

    async fn create_sheet(&self, title: &str) -> AppResult<()> {
        let mut sheets = self.sheets.lock().unwrap();
        if sheets.iter().any(|(t, _)| t == title) {
            return Err(AppError::persistence(format!(
                "sheet already exists: {}",
                title
            )));
        }
        sheets.push((title.to_string(), Vec::new()));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|c| c.to_string()).collect()
    }

    #[tokio::test]
    async fn test_append_reports_a1_range() {
        let store = MemoryStore::new().with_sheet("Senha", vec![row(&["Senha", "Nome"])]);

        let ack = store
            .append_row("Senha", row(&["", "MARIA"]))
            .await
            .unwrap();
        assert_eq!(ack.updated_range, "Senha!A2:B2");

        let ack = store.append_row("Senha", row(&["", "JOSE"])).await.unwrap();
        assert_eq!(ack.updated_range, "Senha!A3:B3");
    }

    #[tokio::test]
    async fn test_append_unknown_sheet_fails() {
        let store = MemoryStore::new();
        assert!(store.append_row("Senha", row(&[""])).await.is_err());
    }

    #[tokio::test]
    async fn test_read_specs() {
        let store = MemoryStore::new().with_sheet(
            "Bairro",
            vec![row(&["Bairro", "x"]), row(&["Centro", "y"])],
        );

        let all = store.read_rows("Bairro!A:Z").await.unwrap();
        assert_eq!(all.len(), 2);

        let first_row = store.read_rows("Bairro!1:1").await.unwrap();
        assert_eq!(first_row, vec![row(&["Bairro", "x"])]);

        let first_col = store.read_rows("Bairro!A:A").await.unwrap();
        assert_eq!(first_col, vec![row(&["Bairro"]), row(&["Centro"])]);
    }

    #[tokio::test]
    async fn test_write_range_expands_grid() {
        let store = MemoryStore::new().with_sheet("Senha", Vec::new());
        store
            .write_range("Senha!A1:B1", vec![row(&["Senha", "Nome"])])
            .await
            .unwrap();
        store
            .write_range("Senha!A3", vec![row(&["7"])])
            .await
            .unwrap();

        let rows = store.rows("Senha");
        assert_eq!(rows[0], row(&["Senha", "Nome"]));
        assert!(rows[1].is_empty());
        assert_eq!(rows[2], row(&["7"]));
    }

    #[tokio::test]
    async fn test_create_sheet_duplicate_fails() {
        let store = MemoryStore::new();
        store.create_sheet("Senha").await.unwrap();
        assert!(store.create_sheet("Senha").await.is_err());
        assert_eq!(store.list_sheets().await.unwrap(), vec!["Senha"]);
    }
}
