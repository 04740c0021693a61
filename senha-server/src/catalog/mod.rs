//! Catalog module - operator-maintained configuration tabs
//!
//! Areas and neighborhoods live on tabs the event staff edit at any time,
//! so both are re-read from the store on every operation; nothing here is
//! cached.

pub mod areas;
pub mod neighborhoods;

pub use areas::{Area, resolve_active_areas};
pub use neighborhoods::resolve_neighborhoods;

use crate::core::{AppError, AppResult};
use crate::sheets::RowStore;

fn read_context(sheet: &str, err: AppError) -> AppError {
    match err {
        // credential problems keep their kind
        AppError::Configuration(msg) => AppError::Configuration(msg),
        other => AppError::persistence(format!("Erro ao ler a aba '{}': {}", sheet, other)),
    }
}

/// Read the areas tab and resolve the active areas
pub async fn active_areas<S: RowStore>(store: &S, sheet: &str) -> AppResult<Vec<Area>> {
    let rows = store
        .read_rows(&format!("{}!A:Z", sheet))
        .await
        .map_err(|e| read_context(sheet, e))?;
    resolve_active_areas(&rows, sheet)
}

/// Read the neighborhoods tab
pub async fn neighborhoods<S: RowStore>(store: &S, sheet: &str) -> AppResult<Vec<String>> {
    let rows = store
        .read_rows(&format!("{}!A:A", sheet))
        .await
        .map_err(|e| read_context(sheet, e))?;
    Ok(resolve_neighborhoods(&rows))
}
