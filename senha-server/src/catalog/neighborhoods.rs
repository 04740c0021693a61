//! Neighborhood list resolver
//!
//! Single-column tab, kept in the operators' source order: no dedup, no
//! sorting. The first row is dropped only when it is recognizably a
//! header.

use crate::utils::fold;

/// Header labels recognized (after folding) on the first row
const HEADER_LABELS: [&str; 2] = ["nome do bairro", "bairro"];

/// Extract the neighborhood names from the raw contents of the tab
pub fn resolve_neighborhoods(rows: &[Vec<String>]) -> Vec<String> {
    let mut neighborhoods = Vec::new();
    for (idx, row) in rows.iter().enumerate() {
        let name = row.first().map(String::as_str).unwrap_or("").trim();
        if name.is_empty() {
            continue;
        }
        if idx == 0 && HEADER_LABELS.contains(&fold(name).as_str()) {
            continue;
        }
        neighborhoods.push(name.to_string());
    }
    neighborhoods
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn test_header_skipped() {
        let rows = vec![row(&["Bairro"]), row(&["Centro"]), row(&["Cidade Nova"])];
        assert_eq!(resolve_neighborhoods(&rows), ["Centro", "Cidade Nova"]);

        let rows = vec![row(&["NOME DO BAIRRO"]), row(&["Centro"])];
        assert_eq!(resolve_neighborhoods(&rows), ["Centro"]);
    }

    #[test]
    fn test_header_label_only_skipped_on_first_row() {
        // "Bairro" is also a legitimate neighborhood name further down
        let rows = vec![row(&["Centro"]), row(&["Bairro"])];
        assert_eq!(resolve_neighborhoods(&rows), ["Centro", "Bairro"]);
    }

    #[test]
    fn test_blanks_skipped_order_kept_no_dedup() {
        let rows = vec![
            row(&["Bairro"]),
            row(&["Centro"]),
            row(&[""]),
            row(&["Aleixo"]),
            row(&["Centro"]),
        ];
        assert_eq!(resolve_neighborhoods(&rows), ["Centro", "Aleixo", "Centro"]);
    }

    #[test]
    fn test_empty_table() {
        assert!(resolve_neighborhoods(&[]).is_empty());
    }
}
