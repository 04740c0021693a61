//! Area resolver
//!
//! The areas tab is operator-maintained, so column headers arrive in
//! whatever spelling the event staff used. Matching is case- and
//! accent-insensitive against a fixed synonym list per logical field;
//! the first candidate that matches wins.

use crate::core::{AppError, AppResult};
use crate::utils::{fold, parse_positive_int, truthy};

/// Header synonyms for the area name (required)
const AREA_NAME_COLUMNS: [&str; 5] = ["Área", "Area", "Setor", "Mesa", "Área/Setor"];

/// Header synonyms for the destination tab (optional; defaults to the area name)
const TARGET_SHEET_COLUMNS: [&str; 7] = [
    "Aba",
    "Sheet",
    "AbaDestino",
    "Aba Destino",
    "Destino",
    "Guia",
    "Tab",
];

/// Header synonyms for the active flag (optional; defaults to active)
const ACTIVE_COLUMNS: [&str; 5] = ["Ativa", "Ativo", "Status", "Habilitada", "Disponível"];

/// Header synonyms for the ticket quota (optional; defaults to unlimited)
const MAX_TICKETS_COLUMNS: [&str; 4] = [
    "Quantidade máxima de senhas",
    "Qtd máxima",
    "Qtd Senhas",
    "Limite",
];

/// An issuing area, as configured on the areas tab
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Area {
    /// Display name, unique within the active set
    pub name: String,
    /// Destination tab registrations are appended to
    pub sheet: String,
    /// Optional ticket quota; `None` means unlimited
    pub max_tickets: Option<u32>,
}

/// Find the index of the first header matching any candidate, in candidate order
fn find_column(header: &[String], candidates: &[&str]) -> Option<usize> {
    let folded: Vec<String> = header.iter().map(|h| fold(h)).collect();
    for want in candidates {
        let want = fold(want);
        if let Some(idx) = folded.iter().position(|h| *h == want) {
            return Some(idx);
        }
    }
    None
}

fn cell<'a>(row: &'a [String], idx: Option<usize>) -> &'a str {
    idx.and_then(|i| row.get(i)).map(String::as_str).unwrap_or("")
}

/// Resolve the active areas from the raw contents of the areas tab
///
/// `sheet` names the source tab for error reporting only. Rows with a
/// blank area name are skipped; a blank destination falls back to the
/// area name; a missing active column means every listed area is active.
pub fn resolve_active_areas(rows: &[Vec<String>], sheet: &str) -> AppResult<Vec<Area>> {
    let Some(header) = rows.first() else {
        return Ok(Vec::new());
    };

    let area_idx = find_column(header, &AREA_NAME_COLUMNS);
    let target_idx = find_column(header, &TARGET_SHEET_COLUMNS);
    let active_idx = find_column(header, &ACTIVE_COLUMNS);
    let max_idx = find_column(header, &MAX_TICKETS_COLUMNS);

    let Some(area_idx) = area_idx else {
        return Err(AppError::configuration(format!(
            "Coluna 'Área' (ou equivalente) não encontrada na aba '{}'.",
            sheet
        )));
    };

    let mut areas = Vec::new();
    for row in &rows[1..] {
        let name = cell(row, Some(area_idx)).trim();
        if name.is_empty() {
            continue;
        }

        let target = cell(row, target_idx).trim();
        let sheet_title = if target.is_empty() { name } else { target };

        let active = match active_idx {
            Some(idx) => {
                let value = cell(row, Some(idx));
                if value.trim().is_empty() { true } else { truthy(value) }
            }
            None => true,
        };
        if !active {
            continue;
        }

        areas.push(Area {
            name: name.to_string(),
            sheet: sheet_title.to_string(),
            max_tickets: parse_positive_int(cell(row, max_idx)),
        });
    }
    Ok(areas)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn test_active_filtering() {
        let rows = vec![
            row(&["Área", "Ativa"]),
            row(&["A", "Sim"]),
            row(&["B", "Nao"]),
            row(&["C", "1"]),
        ];
        let areas = resolve_active_areas(&rows, "Nomes").unwrap();
        let names: Vec<&str> = areas.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, ["A", "C"]);
    }

    #[test]
    fn test_header_synonyms_fold_case_and_accents() {
        let rows = vec![
            row(&["SETOR", "destino", "STATUS", "limite"]),
            row(&["Triagem", "Senhas T", "ativo", "150"]),
        ];
        let areas = resolve_active_areas(&rows, "Nomes").unwrap();
        assert_eq!(
            areas,
            vec![Area {
                name: "Triagem".into(),
                sheet: "Senhas T".into(),
                max_tickets: Some(150),
            }]
        );
    }

    #[test]
    fn test_missing_area_column_is_configuration_error() {
        let rows = vec![row(&["Coluna", "Qualquer"]), row(&["x", "y"])];
        let err = resolve_active_areas(&rows, "Nomes").unwrap_err();
        assert!(matches!(err, AppError::Configuration(_)));
    }

    #[test]
    fn test_empty_table_is_not_an_error() {
        assert!(resolve_active_areas(&[], "Nomes").unwrap().is_empty());
    }

    #[test]
    fn test_defaults() {
        // no destination, active or quota columns at all
        let rows = vec![row(&["Área"]), row(&["Palco"]), row(&[""])];
        let areas = resolve_active_areas(&rows, "Nomes").unwrap();
        assert_eq!(
            areas,
            vec![Area {
                name: "Palco".into(),
                sheet: "Palco".into(),
                max_tickets: None,
            }]
        );
    }

    #[test]
    fn test_blank_active_cell_defaults_to_active() {
        let rows = vec![
            row(&["Área", "Ativa"]),
            row(&["Palco"]),
            row(&["Camarim", "  "]),
        ];
        let areas = resolve_active_areas(&rows, "Nomes").unwrap();
        assert_eq!(areas.len(), 2);
    }

    #[test]
    fn test_unparseable_quota_means_unlimited() {
        let rows = vec![
            row(&["Área", "Limite"]),
            row(&["A", "sem limite"]),
            row(&["B", "0"]),
        ];
        let areas = resolve_active_areas(&rows, "Nomes").unwrap();
        assert_eq!(areas[0].max_tickets, None);
        assert_eq!(areas[1].max_tickets, None);
    }
}
