//! Registration model and row schema

use serde::Serialize;

/// Fixed header row written to every area tab
///
/// Column order is load-bearing: the ticket number occupies the first
/// cell, and number recovery rewrites `A{row}` after the append. The
/// order must never change for the lifetime of a deployment's
/// spreadsheet.
pub const SHEET_HEADERS: [&str; 8] = [
    "Senha",
    "Nome",
    "Telefone",
    "Rede Social",
    "E-mail",
    "Bairro",
    "Data e Hora de Registro",
    "Data e Hora de Atendimento",
];

/// A persisted ticket registration
///
/// Immutable once persisted, except for the service timestamp column,
/// which the (out-of-scope) attendance step fills in later.
#[derive(Debug, Clone, Serialize)]
pub struct Registration {
    /// Area the ticket was issued for
    pub area: String,
    /// Tab the registration row lives on
    pub sheet: String,
    /// Sequential ticket number within the area
    pub number: u32,
    /// Attendee name, uppercased
    pub name: String,
    /// Attendee phone, `(92) 98123-1234`
    pub phone: String,
    /// Attendee neighborhood
    pub neighborhood: String,
    /// Optional social handle (empty when unset)
    pub social: String,
    /// Optional e-mail (empty when unset)
    pub email: String,
    /// Registration timestamp, business timezone
    pub registered_at: String,
    /// Service timestamp; always blank at creation
    pub served_at: String,
}

impl Registration {
    /// Row cells in [`SHEET_HEADERS`] order
    ///
    /// The leading number cell is left empty: it is rewritten in place
    /// once the append acknowledgement reveals the row position.
    pub fn to_row(&self) -> Vec<String> {
        vec![
            String::new(),
            self.name.clone(),
            self.phone.clone(),
            self.social.clone(),
            self.email.clone(),
            self.neighborhood.clone(),
            self.registered_at.clone(),
            self.served_at.clone(),
        ]
    }
}

/// A quota violation detected after issuing
///
/// The registration is already persisted when this is produced; it blocks
/// document generation, not the registration itself.
#[derive(Debug, Clone, Serialize)]
pub struct QuotaExceeded {
    pub area: String,
    pub limit: u32,
    pub number: u32,
}

/// Attendee submission for one or more areas
#[derive(Debug, Clone, Default)]
pub struct SubmitRequest {
    /// Areas to issue for, in issue order
    pub areas: Vec<String>,
    pub name: String,
    pub phone: String,
    pub neighborhood: String,
    pub social: String,
    pub email: String,
}

/// Result of a submission
#[derive(Debug)]
pub struct SubmitOutcome {
    /// Registrations persisted, in issue order
    pub registrations: Vec<Registration>,
    /// Rendered ticket document; withheld when any quota was exceeded
    pub document: Option<Vec<u8>>,
    /// Areas whose quota was exceeded by this submission
    pub exceeded: Vec<QuotaExceeded>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_layout_matches_headers() {
        let reg = Registration {
            area: "Triagem".into(),
            sheet: "Triagem".into(),
            number: 7,
            name: "MARIA DA SILVA".into(),
            phone: "(92) 98123-1234".into(),
            neighborhood: "Centro".into(),
            social: "@maria".into(),
            email: "maria@exemplo.com".into(),
            registered_at: "08/08/2026 14:32:15".into(),
            served_at: String::new(),
        };

        let row = reg.to_row();
        assert_eq!(row.len(), SHEET_HEADERS.len());
        // number cell stays empty until the post-append rewrite
        assert_eq!(row[0], "");
        assert_eq!(row[1], "MARIA DA SILVA");
        assert_eq!(row[2], "(92) 98123-1234");
        assert_eq!(row[3], "@maria");
        assert_eq!(row[4], "maria@exemplo.com");
        assert_eq!(row[5], "Centro");
        assert_eq!(row[6], "08/08/2026 14:32:15");
        // service timestamp is always written blank
        assert_eq!(row[7], "");
    }
}
