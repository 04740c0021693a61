//! Ticket issuing service
//!
//! The issuing sequence for one area is append → recover row position
//! from the acknowledgement → rewrite the number cell. The two steps must
//! not interleave with another append to the same tab, so a submission
//! processes its areas strictly one at a time. Across concurrent
//! processes no lock is taken: serialization of appends is delegated to
//! the store, and a non-atomic store can in theory hand out duplicate
//! numbers (accepted limitation of the deployment).

use tracing::{error, info, instrument, warn};

use super::registration::{QuotaExceeded, Registration, SHEET_HEADERS, SubmitOutcome, SubmitRequest};
use crate::catalog;
use crate::core::{AppError, AppResult, Config};
use crate::printing::{TicketRenderer, logo};
use crate::sheets::RowStore;
use crate::sheets::range::{header_range, row_of_range};
use crate::utils::{format_name, format_phone, now_str};

/// Orchestrates area resolution, persistence and document rendering
pub struct TicketService<S> {
    store: S,
    areas_sheet: String,
    timezone: String,
    renderer: TicketRenderer,
    logo_path: Option<String>,
}

impl<S: RowStore> TicketService<S> {
    pub fn new(store: S, config: &Config) -> Self {
        Self {
            store,
            areas_sheet: config.areas_sheet.clone(),
            timezone: config.timezone.clone(),
            renderer: TicketRenderer::new(config.ticket_width),
            logo_path: config.logo_path.clone(),
        }
    }

    /// The underlying row store
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Currently active areas, re-read from the store on every call
    pub async fn active_areas(&self) -> AppResult<Vec<catalog::Area>> {
        catalog::active_areas(&self.store, &self.areas_sheet).await
    }

    /// Make sure an area tab exists and carries the header row
    ///
    /// A populated header is never overwritten; only a missing tab or a
    /// blank first row gets the schema written.
    async fn ensure_sheet(&self, sheet: &str) -> AppResult<()> {
        let header: Vec<Vec<String>> =
            vec![SHEET_HEADERS.iter().map(|h| h.to_string()).collect()];
        let range = header_range(sheet, SHEET_HEADERS.len());

        let titles = self.store.list_sheets().await?;
        if !titles.iter().any(|t| t == sheet) {
            info!(sheet, "creating area tab");
            self.store.create_sheet(sheet).await?;
            self.store.write_range(&range, header).await?;
            return Ok(());
        }

        let first_row = self.store.read_rows(&format!("{}!1:1", sheet)).await?;
        let blank = first_row
            .first()
            .map(|row| row.iter().all(|cell| cell.trim().is_empty()))
            .unwrap_or(true);
        if blank {
            info!(sheet, "filling blank header row");
            self.store.write_range(&range, header).await?;
        }
        Ok(())
    }

    /// Append a registration row and recover its ticket number
    ///
    /// The number is the acknowledged row position minus the header row.
    /// An acknowledgement without a parseable row position is a
    /// persistence failure: guessing a number risks a collision, so none
    /// is fabricated and nothing is retried.
    #[instrument(skip(self, row))]
    async fn append_and_number(&self, sheet: &str, row: Vec<String>) -> AppResult<u32> {
        self.ensure_sheet(sheet).await?;

        let ack = self.store.append_row(sheet, row).await?;
        let Some(row_idx) = row_of_range(&ack.updated_range) else {
            return Err(AppError::persistence(format!(
                "Não foi possível detectar a linha inserida: {}",
                ack.updated_range
            )));
        };

        // Header occupies row 1; data starts at row 2 = ticket 1
        let number = row_idx.saturating_sub(1).max(1);

        self.store
            .write_range(&format!("{}!A{}", sheet, row_idx), vec![vec![number.to_string()]])
            .await?;

        info!(sheet, number, "ticket number assigned");
        Ok(number)
    }

    /// Issue tickets for one attendee across one or more areas
    ///
    /// Validation failures abort before any store mutation. A persistence
    /// failure mid-batch aborts the remaining areas but keeps the
    /// registrations already persisted. Quota violations never abort:
    /// they are returned alongside the registrations, with the document
    /// withheld for the whole batch.
    #[instrument(skip(self, request), fields(areas = request.areas.len()))]
    pub async fn submit(&self, request: SubmitRequest) -> AppResult<SubmitOutcome> {
        if request.areas.is_empty() {
            return Err(AppError::validation("Selecione ao menos uma área ativa."));
        }

        let name = format_name(&request.name);
        if name.is_empty() {
            return Err(AppError::validation("Nome é obrigatório."));
        }
        let phone = format_phone(&request.phone)?;
        let neighborhood = request.neighborhood.trim().to_string();
        let social = request.social.trim().to_string();
        let email = request.email.trim().to_string();

        // Areas and quotas can change between submissions; always re-read
        let areas_info = self.active_areas().await?;

        let mut registrations: Vec<Registration> = Vec::new();
        let mut exceeded: Vec<QuotaExceeded> = Vec::new();

        for area in &request.areas {
            let info = areas_info.iter().find(|a| a.name == *area);
            // An unlisted area still issues, onto a tab named after it
            let sheet = info
                .map(|a| a.sheet.clone())
                .unwrap_or_else(|| area.clone());

            let mut registration = Registration {
                area: area.clone(),
                sheet,
                number: 0,
                name: name.clone(),
                phone: phone.clone(),
                neighborhood: neighborhood.clone(),
                social: social.clone(),
                email: email.clone(),
                registered_at: now_str(&self.timezone),
                served_at: String::new(),
            };

            let number = self
                .append_and_number(&registration.sheet, registration.to_row())
                .await
                .map_err(|e| {
                    let issued: Vec<String> = registrations
                        .iter()
                        .map(|r| format!("{} #{}", r.area, r.number))
                        .collect();
                    error!(area = %area, ?issued, "submission aborted mid-batch");
                    AppError::persistence(format!("Falha ao registrar na área '{}': {}", area, e))
                })?;
            registration.number = number;

            if let Some(limit) = info.and_then(|a| a.max_tickets)
                && number > limit
            {
                exceeded.push(QuotaExceeded {
                    area: area.clone(),
                    limit,
                    number,
                });
            }

            registrations.push(registration);
        }

        let document = if exceeded.is_empty() {
            let logo = logo::cached_raster(self.logo_path.as_deref());
            Some(self.renderer.render_batch(&registrations, logo))
        } else {
            warn!(?exceeded, "quota exceeded, document withheld");
            None
        };

        Ok(SubmitOutcome {
            registrations,
            document,
            exceeded,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sheets::{AppendAck, MemoryStore};

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|c| c.to_string()).collect()
    }

    fn config() -> Config {
        Config {
            spreadsheet_id: "test".into(),
            sheets_api_base: "https://sheets.example".into(),
            sheets_token: "tok".into(),
            areas_sheet: "Nomes".into(),
            neighborhoods_sheet: "Bairro".into(),
            timezone: "America/Manaus".into(),
            ticket_width: 32,
            logo_path: None,
            print_relay_url: None,
            print_relay_token: None,
        }
    }

    fn areas_tab() -> Vec<Vec<String>> {
        vec![
            row(&["Área", "Aba", "Ativa", "Limite"]),
            row(&["Triagem", "", "Sim", ""]),
            row(&["Palco", "Senhas Palco", "Sim", "1"]),
        ]
    }

    fn request(areas: &[&str]) -> SubmitRequest {
        SubmitRequest {
            areas: areas.iter().map(|a| a.to_string()).collect(),
            name: "maria da silva".into(),
            phone: "92981231234".into(),
            neighborhood: "Centro".into(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_first_ticket_is_one_and_header_created() {
        let store = MemoryStore::new().with_sheet("Nomes", areas_tab());
        let service = TicketService::new(store, &config());

        let outcome = service.submit(request(&["Triagem"])).await.unwrap();
        assert_eq!(outcome.registrations[0].number, 1);

        let rows = service.store().rows("Triagem");
        assert_eq!(rows[0][0], "Senha");
        assert_eq!(rows[1][0], "1");
        assert_eq!(rows[1][1], "MARIA DA SILVA");
        assert_eq!(rows[1][2], "(92) 98123-1234");
    }

    #[tokio::test]
    async fn test_numbers_increase_by_one() {
        let store = MemoryStore::new().with_sheet("Nomes", areas_tab());
        let service = TicketService::new(store, &config());

        for expected in 1..=3 {
            let outcome = service.submit(request(&["Triagem"])).await.unwrap();
            assert_eq!(outcome.registrations[0].number, expected);
        }
    }

    #[tokio::test]
    async fn test_populated_header_not_overwritten() {
        let store = MemoryStore::new()
            .with_sheet("Nomes", areas_tab())
            .with_sheet("Triagem", vec![row(&["Custom", "Header"])]);
        let service = TicketService::new(store, &config());

        service.submit(request(&["Triagem"])).await.unwrap();

        let rows = service.store().rows("Triagem");
        assert_eq!(rows[0], row(&["Custom", "Header"]));
        // data still lands on row 2 → ticket 1
        assert_eq!(rows[1][0], "1");
    }

    #[tokio::test]
    async fn test_blank_header_filled() {
        let store = MemoryStore::new()
            .with_sheet("Nomes", areas_tab())
            .with_sheet("Triagem", vec![row(&["", ""])]);
        let service = TicketService::new(store, &config());

        service.submit(request(&["Triagem"])).await.unwrap();
        let rows = service.store().rows("Triagem");
        assert_eq!(rows[0][0], "Senha");
    }

    #[tokio::test]
    async fn test_destination_tab_from_catalog() {
        let store = MemoryStore::new().with_sheet("Nomes", areas_tab());
        let service = TicketService::new(store, &config());

        let outcome = service.submit(request(&["Palco"])).await.unwrap();
        assert_eq!(outcome.registrations[0].sheet, "Senhas Palco");
        assert!(!service.store().rows("Senhas Palco").is_empty());
    }

    #[tokio::test]
    async fn test_unlisted_area_falls_back_to_own_tab() {
        let store = MemoryStore::new().with_sheet("Nomes", areas_tab());
        let service = TicketService::new(store, &config());

        let outcome = service.submit(request(&["Imprensa"])).await.unwrap();
        assert_eq!(outcome.registrations[0].sheet, "Imprensa");
        assert!(outcome.exceeded.is_empty());
    }

    #[tokio::test]
    async fn test_empty_area_selection_is_validation() {
        let store = MemoryStore::new().with_sheet("Nomes", areas_tab());
        let service = TicketService::new(store, &config());

        let err = service.submit(request(&[])).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn test_invalid_phone_aborts_before_any_mutation() {
        let store = MemoryStore::new().with_sheet("Nomes", areas_tab());
        let service = TicketService::new(store, &config());

        let mut req = request(&["Triagem"]);
        req.phone = "123".into();
        let err = service.submit(req).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        // no tab was created, nothing was appended
        assert_eq!(
            service.store().list_sheets().await.unwrap(),
            vec!["Nomes".to_string()]
        );
    }

    /// Store whose append acknowledgement exposes no row position
    struct BadAckStore(MemoryStore);

    impl RowStore for BadAckStore {
        async fn read_rows(&self, range: &str) -> AppResult<Vec<Vec<String>>> {
            self.0.read_rows(range).await
        }
        async fn append_row(&self, sheet: &str, row: Vec<String>) -> AppResult<AppendAck> {
            self.0.append_row(sheet, row).await?;
            Ok(AppendAck {
                updated_range: String::new(),
            })
        }
        async fn write_range(&self, range: &str, values: Vec<Vec<String>>) -> AppResult<()> {
            self.0.write_range(range, values).await
        }
        async fn list_sheets(&self) -> AppResult<Vec<String>> {
            self.0.list_sheets().await
        }
        async fn create_sheet(&self, title: &str) -> AppResult<()> {
            self.0.create_sheet(title).await
        }
    }

    #[tokio::test]
    async fn test_unparseable_ack_is_persistence_error() {
        let store = BadAckStore(MemoryStore::new().with_sheet("Nomes", areas_tab()));
        let service = TicketService::new(store, &config());

        let err = service.submit(request(&["Triagem"])).await.unwrap_err();
        assert!(matches!(err, AppError::Persistence(_)));

        // the row was appended but no number was fabricated for it
        let rows = service.store().0.rows("Triagem");
        assert_eq!(rows[1][0], "");
    }
}
