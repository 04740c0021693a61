/// Issuer configuration
///
/// # Environment variables
///
/// All values can be overridden through environment variables:
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | SPREADSHEET_ID | (none) | Target spreadsheet id |
/// | SHEETS_API_BASE | https://sheets.googleapis.com/v4/spreadsheets | Sheets REST base |
/// | SHEETS_TOKEN | (none) | Bearer token for the Sheets API |
/// | AREAS_SHEET | Nomes | Tab listing the areas |
/// | BAIRROS_SHEET | Bairro | Tab listing the neighborhoods |
/// | APP_TZ | America/Manaus | Business timezone |
/// | TICKET_WIDTH | 32 | Paper width in characters (58mm paper) |
/// | TICKET_LOGO_PATH | assets/logo.png | Logo printed on each ticket |
/// | PRINT_RELAY_URL | (none) | HTTP print relay base URL |
/// | PRINT_RELAY_TOKEN | (none) | X-Token for the print relay |
///
/// # Example
///
/// ```ignore
/// SPREADSHEET_ID=1eEv... SHEETS_TOKEN=ya29... cargo run -- areas
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Target spreadsheet id (one spreadsheet, one tab per area)
    pub spreadsheet_id: String,
    /// Sheets REST API base URL
    pub sheets_api_base: String,
    /// Bearer token for the Sheets API
    ///
    /// Token *acquisition* (service-account exchange, refresh) is owned by
    /// the deployment; this process only consumes the resulting token.
    pub sheets_token: String,
    /// Tab with the area/sector list
    pub areas_sheet: String,
    /// Tab with the neighborhood list
    pub neighborhoods_sheet: String,
    /// Business timezone for registration timestamps
    pub timezone: String,
    /// Ticket paper width in characters
    pub ticket_width: usize,
    /// Logo path; missing or unreadable falls back to no logo
    pub logo_path: Option<String>,
    /// Print relay base URL; unset disables forwarding
    pub print_relay_url: Option<String>,
    /// Print relay token; unset disables forwarding
    pub print_relay_token: Option<String>,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Missing variables fall back to defaults; values that are required
    /// (spreadsheet id, token) are validated where they are consumed.
    pub fn from_env() -> Self {
        Self {
            spreadsheet_id: std::env::var("SPREADSHEET_ID").unwrap_or_default(),
            sheets_api_base: std::env::var("SHEETS_API_BASE")
                .unwrap_or_else(|_| "https://sheets.googleapis.com/v4/spreadsheets".into()),
            sheets_token: std::env::var("SHEETS_TOKEN").unwrap_or_default(),
            areas_sheet: std::env::var("AREAS_SHEET").unwrap_or_else(|_| "Nomes".into()),
            neighborhoods_sheet: std::env::var("BAIRROS_SHEET").unwrap_or_else(|_| "Bairro".into()),
            timezone: std::env::var("APP_TZ").unwrap_or_else(|_| "America/Manaus".into()),
            ticket_width: std::env::var("TICKET_WIDTH")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(32),
            logo_path: std::env::var("TICKET_LOGO_PATH").ok(),
            print_relay_url: std::env::var("PRINT_RELAY_URL").ok().filter(|v| !v.is_empty()),
            print_relay_token: std::env::var("PRINT_RELAY_TOKEN")
                .ok()
                .filter(|v| !v.is_empty()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
