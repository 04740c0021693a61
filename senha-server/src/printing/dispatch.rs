//! Print relay dispatch
//!
//! Forwarding is optional by deployment: a kiosk without a relay simply
//! offers the document for download/printing elsewhere. Missing
//! configuration is therefore a silent no-op, not an error.

use senha_printer::{PrintResult, Printer, RelayPrinter};
use tracing::{debug, info};

/// Forward a rendered document to the configured print relay
///
/// Returns `Ok(true)` when the relay accepted the job, `Ok(false)` when
/// no relay is configured.
pub async fn forward_document(
    relay_url: Option<&str>,
    relay_token: Option<&str>,
    document: &[u8],
) -> PrintResult<bool> {
    let (Some(url), Some(token)) = (relay_url, relay_token) else {
        debug!("print relay not configured, skipping forward");
        return Ok(false);
    };

    let printer = RelayPrinter::new(url, token)?;
    printer.print(document).await?;
    info!(bytes = document.len(), "document forwarded to print relay");
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_unconfigured_relay_is_noop() {
        assert!(!forward_document(None, None, b"doc").await.unwrap());
        assert!(!forward_document(Some("http://x"), None, b"doc").await.unwrap());
        assert!(!forward_document(None, Some("tok"), b"doc").await.unwrap());
    }

    #[tokio::test]
    async fn test_invalid_relay_url_is_config_error() {
        let err = forward_document(Some("not a url"), Some("tok"), b"doc")
            .await
            .unwrap_err();
        assert!(matches!(err, senha_printer::PrintError::InvalidConfig(_)));
    }
}
