//! Process-scoped logo cache
//!
//! The logo asset is immutable for the process's duration, so it is
//! resolved and rasterized at most once: the cache holds either the
//! ESC/POS raster bytes or the decision that no logo is available, and is
//! never re-resolved. A missing, unreadable or undecodable asset means
//! "no logo" — it never fails a render.

use std::path::PathBuf;
use std::sync::OnceLock;

/// Bundled logo used when no path is configured
pub const DEFAULT_LOGO_PATH: &str = "assets/logo.png";

/// unset → resolved-to-raster / resolved-to-absent
static LOGO_RASTER: OnceLock<Option<Vec<u8>>> = OnceLock::new();

/// Pick the first existing candidate: the configured path, or the bundled
/// default when nothing is configured
fn resolve_logo_path(configured: Option<&str>) -> Option<PathBuf> {
    let candidate = PathBuf::from(configured.unwrap_or(DEFAULT_LOGO_PATH));
    candidate.is_file().then_some(candidate)
}

/// The logo raster for this process, if any
///
/// The first call resolves and rasterizes; later calls return the same
/// answer regardless of their argument.
pub fn cached_raster(configured: Option<&str>) -> Option<&'static [u8]> {
    LOGO_RASTER
        .get_or_init(|| resolve_logo_path(configured).and_then(|p| senha_printer::process_logo(&p)))
        .as_deref()
}
