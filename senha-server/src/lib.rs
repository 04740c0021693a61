//! Senha Server - event queue-ticket issuer
//!
//! Issues sequential ticket numbers ("senhas") per area, persists each
//! registration on the area's tab of a shared spreadsheet, and renders a
//! printable ESC/POS ticket per registration.
//!
//! # Module structure
//!
//! ```text
//! senha-server/src/
//! ├── core/          # configuration, errors
//! ├── catalog/       # area + neighborhood tabs (re-read every call)
//! ├── sheets/        # RowStore trait, Sheets REST client, memory store
//! ├── issuing/       # registrations, numbering, submission
//! ├── printing/      # ticket rendering, logo cache, relay dispatch
//! └── utils/         # normalizers, time, logging
//! ```
//!
//! # Numbering invariant
//!
//! A registration's ticket number is derived from the row position the
//! store acknowledges for its append (header on row 1, data from row 2 =
//! ticket 1) and is then written back into the row's first cell. Numbers
//! are never fabricated locally and never reused. Appends within one
//! submission are strictly sequential; serialization across concurrent
//! processes is delegated to the store.

pub mod catalog;
pub mod core;
pub mod issuing;
pub mod printing;
pub mod sheets;
pub mod utils;

// Re-export public types
pub use catalog::Area;
pub use core::{AppError, AppResult, Config};
pub use issuing::{QuotaExceeded, Registration, SubmitOutcome, SubmitRequest, TicketService};
pub use printing::TicketRenderer;
pub use sheets::{MemoryStore, RowStore, SheetsClient};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};
