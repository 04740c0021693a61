//! # senha-printer
//!
//! ESC/POS thermal printer library - low-level printing capabilities only.
//!
//! ## Scope
//!
//! This crate handles HOW to print:
//! - ESC/POS command building (text, QR, Code128, raster images)
//! - Windows-1252 encoding for Latin text
//! - Delivery to an HTTP print relay
//! - Image/logo processing
//!
//! Business logic (WHAT to print) should stay in application code:
//! - Ticket layout and issuing → senha-server
//!
//! ## Example
//!
//! ```ignore
//! use senha_printer::{EscPosBuilder, Printer, RelayPrinter};
//!
//! // Build ESC/POS content
//! let mut builder = EscPosBuilder::new(32);
//! builder.center();
//! builder.double_size();
//! builder.line("Distribuidor de Senhas");
//! builder.reset_size();
//! builder.barcode_code128("12", 80);
//! builder.cut_feed(3);
//!
//! // Send to the relay next to the printer
//! let printer = RelayPrinter::new("http://10.0.0.5:8631", "token")?;
//! printer.print(&builder.build()).await?;
//! ```

mod encoding;
mod error;
mod escpos;
mod printer;

// Re-exports
pub use encoding::{convert_to_cp1252, latin_width, pad_latin, truncate_latin};
pub use error::{PrintError, PrintResult};
pub use escpos::EscPosBuilder;
pub use printer::{Printer, RelayPrinter};

#[cfg(feature = "image")]
pub use escpos::process_logo;
