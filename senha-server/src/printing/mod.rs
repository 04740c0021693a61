//! Ticket Printing Module
//!
//! This module handles WHAT gets printed:
//! - Ticket layout → ESC/POS rendering (one page per issued ticket)
//! - Logo resolution, cached for the process lifetime
//! - Forwarding the rendered document to the optional print relay

pub mod dispatch;
pub mod logo;
pub mod renderer;

pub use dispatch::forward_document;
pub use renderer::{TICKET_FOOTER, TICKET_TITLE, TicketRenderer};
