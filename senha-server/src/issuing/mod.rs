//! Issuing module - registrations, ticket numbering and submission
//!
//! Ticket numbers are never chosen locally: each one is derived from the
//! row position the store acknowledges for the append, then written back
//! into the row's leading cell.

pub mod registration;
pub mod service;

pub use registration::{QuotaExceeded, Registration, SHEET_HEADERS, SubmitOutcome, SubmitRequest};
pub use service::TicketService;
