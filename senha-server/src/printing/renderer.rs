//! Ticket renderer
//!
//! Renders registrations into ESC/POS format for thermal printers.

use senha_printer::{EscPosBuilder, truncate_latin};

use crate::issuing::Registration;

/// Title block printed on every ticket
pub const TICKET_TITLE: &str = "Distribuidor de Senhas";

/// Footer printed on every ticket
pub const TICKET_FOOTER: &str = "Guarde este ticket até o atendimento.";

/// Ticket renderer
///
/// Pure function of the registrations: rendering never touches the store
/// and never fails — unset optional fields print as empty text, a missing
/// logo simply omits the logo region.
pub struct TicketRenderer {
    width: usize,
}

impl TicketRenderer {
    /// Create a new renderer with specified paper width in characters
    ///
    /// Common widths:
    /// - 58mm paper: 32 characters
    /// - 80mm paper: 48 characters
    pub fn new(width: usize) -> Self {
        Self { width }
    }

    /// Render a single ticket to ESC/POS bytes
    pub fn render(&self, registration: &Registration, logo: Option<&[u8]>) -> Vec<u8> {
        let mut b = EscPosBuilder::new(self.width);
        self.render_page(&mut b, registration, logo);
        b.build()
    }

    /// Render a batch, one page (cut-terminated block) per registration,
    /// in input order
    pub fn render_batch(&self, registrations: &[Registration], logo: Option<&[u8]>) -> Vec<u8> {
        let mut b = EscPosBuilder::new(self.width);
        for registration in registrations {
            self.render_page(&mut b, registration, logo);
        }
        b.build()
    }

    fn render_page(&self, b: &mut EscPosBuilder, reg: &Registration, logo: Option<&[u8]>) {
        let number = reg.number.to_string();

        if let Some(raster) = logo {
            b.raw(raster);
        }

        // Title block
        b.center();
        b.bold();
        b.double_height();
        b.line(TICKET_TITLE);
        b.reset_size();
        b.bold_off();
        b.line(&reg.area);
        b.sep_double();

        // Ticket number, large print
        b.size(3, 3);
        b.bold();
        b.line(&number);
        b.bold_off();
        b.reset_size();
        b.newline();

        // Code128 with the number, QR with the scan payload
        b.barcode_code128(&number, 80);
        b.newline();
        b.qr_code(&format!("{}|{}|{}", reg.area, number, reg.name), 6);

        // Attendee fields
        b.left();
        b.sep_single();
        self.field(b, "Nome: ", &reg.name);
        self.field(b, "Telefone: ", &reg.phone);
        self.field(b, "Bairro: ", &reg.neighborhood);
        self.field(b, "Registro: ", &reg.registered_at);

        // Footer
        b.newline();
        b.center();
        b.line(TICKET_FOOTER);

        b.cut_feed(3);
    }

    /// Label + value on one line, value truncated to the paper width
    fn field(&self, b: &mut EscPosBuilder, label: &str, value: &str) {
        let available = self.width.saturating_sub(label.len());
        b.line(&format!("{}{}", label, truncate_latin(value, available)));
    }
}

impl Default for TicketRenderer {
    fn default() -> Self {
        Self::new(32)
    }
}
