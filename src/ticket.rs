//! Confirmation ticket shown on the success panel.

use qrcode::QrCode;

use crate::client::RegistrationResult;
use crate::error::TicketError;
use crate::form::{PaymentStatus, RegistrationDraft};

/// Pixel size of the rendered ticket code.
pub const TICKET_CODE_SIZE: u32 = 160;

/// Payment badge on the ticket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentBadge {
    Paid,
    Pending,
}

impl PaymentBadge {
    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Paid => "ticket-status paid",
            Self::Pending => "ticket-status pending",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Paid => "Payment Completed",
            Self::Pending => "Payment Pending",
        }
    }
}

impl From<PaymentStatus> for PaymentBadge {
    fn from(status: PaymentStatus) -> Self {
        match status {
            PaymentStatus::Paid => Self::Paid,
            PaymentStatus::Pending => Self::Pending,
        }
    }
}

/// Contents of the confirmation panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketView {
    pub ticket_id: String,
    pub name: String,
    pub email: String,
    /// Selected events joined with ", ".
    pub events: String,
    pub department: String,
    pub badge: PaymentBadge,
    /// Server's word on the confirmation email, when it gave one.
    pub email_sent: Option<bool>,
}

impl TicketView {
    pub fn new(result: &RegistrationResult, draft: &RegistrationDraft) -> Self {
        Self {
            ticket_id: result.ticket_id.clone(),
            name: draft.name.clone(),
            email: draft.email.clone(),
            events: draft.events.join(", "),
            department: draft.department_display().to_string(),
            badge: result.payment_status.into(),
            email_sent: result.email_sent,
        }
    }
}

/// Scannable code encoding a ticket id.
pub struct TicketCode {
    code: QrCode,
}

impl TicketCode {
    pub fn encode(ticket_id: &str) -> Result<Self, TicketError> {
        let code =
            QrCode::new(ticket_id.as_bytes()).map_err(|e| TicketError::Encode(e.to_string()))?;
        Ok(Self { code })
    }

    /// Modules per side.
    pub fn width(&self) -> usize {
        self.code.width()
    }

    /// Text rendering for terminals, two columns per module.
    pub fn to_text(&self) -> String {
        self.code
            .render::<char>()
            .quiet_zone(true)
            .module_dimensions(2, 1)
            .build()
    }
}

impl std::fmt::Debug for TicketCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TicketCode")
            .field("width", &self.width())
            .finish()
    }
}
