//! Commands for the purchase context.

use box_office_core::command::Command;
use uuid::Uuid;

use super::ticket_request::TicketLine;

/// Command to purchase a set of tickets for one account.
#[derive(Debug, Clone)]
pub struct PurchaseTickets<L> {
    /// The correlation ID for tracing; becomes the receipt's purchase ID.
    pub correlation_id: Uuid,
    /// The purchasing account, as supplied by the caller.
    pub account_id: i64,
    /// The requested ticket lines.
    pub lines: Vec<L>,
}

impl<L: TicketLine> PurchaseTickets<L> {
    /// Creates a command with a fresh correlation ID.
    #[must_use]
    pub fn new(account_id: i64, lines: Vec<L>) -> Self {
        Self {
            correlation_id: Uuid::new_v4(),
            account_id,
            lines,
        }
    }
}

impl<L: TicketLine + Send + Sync + std::fmt::Debug> Command for PurchaseTickets<L> {
    fn command_type(&self) -> &'static str {
        "purchase.purchase_tickets"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}
