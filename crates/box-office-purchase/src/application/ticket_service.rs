//! The ticket purchase service.

use std::fmt;
use std::sync::Arc;

use box_office_core::clock::Clock;
use box_office_core::error::PurchaseError;
use box_office_core::gateway::{PaymentGateway, SeatReservationGateway};

use super::command_handlers::handle_purchase_tickets;
use crate::domain::commands::PurchaseTickets;
use crate::domain::receipt::PurchaseReceipt;
use crate::domain::ticket_request::TicketLine;

/// Entry point for ticket purchases.
///
/// Holds the gateways and clock it was built with for its whole lifetime and
/// keeps no other state between calls. Cloning shares the same handles.
#[derive(Clone)]
pub struct TicketService {
    payment: Arc<dyn PaymentGateway>,
    seats: Arc<dyn SeatReservationGateway>,
    clock: Arc<dyn Clock>,
}

impl TicketService {
    /// Creates a service over the given collaborators.
    #[must_use]
    pub fn new(
        payment: Arc<dyn PaymentGateway>,
        seats: Arc<dyn SeatReservationGateway>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            payment,
            seats,
            clock,
        }
    }

    /// Purchases `lines` for `account_id`.
    ///
    /// # Errors
    ///
    /// See [`handle_purchase_tickets`].
    pub fn purchase_tickets<L>(
        &self,
        account_id: i64,
        lines: &[L],
    ) -> Result<PurchaseReceipt, PurchaseError>
    where
        L: TicketLine + Clone + Send + Sync + fmt::Debug,
    {
        let command = PurchaseTickets::new(account_id, lines.to_vec());
        handle_purchase_tickets(
            &command,
            self.clock.as_ref(),
            self.payment.as_ref(),
            self.seats.as_ref(),
        )
    }
}

impl fmt::Debug for TicketService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TicketService").finish_non_exhaustive()
    }
}
