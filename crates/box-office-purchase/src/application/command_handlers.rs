//! Command handlers for the purchase context.
//!
//! This module contains the application-level handler that orchestrates the
//! domain logic: validate, aggregate, price, pay, reserve.

use box_office_core::clock::Clock;
use box_office_core::command::Command;
use box_office_core::error::PurchaseError;
use box_office_core::gateway::{PaymentGateway, SeatReservationGateway};
use tracing::{debug, info, instrument, warn};

use crate::domain::commands::PurchaseTickets;
use crate::domain::pricing::{categorise_and_count, total_cost, total_seats};
use crate::domain::receipt::PurchaseReceipt;
use crate::domain::ticket_request::TicketLine;
use crate::domain::validation::{
    check_account_id, check_seats_requested, check_sufficient_parameters, validate_counts,
};

/// Handles the `PurchaseTickets` command.
///
/// Steps run strictly in order and the first failure aborts the purchase:
/// the structural checks, aggregation with per-line checks, the rules on the
/// aggregated counts, payment, the seat check, and finally the reservation.
/// A reservation failure after a successful payment is returned as-is; the
/// payment is not reversed.
///
/// # Errors
///
/// Returns `PurchaseError::InvalidArgument` or `PurchaseError::InvalidPurchase`
/// for rejected input, and `PurchaseError::Payment` or
/// `PurchaseError::SeatReservation` when a gateway fails.
#[instrument(
    skip_all,
    fields(
        command_type = command.command_type(),
        correlation_id = %command.correlation_id,
        account_id = command.account_id,
    )
)]
pub fn handle_purchase_tickets<L>(
    command: &PurchaseTickets<L>,
    clock: &dyn Clock,
    payment: &dyn PaymentGateway,
    seats: &dyn SeatReservationGateway,
) -> Result<PurchaseReceipt, PurchaseError>
where
    L: TicketLine + Send + Sync + std::fmt::Debug,
{
    let result = purchase(command, clock, payment, seats);
    match &result {
        Ok(receipt) => info!(
            total_cost = receipt.total_cost,
            seats_reserved = receipt.seats_reserved,
            "tickets purchased"
        ),
        Err(err) => warn!(error = %err, kind = ?err.kind(), "purchase rejected"),
    }
    result
}

fn purchase<L: TicketLine>(
    command: &PurchaseTickets<L>,
    clock: &dyn Clock,
    payment: &dyn PaymentGateway,
    seats: &dyn SeatReservationGateway,
) -> Result<PurchaseReceipt, PurchaseError> {
    check_sufficient_parameters(&command.lines)?;
    let account_id = check_account_id(command.account_id)?;

    let counts = categorise_and_count(&command.lines)?;
    let counted: Vec<_> = counts.iter().collect();
    debug!(counts = ?counted, "tickets counted");
    validate_counts(&counts)?;

    let total_cost = total_cost(&counts);
    debug!(total_cost, "taking payment");
    payment
        .make_payment(account_id, total_cost)
        .map_err(PurchaseError::Payment)?;

    let seats_reserved = check_seats_requested(total_seats(&counts))?;
    debug!(seats_reserved, "reserving seats");
    seats
        .reserve_seat(account_id, seats_reserved)
        .map_err(PurchaseError::SeatReservation)?;

    Ok(PurchaseReceipt {
        purchase_id: command.correlation_id,
        account_id,
        total_cost,
        seats_reserved,
        purchased_at: clock.now(),
    })
}
