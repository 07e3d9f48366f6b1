//! Stand-in gateways for the harness binary.
//!
//! Real payment and seat reservation services live outside this workspace.
//! These accept every call and record it in the log.

use box_office_core::account::AccountId;
use box_office_core::error::GatewayError;
use box_office_core::gateway::{PaymentGateway, SeatReservationGateway};
use tracing::info;

/// Accepts every payment.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingPaymentGateway;

impl PaymentGateway for LoggingPaymentGateway {
    fn make_payment(&self, account_id: AccountId, total_amount: u64) -> Result<(), GatewayError> {
        info!(%account_id, total_amount, "payment accepted");
        Ok(())
    }
}

/// Accepts every reservation.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingSeatReservationGateway;

impl SeatReservationGateway for LoggingSeatReservationGateway {
    fn reserve_seat(&self, account_id: AccountId, total_seats: u64) -> Result<(), GatewayError> {
        info!(%account_id, total_seats, "seats reserved");
        Ok(())
    }
}
