//! External collaborator abstractions.
//!
//! The purchase context only ever calls these for their side effect. Both
//! calls are synchronous and a failure is fatal to the purchase in progress.

use crate::account::AccountId;
use crate::error::GatewayError;

/// Takes payment for a purchase.
pub trait PaymentGateway: Send + Sync {
    /// Charges `total_amount` whole currency units to `account_id`.
    ///
    /// # Errors
    ///
    /// Returns `GatewayError` if the payment could not be taken.
    fn make_payment(&self, account_id: AccountId, total_amount: u64) -> Result<(), GatewayError>;
}

/// Reserves seats for a purchase.
pub trait SeatReservationGateway: Send + Sync {
    /// Reserves `total_seats` seats for `account_id`.
    ///
    /// # Errors
    ///
    /// Returns `GatewayError` if the seats could not be reserved.
    fn reserve_seat(&self, account_id: AccountId, total_seats: u64) -> Result<(), GatewayError>;
}
