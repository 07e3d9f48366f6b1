//! Test gateways: mock `PaymentGateway` and `SeatReservationGateway`
//! implementations for tests.

use std::sync::Mutex;

use box_office_core::account::AccountId;
use box_office_core::error::GatewayError;
use box_office_core::gateway::{PaymentGateway, SeatReservationGateway};

/// A payment gateway that records every `make_payment` call and always
/// succeeds.
#[derive(Debug, Default)]
pub struct RecordingPaymentGateway {
    payments: Mutex<Vec<(AccountId, u64)>>,
}

impl RecordingPaymentGateway {
    /// Create a new recording gateway with no calls recorded.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of all `(account_id, total_amount)` pairs charged.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn payments(&self) -> Vec<(AccountId, u64)> {
        self.payments.lock().unwrap().clone()
    }
}

impl PaymentGateway for RecordingPaymentGateway {
    fn make_payment(&self, account_id: AccountId, total_amount: u64) -> Result<(), GatewayError> {
        self.payments
            .lock()
            .unwrap()
            .push((account_id, total_amount));
        Ok(())
    }
}

/// A seat reservation gateway that records every `reserve_seat` call and
/// always succeeds.
#[derive(Debug, Default)]
pub struct RecordingSeatReservationGateway {
    reservations: Mutex<Vec<(AccountId, u64)>>,
}

impl RecordingSeatReservationGateway {
    /// Create a new recording gateway with no calls recorded.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of all `(account_id, total_seats)` pairs reserved.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn reservations(&self) -> Vec<(AccountId, u64)> {
        self.reservations.lock().unwrap().clone()
    }
}

impl SeatReservationGateway for RecordingSeatReservationGateway {
    fn reserve_seat(&self, account_id: AccountId, total_seats: u64) -> Result<(), GatewayError> {
        self.reservations
            .lock()
            .unwrap()
            .push((account_id, total_seats));
        Ok(())
    }
}

/// A payment gateway that always reports the processor as unavailable.
/// Useful for testing that nothing is reserved when payment fails.
#[derive(Debug)]
pub struct FailingPaymentGateway;

impl PaymentGateway for FailingPaymentGateway {
    fn make_payment(&self, _account_id: AccountId, _total_amount: u64) -> Result<(), GatewayError> {
        Err(GatewayError::Unavailable("connection refused".into()))
    }
}

/// A seat reservation gateway that always declines. Useful for testing the
/// uncompensated payment-then-reservation-failure path.
#[derive(Debug)]
pub struct FailingSeatReservationGateway;

impl SeatReservationGateway for FailingSeatReservationGateway {
    fn reserve_seat(&self, _account_id: AccountId, _total_seats: u64) -> Result<(), GatewayError> {
        Err(GatewayError::Declined {
            reason: "no seats available".into(),
        })
    }
}
