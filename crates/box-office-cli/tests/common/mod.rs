//! Shared helpers for harness integration tests.
#![allow(dead_code)]

use std::io::Cursor;
use std::sync::Arc;

use box_office_cli::config::OutputFormat;
use box_office_cli::session::{Session, SessionOutcome};
use box_office_core::gateway::{PaymentGateway, SeatReservationGateway};
use box_office_purchase::application::ticket_service::TicketService;
use box_office_test_support::{
    FixedClock, RecordingPaymentGateway, RecordingSeatReservationGateway,
};

/// Result of driving one session with scripted input.
pub struct Transcript {
    /// Everything the session wrote, prompts included.
    pub output: String,
    /// How the session ended.
    pub outcome: SessionOutcome,
    /// Calls made to the payment gateway.
    pub payment: Arc<RecordingPaymentGateway>,
    /// Calls made to the seat reservation gateway.
    pub seats: Arc<RecordingSeatReservationGateway>,
}

/// Runs a session over `input` with recording gateways.
pub fn run_session(input: &str, format: OutputFormat) -> Transcript {
    let payment = Arc::new(RecordingPaymentGateway::new());
    let seats = Arc::new(RecordingSeatReservationGateway::new());
    let (outcome, output) = run_with(input, format, payment.clone(), seats.clone());
    Transcript {
        output,
        outcome,
        payment,
        seats,
    }
}

/// Runs a session over `input` with the given gateways.
pub fn run_with(
    input: &str,
    format: OutputFormat,
    payment: Arc<dyn PaymentGateway>,
    seats: Arc<dyn SeatReservationGateway>,
) -> (SessionOutcome, String) {
    let service = TicketService::new(payment, seats, Arc::new(FixedClock::standard()));
    let mut output = Vec::new();
    let outcome = Session::new(Cursor::new(input.to_owned()), &mut output, format)
        .run(&service)
        .unwrap();
    (outcome, String::from_utf8(output).unwrap())
}
