//! Shared test doubles for the box office ticket purchase engine.

mod clock;
mod gateway;

pub use clock::FixedClock;
pub use gateway::{
    FailingPaymentGateway, FailingSeatReservationGateway, RecordingPaymentGateway,
    RecordingSeatReservationGateway,
};
