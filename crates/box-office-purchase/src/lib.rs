//! Box office: ticket purchase context.
//!
//! Responsible for validating a purchaser's ticket requests against the
//! venue's purchase rules, pricing them, and driving the payment and seat
//! reservation gateways in a fixed order.

pub mod application;
pub mod domain;
