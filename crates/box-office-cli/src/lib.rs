//! Box office interactive harness.
//!
//! Reads an account ID and ticket lines from a line-oriented prompt, runs
//! one purchase through the [`TicketService`] and prints the outcome.
//!
//! [`TicketService`]: box_office_purchase::application::ticket_service::TicketService

pub mod config;
pub mod error;
pub mod gateways;
pub mod session;
