//! Application services for the purchase context.

pub mod command_handlers;
pub mod ticket_service;
