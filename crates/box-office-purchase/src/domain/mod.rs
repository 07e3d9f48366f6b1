//! Domain model for the purchase context.

pub mod commands;
pub mod counts;
pub mod pricing;
pub mod receipt;
pub mod ticket_request;
pub mod validation;
