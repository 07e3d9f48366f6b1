//! Box Office Core: shared domain abstractions.
//!
//! This crate defines the identifiers, error types and collaborator traits
//! that the purchase context and its hosts depend on. It contains no
//! infrastructure code.

pub mod account;
pub mod clock;
pub mod command;
pub mod error;
pub mod gateway;
