//! Purchase receipts.

use std::fmt;

use box_office_core::account::AccountId;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Message carried by every successful receipt.
pub const SUCCESS_MESSAGE: &str = "Tickets purchased successfully";

/// Proof of a completed purchase. Only produced once payment has been taken
/// and seats reserved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PurchaseReceipt {
    /// Correlation ID of the command that produced this receipt.
    pub purchase_id: Uuid,
    /// The purchasing account.
    pub account_id: AccountId,
    /// Amount charged, in whole currency units.
    pub total_cost: u64,
    /// Seats reserved.
    pub seats_reserved: u64,
    /// When the purchase completed.
    pub purchased_at: DateTime<Utc>,
}

impl PurchaseReceipt {
    /// The success message.
    #[must_use]
    pub const fn message(&self) -> &'static str {
        SUCCESS_MESSAGE
    }

    /// Formatted total, e.g. `Total Cost: 70`.
    #[must_use]
    pub fn total_cost_line(&self) -> String {
        format!("Total Cost: {}", self.total_cost)
    }

    /// Formatted seat count, e.g. `Seats Reserved: 5`.
    #[must_use]
    pub fn seats_reserved_line(&self) -> String {
        format!("Seats Reserved: {}", self.seats_reserved)
    }
}

impl fmt::Display for PurchaseReceipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.message())?;
        writeln!(f, "{}", self.total_cost_line())?;
        write!(f, "{}", self.seats_reserved_line())
    }
}
