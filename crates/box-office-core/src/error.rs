//! Domain error types.
//!
//! Every rejection carries a fixed, human-readable message. Callers either
//! match on the variant or compare the rendered message; both are stable.

use thiserror::Error;

/// Top-level error returned by a purchase attempt.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PurchaseError {
    /// Malformed low-level input (caller or programmer error).
    #[error(transparent)]
    InvalidArgument(#[from] ArgumentError),

    /// A business rule rejected an otherwise well-formed purchase.
    #[error(transparent)]
    InvalidPurchase(#[from] PurchaseViolation),

    /// The payment gateway failed. Nothing has been reserved.
    #[error("payment failed: {0}")]
    Payment(#[source] GatewayError),

    /// The seat reservation gateway failed after payment was taken.
    /// The payment is not reversed.
    #[error("seat reservation failed: {0}")]
    SeatReservation(#[source] GatewayError),
}

/// Coarse classification of a [`PurchaseError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// See [`PurchaseError::InvalidArgument`].
    InvalidArgument,
    /// See [`PurchaseError::InvalidPurchase`].
    InvalidPurchase,
    /// A collaborator failed.
    Gateway,
}

impl PurchaseError {
    /// Returns the error category.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidArgument(_) => ErrorKind::InvalidArgument,
            Self::InvalidPurchase(_) => ErrorKind::InvalidPurchase,
            Self::Payment(_) | Self::SeatReservation(_) => ErrorKind::Gateway,
        }
    }
}

/// Malformed input detected before any business rule is evaluated.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ArgumentError {
    /// The account identifier is missing, non-numeric, fractional or below 1.
    #[error("Invalid account id.")]
    InvalidAccountId,

    /// A ticket request named a category outside ADULT, CHILD and INFANT.
    #[error("type must be ADULT, CHILD, or INFANT")]
    UnknownTicketType {
        /// The rejected label.
        value: String,
    },

    /// A ticket request quantity was not an integer.
    #[error("number of tickets must be an integer")]
    NonIntegerQuantity {
        /// The rejected input.
        value: String,
    },
}

/// A violated purchase rule, in the order the rules are checked.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PurchaseViolation {
    /// No ticket requests were supplied.
    #[error("Insufficient arguments.")]
    InsufficientArguments,

    /// A request line carried an unrecognised ticket type.
    #[error("Invalid ticket type.")]
    InvalidTicketType,

    /// A request line carried a negative or non-integer quantity.
    #[error("Number of Tickets must be a positive integer.")]
    InvalidTicketCount,

    /// Child or infant tickets were requested without an adult ticket.
    #[error("Child and Infant tickets cannot be purchased without purchasing an Adult ticket.")]
    AdultRequired,

    /// More infants than adults were requested.
    #[error("You may not have more infants than adults.")]
    TooManyInfants,

    /// The purchase exceeds the per-purchase ticket cap.
    #[error("Only a maximum of {max} tickets that can be purchased at a time.")]
    TooManyTickets {
        /// The cap that was exceeded.
        max: u64,
    },

    /// The purchase would reserve no seats.
    #[error("No tickets have been requested, this must be a positive integer.")]
    NoSeatsRequested,
}

/// Failure reported by an external gateway.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GatewayError {
    /// The collaborator refused the request.
    #[error("declined: {reason}")]
    Declined {
        /// Reason given by the collaborator.
        reason: String,
    },

    /// The collaborator could not be reached or failed internally.
    #[error("unavailable: {0}")]
    Unavailable(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_violation_messages_render_verbatim() {
        let err = PurchaseError::from(PurchaseViolation::TooManyTickets { max: 20 });
        assert_eq!(
            err.to_string(),
            "Only a maximum of 20 tickets that can be purchased at a time."
        );
        assert_eq!(
            PurchaseError::from(PurchaseViolation::InsufficientArguments).to_string(),
            "Insufficient arguments."
        );
    }

    #[test]
    fn test_invalid_account_id_is_an_argument_error() {
        let err = PurchaseError::from(ArgumentError::InvalidAccountId);
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert_eq!(err.to_string(), "Invalid account id.");
    }

    #[test]
    fn test_gateway_failures_classify_as_gateway() {
        let payment = PurchaseError::Payment(GatewayError::Unavailable("timeout".into()));
        let seats = PurchaseError::SeatReservation(GatewayError::Declined {
            reason: "sold out".into(),
        });
        assert_eq!(payment.kind(), ErrorKind::Gateway);
        assert_eq!(seats.kind(), ErrorKind::Gateway);
        assert_eq!(seats.to_string(), "seat reservation failed: declined: sold out");
    }
}
