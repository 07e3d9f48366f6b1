//! Purchase rules.
//!
//! Each check is stateless and fails fast with the first violated rule.
//! Structural checks come before the business rules so malformed input never
//! reaches pricing or seat calculation.

use box_office_core::account::AccountId;
use box_office_core::error::{PurchaseError, PurchaseViolation};

use super::counts::TicketCounts;
use super::ticket_request::TicketCategory;

/// Most tickets, of any category, that one purchase may contain.
pub const MAX_TICKETS_PER_PURCHASE: u64 = 20;

/// At least one ticket line must be supplied.
///
/// # Errors
///
/// Returns `PurchaseViolation::InsufficientArguments` for an empty slice.
pub fn check_sufficient_parameters<L>(lines: &[L]) -> Result<(), PurchaseError> {
    if lines.is_empty() {
        return Err(PurchaseViolation::InsufficientArguments.into());
    }
    Ok(())
}

/// The account identifier must be a positive integer.
///
/// # Errors
///
/// Returns `ArgumentError::InvalidAccountId` if `raw < 1`.
pub fn check_account_id(raw: i64) -> Result<AccountId, PurchaseError> {
    AccountId::new(raw)
}

/// A line's category must be one of the supported categories.
///
/// # Errors
///
/// Returns `PurchaseViolation::InvalidTicketType` if it was not recognised.
pub fn check_ticket_type(
    category: Option<TicketCategory>,
) -> Result<TicketCategory, PurchaseError> {
    category.ok_or_else(|| PurchaseViolation::InvalidTicketType.into())
}

/// A line's quantity must be a non-negative integer.
///
/// # Errors
///
/// Returns `PurchaseViolation::InvalidTicketCount` if the quantity is
/// missing or negative.
pub fn check_ticket_quantity(quantity: Option<i64>) -> Result<u64, PurchaseError> {
    quantity
        .and_then(|q| u64::try_from(q).ok())
        .ok_or_else(|| PurchaseViolation::InvalidTicketCount.into())
}

/// Every purchase needs an ADULT line, and child or infant tickets need at
/// least one adult ticket.
///
/// A zero-quantity ADULT line satisfies the first condition only.
///
/// # Errors
///
/// Returns `PurchaseViolation::AdultRequired`.
pub fn check_adult_accompaniment(counts: &TicketCounts) -> Result<(), PurchaseError> {
    let dependants = counts
        .count(TicketCategory::Child)
        .saturating_add(counts.count(TicketCategory::Infant));
    let adults = counts.count(TicketCategory::Adult);
    if !counts.contains(TicketCategory::Adult) || (dependants > 0 && adults == 0) {
        return Err(PurchaseViolation::AdultRequired.into());
    }
    Ok(())
}

/// Infants sit on an adult's lap, so they may not outnumber adults.
///
/// # Errors
///
/// Returns `PurchaseViolation::TooManyInfants`.
pub fn check_infant_ratio(counts: &TicketCounts) -> Result<(), PurchaseError> {
    if counts.count(TicketCategory::Adult) < counts.count(TicketCategory::Infant) {
        return Err(PurchaseViolation::TooManyInfants.into());
    }
    Ok(())
}

/// The purchase may not exceed [`MAX_TICKETS_PER_PURCHASE`] tickets.
///
/// # Errors
///
/// Returns `PurchaseViolation::TooManyTickets`.
pub fn check_maximum_tickets(counts: &TicketCounts) -> Result<(), PurchaseError> {
    if counts.total() > MAX_TICKETS_PER_PURCHASE {
        return Err(PurchaseViolation::TooManyTickets {
            max: MAX_TICKETS_PER_PURCHASE,
        }
        .into());
    }
    Ok(())
}

/// Runs the rules that apply to the aggregated counts, in order:
/// adult accompaniment, infant ratio, ticket cap.
///
/// # Errors
///
/// Returns the first violated rule.
pub fn validate_counts(counts: &TicketCounts) -> Result<(), PurchaseError> {
    check_adult_accompaniment(counts)?;
    check_infant_ratio(counts)?;
    check_maximum_tickets(counts)
}

/// A purchase must reserve at least one seat.
///
/// # Errors
///
/// Returns `PurchaseViolation::NoSeatsRequested` when `total_seats` is zero.
pub fn check_seats_requested(total_seats: u64) -> Result<u64, PurchaseError> {
    if total_seats == 0 {
        return Err(PurchaseViolation::NoSeatsRequested.into());
    }
    Ok(total_seats)
}
