//! Aggregation, pricing and seat calculation.

use box_office_core::error::PurchaseError;

use super::counts::TicketCounts;
use super::ticket_request::{TicketCategory, TicketLine};
use super::validation::{check_ticket_quantity, check_ticket_type};

/// Groups ticket lines by category, summing their quantities.
///
/// Each line's category and quantity are validated as it is grouped, and the
/// first bad line aborts the aggregation.
///
/// # Errors
///
/// Returns `PurchaseViolation::InvalidTicketType` or
/// `PurchaseViolation::InvalidTicketCount` for the first offending line.
pub fn categorise_and_count<L: TicketLine>(lines: &[L]) -> Result<TicketCounts, PurchaseError> {
    let mut counts = TicketCounts::new();
    for line in lines {
        let category = check_ticket_type(line.ticket_type())?;
        let quantity = check_ticket_quantity(line.no_of_tickets())?;
        counts.record(category, quantity);
    }
    Ok(counts)
}

/// Total price in whole currency units.
#[must_use]
pub fn total_cost(counts: &TicketCounts) -> u64 {
    TicketCategory::ALL
        .iter()
        .map(|category| counts.count(*category).saturating_mul(category.unit_price()))
        .fold(0, u64::saturating_add)
}

/// Number of seats to reserve. Infants do not take a seat.
#[must_use]
pub fn total_seats(counts: &TicketCounts) -> u64 {
    TicketCategory::ALL
        .iter()
        .filter(|category| category.occupies_seat())
        .map(|category| counts.count(*category))
        .fold(0, u64::saturating_add)
}
