//! Ticket categories and per-line ticket requests.

use std::fmt;
use std::str::FromStr;

use box_office_core::error::{ArgumentError, PurchaseError};
use serde::{Deserialize, Serialize};

/// The class of ticket being purchased.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TicketCategory {
    /// Full-price ticket with a seat.
    Adult,
    /// Reduced-price ticket with a seat.
    Child,
    /// Free ticket; the infant sits on an adult's lap.
    Infant,
}

impl TicketCategory {
    /// All categories, in pricing order.
    pub const ALL: [Self; 3] = [Self::Infant, Self::Child, Self::Adult];

    /// Price of one ticket in whole currency units.
    #[must_use]
    pub const fn unit_price(self) -> u64 {
        match self {
            Self::Infant => 0,
            Self::Child => 10,
            Self::Adult => 20,
        }
    }

    /// Whether a ticket of this category takes up a seat.
    #[must_use]
    pub const fn occupies_seat(self) -> bool {
        match self {
            Self::Adult | Self::Child => true,
            Self::Infant => false,
        }
    }

    /// The upper-case label used on the wire and at the prompt.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Adult => "ADULT",
            Self::Child => "CHILD",
            Self::Infant => "INFANT",
        }
    }
}

impl fmt::Display for TicketCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TicketCategory {
    type Err = PurchaseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ADULT" => Ok(Self::Adult),
            "CHILD" => Ok(Self::Child),
            "INFANT" => Ok(Self::Infant),
            other => Err(ArgumentError::UnknownTicketType {
                value: other.to_owned(),
            }
            .into()),
        }
    }
}

/// One line of a purchase as seen by the aggregation step.
///
/// Implementors report `None` when the line's category is unrecognised or
/// its quantity is not an integer; the purchase path turns those into
/// `InvalidPurchase` rejections.
pub trait TicketLine {
    /// The ticket category, if recognised.
    fn ticket_type(&self) -> Option<TicketCategory>;

    /// The requested number of tickets, if it is an integer.
    fn no_of_tickets(&self) -> Option<i64>;
}

/// An immutable request for `quantity` tickets of one category.
///
/// Negative quantities are accepted here and rejected at purchase time.
///
/// Fields can only be set at construction:
///
/// ```compile_fail
/// use box_office_purchase::domain::ticket_request::{TicketCategory, TicketRequest};
///
/// let mut request = TicketRequest::new(TicketCategory::Adult, 1);
/// request.category = TicketCategory::Child;
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TicketRequest {
    category: TicketCategory,
    quantity: i64,
}

impl TicketRequest {
    /// Creates a request.
    #[must_use]
    pub const fn new(category: TicketCategory, quantity: i64) -> Self {
        Self { category, quantity }
    }

    /// Builds a request from untyped input.
    ///
    /// # Errors
    ///
    /// Returns `ArgumentError::UnknownTicketType` if `category` is not one of
    /// `ADULT`, `CHILD` or `INFANT`, and `ArgumentError::NonIntegerQuantity`
    /// if `quantity` does not parse as an integer.
    pub fn parse(category: &str, quantity: &str) -> Result<Self, PurchaseError> {
        let category = category.parse::<TicketCategory>()?;
        let quantity = parse_quantity(quantity).ok_or_else(|| {
            PurchaseError::from(ArgumentError::NonIntegerQuantity {
                value: quantity.to_owned(),
            })
        })?;
        Ok(Self::new(category, quantity))
    }

    /// The requested category.
    #[must_use]
    pub const fn category(&self) -> TicketCategory {
        self.category
    }

    /// The requested number of tickets.
    #[must_use]
    pub const fn quantity(&self) -> i64 {
        self.quantity
    }

    /// Returns a copy of this request with a different quantity.
    #[must_use]
    pub const fn with_quantity(self, quantity: i64) -> Self {
        Self::new(self.category, quantity)
    }
}

impl TicketLine for TicketRequest {
    fn ticket_type(&self) -> Option<TicketCategory> {
        Some(self.category)
    }

    fn no_of_tickets(&self) -> Option<i64> {
        Some(self.quantity)
    }
}

/// A line captured verbatim from an interactive prompt, not yet validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawTicketLine {
    /// The category label as typed.
    pub category: String,
    /// The quantity as typed.
    pub quantity: String,
}

impl RawTicketLine {
    /// Captures a line.
    pub fn new(category: impl Into<String>, quantity: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            quantity: quantity.into(),
        }
    }
}

impl TicketLine for RawTicketLine {
    fn ticket_type(&self) -> Option<TicketCategory> {
        self.category.parse().ok()
    }

    fn no_of_tickets(&self) -> Option<i64> {
        parse_quantity(&self.quantity)
    }
}

/// Parses a typed ticket quantity. Whole numbers written with a zero
/// fraction (`"2.0"`, `"2."`) count as integers; anything else is rejected.
fn parse_quantity(raw: &str) -> Option<i64> {
    let raw = raw.trim();
    match raw.split_once('.') {
        Some((whole, fraction)) if fraction.bytes().all(|b| b == b'0') => whole.parse().ok(),
        Some(_) => None,
        None => raw.parse().ok(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_parses_exact_labels() {
        assert_eq!("ADULT".parse::<TicketCategory>(), Ok(TicketCategory::Adult));
        assert_eq!("CHILD".parse::<TicketCategory>(), Ok(TicketCategory::Child));
        assert_eq!("INFANT".parse::<TicketCategory>(), Ok(TicketCategory::Infant));
    }

    #[test]
    fn test_category_rejects_unknown_and_lowercase_labels() {
        for label in ["ELDERLY", "adult", "", " ADULT"] {
            let err = label.parse::<TicketCategory>().unwrap_err();
            assert_eq!(err.to_string(), "type must be ADULT, CHILD, or INFANT");
        }
    }

    #[test]
    fn test_category_prices_and_seats() {
        assert_eq!(TicketCategory::Adult.unit_price(), 20);
        assert_eq!(TicketCategory::Child.unit_price(), 10);
        assert_eq!(TicketCategory::Infant.unit_price(), 0);
        assert!(TicketCategory::Adult.occupies_seat());
        assert!(TicketCategory::Child.occupies_seat());
        assert!(!TicketCategory::Infant.occupies_seat());
    }

    #[test]
    fn test_request_exposes_construction_values() {
        let request = TicketRequest::new(TicketCategory::Adult, 1);
        assert_eq!(request.category(), TicketCategory::Adult);
        assert_eq!(request.quantity(), 1);
    }

    #[test]
    fn test_request_accepts_negative_quantity_at_construction() {
        let request = TicketRequest::new(TicketCategory::Child, -3);
        assert_eq!(request.quantity(), -3);
    }

    #[test]
    fn test_with_quantity_leaves_original_unchanged() {
        let original = TicketRequest::new(TicketCategory::Adult, 1);
        let changed = original.with_quantity(4);
        assert_eq!(original.quantity(), 1);
        assert_eq!(changed.quantity(), 4);
        assert_eq!(changed.category(), TicketCategory::Adult);
    }

    #[test]
    fn test_parse_rejects_unknown_type() {
        let err = TicketRequest::parse("ELDERLY", "1").unwrap_err();
        assert!(matches!(
            err,
            PurchaseError::InvalidArgument(ArgumentError::UnknownTicketType { ref value })
                if value == "ELDERLY"
        ));
    }

    #[test]
    fn test_parse_rejects_non_integer_quantity() {
        for quantity in ["five", "1.5", ""] {
            let err = TicketRequest::parse("ADULT", quantity).unwrap_err();
            assert!(
                matches!(
                    err,
                    PurchaseError::InvalidArgument(ArgumentError::NonIntegerQuantity { .. })
                ),
                "{quantity:?}"
            );
        }
    }

    #[test]
    fn test_raw_line_reports_unrecognised_parts_as_none() {
        let line = RawTicketLine::new("ELDERLY", "two");
        assert_eq!(line.ticket_type(), None);
        assert_eq!(line.no_of_tickets(), None);

        let line = RawTicketLine::new("INFANT", " 2 ");
        assert_eq!(line.ticket_type(), Some(TicketCategory::Infant));
        assert_eq!(line.no_of_tickets(), Some(2));
    }

    #[test]
    fn test_quantity_with_zero_fraction_is_an_integer() {
        assert_eq!(RawTicketLine::new("ADULT", "1.0").no_of_tickets(), Some(1));
        assert_eq!(RawTicketLine::new("ADULT", "3.").no_of_tickets(), Some(3));
        assert_eq!(RawTicketLine::new("ADULT", "-2.00").no_of_tickets(), Some(-2));
        for raw in ["1.5", ".0", "1.0.0", "1e0"] {
            assert_eq!(RawTicketLine::new("ADULT", raw).no_of_tickets(), None, "{raw:?}");
        }

        let request = TicketRequest::parse("CHILD", "4.0").unwrap();
        assert_eq!(request.quantity(), 4);
    }

    #[test]
    fn test_category_serializes_as_upper_case_label() {
        let json = serde_json::to_string(&TicketCategory::Infant).unwrap();
        assert_eq!(json, "\"INFANT\"");
    }
}
