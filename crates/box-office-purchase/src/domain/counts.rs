//! Aggregated ticket counts per category.

use std::collections::BTreeMap;

use super::ticket_request::TicketCategory;

/// Summed quantities per category for one purchase. Absent categories count
/// as zero.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TicketCounts {
    counts: BTreeMap<TicketCategory, u64>,
}

impl TicketCounts {
    /// Creates an empty aggregation.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `quantity` tickets of `category` to any already recorded.
    pub fn record(&mut self, category: TicketCategory, quantity: u64) {
        let count = self.counts.entry(category).or_insert(0);
        *count = count.saturating_add(quantity);
    }

    /// Number of tickets recorded for `category`.
    #[must_use]
    pub fn count(&self, category: TicketCategory) -> u64 {
        self.counts.get(&category).copied().unwrap_or(0)
    }

    /// Whether any line for `category` was recorded, including zero-quantity
    /// lines.
    #[must_use]
    pub fn contains(&self, category: TicketCategory) -> bool {
        self.counts.contains_key(&category)
    }

    /// Number of tickets across all categories.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.counts
            .values()
            .fold(0_u64, |total, count| total.saturating_add(*count))
    }

    /// Iterates recorded `(category, count)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (TicketCategory, u64)> + '_ {
        self.counts.iter().map(|(category, count)| (*category, *count))
    }
}

impl FromIterator<(TicketCategory, u64)> for TicketCounts {
    fn from_iter<I: IntoIterator<Item = (TicketCategory, u64)>>(iter: I) -> Self {
        let mut counts = Self::new();
        for (category, quantity) in iter {
            counts.record(category, quantity);
        }
        counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_is_additive_per_category() {
        let mut counts = TicketCounts::new();
        counts.record(TicketCategory::Adult, 2);
        counts.record(TicketCategory::Child, 1);
        counts.record(TicketCategory::Adult, 3);

        assert_eq!(counts.count(TicketCategory::Adult), 5);
        assert_eq!(counts.count(TicketCategory::Child), 1);
        assert_eq!(counts.total(), 6);
    }

    #[test]
    fn test_absent_category_counts_as_zero() {
        let counts = TicketCounts::new();
        assert_eq!(counts.count(TicketCategory::Infant), 0);
        assert!(!counts.contains(TicketCategory::Infant));
        assert_eq!(counts.total(), 0);
    }

    #[test]
    fn test_zero_quantity_line_is_recorded() {
        let counts: TicketCounts = [(TicketCategory::Adult, 0)].into_iter().collect();
        assert!(counts.contains(TicketCategory::Adult));
        assert_eq!(counts.count(TicketCategory::Adult), 0);
    }

    #[test]
    fn test_iter_yields_recorded_categories_in_order() {
        let counts: TicketCounts = [
            (TicketCategory::Infant, 1),
            (TicketCategory::Adult, 2),
            (TicketCategory::Infant, 1),
        ]
        .into_iter()
        .collect();
        let pairs: Vec<_> = counts.iter().collect();
        assert_eq!(
            pairs,
            vec![(TicketCategory::Adult, 2), (TicketCategory::Infant, 2)]
        );
    }

    #[test]
    fn test_record_saturates_instead_of_overflowing() {
        let mut counts = TicketCounts::new();
        counts.record(TicketCategory::Child, u64::MAX);
        counts.record(TicketCategory::Child, 1);
        counts.record(TicketCategory::Adult, 1);
        assert_eq!(counts.count(TicketCategory::Child), u64::MAX);
        assert_eq!(counts.total(), u64::MAX);
    }
}
