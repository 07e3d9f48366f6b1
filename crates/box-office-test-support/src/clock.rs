//! Test clock: deterministic `Clock` implementation for receipts.

use box_office_core::clock::Clock;
use chrono::{DateTime, TimeZone, Utc};

/// A clock that always returns the same instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub DateTime<Utc>);

impl FixedClock {
    /// A clock frozen at 2026-01-15 10:00:00 UTC, the instant used across
    /// the workspace tests.
    #[must_use]
    pub fn standard() -> Self {
        Self(
            Utc.with_ymd_and_hms(2026, 1, 15, 10, 0, 0)
                .single()
                .unwrap_or(DateTime::UNIX_EPOCH),
        )
    }
}

impl Default for FixedClock {
    fn default() -> Self {
        Self::standard()
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
