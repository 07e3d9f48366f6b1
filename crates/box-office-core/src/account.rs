//! Account identifiers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ArgumentError, PurchaseError};

/// A validated purchaser account identifier. Always `>= 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct AccountId(i64);

impl AccountId {
    /// Validates a raw identifier.
    ///
    /// # Errors
    ///
    /// Returns `ArgumentError::InvalidAccountId` if `raw` is zero or negative.
    pub fn new(raw: i64) -> Result<Self, PurchaseError> {
        if raw < 1 {
            return Err(ArgumentError::InvalidAccountId.into());
        }
        Ok(Self(raw))
    }

    /// Parses an identifier typed by a user.
    ///
    /// Missing, non-numeric, fractional, zero and negative input are all
    /// rejected with the same error.
    ///
    /// # Errors
    ///
    /// Returns `ArgumentError::InvalidAccountId` for any input that is not a
    /// positive integer.
    pub fn parse(text: &str) -> Result<Self, PurchaseError> {
        let raw = text
            .trim()
            .parse::<i64>()
            .map_err(|_| PurchaseError::from(ArgumentError::InvalidAccountId))?;
        Self::new(raw)
    }

    /// Returns the raw identifier.
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl TryFrom<i64> for AccountId {
    type Error = PurchaseError;

    fn try_from(raw: i64) -> Result<Self, Self::Error> {
        Self::new(raw)
    }
}

impl From<AccountId> for i64 {
    fn from(id: AccountId) -> Self {
        id.0
    }
}

impl FromStr for AccountId {
    type Err = PurchaseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_invalid_account(result: Result<AccountId, PurchaseError>) -> bool {
        matches!(
            result,
            Err(PurchaseError::InvalidArgument(ArgumentError::InvalidAccountId))
        )
    }

    #[test]
    fn test_new_accepts_positive_ids() {
        assert_eq!(AccountId::new(12345).map(AccountId::get), Ok(12345));
        assert_eq!(AccountId::new(1).map(AccountId::get), Ok(1));
    }

    #[test]
    fn test_new_rejects_zero_and_negative() {
        assert!(is_invalid_account(AccountId::new(0)));
        assert!(is_invalid_account(AccountId::new(-1)));
        assert!(is_invalid_account(AccountId::new(i64::MIN)));
    }

    #[test]
    fn test_parse_trims_whitespace() {
        assert_eq!(AccountId::parse(" 42\n").map(AccountId::get), Ok(42));
    }

    #[test]
    fn test_parse_rejects_missing_non_numeric_and_fractional() {
        for input in ["", "   ", "abc", "1.5", "12a", "0", "-7"] {
            assert!(is_invalid_account(AccountId::parse(input)), "{input:?}");
        }
    }

    #[test]
    fn test_deserialize_rejects_non_positive() {
        let ok: AccountId = serde_json::from_str("7").unwrap();
        assert_eq!(ok.get(), 7);
        assert!(serde_json::from_str::<AccountId>("0").is_err());
    }
}
