//! Monetary types for odds and stake representation.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::DomainError;

/// Decimal odds multiplier represented as a Decimal for precision.
pub type Odds = Decimal;

/// Monetary amount represented as a Decimal for precision.
pub type Amount = Decimal;

/// A non-negative stake applied to every slip in a batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Stake(Decimal);

impl Stake {
    /// Zero stake.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Create a stake.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::NegativeStake`] if `amount < 0`.
    pub fn try_new(amount: Decimal) -> Result<Self, DomainError> {
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(DomainError::NegativeStake { stake: amount });
        }
        Ok(Self(amount))
    }

    /// The staked amount.
    #[must_use]
    pub const fn amount(&self) -> Amount {
        self.0
    }
}

impl TryFrom<Decimal> for Stake {
    type Error = DomainError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl From<Stake> for Decimal {
    fn from(stake: Stake) -> Self {
        stake.0
    }
}

impl fmt::Display for Stake {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
