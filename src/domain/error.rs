//! Domain validation errors for core domain types.
//!
//! This module defines errors that occur when domain invariants are violated.
//! They are returned by `try_new` constructors and by
//! [`SamplingConfig::validate`](super::SamplingConfig::validate), which the
//! generator runs before producing any slip.
//!
//! # Examples
//!
//! ```
//! use slipgen::domain::error::DomainError;
//! use slipgen::domain::SamplingConfig;
//!
//! let config = SamplingConfig {
//!     max_consecutive: 0,
//!     ..SamplingConfig::default()
//! };
//!
//! assert!(matches!(
//!     config.validate(),
//!     Err(DomainError::MaxConsecutiveTooSmall { value: 0 })
//! ));
//! ```

use rust_decimal::Decimal;
use thiserror::Error;

/// Errors that occur when domain invariants are violated.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Distribution weights must not be negative.
    #[error("weight for outcome {outcome} must not be negative, got {weight}")]
    NegativeWeight {
        /// Name of the weight (`home`, `draw`, `away`, `over`, `under`).
        outcome: &'static str,
        /// The invalid weight.
        weight: f64,
    },

    /// Distribution weights must be finite numbers.
    #[error("weight for outcome {outcome} must be a finite number")]
    NonFiniteWeight {
        /// Name of the weight.
        outcome: &'static str,
    },

    /// The run-length cap must allow at least one outcome.
    #[error("max consecutive must be at least 1, got {value}")]
    MaxConsecutiveTooSmall {
        /// The invalid cap.
        value: u32,
    },

    /// Odds are multipliers and must be positive.
    #[error("odds for outcome {outcome} must be positive, got {odds}")]
    NonPositiveOdds {
        /// Outcome code the odds belong to.
        outcome: String,
        /// The invalid odds.
        odds: Decimal,
    },

    /// Stakes cannot be negative.
    #[error("stake must not be negative, got {stake}")]
    NegativeStake {
        /// The invalid stake.
        stake: Decimal,
    },

    /// An outcome code string did not match any known market.
    #[error("unknown outcome code: {0}")]
    UnknownOutcome(String),

    /// A market name did not match any supported market.
    #[error("unknown market: {0} (expected 1x2, goals or correct_score)")]
    UnknownMarket(String),

    /// A sample team region did not match any known pool.
    #[error("unknown region: {0} (expected all, epl, laliga, africa, usa or rest)")]
    UnknownRegion(String),

    /// A bonus schedule went down between two consecutive leg counts.
    #[error("bonus schedule decreases at {legs} legs")]
    NonMonotonicBonus {
        /// Leg count at which the schedule decreased.
        legs: u32,
    },

    /// A correct-score coverage run would emit more slips than one batch allows.
    #[error("coverage run would produce {slips} slips, limit is {limit}")]
    CoverageTooLarge {
        /// Slips the run would produce.
        slips: u64,
        /// Largest allowed batch.
        limit: u64,
    },

    /// Tax rates are fractions in `[0, 1]`.
    #[error("tax rate must be between 0 and 1, got {rate}")]
    InvalidTaxRate {
        /// The invalid rate.
        rate: Decimal,
    },
}
