//! Slipgen - randomized match-outcome slips with accumulator payouts.
//!
//! Given a list of matches with odds, the crate produces "slips" (one
//! predicted outcome per match) under a chosen market and values each slip
//! against a flat stake, a leg-count bonus schedule and a winnings tax.
//!
//! # Markets
//!
//! - **Three-way** (`1x2`) - weighted `1`/`X`/`2` sampling with a run-length cap
//! - **Goals** - weighted `Over 2.5`/`Under 2.5` sampling with the same cap
//! - **Correct-score coverage** - every score with at most `max_goals` goals,
//!   one single-leg slip per match and score
//!
//! # Modules
//!
//! - [`domain`] - Matches, slips, sampling and the payout calculator
//! - [`parser`] - Free-text match-list parsing
//! - [`sample`] - Random demo fixture lists
//! - [`config`] - TOML configuration and logging setup
//! - [`cli`] - The `slipgen` command tree
//! - [`error`] - Error types for the crate
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use slipgen::domain::{Match, PayoutCalculator, SamplingConfig, SlipGenerator, Stake};
//!
//! let generator = SlipGenerator::new([
//!     Match::new("m-0", "Arsenal", "Chelsea"),
//!     Match::new("m-1", "Inter", "Milan"),
//! ])
//! .with_seed(Some(42));
//!
//! let mut slips = generator.generate(9, &SamplingConfig::default()).unwrap();
//! PayoutCalculator::default().valuate_all(&mut slips, Stake::try_new(dec!(100)).unwrap());
//!
//! assert_eq!(slips.len(), 9);
//! assert!(slips.iter().all(|slip| slip.legs() == 2));
//! ```

pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod parser;
pub mod sample;
