//! Slip generation and valuation core.
//!
//! Everything here is synchronous and free of I/O. A batch is one call to
//! [`SlipGenerator::generate`] followed by [`PayoutCalculator::valuate_all`];
//! callers decide where that unit of work runs.

pub mod error;
mod fixture;
mod generator;
mod ids;
mod market;
mod money;
mod payout;
mod sampling;
mod slip;

pub use fixture::Match;
pub use generator::{
    correct_score_count, correct_scores, next_outcome, SlipGenerator, MAX_COVERAGE_SLIPS,
};
pub use ids::{MatchId, SlipId};
pub use market::{Market, OutcomeCode};
pub use money::{Amount, Odds, Stake};
pub use payout::{
    BonusSchedule, PayoutCalculator, PayoutRules, Valuation, DEFAULT_BONUS_CAP,
    DEFAULT_BONUS_FIRST_LEG, DEFAULT_BONUS_PERCENTS, DEFAULT_TAX_RATE,
};
pub use sampling::{
    sample_with_fallback, Distribution, OutcomeSampler, RunState, Sampled, SamplingConfig,
    DEFAULT_MAX_CONSECUTIVE, DEFAULT_MAX_GOALS, MAX_DRAW_ATTEMPTS,
};
pub use slip::{Outcome, Slip, SlipRow};

/// Upper bound on the suggested slip count.
pub const MAX_SUGGESTED_SLIPS: u64 = 100_000;

/// Suggested number of slips for `match_count` three-way matches.
///
/// This is `3^match_count` (every three-way combination), capped at `cap`,
/// and zero for an empty list. Informational only: the generator does not
/// enforce it.
#[must_use]
pub fn suggested_slip_count(match_count: usize, cap: u64) -> u64 {
    if match_count == 0 {
        return 0;
    }
    u32::try_from(match_count)
        .ok()
        .and_then(|n| 3u64.checked_pow(n))
        .map_or(cap, |combinations| combinations.min(cap))
}
