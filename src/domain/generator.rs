//! Slip generation over a frozen list of matches.
//!
//! Sampled markets (three-way, goals) build each slip independently by
//! drawing one outcome per match, redrawing when the draw would extend a run
//! past `max_consecutive` and forcing a different code once
//! [`MAX_DRAW_ATTEMPTS`] redraws are used up. Correct-score coverage is a
//! deterministic enumeration instead: one single-leg slip per match and score.

use std::sync::Arc;

use chrono::Utc;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use super::error::DomainError;
use super::fixture::Match;
use super::ids::SlipId;
use super::market::OutcomeCode;
use super::sampling::{
    sample_with_fallback, OutcomeSampler, RunState, Sampled, SamplingConfig, MAX_DRAW_ATTEMPTS,
};
use super::slip::{Outcome, Slip};

/// Largest correct-score coverage batch a single run may emit.
pub const MAX_COVERAGE_SLIPS: u64 = 100_000;

/// Generates slips for an ordered list of matches.
///
/// The match list can only be replaced through `&mut self`, so it cannot
/// change while a `generate` call (which borrows `&self`) is running.
#[derive(Debug, Clone, Default)]
pub struct SlipGenerator {
    matches: Vec<Arc<Match>>,
    seed: Option<u64>,
}

impl SlipGenerator {
    /// Create a generator over `matches`, in order.
    pub fn new(matches: impl IntoIterator<Item = Match>) -> Self {
        Self {
            matches: matches.into_iter().map(Arc::new).collect(),
            seed: None,
        }
    }

    /// Seed every subsequent `generate` call for reproducible batches.
    #[must_use]
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Replace the match list.
    pub fn set_matches(&mut self, matches: impl IntoIterator<Item = Match>) {
        self.matches = matches.into_iter().map(Arc::new).collect();
    }

    #[must_use]
    pub fn matches(&self) -> &[Arc<Match>] {
        &self.matches
    }

    /// Slips a correct-score coverage run over the current matches would emit.
    #[must_use]
    pub fn coverage_slip_count(&self, max_goals: u32) -> u64 {
        u64::try_from(self.matches.len())
            .unwrap_or(u64::MAX)
            .saturating_mul(correct_score_count(max_goals))
    }

    /// Generate `count` slips, or the full coverage set for correct-score.
    ///
    /// Uses the configured seed, or fresh entropy when none is set.
    ///
    /// # Errors
    ///
    /// Returns a [`DomainError`] if `config` fails validation.
    pub fn generate(&self, count: usize, config: &SamplingConfig) -> Result<Vec<Slip>, DomainError> {
        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        self.generate_with_rng(count, config, &mut rng)
    }

    /// [`SlipGenerator::generate`] with a caller-supplied random source.
    ///
    /// # Errors
    ///
    /// Returns a [`DomainError`] if `config` fails validation or a coverage
    /// run would exceed [`MAX_COVERAGE_SLIPS`].
    pub fn generate_with_rng<R: Rng + ?Sized>(
        &self,
        count: usize,
        config: &SamplingConfig,
        rng: &mut R,
    ) -> Result<Vec<Slip>, DomainError> {
        config.validate()?;
        let batch_millis = Utc::now().timestamp_millis();

        let Some(sampler) = OutcomeSampler::for_market(config.market, &config.distribution) else {
            let slips = self.coverage_slip_count(config.max_goals);
            if slips > MAX_COVERAGE_SLIPS {
                return Err(DomainError::CoverageTooLarge {
                    slips,
                    limit: MAX_COVERAGE_SLIPS,
                });
            }
            return Ok(self.enumerate_coverage(config.max_goals, batch_millis));
        };

        let mut forced = 0usize;
        let slips: Vec<Slip> = (1..=count)
            .map(|sequence| {
                let (outcomes, slip_forced) =
                    self.sample_slip(&sampler, config.max_consecutive, &mut *rng);
                forced += slip_forced;
                Slip::new(
                    SlipId::sequenced(SlipId::SAMPLED_PREFIX, batch_millis, sequence),
                    outcomes,
                )
            })
            .collect();

        debug!(
            market = %config.market,
            slips = slips.len(),
            matches = self.matches.len(),
            forced,
            uniform = sampler.is_uniform_fallback(),
            "sampled slip batch"
        );
        Ok(slips)
    }

    /// Build one slip, returning its outcomes and how many were forced.
    fn sample_slip<R: Rng + ?Sized>(
        &self,
        sampler: &OutcomeSampler,
        max_consecutive: u32,
        rng: &mut R,
    ) -> (Vec<Outcome>, usize) {
        let mut state = RunState::default();
        let mut forced = 0;
        let mut outcomes = Vec::with_capacity(self.matches.len());

        for fixture in &self.matches {
            let (sampled, next) = next_outcome(sampler, state, max_consecutive, rng);
            if sampled.is_forced() {
                forced += 1;
            }
            state = next;
            outcomes.push(Outcome::new(Arc::clone(fixture), sampled.into_inner()));
        }

        (outcomes, forced)
    }

    fn enumerate_coverage(&self, max_goals: u32, batch_millis: i64) -> Vec<Slip> {
        let scores = correct_scores(max_goals);
        let slips: Vec<Slip> = self
            .matches
            .iter()
            .flat_map(|fixture| scores.iter().map(move |score| (fixture, *score)))
            .enumerate()
            .map(|(index, (fixture, score))| {
                Slip::new(
                    SlipId::sequenced(SlipId::COVERAGE_PREFIX, batch_millis, index + 1),
                    vec![Outcome::new(Arc::clone(fixture), score)],
                )
            })
            .collect();

        debug!(
            matches = self.matches.len(),
            scores = scores.len(),
            slips = slips.len(),
            max_goals,
            "enumerated correct-score coverage"
        );
        slips
    }
}

/// Choose the next outcome given the run so far, and the run after it.
pub fn next_outcome<R: Rng + ?Sized>(
    sampler: &OutcomeSampler,
    state: RunState,
    max_consecutive: u32,
    rng: &mut R,
) -> (Sampled<OutcomeCode>, RunState) {
    let sampled = sample_with_fallback(
        rng,
        MAX_DRAW_ATTEMPTS,
        |rng| sampler.draw(rng),
        |code| state.permits(*code, max_consecutive),
        |rng| {
            sampler
                .draw_other(rng, state.last())
                .unwrap_or_else(|| sampler.draw(rng))
        },
    );
    (sampled, state.advance(sampled.into_inner()))
}

/// Every score `h-a` with `h + a <= max_goals`, by home goals then away goals.
#[must_use]
pub fn correct_scores(max_goals: u32) -> Vec<OutcomeCode> {
    (0..=max_goals)
        .flat_map(|home| (0..=max_goals - home).map(move |away| OutcomeCode::score(home, away)))
        .collect()
}

/// Number of scores [`correct_scores`] yields for `max_goals`.
///
/// Saturates at `u64::MAX`; the largest `u32` bound does not fit.
#[must_use]
pub const fn correct_score_count(max_goals: u32) -> u64 {
    let m = max_goals as u128;
    let count = (m + 1) * (m + 2) / 2;
    if count > u64::MAX as u128 {
        u64::MAX
    } else {
        count as u64
    }
}
