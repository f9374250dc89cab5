//! Weighted outcome sampling under a run-length constraint.
//!
//! - [`SamplingConfig`] - per-run parameters (market, weights, caps)
//! - [`Distribution`] - non-negative weights for every sampled outcome
//! - [`OutcomeSampler`] - weighted draw over one market's outcome space
//! - [`RunState`] - the current run of identical codes within one slip
//! - [`sample_with_fallback`] - bounded rejection sampling with a forced escape
//!
//! The rejection loop is market-agnostic: three-way and goals slips share the
//! same code path and differ only in the sampler they are handed.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::Deserialize;

use super::error::DomainError;
use super::market::{Market, OutcomeCode};

/// Redraws allowed per match before a substitute is forced.
pub const MAX_DRAW_ATTEMPTS: usize = 20;

/// Default upper bound on summed goals for correct-score coverage.
pub const DEFAULT_MAX_GOALS: u32 = 5;

/// Default longest run of identical outcomes.
pub const DEFAULT_MAX_CONSECUTIVE: u32 = 3;

/// Outcome weights. Only the weights of the active market are used.
///
/// Weights are relative and need not sum to 100. A market whose weights sum
/// to zero is sampled uniformly.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct Distribution {
    pub home: f64,
    pub draw: f64,
    pub away: f64,
    pub over: f64,
    pub under: f64,
}

impl Distribution {
    /// Three-way weights with the goals weights left at their defaults.
    #[must_use]
    pub fn three_way(home: f64, draw: f64, away: f64) -> Self {
        Self {
            home,
            draw,
            away,
            ..Self::default()
        }
    }

    /// Goals weights with the three-way weights left at their defaults.
    #[must_use]
    pub fn goals(over: f64, under: f64) -> Self {
        Self {
            over,
            under,
            ..Self::default()
        }
    }

    /// Weight attached to an outcome code (zero for codes that are never sampled).
    #[must_use]
    pub fn weight_of(&self, code: &OutcomeCode) -> f64 {
        match code {
            OutcomeCode::Home => self.home,
            OutcomeCode::Draw => self.draw,
            OutcomeCode::Away => self.away,
            OutcomeCode::Over => self.over,
            OutcomeCode::Under => self.under,
            OutcomeCode::Score { .. } => 0.0,
        }
    }

    fn named(&self) -> [(&'static str, f64); 5] {
        [
            ("home", self.home),
            ("draw", self.draw),
            ("away", self.away),
            ("over", self.over),
            ("under", self.under),
        ]
    }

    /// Check every weight is finite and non-negative.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::NonFiniteWeight`] or [`DomainError::NegativeWeight`].
    pub fn validate(&self) -> Result<(), DomainError> {
        for (outcome, weight) in self.named() {
            if !weight.is_finite() {
                return Err(DomainError::NonFiniteWeight { outcome });
            }
            if weight < 0.0 {
                return Err(DomainError::NegativeWeight { outcome, weight });
            }
        }
        if !(self.home + self.draw + self.away).is_finite() || !(self.over + self.under).is_finite() {
            return Err(DomainError::NonFiniteWeight { outcome: "total" });
        }
        Ok(())
    }
}

impl Default for Distribution {
    fn default() -> Self {
        Self {
            home: 33.0,
            draw: 33.0,
            away: 33.0,
            over: 50.0,
            under: 50.0,
        }
    }
}

/// Parameters for one generation run.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SamplingConfig {
    /// Market to generate slips for.
    pub market: Market,
    /// Outcome weights.
    pub distribution: Distribution,
    /// Longest allowed run of the same code across consecutive matches.
    pub max_consecutive: u32,
    /// Bound on home + away goals for correct-score coverage.
    pub max_goals: u32,
}

impl SamplingConfig {
    /// Config for `market` with default weights and caps.
    #[must_use]
    pub fn for_market(market: Market) -> Self {
        Self {
            market,
            ..Self::default()
        }
    }

    /// Reject configurations the generator must not run with.
    ///
    /// # Errors
    ///
    /// Returns a [`DomainError`] for negative or non-finite weights and for
    /// `max_consecutive < 1`.
    pub fn validate(&self) -> Result<(), DomainError> {
        self.distribution.validate()?;
        if self.max_consecutive < 1 {
            return Err(DomainError::MaxConsecutiveTooSmall {
                value: self.max_consecutive,
            });
        }
        Ok(())
    }
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            market: Market::default(),
            distribution: Distribution::default(),
            max_consecutive: DEFAULT_MAX_CONSECUTIVE,
            max_goals: DEFAULT_MAX_GOALS,
        }
    }
}

/// Weighted draw over the outcome space of a sampled market.
///
/// A uniform value in `[0, total)` is mapped onto consecutive weight
/// intervals in partition order, so for three-way `[0, home)` is `1`,
/// `[home, home + draw)` is `X` and the remainder is `2`.
#[derive(Debug, Clone, PartialEq)]
pub struct OutcomeSampler {
    entries: Vec<(OutcomeCode, f64)>,
    total: f64,
}

impl OutcomeSampler {
    /// Build the sampler for a market, or `None` for enumerated markets.
    #[must_use]
    pub fn for_market(market: Market, distribution: &Distribution) -> Option<Self> {
        let entries: Vec<(OutcomeCode, f64)> = market
            .outcome_space()
            .iter()
            .map(|code| (*code, distribution.weight_of(code)))
            .collect();
        if entries.is_empty() {
            return None;
        }
        let total: f64 = entries.iter().map(|(_, w)| w).sum();
        Some(Self { entries, total })
    }

    /// True when the weights sum to zero and draws are uniform.
    #[must_use]
    pub fn is_uniform_fallback(&self) -> bool {
        self.total <= 0.0
    }

    /// Codes this sampler can produce, in partition order.
    pub fn space(&self) -> impl Iterator<Item = OutcomeCode> + '_ {
        self.entries.iter().map(|(code, _)| *code)
    }

    /// Draw one outcome.
    pub fn draw<R: Rng + ?Sized>(&self, rng: &mut R) -> OutcomeCode {
        if self.is_uniform_fallback() {
            let index = rng.gen_range(0..self.entries.len());
            return self.entries[index].0;
        }

        let roll = rng.gen_range(0.0..self.total);
        let mut upper = 0.0;
        for (code, weight) in &self.entries {
            upper += weight;
            if roll < upper {
                return *code;
            }
        }
        // Rounding can leave roll at the very top of the range.
        self.entries[self.entries.len() - 1].0
    }

    /// Pick uniformly among the codes other than `avoid`.
    ///
    /// Returns `None` only for a single-code space that equals `avoid`.
    pub fn draw_other<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        avoid: Option<OutcomeCode>,
    ) -> Option<OutcomeCode> {
        let options: Vec<OutcomeCode> = self.space().filter(|code| Some(*code) != avoid).collect();
        options.choose(rng).copied()
    }
}

/// Run of identical outcome codes at the tail of a slip under construction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunState {
    last: Option<OutcomeCode>,
    length: u32,
}

impl RunState {
    /// The previous code, if any match has been sampled.
    #[must_use]
    pub const fn last(&self) -> Option<OutcomeCode> {
        self.last
    }

    /// Length of the current run.
    #[must_use]
    pub const fn length(&self) -> u32 {
        self.length
    }

    /// Whether appending `code` keeps the run within `max_consecutive`.
    #[must_use]
    pub fn permits(&self, code: OutcomeCode, max_consecutive: u32) -> bool {
        self.last != Some(code) || self.length < max_consecutive
    }

    /// State after appending `code`.
    #[must_use]
    pub fn advance(self, code: OutcomeCode) -> Self {
        if self.last == Some(code) {
            Self {
                last: self.last,
                length: self.length + 1,
            }
        } else {
            Self {
                last: Some(code),
                length: 1,
            }
        }
    }
}

/// Result of a bounded rejection-sampling round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sampled<T> {
    /// A draw passed the predicate.
    Accepted(T),
    /// Every attempt was rejected and the fallback supplied the value.
    Forced(T),
}

impl<T> Sampled<T> {
    pub fn into_inner(self) -> T {
        match self {
            Self::Accepted(value) | Self::Forced(value) => value,
        }
    }

    pub const fn is_forced(&self) -> bool {
        matches!(self, Self::Forced(_))
    }
}

/// Draw until `accept` passes, at most `max_attempts` times, then fall back.
pub fn sample_with_fallback<R, T, D, A, F>(
    rng: &mut R,
    max_attempts: usize,
    mut draw: D,
    accept: A,
    fallback: F,
) -> Sampled<T>
where
    R: Rng + ?Sized,
    D: FnMut(&mut R) -> T,
    A: Fn(&T) -> bool,
    F: FnOnce(&mut R) -> T,
{
    for _ in 0..max_attempts {
        let candidate = draw(rng);
        if accept(&candidate) {
            return Sampled::Accepted(candidate);
        }
    }
    Sampled::Forced(fallback(rng))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn default_config_is_valid() {
        assert_eq!(SamplingConfig::default().validate(), Ok(()));
    }

    #[test]
    fn negative_weight_is_rejected() {
        let config = SamplingConfig {
            distribution: Distribution::three_way(50.0, -1.0, 50.0),
            ..SamplingConfig::default()
        };

        assert_eq!(
            config.validate(),
            Err(DomainError::NegativeWeight {
                outcome: "draw",
                weight: -1.0
            })
        );
    }

    #[test]
    fn nan_weight_is_rejected() {
        let config = SamplingConfig {
            distribution: Distribution::goals(f64::NAN, 1.0),
            ..SamplingConfig::default()
        };

        assert_eq!(
            config.validate(),
            Err(DomainError::NonFiniteWeight { outcome: "over" })
        );
    }

    #[test]
    fn zero_max_consecutive_is_rejected() {
        let config = SamplingConfig {
            max_consecutive: 0,
            ..SamplingConfig::default()
        };

        assert_eq!(
            config.validate(),
            Err(DomainError::MaxConsecutiveTooSmall { value: 0 })
        );
    }

    #[test]
    fn sampler_respects_zero_weights() {
        let sampler =
            OutcomeSampler::for_market(Market::ThreeWay, &Distribution::three_way(0.0, 1.0, 0.0))
                .unwrap();
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..1_000 {
            assert_eq!(sampler.draw(&mut rng), OutcomeCode::Draw);
        }
    }

    #[test]
    fn zero_sum_weights_fall_back_to_uniform() {
        for market in [Market::ThreeWay, Market::Goals] {
            let dist = Distribution {
                home: 0.0,
                draw: 0.0,
                away: 0.0,
                over: 0.0,
                under: 0.0,
            };
            let sampler = OutcomeSampler::for_market(market, &dist).unwrap();
            let mut rng = StdRng::seed_from_u64(11);
            let seen: std::collections::HashSet<_> =
                (0..500).map(|_| sampler.draw(&mut rng)).collect();

            assert!(sampler.is_uniform_fallback());
            assert_eq!(seen.len(), market.outcome_space().len());
        }
    }

    #[test]
    fn coverage_market_has_no_sampler() {
        assert!(
            OutcomeSampler::for_market(Market::CorrectScoreCoverage, &Distribution::default())
                .is_none()
        );
    }

    #[test]
    fn draw_other_never_returns_avoided_code() {
        let sampler = OutcomeSampler::for_market(Market::Goals, &Distribution::default()).unwrap();
        let mut rng = StdRng::seed_from_u64(3);

        for _ in 0..100 {
            assert_eq!(
                sampler.draw_other(&mut rng, Some(OutcomeCode::Over)),
                Some(OutcomeCode::Under)
            );
        }
    }

    #[test]
    fn run_state_tracks_identical_codes() {
        let state = RunState::default()
            .advance(OutcomeCode::Home)
            .advance(OutcomeCode::Home);

        assert_eq!(state.last(), Some(OutcomeCode::Home));
        assert_eq!(state.length(), 2);
        assert!(!state.permits(OutcomeCode::Home, 2));
        assert!(state.permits(OutcomeCode::Home, 3));
        assert!(state.permits(OutcomeCode::Draw, 1));

        let reset = state.advance(OutcomeCode::Away);
        assert_eq!(reset.length(), 1);
    }

    #[test]
    fn fallback_runs_only_after_all_attempts_fail() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut draws = 0;

        let result = sample_with_fallback(
            &mut rng,
            MAX_DRAW_ATTEMPTS,
            |_| {
                draws += 1;
                1
            },
            |value| *value == 2,
            |_| 3,
        );

        assert_eq!(result, Sampled::Forced(3));
        assert_eq!(draws, MAX_DRAW_ATTEMPTS);
    }

    #[test]
    fn first_accepted_draw_wins() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut next = 0;

        let result = sample_with_fallback(
            &mut rng,
            MAX_DRAW_ATTEMPTS,
            |_| {
                next += 1;
                next
            },
            |value| *value >= 4,
            |_| 0,
        );

        assert_eq!(result, Sampled::Accepted(4));
        assert!(!result.is_forced());
    }
}
