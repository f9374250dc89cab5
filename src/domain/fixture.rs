//! Match fixtures and their per-outcome odds.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::DomainError;
use super::ids::MatchId;
use super::market::OutcomeCode;
use super::money::Odds;

/// One fixture to predict.
///
/// Created by the match-list parser (or any other caller) and treated as
/// frozen while slips are generated. Slips hold it behind an `Arc` so every
/// outcome references the same record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Match {
    id: MatchId,
    home_team: String,
    away_team: String,
    odds: BTreeMap<OutcomeCode, Odds>,
}

impl Match {
    /// Create a match with default three-way odds of 1.0.
    pub fn new(id: impl Into<MatchId>, home_team: impl Into<String>, away_team: impl Into<String>) -> Self {
        let odds = [OutcomeCode::Home, OutcomeCode::Draw, OutcomeCode::Away]
            .into_iter()
            .map(|code| (code, Decimal::ONE))
            .collect();
        Self {
            id: id.into(),
            home_team: home_team.into(),
            away_team: away_team.into(),
            odds,
        }
    }

    /// Create a match with explicit odds.
    ///
    /// Missing `1`/`X`/`2` entries default to 1.0.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::NonPositiveOdds`] if any supplied odds are zero
    /// or negative.
    pub fn try_new(
        id: impl Into<MatchId>,
        home_team: impl Into<String>,
        away_team: impl Into<String>,
        odds: impl IntoIterator<Item = (OutcomeCode, Odds)>,
    ) -> Result<Self, DomainError> {
        let mut fixture = Self::new(id, home_team, away_team);
        for (code, value) in odds {
            fixture.set_odds(code, value)?;
        }
        Ok(fixture)
    }

    /// Set the odds for one outcome.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::NonPositiveOdds`] if `odds <= 0`.
    pub fn set_odds(&mut self, code: OutcomeCode, odds: Odds) -> Result<(), DomainError> {
        if odds <= Decimal::ZERO {
            return Err(DomainError::NonPositiveOdds {
                outcome: code.to_string(),
                odds,
            });
        }
        self.odds.insert(code, odds);
        Ok(())
    }

    /// Builder-style variant of [`Match::set_odds`].
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::NonPositiveOdds`] if `odds <= 0`.
    pub fn with_odds(mut self, code: OutcomeCode, odds: Odds) -> Result<Self, DomainError> {
        self.set_odds(code, odds)?;
        Ok(self)
    }

    #[must_use]
    pub fn id(&self) -> &MatchId {
        &self.id
    }

    #[must_use]
    pub fn home_team(&self) -> &str {
        &self.home_team
    }

    #[must_use]
    pub fn away_team(&self) -> &str {
        &self.away_team
    }

    /// Odds for an outcome, 1.0 when none are configured.
    #[must_use]
    pub fn odds_for(&self, code: &OutcomeCode) -> Odds {
        self.odds.get(code).copied().unwrap_or(Decimal::ONE)
    }

    /// All configured odds.
    #[must_use]
    pub fn odds(&self) -> &BTreeMap<OutcomeCode, Odds> {
        &self.odds
    }

    /// `Home vs Away` label.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{} vs {}", self.home_team, self.away_team)
    }
}
