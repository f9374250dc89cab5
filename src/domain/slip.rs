//! Generated slips and the outcomes they contain.

use std::sync::Arc;

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use super::fixture::Match;
use super::ids::{MatchId, SlipId};
use super::market::OutcomeCode;
use super::payout::Valuation;

/// One match's predicted result within a slip.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    fixture: Arc<Match>,
    code: OutcomeCode,
}

impl Outcome {
    /// Pair a match with a predicted outcome.
    #[must_use]
    pub fn new(fixture: Arc<Match>, code: OutcomeCode) -> Self {
        Self { fixture, code }
    }

    #[must_use]
    pub fn match_id(&self) -> &MatchId {
        self.fixture.id()
    }

    /// The referenced match.
    #[must_use]
    pub fn fixture(&self) -> &Match {
        &self.fixture
    }

    #[must_use]
    pub const fn code(&self) -> OutcomeCode {
        self.code
    }
}

impl Serialize for Outcome {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Outcome", 4)?;
        state.serialize_field("match_id", self.match_id())?;
        state.serialize_field("home_team", self.fixture.home_team())?;
        state.serialize_field("away_team", self.fixture.away_team())?;
        state.serialize_field("outcome", &self.code)?;
        state.end()
    }
}

/// A human-readable row of a slip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlipRow<'a> {
    pub home_team: &'a str,
    pub away_team: &'a str,
    pub outcome: OutcomeCode,
}

/// An ordered set of predictions scored as a unit.
///
/// Outcomes are fixed at generation time. The valuation is attached
/// afterwards and never changes the outcomes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Slip {
    id: SlipId,
    outcomes: Vec<Outcome>,
    #[serde(flatten)]
    valuation: Option<Valuation>,
}

impl Slip {
    /// Create an unvalued slip.
    #[must_use]
    pub fn new(id: SlipId, outcomes: Vec<Outcome>) -> Self {
        Self {
            id,
            outcomes,
            valuation: None,
        }
    }

    #[must_use]
    pub fn id(&self) -> &SlipId {
        &self.id
    }

    #[must_use]
    pub fn outcomes(&self) -> &[Outcome] {
        &self.outcomes
    }

    /// Number of legs (outcomes) on the slip.
    #[must_use]
    pub fn legs(&self) -> usize {
        self.outcomes.len()
    }

    /// The attached valuation, if any.
    #[must_use]
    pub fn valuation(&self) -> Option<&Valuation> {
        self.valuation.as_ref()
    }

    /// Attach a valuation.
    pub fn apply_valuation(&mut self, valuation: Valuation) {
        self.valuation = Some(valuation);
    }

    /// Outcome codes in match order.
    pub fn codes(&self) -> impl Iterator<Item = OutcomeCode> + '_ {
        self.outcomes.iter().map(Outcome::code)
    }

    /// Resolve the slip into (home, away, outcome) rows.
    #[must_use]
    pub fn rows(&self) -> Vec<SlipRow<'_>> {
        self.outcomes
            .iter()
            .map(|o| SlipRow {
                home_team: o.fixture.home_team(),
                away_team: o.fixture.away_team(),
                outcome: o.code,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slip() -> Slip {
        let a = Arc::new(Match::new("m-0", "Arsenal", "Chelsea"));
        let b = Arc::new(Match::new("m-1", "Yanga", "Simba"));
        Slip::new(
            SlipId::from("SLIP-1-1"),
            vec![
                Outcome::new(a, OutcomeCode::Home),
                Outcome::new(b, OutcomeCode::Draw),
            ],
        )
    }

    #[test]
    fn rows_resolve_team_names() {
        let slip = slip();
        let rows = slip.rows();

        assert_eq!(slip.legs(), 2);
        assert_eq!(rows[1].home_team, "Yanga");
        assert_eq!(rows[1].away_team, "Simba");
        assert_eq!(rows[1].outcome, OutcomeCode::Draw);
    }

    #[test]
    fn outcomes_share_the_match_record() {
        let fixture = Arc::new(Match::new("m-0", "A", "B"));
        let outcome = Outcome::new(Arc::clone(&fixture), OutcomeCode::Away);

        assert_eq!(Arc::strong_count(&fixture), 2);
        assert_eq!(outcome.match_id().as_str(), "m-0");
    }

    #[test]
    fn unvalued_slip_serializes_without_financials() {
        let json = serde_json::to_value(slip()).unwrap();

        assert_eq!(json["id"], "SLIP-1-1");
        assert_eq!(json["outcomes"][0]["outcome"], "1");
        assert_eq!(json["outcomes"][1]["home_team"], "Yanga");
        assert!(json.get("payout").is_none());
    }
}
