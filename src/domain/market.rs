//! Betting markets and the outcome codes they produce.
//!
//! - [`Market`] - which market a batch of slips is generated for
//! - [`OutcomeCode`] - a single predicted result, rendered as the wire strings
//!   `1`, `X`, `2`, `Over 2.5`, `Under 2.5` or `H-A`

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::DomainError;

/// Market a slip batch is generated for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Market {
    /// Home win / draw / away win.
    #[default]
    #[serde(rename = "1x2")]
    ThreeWay,
    /// Over or under 2.5 total goals.
    #[serde(rename = "goals")]
    Goals,
    /// Every correct score up to a goal bound, one single-leg slip each.
    #[serde(rename = "correct_score")]
    CorrectScoreCoverage,
}

const THREE_WAY_SPACE: [OutcomeCode; 3] = [OutcomeCode::Home, OutcomeCode::Draw, OutcomeCode::Away];
const GOALS_SPACE: [OutcomeCode; 2] = [OutcomeCode::Over, OutcomeCode::Under];

impl Market {
    /// Outcome codes a sampled market draws from, in partition order.
    ///
    /// Correct-score coverage is enumerated rather than sampled and has an
    /// empty sampling space.
    #[must_use]
    pub const fn outcome_space(&self) -> &'static [OutcomeCode] {
        match self {
            Self::ThreeWay => &THREE_WAY_SPACE,
            Self::Goals => &GOALS_SPACE,
            Self::CorrectScoreCoverage => &[],
        }
    }

    /// True for markets that are sampled slip by slip.
    #[must_use]
    pub const fn is_sampled(&self) -> bool {
        !matches!(self, Self::CorrectScoreCoverage)
    }

    /// Configuration/CLI name of the market.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::ThreeWay => "1x2",
            Self::Goals => "goals",
            Self::CorrectScoreCoverage => "correct_score",
        }
    }
}

impl fmt::Display for Market {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Market {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "1x2" | "three_way" => Ok(Self::ThreeWay),
            "goals" | "over_under" => Ok(Self::Goals),
            "correct_score" | "cs" => Ok(Self::CorrectScoreCoverage),
            other => Err(DomainError::UnknownMarket(other.to_string())),
        }
    }
}

/// A predicted result for one match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum OutcomeCode {
    /// Home win (`1`).
    Home,
    /// Draw (`X`).
    Draw,
    /// Away win (`2`).
    Away,
    /// More than 2.5 goals.
    Over,
    /// Fewer than 2.5 goals.
    Under,
    /// Exact final score.
    Score {
        /// Home goals.
        home: u32,
        /// Away goals.
        away: u32,
    },
}

impl OutcomeCode {
    /// Exact-score outcome.
    #[must_use]
    pub const fn score(home: u32, away: u32) -> Self {
        Self::Score { home, away }
    }
}

impl fmt::Display for OutcomeCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Home => f.write_str("1"),
            Self::Draw => f.write_str("X"),
            Self::Away => f.write_str("2"),
            Self::Over => f.write_str("Over 2.5"),
            Self::Under => f.write_str("Under 2.5"),
            Self::Score { home, away } => write!(f, "{home}-{away}"),
        }
    }
}

impl FromStr for OutcomeCode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(Self::Home),
            "X" | "x" => Ok(Self::Draw),
            "2" => Ok(Self::Away),
            "Over 2.5" => Ok(Self::Over),
            "Under 2.5" => Ok(Self::Under),
            other => {
                let (home, away) = other
                    .split_once('-')
                    .ok_or_else(|| DomainError::UnknownOutcome(other.to_string()))?;
                match (home.parse(), away.parse()) {
                    (Ok(home), Ok(away)) => Ok(Self::Score { home, away }),
                    _ => Err(DomainError::UnknownOutcome(other.to_string())),
                }
            }
        }
    }
}

impl TryFrom<String> for OutcomeCode {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<OutcomeCode> for String {
    fn from(code: OutcomeCode) -> Self {
        code.to_string()
    }
}
