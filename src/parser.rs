//! Free-text match-list parsing.
//!
//! Each non-blank line describes one match, for example:
//!
//! ```text
//! Arsenal vs Chelsea [1.85 | 3.40 | 4.20]
//! Yanga - Simba 2.10 3.05 3.60
//! Real Madrid v Barcelona
//! ```
//!
//! Odds are read from a bracketed group when present, otherwise from loose
//! numbers on the line. Unknown odds default to 1.0.

use std::str::FromStr;

use regex::Regex;
use rust_decimal::Decimal;
use thiserror::Error;

use crate::domain::error::DomainError;
use crate::domain::{Match, MatchId, Odds, OutcomeCode};

/// Away team name used when a line has no separator.
pub const DEFAULT_AWAY_TEAM: &str = "Away";

/// Errors raised while parsing a match list.
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("invalid pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("line {line}: {source}")]
    InvalidMatch {
        line: usize,
        #[source]
        source: DomainError,
    },
}

/// Parses pasted fixture lists into [`Match`] records.
#[derive(Debug, Clone)]
pub struct MatchListParser {
    brackets: Regex,
    bracket_parts: Regex,
    numbers: Regex,
    separator: Regex,
}

impl MatchListParser {
    /// Compile the line patterns.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::Pattern`] if a pattern fails to compile.
    pub fn new() -> Result<Self, ParseError> {
        Ok(Self {
            brackets: Regex::new(r"\[([^\]]+)\]")?,
            bracket_parts: Regex::new(r"[|/\s,;]+")?,
            numbers: Regex::new(r"\d+(?:[.,]\d+)?")?,
            separator: Regex::new(r"(?i)\s+(?:vs\.?|v\.?|-|–)\s+")?,
        })
    }

    /// Parse every non-blank line, numbering matches `m-0`, `m-1`, ...
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::InvalidMatch`] if a line yields unusable odds.
    pub fn parse(&self, text: &str) -> Result<Vec<Match>, ParseError> {
        text.lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .enumerate()
            .map(|(index, line)| {
                self.parse_line(index, line)
                    .map_err(|source| ParseError::InvalidMatch {
                        line: index + 1,
                        source,
                    })
            })
            .collect()
    }

    /// Parse one line into the match at position `index`.
    ///
    /// # Errors
    ///
    /// Returns a [`DomainError`] if the extracted odds are not positive.
    pub fn parse_line(&self, index: usize, line: &str) -> Result<Match, DomainError> {
        let (names, odds) = match self.brackets.captures(line) {
            Some(caps) => {
                let whole = caps.get(0).map_or("", |m| m.as_str());
                let inner = caps.get(1).map_or("", |m| m.as_str());
                (line.replacen(whole, " ", 1), self.bracket_odds(inner))
            }
            None => self.loose_odds(line),
        };

        let mut teams = self.separator.splitn(&names, 2);
        let home = collapse_whitespace(teams.next().unwrap_or_default());
        let away = teams
            .next()
            .map(collapse_whitespace)
            .filter(|away| !away.is_empty())
            .unwrap_or_else(|| DEFAULT_AWAY_TEAM.to_string());

        Match::try_new(MatchId::positional(index), home, away, odds)
    }

    /// `[1.5 | 3.2 | 2.1]` style odds; commas are read as decimal points.
    fn bracket_odds(&self, inner: &str) -> Vec<(OutcomeCode, Odds)> {
        let normalized = inner.replace(',', ".");
        let parts = self
            .bracket_parts
            .split(&normalized)
            .filter(|part| !part.is_empty());

        [OutcomeCode::Home, OutcomeCode::Draw, OutcomeCode::Away]
            .into_iter()
            .zip(parts)
            .map(|(code, part)| {
                let odds = Decimal::from_str(part)
                    .ok()
                    .filter(|value| *value > Decimal::ZERO)
                    .unwrap_or(Decimal::ONE);
                (code, odds)
            })
            .collect()
    }

    /// Loose numbers greater than 1 anywhere on the line.
    ///
    /// Three or more fill `1`, `X`, `2`; exactly two fill `1` and `2`. The
    /// numbers are cut out of the returned name text.
    fn loose_odds(&self, line: &str) -> (String, Vec<(OutcomeCode, Odds)>) {
        let found: Vec<(std::ops::Range<usize>, Odds)> = self
            .numbers
            .find_iter(line)
            .filter_map(|m| {
                let value = Decimal::from_str(&m.as_str().replace(',', ".")).ok()?;
                (value > Decimal::ONE).then(|| (m.range(), value))
            })
            .collect();

        let mut names = String::with_capacity(line.len());
        let mut cursor = 0;
        for (range, _) in &found {
            names.push_str(&line[cursor..range.start]);
            names.push(' ');
            cursor = range.end;
        }
        names.push_str(&line[cursor..]);

        let values: Vec<Odds> = found.into_iter().map(|(_, value)| value).collect();
        let odds = match values.as_slice() {
            [home, draw, away, ..] => vec![
                (OutcomeCode::Home, *home),
                (OutcomeCode::Draw, *draw),
                (OutcomeCode::Away, *away),
            ],
            [home, away] => vec![(OutcomeCode::Home, *home), (OutcomeCode::Away, *away)],
            _ => Vec::new(),
        };
        (names, odds)
    }
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn parser() -> MatchListParser {
        MatchListParser::new().unwrap()
    }

    #[test]
    fn bracketed_odds() {
        let fixture = parser()
            .parse_line(0, "Arsenal vs Chelsea [1.85 | 3.40 | 4.20]")
            .unwrap();

        assert_eq!(fixture.id().as_str(), "m-0");
        assert_eq!(fixture.home_team(), "Arsenal");
        assert_eq!(fixture.away_team(), "Chelsea");
        assert_eq!(fixture.odds_for(&OutcomeCode::Home), dec!(1.85));
        assert_eq!(fixture.odds_for(&OutcomeCode::Draw), dec!(3.40));
        assert_eq!(fixture.odds_for(&OutcomeCode::Away), dec!(4.20));
    }

    #[test]
    fn bracketed_odds_with_decimal_commas() {
        let fixture = parser().parse_line(0, "Yanga - Simba [2,10; 3,05; x]").unwrap();

        assert_eq!(fixture.odds_for(&OutcomeCode::Home), dec!(2.10));
        assert_eq!(fixture.odds_for(&OutcomeCode::Draw), dec!(3.05));
        assert_eq!(fixture.odds_for(&OutcomeCode::Away), dec!(1.0));
    }

    #[test]
    fn loose_odds_three_numbers() {
        let fixture = parser()
            .parse_line(3, "Real Madrid v Barcelona 2.10 3.30 3.25")
            .unwrap();

        assert_eq!(fixture.id().as_str(), "m-3");
        assert_eq!(fixture.home_team(), "Real Madrid");
        assert_eq!(fixture.away_team(), "Barcelona");
        assert_eq!(fixture.odds_for(&OutcomeCode::Draw), dec!(3.30));
    }

    #[test]
    fn loose_odds_two_numbers_skip_draw() {
        let fixture = parser().parse_line(0, "Lakers vs Celtics 1.75 2.05").unwrap();

        assert_eq!(fixture.odds_for(&OutcomeCode::Home), dec!(1.75));
        assert_eq!(fixture.odds_for(&OutcomeCode::Draw), dec!(1.0));
        assert_eq!(fixture.odds_for(&OutcomeCode::Away), dec!(2.05));
    }

    #[test]
    fn missing_separator_uses_default_away() {
        let fixture = parser().parse_line(0, "  Lonely   Team  ").unwrap();

        assert_eq!(fixture.home_team(), "Lonely Team");
        assert_eq!(fixture.away_team(), DEFAULT_AWAY_TEAM);
    }

    #[test]
    fn blank_lines_are_skipped_and_ids_stay_dense() {
        let matches = parser()
            .parse("A vs B\n\n   \nC vs D\nE VS. F\n")
            .unwrap();

        let ids: Vec<_> = matches.iter().map(|m| m.id().as_str().to_string()).collect();
        assert_eq!(ids, ["m-0", "m-1", "m-2"]);
        assert_eq!(matches[2].home_team(), "E");
        assert_eq!(matches[2].away_team(), "F");
    }

    #[test]
    fn empty_text_yields_no_matches() {
        assert!(parser().parse("").unwrap().is_empty());
    }
}
