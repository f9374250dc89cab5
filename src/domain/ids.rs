//! Domain identifier types with proper encapsulation.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Match identifier - newtype for type safety.
///
/// The inner String is private to ensure all construction goes through
/// the defined constructors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MatchId(String);

impl MatchId {
    /// Create a new `MatchId` from a string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Identifier for the match at `index` in a parsed list (`m-0`, `m-1`, ...).
    #[must_use]
    pub fn positional(index: usize) -> Self {
        Self(format!("m-{index}"))
    }

    /// Get the match ID as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MatchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for MatchId {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for MatchId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Unique identifier for a generated slip.
///
/// Built from a prefix, the batch timestamp and a sequence number that
/// increases across the batch, e.g. `SLIP-1718000000000-3`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SlipId(String);

impl SlipId {
    /// Prefix for sampled slips.
    pub const SAMPLED_PREFIX: &'static str = "SLIP";
    /// Prefix for correct-score coverage slips.
    pub const COVERAGE_PREFIX: &'static str = "CS";

    /// Create a sequenced slip ID.
    #[must_use]
    pub fn sequenced(prefix: &str, batch_millis: i64, sequence: usize) -> Self {
        Self(format!("{prefix}-{batch_millis}-{sequence}"))
    }

    /// Get the slip ID as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SlipId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for SlipId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positional_match_ids() {
        assert_eq!(MatchId::positional(0).as_str(), "m-0");
        assert_eq!(MatchId::positional(12).to_string(), "m-12");
    }

    #[test]
    fn sequenced_slip_ids_differ_by_sequence() {
        let a = SlipId::sequenced(SlipId::SAMPLED_PREFIX, 1_700_000_000_000, 1);
        let b = SlipId::sequenced(SlipId::SAMPLED_PREFIX, 1_700_000_000_000, 2);

        assert_eq!(a.as_str(), "SLIP-1700000000000-1");
        assert_ne!(a, b);
    }
}
