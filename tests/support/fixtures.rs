//! Match and slip builders shared by integration tests.

use std::sync::Arc;

use rust_decimal::Decimal;
use slipgen::domain::{Match, Outcome, OutcomeCode, Slip, SlipId};

/// `count` matches named `Home {i}` / `Away {i}` with default odds.
pub fn matches(count: usize) -> Vec<Match> {
    (0..count)
        .map(|i| Match::new(format!("m-{i}"), format!("Home {i}"), format!("Away {i}")))
        .collect()
}

/// A three-way match with explicit `1`/`X`/`2` odds.
pub fn priced_match(id: &str, home: Decimal, draw: Decimal, away: Decimal) -> Match {
    Match::try_new(
        id,
        format!("{id} home"),
        format!("{id} away"),
        [
            (OutcomeCode::Home, home),
            (OutcomeCode::Draw, draw),
            (OutcomeCode::Away, away),
        ],
    )
    .expect("positive odds")
}

/// A slip picking `code` for every match in `fixtures`.
pub fn slip_of(fixtures: Vec<Match>, code: OutcomeCode) -> Slip {
    let outcomes = fixtures
        .into_iter()
        .map(|fixture| Outcome::new(Arc::new(fixture), code))
        .collect();
    Slip::new(SlipId::from("SLIP-0-1"), outcomes)
}

/// Longest run of identical consecutive codes in a slip.
pub fn longest_run(slip: &Slip) -> usize {
    let mut longest = 0;
    let mut current = 0;
    let mut last = None;
    for code in slip.codes() {
        current = if Some(code) == last { current + 1 } else { 1 };
        last = Some(code);
        longest = longest.max(current);
    }
    longest
}
