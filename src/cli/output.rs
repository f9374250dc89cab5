//! Shared CLI output helpers for consistent operator-facing text.

use std::fmt::Display;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::{OwoColorize, Stream};
use rust_decimal::Decimal;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::domain::Slip;

const RULE_WIDTH: usize = 56;

/// Braille spinner animation frames.
const BRAILLE_SPINNER: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Print a section header and separator.
pub fn section(title: &str) {
    println!();
    println!("{title}");
    println!("{}", "─".repeat(RULE_WIDTH));
}

/// Print a simple key/value line.
pub fn key_value(label: &str, value: impl Display) {
    println!("{label:<14} {value}");
}

/// Print a successful status line.
pub fn ok(message: &str) {
    println!(
        "{} {message}",
        "✓".if_supports_color(Stream::Stdout, |t| t.green())
    );
}

/// Print a warning status line.
pub fn warn(message: &str) {
    eprintln!(
        "{} {message}",
        "⚠".if_supports_color(Stream::Stderr, |t| t.yellow())
    );
}

/// Print an error status line.
pub fn error(message: &str) {
    eprintln!(
        "{} {message}",
        "✗".if_supports_color(Stream::Stderr, |t| t.red())
    );
}

/// Print a single-line note.
pub fn note(message: &str) {
    println!("{message}");
}

/// Start a spinner on stderr; hidden when `quiet`.
pub fn spinner(message: &str, quiet: bool) -> ProgressBar {
    let pb = if quiet {
        ProgressBar::hidden()
    } else {
        ProgressBar::new_spinner()
    };
    pb.set_style(
        ProgressStyle::with_template("  {spinner:.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_strings(BRAILLE_SPINNER),
    );
    pb.set_message(message.to_string());
    if !quiet {
        pb.enable_steady_tick(Duration::from_millis(80));
    }
    pb
}

/// Money for display: whole units, truncated.
#[must_use]
pub fn money(amount: Decimal) -> String {
    amount.trunc().to_string()
}

#[derive(Tabled)]
struct SlipTableRow {
    #[tabled(rename = "Slip")]
    id: String,
    #[tabled(rename = "Picks")]
    picks: String,
    #[tabled(rename = "Odds")]
    odds: String,
    #[tabled(rename = "Bonus")]
    bonus: String,
    #[tabled(rename = "Tax")]
    tax: String,
    #[tabled(rename = "Payout")]
    payout: String,
}

impl From<&Slip> for SlipTableRow {
    fn from(slip: &Slip) -> Self {
        let picks = slip
            .rows()
            .iter()
            .map(|row| format!("{} vs {}: {}", row.home_team, row.away_team, row.outcome))
            .collect::<Vec<_>>()
            .join("\n");

        let (odds, bonus, tax, payout) = match slip.valuation() {
            Some(v) => (
                format!("x{}", v.total_odds.round_dp(2)),
                format!("{}% (+{})", v.bonus_percent, money(v.win_bonus)),
                money(v.tax),
                money(v.payout),
            ),
            None => Default::default(),
        };

        Self {
            id: slip.id().to_string(),
            picks,
            odds,
            bonus,
            tax,
            payout,
        }
    }
}

/// Render up to `limit` slips as a table.
#[must_use]
pub fn slip_table(slips: &[Slip], limit: usize) -> String {
    let rows: Vec<SlipTableRow> = slips.iter().take(limit).map(SlipTableRow::from).collect();
    Table::new(rows).with(Style::rounded()).to_string()
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::domain::{Match, Outcome, OutcomeCode, PayoutCalculator, SlipId, Stake};
    use rust_decimal_macros::dec;

    #[test]
    fn money_truncates() {
        assert_eq!(money(dec!(865.98)), "865");
        assert_eq!(money(dec!(1880)), "1880");
    }

    #[test]
    fn table_shows_picks_and_payout() {
        let fixture = Match::try_new("m-0", "Arsenal", "Chelsea", [(OutcomeCode::Home, dec!(2.0))])
            .unwrap();
        let mut slips = vec![Slip::new(
            SlipId::from("SLIP-1-1"),
            vec![Outcome::new(Arc::new(fixture), OutcomeCode::Home)],
        )];
        PayoutCalculator::default().valuate_all(&mut slips, Stake::try_new(dec!(1000)).unwrap());

        let table = slip_table(&slips, 10);

        assert!(table.contains("SLIP-1-1"));
        assert!(table.contains("Arsenal vs Chelsea: 1"));
        assert!(table.contains("1880"));
    }

    #[test]
    fn table_respects_limit() {
        let slips: Vec<Slip> = (1..=5)
            .map(|i| Slip::new(SlipId::from(format!("SLIP-1-{i}").as_str()), vec![]))
            .collect();

        let table = slip_table(&slips, 2);

        assert!(table.contains("SLIP-1-2"));
        assert!(!table.contains("SLIP-1-3"));
    }
}
