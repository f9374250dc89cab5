//! Handler for the `suggest` command.

use crate::cli::{output, read_match_text, Cli, MatchesArg};
use crate::domain::{suggested_slip_count, MAX_SUGGESTED_SLIPS};
use crate::error::Result;
use crate::parser::MatchListParser;

/// Print the suggested slip count for a match list.
pub fn execute(cli: &Cli, args: &MatchesArg) -> Result<()> {
    let config = cli.load_config()?;
    config.init_logging();

    let text = read_match_text(args.matches.as_deref())?;
    let matches = MatchListParser::new()?.parse(&text)?;

    output::section("Suggested slip count");
    output::key_value("Matches:", matches.len());
    output::key_value("Combinations:", combinations(matches.len()));
    output::key_value(
        "Suggested:",
        suggested_slip_count(matches.len(), MAX_SUGGESTED_SLIPS),
    );
    output::key_value("Cap:", MAX_SUGGESTED_SLIPS);

    if matches.is_empty() {
        output::warn("No matches found in input");
    }
    Ok(())
}

/// Uncapped `3^n`, or `>` the cap when it does not fit in a `u64`.
fn combinations(match_count: usize) -> String {
    u32::try_from(match_count)
        .ok()
        .and_then(|n| 3u64.checked_pow(n))
        .map_or_else(|| format!("> {}", u64::MAX), |n| n.to_string())
}
