//! Handlers for `slipgen check` subcommands.

use std::path::Path;

use crate::cli::output;
use crate::config::Config;
use crate::domain::{correct_score_count, Market};
use crate::error::Result;

/// Validate a configuration file and print a summary.
pub fn execute_config<P: AsRef<Path>>(config_path: P) -> Result<()> {
    let path = config_path.as_ref();
    output::note(&format!("Checking configuration: {}", path.display()));

    let config = Config::load(path)?;
    output::ok("Configuration file is valid");

    let sampling = &config.sampling;
    output::section("Sampling");
    output::key_value("Market:", sampling.market);
    if sampling.market.is_sampled() {
        output::key_value("Weights:", weights(&config));
        output::key_value("Max run:", sampling.max_consecutive);
    } else {
        output::key_value("Max goals:", sampling.max_goals);
        output::key_value(
            "Scores/match:",
            correct_score_count(sampling.max_goals),
        );
    }
    match sampling.seed {
        Some(seed) => output::key_value("Seed:", seed),
        None => output::key_value("Seed:", "entropy"),
    }
    match sampling.count {
        Some(count) => output::key_value("Count:", count),
        None => output::key_value("Count:", "suggested (3^n)"),
    }

    let payout = &config.payout;
    output::section("Payout");
    output::key_value("Stake:", payout.stake);
    output::key_value("Tax rate:", payout.tax_rate);
    output::key_value(
        "Bonus:",
        format!(
            "{} legs and up, {}% cap",
            payout.bonus.first_leg, payout.bonus.cap
        ),
    );

    if payout.stake.is_zero() {
        output::warn("Stake is 0; every payout will be 0");
    }

    println!();
    output::note("Configuration is ready to use.");
    Ok(())
}

fn weights(config: &Config) -> String {
    let d = &config.sampling.distribution;
    match config.sampling.market {
        Market::Goals => format!("over={} under={}", d.over, d.under),
        _ => format!("1={} X={} 2={}", d.home, d.draw, d.away),
    }
}
