//! Handler for the `generate` command.

use serde::Serialize;
use tracing::{info, warn};

use crate::cli::{output, read_match_text, Cli, GenerateArgs, OutputFormat};
use crate::config::{Config, MAX_BATCH_SLIPS};
use crate::domain::{
    suggested_slip_count, PayoutCalculator, Slip, SlipGenerator, MAX_SUGGESTED_SLIPS,
};
use crate::error::{ConfigError, Result};
use crate::parser::MatchListParser;

#[derive(Serialize)]
struct GenerateReport<'a> {
    market: &'static str,
    matches: usize,
    count: usize,
    slips: &'a [Slip],
}

/// Execute the generate command.
pub async fn execute(cli: &Cli, args: &GenerateArgs) -> Result<()> {
    let mut config = cli.load_config()?;
    apply_overrides(&mut config, args);
    config.validate()?;
    config.init_logging();

    let text = read_match_text(args.input.matches.as_deref())?;
    let matches = MatchListParser::new()?.parse(&text)?;
    if matches.is_empty() {
        output::warn("No matches found in input; nothing to generate");
    }

    let match_count = matches.len();
    let count = requested_count(&config, match_count);
    let sampling = config.sampling.to_sampling_config();
    let stake = config.stake()?;
    let calculator = PayoutCalculator::new(config.payout.rules())?;
    let generator = SlipGenerator::new(matches).with_seed(config.sampling.seed);
    let planned = planned_slips(&config, &generator, count)?;

    info!(
        market = %sampling.market,
        matches = match_count,
        count = planned,
        seed = ?config.sampling.seed,
        "generating slips"
    );

    let quiet = args.quiet || args.format == OutputFormat::Json;
    let spinner = output::spinner(&format!("Generating {planned} slips..."), quiet);
    let result = tokio::task::spawn_blocking(move || -> Result<Vec<Slip>> {
        let mut slips = generator.generate(count, &sampling)?;
        calculator.valuate_all(&mut slips, stake);
        Ok(slips)
    })
    .await;
    spinner.finish_and_clear();
    let slips = result??;

    info!(generated = slips.len(), "slips ready");

    match args.format {
        OutputFormat::Json => {
            let report = GenerateReport {
                market: config.sampling.market.as_str(),
                matches: match_count,
                count: slips.len(),
                slips: &slips,
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Table => print_table(&config, &slips, match_count, args.limit),
    }

    Ok(())
}

fn apply_overrides(config: &mut Config, args: &GenerateArgs) {
    let sampling = &mut config.sampling;
    if let Some(market) = args.market {
        sampling.market = market;
    }
    if let Some(count) = args.count {
        sampling.count = Some(count);
    }

    let weights = &mut sampling.distribution;
    for (flag, weight) in [
        (args.home, &mut weights.home),
        (args.draw, &mut weights.draw),
        (args.away, &mut weights.away),
        (args.over, &mut weights.over),
        (args.under, &mut weights.under),
    ] {
        if let Some(value) = flag {
            *weight = value;
        }
    }

    if let Some(max_consecutive) = args.max_consecutive {
        sampling.max_consecutive = max_consecutive;
    }
    if let Some(max_goals) = args.max_goals {
        sampling.max_goals = max_goals;
    }
    if let Some(seed) = args.seed {
        sampling.seed = Some(seed);
    }
    if let Some(stake) = args.stake {
        config.payout.stake = stake;
    }
}

/// Explicit count, or the capped `3^n` suggestion.
fn requested_count(config: &Config, match_count: usize) -> usize {
    config.sampling.count.unwrap_or_else(|| {
        let suggested = suggested_slip_count(match_count, MAX_SUGGESTED_SLIPS);
        usize::try_from(suggested).map_or(MAX_BATCH_SLIPS, |n| n.min(MAX_BATCH_SLIPS))
    })
}

/// Slips the run will produce: `count` when sampling, every match and score
/// for coverage. Coverage batches over the cap are rejected here.
fn planned_slips(config: &Config, generator: &SlipGenerator, count: usize) -> Result<u64> {
    if config.sampling.market.is_sampled() {
        return Ok(u64::try_from(count).unwrap_or(u64::MAX));
    }

    let slips = generator.coverage_slip_count(config.sampling.max_goals);
    if slips > MAX_BATCH_SLIPS as u64 {
        return Err(ConfigError::InvalidValue {
            field: "sampling.max_goals",
            reason: format!(
                "{} matches x {} goals gives {slips} slips, limit is {MAX_BATCH_SLIPS}",
                generator.matches().len(),
                config.sampling.max_goals
            ),
        }
        .into());
    }
    Ok(slips)
}

fn print_table(config: &Config, slips: &[Slip], match_count: usize, limit: usize) {
    output::section("Generated slips");
    output::key_value("Market:", config.sampling.market);
    output::key_value("Matches:", match_count);
    output::key_value("Slips:", slips.len());
    output::key_value("Stake:", output::money(config.payout.stake));
    println!();

    if slips.is_empty() {
        output::note("No slips generated.");
        return;
    }

    println!("{}", output::slip_table(slips, limit));
    if slips.len() > limit {
        warn!(shown = limit, total = slips.len(), "table output truncated");
        output::note(&format!(
            "Showing {limit} of {} slips. Use --format json for the full batch.",
            slips.len()
        ));
    }
}
