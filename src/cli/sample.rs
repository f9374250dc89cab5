//! Handler for the `sample` command.

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;

use crate::cli::{Cli, SampleArgs};
use crate::error::Result;
use crate::sample::sample_fixtures;

/// Print a random match list, one fixture per line.
///
/// The output can be piped straight into `slipgen generate`.
pub fn execute(cli: &Cli, args: &SampleArgs) -> Result<()> {
    let config = cli.load_config()?;
    config.init_logging();

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let lines = sample_fixtures(args.count, args.region, &mut rng);
    debug!(region = %args.region, count = lines.len(), "sampled fixtures");

    for line in lines {
        println!("{line}");
    }
    Ok(())
}
