use clap::Parser;
use slipgen::cli::{self, output, CheckCommand, Cli, Commands};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let result = match &cli.command {
        Commands::Generate(args) => cli::generate::execute(&cli, args).await,
        Commands::Suggest(args) => cli::suggest::execute(&cli, args),
        Commands::Sample(args) => cli::sample::execute(&cli, args),
        Commands::Check(CheckCommand::Config) => cli::check::execute_config(&cli.config),
    };

    if let Err(e) = result {
        output::error(&e.to_string());
        std::process::exit(1);
    }
}
