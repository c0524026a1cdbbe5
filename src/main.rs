use clap::Parser;
use postpulse::cli::commands::Cli;
use postpulse::cli::commands::Commands;
use postpulse::cli::handlers;
use postpulse::config::AppConfig;
use postpulse::logging;
use postpulse::Result;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::load()?;
    logging::init_logging(&config, cli.verbose)?;

    match cli.command {
        Commands::Predict {
            training,
            holdout,
            output,
        } => handlers::handle_predict(&config, training, holdout, output),
        Commands::Evaluate { training } => handlers::handle_evaluate(&config, training),
        Commands::Stats {
            training,
            top,
            json,
        } => handlers::handle_stats(&config, training, top, json),
    }
}
