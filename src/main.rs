mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};
use tracing::Level;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> miette::Result<()> {
    let cli = Cli::parse();
    init_logging(&cli);

    let config = cli.config.clone();
    match cli.command {
        Commands::Ls {
            files,
            skip_unsupported,
        } => commands::ls::run(config, files, skip_unsupported),
        Commands::Targets { name, languages } => commands::targets::run(config, name, languages),
        Commands::Check => commands::check::run(config),
    }
}

fn init_logging(cli: &Cli) {
    let level = if cli.verbose {
        Level::DEBUG
    } else if cli.quiet {
        Level::ERROR
    } else {
        Level::INFO
    };

    let filter = EnvFilter::try_from_env("QORDOBA_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(format!("qordoba={level}")));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .init();
}
