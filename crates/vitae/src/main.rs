mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so command output stays valid JSON
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();
    let opts = cli.options();

    match cli.command {
        Commands::Filter { filter } => commands::filter::run(&opts, &filter),
        Commands::Search { query, filter } => commands::search::run(&opts, &query, &filter),
        Commands::Skills => commands::skills::run(&opts),
        Commands::Validate => commands::validate::run(&opts),
        Commands::Version => commands::version::run(&opts),
    }
}
