mod cli;
mod cli_utils;
mod commands;
mod config;

use anyhow::Result;
use clap::Parser;
use cli::{Args, Command};
use config::Config;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging (warn unless RUST_LOG says otherwise)
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("mutscope=warn,mutscope_core=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let config = Config::discover(args.config.as_deref())?;
    let tables_path = args.tables.as_deref().or(config.resolve.tables.as_deref());
    let tables = cli_utils::load_tables(tables_path)?;

    match args.command {
        Command::Resolve {
            files,
            strategies,
            json,
        } => {
            let options = strategies.apply(config.resolve.options());
            commands::resolve::run(&files, &tables, options, json)
        }
        Command::Catalog { json } => commands::catalog::run(&tables, json),
    }
}
