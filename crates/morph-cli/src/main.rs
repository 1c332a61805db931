//! Config Morpher CLI
//!
//! Resolves paths in TOML/JSON/YAML config files and binds config keys to
//! schema parameters.

mod cli;
mod commands;
mod error;

use clap::Parser;
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use cli::{Cli, Commands};
use commands::BindArgs;
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_writer(std::io::stderr)
            .with_target(true)
            .finish();
        if tracing::subscriber::set_global_default(subscriber).is_ok() {
            tracing::debug!("Verbose mode enabled");
        }
    } else if let Err(e) = morph_core::logging::init() {
        eprintln!("{}: logging disabled: {}", "warning".yellow().bold(), e);
    }

    execute_command(cli.command)
}

fn execute_command(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Get { file, path, output } => commands::run_get(&file, &path, output),
        Commands::Tokens { path } => commands::run_tokens(&path),
        Commands::Bind {
            file,
            schema,
            params,
            start_from,
            deny_extra,
            all_params,
        } => commands::run_bind(BindArgs {
            file,
            schema,
            params,
            start_from,
            deny_extra,
            all_params,
        }),
    }
}
