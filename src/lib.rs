//! TimeAfterTime library root.
//! Exposes the timesheet core, the CLI parser and the high-level run() function.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::DataDir;
use errors::AppResult;
use tracing_subscriber::EnvFilter;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, data: &DataDir) -> AppResult<()> {
    match &cli.command {
        Commands::New { .. } => cli::commands::new::handle(cli, data),
        Commands::Open { .. } => cli::commands::open::handle(cli, data),
        Commands::List => cli::commands::list::handle(cli, data),
        Commands::Show { .. } => cli::commands::show::handle(cli, data),
        Commands::Add { .. } => cli::commands::add::handle(cli, data),
        Commands::Edit { .. } => cli::commands::edit::handle(cli, data),
        Commands::Del { .. } => cli::commands::del::handle(cli, data),
        Commands::Set { .. } => cli::commands::set::handle(cli, data),
        Commands::Export { .. } => cli::commands::export::handle(cli, data),
        Commands::Delete { .. } => cli::commands::delete::handle(cli, data),
        Commands::Config { .. } => cli::commands::config::handle(cli, data),
    }
}

/// Diagnostics go to stderr, only with `--verbose` or an explicit `RUST_LOG`.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("timeaftertime=debug")
    } else {
        match EnvFilter::try_from_default_env() {
            Ok(f) => f,
            Err(_) => return,
        }
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    // data directory and global config exist before any command runs
    let data = DataDir::resolve(cli.data_dir.as_deref());
    data.ensure()?;

    dispatch(&cli, &data)
}
