use crate::cli::parser::{Cli, Commands};
use crate::config::{ConfigStore, DataDir};
use crate::errors::AppResult;
use crate::ui::messages::{info, warning};
use std::fs;

/// Handle the `config` subcommand
pub fn handle(cli: &Cli, data: &DataDir) -> AppResult<()> {
    if let Commands::Config { print_config } = &cli.command {
        let global = data.global_config();

        info(format!("Data directory : {}", data.root().display()));
        info(format!("Global config  : {}", global.store().path().display()));

        let current = match &cli.sheet {
            Some(name) => Some(DataDir::dir_name(name)?),
            None => global.last()?,
        };

        match &current {
            Some(name) => info(format!("Timesheet      : {}", name)),
            None => warning("No timesheet selected."),
        }

        if *print_config {
            print_file(global.store());

            if let Some(name) = &current {
                print_file(&ConfigStore::new(data.conf_path(name)));
            }
        }
    }
    Ok(())
}

fn print_file(store: &ConfigStore) {
    println!("\n📄 {}", store.path().display());
    match fs::read_to_string(store.path()) {
        Ok(content) => print!("{}", content),
        Err(e) => warning(format!("Cannot read {}: {}", store.path().display(), e)),
    }
}
