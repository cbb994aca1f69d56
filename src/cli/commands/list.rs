use crate::cli::parser::{Cli, Commands};
use crate::config::DataDir;
use crate::errors::AppResult;
use crate::ui::messages::warning;

pub fn handle(cli: &Cli, data: &DataDir) -> AppResult<()> {
    if let Commands::List = &cli.command {
        let names = data.list_timesheets()?;

        if names.is_empty() {
            warning("There are no timesheets yet. Create one with `tat new <name> --rate <rate>`.");
            return Ok(());
        }

        let current = data.global_config().last()?;
        for name in names {
            let marker = if current.as_deref() == Some(name.as_str()) {
                "*"
            } else {
                " "
            };
            println!("{} {}", marker, name);
        }
    }
    Ok(())
}
