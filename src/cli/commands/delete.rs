use crate::cli::commands::ask_confirmation;
use crate::cli::parser::{Cli, Commands};
use crate::config::DataDir;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};

pub fn handle(cli: &Cli, data: &DataDir) -> AppResult<()> {
    if let Commands::Delete { name, yes } = &cli.command {
        if !data.exists(name) {
            return Err(AppError::NotFound(name.clone()));
        }

        let prompt = format!(
            "Delete timesheet '{}' and all its entries? This action is irreversible.",
            name
        );
        if !*yes && !ask_confirmation(&prompt) {
            info("Operation cancelled.");
            return Ok(());
        }

        data.delete_timesheet(name, &data.global_config())?;
        success(format!("Timesheet '{}' deleted.", name));
    }
    Ok(())
}
