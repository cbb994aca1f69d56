use crate::cli::parser::{Cli, Commands};
use crate::config::DataDir;
use crate::core::session::TimesheetSession;
use crate::errors::AppResult;
use crate::ui::messages::success;

pub fn handle(cli: &Cli, data: &DataDir) -> AppResult<()> {
    if let Commands::Open { name } = &cli.command {
        let session = TimesheetSession::open(data, name)?;
        let rows = session.store().len();
        let name = session.name().to_string();

        session.close(&data.global_config())?;
        success(format!("Opened '{}' ({} entries).", name, rows));
    }
    Ok(())
}
