use crate::cli::commands::current_session;
use crate::cli::parser::{Cli, Commands};
use crate::config::DataDir;
use crate::core::export::ExportLogic;
use crate::errors::AppResult;
use crate::utils::path::expand_tilde;

pub fn handle(cli: &Cli, data: &DataDir) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        force,
    } = &cli.command
    {
        let session = current_session(cli, data)?;
        ExportLogic::export(&session, *format, &expand_tilde(file), *force)?;
    }
    Ok(())
}
