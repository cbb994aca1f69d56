use crate::cli::parser::{Cli, Commands};
use crate::config::DataDir;
use crate::core::session::TimesheetSession;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

/// Create a timesheet and make it the current one.
pub fn handle(cli: &Cli, data: &DataDir) -> AppResult<()> {
    if let Commands::New {
        name,
        rate,
        currency,
        timebase,
    } = &cli.command
    {
        let session =
            TimesheetSession::create(data, name, rate, currency.as_deref(), *timebase)?;

        let settings = session.settings().clone();
        session.close(&data.global_config())?;

        success(format!("Timesheet '{}' created.", settings.name));
        info(format!(
            "Default rate {}{} per {}.",
            settings.currency, settings.rate, settings.time_base
        ));
    }
    Ok(())
}
