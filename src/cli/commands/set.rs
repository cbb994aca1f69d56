use crate::cli::commands::{current_session, finish};
use crate::cli::parser::{Cli, Commands};
use crate::config::DataDir;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};

pub fn handle(cli: &Cli, data: &DataDir) -> AppResult<()> {
    if let Commands::Set {
        rate,
        currency,
        timebase,
    } = &cli.command
    {
        if rate.is_none() && currency.is_none() && timebase.is_none() {
            warning("Nothing to change. Use --rate, --currency or --timebase.");
            return Ok(());
        }

        let mut session = current_session(cli, data)?;

        if let Some(r) = rate {
            session.set_rate(r)?;
            success(format!("Default rate set to {}.", session.settings().rate));
        }

        if let Some(c) = currency {
            session.set_currency(c)?;
            success(format!("Currency set to {}.", session.settings().currency));
        }

        if let Some(tb) = timebase {
            session.set_time_base(*tb)?;
            success(format!("Durations are now recorded per {}.", tb));
        }

        finish(cli, session, &data.global_config())?;
    }
    Ok(())
}
