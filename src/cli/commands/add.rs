use crate::cli::commands::{current_session, finish};
use crate::cli::parser::{Cli, Commands};
use crate::config::DataDir;
use crate::errors::{AppError, AppResult};
use crate::models::RawEntry;
use crate::ui::messages::{error, success};
use crate::utils::date::display_date;

/// Add one entry to the current timesheet.
pub fn handle(cli: &Cli, data: &DataDir) -> AppResult<()> {
    if let Commands::Add {
        duration,
        activity,
        date,
        rate,
    } = &cli.command
    {
        let mut session = current_session(cli, data)?;

        let entry = RawEntry::new(
            date.clone().unwrap_or_default(),
            duration.clone(),
            activity.join(" "),
            rate.clone().unwrap_or_default(),
        );

        let mut report = session.append(&[entry]);

        if let Some(invalid) = report.rejected.pop() {
            error(format!("Could not add entry: {}", invalid));
            return Err(AppError::InvalidField(invalid));
        }

        for index in &report.appended {
            let rec = session.store().get(*index)?;
            success(format!(
                "Added #{}: {} | {} | {} | {}{}",
                index + 1,
                display_date(&rec.date),
                rec.duration,
                rec.activity,
                session.settings().currency,
                rec.rate
            ));
        }

        finish(cli, session, &data.global_config())?;
    }
    Ok(())
}
