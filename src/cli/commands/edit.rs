use crate::cli::commands::{current_session, entry_index, finish};
use crate::cli::parser::{Cli, Commands};
use crate::config::DataDir;
use crate::errors::{AppError, AppResult};
use crate::models::RawEntry;
use crate::ui::messages::{info, success};

/// Change one entry. Fields not given keep their current value.
pub fn handle(cli: &Cli, data: &DataDir) -> AppResult<()> {
    if let Commands::Edit {
        id,
        date,
        duration,
        activity,
        rate,
    } = &cli.command
    {
        let mut session = current_session(cli, data)?;

        let index = entry_index(*id, session.store().len())?;
        let expected = session
            .store()
            .line(index)
            .ok_or(AppError::NoSuchEntry {
                id: *id,
                len: session.store().len(),
            })?
            .to_string();

        // A damaged line can still be repaired if every field is given.
        let current = match session.store().get(index) {
            Ok(rec) => RawEntry::from(rec),
            Err(e) => {
                if date.is_none() || duration.is_none() || activity.is_none() || rate.is_none() {
                    return Err(e);
                }
                RawEntry::default()
            }
        };

        let fields = RawEntry {
            date: date.clone().unwrap_or(current.date),
            duration: duration.clone().unwrap_or(current.duration),
            activity: activity.clone().unwrap_or(current.activity),
            rate: rate.clone().unwrap_or(current.rate),
        };

        if session.edit(index, &expected, &fields)? {
            success(format!("Entry #{} updated.", id));
        } else {
            info(format!("Entry #{} unchanged.", id));
        }

        finish(cli, session, &data.global_config())?;
    }
    Ok(())
}
