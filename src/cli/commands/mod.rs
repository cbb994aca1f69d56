//! One handler per subcommand. Handlers translate arguments into core calls
//! and print the results; they hold no state between invocations.

pub mod add;
pub mod config;
pub mod del;
pub mod delete;
pub mod edit;
pub mod export;
pub mod list;
pub mod new;
pub mod open;
pub mod set;
pub mod show;

use crate::cli::parser::Cli;
use crate::config::{DataDir, GlobalConfig};
use crate::core::session::TimesheetSession;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::warning;
use std::io::{self, Write};

/// Open the timesheet named by `--sheet`, or the last opened one.
pub(crate) fn current_session(cli: &Cli, data: &DataDir) -> AppResult<TimesheetSession> {
    let name = match &cli.sheet {
        Some(name) => name.clone(),
        None => data
            .global_config()
            .last()?
            .ok_or(AppError::NoTimesheet)?,
    };

    TimesheetSession::open(data, &name)
}

/// Persist the session. Only a session reached through the `last` pointer
/// writes the pointer back, so `--sheet` stays a one-off.
pub(crate) fn finish(cli: &Cli, session: TimesheetSession, global: &GlobalConfig) -> AppResult<()> {
    if cli.sheet.is_some() {
        let mut session = session;
        session.save()?;
        Ok(())
    } else {
        session.close(global)
    }
}

/// Store position of a 1-based entry id as printed by `show`.
pub(crate) fn entry_index(id: usize, len: usize) -> AppResult<usize> {
    id.checked_sub(1)
        .filter(|i| *i < len)
        .ok_or(AppError::NoSuchEntry { id, len })
}

/// Ask a yes/no confirmation from the user
pub(crate) fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}
