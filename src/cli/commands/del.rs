use crate::cli::commands::{ask_confirmation, current_session, entry_index, finish};
use crate::cli::parser::{Cli, Commands};
use crate::config::DataDir;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use std::collections::BTreeSet;

pub fn handle(cli: &Cli, data: &DataDir) -> AppResult<()> {
    if let Commands::Del { ids, yes } = &cli.command {
        let mut session = current_session(cli, data)?;
        let len = session.store().len();

        let mut indices = BTreeSet::new();
        for id in ids {
            indices.insert(entry_index(*id, len)?);
        }

        let listed: Vec<String> = indices.iter().map(|i| format!("#{}", i + 1)).collect();
        let prompt = format!(
            "Remove {} from '{}'? This action is irreversible.",
            listed.join(", "),
            session.name()
        );

        if !*yes && !ask_confirmation(&prompt) {
            info("Operation cancelled.");
            return Ok(());
        }

        let removed = session.delete(&indices)?;
        finish(cli, session, &data.global_config())?;

        success(format!("{} entr{} removed.", removed, if removed == 1 { "y" } else { "ies" }));
    }
    Ok(())
}
