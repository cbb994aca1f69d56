use crate::cli::commands::current_session;
use crate::cli::parser::{Cli, Commands};
use crate::config::DataDir;
use crate::core::summary::SummaryLogic;
use crate::errors::AppResult;
use crate::ui::messages::{header, info, warning};
use crate::utils::date::display_date;
use crate::utils::formatting::{bold, duration_label, money};
use crate::utils::table::{Column, Table};

pub fn handle(cli: &Cli, data: &DataDir) -> AppResult<()> {
    if let Commands::Show { reverse } = &cli.command {
        let session = current_session(cli, data)?;
        let settings = session.settings();
        let summary = SummaryLogic::build(session.store());

        header(format!("TimeAfterTime - {}", settings.name));

        if summary.rows.is_empty() && summary.malformed.is_empty() {
            info("No entries yet. Add one with `tat add <duration> <activity>`.");
            return Ok(());
        }

        let mut table = Table::new(vec![
            Column::right("#"),
            Column::left("Date"),
            Column::right(&format!("Duration ({})", settings.time_base.unit())),
            Column::left("Activity"),
            Column::right("Rate"),
            Column::right("Earned"),
        ]);

        let mut rows: Vec<_> = summary.rows.iter().collect();
        if *reverse {
            rows.reverse();
        }

        for r in rows {
            table.add_row(vec![
                r.id.to_string(),
                display_date(&r.date),
                r.duration.clone(),
                r.activity.clone(),
                format!("{}{}", settings.currency, r.rate),
                r.earnings
                    .map(|e| money(e, &settings.currency))
                    .unwrap_or_else(|| "--".into()),
            ]);
        }

        print!("{}", table.render());
        println!();
        println!(
            "{} {}   {} {}",
            bold("Total time:"),
            duration_label(summary.total_duration, settings.time_base),
            bold("Total earned:"),
            money(summary.total_earnings, &settings.currency)
        );

        if !summary.malformed.is_empty() {
            let ids: Vec<String> = summary.malformed.iter().map(|i| format!("#{}", i)).collect();
            warning(format!(
                "Unreadable lines skipped: {} (fix them with `tat edit`).",
                ids.join(", ")
            ));
        }
    }
    Ok(())
}
