use crate::core::export::ExportFormat;
use crate::models::TimeBase;
use clap::{Parser, Subcommand};

/// Command-line interface definition for TimeAfterTime
/// CLI application to keep personal timesheets
#[derive(Parser)]
#[command(
    name = "tat",
    version = env!("CARGO_PKG_VERSION"),
    about = "TimeAfterTime: keep timesheets of dated work entries, rates and earnings",
    long_about = None
)]
pub struct Cli {
    /// Override the data directory (useful for tests or a custom location)
    #[arg(global = true, long = "data-dir")]
    pub data_dir: Option<String>,

    /// Work on this timesheet instead of the last opened one
    #[arg(global = true, long = "sheet", short = 's')]
    pub sheet: Option<String>,

    /// Print diagnostic logs to stderr
    #[arg(global = true, long = "verbose", short = 'v')]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create a new timesheet and make it the current one
    New {
        /// Timesheet name (whitespace becomes '_')
        name: String,

        #[arg(long = "rate", help = "Default rate applied to new entries")]
        rate: String,

        #[arg(long = "currency", help = "Currency symbol (default: £)")]
        currency: Option<String>,

        #[arg(
            long = "timebase",
            value_enum,
            default_value = "day",
            help = "Record durations in days or hours"
        )]
        timebase: TimeBase,
    },

    /// Make an existing timesheet the current one
    Open {
        name: String,
    },

    /// List available timesheets
    List,

    /// Show the entries of the current timesheet with earnings and totals
    Show {
        #[arg(long = "reverse", short = 'r', help = "Most recent entries first")]
        reverse: bool,
    },

    /// Add an entry to the current timesheet
    Add {
        /// Duration (days: 0.5; hours: 1:30, 1h30, 90m, 1.5)
        duration: String,

        /// What the time was spent on
        #[arg(required = true, num_args = 1..)]
        activity: Vec<String>,

        #[arg(
            long = "date",
            short = 'd',
            help = "Entry date (YYYY-MM-DD, '05 Mar 2024', 05/03/2024, today, yesterday). Default: today"
        )]
        date: Option<String>,

        #[arg(long = "rate", help = "Rate for this entry (default: timesheet rate)")]
        rate: Option<String>,
    },

    /// Change fields of an entry
    Edit {
        /// Entry id as shown by `show`
        id: usize,

        #[arg(long = "date", short = 'd')]
        date: Option<String>,

        #[arg(long = "duration")]
        duration: Option<String>,

        #[arg(long = "activity")]
        activity: Option<String>,

        #[arg(long = "rate")]
        rate: Option<String>,
    },

    /// Remove entries by id
    Del {
        #[arg(required = true, num_args = 1..)]
        ids: Vec<usize>,

        #[arg(long = "yes", short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Change the settings of the current timesheet
    Set {
        #[arg(long = "rate", help = "Default rate for new entries")]
        rate: Option<String>,

        #[arg(long = "currency", help = "Currency symbol")]
        currency: Option<String>,

        #[arg(long = "timebase", value_enum, help = "Unit of new durations")]
        timebase: Option<TimeBase>,
    },

    /// Export the current timesheet
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Delete a timesheet and all its entries
    Delete {
        name: String,

        #[arg(long = "yes", short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Show where data lives and the active configuration
    Config {
        #[arg(long = "print", help = "Print the configuration files")]
        print_config: bool,
    },
}
