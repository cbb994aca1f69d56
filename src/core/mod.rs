pub mod export;
pub mod rules;
pub mod session;
pub mod store;
pub mod summary;

pub use rules::EntryRules;
pub use session::{SheetSettings, TimesheetSession};
pub use store::{AppendReport, RecordStore, RowEdit};
