pub mod record;
pub mod time_base;

pub use record::{Field, RawEntry, Record};
pub use time_base::TimeBase;
