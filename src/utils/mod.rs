pub mod date;
pub mod duration;
pub mod formatting;
pub mod fs;
pub mod number;
pub mod path;
pub mod table;

pub use date::DateNormalizer;
pub use duration::DurationNormalizer;
