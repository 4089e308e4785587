//! Pattern records: the persisted grid format, built-in seeds, and file I/O

pub mod builtins;
pub mod io;
pub mod record;

pub use builtins::BuiltinPattern;
pub use io::{create_builtin_pattern_files, load_pattern_from_file, save_pattern_to_file};
pub use record::PatternRecord;
