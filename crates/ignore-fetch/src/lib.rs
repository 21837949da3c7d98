pub mod contents;
pub mod errors;
pub mod names;
pub mod ordering;
pub mod pool;
pub mod writer;

pub use contents::NamedContents;
pub use errors::{FailedFile, FailedFiles, UnknownName};
pub use names::{ensure_suffix, ensure_suffixes, parse_names};
pub use ordering::{NamesOrdering, collect_outcomes};
pub use pool::{ContentFetcher, Outcome, fetch_all};
pub use writer::write_patterns_file;
