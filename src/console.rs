//! Matrix entry, solver configuration and result rendering for the command line.
mod entry;
pub use entry::*;

mod config;
pub use config::*;

mod report;
pub use report::*;

mod console_error;
pub use console_error::ConsoleError;
