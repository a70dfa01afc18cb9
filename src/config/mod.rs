//! Config module.
//! Provides the tuning options for the reader/writer, the log level, and XML loading.

pub mod types;
pub mod xml;

pub use types::{LogLevel, Options};
pub use xml::{load_options_from_xml_path, parse_options_xml};

/// Rounds the reader makes over both names before giving up.
pub const READ_ATTEMPTS_DEFAULT: u32 = 3;
/// Pause between reader rounds.
pub const RETRY_DELAY_DEFAULT: std::time::Duration = std::time::Duration::from_millis(10);
