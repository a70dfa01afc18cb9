//! Option types.
//! - Options: permission bits for new content and the reader's retry policy.
//! - LogLevel: verbosity for `logging::init_tracing`.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use super::{READ_ATTEMPTS_DEFAULT, RETRY_DELAY_DEFAULT};
use crate::fs_ops::DEFAULT_MODE;

/// Verbosity accepted in options files and by `init_tracing`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LogLevel {
    /// errors only
    Quiet,
    #[default]
    Normal,
    /// adds publish/remove events
    Info,
    /// adds every link step
    Debug,
}

impl LogLevel {
    const NAMES: [(&'static str, LogLevel); 9] = [
        ("quiet", LogLevel::Quiet),
        ("error", LogLevel::Quiet),
        ("none", LogLevel::Quiet),
        ("normal", LogLevel::Normal),
        ("info", LogLevel::Info),
        ("verbose", LogLevel::Info),
        ("detailed", LogLevel::Info),
        ("debug", LogLevel::Debug),
        ("trace", LogLevel::Debug),
    ];

    /// Case-insensitive lookup, including a few aliases ("trace", "verbose", ...).
    pub fn parse(s: &str) -> Option<Self> {
        Self::NAMES
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(s))
            .map(|(_, lvl)| lvl.clone())
    }

    fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Quiet => "quiet",
            LogLevel::Normal => "normal",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogLevel {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("invalid log level: '{s}'"))
    }
}

/// Tunables for writing and reading a safe file.
///
/// The retry values are empirical; they only need to cover the short window in
/// which a concurrent writer has both names unlinked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Permission bits for newly written content
    pub mode: u32,
    /// Reader rounds over name and shadow while both are missing (0 behaves as 1)
    pub read_attempts: u32,
    /// Pause between reader rounds
    pub retry_delay: Duration,
    /// Verbosity for `Options::init_tracing`; the file operations do not read it
    pub log_level: LogLevel,
}

impl Options {
    /// Install the global stdout subscriber at `self.log_level`.
    ///
    /// # Errors
    /// Fails if a global subscriber is already installed.
    pub fn init_tracing(&self, json: bool) -> anyhow::Result<()> {
        crate::logging::init_tracing(&self.log_level, json)
    }
}

impl Default for Options {
    fn default() -> Self {
        Self {
            mode: DEFAULT_MODE,
            read_attempts: READ_ATTEMPTS_DEFAULT,
            retry_delay: RETRY_DELAY_DEFAULT,
            log_level: LogLevel::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let o = Options::default();
        assert_eq!(o.mode, 0o600);
        assert_eq!(o.read_attempts, 3);
        assert_eq!(o.retry_delay, Duration::from_millis(10));
        assert_eq!(o.log_level, LogLevel::Normal);
    }

    #[test]
    fn log_level_aliases() {
        assert_eq!("TRACE".parse::<LogLevel>().unwrap(), LogLevel::Debug);
        assert_eq!(LogLevel::parse("None"), Some(LogLevel::Quiet));
        assert_eq!(LogLevel::parse("verbose"), Some(LogLevel::Info));
        assert!("loud".parse::<LogLevel>().is_err());
    }

    #[test]
    fn display_parses_back() {
        for lvl in [LogLevel::Quiet, LogLevel::Normal, LogLevel::Info, LogLevel::Debug] {
            assert_eq!(lvl.to_string().parse::<LogLevel>().unwrap(), lvl);
        }
    }
}
