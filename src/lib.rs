//! Core library for `safe_file`.
//!
//! Keeps a small configuration/state file either in its previous complete state
//! or its new complete state, across crashes and concurrent readers/writers.
//!
//! Every file `name` is backed by two hard links to the same content:
//!  - `name`    the public name callers know
//!  - `name.1`  the shadow name, kept in lock-step
//!
//! New content is staged in `name.<timestamp>`, fsynced, then linked to the
//! shadow and finally to the public name. Readers fall back to the shadow and
//! retry briefly when a concurrent writer has both names unlinked.
//!
//! ```no_run
//! # fn main() -> safe_file::Result<()> {
//! safe_file::write_file("app.conf", b"debug = true\n")?;
//! let data = safe_file::read_file("app.conf")?;
//! assert_eq!(data, b"debug = true\n");
//! safe_file::remove_file("app.conf")?;
//! # Ok(())
//! # }
//! ```
//!
//! All names must live on one filesystem that supports hard links.

pub mod config;
pub mod errors;
pub mod fs_ops;
pub mod handle;
pub mod logging;
pub(crate) mod platform;

pub use config::{LogLevel, Options, load_options_from_xml_path, parse_options_xml};
pub use errors::{Result, SafeFileError};
pub use fs_ops::{
    DEFAULT_MODE, SHADOW_SUFFIX, TIMESTAMP_FORMAT, read_file, read_file_with, remove_file,
    shadow_path, write_file, write_file_with_mode,
};
pub use handle::SafeFile;
