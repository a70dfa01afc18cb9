//! Filesystem operations: the shadow-link protocol.

mod helpers;
mod link;
mod names;
mod read;
mod remove;
mod temp;
mod write;

pub(crate) use helpers::hint_suffix;
pub use names::{SHADOW_SUFFIX, TIMESTAMP_FORMAT, shadow_path};
pub use read::{read_file, read_file_with};
pub use remove::remove_file;
pub use write::{DEFAULT_MODE, write_file, write_file_with_mode};
