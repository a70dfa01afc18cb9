//! Remover: unlinks the public name and the shadow name.

use std::path::Path;
use tracing::debug;

use super::link::unlink_if_present;
use super::names::{shadow_path, validate_name};
use crate::errors::Result;

/// Remove `name` and `<name>.1`. Missing names are not an error.
///
/// # Errors
/// Returns the first fatal error (e.g. the name is a directory). The shadow
/// removal is still attempted when removing the public name failed.
pub fn remove_file(name: impl AsRef<Path>) -> Result<()> {
    let name = name.as_ref();
    validate_name(name)?;
    let shadow = shadow_path(name);

    let public = unlink_if_present(name);
    let alt = unlink_if_present(&shadow);

    public.and(alt)?;
    debug!(path = %name.display(), "removed");
    Ok(())
}
