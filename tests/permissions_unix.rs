#![cfg(unix)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use tempfile::tempdir;

use safe_file::{SafeFile, Options, shadow_path, write_file, write_file_with_mode};

fn mode_of(p: &std::path::Path) -> u32 {
    fs::metadata(p).unwrap().permissions().mode() & 0o777
}

#[test]
fn default_mode_is_owner_read_write() {
    let td = tempdir().unwrap();
    let name = td.path().join("secret");
    write_file(&name, b"s3cr3t").unwrap();
    assert_eq!(mode_of(&name), 0o600);
    assert_eq!(mode_of(&shadow_path(&name)), 0o600);
}

#[test]
fn explicit_mode_applies_to_both_names() -> Result<(), Box<dyn std::error::Error>> {
    let td = tempdir()?;
    let name = td.path().join("shared.conf");
    write_file_with_mode(&name, 0o644, b"x = 1")?;
    assert_eq!(mode_of(&name), 0o644);
    assert_eq!(mode_of(&shadow_path(&name)), 0o644);

    // A rewrite with a new mode replaces the inode, so the mode follows.
    write_file_with_mode(&name, 0o640, b"x = 2")?;
    assert_eq!(mode_of(&name), 0o640);
    Ok(())
}

#[test]
fn handle_uses_options_mode() {
    let td = tempdir().unwrap();
    let opts = Options {
        mode: 0o660,
        ..Options::default()
    };
    let f = SafeFile::with_options(td.path().join("group.conf"), opts);
    f.write(b"g").unwrap();
    assert_eq!(mode_of(f.path()), 0o660);
}

#[test]
fn read_only_mode_still_written() {
    let td = tempdir().unwrap();
    let name = td.path().join("frozen");
    write_file_with_mode(&name, 0o400, b"frozen content").unwrap();
    assert_eq!(fs::read(&name).unwrap(), b"frozen content");
    // Replacing needs only directory write permission.
    write_file_with_mode(&name, 0o400, b"refrozen").unwrap();
    assert_eq!(fs::read(&name).unwrap(), b"refrozen");
}
