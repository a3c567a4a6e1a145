//! Filesystem utility functions used across the crate.

use anyhow::{Context, Result};
use std::{fs, io::Write, path::Path};
use tempfile::Builder;

/// Write `contents` to `path` through a temp file in the same directory,
/// then rename it into place.
///
/// Readers see either the old file or the new one, never a partial write.
pub fn write_atomic(path: &Path, contents: &[u8]) -> Result<()> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir).with_context(|| format!("create dir {}", dir.display()))?;

    let mut tmp = Builder::new()
        .prefix(".oxidize.")
        .tempfile_in(dir)
        .with_context(|| format!("create temp file in {}", dir.display()))?;
    tmp.write_all(contents).context("write temp file")?;
    set_mode(tmp.as_file(), path)?;
    tmp.as_file().sync_all().context("sync temp file")?;

    // Same directory, so the rename stays on one filesystem.
    tmp.persist(path)
        .map_err(|e| e.error)
        .with_context(|| format!("rename into {}", path.display()))?;
    Ok(())
}

/// Temp files are created 0600. Keep the mode of the file being replaced,
/// or use 0644 for a new one.
#[cfg(unix)]
fn set_mode(file: &fs::File, path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let perms = match fs::metadata(path) {
        Ok(meta) => meta.permissions(),
        Err(_) => fs::Permissions::from_mode(0o644),
    };
    file.set_permissions(perms)
        .with_context(|| format!("set permissions for {}", path.display()))
}

#[cfg(not(unix))]
fn set_mode(_file: &fs::File, _path: &Path) -> Result<()> {
    Ok(())
}
