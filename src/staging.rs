use anyhow::{Context, Result};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Replace `dest` with `bytes`, creating missing parent directories.
///
/// Bytes land in a temp file beside the target and are renamed into place, so
/// the target is either the old content or the new content. An existing
/// target keeps its permissions; a symlinked `dest` is written through to the
/// file it points at.
pub fn write_atomic(dest: &Path, bytes: &[u8]) -> Result<()> {
    let target = resolve_target(dest)?;
    let parent = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent).with_context(|| format!("create {}", parent.display()))?;

    let existing = match fs::metadata(&target) {
        Ok(meta) => Some(meta.permissions()),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => None,
        Err(err) => {
            return Err(err).with_context(|| format!("stat {}", target.display()));
        }
    };

    let mut builder = tempfile::Builder::new();
    builder.prefix(".manifest").suffix(".tmp");
    #[cfg(unix)]
    if existing.is_none() {
        // Plain `fs::write` semantics: 0644 before the umask.
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(fs::Permissions::from_mode(0o644));
    }
    let mut tmp = builder
        .tempfile_in(parent)
        .with_context(|| format!("create temp file in {}", parent.display()))?;
    if let Some(permissions) = existing {
        tmp.as_file()
            .set_permissions(permissions)
            .with_context(|| format!("copy permissions of {}", target.display()))?;
    }
    tmp.write_all(bytes)
        .with_context(|| format!("write {}", target.display()))?;
    tmp.as_file()
        .sync_all()
        .with_context(|| format!("sync {}", target.display()))?;
    tmp.persist(&target)
        .map_err(|err| err.error)
        .with_context(|| format!("publish {}", target.display()))?;
    Ok(())
}

fn resolve_target(dest: &Path) -> Result<PathBuf> {
    match fs::symlink_metadata(dest) {
        Ok(meta) if meta.file_type().is_symlink() => {
            let link = fs::read_link(dest)
                .with_context(|| format!("resolve symlink {}", dest.display()))?;
            // Relative links resolve against the directory holding the link.
            Ok(match dest.parent() {
                Some(parent) if link.is_relative() => parent.join(link),
                _ => link,
            })
        }
        _ => Ok(dest.to_path_buf()),
    }
}
