//! Filesystem utilities for atomic writes.

use std::fs;
use std::io;
use std::path::Path;

/// Write `contents` to `path` via a sibling temp file and atomic rename.
///
/// An interrupted write can leave a stale `.tmp` sibling behind but never
/// a truncated destination file.
pub fn write_atomic(path: &Path, contents: &[u8]) -> io::Result<()> {
    let temp_path = path.with_extension("tmp");
    fs::write(&temp_path, contents)?;
    rename_with_fallback(&temp_path, path)
}

/// Atomically rename a file, with a fallback for platforms where rename
/// fails if the target exists (notably Windows): remove the destination
/// and retry. The temp file is cleaned up if the rename ultimately fails.
fn rename_with_fallback(temp_path: &Path, destination: &Path) -> io::Result<()> {
    if let Err(initial_err) = fs::rename(temp_path, destination) {
        let _ = fs::remove_file(destination);
        fs::rename(temp_path, destination).map_err(|retry_err| {
            let _ = fs::remove_file(temp_path);
            io::Error::new(
                retry_err.kind(),
                format!(
                    "Atomic rename failed (initial: {}, retry: {})",
                    initial_err, retry_err
                ),
            )
        })?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_write_atomic_creates_file() {
        let dir = tempdir().unwrap();
        let dest = dir.path().join("note.encrypted");

        write_atomic(&dest, b"blob").unwrap();

        assert_eq!(fs::read(&dest).unwrap(), b"blob");
        assert!(!dest.with_extension("tmp").exists());
    }

    #[test]
    fn test_write_atomic_overwrites_existing() {
        let dir = tempdir().unwrap();
        let dest = dir.path().join("index.json");

        write_atomic(&dest, b"old").unwrap();
        write_atomic(&dest, b"new").unwrap();

        assert_eq!(fs::read(&dest).unwrap(), b"new");
    }
}
