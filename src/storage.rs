// File locking and atomic writes shared by the CSV log and feed sinks.
use anyhow::Result;
use fs2::FileExt;
use std::fs;
use std::path::{Path, PathBuf};

/// Sidecar lock file path: "calendar.ics" -> "calendar.ics.lock".
fn get_lock_path(file_path: &Path) -> PathBuf {
    let mut lock_path = file_path.to_path_buf();
    if let Some(ext) = lock_path.extension() {
        let mut new_ext = ext.to_os_string();
        new_ext.push(".lock");
        lock_path.set_extension(new_ext);
    } else {
        lock_path.set_extension("lock");
    }
    lock_path
}

/// Run `f` while holding an exclusive advisory lock on a sidecar file,
/// so overlapping scheduled runs cannot interleave writes.
pub fn with_lock<F, T>(file_path: &Path, f: F) -> Result<T>
where
    F: FnOnce() -> Result<T>,
{
    let lock_path = get_lock_path(file_path);
    let file = fs::OpenOptions::new()
        .read(true)
        .write(true)
        .create(true)
        .truncate(false)
        .open(&lock_path)?;

    file.lock_exclusive()?;
    let result = f();
    file.unlock()?;
    result
}

/// Atomic write: write to a .tmp sibling then rename into place.
pub fn atomic_write<P: AsRef<Path>, C: AsRef<[u8]>>(path: P, contents: C) -> Result<()> {
    let path = path.as_ref();
    let tmp_path = path.with_extension("tmp");
    fs::write(&tmp_path, contents)?;
    fs::rename(tmp_path, path)?;
    Ok(())
}
