//! Atomic text file operations.
//!
//! Archives are rewritten whole on every save, so a crash mid-write must
//! never leave a half-written file behind.

use std::fs::{self, File, OpenOptions};
use std::io::Write as IoWrite;
use std::path::{Path, PathBuf};

use demofeed_core::error::{FeedbackError, Result};
use fs2::FileExt;

/// A handle to a text file that is replaced atomically on save.
///
/// Provides:
/// - **Atomicity**: Writes go to a tmp file that is renamed over the target
/// - **Isolation**: An exclusive lock file serializes concurrent writers
/// - **Durability**: Explicit fsync before rename
pub struct AtomicTextFile {
    path: PathBuf,
}

impl AtomicTextFile {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the file.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(String))`: File content
    /// - `Ok(None)`: File doesn't exist or is blank
    /// - `Err`: Failed to read the file
    pub fn load(&self) -> Result<Option<String>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(None);
        }

        Ok(Some(content))
    }

    /// Replaces the file content atomically.
    pub fn save(&self, content: &str) -> Result<()> {
        let _lock = FileLock::acquire(&self.path)?;
        self.write_locked(content)
    }

    /// Reads, transforms and rewrites the file under one exclusive lock.
    ///
    /// `f` receives the current content (as [`load`](Self::load) returns it)
    /// and yields the replacement. An error from `f` leaves the file as it
    /// was.
    pub fn update<F>(&self, f: F) -> Result<()>
    where
        F: FnOnce(Option<String>) -> Result<String>,
    {
        let _lock = FileLock::acquire(&self.path)?;
        let current = self.load()?;
        let content = f(current)?;
        self.write_locked(&content)
    }

    // Caller must hold the FileLock
    fn write_locked(&self, content: &str) -> Result<()> {
        let tmp_path = self.temp_path()?;
        let mut tmp_file = File::create(&tmp_path)?;
        tmp_file.write_all(content.as_bytes())?;
        tmp_file.sync_all()?;
        drop(tmp_file);

        fs::rename(&tmp_path, &self.path)?;
        tracing::debug!("Wrote {} bytes to {:?}", content.len(), self.path);

        Ok(())
    }

    fn temp_path(&self) -> Result<PathBuf> {
        let parent = self
            .path
            .parent()
            .ok_or_else(|| FeedbackError::io("Path has no parent directory"))?;
        let file_name = self
            .path
            .file_name()
            .ok_or_else(|| FeedbackError::io("Path has no file name"))?;

        Ok(parent.join(format!(".{}.tmp", file_name.to_string_lossy())))
    }
}

/// Exclusive lock on `<name>.lock` next to the target file.
///
/// The lock file is never removed, so every writer locks the same inode.
/// Closing the handle releases the lock.
struct FileLock {
    _file: File,
}

impl FileLock {
    fn acquire(path: &Path) -> Result<Self> {
        let lock_path = path.with_extension("lock");

        if let Some(parent) = lock_path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(false)
            .open(&lock_path)?;
        file.lock_exclusive()
            .map_err(|e| FeedbackError::io(format!("Failed to acquire lock: {}", e)))?;

        Ok(FileLock { _file: file })
    }
}
