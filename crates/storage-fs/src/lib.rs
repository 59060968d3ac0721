//! File-backed key-value storage for the goal tracker core.
//!
//! One file per key under a data directory, written atomically enough for a
//! single-process app: the value is written to a temp file and renamed over
//! the previous one, so a crash mid-write never leaves a truncated
//! snapshot.

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use goaltrack_core::errors::{Result, StorageError};
use goaltrack_core::storage::StorageBackend;

/// Durable storage rooted at a directory.
///
/// Keys map to file names; characters outside `[A-Za-z0-9._-]` are replaced
/// so platform-reserved characters in keys cannot escape the root.
pub struct FileStorage {
    root: PathBuf,
}

impl FileStorage {
    /// Opens storage at `root`, creating the directory if needed.
    pub fn new(root: impl AsRef<Path>) -> Result<Self> {
        let root = root.as_ref().to_path_buf();
        fs::create_dir_all(&root).map_err(StorageError::Io)?;
        debug!("file storage opened at {}", root.display());
        Ok(FileStorage { root })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        let file_name: String = key
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        self.root.join(file_name)
    }
}

impl StorageBackend for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(value) => Ok(Some(value)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(StorageError::Io(err).into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let path = self.path_for(key);
        let tmp = path.with_extension("tmp");
        fs::write(&tmp, value).map_err(StorageError::Io)?;
        fs::rename(&tmp, &path).map_err(StorageError::Io)?;
        Ok(())
    }

    fn remove(&self, keys: &[&str]) -> Result<()> {
        for key in keys {
            match fs::remove_file(self.path_for(key)) {
                Ok(()) => {}
                Err(err) if err.kind() == std::io::ErrorKind::NotFound => {}
                Err(err) => return Err(StorageError::Io(err).into()),
            }
        }
        Ok(())
    }
}
