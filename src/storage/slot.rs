//! Key-value slots
//!
//! A [`KeyValueStore`] holds named string values. The favourites store writes
//! its whole collection to a single slot, so implementations only need
//! whole-value reads and writes.

use std::{
    collections::HashMap,
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
};

use tempfile::NamedTempFile;

/// A failure reading or writing durable storage.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// A filesystem operation failed.
    #[error("failed to access {}: {source}", .path.display())]
    Io {
        /// The file being accessed.
        path: PathBuf,
        /// The underlying error.
        source: io::Error,
    },

    /// The ideas could not be serialized.
    #[error("failed to serialize ideas: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The backing store refused the operation.
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// Durable storage of named string values.
pub trait KeyValueStore {
    /// Reads the value stored under `key`, or `None` if there is none.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be written.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Deletes the value stored under `key`. Deleting a missing key is not an
    /// error.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be written.
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}

/// Stores each key as a JSON file in a directory.
///
/// Writes go to a temporary file in the same directory which is then renamed
/// over the target, so a slot is never left half-written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// A store rooted at `dir`. The directory is created on first write.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The directory holding the slot files.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// The file backing `key`.
    #[must_use]
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path_for(key);
        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StorageError::Io { path, source }),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let io_error = |path: &Path| {
            let path = path.to_path_buf();
            move |source: io::Error| StorageError::Io { path, source }
        };

        fs::create_dir_all(&self.dir).map_err(io_error(self.dir.as_path()))?;

        let mut file = NamedTempFile::new_in(&self.dir).map_err(io_error(self.dir.as_path()))?;
        file.write_all(value.as_bytes())
            .and_then(|()| file.as_file().sync_all())
            .map_err(io_error(file.path()))?;

        let path = self.path_for(key);
        file.persist(&path)
            .map_err(|e| StorageError::Io {
                path: path.clone(),
                source: e.error,
            })?;

        tracing::debug!("Wrote {} bytes to {}", value.len(), path.display());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        let path = self.path_for(key);
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(source) => Err(StorageError::Io { path, source }),
        }
    }
}

/// An in-memory store.
///
/// Useful for tests and for embedding the favourites store where nothing needs
/// to outlive the process. Reads and writes can be made to fail to exercise
/// error handling.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStore {
    values: HashMap<String, String>,
    fail_reads: bool,
    fail_writes: bool,
}

impl MemoryStore {
    /// An empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every subsequent read fail.
    #[must_use]
    pub const fn failing_reads(mut self) -> Self {
        self.fail_reads = true;
        self
    }

    /// Makes every subsequent write fail.
    #[must_use]
    pub const fn failing_writes(mut self) -> Self {
        self.fail_writes = true;
        self
    }

    /// Makes every subsequent write fail, or succeed again.
    pub const fn set_failing_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }

    fn check_write(&self) -> Result<(), StorageError> {
        if self.fail_writes {
            Err(StorageError::Unavailable("writes are disabled".to_string()))
        } else {
            Ok(())
        }
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        if self.fail_reads {
            return Err(StorageError::Unavailable("reads are disabled".to_string()));
        }
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.check_write()?;
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.check_write()?;
        self.values.remove(key);
        Ok(())
    }
}
