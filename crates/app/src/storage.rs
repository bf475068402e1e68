//! JSON file storage
//!
//! Each resource collection lives in one file holding a pretty-printed JSON
//! array. Every operation loads the whole array and mutations rewrite the whole
//! file. A per-collection mutex serializes these cycles so concurrent requests
//! cannot overwrite each other's changes.

use std::{
    fmt::{Debug, Formatter, Result as FmtResult},
    io::{self, ErrorKind},
    marker::PhantomData,
    path::{Path, PathBuf},
};

use serde::{Serialize, de::DeserializeOwned};
use thiserror::Error;
use tokio::{fs, sync::Mutex};
use tracing::debug;

/// Errors raised while reading or writing a collection file.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The file could not be read or written.
    #[error("failed to access {}: {source}", path.display())]
    Io {
        /// Path of the collection file.
        path: PathBuf,

        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The file exists but does not hold a valid collection.
    #[error("corrupt collection file {}: {source}", path.display())]
    Corrupt {
        /// Path of the collection file.
        path: PathBuf,

        /// Parse error.
        #[source]
        source: serde_json::Error,
    },

    /// The in-memory collection could not be encoded.
    #[error("failed to encode collection: {0}")]
    Encode(#[source] serde_json::Error),
}

/// A collection of records persisted as a JSON array in a single file.
pub struct JsonCollection<T> {
    path: PathBuf,
    lock: Mutex<()>,
    records: PhantomData<fn() -> T>,
}

impl<T> Debug for JsonCollection<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("JsonCollection")
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}

impl<T> JsonCollection<T>
where
    T: Serialize + DeserializeOwned,
{
    /// Create a collection backed by `path`. The file is not touched until first use.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
            records: PhantomData,
        }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the whole collection.
    ///
    /// A missing or blank file is an empty collection.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub async fn read(&self) -> Result<Vec<T>, StorageError> {
        let _guard = self.lock.lock().await;

        self.load().await
    }

    /// Run a read-modify-write cycle.
    ///
    /// `mutate` receives the loaded collection. The collection is written back
    /// only when `mutate` succeeds, so a rejected change leaves the file as it was.
    ///
    /// # Errors
    ///
    /// Returns the error from `mutate`, or a storage error converted into `E`.
    pub async fn update<R, E, F>(&self, mutate: F) -> Result<R, E>
    where
        F: FnOnce(&mut Vec<T>) -> Result<R, E> + Send,
        E: From<StorageError>,
    {
        let _guard = self.lock.lock().await;

        let mut records = self.load().await?;
        let result = mutate(&mut records)?;

        self.persist(&records).await?;

        Ok(result)
    }

    async fn load(&self) -> Result<Vec<T>, StorageError> {
        let bytes = match fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(source) if source.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "collection file missing, starting empty");

                return Ok(Vec::new());
            }
            Err(source) => {
                return Err(StorageError::Io {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Vec::new());
        }

        serde_json::from_slice(&bytes).map_err(|source| StorageError::Corrupt {
            path: self.path.clone(),
            source,
        })
    }

    async fn persist(&self, records: &[T]) -> Result<(), StorageError> {
        let mut encoded = serde_json::to_vec_pretty(records).map_err(StorageError::Encode)?;
        encoded.push(b'\n');

        if let Some(parent) = self.path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .await
                .map_err(|source| self.io_error(source))?;
        }

        let staging = self.staging_path();

        fs::write(&staging, &encoded)
            .await
            .map_err(|source| self.io_error(source))?;

        fs::rename(&staging, &self.path)
            .await
            .map_err(|source| self.io_error(source))?;

        debug!(
            path = %self.path.display(),
            records = records.len(),
            "collection persisted"
        );

        Ok(())
    }

    fn staging_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(ToOwned::to_owned)
            .unwrap_or_default();

        name.push(".tmp");

        self.path.with_file_name(name)
    }

    fn io_error(&self, source: io::Error) -> StorageError {
        StorageError::Io {
            path: self.path.clone(),
            source,
        }
    }
}
