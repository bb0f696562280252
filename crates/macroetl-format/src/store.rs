//! Partitioned object storage.

use std::fmt;
use std::path::{Component, Path, PathBuf};

use async_trait::async_trait;
use chrono::NaiveDate;
use macroetl_types::{Source, format_iso_date};
use thiserror::Error;
use tracing::info;

/// Errors that can occur while storing an object.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The key would escape the bucket or is empty.
    #[error("Invalid object key '{0}'")]
    InvalidKey(String),

    /// Writing the object failed.
    #[error("Failed to write {path}: {source}")]
    Io {
        /// Target path.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

/// Builds the object key for one source and execution date.
///
/// `{api}/dt_execucao={YYYY-MM-DD}/{api}-{YYYY-MM-DD}.parquet`
#[must_use]
pub fn partition_key(source: Source, date: NaiveDate) -> String {
    let api = source.as_str();
    let date = format_iso_date(date);
    format!("{api}/dt_execucao={date}/{api}-{date}.parquet")
}

/// An object written to a store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredObject {
    /// Key relative to the bucket.
    pub key: String,
    /// Fully qualified location.
    pub uri: String,
    /// Size in bytes.
    pub size: usize,
}

impl fmt::Display for StoredObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.uri)
    }
}

/// A bucket-like destination for serialized records.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Writes `bytes` under `key`, replacing any existing object.
    async fn put(&self, key: &str, bytes: Vec<u8>) -> Result<StoredObject, StoreError>;
}

/// [`ObjectStore`] backed by a local directory.
#[derive(Debug, Clone)]
pub struct LocalObjectStore {
    root: PathBuf,
}

impl LocalObjectStore {
    /// Creates a store rooted at `root`. The directory is created on the
    /// first write.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Returns the bucket root.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolves a key to a path inside the bucket.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::InvalidKey`] for empty or absolute keys and keys
    /// containing `..`.
    pub fn path_for(&self, key: &str) -> Result<PathBuf, StoreError> {
        let relative = Path::new(key);
        let contained = !key.is_empty()
            && relative
                .components()
                .all(|component| matches!(component, Component::Normal(_)));
        if contained {
            Ok(self.root.join(relative))
        } else {
            Err(StoreError::InvalidKey(key.to_string()))
        }
    }
}

#[async_trait]
impl ObjectStore for LocalObjectStore {
    async fn put(&self, key: &str, bytes: Vec<u8>) -> Result<StoredObject, StoreError> {
        let path = self.path_for(key)?;
        let io_error = |source| StoreError::Io {
            path: path.clone(),
            source,
        };

        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await.map_err(io_error)?;
        }
        let size = bytes.len();
        tokio::fs::write(&path, bytes).await.map_err(io_error)?;

        info!(key, size, path = %path.display(), "object stored");
        Ok(StoredObject {
            key: key.to_string(),
            uri: path.display().to_string(),
            size,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nov_13() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 11, 13).unwrap()
    }

    #[test]
    fn test_partition_key() {
        assert_eq!(
            partition_key(Source::Selic, nov_13()),
            "selic/dt_execucao=2025-11-13/selic-2025-11-13.parquet"
        );
        assert_eq!(
            partition_key(Source::Tesouro, nov_13()),
            "tesouro/dt_execucao=2025-11-13/tesouro-2025-11-13.parquet"
        );
    }

    #[test]
    fn test_path_for_rejects_escape() {
        let store = LocalObjectStore::new("/bucket");
        assert!(store.path_for("../etc/passwd").is_err());
        assert!(store.path_for("/etc/passwd").is_err());
        assert!(store.path_for("").is_err());
        assert_eq!(
            store.path_for("selic/x.parquet").unwrap(),
            PathBuf::from("/bucket/selic/x.parquet")
        );
    }

    #[tokio::test]
    async fn test_put_creates_partitions() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalObjectStore::new(dir.path());
        let key = partition_key(Source::Dolar, nov_13());

        let stored = store.put(&key, b"PAR1".to_vec()).await.unwrap();

        assert_eq!(stored.key, key);
        assert_eq!(stored.size, 4);
        let written = std::fs::read(dir.path().join(&key)).unwrap();
        assert_eq!(written, b"PAR1");
    }

    #[tokio::test]
    async fn test_put_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalObjectStore::new(dir.path());

        store.put("a/b.parquet", vec![1, 2, 3]).await.unwrap();
        let stored = store.put("a/b.parquet", vec![4]).await.unwrap();

        assert_eq!(stored.size, 1);
        assert_eq!(std::fs::read(dir.path().join("a/b.parquet")).unwrap(), vec![4u8]);
    }
}
