//! Core store engine providing namespaced, atomic, typed key-value I/O.
//!
//! This module contains the primary [`Store`] handle, which serves as the
//! entry point for all storage operations. It owns the backend (in-memory map
//! or on-disk directory tree) and exposes raw string-level operations that the
//! typed [`crate::StoreNamespace`] API builds on.

use crate::builder::StoreBuilder;
use crate::error::{StoreError, StoreErrorExt};
use crate::keys;
use crate::maintenance;
use crate::namespace::{NamespaceName, StoreNamespace};
use fxhash::FxHashMap;
use parking_lot::RwLock;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::debug;

const VALUE_FILE_EXT: &str = "json";

/// A value with a well-known key inside a namespace.
///
/// Implementing `Record` lets a type be saved and loaded without the caller
/// repeating its key at every call site.
pub trait Record: Serialize + DeserializeOwned {
    /// The key this record is stored under.
    const KEY: &'static str;
}

#[derive(Debug)]
pub(crate) enum Backend {
    /// Process-local map keyed by `<namespace>/<key>`.
    Memory(RwLock<FxHashMap<String, String>>),
    /// Directory tree: `<root>/<namespace>/<key>.json`.
    Disk { root: PathBuf },
}

/// The internal shared state of a [`Store`] instance.
#[derive(Debug)]
pub struct StoreInner {
    pub(crate) backend: Backend,
    /// A unique counter used to generate temporary file names.
    pub(crate) tmp_counter: AtomicU64,
}

/// A thread-safe handle to the key-value store.
///
/// `Store` groups values into namespaces and serializes them as JSON. It
/// supports:
/// - **Atomic Writes**: The disk backend writes through temporary files and
///   renames, so a value is never observed half-written.
/// - **Corruption Recovery**: Unparsable values are discarded on read and
///   reported as absent.
/// - **Self-Healing**: Automatic cleanup of stale temporary files on
///   initialization.
///
/// This handle is internally reference-counted (`Arc`) and can be cheaply
/// cloned across threads or tasks.
///
/// # Example
///
/// ```rust
/// use tsp_store::{Store, StoreError};
///
/// #[tokio::main]
/// async fn main() -> Result<(), StoreError> {
///     # let tmp = tempfile::tempdir().unwrap();
///     # let root = tmp.path().join("data");
///     let store = Store::builder().root(&root).create(true).connect().await?;
///
///     let settings = store.namespace("settings")?;
///     settings.put("volume", &0.8f64).await?;
///     let volume: Option<f64> = settings.get("volume").await?;
///     assert_eq!(volume, Some(0.8));
///
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Store {
    pub(crate) inner: Arc<StoreInner>,
}

impl Store {
    #[must_use = "The store is not initialized until you call .build() or .connect()"]
    pub fn builder() -> StoreBuilder {
        StoreBuilder::new()
    }

    /// Returns a namespaced view of the store.
    ///
    /// Namespaces partition values by concern (e.g., `auth`, `settings`,
    /// `shares`) while sharing the same backend.
    ///
    /// # Constraints
    /// - Names must be **alphanumeric** (a-z, 0-9) or use **underscores** (`_`).
    /// - Names are automatically converted to **lowercase**.
    /// - Empty names are prohibited.
    ///
    /// # Errors
    /// Returns [`StoreError::InvalidNamespace`] if the name is empty or
    /// contains illegal characters.
    pub fn namespace<N>(&self, name: N) -> Result<StoreNamespace, StoreError>
    where
        N: TryInto<NamespaceName, Error = StoreError>,
    {
        let ns = name.try_into()?;
        Ok(StoreNamespace::new(self.clone(), ns.0))
    }

    /// Removes stale temporary files left behind by interrupted writes.
    ///
    /// No-op on the in-memory backend.
    pub async fn purge_tmp(&self) {
        if let Backend::Disk { root } = &self.inner.backend {
            maintenance::purge_tmp(root).await;
        }
    }

    pub(crate) async fn read_raw(
        &self,
        namespace: &str,
        key: &str,
    ) -> Result<Option<String>, StoreError> {
        let key = keys::validate_key(key)?;

        match &self.inner.backend {
            Backend::Memory(map) => Ok(map.read().get(&memory_key(namespace, key)).cloned()),
            Backend::Disk { root } => {
                let path = value_path(root, namespace, key);
                match fs::read_to_string(&path).await {
                    Ok(data) => Ok(Some(data)),
                    Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
                    Err(err) => Err(StoreError::Io {
                        source: err,
                        context: Some(format!("Read failed: {}", path.display()).into()),
                    }),
                }
            },
        }
    }

    pub(crate) async fn write_raw(
        &self,
        namespace: &str,
        key: &str,
        data: &str,
    ) -> Result<(), StoreError> {
        let key = keys::validate_key(key)?;

        match &self.inner.backend {
            Backend::Memory(map) => {
                map.write().insert(memory_key(namespace, key), data.to_owned());
                Ok(())
            },
            Backend::Disk { root } => {
                let path = value_path(root, namespace, key);
                self.write_atomic(&path, data.as_bytes()).await
            },
        }
    }

    /// Removes a value. Removing an absent key is not an error.
    pub(crate) async fn delete_raw(&self, namespace: &str, key: &str) -> Result<(), StoreError> {
        let key = keys::validate_key(key)?;

        match &self.inner.backend {
            Backend::Memory(map) => {
                map.write().remove(&memory_key(namespace, key));
                Ok(())
            },
            Backend::Disk { root } => {
                let path = value_path(root, namespace, key);
                match fs::remove_file(&path).await {
                    Ok(()) => {
                        debug!(path = %path.display(), "Value deleted");
                        Ok(())
                    },
                    Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
                    Err(err) => Err(StoreError::Io {
                        source: err,
                        context: Some(format!("Failed to delete: {}", path.display()).into()),
                    }),
                }
            },
        }
    }

    pub(crate) async fn exists_raw(&self, namespace: &str, key: &str) -> Result<bool, StoreError> {
        let key = keys::validate_key(key)?;

        match &self.inner.backend {
            Backend::Memory(map) => Ok(map.read().contains_key(&memory_key(namespace, key))),
            Backend::Disk { root } => Ok(value_path(root, namespace, key).exists()),
        }
    }

    pub(crate) async fn keys_raw(&self, namespace: &str) -> Result<Vec<String>, StoreError> {
        match &self.inner.backend {
            Backend::Memory(map) => {
                let prefix = format!("{namespace}/");
                let mut found: Vec<String> = map
                    .read()
                    .keys()
                    .filter_map(|k| k.strip_prefix(&prefix))
                    .map(ToOwned::to_owned)
                    .collect();
                found.sort_unstable();
                Ok(found)
            },
            Backend::Disk { root } => {
                let dir = root.join(namespace);
                let mut found = Vec::new();

                let mut entries = match fs::read_dir(&dir).await {
                    Ok(entries) => entries,
                    Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(found),
                    Err(err) => {
                        return Err(StoreError::Io {
                            source: err,
                            context: Some(
                                format!("Failed to list namespace: {}", dir.display()).into(),
                            ),
                        });
                    },
                };

                while let Some(entry) = entries
                    .next_entry()
                    .await
                    .context(format!("Failed to list namespace: {}", dir.display()))?
                {
                    let path = entry.path();
                    if path.extension().and_then(|e| e.to_str()) == Some(VALUE_FILE_EXT)
                        && let Some(stem) = path.file_stem().and_then(|s| s.to_str())
                    {
                        found.push(stem.to_owned());
                    }
                }

                found.sort_unstable();
                Ok(found)
            },
        }
    }

    /// Writes data to a file atomically.
    ///
    /// 1. Data is written to a unique temporary file (`.tsptmp.<id>`).
    /// 2. The file is synced to hardware (`fsync`).
    /// 3. The temporary file is renamed over the final destination.
    /// 4. Parent directories are created automatically.
    ///
    /// On platforms that do not support atomic replace for existing targets,
    /// the implementation falls back to remove-then-rename.
    async fn write_atomic(&self, target: &Path, data: &[u8]) -> Result<(), StoreError> {
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)
                .await
                .context(format!("Failed to create namespace dir for {}", target.display()))?;
        }

        let temp = unique_tmp_path(target, &self.inner.tmp_counter);

        {
            let mut file = fs::OpenOptions::new()
                .create_new(true)
                .write(true)
                .open(&temp)
                .await
                .context(format!("Temp creation failed: {}", temp.display()))?;
            file.write_all(data).await.context("Write failed")?;
            file.sync_all().await.context("Hardware sync failed")?;
        }

        if let Err(err) = fs::rename(&temp, &target).await {
            if err.kind() == std::io::ErrorKind::AlreadyExists {
                fs::remove_file(&target)
                    .await
                    .context(format!("Failed to replace existing file: {}", target.display()))?;
                fs::rename(&temp, &target).await.context(format!(
                    "Atomic swap failed: {} -> {}",
                    temp.display(),
                    target.display()
                ))?;
            } else {
                return Err(StoreError::Io {
                    source: err,
                    context: Some(
                        format!("Atomic swap failed: {} -> {}", temp.display(), target.display())
                            .into(),
                    ),
                });
            }
        }

        if let Some(parent) = target.parent() {
            sync_dir(parent).await;
        }

        debug!(path = %target.display(), "Value saved atomically");
        Ok(())
    }
}

fn memory_key(namespace: &str, key: &str) -> String {
    format!("{namespace}/{key}")
}

fn value_path(root: &Path, namespace: &str, key: &str) -> PathBuf {
    root.join(namespace).join(format!("{key}.{VALUE_FILE_EXT}"))
}

fn unique_tmp_path(target: &Path, counter: &AtomicU64) -> PathBuf {
    let counter = counter.fetch_add(1, Ordering::Relaxed);
    let file_name = target.file_name().and_then(|s| s.to_str()).unwrap_or("store");
    let tmp_name = format!("{file_name}.tsptmp.{counter}");
    target.with_file_name(tmp_name)
}

async fn sync_dir(path: &Path) {
    match fs::File::open(path).await {
        Ok(dir) => {
            if let Err(err) = dir.sync_all().await {
                tracing::warn!(path = %path.display(), error = %err, "Directory sync failed");
            }
        },
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "Directory open failed");
        },
    }
}
