use crate::engine::{Record, Store};
use crate::error::StoreError;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;
use tracing::warn;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NamespaceName(pub String);

impl TryFrom<String> for NamespaceName {
    type Error = StoreError;

    fn try_from(value: String) -> Result<Self, StoreError> {
        Self::try_from(value.as_str())
    }
}

impl TryFrom<&str> for NamespaceName {
    type Error = StoreError;

    fn try_from(value: &str) -> Result<Self, StoreError> {
        let name = value.to_lowercase();

        if name.is_empty() {
            return Err(StoreError::InvalidNamespace {
                message: "EMPTY".into(),
                context: Some("Namespace cannot be empty".into()),
            });
        }

        if !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
            return Err(StoreError::InvalidNamespace {
                message: name.into(),
                context: Some("Namespace contains illegal characters".into()),
            });
        }

        Ok(Self(name))
    }
}

impl AsRef<str> for NamespaceName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NamespaceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A lightweight, namespaced view of the store.
///
/// `StoreNamespace` provides a scoped interface where all keys live under one
/// namespace. This is how features partition their data: `auth`, `settings`,
/// `access`, `catalog`, `shares`.
///
/// # Characteristics
/// - **Typed**: `put` and `get` serialize through `serde_json`.
/// - **Lenient Reads**: A value that fails to parse is discarded and reported
///   as absent, never surfaced as an error to the reader.
/// - **Zero Copy**: Cloning a `StoreNamespace` is inexpensive as it only
///   holds a reference-counted handle to the core engine.
#[derive(Debug, Clone)]
pub struct StoreNamespace {
    store: Store,
    namespace: Arc<Cow<'static, str>>,
}

impl StoreNamespace {
    pub(crate) fn new(store: Store, namespace: impl Into<Cow<'static, str>>) -> Self {
        Self { store, namespace: Arc::new(namespace.into()) }
    }

    /// Returns the namespace name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.namespace
    }

    /// Serializes `value` as JSON and stores it under `key`.
    ///
    /// On the disk backend the write is atomic; a crash mid-write leaves the
    /// previous value intact.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::InvalidKey`] if the key is malformed,
    /// [`StoreError::Serde`] if the value cannot be serialized, or
    /// [`StoreError::Io`] on disk failure.
    pub async fn put<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StoreError> {
        let data = serde_json::to_string(value)?;
        self.store.write_raw(&self.namespace, key, &data).await
    }

    /// Reads and deserializes the value stored under `key`.
    ///
    /// Returns `Ok(None)` when the key is absent. A stored value that no
    /// longer parses as `T` is treated as corrupted: it is logged, removed
    /// from the store, and reported as absent so callers can fall back to
    /// defaults.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::InvalidKey`] if the key is malformed, or
    /// [`StoreError::Io`] on disk failure. Parse failures are not errors.
    pub async fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StoreError> {
        let Some(raw) = self.store.read_raw(&self.namespace, key).await? else {
            return Ok(None);
        };

        match serde_json::from_str::<T>(&raw) {
            Ok(value) => Ok(Some(value)),
            Err(err) => {
                warn!(
                    namespace = %self.namespace,
                    key,
                    error = %err,
                    "Discarding corrupted value"
                );
                self.store.delete_raw(&self.namespace, key).await?;
                Ok(None)
            },
        }
    }

    /// Removes the value stored under `key`. Removing an absent key is not an
    /// error.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::InvalidKey`] if the key is malformed, or
    /// [`StoreError::Io`] on disk failure.
    pub async fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.store.delete_raw(&self.namespace, key).await
    }

    /// Checks whether a value exists under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::InvalidKey`] if the key is malformed.
    pub async fn exists(&self, key: &str) -> Result<bool, StoreError> {
        self.store.exists_raw(&self.namespace, key).await
    }

    /// Lists all keys in this namespace, sorted.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] on disk failure.
    pub async fn keys(&self) -> Result<Vec<String>, StoreError> {
        self.store.keys_raw(&self.namespace).await
    }

    /// Stores a [`Record`] under its well-known key.
    ///
    /// # Errors
    ///
    /// Same as [`StoreNamespace::put`].
    pub async fn save<R: Record>(&self, record: &R) -> Result<(), StoreError> {
        self.put(R::KEY, record).await
    }

    /// Loads a [`Record`] from its well-known key.
    ///
    /// # Errors
    ///
    /// Same as [`StoreNamespace::get`].
    pub async fn load<R: Record>(&self) -> Result<Option<R>, StoreError> {
        self.get(R::KEY).await
    }
}
