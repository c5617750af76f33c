use crate::engine::{Backend, Store, StoreInner};
use crate::error::{StoreError, StoreErrorExt};
use fxhash::FxHashMap;
use parking_lot::RwLock;
use private::Sealed;
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::AtomicU64;
use tokio::fs;
use tracing::info;

#[derive(Debug, Clone)]
struct StoreConfig {
    create: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self { create: true }
    }
}

#[derive(Debug, Default)]
pub struct NoRoot;
#[derive(Debug)]
pub struct WithRoot(PathBuf);

mod private {
    pub(super) trait Sealed {}
}
impl Sealed for NoRoot {}
impl Sealed for WithRoot {}

#[allow(private_bounds)]
#[derive(Debug, Default)]
pub struct StoreBuilder<S: Sealed = NoRoot> {
    state: S,
    config: StoreConfig,
}

#[allow(private_bounds)]
impl<S: Sealed> StoreBuilder<S> {
    #[must_use = "Sets whether the store root should be created if it does not exist"]
    pub const fn create(mut self, enable: bool) -> Self {
        self.config.create = enable;
        self
    }
}

impl StoreBuilder<NoRoot> {
    #[must_use = "Creates a new store builder with default configuration"]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the root directory, switching the store to the disk backend.
    #[must_use = "Sets the root directory path for the store"]
    pub fn root(self, path: impl Into<PathBuf>) -> StoreBuilder<WithRoot> {
        StoreBuilder { state: WithRoot(path.into()), config: self.config }
    }

    /// Finishes the builder with the in-memory backend.
    ///
    /// Values live only as long as the process. This is the backend used in
    /// tests and for ephemeral demo sessions.
    #[must_use]
    pub fn build(self) -> Store {
        Store {
            inner: Arc::new(StoreInner {
                backend: Backend::Memory(RwLock::new(FxHashMap::default())),
                tmp_counter: AtomicU64::new(1),
            }),
        }
    }
}

impl StoreBuilder<WithRoot> {
    /// Consumes the configuration and initializes the disk-backed store.
    ///
    /// This method performs the following boot sequence:
    /// 1. **Bootstrapping**: Creates the root directory if `create(true)` was set.
    /// 2. **Canonicalization**: Resolves the root path to an absolute, physical
    ///    path on disk.
    /// 3. **Self-Healing**: Scans the root for orphaned `.tmp` files left behind
    ///    by previous crashes and removes them to reclaim space.
    /// 4. **Registration**: Returns a thread-safe [`Store`] handle.
    ///
    /// # Reliability
    ///
    /// The self-healing routine is non-critical; if cleanup fails (e.g., due to
    /// transient file locks), the initialization will still proceed, but a
    /// warning will be logged.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] if:
    /// - The root directory does not exist and `create` is false.
    /// - The process lacks permissions to create or resolve the root directory.
    pub async fn connect(self) -> Result<Store, StoreError> {
        let root = &self.state.0;

        if self.config.create {
            fs::create_dir_all(root)
                .await
                .context(format!("Failed to bootstrap store root: {}", root.display()))?;
            info!(path = %root.display(), "Bootstrapped store root directory");
        }

        let canonical = fs::canonicalize(root)
            .await
            .context(format!("Failed to resolve store root: {}", root.display()))?;

        let store = Store {
            inner: Arc::new(StoreInner {
                backend: Backend::Disk { root: canonical },
                tmp_counter: AtomicU64::new(1),
            }),
        };

        store.purge_tmp().await;

        Ok(store)
    }
}
