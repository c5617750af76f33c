//! Access feature slice: per-user category grants and the shared
//! subcategory product map.

mod error;
pub mod grants;

pub use crate::error::{AccessError, AccessErrorExt};
pub use crate::grants::{AccessService, SubcategoryProducts};

use std::any::Any;
use tsp_domain::constants;
use tsp_domain::registry::{FeatureSlice, InitializedSlice};
use tsp_store::Store;

/// Access feature state.
#[derive(Debug, Clone)]
pub struct Access {
    service: AccessService,
}

impl Access {
    /// Builds the slice over the `access` store namespace.
    ///
    /// # Errors
    ///
    /// Returns [`AccessError::Store`] when the namespace name is rejected.
    pub fn new(store: &Store) -> Result<Self, AccessError> {
        Ok(Self { service: AccessService::new(store.namespace(constants::ACCESS)?) })
    }

    #[must_use]
    pub const fn service(&self) -> &AccessService {
        &self.service
    }
}

impl FeatureSlice for Access {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Initialize the access feature.
///
/// # Errors
///
/// Returns [`AccessError::Store`] if the store namespace cannot be opened.
pub fn init(store: &Store) -> Result<InitializedSlice, AccessError> {
    let access = Access::new(store)?;
    tracing::info!("Access slice initialized");
    Ok(InitializedSlice::new(access))
}
