//! Catalog feature slice: seller experience drafts, shareable links, and
//! clipboard hand-off.

mod error;
pub mod listings;
pub mod share;

pub use crate::error::{CatalogError, CatalogErrorExt};
pub use crate::listings::{Listings, preview};
pub use crate::share::{Clipboard, ShareBook, ShareId, ShareLink};

use std::any::Any;
use tsp_domain::config::AppConfig;
use tsp_domain::constants;
use tsp_domain::registry::{FeatureSlice, InitializedSlice};
use tsp_store::Store;

/// Catalog feature state.
#[derive(Debug, Clone)]
pub struct Catalog {
    shares: ShareBook,
    listings: Listings,
}

impl Catalog {
    /// Builds the slice over the `shares` and `catalog` store namespaces.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Store`] when a namespace name is rejected.
    pub fn new(config: &AppConfig, store: &Store) -> Result<Self, CatalogError> {
        let shares = ShareBook::new(
            store.namespace(constants::SHARES)?,
            config.share.base_url.clone(),
        );
        let listings = Listings::new(store.namespace(constants::CATALOG)?);
        Ok(Self { shares, listings })
    }

    #[must_use]
    pub const fn shares(&self) -> &ShareBook {
        &self.shares
    }

    #[must_use]
    pub const fn listings(&self) -> &Listings {
        &self.listings
    }
}

impl FeatureSlice for Catalog {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Initialize the catalog feature.
///
/// # Errors
///
/// Returns [`CatalogError::Store`] if the store namespaces cannot be opened.
pub fn init(config: &AppConfig, store: &Store) -> Result<InitializedSlice, CatalogError> {
    let catalog = Catalog::new(config, store)?;
    tracing::info!("Catalog slice initialized");
    Ok(InitializedSlice::new(catalog))
}
