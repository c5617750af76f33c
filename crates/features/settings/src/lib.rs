//! Settings feature slice: dashboard appearance with persistence and
//! change notification.

mod error;
pub mod service;

pub use crate::error::{SettingsError, SettingsErrorExt};
pub use crate::service::SettingsService;

use std::any::Any;
use tsp_domain::constants;
use tsp_domain::registry::{FeatureSlice, InitializedSlice};
use tsp_store::Store;

/// Settings feature state.
#[derive(Debug, Clone)]
pub struct Settings {
    service: SettingsService,
}

impl Settings {
    /// Builds the slice over the `settings` store namespace, loading the
    /// persisted appearance.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::Store`] on namespace or I/O failure.
    pub async fn new(store: &Store) -> Result<Self, SettingsError> {
        let service = SettingsService::load(store.namespace(constants::SETTINGS)?).await?;
        Ok(Self { service })
    }

    #[must_use]
    pub const fn service(&self) -> &SettingsService {
        &self.service
    }
}

impl FeatureSlice for Settings {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Initialize the settings feature.
///
/// # Errors
///
/// Returns [`SettingsError::Store`] if loading the persisted state fails.
pub async fn init(store: &Store) -> Result<InitializedSlice, SettingsError> {
    let settings = Settings::new(store).await?;
    tracing::info!("Settings slice initialized");
    Ok(InitializedSlice::new(settings))
}
