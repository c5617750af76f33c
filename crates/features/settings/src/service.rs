//! Appearance settings with persistence and change notification.

use crate::error::SettingsError;
use tokio::sync::watch;
use tracing::info;
use tsp_domain::constants::APPEARANCE;
use tsp_domain::settings::AppearanceSettings;
use tsp_store::StoreNamespace;

/// Holds the current appearance settings and fans out changes.
///
/// Every `set` persists before notifying, so a subscriber never observes a
/// value that would be lost on reload.
#[derive(Debug, Clone)]
pub struct SettingsService {
    settings: StoreNamespace,
    tx: watch::Sender<AppearanceSettings>,
}

impl SettingsService {
    /// Loads the persisted settings, defaulting when the record is absent
    /// or was discarded as corrupted.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::Store`] on I/O failure.
    pub async fn load(settings: StoreNamespace) -> Result<Self, SettingsError> {
        let initial = settings
            .get::<AppearanceSettings>(APPEARANCE)
            .await?
            .unwrap_or_default();
        let (tx, _) = watch::channel(initial);
        Ok(Self { settings, tx })
    }

    /// The current settings snapshot.
    #[must_use]
    pub fn get(&self) -> AppearanceSettings {
        self.tx.borrow().clone()
    }

    /// Persists new settings, then notifies subscribers.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::Store`] if persisting fails; subscribers
    /// are not notified in that case.
    pub async fn set(&self, value: AppearanceSettings) -> Result<(), SettingsError> {
        self.settings.put(APPEARANCE, &value).await?;
        info!(theme = ?value.theme, font = %value.font_family, "Appearance settings updated");
        self.tx.send_replace(value);
        Ok(())
    }

    /// Subscribes to settings changes. The receiver holds the current value
    /// immediately.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<AppearanceSettings> {
        self.tx.subscribe()
    }
}
