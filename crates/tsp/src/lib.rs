//! Facade crate for Seller TSP features and shared modules.
//! Re-exports domain/kernel primitives and aggregates feature initialization.
//! Keep this crate thin: it should compose other crates, not implement business logic.
//!
//! ## Usage
//! - Add `tsp` and call [`init`] with a loaded config, a connected store, and
//!   an event bus to register every feature slice.
//! - Downcast a slice's state through [`InitializedSlice::downcast_ref`].

pub use tsp_domain as domain;
pub use tsp_kernel as kernel;

use tsp_domain::config::AppConfig;
use tsp_domain::registry::InitializedSlice;
use tsp_event_bus::EventBus;
use tsp_store::Store;

/// Feature registry for runtime introspection.
pub mod features {
    pub use tsp_access as access;
    pub use tsp_catalog as catalog;
    pub use tsp_onboarding as onboarding;
    pub use tsp_settings as settings;
    pub use tsp_voice as voice;

    /// Feature slices compiled into this build.
    pub const ENABLED: &[&str] = &["onboarding", "voice", "catalog", "access", "settings"];

    #[must_use]
    pub fn is_enabled(name: &str) -> bool {
        ENABLED.contains(&name)
    }
}

/// Broadcast on the bus as each slice comes up, in registration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SliceInitialized {
    pub name: &'static str,
}

/// Published on the bus once every slice has initialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlatformReady {
    pub slices: usize,
}

/// Initialize all feature slices.
///
/// # Errors
/// Returns an error if any feature initialization fails.
pub async fn init(
    config: &AppConfig,
    store: &Store,
    events: &EventBus,
) -> Result<Vec<InitializedSlice>, Box<dyn std::error::Error>> {
    let mut slices = Vec::new();

    // Onboarding wizard and checklist simulation
    slices.push(features::onboarding::init(config)?);

    // Voice command control
    slices.push(features::voice::init(config)?);

    // Experience catalog and share links
    slices.push(features::catalog::init(config, store)?);

    // Category access permissions
    slices.push(features::access::init(store)?);

    // Dashboard appearance
    slices.push(features::settings::init(store).await?);

    for &name in features::ENABLED {
        events.publish(SliceInitialized { name })?;
    }
    events.publish_watch(PlatformReady { slices: slices.len() })?;

    Ok(slices)
}
