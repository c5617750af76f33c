//! Convenience re-exports for slice crates.

pub use crate::config::{ConfigError, load_config};
pub use crate::share_token;
pub use tsp_domain::config::AppConfig;
