//! Shareable experience links.
//!
//! A share id is `exp-<unix millis>-<random token>`. The experience payload
//! is stored under the id in the `shares` namespace; anyone holding the id
//! can read the experience back. Copying the link to a clipboard is
//! best-effort: when it fails the URL is handed back for manual copy rather
//! than silently dropped.

use crate::error::CatalogError;
use chrono::{DateTime, Utc};
use std::fmt;
use tracing::{debug, info};
use tsp_domain::catalog::Experience;
use tsp_domain::constants::SHARE_PREFIX;
use tsp_kernel::prelude::share_token;
use tsp_store::StoreNamespace;

/// A generated share identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ShareId(String);

impl ShareId {
    /// Generates a fresh id stamped with `now`.
    #[must_use]
    pub fn generate(now: DateTime<Utc>) -> Self {
        Self(format!("{SHARE_PREFIX}-{}-{}", now.timestamp_millis(), share_token!()))
    }

    /// Parses an id received from a link.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::InvalidShareId`] when the string does not
    /// carry the `exp-<timestamp>-<token>` shape.
    pub fn parse(value: &str) -> Result<Self, CatalogError> {
        let invalid = || CatalogError::InvalidShareId {
            message: value.to_owned().into(),
            context: None,
        };

        let rest = value.strip_prefix(SHARE_PREFIX).ok_or_else(invalid)?;
        let rest = rest.strip_prefix('-').ok_or_else(invalid)?;
        let (timestamp, token) = rest.split_once('-').ok_or_else(invalid)?;

        if timestamp.is_empty()
            || !timestamp.chars().all(|c| c.is_ascii_digit())
            || token.is_empty()
        {
            return Err(invalid());
        }

        Ok(Self(value.to_owned()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ShareId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A clipboard sink. Implementations are free to fail; the share flow
/// degrades to showing the URL.
pub trait Clipboard: Send + Sync {
    /// Attempts to place `text` on the clipboard. Returns `false` on failure.
    fn copy(&self, text: &str) -> bool;
}

/// How a share link reached the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShareLink {
    /// The URL is on the clipboard.
    Copied { url: String },
    /// The clipboard was unavailable; show the URL for manual copy.
    Manual { url: String },
}

impl ShareLink {
    #[must_use]
    pub fn url(&self) -> &str {
        match self {
            Self::Copied { url } | Self::Manual { url } => url,
        }
    }
}

/// Publishes and resolves shared experiences.
#[derive(Debug, Clone)]
pub struct ShareBook {
    shares: StoreNamespace,
    base_url: String,
}

impl ShareBook {
    #[must_use]
    pub fn new(shares: StoreNamespace, base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { shares, base_url }
    }

    /// Publishes an experience under a fresh id stamped with the current
    /// time.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Store`] if persisting the payload fails.
    pub async fn publish(&self, experience: &Experience) -> Result<ShareId, CatalogError> {
        self.publish_at(experience, Utc::now()).await
    }

    /// Publishes with an explicit timestamp. Used by tests and replays.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Store`] if persisting the payload fails.
    pub async fn publish_at(
        &self,
        experience: &Experience,
        now: DateTime<Utc>,
    ) -> Result<ShareId, CatalogError> {
        let id = ShareId::generate(now);
        self.shares.put(id.as_str(), experience).await?;
        info!(share_id = %id, title = %experience.title, "Experience published");
        Ok(id)
    }

    /// Reads an experience back by its share id.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::ShareNotFound`] for unknown ids and for
    /// payloads the store discarded as corrupted.
    pub async fn load(&self, id: &ShareId) -> Result<Experience, CatalogError> {
        match self.shares.get::<Experience>(id.as_str()).await? {
            Some(experience) => Ok(experience),
            None => Err(CatalogError::ShareNotFound {
                message: id.as_str().to_owned().into(),
                context: None,
            }),
        }
    }

    /// The full URL for a share id.
    #[must_use]
    pub fn share_url(&self, id: &ShareId) -> String {
        format!("{}/{}", self.base_url, id)
    }

    /// Copies the share URL to the clipboard, best-effort.
    ///
    /// Clipboard failure is not an error: the URL comes back marked for
    /// manual display instead.
    pub fn copy_link(&self, clipboard: &dyn Clipboard, id: &ShareId) -> ShareLink {
        let url = self.share_url(id);
        if clipboard.copy(&url) {
            debug!(share_id = %id, "Share link copied to clipboard");
            ShareLink::Copied { url }
        } else {
            debug!(share_id = %id, "Clipboard unavailable, showing link");
            ShareLink::Manual { url }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn generated_ids_carry_prefix_timestamp_and_token() {
        let now = Utc.timestamp_millis_opt(1_724_000_000_000).unwrap();
        let id = ShareId::generate(now);

        let parts: Vec<&str> = id.as_str().splitn(3, '-').collect();
        assert_eq!(parts[0], "exp");
        assert_eq!(parts[1], "1724000000000");
        assert_eq!(parts[2].len(), 8);
    }

    #[test]
    fn parse_accepts_generated_ids() {
        let id = ShareId::generate(Utc::now());
        let parsed = ShareId::parse(id.as_str()).unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn parse_rejects_malformed_ids() {
        for bad in ["", "exp", "exp-", "exp-abc-tok", "share-123-tok", "exp-123", "exp-123-"] {
            assert!(ShareId::parse(bad).is_err(), "{bad:?} should be rejected");
        }
    }
}
