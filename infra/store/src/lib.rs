//! A typed key-value store modeled after browser local storage.
//!
//! Values are serialized as JSON and grouped into namespaces. The store runs
//! on one of two backends: a process-local in-memory map (the default, used by
//! tests and ephemeral sessions) or an on-disk directory tree where every
//! write is atomic.
//!
//! # Core Features
//!
//! - **Typed Access**: `put`/`get` serialize through `serde`, so callers work
//!   with domain types instead of strings.
//! - **Atomic Writes**: The disk backend uses an "atomic swap" pattern
//!   (unique temp write + `fsync` + `rename`) so a crash never leaves a
//!   half-written value behind.
//! - **Corruption Recovery**: A value that no longer parses is logged,
//!   discarded, and reported as absent. Readers always get a usable result.
//! - **Self-Healing**: Orphaned temporary files are cleaned up during
//!   initialization.
//!
//! # Examples
//!
//! ```rust
//! use tsp_store::{Store, StoreError};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Debug, PartialEq, Serialize, Deserialize)]
//! struct Draft { body: String }
//!
//! #[tokio::main]
//! async fn main() -> Result<(), StoreError> {
//!     let store = Store::builder().build();
//!     let drafts = store.namespace("drafts")?;
//!
//!     drafts.put("welcome", &Draft { body: "hello".into() }).await?;
//!     let read: Option<Draft> = drafts.get("welcome").await?;
//!     assert_eq!(read.unwrap().body, "hello");
//!
//!     Ok(())
//! }
//! ```

mod builder;
mod engine;
mod error;
mod keys;
mod maintenance;
mod namespace;

pub use builder::StoreBuilder;
pub use engine::{Record, Store};
pub use error::{StoreError, StoreErrorExt};
pub use namespace::{NamespaceName, StoreNamespace};
