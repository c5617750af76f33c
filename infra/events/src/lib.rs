//! # Event Bus
//!
//! A type-safe, asynchronous event bus connecting the decoupled feature
//! slices of the platform.
//!
//! ## Overview
//!
//! Provides a centralized [`EventBus`] with two channel kinds: `broadcast`
//! (fan-out, used for domain events such as checklist updates and voice
//! feedback) and `watch` (latest-value, used for settings snapshots).
//! Channels are indexed by the Rust type of the event.
//!
//! # Example
//!
//! ```rust
//! use tsp_event_bus::{EventBus, EventReceiverExt, EventBusError};
//!
//! #[derive(Clone, Debug, PartialEq)]
//! struct SellerRegistered { id: u64 }
//!
//! #[tokio::main]
//! async fn main() -> Result<(), EventBusError> {
//!     let bus = EventBus::new();
//!
//!     let mut rx = bus.subscribe::<SellerRegistered>()?;
//!     bus.publish(SellerRegistered { id: 42 })?;
//!
//!     if let Some(event) = rx.recv().await {
//!         assert_eq!(event.id, 42);
//!     }
//!     Ok(())
//! }
//! ```

mod bus;
mod error;
mod receiver;

pub use bus::{ChannelKind, Event, EventBus};
pub use error::{EventBusError, EventBusErrorExt};
pub use receiver::EventReceiverExt;
