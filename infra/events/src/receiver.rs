use crate::bus::Event;
use std::any::type_name;
use std::future::Future;
use std::sync::Arc;
use tokio::sync::{broadcast, watch};
use tracing::warn;

/// Uniform receive surface over the channel flavors the bus hands out.
///
/// Broadcast receivers skip past lag transparently and log how much was
/// dropped; watch receivers wait for the next change and yield the latest
/// value.
pub trait EventReceiverExt<T> {
    /// Waits for the next event. `None` means the channel is closed and no
    /// further events will arrive.
    fn recv(&mut self) -> impl Future<Output = Option<Arc<T>>> + Send;
}

impl<T: Event> EventReceiverExt<T> for broadcast::Receiver<Arc<T>> {
    async fn recv(&mut self) -> Option<Arc<T>> {
        use broadcast::error::RecvError;

        let mut dropped = 0u64;
        loop {
            match self.recv().await {
                Ok(event) => {
                    if dropped > 0 {
                        warn!(
                            event = type_name::<T>(),
                            dropped, "Slow receiver dropped events, resuming from the oldest retained"
                        );
                    }
                    break Some(event);
                },
                Err(RecvError::Lagged(n)) => dropped = dropped.saturating_add(n),
                Err(RecvError::Closed) => break None,
            }
        }
    }
}

impl<T: Event> EventReceiverExt<T> for watch::Receiver<Arc<T>> {
    async fn recv(&mut self) -> Option<Arc<T>> {
        self.changed().await.ok()?;
        Some(self.borrow().clone())
    }
}
