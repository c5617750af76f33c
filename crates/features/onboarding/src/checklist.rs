//! Post-submission checklist simulation.
//!
//! On submission every item that is not already `Completed` is scheduled to
//! flip at strictly increasing offsets `j * (window / k)` for `j in 1..=k`,
//! so the whole board completes over one fixed window. Every scheduled
//! mutation is guarded by a session epoch: a superseded or torn-down run
//! applies nothing.

use parking_lot::RwLock;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tokio::sync::watch;
use tracing::debug;
use tsp_domain::constants::CHECKLIST_SECTIONS;
use tsp_domain::progress::{ItemStatus, ProgressBoard, ProgressSection};

/// Builds the standard onboarding checklist with every item `Pending`.
#[must_use]
pub fn default_board() -> ProgressBoard {
    ProgressBoard::new(
        CHECKLIST_SECTIONS
            .iter()
            .map(|(title, labels)| ProgressSection::new(*title, labels))
            .collect(),
    )
}

#[derive(Debug)]
struct ChecklistInner {
    board: RwLock<ProgressBoard>,
    /// Bumped on teardown; in-flight timers compare against their captured
    /// value before mutating anything.
    epoch: AtomicU64,
    tx: watch::Sender<ProgressBoard>,
}

/// Drives one checklist session.
///
/// Cloning shares the session; [`ChecklistSimulator::teardown`] invalidates
/// all in-flight timers for every clone.
#[derive(Debug, Clone)]
pub struct ChecklistSimulator {
    inner: Arc<ChecklistInner>,
    window: Duration,
}

impl ChecklistSimulator {
    #[must_use]
    pub fn new(board: ProgressBoard, window: Duration) -> Self {
        let (tx, _) = watch::channel(board.clone());
        Self {
            inner: Arc::new(ChecklistInner { board: RwLock::new(board), epoch: AtomicU64::new(0), tx }),
            window,
        }
    }

    /// A point-in-time snapshot of the board.
    #[must_use]
    pub fn board(&self) -> ProgressBoard {
        self.inner.board.read().clone()
    }

    /// Subscribes to board snapshots; the receiver holds the latest state.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<ProgressBoard> {
        self.inner.tx.subscribe()
    }

    /// Checklist progress in percent.
    #[must_use]
    pub fn percent(&self) -> u8 {
        self.inner.board.read().percent()
    }

    /// True once every item reports `Completed` (the terminal
    /// "congratulations" state).
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.inner.board.read().is_complete()
    }

    /// Manually sets one item's status. Allowed anywhere, in any direction;
    /// only the simulation itself is bound to monotonic completion.
    ///
    /// Returns `false` if the position does not exist.
    pub fn set_status(&self, section: usize, item: usize, status: ItemStatus) -> bool {
        let updated = {
            let mut board = self.inner.board.write();
            match board.item_mut(section, item) {
                Some(entry) => {
                    entry.status = status;
                    true
                },
                None => false,
            }
        };
        if updated {
            self.publish();
        }
        updated
    }

    /// Schedules completion of every incomplete item over the window.
    ///
    /// With `k` incomplete items, item `j` (1-based, document order) flips at
    /// offset `j * (window / k)`. Items already `Completed` are skipped and
    /// never touched. Starting with a fully complete board is a no-op.
    pub fn start(&self) {
        let pending: Vec<(usize, usize)> = {
            let board = self.inner.board.read();
            board
                .positions()
                .filter(|&(si, ii)| {
                    board.sections[si].items[ii].status != ItemStatus::Completed
                })
                .collect()
        };

        let k = pending.len();
        if k == 0 {
            return;
        }

        let interval = self.window / u32::try_from(k).unwrap_or(u32::MAX);
        let epoch = self.inner.epoch.load(Ordering::Acquire);
        let inner = Arc::clone(&self.inner);

        debug!(items = k, window_ms = self.window.as_millis(), "Checklist simulation started");

        tokio::spawn(async move {
            for (si, ii) in pending {
                tokio::time::sleep(interval).await;

                // Stale-update guard: a newer session owns the board now.
                if inner.epoch.load(Ordering::Acquire) != epoch {
                    debug!("Checklist timer superseded, applying nothing");
                    return;
                }

                {
                    let mut board = inner.board.write();
                    if let Some(entry) = board.item_mut(si, ii) {
                        entry.status = ItemStatus::Completed;
                    }
                }
                inner.tx.send_replace(inner.board.read().clone());
            }
        });
    }

    /// Invalidates all scheduled timers. The board keeps its current state.
    pub fn teardown(&self) {
        self.inner.epoch.fetch_add(1, Ordering::AcqRel);
    }

    fn publish(&self) {
        self.inner.tx.send_replace(self.inner.board.read().clone());
    }
}
