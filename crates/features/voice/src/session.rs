//! The continuous listening session.
//!
//! A session owns the listening flag, turns recognizer transcripts into
//! match outcomes, dispatches clicks through an injected [`NodeActions`]
//! sink, and exposes transient [`Feedback`] that auto-dismisses after a
//! bounded TTL.
//!
//! Recognizers end spontaneously; while the listening flag is set the
//! session asks for a restart, which is what makes listening continuous.
//! `no-speech` recognizer errors are routine and suppressed; any other
//! recognizer error is logged and forces listening off.

use crate::matcher::{Candidate, MatchOutcome, match_transcript};
use crate::node::{NodeId, UiTree};
use parking_lot::Mutex;
use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::time::Duration;
use tracing::{debug, info, warn};
use tsp_domain::config::VoiceConfig;

/// Recognizer error code that signals silence, not failure.
const NO_SPEECH: &str = "no-speech";

/// What a speech recognizer reports back to the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecognizerEvent {
    /// A finalized transcript.
    Transcript(String),
    /// The recognizer stopped on its own.
    End,
    /// The recognizer failed with an engine error code.
    Error(String),
}

/// A source of recognizer events.
///
/// Implementations wrap whatever speech engine is available; tests feed
/// scripted events.
pub trait Recognizer: Send {
    /// The next event, or `None` when the event source is exhausted.
    fn next_event(&mut self) -> impl Future<Output = Option<RecognizerEvent>> + Send;
}

/// Where matched clicks go.
pub trait NodeActions: Send + Sync {
    /// Scrolls the node into view, centered.
    fn scroll_into_view(&self, node: NodeId);
    /// Dispatches one click on the node.
    fn click(&self, node: NodeId);
}

/// What the session last did, kept visible for a bounded TTL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    pub transcript: String,
    pub outcome: MatchOutcome,
}

impl Feedback {
    /// Ranked candidates from the last match, empty otherwise.
    #[must_use]
    pub fn candidates(&self) -> &[Candidate] {
        match &self.outcome {
            MatchOutcome::Matched { candidates, .. } => candidates,
            _ => &[],
        }
    }
}

#[derive(Debug)]
struct SessionInner {
    listening: AtomicBool,
    feedback: Mutex<Option<Feedback>>,
    /// Bumped per feedback publication; TTL timers compare before clearing.
    feedback_epoch: AtomicU64,
}

/// One voice control session.
///
/// Cloning shares the session state.
#[derive(Clone)]
pub struct VoiceSession {
    inner: Arc<SessionInner>,
    actions: Arc<dyn NodeActions>,
    click_delay: Duration,
    feedback_ttl: Duration,
}

impl std::fmt::Debug for VoiceSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VoiceSession")
            .field("listening", &self.is_listening())
            .field("click_delay", &self.click_delay)
            .field("feedback_ttl", &self.feedback_ttl)
            .finish_non_exhaustive()
    }
}

impl VoiceSession {
    #[must_use]
    pub fn new(actions: Arc<dyn NodeActions>, config: &VoiceConfig) -> Self {
        Self {
            inner: Arc::new(SessionInner {
                listening: AtomicBool::new(false),
                feedback: Mutex::new(None),
                feedback_epoch: AtomicU64::new(0),
            }),
            actions,
            click_delay: Duration::from_millis(config.click_delay_ms),
            feedback_ttl: Duration::from_millis(config.feedback_ttl_ms),
        }
    }

    /// Turns listening on.
    pub fn start_listening(&self) {
        self.inner.listening.store(true, Ordering::Release);
        info!("Voice listening started");
    }

    /// Turns listening off. Takes effect synchronously.
    pub fn stop_listening(&self) {
        self.inner.listening.store(false, Ordering::Release);
        info!("Voice listening stopped");
    }

    #[must_use]
    pub fn is_listening(&self) -> bool {
        self.inner.listening.load(Ordering::Acquire)
    }

    /// The current feedback, if its TTL has not elapsed.
    #[must_use]
    pub fn feedback(&self) -> Option<Feedback> {
        self.inner.feedback.lock().clone()
    }

    /// Processes one finalized transcript against the tree.
    ///
    /// A matched command scrolls the winner into view, waits a short fixed
    /// delay, and dispatches one click. Unrecognized commands and missing
    /// elements are informational outcomes; none of them end the session.
    pub async fn handle_transcript(&self, tree: &UiTree, transcript: &str) -> MatchOutcome {
        let outcome = match_transcript(tree, transcript);

        match &outcome {
            MatchOutcome::CommandNotRecognized => {
                debug!(transcript, "Transcript is not a command");
            },
            MatchOutcome::ElementNotFound { target } => {
                debug!(target, "No eligible node contains the target");
            },
            MatchOutcome::Matched { target, candidates } => {
                // winner() is Some by construction for Matched.
                if let Some(winner) = outcome.winner() {
                    info!(
                        target,
                        node = winner.node.0,
                        score = winner.score,
                        candidates = candidates.len(),
                        "Voice command matched"
                    );
                    self.actions.scroll_into_view(winner.node);
                    tokio::time::sleep(self.click_delay).await;
                    self.actions.click(winner.node);
                }
            },
        }

        self.publish_feedback(Feedback {
            transcript: transcript.to_owned(),
            outcome: outcome.clone(),
        });

        outcome
    }

    /// Called when the recognizer ends on its own. Returns `true` when the
    /// session wants it restarted, i.e. while listening is still on.
    #[must_use]
    pub fn on_recognizer_end(&self) -> bool {
        let restart = self.is_listening();
        if restart {
            debug!("Recognizer ended, restarting");
        }
        restart
    }

    /// Called for recognizer error codes. Silence (`no-speech`) is routine
    /// and suppressed; anything else is logged and forces listening off.
    pub fn on_recognizer_error(&self, code: &str) {
        if code == NO_SPEECH {
            debug!("Recognizer reported silence");
            return;
        }
        warn!(code, "Recognizer error, stopping listening");
        self.stop_listening();
    }

    /// Drives a recognizer until it runs out of events or listening stops.
    pub async fn run(&self, recognizer: &mut impl Recognizer, tree: &UiTree) {
        while let Some(event) = recognizer.next_event().await {
            match event {
                RecognizerEvent::Transcript(transcript) => {
                    if self.is_listening() {
                        let _ = self.handle_transcript(tree, &transcript).await;
                    }
                },
                RecognizerEvent::End => {
                    if !self.on_recognizer_end() {
                        break;
                    }
                },
                RecognizerEvent::Error(code) => {
                    self.on_recognizer_error(&code);
                    if !self.is_listening() {
                        break;
                    }
                },
            }
        }
    }

    /// Publishes feedback and schedules its auto-dismiss. A newer feedback
    /// publication supersedes the pending clear (epoch guard).
    fn publish_feedback(&self, feedback: Feedback) {
        let epoch = self.inner.feedback_epoch.fetch_add(1, Ordering::AcqRel) + 1;
        *self.inner.feedback.lock() = Some(feedback);

        let inner = Arc::clone(&self.inner);
        let ttl = self.feedback_ttl;
        tokio::spawn(async move {
            tokio::time::sleep(ttl).await;
            if inner.feedback_epoch.load(Ordering::Acquire) == epoch {
                *inner.feedback.lock() = None;
                debug!("Voice feedback dismissed");
            }
        });
    }
}
