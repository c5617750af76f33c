//! Voice feature slice: transcript parsing, node-tree matching, and the
//! continuous listening session.
//!
//! The slice is browser-free. It operates on an abstract [`UiTree`] and
//! dispatches clicks through an injected [`NodeActions`] sink, so the whole
//! pipeline is testable with plain data.

pub mod command;
mod error;
pub mod matcher;
pub mod node;
pub mod session;

pub use crate::command::{COMMAND_PREFIXES, parse_command};
pub use crate::error::{VoiceError, VoiceErrorExt};
pub use crate::matcher::{Candidate, MatchOutcome, match_target, match_transcript};
pub use crate::node::{NodeId, NodeText, UiNode, UiTree};
pub use crate::session::{Feedback, NodeActions, Recognizer, RecognizerEvent, VoiceSession};

use std::any::Any;
use std::sync::Arc;
use tsp_domain::config::AppConfig;
use tsp_domain::registry::{FeatureSlice, InitializedSlice};

/// Voice feature state: session factory bound to config timing.
#[derive(Debug, Clone)]
pub struct Voice {
    config: tsp_domain::config::VoiceConfig,
}

impl Voice {
    #[must_use]
    pub fn new(config: &AppConfig) -> Self {
        Self { config: config.voice.clone() }
    }

    /// Creates a listening session wired to the given click sink.
    #[must_use]
    pub fn session(&self, actions: Arc<dyn NodeActions>) -> VoiceSession {
        VoiceSession::new(actions, &self.config)
    }
}

impl FeatureSlice for Voice {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Initialize the voice feature.
///
/// # Errors
///
/// Infallible today; the signature leaves room for config validation.
pub fn init(config: &AppConfig) -> Result<InitializedSlice, VoiceError> {
    tracing::info!("Voice slice initialized");
    Ok(InitializedSlice::new(Voice::new(config)))
}
