//! Target phrase scoring over the node tree.
//!
//! Every interactive, visible node is scored against the target phrase by
//! lowercase substring containment across its five text sources. Sources
//! carry fixed weights, with exact-match bonuses for the two strongest
//! signals. Candidates are ranked descending with ties broken by document
//! pre-order.

use crate::command::parse_command;
use crate::node::{NodeId, NodeText, UiTree};

const INNER_TEXT_WEIGHT: u32 = 10;
const INNER_TEXT_EXACT_BONUS: u32 = 20;
const TEXT_CONTENT_WEIGHT: u32 = 8;
const ARIA_LABEL_WEIGHT: u32 = 12;
const ARIA_LABEL_EXACT_BONUS: u32 = 25;
const TITLE_WEIGHT: u32 = 7;
const PLACEHOLDER_WEIGHT: u32 = 6;

/// One ranked match for a target phrase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub node: NodeId,
    pub score: u32,
    /// The node's strongest display text, for feedback rendering.
    pub label: String,
}

/// Result of running a transcript against a tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchOutcome {
    /// The transcript had no known command prefix. The tree was not scanned.
    CommandNotRecognized,
    /// The command parsed but no eligible node contained the target.
    ElementNotFound { target: String },
    /// The target matched; the first candidate is the winner.
    Matched { target: String, candidates: Vec<Candidate> },
}

impl MatchOutcome {
    /// The winning candidate, when there is one.
    #[must_use]
    pub fn winner(&self) -> Option<&Candidate> {
        match self {
            Self::Matched { candidates, .. } => candidates.first(),
            _ => None,
        }
    }
}

/// Parses `transcript` and ranks eligible nodes for its target phrase.
#[must_use]
pub fn match_transcript(tree: &UiTree, transcript: &str) -> MatchOutcome {
    let Some(target) = parse_command(transcript) else {
        return MatchOutcome::CommandNotRecognized;
    };

    match_target(tree, &target)
}

/// Ranks eligible nodes for an already-parsed target phrase.
#[must_use]
pub fn match_target(tree: &UiTree, target: &str) -> MatchOutcome {
    let target = target.to_lowercase();

    let mut candidates: Vec<Candidate> = tree
        .walk()
        .into_iter()
        .filter(|&(_, node, visible)| visible && node.is_interactive())
        .filter_map(|(id, node, _)| {
            let score = score_text(&node.text, &target);
            (score > 0).then(|| Candidate { node: id, score, label: display_label(&node.text) })
        })
        .collect();

    if candidates.is_empty() {
        return MatchOutcome::ElementNotFound { target };
    }

    // Stable sort: equal scores keep document pre-order.
    candidates.sort_by(|a, b| b.score.cmp(&a.score));

    MatchOutcome::Matched { target, candidates }
}

fn score_text(text: &NodeText, target: &str) -> u32 {
    let mut score = 0;

    score += source_score(&text.inner_text, target, INNER_TEXT_WEIGHT, INNER_TEXT_EXACT_BONUS);
    score += source_score(&text.text_content, target, TEXT_CONTENT_WEIGHT, 0);
    score += source_score(&text.aria_label, target, ARIA_LABEL_WEIGHT, ARIA_LABEL_EXACT_BONUS);
    score += source_score(&text.title, target, TITLE_WEIGHT, 0);
    score += source_score(&text.placeholder, target, PLACEHOLDER_WEIGHT, 0);

    score
}

fn source_score(source: &str, target: &str, weight: u32, exact_bonus: u32) -> u32 {
    let source = source.trim().to_lowercase();
    if source.is_empty() || !source.contains(target) {
        return 0;
    }

    let mut score = weight;
    if source == target {
        score += exact_bonus;
    }
    score
}

fn display_label(text: &NodeText) -> String {
    [&text.inner_text, &text.aria_label, &text.text_content, &text.title, &text.placeholder]
        .into_iter()
        .map(|s| s.trim())
        .find(|s| !s.is_empty())
        .unwrap_or_default()
        .to_owned()
}
