//! Post-submission onboarding checklist model.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Status of a single checklist item.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ItemStatus {
    #[default]
    Pending,
    InProgress,
    Completed,
    Rejected,
}

impl fmt::Display for ItemStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Pending => "pending",
            Self::InProgress => "in-progress",
            Self::Completed => "completed",
            Self::Rejected => "rejected",
        })
    }
}

/// One trackable onboarding task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressItem {
    pub label: String,
    pub status: ItemStatus,
}

impl ProgressItem {
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self { label: label.into(), status: ItemStatus::Pending }
    }
}

/// A named group of checklist items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressSection {
    pub title: String,
    pub items: Vec<ProgressItem>,
}

impl ProgressSection {
    #[must_use]
    pub fn new(title: impl Into<String>, labels: &[&str]) -> Self {
        Self {
            title: title.into(),
            items: labels.iter().map(|label| ProgressItem::new(*label)).collect(),
        }
    }
}

/// All checklist sections for one onboarding run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressBoard {
    pub sections: Vec<ProgressSection>,
}

impl ProgressBoard {
    #[must_use]
    pub fn new(sections: Vec<ProgressSection>) -> Self {
        Self { sections }
    }

    /// Total number of items across all sections.
    #[must_use]
    pub fn total(&self) -> usize {
        self.sections.iter().map(|s| s.items.len()).sum()
    }

    /// Number of items currently `Completed`.
    #[must_use]
    pub fn completed(&self) -> usize {
        self.sections
            .iter()
            .flat_map(|s| &s.items)
            .filter(|i| i.status == ItemStatus::Completed)
            .count()
    }

    /// Checklist progress in percent, recomputed on demand.
    ///
    /// This is a distinct metric from the wizard's step progress; the two
    /// are never combined.
    #[must_use]
    pub fn percent(&self) -> u8 {
        let total = self.total();
        if total == 0 {
            return 100;
        }
        let percent = self.completed() * 100 / total;
        u8::try_from(percent).unwrap_or(100)
    }

    /// True once every item reports `Completed`.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.completed() == self.total()
    }

    /// Iterates `(section index, item index)` pairs in document order.
    pub fn positions(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.sections
            .iter()
            .enumerate()
            .flat_map(|(si, s)| (0..s.items.len()).map(move |ii| (si, ii)))
    }

    /// Returns a mutable handle to the item at `(section, item)`, if present.
    pub fn item_mut(&mut self, section: usize, item: usize) -> Option<&mut ProgressItem> {
        self.sections.get_mut(section)?.items.get_mut(item)
    }
}
