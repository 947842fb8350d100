//! Call queue models matching the backend `/api/calls` contract.

use serde::{Deserialize, Serialize};

/// A community request naming a game slot and who asked for it.
///
/// Entries carry no identity: they are addressed by their position in the
/// current [`CallList`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallEntry {
    pub slot: String,
    pub user: String,
}

impl CallEntry {
    pub fn new(slot: impl Into<String>, user: impl Into<String>) -> Self {
        Self {
            slot: slot.into(),
            user: user.into(),
        }
    }
}

/// Full snapshot of the backend-owned call queue.
///
/// Both the one-shot fetch and every push message carry this shape, and the
/// client always replaces its copy wholesale.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallList {
    pub calls: Vec<CallEntry>,
}

impl CallList {
    #[cfg(test)]
    pub fn new(calls: Vec<CallEntry>) -> Self {
        Self { calls }
    }

    pub fn len(&self) -> usize {
        self.calls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.calls.is_empty()
    }

    /// Sequence obtained by moving the entry at `from` to position `to`.
    ///
    /// Returns `None` when either position is outside the list.
    pub fn moved(&self, from: usize, to: usize) -> Option<Vec<CallEntry>> {
        if from >= self.calls.len() || to >= self.calls.len() {
            return None;
        }
        let mut calls = self.calls.clone();
        let entry = calls.remove(from);
        calls.insert(to, entry);
        Some(calls)
    }
}

/// Request body for submitting a call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitCallRequest {
    pub slot: String,
    pub user: String,
}

impl From<CallEntry> for SubmitCallRequest {
    fn from(entry: CallEntry) -> Self {
        Self {
            slot: entry.slot,
            user: entry.user,
        }
    }
}
