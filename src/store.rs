//! The plot store: active tool, feature selection, and undo/redo history.
//!
//! This is the single shared state object behind the plot workspace. It owns a
//! bounded, branch-free history of serialized scene snapshots: every committed
//! edit pushes the scene blob here, and undo/redo hand blobs back to the
//! caller to apply. The store never parses snapshot contents: they are opaque
//! strings produced and consumed by the scene serializer.

use crate::constants::MAX_HISTORY;
use crate::types::PlotTool;
use serde::{Deserialize, Serialize};

/// An opaque serialized scene, as produced by the external serializer.
pub type Snapshot = String;

/// Centralized mutable state for the plot workspace.
///
/// Snapshot convention: `push_snapshot` takes the state being committed;
/// `undo` takes the state being *left*, so it can be restored by a later
/// redo. The last element of the undo stack is always the current committed
/// state once at least one snapshot exists; `undo` and `redo` preserve that
/// reading.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PlotStore {
    /// Currently active drawing tool
    pub active_tool: PlotTool,
    /// Identifier of the selected feature; empty means no selection
    pub selected_feature_id: String,
    /// Committed snapshots, oldest first, bounded to `MAX_HISTORY`
    #[serde(skip)]
    undo_stack: Vec<Snapshot>,
    /// Snapshots removed by undo, replayable until the next fresh push
    #[serde(skip)]
    redo_stack: Vec<Snapshot>,
}

impl PlotStore {
    /// Creates a store with no active tool, no selection, and empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the active drawing tool.
    pub fn set_tool(&mut self, tool: PlotTool) {
        self.active_tool = tool;
    }

    /// Sets the selected feature id. An empty string deselects.
    pub fn set_selected_feature_id(&mut self, id: impl Into<String>) {
        self.selected_feature_id = id.into();
    }

    /// Returns the selected feature id, or `None` when nothing is selected.
    pub fn selected_feature_id(&self) -> Option<&str> {
        if self.selected_feature_id.is_empty() {
            None
        } else {
            Some(&self.selected_feature_id)
        }
    }

    /// Commits a snapshot to the history.
    ///
    /// Clears the redo stack (a fresh edit discards any undone branch) and
    /// evicts the oldest entry once the stack exceeds [`MAX_HISTORY`].
    pub fn push_snapshot(&mut self, snapshot: Snapshot) {
        self.undo_stack.push(snapshot);
        self.redo_stack.clear();

        if self.undo_stack.len() > MAX_HISTORY {
            self.undo_stack.remove(0);
        }
    }

    /// Steps back one snapshot.
    ///
    /// `current` is the state being left; it is parked on the redo stack so a
    /// later [`redo`](Self::redo) can restore it. Returns the snapshot the
    /// caller should apply, or `None` when there is no prior state (fewer than
    /// two entries on the undo stack).
    pub fn undo(&mut self, current: Snapshot) -> Option<Snapshot> {
        if self.undo_stack.len() < 2 {
            return None;
        }
        self.redo_stack.push(current);
        self.undo_stack.pop();
        self.undo_stack.last().cloned()
    }

    /// Steps forward one snapshot after an undo.
    ///
    /// Re-commits the most recently undone snapshot: it moves from the redo
    /// stack back to the top of the undo stack and is returned for the caller
    /// to apply. Returns `None` when the redo stack is empty. Takes no
    /// argument: the state being left is already the undo stack's top, and the
    /// re-entered snapshot must become the new top so a later undo lands on
    /// the state before it.
    pub fn redo(&mut self) -> Option<Snapshot> {
        let next = self.redo_stack.pop()?;
        self.undo_stack.push(next.clone());
        Some(next)
    }

    /// Returns true if there is a prior state to revert to.
    ///
    /// Requires more than one entry: the last entry is the current committed
    /// state, not something to revert to.
    pub fn can_undo(&self) -> bool {
        self.undo_stack.len() > 1
    }

    /// Returns true if there are undone snapshots that can be replayed.
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Number of snapshots on the undo stack.
    pub fn undo_depth(&self) -> usize {
        self.undo_stack.len()
    }

    /// Number of snapshots on the redo stack.
    pub fn redo_depth(&self) -> usize {
        self.redo_stack.len()
    }

    /// Discards all history. Used when a new scene replaces the current one.
    pub fn clear_history(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}
