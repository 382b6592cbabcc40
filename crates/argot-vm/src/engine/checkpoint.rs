//! Checkpoints for backtracking.
//!
//! When the VM reaches an alternation, it saves a checkpoint for every
//! alternative but the first. On failure, it restores the most recent
//! checkpoint and continues with that alternative.

use argot_grammar::NodeId;

/// Choice point for backtracking.
#[derive(Clone, Copy, Debug)]
pub struct Checkpoint {
    /// Token cursor position.
    pub position: usize,
    /// Binding log length at checkpoint.
    pub watermark: usize,
    /// Continuation to resume with.
    pub frame_index: Option<u32>,
    /// Alternative to run first on resume; `None` is the empty branch.
    pub branch: Option<NodeId>,
}

/// Stack of checkpoints with O(1) max_frame_ref tracking.
///
/// The highest frame index referenced by any checkpoint bounds what the
/// frame arena may prune.
#[derive(Debug, Default)]
pub struct CheckpointStack {
    stack: Vec<Checkpoint>,
    max_frame_ref: Option<u32>,
}

impl CheckpointStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, checkpoint: Checkpoint) {
        if let Some(frame_idx) = checkpoint.frame_index {
            self.max_frame_ref = Some(match self.max_frame_ref {
                Some(max) => max.max(frame_idx),
                None => frame_idx,
            });
        }
        self.stack.push(checkpoint);
    }

    /// Pop and return the most recent checkpoint.
    pub fn pop(&mut self) -> Option<Checkpoint> {
        let cp = self.stack.pop()?;

        // Recompute only when the max holder left; each checkpoint triggers
        // at most one recomputation.
        if self.stack.is_empty() {
            self.max_frame_ref = None;
        } else if cp.frame_index == self.max_frame_ref {
            self.max_frame_ref = self.stack.iter().filter_map(|c| c.frame_index).max();
        }

        Some(cp)
    }

    #[inline]
    pub fn max_frame_ref(&self) -> Option<u32> {
        self.max_frame_ref
    }
}
