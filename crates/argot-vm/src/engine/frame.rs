//! Continuation arena for grammar traversal.
//!
//! Implements the cactus stack pattern: frames are append-only, each naming
//! the next node to run and the frame to continue with afterwards. A
//! checkpoint only has to remember the index of the current frame.

use argot_grammar::NodeId;

/// One pending node of the continuation.
#[derive(Clone, Copy, Debug)]
pub struct Frame {
    /// Node to run when this frame is popped.
    pub node: NodeId,
    /// Frame to continue with afterwards (for cactus stack).
    pub parent: Option<u32>,
}

/// Append-only arena for frames (cactus stack implementation).
///
/// Frames are never deallocated while a checkpoint may still reach them;
/// "pop" just moves the current pointer.
#[derive(Debug, Default)]
pub struct FrameArena {
    frames: Vec<Frame>,
    current: Option<u32>,
}

impl FrameArena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedules `node` to run before the current continuation.
    pub fn push(&mut self, node: NodeId) -> u32 {
        let idx = self.frames.len() as u32;
        self.frames.push(Frame {
            node,
            parent: self.current,
        });
        self.current = Some(idx);
        idx
    }

    /// Pops the next node to run, or `None` when the continuation is done.
    pub fn pop(&mut self) -> Option<NodeId> {
        let frame = self.frames[self.current? as usize];
        self.current = frame.parent;
        Some(frame.node)
    }

    /// Restore frame state for backtracking.
    #[inline]
    pub fn restore(&mut self, frame_index: Option<u32>) {
        self.current = frame_index;
    }

    #[inline]
    pub fn current(&self) -> Option<u32> {
        self.current
    }

    /// Drops frames above the high-water mark.
    ///
    /// A parent always has a lower index than its children, so frames above
    /// both `current` and the highest checkpoint reference are unreachable.
    pub fn prune(&mut self, max_referenced: Option<u32>) {
        let keep = match (self.current, max_referenced) {
            (Some(a), Some(b)) => Some(a.max(b)),
            (a, b) => a.or(b),
        };
        self.frames.truncate(keep.map_or(0, |high| high as usize + 1));
    }
}
