//! Binding log with truncation support for backtracking.
//!
//! Slots are never written during the search. Every tentative binding goes
//! into this log instead, and the log is truncated back to a checkpoint's
//! watermark when the VM backtracks.

use argot_core::{ArgumentBundle, BundleError, Value};
use argot_grammar::NodeId;

#[derive(Debug, Clone, PartialEq)]
pub enum Binding {
    /// A value bound to the slot at `slot` (bundle index).
    Value {
        slot: usize,
        value: Value,
        /// Token position the value came from, or where it was preset.
        position: usize,
    },
    /// An `AtMostOnce` node was entered.
    Visit(NodeId),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BindingLog(Vec<Binding>);

impl BindingLog {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn push(&mut self, binding: Binding) {
        self.0.push(binding);
    }

    /// Current length, used as watermark for backtracking.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    pub fn truncate(&mut self, watermark: usize) {
        self.0.truncate(watermark);
    }

    pub fn as_slice(&self) -> &[Binding] {
        &self.0
    }

    /// Values bound so far to the slot at `slot`.
    pub fn count(&self, slot: usize) -> usize {
        self.0
            .iter()
            .filter(|b| matches!(b, Binding::Value { slot: s, .. } if *s == slot))
            .count()
    }

    pub fn visited(&self, node: NodeId) -> bool {
        self.0.iter().any(|b| *b == Binding::Visit(node))
    }

    /// `(slot, value)` pairs in binding order.
    pub fn values(&self) -> impl Iterator<Item = (usize, &Value)> {
        self.0.iter().filter_map(|b| match b {
            Binding::Value { slot, value, .. } => Some((*slot, value)),
            Binding::Visit(_) => None,
        })
    }

    /// Writes every bound value into `bundle`, replacing what it held.
    pub fn commit(&self, bundle: &mut ArgumentBundle) -> Result<(), BundleError> {
        bundle.commit(self.values().map(|(slot, value)| (slot, value.clone())))
    }
}
