//! Errors raised while building or resolving a grammar.

use crate::node::NodeId;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GrammarError {
    #[error("alternation needs at least two alternatives, got {0}")]
    TooFewAlternatives(usize),

    #[error("label must not be empty")]
    EmptyLabel,

    #[error("no node is labelled `{0}`")]
    UnknownLabel(String),

    #[error("{node} points at {child}, which is not in this grammar")]
    DanglingEdge { node: NodeId, child: NodeId },
}
