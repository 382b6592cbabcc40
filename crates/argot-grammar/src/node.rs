//! Grammar node definitions.

use std::fmt;

/// Index of a node in its grammar's arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "N{}", self.0)
    }
}

/// One letter of a short-option cluster such as `-xvf`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClusterEntry {
    pub letter: char,
    pub argument: String,
    /// The option needs a value of its own, so it cannot appear in a cluster.
    pub takes_value: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    /// Matches one token whose text is exactly this string.
    Symbol(String),
    /// Matches the children in order. Empty matches zero tokens.
    Sequence(Vec<NodeId>),
    /// Matches exactly one child, tried in order. `None` is the empty branch.
    Alternation(Vec<Option<NodeId>>),
    /// Consumes one token and converts it with the named slot.
    Argument(String),
    /// Binds a fixed text to a slot without consuming a token.
    Preset { argument: String, value: String },
    /// Consumes one `-abc` token, binding each letter's flag slot.
    Cluster(Vec<ClusterEntry>),
    /// Matches the child, at most once per parse.
    AtMostOnce(NodeId),
    /// Placeholder for the node carrying `label`, removed by resolution.
    BackReference(String),
}

impl NodeKind {
    /// Outgoing edges in order.
    pub fn children(&self) -> Vec<NodeId> {
        match self {
            NodeKind::Sequence(children) => children.clone(),
            NodeKind::Alternation(children) => children.iter().flatten().copied().collect(),
            NodeKind::AtMostOnce(child) => vec![*child],
            NodeKind::Symbol(_)
            | NodeKind::Argument(_)
            | NodeKind::Preset { .. }
            | NodeKind::Cluster(_)
            | NodeKind::BackReference(_) => Vec::new(),
        }
    }

    pub(crate) fn children_mut(&mut self) -> Vec<&mut NodeId> {
        match self {
            NodeKind::Sequence(children) => children.iter_mut().collect(),
            NodeKind::Alternation(children) => children.iter_mut().flatten().collect(),
            NodeKind::AtMostOnce(child) => vec![child],
            NodeKind::Symbol(_)
            | NodeKind::Argument(_)
            | NodeKind::Preset { .. }
            | NodeKind::Cluster(_)
            | NodeKind::BackReference(_) => Vec::new(),
        }
    }

    /// Argument slot referenced by this node, if any.
    pub fn argument(&self) -> Option<&str> {
        match self {
            NodeKind::Argument(name) | NodeKind::Preset { argument: name, .. } => Some(name.as_str()),
            _ => None,
        }
    }
}

/// A node plus its optional label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeData {
    pub kind: NodeKind,
    pub label: Option<String>,
}

impl NodeData {
    pub fn new(kind: NodeKind) -> Self {
        Self { kind, label: None }
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }
}
