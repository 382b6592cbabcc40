//! Incremental construction of a grammar arena.

use crate::error::GrammarError;
use crate::grammar::Grammar;
use crate::node::{ClusterEntry, NodeData, NodeId, NodeKind};

/// Appends nodes to an arena and hands out their ids.
///
/// Children must be built before their parents; back-references are the
/// only way to point "upwards" and are linked later by
/// [`Grammar::resolve_back_references`].
#[derive(Debug, Default)]
pub struct GrammarBuilder {
    nodes: Vec<NodeData>,
}

impl GrammarBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn push(&mut self, kind: NodeKind) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(NodeData::new(kind));
        id
    }

    pub fn symbol(&mut self, text: impl Into<String>) -> NodeId {
        self.push(NodeKind::Symbol(text.into()))
    }

    pub fn sequence(&mut self, children: Vec<NodeId>) -> NodeId {
        self.push(NodeKind::Sequence(children))
    }

    /// Adds an alternation; `None` entries are empty branches.
    pub fn alternation(&mut self, children: Vec<Option<NodeId>>) -> Result<NodeId, GrammarError> {
        if children.len() < 2 {
            return Err(GrammarError::TooFewAlternatives(children.len()));
        }
        Ok(self.push(NodeKind::Alternation(children)))
    }

    pub fn argument(&mut self, name: impl Into<String>) -> NodeId {
        self.push(NodeKind::Argument(name.into()))
    }

    pub fn preset(&mut self, argument: impl Into<String>, value: impl Into<String>) -> NodeId {
        self.push(NodeKind::Preset {
            argument: argument.into(),
            value: value.into(),
        })
    }

    pub fn cluster(&mut self, entries: Vec<ClusterEntry>) -> NodeId {
        self.push(NodeKind::Cluster(entries))
    }

    pub fn at_most_once(&mut self, child: NodeId) -> NodeId {
        self.push(NodeKind::AtMostOnce(child))
    }

    pub fn back_reference(&mut self, label: impl Into<String>) -> NodeId {
        self.push(NodeKind::BackReference(label.into()))
    }

    /// Attaches `label` to an existing node, replacing any previous label.
    pub fn label(&mut self, node: NodeId, label: impl Into<String>) -> Result<(), GrammarError> {
        let label = label.into();
        if label.is_empty() {
            return Err(GrammarError::EmptyLabel);
        }
        let data = self
            .nodes
            .get_mut(node.index())
            .ok_or(GrammarError::DanglingEdge { node, child: node })?;
        data.label = Some(label);
        Ok(())
    }

    pub fn label_of(&self, node: NodeId) -> Option<&str> {
        self.nodes.get(node.index()).and_then(NodeData::label)
    }

    /// Freezes the arena with `root` as the entry node.
    pub fn finish(self, root: NodeId) -> Result<Grammar, GrammarError> {
        let len = self.nodes.len();
        if root.index() >= len {
            return Err(GrammarError::DanglingEdge {
                node: root,
                child: root,
            });
        }
        for (i, data) in self.nodes.iter().enumerate() {
            if let Some(child) = data.kind.children().into_iter().find(|c| c.index() >= len) {
                return Err(GrammarError::DanglingEdge {
                    node: NodeId(i as u32),
                    child,
                });
            }
        }
        Ok(Grammar::from_parts(self.nodes, root))
    }
}
