//! The frozen grammar arena and back-reference resolution.

use crate::error::GrammarError;
use crate::node::{NodeData, NodeId, NodeKind};

/// A grammar graph: node arena plus entry node.
///
/// Immutable once resolved, and shareable across threads; parsing never
/// writes to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grammar {
    nodes: Vec<NodeData>,
    root: NodeId,
}

impl Grammar {
    pub(crate) fn from_parts(nodes: Vec<NodeData>, root: NodeId) -> Self {
        Self { nodes, root }
    }

    #[inline]
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Returns the node with the given id.
    ///
    /// Ids come from this grammar's builder, so they are always in range.
    #[inline]
    pub fn node(&self, id: NodeId) -> &NodeData {
        &self.nodes[id.index()]
    }

    #[inline]
    pub fn get(&self, id: NodeId) -> Option<&NodeData> {
        self.nodes.get(id.index())
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &NodeData)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, data)| (NodeId(i as u32), data))
    }

    /// First node (by id) carrying `label`, ignoring back-references.
    pub fn find_label(&self, label: &str) -> Option<NodeId> {
        self.iter()
            .find(|(_, data)| {
                data.label() == Some(label) && !matches!(data.kind, NodeKind::BackReference(_))
            })
            .map(|(id, _)| id)
    }

    /// Nodes reachable from the root, in depth-first preorder.
    pub fn reachable(&self) -> Vec<NodeId> {
        let mut seen = vec![false; self.nodes.len()];
        let mut order = Vec::new();
        let mut stack = vec![self.root];

        while let Some(id) = stack.pop() {
            if std::mem::replace(&mut seen[id.index()], true) {
                continue;
            }
            order.push(id);
            let children = self.node(id).kind.children();
            stack.extend(children.into_iter().rev());
        }
        order
    }

    /// True when no back-reference is reachable from the root.
    pub fn is_resolved(&self) -> bool {
        self.reachable()
            .into_iter()
            .all(|id| !matches!(self.node(id).kind, NodeKind::BackReference(_)))
    }

    /// Replaces every reachable edge to a back-reference with an edge to the
    /// node carrying its label.
    ///
    /// The nearest labelled ancestor on the path from the root wins; if no
    /// ancestor carries the label, the first node with that label anywhere
    /// in the arena is used. Cycles are expected. Running it again is a no-op.
    pub fn resolve_back_references(&mut self) -> Result<(), GrammarError> {
        if let NodeKind::BackReference(label) = &self.node(self.root).kind {
            let label = label.clone();
            self.root = self
                .find_label(&label)
                .ok_or(GrammarError::UnknownLabel(label))?;
        }

        let mut visited = vec![false; self.nodes.len()];
        let mut ancestors: Vec<NodeId> = Vec::new();
        let mut stack = vec![Visit::Enter(self.root)];

        // Explicit stack: compiled repeats nest one level per copy, far deeper
        // than the call stack allows.
        while let Some(visit) = stack.pop() {
            let id = match visit {
                Visit::Enter(id) => id,
                Visit::Exit => {
                    ancestors.pop();
                    continue;
                }
            };
            if std::mem::replace(&mut visited[id.index()], true) {
                continue;
            }
            ancestors.push(id);

            let mut targets = Vec::new();
            for child in self.node(id).kind.children() {
                let target = match &self.node(child).kind {
                    NodeKind::BackReference(label) => self.lookup(label, &ancestors)?,
                    _ => child,
                };
                targets.push(target);
            }

            for (edge, &target) in self.nodes[id.index()]
                .kind
                .children_mut()
                .into_iter()
                .zip(&targets)
            {
                *edge = target;
            }

            stack.push(Visit::Exit);
            stack.extend(targets.into_iter().rev().map(Visit::Enter));
        }
        Ok(())
    }

    fn lookup(&self, label: &str, ancestors: &[NodeId]) -> Result<NodeId, GrammarError> {
        ancestors
            .iter()
            .rev()
            .copied()
            .find(|&a| self.node(a).label() == Some(label))
            .or_else(|| self.find_label(label))
            .ok_or_else(|| GrammarError::UnknownLabel(label.to_string()))
    }
}

/// Step of the resolution walk: enter a node, or leave the innermost one.
enum Visit {
    Enter(NodeId),
    Exit,
}
