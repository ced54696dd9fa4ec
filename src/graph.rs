//! Call graph recorded by the recursive and memoized strategies.
//!
//! Each invocation gets its own [`CallNode`], even when the same argument is
//! reached many times; [`CallEdge`]s link a caller to every child call it made.

use serde::Serialize;

use crate::status::NodeStatus;

/// Identifier of one invocation: its index in [`CallGraph::nodes`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct NodeId(pub usize);

/// Decision recorded for an invocation or table cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Choice {
    /// House Robber: take the current house.
    Rob,
    /// House Robber: leave the current house.
    Skip,
    /// Frog Jump: best predecessor step.
    From(usize),
}

/// How an invocation obtained its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Resolution {
    Base,
    Computed,
    Memoized,
}

/// One recorded invocation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CallNode {
    pub id: NodeId,
    /// Display label, e.g. `f5_0` or `rob2_3`.
    pub label: String,
    /// Argument or index the invocation was called with.
    pub argument: usize,
    /// Recursion depth from the root (root = 0).
    pub depth: usize,
    pub parent: Option<NodeId>,
    pub result: Option<i64>,
    pub resolution: Option<Resolution>,
    pub choice: Option<Choice>,
}

impl CallNode {
    /// Status the node ends the solve in, independent of any cursor.
    pub fn final_status(&self) -> NodeStatus {
        match self.resolution {
            None => NodeStatus::Pending,
            Some(Resolution::Base) => NodeStatus::Base,
            Some(Resolution::Computed) => NodeStatus::Completed,
            Some(Resolution::Memoized) => NodeStatus::Memoized,
        }
    }
}

/// Directed caller → callee edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CallEdge {
    pub from: NodeId,
    pub to: NodeId,
}

/// Nodes in creation order plus one edge per recursive call.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CallGraph {
    pub nodes: Vec<CallNode>,
    pub edges: Vec<CallEdge>,
}

impl CallGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a node for a new invocation and, if it has a caller, the edge
    /// leading to it.
    pub fn open(&mut self, label: String, argument: usize, parent: Option<NodeId>) -> NodeId {
        let id = NodeId(self.nodes.len());
        let depth = parent.map_or(0, |p| self.nodes[p.0].depth + 1);
        self.nodes.push(CallNode {
            id,
            label,
            argument,
            depth,
            parent,
            result: None,
            resolution: None,
            choice: None,
        });
        if let Some(from) = parent {
            self.edges.push(CallEdge { from, to: id });
        }
        id
    }

    /// Record the value an invocation resolved to.
    pub fn resolve(
        &mut self,
        id: NodeId,
        result: i64,
        resolution: Resolution,
        choice: Option<Choice>,
    ) {
        let node = &mut self.nodes[id.0];
        debug_assert!(node.resolution.is_none(), "node {} resolved twice", node.label);
        node.result = Some(result);
        node.resolution = Some(resolution);
        node.choice = choice;
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn node(&self, id: NodeId) -> Option<&CallNode> {
        self.nodes.get(id.0)
    }

    /// The first invocation, if any call was made.
    pub fn root(&self) -> Option<&CallNode> {
        self.nodes.first()
    }

    /// Children of `id` in call order.
    pub fn children(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.edges
            .iter()
            .filter(move |e| e.from == id)
            .map(|e| e.to)
    }

    /// Deepest recursion level reached.
    pub fn max_depth(&self) -> usize {
        self.nodes.iter().map(|n| n.depth).max().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_tracks_depth_and_edges() {
        let mut g = CallGraph::new();
        let root = g.open("f2_0".into(), 2, None);
        let a = g.open("f1_1".into(), 1, Some(root));
        let b = g.open("f0_2".into(), 0, Some(root));
        assert_eq!(g.len(), 3);
        assert_eq!(g.node(a).map(|n| n.depth), Some(1));
        assert_eq!(g.children(root).collect::<Vec<_>>(), vec![a, b]);
        assert_eq!(g.edges.len(), 2);
        assert_eq!(g.max_depth(), 1);
    }

    #[test]
    fn final_status_follows_resolution() {
        let mut g = CallGraph::new();
        let root = g.open("f1_0".into(), 1, None);
        assert_eq!(g.nodes[0].final_status(), NodeStatus::Pending);
        g.resolve(root, 1, Resolution::Base, None);
        assert_eq!(g.nodes[0].final_status(), NodeStatus::Base);
        assert_eq!(g.root().and_then(|n| n.result), Some(1));
    }
}
