//! Arena-based MCTS tree.
//!
//! Nodes are stored in a flat `Vec` and referenced by `NodeId` indices.
//! Parents own their children through the id list; the reverse link is a
//! plain index, so the structure has no reference cycles and no
//! reference-counting overhead.

use serde::{Deserialize, Serialize};

use super::node::{MctsNode, NodeId};

/// Arena holding every node of one search.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MctsTree {
    nodes: Vec<MctsNode>,
    root: NodeId,
}

impl MctsTree {
    /// Create a tree containing only the given root.
    #[must_use]
    pub fn new(root: MctsNode) -> Self {
        let mut tree = Self {
            nodes: Vec::with_capacity(1024),
            root: NodeId::new(0),
        };
        tree.nodes.push(root);
        tree
    }

    /// Get the root node ID.
    #[inline]
    #[must_use]
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Get a node by ID.
    #[inline]
    #[must_use]
    pub fn get(&self, id: NodeId) -> &MctsNode {
        &self.nodes[id.0 as usize]
    }

    /// Get a mutable node by ID.
    #[inline]
    pub fn get_mut(&mut self, id: NodeId) -> &mut MctsNode {
        &mut self.nodes[id.0 as usize]
    }

    /// Allocate a new node, returning its ID.
    pub fn alloc(&mut self, node: MctsNode) -> NodeId {
        let id = NodeId::new(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    /// Number of nodes in the tree.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the tree is empty (it never is after construction).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Get the root node.
    #[must_use]
    pub fn root_node(&self) -> &MctsNode {
        self.get(self.root)
    }

    /// Summary statistics for diagnostics.
    #[must_use]
    pub fn stats(&self) -> TreeStats {
        TreeStats {
            node_count: self.nodes.len(),
            max_depth: self.nodes.iter().map(|n| n.depth).max().unwrap_or(0),
            terminal_count: self
                .nodes
                .iter()
                .filter(|n| !n.state.status.is_in_progress())
                .count(),
        }
    }
}

/// Statistics about the MCTS tree.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
pub struct TreeStats {
    /// Total number of nodes.
    pub node_count: usize,

    /// Deepest node allocated.
    pub max_depth: u16,

    /// Nodes holding a finished game.
    pub terminal_count: usize,
}
