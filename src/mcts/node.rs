//! MCTS node structure.
//!
//! Nodes live in an arena ([`MctsTree`](super::tree::MctsTree)) and refer
//! to each other by `NodeId` index. The parent link is such an index, not
//! an owning reference: it exists only so backpropagation can walk
//! upward, which keeps the tree a true ownership tree with no cycles.

use serde::{Deserialize, Serialize};

use crate::core::{Player, SearchState};

/// Index into the MctsTree node arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeId(pub u32);

impl NodeId {
    /// Sentinel value representing no node.
    pub const NONE: NodeId = NodeId(u32::MAX);

    /// Create a new node ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Check if this is the NONE sentinel.
    #[inline]
    #[must_use]
    pub const fn is_none(self) -> bool {
        self.0 == u32::MAX
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_none() {
            write!(f, "NodeId(NONE)")
        } else {
            write!(f, "NodeId({})", self.0)
        }
    }
}

/// A node in the MCTS tree.
///
/// Owns its [`SearchState`] snapshot and its child list; records the
/// player whose move produced the state (the root records the opponent
/// of the searching player, since the first real ply belongs to the
/// searcher). Nodes are created during expansion and never deleted
/// mid-search.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MctsNode {
    /// Parent node (NONE for the root); used only for backpropagation.
    pub parent: NodeId,

    /// The player who made the move leading to this node.
    pub mover: Player,

    /// The position after that move.
    pub state: SearchState,

    /// Depth in the tree (root = 0).
    pub depth: u16,

    /// Times this node was on a backpropagation path.
    pub visits: u32,

    /// Accumulated win score from playouts won by `mover`.
    pub win_score: f64,

    /// Owned child nodes, one per legal move once expanded.
    pub children: Vec<NodeId>,
}

impl MctsNode {
    /// Create a node reached by `mover`'s move.
    #[must_use]
    pub fn new(parent: NodeId, mover: Player, state: SearchState, depth: u16) -> Self {
        Self {
            parent,
            mover,
            state,
            depth,
            visits: 0,
            win_score: 0.0,
            children: Vec::new(),
        }
    }

    /// Create a root node for the given position.
    ///
    /// `last_actor` is the player treated as having produced the root
    /// position: the opponent of the player the search is for.
    #[must_use]
    pub fn root(state: SearchState, last_actor: Player) -> Self {
        Self::new(NodeId::NONE, last_actor, state, 0)
    }

    /// Check whether this node is an unexpanded leaf.
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Mean win score per visit; 0 before the first visit.
    #[must_use]
    pub fn mean_score(&self) -> f64 {
        if self.visits == 0 {
            0.0
        } else {
            self.win_score / self.visits as f64
        }
    }
}
