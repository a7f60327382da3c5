//! Arena-based MCTS tree.
//!
//! Uses a flat `Vec<MCTSNode>` with index-based references. The arena owns
//! every node; children are listed by id on their parent and each node keeps
//! its parent's id as a non-owning back-reference.

use crate::core::{GameRng, GameState, Player};

use super::node::{MCTSNode, NodeId};
use super::policy::SelectionPolicy;

/// Arena-based MCTS tree.
#[derive(Clone, Debug)]
pub struct MCTSTree {
    /// All nodes in the tree.
    nodes: Vec<MCTSNode>,

    /// The root node ID (always 0).
    root: NodeId,
}

impl MCTSTree {
    /// Create a tree whose root wraps `state`.
    pub fn new(state: GameState) -> Self {
        Self::with_capacity(state, 1024)
    }

    /// Create a tree with custom initial capacity.
    pub fn with_capacity(state: GameState, capacity: usize) -> Self {
        let mut nodes = Vec::with_capacity(capacity.max(1));
        nodes.push(MCTSNode::root(state));
        Self {
            nodes,
            root: NodeId::new(0),
        }
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
    pub fn get(&self, id: NodeId) -> &MCTSNode {
        &self.nodes[id.0 as usize]
    }

    /// Get a mutable node by ID.
    #[inline]
    pub fn get_mut(&mut self, id: NodeId) -> &mut MCTSNode {
        &mut self.nodes[id.0 as usize]
    }

    /// Get the root node.
    #[must_use]
    pub fn root_node(&self) -> &MCTSNode {
        self.get(self.root)
    }

    /// Allocate a new node, returning its ID.
    fn alloc(&mut self, node: MCTSNode) -> NodeId {
        let id = NodeId::new(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    /// Number of nodes in the tree.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the tree is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Child of `id` preferred by the selection policy.
    ///
    /// Returns `None` for a childless node; the search never descends into
    /// one.
    pub fn best_child(&self, id: NodeId, policy: &dyn SelectionPolicy, c: f64) -> Option<NodeId> {
        let node = self.get(id);
        debug_assert!(!node.children.is_empty(), "best_child on a leaf");
        let mut children = node.children.iter().map(|&child| self.get(child));
        policy
            .select(node, &mut children, c)
            .and_then(|i| node.children.get(i).copied())
    }

    /// Child of `id` with the most visits; ties go to the first in child
    /// order. `None` if `id` has no children.
    #[must_use]
    pub fn most_visited_child(&self, id: NodeId) -> Option<NodeId> {
        let mut best: Option<(NodeId, u32)> = None;
        for &child in &self.get(id).children {
            let visits = self.get(child).visits;
            if best.map_or(true, |(_, v)| visits > v) {
                best = Some((child, visits));
            }
        }
        best.map(|(child, _)| child)
    }

    /// Expand one untried move of `id`, chosen uniformly at random.
    ///
    /// Clones the node's state, applies the move to the clone, and attaches
    /// the result as a new child. Returns `None` if nothing is left to expand.
    pub fn expand(&mut self, id: NodeId, rng: &mut GameRng) -> Option<NodeId> {
        let node = self.get_mut(id);
        if node.untried.is_empty() {
            return None;
        }
        let pick = rng.gen_index(node.untried.len());
        let mv = node.untried.remove(pick);

        let mut state = node.state.clone();
        let depth = node.depth + 1;
        // Untried moves come from `valid_moves` on this very state.
        if let Err(err) = state.apply_move(mv) {
            tracing::error!(%err, %mv, "untried move rejected");
            return None;
        }

        let child = self.alloc(MCTSNode::new(state, id, Some(mv), depth));
        self.get_mut(id).children.push(child);
        Some(child)
    }

    /// Credit a simulation result to `id` and every ancestor up to the root.
    ///
    /// The score is always taken from `perspective`'s point of view: 1 for a
    /// win, 0.5 for a draw, 0 otherwise. It is not flipped per depth, since
    /// the two players' goals are not mirror images of each other.
    pub fn backpropagate(&mut self, id: NodeId, result: Option<Player>, perspective: Player) {
        let score = match result {
            Some(winner) if winner == perspective => 1.0,
            Some(_) => 0.0,
            None => 0.5,
        };

        let mut current = id;
        while !current.is_none() {
            let node = self.get_mut(current);
            node.record(score);
            current = node.parent;
        }
    }

    /// Get statistics about the tree.
    #[must_use]
    pub fn stats(&self) -> TreeStats {
        TreeStats {
            node_count: self.nodes.len(),
            max_depth: self.nodes.iter().map(|n| n.depth).max().unwrap_or(0),
            terminal_count: self.nodes.iter().filter(|n| n.state.is_terminal()).count(),
        }
    }

    /// Iterate over all nodes.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &MCTSNode)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, n)| (NodeId::new(i as u32), n))
    }
}

/// Statistics about the MCTS tree.
#[derive(Clone, Debug, Default)]
pub struct TreeStats {
    /// Total number of nodes.
    pub node_count: usize,

    /// Maximum depth reached.
    pub max_depth: u16,

    /// Number of nodes holding a finished game.
    pub terminal_count: usize,
}
