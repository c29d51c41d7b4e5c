//! MCTS tree structure with arena allocation.
//!
//! The tree uses arena allocation for efficient node storage and
//! cache-friendly traversal. Nodes are stored in a contiguous Vec
//! and referenced by NodeId indices; a child holds its parent's NodeId
//! so backpropagation can walk up without shared ownership.

use engine_core::{BoardSnapshot, Piece};

use crate::node::{MctsNode, NodeId};
use crate::uct::first_max;

/// MCTS tree with arena-based node storage.
#[derive(Debug)]
pub struct MctsTree<B> {
    /// Arena storing all nodes
    nodes: Vec<MctsNode<B>>,

    /// Root node index (always 0 after initialization)
    root: NodeId,
}

impl<B: BoardSnapshot> MctsTree<B> {
    /// Create a new tree rooted at the given position.
    pub fn new(root_snapshot: B) -> Self {
        Self {
            nodes: vec![MctsNode::new_root(root_snapshot)],
            root: NodeId(0),
        }
    }

    /// Get the root node ID.
    #[inline]
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Get a reference to a node by ID.
    #[inline]
    pub fn get(&self, id: NodeId) -> &MctsNode<B> {
        &self.nodes[id.index()]
    }

    /// Get a mutable reference to a node by ID.
    #[inline]
    pub fn get_mut(&mut self, id: NodeId) -> &mut MctsNode<B> {
        &mut self.nodes[id.index()]
    }

    /// Allocate a new node and return its ID.
    pub fn allocate(&mut self, node: MctsNode<B>) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    /// Get the total number of nodes in the tree.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if tree is empty (should never be true after construction).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Get the arena slice for read access.
    #[inline]
    pub fn arena(&self) -> &[MctsNode<B>] {
        &self.nodes
    }

    /// Select the child of `node_id` with the highest UCT value.
    ///
    /// The node's own visit count is the parent count in the formula. Ties
    /// resolve to the earliest child, so selection is deterministic.
    pub fn select_child(&self, node_id: NodeId, exploration: f64) -> Option<NodeId> {
        let node = self.get(node_id);
        let parent_visits = node.visits;

        first_max(node.children.iter().map(|&id| {
            (id, self.get(id).uct_value(parent_visits, exploration))
        }))
    }

    /// Add a child to a parent node.
    /// Returns the new child's NodeId.
    pub fn add_child(&mut self, parent_id: NodeId, snapshot: B) -> NodeId {
        let child_id = self.allocate(MctsNode::new_child(parent_id, snapshot));
        self.get_mut(parent_id).children.push(child_id);
        child_id
    }

    /// Expand a node with one child per legal move, in legal-move order.
    /// Returns the number of children added.
    pub fn expand(&mut self, node_id: NodeId) -> usize {
        let moves = self.get(node_id).snapshot.legal_moves();
        let count = moves.len();
        for snapshot in moves {
            self.add_child(node_id, snapshot);
        }
        count
    }

    /// Backpropagate a simulation result from a node up to the root.
    pub fn backpropagate(&mut self, leaf_id: NodeId, winner: Option<Piece>) {
        let mut current_id = leaf_id;

        while current_id.is_some() {
            let node = self.get_mut(current_id);
            node.record_visit(winner);
            current_id = node.parent;
        }
    }

    /// Apply the forced-loss penalty to a node.
    pub fn apply_forced_loss(&mut self, node_id: NodeId) {
        self.get_mut(node_id).apply_forced_loss();
    }

    /// The root's child with the highest raw score.
    pub fn best_child(&self) -> Option<NodeId> {
        self.get(self.root).best_child_by_score(&self.nodes)
    }

    /// Get statistics about the tree for debugging.
    pub fn stats(&self) -> TreeStats {
        TreeStats {
            total_nodes: self.nodes.len(),
            root_visits: self.get(self.root).visits,
            max_depth: self.compute_max_depth(self.root, 0),
            forced_losses: self.nodes.iter().filter(|n| n.forced_loss).count(),
        }
    }

    fn compute_max_depth(&self, node_id: NodeId, current_depth: u32) -> u32 {
        let node = self.get(node_id);
        if node.children.is_empty() {
            return current_depth;
        }

        node.children
            .iter()
            .map(|id| self.compute_max_depth(*id, current_depth + 1))
            .max()
            .unwrap_or(current_depth)
    }
}

/// Statistics about an MCTS tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeStats {
    pub total_nodes: usize,
    pub root_visits: u32,
    pub max_depth: u32,
    /// Nodes that received the forced-loss penalty
    pub forced_losses: usize,
}
