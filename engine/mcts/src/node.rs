//! MCTS tree node representation.
//!
//! Each node wraps the board position reached by one move from its parent and
//! the statistics gathered for it: how often a simulation passed through it,
//! and how many of those simulations were won by the piece that made the move.

use engine_core::{BoardSnapshot, Piece};

use crate::uct::{first_max, uct_value};

/// Score forced onto a node whose move lets the opponent win on the next ply.
///
/// It is far below anything reachable by normal accumulation, so UCT stops
/// choosing the node and [`MctsNode::best_child_by_score`] never returns it
/// while an unpenalized sibling exists.
pub const FORCED_LOSS_SCORE: i64 = i32::MIN as i64;

/// Index into the node arena. Using a newtype for type safety.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub u32);

impl NodeId {
    pub const NONE: NodeId = NodeId(u32::MAX);

    pub fn is_none(self) -> bool {
        self == Self::NONE
    }

    pub fn is_some(self) -> bool {
        !self.is_none()
    }

    #[inline]
    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

/// A node in the MCTS tree.
#[derive(Debug, Clone)]
pub struct MctsNode<B> {
    /// Parent node index (NONE for root)
    pub parent: NodeId,

    /// Position at this node
    pub snapshot: B,

    /// Number of simulations that passed through this node
    pub visits: u32,

    /// Simulations won by the piece that produced this node, or
    /// [`FORCED_LOSS_SCORE`] plus later wins once the node is penalized
    pub score: i64,

    /// Set once the forced-loss penalty has been applied
    pub forced_loss: bool,

    /// Children in legal-move order. Empty until the node is expanded.
    pub children: Vec<NodeId>,
}

impl<B: BoardSnapshot> MctsNode<B> {
    /// Create a new root node.
    pub fn new_root(snapshot: B) -> Self {
        Self::new_child(NodeId::NONE, snapshot)
    }

    /// Create a new child node.
    pub fn new_child(parent: NodeId, snapshot: B) -> Self {
        Self {
            parent,
            snapshot,
            visits: 0,
            score: 0,
            forced_loss: false,
            children: Vec::new(),
        }
    }

    /// Average score per visit, 0.0 if never visited.
    #[inline]
    pub fn mean_score(&self) -> f64 {
        if self.visits == 0 {
            0.0
        } else {
            self.score as f64 / self.visits as f64
        }
    }

    /// UCT value of this node as a child of a parent with `parent_visits`.
    #[inline]
    pub fn uct_value(&self, parent_visits: u32, exploration: f64) -> f64 {
        uct_value(parent_visits, self.score, self.visits, exploration)
    }

    /// Check if this node has been expanded (has children).
    #[inline]
    pub fn is_expanded(&self) -> bool {
        !self.children.is_empty()
    }

    /// One backpropagation step for a simulation won by `winner`.
    ///
    /// The node is credited only when its own producing piece won; a draw
    /// (`None`) credits nobody.
    pub fn record_visit(&mut self, winner: Option<Piece>) {
        self.visits += 1;
        if winner.is_some() && self.snapshot.producing_piece() == winner {
            self.score += 1;
        }
    }

    /// Force the score to [`FORCED_LOSS_SCORE`].
    ///
    /// Reapplied every time the losing reply is simulated, so wins credited
    /// in between are discarded.
    pub fn apply_forced_loss(&mut self) {
        self.score = FORCED_LOSS_SCORE;
        self.forced_loss = true;
    }

    /// The child with the highest raw score, first one on ties.
    /// Returns None if the node has no children.
    pub fn best_child_by_score(&self, arena: &[MctsNode<B>]) -> Option<NodeId> {
        first_max(
            self.children
                .iter()
                .map(|&id| (id, arena[id.index()].score)),
        )
    }
}
