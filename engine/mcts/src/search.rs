//! MCTS search implementation.
//!
//! Implements the core MCTS algorithm:
//! 1. Selection: Traverse tree using UCT to find a frontier node
//! 2. Expansion: Add one child per legal move and pick one at random
//! 3. Simulation: Play random moves from it until the game ends
//! 4. Backpropagation: Update statistics along the path to the root

use engine_core::{BoardSnapshot, Piece};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use thiserror::Error;
use tracing::{debug, trace};

use crate::config::MctsConfig;
use crate::node::NodeId;
use crate::tree::MctsTree;

/// Errors that can occur during MCTS search.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("No legal moves available")]
    NoLegalMoves,

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Invalid state: {0}")]
    InvalidState(String),
}

/// Statistics of one root child after a search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChildStats {
    /// Column whose play produced the child
    pub column: u8,
    pub visits: u32,
    pub score: i64,
    pub forced_loss: bool,
}

/// Result of an MCTS search.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    /// Column to play
    pub column: u8,

    /// Root children in legal-move order
    pub children: Vec<ChildStats>,

    /// Number of iterations performed
    pub iterations: u32,

    /// Nodes in the tree when the search finished
    pub tree_size: usize,
}

/// MCTS search state for a single move decision.
///
/// The tree lives only as long as this value; nothing carries over to the
/// next move.
pub struct MctsSearch<B> {
    tree: MctsTree<B>,
    config: MctsConfig,
    /// Piece the search is choosing a move for
    player: Piece,
}

impl<B: BoardSnapshot> MctsSearch<B> {
    /// Create a new MCTS search from the given position.
    ///
    /// Fails with [`SearchError::NoLegalMoves`] when the position is over or
    /// offers no move, so the search never has to invent a column.
    pub fn new(board: B, config: MctsConfig) -> Result<Self, SearchError> {
        config.validate()?;

        if board.is_terminal() || board.legal_moves().is_empty() {
            return Err(SearchError::NoLegalMoves);
        }

        let player = board.side_to_move();
        Ok(Self {
            tree: MctsTree::new(board),
            config,
            player,
        })
    }

    /// Run the search for the configured number of iterations.
    pub fn run(&mut self, rng: &mut ChaCha20Rng) -> Result<SearchResult, SearchError> {
        for _ in 0..self.config.iterations {
            self.iterate(rng)?;
        }

        let best_id = self.tree.best_child().ok_or(SearchError::NoLegalMoves)?;
        let best = self.tree.get(best_id);
        let column = column_of(&best.snapshot)?;

        let children = self
            .tree
            .get(self.tree.root())
            .children
            .iter()
            .map(|&id| {
                let node = self.tree.get(id);
                Ok(ChildStats {
                    column: column_of(&node.snapshot)?,
                    visits: node.visits,
                    score: node.score,
                    forced_loss: node.forced_loss,
                })
            })
            .collect::<Result<Vec<_>, SearchError>>()?;

        debug!(
            player = %self.player,
            column,
            score = best.score,
            visits = best.visits,
            tree_size = self.tree.len(),
            "MCTS search complete"
        );

        Ok(SearchResult {
            column,
            children,
            iterations: self.config.iterations,
            tree_size: self.tree.len(),
        })
    }

    /// Run a single iteration (select -> expand -> simulate -> backpropagate).
    fn iterate(&mut self, rng: &mut ChaCha20Rng) -> Result<(), SearchError> {
        let frontier = self.select();
        let leaf = self.expand(frontier, rng);
        let winner = self.simulate(leaf, rng)?;
        self.tree.backpropagate(leaf, winner);
        Ok(())
    }

    /// Descend from the root by UCT until reaching a node without children.
    fn select(&self) -> NodeId {
        let mut current = self.tree.root();

        while let Some(child_id) = self.tree.select_child(current, self.config.exploration) {
            current = child_id;
        }

        current
    }

    /// Expand a non-terminal frontier node and return a random new child.
    ///
    /// Terminal nodes are returned unchanged and simulated directly.
    fn expand(&mut self, node_id: NodeId, rng: &mut ChaCha20Rng) -> NodeId {
        if self.tree.get(node_id).snapshot.is_terminal() {
            return node_id;
        }

        let added = self.tree.expand(node_id);
        if added == 0 {
            return node_id;
        }

        let children = &self.tree.get(node_id).children;
        children[rng.gen_range(0..children.len())]
    }

    /// Play random moves from a node's position until the game ends.
    ///
    /// If the node's position is already a win for the opponent, its parent
    /// made a move that hands the opponent the game. The parent gets the
    /// forced-loss penalty and no playout is run.
    ///
    /// Playout positions are not added to the tree.
    fn simulate(
        &mut self,
        node_id: NodeId,
        rng: &mut ChaCha20Rng,
    ) -> Result<Option<Piece>, SearchError> {
        let node = self.tree.get(node_id);
        let opponent = self.player.opponent();

        if node.snapshot.winner() == Some(opponent) {
            let parent = node.parent;
            if parent.is_some() {
                trace!(node = node_id.0, parent = parent.0, "Opponent wins next ply");
                self.tree.apply_forced_loss(parent);
            }
            return Ok(Some(opponent));
        }

        let mut position = node.snapshot.clone();
        let mut depth = 0u32;
        while !position.is_terminal() {
            position = position.random_legal_next(rng).ok_or_else(|| {
                SearchError::InvalidState(format!(
                    "non-terminal position without legal moves after {depth} playout moves"
                ))
            })?;
            depth += 1;
        }

        let winner = position.winner();
        trace!(node = node_id.0, depth, ?winner, "Playout complete");
        Ok(winner)
    }

    /// Get the search tree (for inspection/debugging).
    pub fn tree(&self) -> &MctsTree<B> {
        &self.tree
    }

    /// Piece the search is choosing a move for.
    pub fn player(&self) -> Piece {
        self.player
    }
}

fn column_of<B: BoardSnapshot>(snapshot: &B) -> Result<u8, SearchError> {
    snapshot
        .producing_column()
        .ok_or_else(|| SearchError::InvalidState("child position has no producing column".into()))
}

/// Convenience function to run a single MCTS search.
pub fn run_mcts<B: BoardSnapshot>(
    board: B,
    config: MctsConfig,
    rng: &mut ChaCha20Rng,
) -> Result<SearchResult, SearchError> {
    let mut search = MctsSearch::new(board, config)?;
    search.run(rng)
}

/// Move picker owning its configuration and random source.
///
/// One generator serves every search the engine runs, so a seeded engine
/// replays the same sequence of decisions.
#[derive(Debug, Clone)]
pub struct MctsEngine {
    config: MctsConfig,
    rng: ChaCha20Rng,
}

impl MctsEngine {
    pub fn new(config: MctsConfig, rng: ChaCha20Rng) -> Self {
        Self { config, rng }
    }

    /// Create an engine with a deterministic random source.
    pub fn with_seed(config: MctsConfig, seed: u64) -> Self {
        Self::new(config, ChaCha20Rng::seed_from_u64(seed))
    }

    pub fn config(&self) -> &MctsConfig {
        &self.config
    }

    /// Pick the column to play in `board`.
    pub fn search<B: BoardSnapshot>(&mut self, board: &B) -> Result<u8, SearchError> {
        self.search_with_stats(board).map(|result| result.column)
    }

    /// Pick the column to play and return the root statistics with it.
    pub fn search_with_stats<B: BoardSnapshot>(
        &mut self,
        board: &B,
    ) -> Result<SearchResult, SearchError> {
        run_mcts(board.clone(), self.config.clone(), &mut self.rng)
    }
}
