//! Monte Carlo Tree Search (MCTS) with UCT selection and random playouts.
//!
//! This crate provides a game-agnostic MCTS implementation that works with any
//! position implementing the `engine-core` [`BoardSnapshot`] trait.
//!
//! [`BoardSnapshot`]: engine_core::BoardSnapshot
//!
//! # Overview
//!
//! MCTS builds a search tree by running a fixed number of iterations.
//! Each iteration consists of four phases:
//!
//! 1. **Selection**: Traverse the tree using UCT (Upper Confidence Bound for
//!    Trees) to balance exploration and exploitation
//! 2. **Expansion**: When reaching a leaf, add one child per legal move and
//!    pick one of them at random
//! 3. **Simulation**: Play uniformly random moves from that child until the
//!    game ends
//! 4. **Backpropagation**: Walk back to the root, counting a visit on every
//!    node and a win on every node whose mover won the playout
//!
//! After the budget is spent, the root child with the highest raw win count is
//! played.
//!
//! A move that lets the opponent win on the very next ply is marked with a
//! forced-loss score ([`FORCED_LOSS_SCORE`]) as soon as that reply is seen,
//! which keeps the search from ever choosing it over a safe alternative.
//!
//! # Usage
//!
//! ```rust,ignore
//! use mcts::{MctsConfig, MctsEngine};
//! use games_connect4::State;
//!
//! let mut engine = MctsEngine::with_seed(MctsConfig::default(), 42);
//! let column = engine.search(&State::new()).unwrap();
//! println!("Best column: {}", column);
//! ```
//!
//! # Configuration
//!
//! The [`MctsConfig`] struct controls search behavior:
//!
//! - `iterations`: Number of iterations per search (default: 4000)
//! - `exploration`: Exploration constant C for UCT (default: 1.41)
//!
//! # Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────────┐
//! │                    MctsSearch                     │
//! ├───────────────────────────────────────────────────┤
//! │  ┌─────────────┐  ┌──────────────┐  ┌──────────┐  │
//! │  │  MctsTree   │  │BoardSnapshot │  │ChaCha20  │  │
//! │  │  (arena)    │  │ (game rules) │  │  (rng)   │  │
//! │  └──────┬──────┘  └──────┬───────┘  └────┬─────┘  │
//! │         ▼                ▼               ▼        │
//! │  ┌─────────────────────────────────────────────┐  │
//! │  │ select → expand → simulate → backpropagate  │  │
//! │  └─────────────────────────────────────────────┘  │
//! └───────────────────────────────────────────────────┘
//! ```

pub mod config;
pub mod node;
pub mod search;
pub mod tree;
pub mod uct;

// Re-export main types
pub use config::{MctsConfig, DEFAULT_ITERATIONS};
pub use node::{MctsNode, NodeId, FORCED_LOSS_SCORE};
pub use search::{run_mcts, ChildStats, MctsEngine, MctsSearch, SearchError, SearchResult};
pub use tree::{MctsTree, TreeStats};
pub use uct::{uct_value, EXPLORATION};
