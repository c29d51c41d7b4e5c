//! MCTS configuration parameters.

use crate::search::SearchError;
use crate::uct::EXPLORATION;

/// Iterations per search.
pub const DEFAULT_ITERATIONS: u32 = 4000;

/// Configuration for Monte Carlo Tree Search.
#[derive(Debug, Clone, PartialEq)]
pub struct MctsConfig {
    /// Number of select/expand/simulate/backpropagate iterations per search.
    /// The budget is fixed rather than time based so that a seeded search
    /// always does the same work.
    pub iterations: u32,

    /// Exploration constant C of the UCT formula.
    /// Higher values encourage exploration, lower values favor exploitation.
    pub exploration: f64,
}

impl Default for MctsConfig {
    fn default() -> Self {
        Self {
            iterations: DEFAULT_ITERATIONS,
            exploration: EXPLORATION,
        }
    }
}

impl MctsConfig {
    /// Create a fast config for testing.
    pub fn for_testing() -> Self {
        Self {
            iterations: 400,
            exploration: EXPLORATION,
        }
    }

    /// Builder pattern: set number of iterations.
    pub fn with_iterations(mut self, n: u32) -> Self {
        self.iterations = n;
        self
    }

    /// Builder pattern: set the UCT exploration constant.
    pub fn with_exploration(mut self, c: f64) -> Self {
        self.exploration = c;
        self
    }

    /// Reject budgets and constants the search cannot run with.
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.iterations == 0 {
            return Err(SearchError::InvalidConfig(
                "iterations must be greater than 0".to_string(),
            ));
        }
        if !self.exploration.is_finite() || self.exploration < 0.0 {
            return Err(SearchError::InvalidConfig(format!(
                "exploration must be a finite, non-negative number, got {}",
                self.exploration
            )));
        }
        Ok(())
    }
}
