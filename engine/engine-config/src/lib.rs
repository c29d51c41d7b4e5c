//! Centralized configuration loading from config.toml.
//!
//! This crate provides configuration structs and loading logic shared
//! by the engine crates and the `actor` runner.
//!
//! # Configuration Priority
//!
//! Settings are loaded with the following priority (highest to lowest):
//! 1. Environment variables (`CONNECT4_<SECTION>_<KEY>`)
//! 2. config.toml file
//! 3. Built-in defaults (config.defaults.toml)
//!
//! # Environment Variable Override Pattern
//!
//! ```text
//! CONNECT4_<SECTION>_<KEY>=value
//!
//! Examples:
//!     CONNECT4_COMMON_LOG_LEVEL=debug
//!     CONNECT4_MCTS_ITERATIONS=8000
//!     CONNECT4_MCTS_EXPLORATION=1.0
//!     CONNECT4_ACTOR_OPPONENT=mcts
//!     CONNECT4_ACTOR_SEED=42
//! ```

mod defaults;
mod loader;
mod structs;

pub use defaults::*;
pub use loader::{apply_env_overrides, load_config, load_from_path, CONFIG_SEARCH_PATHS};
pub use structs::*;

#[cfg(test)]
mod tests;
