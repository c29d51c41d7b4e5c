//! Default configuration values loaded from config.defaults.toml.
//!
//! The TOML file is embedded at compile time so a binary never depends on
//! the working directory for its defaults.

use once_cell::sync::Lazy;
use serde::Deserialize;

/// The embedded defaults TOML file (loaded at compile time)
const DEFAULTS_TOML: &str = include_str!("../../../config.defaults.toml");

/// Parsed defaults structure (parsed once at first use)
static DEFAULTS: Lazy<DefaultsConfig> = Lazy::new(|| {
    toml::from_str(DEFAULTS_TOML).expect("config.defaults.toml should be valid TOML")
});

// ============================================================================
// Internal structs for parsing config.defaults.toml
// ============================================================================

#[derive(Debug, Deserialize)]
struct DefaultsConfig {
    common: CommonDefaults,
    mcts: MctsDefaults,
    actor: ActorDefaults,
}

#[derive(Debug, Deserialize)]
struct CommonDefaults {
    log_level: String,
}

#[derive(Debug, Deserialize)]
struct MctsDefaults {
    iterations: u32,
    exploration: f64,
}

#[derive(Debug, Deserialize)]
struct ActorDefaults {
    games: u32,
    opponent: String,
    ai_piece: String,
    log_interval: u32,
}

// ============================================================================
// Public accessor functions
// ============================================================================

// Common
pub fn log_level() -> &'static str {
    &DEFAULTS.common.log_level
}

// MCTS
pub fn iterations() -> u32 {
    DEFAULTS.mcts.iterations
}
pub fn exploration() -> f64 {
    DEFAULTS.mcts.exploration
}

// Actor
pub fn games() -> u32 {
    DEFAULTS.actor.games
}
pub fn opponent() -> &'static str {
    &DEFAULTS.actor.opponent
}
pub fn ai_piece() -> &'static str {
    &DEFAULTS.actor.ai_piece
}
pub fn log_interval() -> u32 {
    DEFAULTS.actor.log_interval
}
