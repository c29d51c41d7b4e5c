//! Configuration struct definitions.
//!
//! All config structs with serde deserialization support and default values.

use crate::defaults;
use serde::Deserialize;

// ============================================================================
// Serde default functions (required for #[serde(default = "...")])
// ============================================================================

fn d_log_level() -> String {
    defaults::log_level().into()
}
fn d_iterations() -> u32 {
    defaults::iterations()
}
fn d_exploration() -> f64 {
    defaults::exploration()
}
fn d_games() -> u32 {
    defaults::games()
}
fn d_opponent() -> String {
    defaults::opponent().into()
}
fn d_ai_piece() -> String {
    defaults::ai_piece().into()
}
fn d_log_interval() -> u32 {
    defaults::log_interval()
}

// ============================================================================
// Configuration Structs
// ============================================================================

/// Root configuration structure matching config.toml
#[derive(Debug, Deserialize, Default, Clone)]
pub struct CentralConfig {
    #[serde(default)]
    pub common: CommonConfig,
    #[serde(default)]
    pub mcts: MctsConfig,
    #[serde(default)]
    pub actor: ActorConfig,
}

/// Settings shared by all components
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct CommonConfig {
    #[serde(default = "d_log_level")]
    pub log_level: String,
}

impl Default for CommonConfig {
    fn default() -> Self {
        Self {
            log_level: defaults::log_level().into(),
        }
    }
}

/// Search budget and UCT tuning
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct MctsConfig {
    #[serde(default = "d_iterations")]
    pub iterations: u32,
    #[serde(default = "d_exploration")]
    pub exploration: f64,
}

impl Default for MctsConfig {
    fn default() -> Self {
        Self {
            iterations: defaults::iterations(),
            exploration: defaults::exploration(),
        }
    }
}

/// Match runner configuration
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ActorConfig {
    #[serde(default = "d_games")]
    pub games: u32,
    #[serde(default = "d_opponent")]
    pub opponent: String,
    #[serde(default = "d_ai_piece")]
    pub ai_piece: String,
    #[serde(default = "d_log_interval")]
    pub log_interval: u32,
    /// Fixed RNG seed; drawn from the OS when absent
    #[serde(default)]
    pub seed: Option<u64>,
    /// Where to write the JSON match summary, if anywhere
    #[serde(default)]
    pub stats_path: Option<String>,
}

impl Default for ActorConfig {
    fn default() -> Self {
        Self {
            games: defaults::games(),
            opponent: defaults::opponent().into(),
            ai_piece: defaults::ai_piece().into(),
            log_interval: defaults::log_interval(),
            seed: None,
            stats_path: None,
        }
    }
}
