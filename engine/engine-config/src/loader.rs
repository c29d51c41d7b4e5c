//! Configuration loading logic.
//!
//! Handles loading config from files and applying environment variable overrides.

use crate::CentralConfig;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Standard locations to search for config.toml
pub const CONFIG_SEARCH_PATHS: &[&str] = &[
    "config.toml",      // Current directory
    "../config.toml",   // Parent directory (when running from subdirectory)
    "/app/config.toml", // Docker container
];

/// Load the central configuration from config.toml.
///
/// Searches for config.toml in the following order:
/// 1. Path specified by CONNECT4_CONFIG environment variable
/// 2. Current directory (config.toml)
/// 3. Parent directory (../config.toml)
/// 4. Docker container path (/app/config.toml)
///
/// After loading, environment variable overrides are applied.
pub fn load_config() -> CentralConfig {
    if let Ok(path) = std::env::var("CONNECT4_CONFIG") {
        let path = PathBuf::from(&path);
        if path.exists() {
            info!("Loading config from CONNECT4_CONFIG: {}", path.display());
            return load_from_path(&path);
        }
        warn!(
            "CONNECT4_CONFIG={} not found, searching defaults",
            path.display()
        );
    }

    for path_str in CONFIG_SEARCH_PATHS {
        let path = Path::new(path_str);
        if path.exists() {
            info!("Loading config from {}", path.display());
            return load_from_path(path);
        }
    }

    debug!("No config.toml found, using built-in defaults");
    apply_env_overrides(CentralConfig::default())
}

/// Load configuration from a specific path.
///
/// A file that cannot be read or parsed is logged and replaced by the
/// built-in defaults; environment overrides apply either way.
pub fn load_from_path(path: &Path) -> CentralConfig {
    match std::fs::read_to_string(path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(config) => apply_env_overrides(config),
            Err(e) => {
                warn!("Failed to parse {}: {}, using defaults", path.display(), e);
                apply_env_overrides(CentralConfig::default())
            }
        },
        Err(e) => {
            warn!("Failed to read {}: {}, using defaults", path.display(), e);
            apply_env_overrides(CentralConfig::default())
        }
    }
}

macro_rules! env_override {
    // String field
    ($config:expr, $section:ident . $field:ident, $key:expr) => {
        if let Ok(v) = std::env::var($key) {
            $config.$section.$field = v;
        }
    };
    // Parseable field (u32, f64, etc.)
    ($config:expr, $section:ident . $field:ident, $key:expr, parse) => {
        if let Ok(v) = std::env::var($key) {
            match v.parse() {
                Ok(parsed) => $config.$section.$field = parsed,
                Err(_) => warn!("Ignoring {}={:?}: not a valid value", $key, v),
            }
        }
    };
    // Optional string field
    ($config:expr, $section:ident . $field:ident, $key:expr, optional) => {
        if let Ok(v) = std::env::var($key) {
            $config.$section.$field = Some(v);
        }
    };
    // Optional parseable field (Option<u64>, etc.)
    ($config:expr, $section:ident . $field:ident, $key:expr, optional_parse) => {
        if let Ok(v) = std::env::var($key) {
            match v.parse() {
                Ok(parsed) => $config.$section.$field = Some(parsed),
                Err(_) => warn!("Ignoring {}={:?}: not a valid value", $key, v),
            }
        }
    };
}

/// Apply environment variable overrides to a configuration.
///
/// Environment variables follow the pattern: CONNECT4_<SECTION>_<KEY>
pub fn apply_env_overrides(mut config: CentralConfig) -> CentralConfig {
    // Common
    env_override!(config, common.log_level, "CONNECT4_COMMON_LOG_LEVEL");

    // MCTS
    env_override!(config, mcts.iterations, "CONNECT4_MCTS_ITERATIONS", parse);
    env_override!(config, mcts.exploration, "CONNECT4_MCTS_EXPLORATION", parse);

    // Actor
    env_override!(config, actor.games, "CONNECT4_ACTOR_GAMES", parse);
    env_override!(config, actor.opponent, "CONNECT4_ACTOR_OPPONENT");
    env_override!(config, actor.ai_piece, "CONNECT4_ACTOR_AI_PIECE");
    env_override!(
        config,
        actor.log_interval,
        "CONNECT4_ACTOR_LOG_INTERVAL",
        parse
    );
    env_override!(config, actor.seed, "CONNECT4_ACTOR_SEED", optional_parse);
    env_override!(
        config,
        actor.stats_path,
        "CONNECT4_ACTOR_STATS_PATH",
        optional
    );

    config
}
