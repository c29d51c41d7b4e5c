//! Configuration for the match runner
//!
//! Configuration is loaded from config.toml with environment variable overrides.
//! CLI arguments take highest priority, followed by env vars, then config.toml.

use anyhow::{anyhow, Result};
use clap::Parser;
use engine_config::{load_config, CentralConfig};
use engine_core::Piece;
use mcts::MctsConfig;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use tracing::level_filters::LevelFilter;

// Load central config once at startup
static CENTRAL_CONFIG: Lazy<CentralConfig> = Lazy::new(load_config);

fn default_games() -> u32 {
    CENTRAL_CONFIG.actor.games
}

fn default_opponent() -> String {
    CENTRAL_CONFIG.actor.opponent.clone()
}

fn default_ai_piece() -> String {
    CENTRAL_CONFIG.actor.ai_piece.clone()
}

fn default_iterations() -> u32 {
    CENTRAL_CONFIG.mcts.iterations
}

fn default_exploration() -> f64 {
    CENTRAL_CONFIG.mcts.exploration
}

fn default_log_level() -> String {
    CENTRAL_CONFIG.common.log_level.clone()
}

fn default_log_interval() -> u32 {
    CENTRAL_CONFIG.actor.log_interval
}

/// Who sits across the board from the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpponentKind {
    Random,
    Mcts,
    Human,
}

/// Which piece the engine plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Seating {
    Fixed(Piece),
    /// Red in even-numbered games, Yellow in odd-numbered ones
    Alternate,
}

impl Seating {
    pub fn ai_piece(self, game_index: u32) -> Piece {
        match self {
            Seating::Fixed(piece) => piece,
            Seating::Alternate if game_index % 2 == 0 => Piece::Red,
            Seating::Alternate => Piece::Yellow,
        }
    }
}

#[derive(Parser, Debug, Clone, Serialize, Deserialize)]
#[command(name = "actor")]
#[command(about = "Connect Four match runner for the MCTS engine")]
#[command(
    long_about = "Plays a series of Connect Four games between the MCTS engine and a
random, MCTS or human opponent and reports the results.

Configuration is loaded from config.toml with environment variable overrides.
CLI arguments take highest priority."
)]
pub struct Config {
    /// Number of games to play
    #[arg(long, default_value_t = default_games())]
    pub games: u32,

    /// Opponent of the engine (random, mcts, human)
    #[arg(long, default_value_t = default_opponent())]
    pub opponent: String,

    /// Piece the engine plays (red, yellow, alternate)
    #[arg(long, default_value_t = default_ai_piece())]
    pub ai_piece: String,

    /// MCTS iterations per move
    #[arg(long, default_value_t = default_iterations())]
    pub iterations: u32,

    /// UCT exploration constant
    #[arg(long, default_value_t = default_exploration())]
    pub exploration: f64,

    /// RNG seed for reproducible matches (drawn from the OS when omitted)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Write a JSON match summary to this path
    #[arg(long)]
    pub stats_path: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value_t = default_log_level())]
    pub log_level: String,

    /// Log progress every N games (0 to disable)
    #[arg(long, default_value_t = default_log_interval())]
    pub log_interval: u32,
}

impl Config {
    /// Parse CLI arguments, filling `seed` and `stats_path` from the central
    /// config when the flags are absent.
    pub fn load() -> Self {
        let mut config = Config::parse();
        if config.seed.is_none() {
            config.seed = CENTRAL_CONFIG.actor.seed;
        }
        if config.stats_path.is_none() {
            config.stats_path = CENTRAL_CONFIG.actor.stats_path.clone();
        }
        config
    }

    pub fn validate(&self) -> Result<()> {
        if self.games == 0 {
            return Err(anyhow!("games must be greater than 0"));
        }

        self.opponent_kind()?;
        self.seating()?;
        self.mcts_config().validate()?;

        if self.log_level.parse::<LevelFilter>().is_err() {
            return Err(anyhow!(
                "invalid log level '{}', expected one of trace, debug, info, warn, error",
                self.log_level
            ));
        }

        Ok(())
    }

    pub fn opponent_kind(&self) -> Result<OpponentKind> {
        match self.opponent.to_ascii_lowercase().as_str() {
            "random" => Ok(OpponentKind::Random),
            "mcts" => Ok(OpponentKind::Mcts),
            "human" => Ok(OpponentKind::Human),
            other => Err(anyhow!(
                "unknown opponent '{}', expected one of random, mcts, human",
                other
            )),
        }
    }

    pub fn seating(&self) -> Result<Seating> {
        match self.ai_piece.to_ascii_lowercase().as_str() {
            "red" => Ok(Seating::Fixed(Piece::Red)),
            "yellow" => Ok(Seating::Fixed(Piece::Yellow)),
            "alternate" => Ok(Seating::Alternate),
            other => Err(anyhow!(
                "unknown ai_piece '{}', expected one of red, yellow, alternate",
                other
            )),
        }
    }

    pub fn mcts_config(&self) -> MctsConfig {
        MctsConfig::default()
            .with_iterations(self.iterations)
            .with_exploration(self.exploration)
    }
}
