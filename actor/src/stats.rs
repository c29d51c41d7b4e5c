//! Match statistics tracking and persistence.
//!
//! Tracks outcomes per piece and from the engine's side of the board, game
//! lengths and time spent searching. A snapshot can be written as JSON for
//! later comparison between engine settings.

use anyhow::{Context, Result};
use engine_core::Piece;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::Path;
use std::time::{Duration, Instant};
use tracing::debug;

use crate::game::GameRecord;

/// Running totals for a series of games.
#[derive(Debug)]
pub struct MatchStats {
    games: u32,
    red_wins: u32,
    yellow_wins: u32,
    draws: u32,
    ai_wins: u32,
    ai_losses: u32,
    total_moves: u64,
    searches: u64,
    search_time: Duration,
    start_time: Instant,
}

/// Serializable stats for JSON output.
#[derive(Debug, Serialize, Deserialize)]
pub struct MatchStatsSnapshot {
    pub games: u32,
    pub red_wins: u32,
    pub yellow_wins: u32,
    pub draws: u32,
    pub ai_wins: u32,
    pub ai_losses: u32,
    pub total_moves: u64,
    pub avg_game_length: f64,
    pub avg_search_ms: f64,
    pub runtime_seconds: f64,
    pub timestamp: u64,
}

impl Default for MatchStats {
    fn default() -> Self {
        Self::new()
    }
}

impl MatchStats {
    pub fn new() -> Self {
        Self {
            games: 0,
            red_wins: 0,
            yellow_wins: 0,
            draws: 0,
            ai_wins: 0,
            ai_losses: 0,
            total_moves: 0,
            searches: 0,
            search_time: Duration::ZERO,
            start_time: Instant::now(),
        }
    }

    /// Record a finished game in which the engine played `ai_piece`.
    pub fn record_game(&mut self, record: &GameRecord, ai_piece: Piece) {
        self.games += 1;
        self.total_moves += record.len() as u64;

        match record.winner {
            Some(Piece::Red) => self.red_wins += 1,
            Some(Piece::Yellow) => self.yellow_wins += 1,
            None => self.draws += 1,
        }

        match record.winner {
            Some(winner) if winner == ai_piece => self.ai_wins += 1,
            Some(_) => self.ai_losses += 1,
            None => {}
        }
    }

    /// Record engine searches and the time they took.
    pub fn record_searches(&mut self, searches: u64, elapsed: Duration) {
        self.searches += searches;
        self.search_time += elapsed;
    }

    pub fn games(&self) -> u32 {
        self.games
    }

    /// Get a snapshot of current stats.
    pub fn snapshot(&self) -> MatchStatsSnapshot {
        let avg_game_length = if self.games > 0 {
            self.total_moves as f64 / self.games as f64
        } else {
            0.0
        };

        let avg_search_ms = if self.searches > 0 {
            self.search_time.as_secs_f64() * 1000.0 / self.searches as f64
        } else {
            0.0
        };

        MatchStatsSnapshot {
            games: self.games,
            red_wins: self.red_wins,
            yellow_wins: self.yellow_wins,
            draws: self.draws,
            ai_wins: self.ai_wins,
            ai_losses: self.ai_losses,
            total_moves: self.total_moves,
            avg_game_length,
            avg_search_ms,
            runtime_seconds: self.start_time.elapsed().as_secs_f64(),
            timestamp: std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.as_secs())
                .unwrap_or(0),
        }
    }

    /// Write stats to a JSON file (atomic write-then-rename).
    pub fn write_stats(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.snapshot())
            .context("Failed to serialize match stats")?;

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }

        let mut temp_name = path.as_os_str().to_owned();
        temp_name.push(".tmp");
        let temp_path = Path::new(&temp_name);

        let mut file = fs::File::create(temp_path)
            .with_context(|| format!("Failed to create {}", temp_path.display()))?;
        file.write_all(json.as_bytes())
            .with_context(|| format!("Failed to write {}", temp_path.display()))?;
        drop(file);

        if let Err(e) = fs::rename(temp_path, path) {
            let _ = fs::remove_file(temp_path);
            return Err(e)
                .with_context(|| format!("Failed to rename stats file to {}", path.display()));
        }

        debug!("Wrote match stats to {}", path.display());
        Ok(())
    }
}

impl MatchStatsSnapshot {
    /// Fraction of games the engine won, 0.0 before any game.
    pub fn ai_win_rate(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            self.ai_wins as f64 / self.games as f64
        }
    }
}
