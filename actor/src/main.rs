//! Actor - Connect Four match runner
//!
//! Plays a series of games between the MCTS engine and a configurable
//! opponent:
//! 1. Loads settings from config.toml, `CONNECT4_*` variables and the CLI
//! 2. Seats the engine as Red, Yellow or alternately both
//! 3. Plays each game to a win or draw
//! 4. Logs progress and writes an optional JSON summary

use anyhow::Result;
use engine_core::Piece;
use rand::prelude::*;
use rand_chacha::ChaCha20Rng;
use std::io;
use std::path::Path;
use tracing::{info, warn};

mod config;
mod game;
mod player;
mod stats;

use crate::config::{Config, OpponentKind};
use crate::game::play_game;
use crate::player::{HumanPlayer, MctsPlayer, Player, RandomPlayer};
use crate::stats::MatchStats;

fn init_tracing(level: &str) -> Result<()> {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();

    Ok(())
}

fn build_opponent(config: &Config, kind: OpponentKind, rng: &mut ChaCha20Rng) -> Box<dyn Player> {
    let seed: u64 = rng.gen();
    match kind {
        OpponentKind::Random => Box::new(RandomPlayer::with_seed("random", seed)),
        OpponentKind::Mcts => Box::new(MctsPlayer::new(
            "mcts-opponent",
            config.mcts_config(),
            ChaCha20Rng::seed_from_u64(seed),
        )),
        OpponentKind::Human => Box::new(HumanPlayer::new(
            "human",
            io::stdin().lock(),
            io::stdout(),
        )),
    }
}

fn main() -> Result<()> {
    // Parse and validate configuration
    let config = Config::load();
    config.validate()?;

    init_tracing(&config.log_level)?;
    info!(log_level = %config.log_level, "Tracing initialized");

    let opponent_kind = config.opponent_kind()?;
    let seating = config.seating()?;

    let mut rng = match config.seed {
        Some(seed) => {
            info!(seed, "Using fixed seed");
            ChaCha20Rng::seed_from_u64(seed)
        }
        None => ChaCha20Rng::from_entropy(),
    };

    let mut ai = MctsPlayer::new(
        "mcts",
        config.mcts_config(),
        ChaCha20Rng::seed_from_u64(rng.gen()),
    );
    let mut opponent = build_opponent(&config, opponent_kind, &mut rng);

    info!(
        games = config.games,
        opponent = %config.opponent,
        ai_piece = %config.ai_piece,
        iterations = config.iterations,
        exploration = config.exploration,
        "Starting match"
    );

    let mut stats = MatchStats::new();

    for game_index in 0..config.games {
        let ai_piece = seating.ai_piece(game_index);
        let (red, yellow): (&mut dyn Player, &mut dyn Player) = match ai_piece {
            Piece::Red => (&mut ai as &mut dyn Player, opponent.as_mut()),
            Piece::Yellow => (opponent.as_mut(), &mut ai as &mut dyn Player),
        };

        let record = play_game(red, yellow)?;
        let (searches, search_time) = ai.take_search_stats();
        stats.record_searches(searches, search_time);
        stats.record_game(&record, ai_piece);

        let result = match record.winner {
            Some(winner) if winner == ai_piece => "engine win",
            Some(_) => "engine loss",
            None => "draw",
        };
        info!(
            game = game_index + 1,
            ai_piece = %ai_piece,
            moves = record.len(),
            result,
            "Game finished"
        );

        if opponent_kind == OpponentKind::Human {
            println!("\n{}\n\nResult: {}", record.final_state, result);
        }

        if config.log_interval > 0 && stats.games() % config.log_interval == 0 {
            let snapshot = stats.snapshot();
            info!(
                games = snapshot.games,
                ai_wins = snapshot.ai_wins,
                ai_losses = snapshot.ai_losses,
                draws = snapshot.draws,
                avg_game_length = snapshot.avg_game_length,
                avg_search_ms = snapshot.avg_search_ms,
                "Match progress"
            );
        }
    }

    let snapshot = stats.snapshot();
    println!(
        "Played {} games: engine won {}, lost {}, drew {} ({:.1}% wins)",
        snapshot.games,
        snapshot.ai_wins,
        snapshot.ai_losses,
        snapshot.draws,
        snapshot.ai_win_rate() * 100.0
    );
    println!(
        "Red won {}, Yellow won {}; {:.1} moves per game, {:.1} ms per search",
        snapshot.red_wins, snapshot.yellow_wins, snapshot.avg_game_length, snapshot.avg_search_ms
    );

    if let Some(path) = &config.stats_path {
        match stats.write_stats(Path::new(path)) {
            Ok(()) => info!(path = %path, "Match stats written"),
            Err(e) => warn!("Failed to write match stats: {:#}", e),
        }
    }

    Ok(())
}
