//! Playing a single game between two players

use anyhow::{Context, Result};
use engine_core::Piece;
use games_connect4::State;
use tracing::trace;

use crate::player::Player;

/// What happened in one finished game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameRecord {
    /// Winning piece, `None` for a draw
    pub winner: Option<Piece>,
    /// Columns played, Red's first move first
    pub moves: Vec<u8>,
    pub final_state: State,
}

impl GameRecord {
    pub fn len(&self) -> usize {
        self.moves.len()
    }
}

/// Play one game from the empty board until it is won or drawn.
///
/// A column the game rejects is an error: players are expected to offer
/// only legal moves.
pub fn play_game(red: &mut dyn Player, yellow: &mut dyn Player) -> Result<GameRecord> {
    let mut state = State::new();
    let mut moves = Vec::new();

    while !state.is_done() {
        let mover = state.side_to_move();
        let player: &mut dyn Player = match mover {
            Piece::Red => &mut *red,
            Piece::Yellow => &mut *yellow,
        };

        let column = player.choose_column(&state)?;
        state = state
            .drop_piece(column)
            .with_context(|| format!("{} ({}) played column {}", player.name(), mover, column))?;
        moves.push(column);

        trace!(ply = moves.len(), piece = %mover, column, "Move played");
    }

    Ok(GameRecord {
        winner: state.winner(),
        moves,
        final_state: state,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::RandomPlayer;
    use anyhow::anyhow;

    /// Plays a fixed list of columns, then fails.
    struct Scripted {
        columns: Vec<u8>,
        next: usize,
    }

    impl Scripted {
        fn new(columns: &[u8]) -> Self {
            Self {
                columns: columns.to_vec(),
                next: 0,
            }
        }
    }

    impl Player for Scripted {
        fn name(&self) -> &str {
            "scripted"
        }

        fn choose_column(&mut self, _state: &State) -> Result<u8> {
            let column = self
                .columns
                .get(self.next)
                .copied()
                .ok_or_else(|| anyhow!("script exhausted"))?;
            self.next += 1;
            Ok(column)
        }
    }

    #[test]
    fn scripted_game_records_winner_and_moves() {
        let mut red = Scripted::new(&[0, 0, 0, 0]);
        let mut yellow = Scripted::new(&[1, 1, 1]);

        let record = play_game(&mut red, &mut yellow).unwrap();

        assert_eq!(record.winner, Some(Piece::Red));
        assert_eq!(record.moves, vec![0, 1, 0, 1, 0, 1, 0]);
        assert_eq!(record.len(), 7);
        assert!(record.final_state.is_done());
    }

    #[test]
    fn illegal_column_is_an_error() {
        let mut red = Scripted::new(&[7]);
        let mut yellow = Scripted::new(&[]);

        let err = play_game(&mut red, &mut yellow).unwrap_err();
        let message = format!("{:#}", err);
        assert!(message.contains("scripted (Red) played column 7"));
        assert!(message.contains("out of range"));
    }

    #[test]
    fn player_errors_propagate() {
        let mut red = Scripted::new(&[3]);
        let mut yellow = Scripted::new(&[]);

        let err = play_game(&mut red, &mut yellow).unwrap_err();
        assert!(err.to_string().contains("script exhausted"));
    }

    #[test]
    fn random_games_always_finish() {
        for seed in 0..20 {
            let mut red = RandomPlayer::with_seed("red", seed);
            let mut yellow = RandomPlayer::with_seed("yellow", seed + 100);

            let record = play_game(&mut red, &mut yellow).unwrap();

            assert!(record.final_state.is_done());
            assert!(record.len() >= 7 && record.len() <= 42);
            assert_eq!(record.winner, record.final_state.winner());
            assert_eq!(
                State::from_moves(&record.moves).unwrap(),
                record.final_state
            );
        }
    }
}
