//! Move selection for each seat at the board

use anyhow::{anyhow, Context, Result};
use games_connect4::{State, COLS};
use mcts::{MctsConfig, MctsEngine};
use rand::prelude::*;
use rand_chacha::ChaCha20Rng;
use std::io::{BufRead, Write};
use std::time::{Duration, Instant};
use tracing::debug;

/// Something that can pick a column for the side to move.
pub trait Player {
    fn name(&self) -> &str;

    /// Choose a column for `state`, which is never finished.
    fn choose_column(&mut self, state: &State) -> Result<u8>;
}

/// Player backed by the MCTS engine.
///
/// Keeps a running total of search time so the runner can report the
/// average cost of a decision.
#[derive(Debug)]
pub struct MctsPlayer {
    name: String,
    engine: MctsEngine,
    searches: u64,
    search_time: Duration,
}

impl MctsPlayer {
    pub fn new(name: impl Into<String>, config: MctsConfig, rng: ChaCha20Rng) -> Self {
        Self {
            name: name.into(),
            engine: MctsEngine::new(config, rng),
            searches: 0,
            search_time: Duration::ZERO,
        }
    }

    /// Searches run and total time spent in them since the last call.
    pub fn take_search_stats(&mut self) -> (u64, Duration) {
        let stats = (self.searches, self.search_time);
        self.searches = 0;
        self.search_time = Duration::ZERO;
        stats
    }
}

impl Player for MctsPlayer {
    fn name(&self) -> &str {
        &self.name
    }

    fn choose_column(&mut self, state: &State) -> Result<u8> {
        let start = Instant::now();
        let result = self
            .engine
            .search_with_stats(state)
            .with_context(|| format!("{} failed to search", self.name))?;
        let elapsed = start.elapsed();

        self.searches += 1;
        self.search_time += elapsed;

        debug!(
            player = %self.name,
            column = result.column,
            tree_size = result.tree_size,
            elapsed_ms = elapsed.as_millis() as u64,
            "Search finished"
        );
        Ok(result.column)
    }
}

/// Player that drops into a uniformly random legal column.
#[derive(Debug)]
pub struct RandomPlayer {
    name: String,
    rng: ChaCha20Rng,
}

impl RandomPlayer {
    pub fn new(name: impl Into<String>, rng: ChaCha20Rng) -> Self {
        Self {
            name: name.into(),
            rng,
        }
    }

    pub fn with_seed(name: impl Into<String>, seed: u64) -> Self {
        Self::new(name, ChaCha20Rng::seed_from_u64(seed))
    }
}

impl Player for RandomPlayer {
    fn name(&self) -> &str {
        &self.name
    }

    fn choose_column(&mut self, state: &State) -> Result<u8> {
        state
            .legal_columns()
            .choose(&mut self.rng)
            .copied()
            .ok_or_else(|| anyhow!("no legal column for {}", self.name))
    }
}

/// Player that reads columns from a line-oriented input.
///
/// The board and a prompt are written to `output` before each read.
/// Unparsable or illegal input is reported and asked for again; end of
/// input is an error.
pub struct HumanPlayer<R, W> {
    name: String,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> HumanPlayer<R, W> {
    pub fn new(name: impl Into<String>, input: R, output: W) -> Self {
        Self {
            name: name.into(),
            input,
            output,
        }
    }

    fn prompt(&mut self, state: &State) -> Result<()> {
        writeln!(self.output, "\n{}\n", state)?;
        write!(
            self.output,
            "{} ({}) to move, column [0-{}]: ",
            self.name,
            state.side_to_move(),
            COLS - 1
        )?;
        self.output.flush()?;
        Ok(())
    }
}

impl<R: BufRead, W: Write> Player for HumanPlayer<R, W> {
    fn name(&self) -> &str {
        &self.name
    }

    fn choose_column(&mut self, state: &State) -> Result<u8> {
        loop {
            self.prompt(state)?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(anyhow!("input closed while waiting for {}", self.name));
            }

            let column = match line.trim().parse::<u8>() {
                Ok(column) => column,
                Err(_) => {
                    writeln!(self.output, "'{}' is not a column number", line.trim())?;
                    continue;
                }
            };

            match state.drop_piece(column) {
                Ok(_) => return Ok(column),
                Err(e) => writeln!(self.output, "{}", e)?,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn random_player_picks_legal_columns() {
        let mut player = RandomPlayer::with_seed("random", 3);
        // Columns 0 and 6 full
        let state = State::from_moves(&[0, 6, 0, 6, 0, 6, 6, 0, 6, 0, 6, 0]).unwrap();

        for _ in 0..50 {
            let column = player.choose_column(&state).unwrap();
            assert!(state.is_legal(column));
        }
    }

    #[test]
    fn random_player_is_deterministic_with_seed() {
        let mut a = RandomPlayer::with_seed("a", 11);
        let mut b = RandomPlayer::with_seed("b", 11);
        let state = State::new();

        for _ in 0..10 {
            assert_eq!(
                a.choose_column(&state).unwrap(),
                b.choose_column(&state).unwrap()
            );
        }
    }

    #[test]
    fn mcts_player_takes_winning_column() {
        let mut player = MctsPlayer::new(
            "mcts",
            MctsConfig::for_testing().with_iterations(2000),
            ChaCha20Rng::seed_from_u64(42),
        );
        let state = State::from_moves(&[0, 6, 1, 6, 2, 5]).unwrap();

        assert_eq!(player.choose_column(&state).unwrap(), 3);

        let (searches, _) = player.take_search_stats();
        assert_eq!(searches, 1);
        assert_eq!(player.take_search_stats().0, 0);
    }

    #[test]
    fn mcts_player_fails_on_finished_game() {
        let mut player = MctsPlayer::new(
            "mcts",
            MctsConfig::for_testing(),
            ChaCha20Rng::seed_from_u64(1),
        );
        let state = State::from_moves(&[0, 1, 0, 1, 0, 1, 0]).unwrap();

        let err = player.choose_column(&state).unwrap_err();
        assert!(err.to_string().contains("mcts failed to search"));
    }

    #[test]
    fn human_player_reads_column() {
        let mut output = Vec::new();
        let mut player = HumanPlayer::new("you", Cursor::new("4\n"), &mut output);

        assert_eq!(player.choose_column(&State::new()).unwrap(), 4);
        drop(player);

        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("you (Red) to move"));
    }

    #[test]
    fn human_player_reprompts_on_bad_input() {
        // Column 0 is full
        let state = State::from_moves(&[0, 0, 0, 0, 0, 0]).unwrap();
        let mut output = Vec::new();
        let mut player =
            HumanPlayer::new("you", Cursor::new("abc\n9\n0\n2\n"), &mut output);

        assert_eq!(player.choose_column(&state).unwrap(), 2);
        drop(player);

        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("'abc' is not a column number"));
        assert!(text.contains("out of range"));
        assert!(text.matches("to move").count() == 4);
    }

    #[test]
    fn human_player_errors_on_closed_input() {
        let mut player = HumanPlayer::new("you", Cursor::new(""), Vec::new());
        let err = player.choose_column(&State::new()).unwrap_err();
        assert!(err.to_string().contains("input closed"));
    }
}
