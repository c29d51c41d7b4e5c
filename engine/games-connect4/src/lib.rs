//! Connect 4 rules for the search engine
//!
//! Connect 4 is a two-player connection game where players drop colored discs
//! into a 7-column, 6-row vertically suspended grid. The objective is to be
//! the first to form a horizontal, vertical, or diagonal line of four discs.
//!
//! # Board Layout
//!
//! The board is stored in row-major order, with row 0 at the bottom:
//! ```text
//! Row 5: [35][36][37][38][39][40][41]  <- Top
//! Row 4: [28][29][30][31][32][33][34]
//! Row 3: [21][22][23][24][25][26][27]
//! Row 2: [14][15][16][17][18][19][20]
//! Row 1: [ 7][ 8][ 9][10][11][12][13]
//! Row 0: [ 0][ 1][ 2][ 3][ 4][ 5][ 6]  <- Bottom
//!         Col 0  1  2  3  4  5  6
//! ```
//!
//! # Usage
//!
//! ```rust
//! use engine_core::{BoardSnapshot, Piece};
//! use games_connect4::State;
//!
//! let state = State::from_moves(&[3, 3, 4]).unwrap();
//! assert_eq!(state.side_to_move(), Piece::Yellow);
//! assert_eq!(state.producing_column(), Some(4));
//! assert_eq!(state.legal_moves().len(), 7);
//! ```

use engine_core::{BoardSnapshot, Piece};
use rand::Rng;
use rand_chacha::ChaCha20Rng;
use std::fmt;
use thiserror::Error;

/// Board dimensions
pub const COLS: usize = 7;
pub const ROWS: usize = 6;
pub const BOARD_SIZE: usize = COLS * ROWS; // 42

/// Number of discs in a row needed to win.
pub const CONNECT: usize = 4;

/// Errors raised when applying a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("Column {0} is out of range (0-{})", COLS - 1)]
    ColumnOutOfRange(u8),

    #[error("Column {0} is full")]
    ColumnFull(u8),

    #[error("Game is already over")]
    GameOver,
}

/// How a position stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Ongoing,
    Win(Piece),
    Draw,
}

/// Connect4 game state
///
/// Represents the complete position: the board, the side to move, the
/// outcome so far and the move that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct State {
    /// Stored in row-major order with row 0 at the bottom
    board: [Option<Piece>; BOARD_SIZE],
    side_to_move: Piece,
    outcome: Outcome,
    /// Number of discs in each column (0-6)
    column_heights: [u8; COLS],
    /// Column and piece of the move that produced this position
    last_move: Option<(u8, Piece)>,
}

impl State {
    /// Create the empty starting position (Red to move)
    pub fn new() -> Self {
        Self {
            board: [None; BOARD_SIZE],
            side_to_move: Piece::Red,
            outcome: Outcome::Ongoing,
            column_heights: [0; COLS],
            last_move: None,
        }
    }

    /// Play a sequence of columns from the starting position.
    pub fn from_moves(columns: &[u8]) -> Result<Self, MoveError> {
        columns
            .iter()
            .try_fold(Self::new(), |state, &col| state.drop_piece(col))
    }

    /// Check if the game is over
    pub fn is_done(&self) -> bool {
        self.outcome != Outcome::Ongoing
    }

    pub fn is_draw(&self) -> bool {
        self.outcome == Outcome::Draw
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// The winning piece, if any.
    pub fn winner(&self) -> Option<Piece> {
        match self.outcome {
            Outcome::Win(piece) => Some(piece),
            Outcome::Ongoing | Outcome::Draw => None,
        }
    }

    pub fn side_to_move(&self) -> Piece {
        self.side_to_move
    }

    /// Column and piece of the move that produced this position.
    pub fn last_move(&self) -> Option<(u8, Piece)> {
        self.last_move
    }

    /// Piece at (col, row), row 0 being the bottom.
    pub fn cell(&self, col: usize, row: usize) -> Option<Piece> {
        if col >= COLS || row >= ROWS {
            return None;
        }
        self.board[Self::pos(col, row)]
    }

    pub fn moves_played(&self) -> usize {
        self.column_heights.iter().map(|&h| h as usize).sum()
    }

    /// Whether a disc can be dropped in `column`.
    pub fn is_legal(&self, column: u8) -> bool {
        !self.is_done()
            && (column as usize) < COLS
            && self.column_heights[column as usize] < ROWS as u8
    }

    /// Get legal moves (columns that are not full), in ascending order
    pub fn legal_columns(&self) -> Vec<u8> {
        if self.is_done() {
            return Vec::new();
        }

        (0..COLS as u8)
            .filter(|&col| self.column_heights[col as usize] < ROWS as u8)
            .collect()
    }

    /// Bit-mask representation of legal moves.
    ///
    /// Bits 0-6 correspond to columns 0-6. A bit set to 1 indicates the
    /// column is not full and a piece can be dropped there.
    pub fn legal_moves_mask(&self) -> u8 {
        if self.is_done() {
            return 0;
        }

        self.column_heights
            .iter()
            .enumerate()
            .fold(0u8, |mask, (col, &height)| {
                if height < ROWS as u8 {
                    mask | (1u8 << col)
                } else {
                    mask
                }
            })
    }

    /// Convert column and row to board index
    #[inline]
    fn pos(col: usize, row: usize) -> usize {
        row * COLS + col
    }

    /// Drop the side-to-move's piece in `column` and return the new state
    pub fn drop_piece(&self, column: u8) -> Result<State, MoveError> {
        if self.is_done() {
            return Err(MoveError::GameOver);
        }
        let col = column as usize;
        if col >= COLS {
            return Err(MoveError::ColumnOutOfRange(column));
        }
        if self.column_heights[col] >= ROWS as u8 {
            return Err(MoveError::ColumnFull(column));
        }

        let mut next = self.clone();
        let row = self.column_heights[col] as usize;
        let piece = self.side_to_move;

        next.board[Self::pos(col, row)] = Some(piece);
        next.column_heights[col] += 1;
        next.last_move = Some((column, piece));
        next.outcome = next.outcome_after(col, row);

        if next.outcome == Outcome::Ongoing {
            next.side_to_move = piece.opponent();
        }

        Ok(next)
    }

    /// Outcome once the disc at (col, row) has been placed
    fn outcome_after(&self, col: usize, row: usize) -> Outcome {
        let Some(player) = self.board[Self::pos(col, row)] else {
            return Outcome::Ongoing;
        };

        // Direction vectors: horizontal, vertical, diagonal /, diagonal \
        let directions: [(i32, i32); 4] = [(1, 0), (0, 1), (1, 1), (1, -1)];

        for (dc, dr) in directions {
            let count = 1
                + self.run_length(col, row, dc, dr, player)
                + self.run_length(col, row, -dc, -dr, player);

            if count >= CONNECT {
                return Outcome::Win(player);
            }
        }

        if self.column_heights.iter().all(|&h| h >= ROWS as u8) {
            return Outcome::Draw;
        }

        Outcome::Ongoing
    }

    /// Count consecutive `player` discs from (col, row), exclusive, along (dc, dr)
    fn run_length(&self, col: usize, row: usize, dc: i32, dr: i32, player: Piece) -> usize {
        let mut count = 0;
        let (mut c, mut r) = (col as i32 + dc, row as i32 + dr);
        while c >= 0 && c < COLS as i32 && r >= 0 && r < ROWS as i32 {
            if self.board[Self::pos(c as usize, r as usize)] != Some(player) {
                break;
            }
            count += 1;
            c += dc;
            r += dr;
        }
        count
    }
}

impl Default for State {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..ROWS).rev() {
            for col in 0..COLS {
                let symbol = self.board[Self::pos(col, row)].map_or('.', Piece::symbol);
                if col > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{symbol}")?;
            }
            writeln!(f)?;
        }
        for col in 0..COLS {
            if col > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{col}")?;
        }
        Ok(())
    }
}

impl BoardSnapshot for State {
    fn is_terminal(&self) -> bool {
        self.is_done()
    }

    fn winner(&self) -> Option<Piece> {
        State::winner(self)
    }

    fn legal_moves(&self) -> Vec<Self> {
        self.legal_columns()
            .into_iter()
            .filter_map(|col| self.drop_piece(col).ok())
            .collect()
    }

    fn random_legal_next(&self, rng: &mut ChaCha20Rng) -> Option<Self> {
        let legal = self.legal_columns();
        if legal.is_empty() {
            return None;
        }
        let col = legal[rng.gen_range(0..legal.len())];
        self.drop_piece(col).ok()
    }

    fn producing_column(&self) -> Option<u8> {
        self.last_move.map(|(col, _)| col)
    }

    fn producing_piece(&self) -> Option<Piece> {
        self.last_move.map(|(_, piece)| piece)
    }

    fn side_to_move(&self) -> Piece {
        self.side_to_move
    }
}
