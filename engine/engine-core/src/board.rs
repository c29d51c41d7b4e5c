//! Board contract consumed by the search engine
//!
//! A [`BoardSnapshot`] is an immutable position of a two-player, alternating
//! connection game. The search never mutates a snapshot; every move produces
//! a new value. Rules (legality, gravity, win detection) live entirely in the
//! implementing game crate.

use rand_chacha::ChaCha20Rng;
use std::fmt;

/// A player's token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Piece {
    /// Moves first
    Red,
    Yellow,
}

impl Piece {
    /// The other player's piece.
    #[inline]
    pub fn opponent(self) -> Piece {
        match self {
            Piece::Red => Piece::Yellow,
            Piece::Yellow => Piece::Red,
        }
    }

    /// Single-character symbol used when rendering boards.
    pub fn symbol(self) -> char {
        match self {
            Piece::Red => 'R',
            Piece::Yellow => 'Y',
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Piece::Red => f.write_str("Red"),
            Piece::Yellow => f.write_str("Yellow"),
        }
    }
}

/// Immutable position handed to the search.
///
/// Implementations must keep [`legal_moves`](BoardSnapshot::legal_moves) in a
/// stable order: the search attaches children in that order and breaks every
/// tie by it, so a different order changes which move is played.
///
/// Playouts call [`random_legal_next`](BoardSnapshot::random_legal_next) until
/// [`is_terminal`](BoardSnapshot::is_terminal) holds, so every line of play
/// must end in a bounded number of moves.
pub trait BoardSnapshot: Clone {
    /// True when the game is over (win or draw).
    fn is_terminal(&self) -> bool;

    /// The winning piece, or `None` for a draw or an unfinished game.
    fn winner(&self) -> Option<Piece>;

    /// One resulting position per legal column, in column order.
    ///
    /// Empty for terminal positions.
    fn legal_moves(&self) -> Vec<Self>;

    /// A uniformly sampled legal continuation.
    ///
    /// Returns `None` only when no legal move exists.
    fn random_legal_next(&self, rng: &mut ChaCha20Rng) -> Option<Self>;

    /// Column whose play produced this position, `None` for the initial board.
    fn producing_column(&self) -> Option<u8>;

    /// Piece that made the producing move, `None` for the initial board.
    fn producing_piece(&self) -> Option<Piece>;

    /// Piece whose turn it is.
    fn side_to_move(&self) -> Piece;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent() {
        assert_eq!(Piece::Red.opponent(), Piece::Yellow);
        assert_eq!(Piece::Yellow.opponent(), Piece::Red);
        assert_eq!(Piece::Red.opponent().opponent(), Piece::Red);
    }

    #[test]
    fn test_display() {
        assert_eq!(Piece::Red.to_string(), "Red");
        assert_eq!(Piece::Yellow.to_string(), "Yellow");
        assert_eq!(Piece::Red.symbol(), 'R');
        assert_eq!(Piece::Yellow.symbol(), 'Y');
    }
}
