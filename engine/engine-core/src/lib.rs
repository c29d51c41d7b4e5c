//! Core types shared across the Connect Four workspace
//!
//! This crate defines the narrow contract between the search engine and the
//! game rules:
//! - `Piece`: the two players' tokens
//! - `BoardSnapshot`: an immutable position with legality queries, move
//!   application, terminal/winner detection and random move sampling

pub mod board;

pub use board::{BoardSnapshot, Piece};
