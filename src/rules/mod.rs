//! Chess rules layer
//!
//! Legality, board representation and game status all come from
//! `cozy-chess`. This module wraps it in the shape the game controller needs:
//! - [`RulesEngine`]: a board plus the moves that produced it
//! - [`MoveRecord`]: one accepted move, in board-facing notation
//! - [`Position`]: the FEN serialization handed to the renderer

pub mod engine;
pub mod record;

#[cfg(test)]
mod tests;

use std::fmt;

pub use cozy_chess::{Color, GameStatus, Piece, Square};
pub use engine::RulesEngine;
pub use record::{MoveKind, MoveRecord};

/// FEN of the standard starting position
pub const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Serialized board state (FEN)
///
/// Only the rules engine produces positions; everything else treats them as
/// opaque values to compare and display.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Position(String);

impl Position {
    pub(crate) fn from_board(board: &cozy_chess::Board) -> Self {
        Self(board.to_string())
    }

    /// The standard starting position
    pub fn start() -> Self {
        Self(START_FEN.to_string())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Parse back into a board for painting
    pub fn to_board(&self) -> Result<cozy_chess::Board, EngineError> {
        cozy_chess::Board::from_fen(&self.0, false).map_err(|_| EngineError::InvalidPosition {
            fen: self.0.clone(),
        })
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Errors reported by the rules engine
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    /// The move is not legal in the current position
    #[error("Illegal move: {from} -> {to}")]
    IllegalMove { from: Square, to: Square },

    /// The game has already finished
    #[error("Game is over")]
    GameOver,

    /// A serialized position could not be parsed
    #[error("Invalid position: {fen}")]
    InvalidPosition { fen: String },
}

/// A draw that may be claimed but does not end the game by itself
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawClaim {
    /// Same position three times with the same side to move
    Repetition,
    /// Fifty moves by each side without a capture or pawn move
    FiftyMoves,
}

impl DrawClaim {
    pub fn describe(&self) -> &'static str {
        match self {
            DrawClaim::Repetition => "Threefold repetition: draw can be claimed",
            DrawClaim::FiftyMoves => "Fifty-move rule: draw can be claimed",
        }
    }
}

/// Human-readable side name
pub fn color_name(color: Color) -> &'static str {
    match color {
        Color::White => "White",
        Color::Black => "Black",
    }
}
