//! Chess board with clocks and move review
//!
//! A two-player chess board: pieces are moved by drag and drop, each side
//! has a countdown clock, and any earlier position can be brought back from
//! the move list without disturbing the game in progress.
//!
//! # Architecture
//!
//! - [`rules`]: chess rules via `cozy-chess`; board state, move records, FEN
//! - [`game`]: the session controller, clocks and history review
//! - [`config`]: game settings (clock allowance, promotion piece)
//! - [`ui`]: egui front end that dispatches input events to the controller
//!
//! # Quick Start
//!
//! ```
//! use chessboard::{GameController, GameConfig, Square};
//!
//! let mut game = GameController::new(GameConfig::default());
//! game.submit_move(Square::E2, Square::E4).unwrap();
//! game.submit_move(Square::E7, Square::E5).unwrap();
//!
//! // Look back at the position after White's first move
//! game.enter_review(0);
//! assert_eq!(game.history().len(), 2);
//!
//! // The next move returns to the live game
//! game.submit_move(Square::G1, Square::F3).unwrap();
//! assert!(!game.is_reviewing());
//! ```

pub mod config;
pub mod game;
pub mod rules;
pub mod ui;

// Re-export commonly used types for convenience
pub use config::GameConfig;
pub use game::{Clock, Event, GameController, GameOutcome, ReviewCursor};
pub use rules::{EngineError, MoveRecord, Position, RulesEngine, Square};
