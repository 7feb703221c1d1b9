//! GUI module for the chess game
//!
//! This module provides a native Rust GUI using egui/eframe.

mod app;
mod board_view;
mod history_panel;
mod theme;

pub use app::ChessApp;
pub use board_view::BoardView;
