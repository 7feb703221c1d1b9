//! Theme constants for the chess GUI

use egui::Color32;

// Board squares
pub const LIGHT_SQUARE: Color32 = Color32::from_rgb(238, 238, 210);
pub const DARK_SQUARE: Color32 = Color32::from_rgb(118, 150, 86);
pub const BOARD_BORDER: Color32 = Color32::from_rgb(34, 34, 34);

// Pieces
pub const WHITE_PIECE: Color32 = Color32::from_rgb(250, 250, 252);
pub const WHITE_PIECE_EDGE: Color32 = Color32::from_rgb(120, 120, 125);
pub const BLACK_PIECE: Color32 = Color32::from_rgb(30, 30, 34);
pub const BLACK_PIECE_EDGE: Color32 = Color32::from_rgb(10, 10, 12);

// Markers
pub fn last_move_highlight() -> Color32 {
    Color32::from_rgba_unmultiplied(255, 235, 59, 90)
}

pub fn drag_source_highlight() -> Color32 {
    Color32::from_rgba_unmultiplied(255, 255, 255, 60)
}

pub fn review_tint() -> Color32 {
    Color32::from_rgba_unmultiplied(20, 40, 80, 40)
}

// Panels
pub const PAGE_BG: Color32 = Color32::from_rgb(47, 47, 47);
pub const CARD_BG: Color32 = Color32::from_rgb(31, 31, 31);
pub const ROW_SELECTED: Color32 = Color32::from_rgb(21, 128, 61);
pub const BUTTON_PRIMARY: Color32 = Color32::from_rgb(22, 163, 74);

pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 165, 175);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 125, 135);

// Clock colors
pub const TIMER_NORMAL: Color32 = Color32::from_rgb(80, 200, 120);
pub const TIMER_WARNING: Color32 = Color32::from_rgb(255, 180, 50);
pub const TIMER_CRITICAL: Color32 = Color32::from_rgb(255, 70, 70);
pub const TIMER_IDLE: Color32 = TEXT_SECONDARY;

pub const GAME_OVER: Color32 = Color32::from_rgb(50, 220, 50);

// Sizes
pub const BOARD_MARGIN: f32 = 24.0;
pub const BOARD_MIN_SIZE: f32 = 320.0;
pub const PIECE_RADIUS_RATIO: f32 = 0.38;
pub const CARD_ROUNDING: u8 = 8;
