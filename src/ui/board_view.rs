//! Board rendering and drag-and-drop input

use cozy_chess::{Board, Color, File, Piece, Rank, Square};
use egui::{Align2, CornerRadius, FontId, Painter, Pos2, Rect, Sense, Stroke, Vec2};
use tracing::warn;

use super::theme::*;
use crate::game::Event;
use crate::rules::Position;

/// Paints a position and turns drags into drop events
///
/// The view holds no game state. A rejected drop needs no special handling:
/// the next frame paints the unchanged position and the piece is back home.
pub struct BoardView {
    square_size: f32,
    board_rect: Rect,
    /// Square the dragged piece was lifted from
    dragging: Option<Square>,
    /// Last parsed position, so the FEN is not re-parsed every frame
    cached: Option<(Position, Option<Board>)>,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            square_size: 48.0,
            board_rect: Rect::NOTHING,
            dragging: None,
            cached: None,
        }
    }
}

impl BoardView {
    /// Render `position` and return a drop event if a drag ended on the board
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        position: &Position,
        highlight: Option<(Square, Square)>,
        interactive: bool,
        reviewing: bool,
    ) -> Option<Event> {
        let available = ui.available_size();
        let board_size = (available.x.min(available.y) - 20.0).max(BOARD_MIN_SIZE);
        self.square_size = (board_size - 2.0 * BOARD_MARGIN) / 8.0;

        let sense = if interactive { Sense::click_and_drag() } else { Sense::hover() };
        let (response, painter) = ui.allocate_painter(Vec2::splat(board_size), sense);
        self.board_rect = response.rect;

        let board = self.board_for(position);

        painter.rect_filled(self.board_rect, CornerRadius::same(CARD_ROUNDING), BOARD_BORDER);
        self.draw_squares(&painter);
        self.draw_coordinates(&painter);

        if let Some((from, to)) = highlight {
            painter.rect_filled(self.square_rect(from), CornerRadius::ZERO, last_move_highlight());
            painter.rect_filled(self.square_rect(to), CornerRadius::ZERO, last_move_highlight());
        }

        let dropped = if interactive {
            self.handle_drag(ui, &response, board.as_ref())
        } else {
            self.dragging = None;
            None
        };

        if let Some(board) = &board {
            self.draw_pieces(&painter, board);

            if let (Some(source), Some(pointer)) = (self.dragging, response.interact_pointer_pos()) {
                if let (Some(piece), Some(color)) = (board.piece_on(source), board.color_on(source)) {
                    self.draw_piece(&painter, pointer, piece, color);
                }
            }
        }

        if reviewing {
            painter.rect_filled(self.inner_rect(), CornerRadius::ZERO, review_tint());
        }

        dropped
    }

    fn handle_drag(&mut self, ui: &egui::Ui, response: &egui::Response, board: Option<&Board>) -> Option<Event> {
        if response.drag_started() {
            let origin = ui.input(|i| i.pointer.press_origin());
            self.dragging = origin
                .and_then(|pos| self.screen_to_square(pos))
                .filter(|&sq| board.is_some_and(|b| b.piece_on(sq).is_some()));
        }

        if response.drag_stopped() {
            let source = self.dragging.take()?;
            let target = ui
                .input(|i| i.pointer.latest_pos())
                .and_then(|pos| self.screen_to_square(pos))?;
            if source != target {
                return Some(Event::Drop { source, target });
            }
        }

        None
    }

    /// Parse the position once per change
    fn board_for(&mut self, position: &Position) -> Option<Board> {
        let stale = self
            .cached
            .as_ref()
            .map_or(true, |(cached, _)| cached != position);

        if stale {
            let board = position
                .to_board()
                .inspect_err(|err| warn!(%err, "Cannot draw position"))
                .ok();
            self.cached = Some((position.clone(), board));
        }

        self.cached.as_ref().and_then(|(_, board)| board.clone())
    }

    fn draw_squares(&self, painter: &Painter) {
        for sq in Square::ALL {
            let color = if is_light(sq) { LIGHT_SQUARE } else { DARK_SQUARE };
            painter.rect_filled(self.square_rect(sq), CornerRadius::ZERO, color);
        }
        if let Some(source) = self.dragging {
            painter.rect_filled(self.square_rect(source), CornerRadius::ZERO, drag_source_highlight());
        }
    }

    /// Draw file letters below the board and rank numbers on the left
    fn draw_coordinates(&self, painter: &Painter) {
        let font = FontId::proportional(12.0);

        for file in 0..8 {
            let x = self.board_rect.min.x + BOARD_MARGIN + (file as f32 + 0.5) * self.square_size;
            let y = self.board_rect.max.y - BOARD_MARGIN * 0.5;
            let letter = (b'a' + file as u8) as char;
            painter.text(Pos2::new(x, y), Align2::CENTER_CENTER, letter, font.clone(), TEXT_SECONDARY);
        }

        for rank in 0..8 {
            let x = self.board_rect.min.x + BOARD_MARGIN * 0.5;
            let y = self.board_rect.min.y + BOARD_MARGIN + (7.5 - rank as f32) * self.square_size;
            painter.text(Pos2::new(x, y), Align2::CENTER_CENTER, rank + 1, font.clone(), TEXT_SECONDARY);
        }
    }

    fn draw_pieces(&self, painter: &Painter, board: &Board) {
        for sq in Square::ALL {
            if self.dragging == Some(sq) {
                continue;
            }
            if let (Some(piece), Some(color)) = (board.piece_on(sq), board.color_on(sq)) {
                self.draw_piece(painter, self.square_rect(sq).center(), piece, color);
            }
        }
    }

    /// Draw a piece as a disc carrying its letter
    fn draw_piece(&self, painter: &Painter, center: Pos2, piece: Piece, color: Color) {
        let radius = self.square_size * PIECE_RADIUS_RATIO;
        let (fill, edge, text) = match color {
            Color::White => (WHITE_PIECE, WHITE_PIECE_EDGE, BLACK_PIECE),
            Color::Black => (BLACK_PIECE, BLACK_PIECE_EDGE, WHITE_PIECE),
        };

        // Shadow
        painter.circle_filled(
            center + Vec2::new(2.0, 2.0),
            radius,
            egui::Color32::from_rgba_unmultiplied(0, 0, 0, 60),
        );
        painter.circle_filled(center, radius, fill);
        painter.circle_stroke(center, radius, Stroke::new(radius * 0.08, edge));
        painter.text(
            center,
            Align2::CENTER_CENTER,
            piece_letter(piece),
            FontId::proportional(radius * 1.1),
            text,
        );
    }

    /// Playing area without the coordinate margin
    fn inner_rect(&self) -> Rect {
        Rect::from_min_size(
            self.board_rect.min + Vec2::splat(BOARD_MARGIN),
            Vec2::splat(self.square_size * 8.0),
        )
    }

    /// Screen rectangle of a square, White at the bottom
    pub fn square_rect(&self, sq: Square) -> Rect {
        let file = sq.file() as usize as f32;
        let row = 7.0 - sq.rank() as usize as f32;
        let min = self.board_rect.min
            + Vec2::new(BOARD_MARGIN + file * self.square_size, BOARD_MARGIN + row * self.square_size);
        Rect::from_min_size(min, Vec2::splat(self.square_size))
    }

    /// Square under a screen point
    pub fn screen_to_square(&self, pos: Pos2) -> Option<Square> {
        let relative = pos - self.board_rect.min - Vec2::splat(BOARD_MARGIN);
        let file = (relative.x / self.square_size).floor();
        let row = (relative.y / self.square_size).floor();

        if !(0.0..8.0).contains(&file) || !(0.0..8.0).contains(&row) {
            return None;
        }
        Some(Square::new(File::index(file as usize), Rank::index(7 - row as usize)))
    }
}

fn is_light(sq: Square) -> bool {
    (sq.file() as usize + sq.rank() as usize) % 2 == 1
}

fn piece_letter(piece: Piece) -> &'static str {
    match piece {
        Piece::Pawn => "P",
        Piece::Knight => "N",
        Piece::Bishop => "B",
        Piece::Rook => "R",
        Piece::Queen => "Q",
        Piece::King => "K",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view() -> BoardView {
        BoardView {
            square_size: 50.0,
            board_rect: Rect::from_min_size(Pos2::new(10.0, 10.0), Vec2::splat(BOARD_MARGIN * 2.0 + 400.0)),
            ..Default::default()
        }
    }

    #[test]
    fn test_white_at_bottom() {
        let view = view();
        let a1 = view.square_rect(Square::A1);
        let h8 = view.square_rect(Square::H8);

        assert_eq!(a1.min, Pos2::new(10.0 + BOARD_MARGIN, 10.0 + BOARD_MARGIN + 350.0));
        assert_eq!(h8.min, Pos2::new(10.0 + BOARD_MARGIN + 350.0, 10.0 + BOARD_MARGIN));
    }

    #[test]
    fn test_screen_round_trip() {
        let view = view();
        for sq in Square::ALL {
            assert_eq!(view.screen_to_square(view.square_rect(sq).center()), Some(sq));
        }
    }

    #[test]
    fn test_outside_board() {
        let view = view();
        assert_eq!(view.screen_to_square(Pos2::new(12.0, 12.0)), None);
        assert_eq!(view.screen_to_square(Pos2::new(10.0 + BOARD_MARGIN + 401.0, 200.0)), None);
    }

    #[test]
    fn test_square_colors() {
        assert!(!is_light(Square::A1));
        assert!(is_light(Square::H1));
        assert!(is_light(Square::A8));
        assert!(!is_light(Square::H8));
    }

    #[test]
    fn test_board_cache_follows_position() {
        let mut view = BoardView::default();
        assert!(view.board_for(&Position::start()).is_some());

        let mut engine = crate::rules::RulesEngine::new();
        engine.play(Square::E2, Square::E4, Piece::Queen).unwrap();
        let board = view.board_for(engine.position()).unwrap();
        assert_eq!(board.piece_on(Square::E4), Some(Piece::Pawn));
    }
}
