//! Live game state backed by `cozy-chess`

use cozy_chess::{Board, Color, GameStatus, Move, Piece, Square};

use super::{DrawClaim, EngineError, MoveRecord, Position};

/// A chess game: the current board plus every move that led to it
///
/// One instance is the live game owned by the controller. Review mode builds
/// throwaway instances and replays recorded moves into them.
#[derive(Debug, Clone)]
pub struct RulesEngine {
    board: Board,
    position: Position,
    history: Vec<MoveRecord>,
    /// Zobrist hash after each ply, start position included
    hashes: Vec<u64>,
}

impl Default for RulesEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl RulesEngine {
    pub fn new() -> Self {
        Self::from_board(Board::default())
    }

    /// Start from an arbitrary position
    pub fn from_fen(fen: &str) -> Result<Self, EngineError> {
        let board = Board::from_fen(fen, false).map_err(|_| EngineError::InvalidPosition {
            fen: fen.to_string(),
        })?;
        Ok(Self::from_board(board))
    }

    fn from_board(board: Board) -> Self {
        Self {
            position: Position::from_board(&board),
            hashes: vec![board.hash()],
            history: Vec::new(),
            board,
        }
    }

    /// Back to the starting position with an empty history
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn position(&self) -> &Position {
        &self.position
    }

    #[inline]
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.board.side_to_move()
    }

    /// Game status: over only when the side to move has no legal move
    ///
    /// Repetition and the fifty-move rule are claims, not automatic ends;
    /// see [`RulesEngine::draw_claim`].
    pub fn status(&self) -> GameStatus {
        let has_move = self
            .board
            .generate_moves(|moves| moves.into_iter().next().is_some());

        if has_move {
            GameStatus::Ongoing
        } else if self.board.checkers().is_empty() {
            GameStatus::Drawn
        } else {
            GameStatus::Won
        }
    }

    /// Draw the side to move could claim, if any
    pub fn draw_claim(&self) -> Option<DrawClaim> {
        if self.board.halfmove_clock() >= 100 {
            return Some(DrawClaim::FiftyMoves);
        }

        let hash = self.board.hash();
        let repetitions = self
            .hashes
            .iter()
            .rev()
            .take(self.board.halfmove_clock() as usize + 1)
            .step_by(2)
            .filter(|&&h| h == hash)
            .count();

        (repetitions >= 3).then_some(DrawClaim::Repetition)
    }

    /// Find the legal move dragging `from` onto `to`
    ///
    /// Castling is matched by the king's destination square. Promotions only
    /// match the requested piece.
    pub fn find_move(&self, from: Square, to: Square, promotion: Piece) -> Option<Move> {
        let mut found = None;
        self.board.generate_moves_for(from.bitboard(), |moves| {
            for mv in moves {
                if mv.promotion.is_some() && mv.promotion != Some(promotion) {
                    continue;
                }
                let target = MoveRecord::describe(&self.board, mv).map(|record| record.to);
                if target == Some(to) {
                    found = Some(mv);
                    return true;
                }
            }
            false
        });
        found
    }

    /// Play a move by its origin and destination squares
    pub fn play(&mut self, from: Square, to: Square, promotion: Piece) -> Result<MoveRecord, EngineError> {
        if self.status() != GameStatus::Ongoing {
            return Err(EngineError::GameOver);
        }

        let mv = self
            .find_move(from, to, promotion)
            .ok_or(EngineError::IllegalMove { from, to })?;

        self.apply(mv)
    }

    /// Re-apply a move recorded by another instance
    pub fn replay(&mut self, record: &MoveRecord) -> Result<(), EngineError> {
        if !self.board.is_legal(record.mv) {
            return Err(EngineError::IllegalMove {
                from: record.from,
                to: record.to,
            });
        }
        self.apply(record.mv).map(|_| ())
    }

    fn apply(&mut self, mv: Move) -> Result<MoveRecord, EngineError> {
        let illegal = EngineError::IllegalMove { from: mv.from, to: mv.to };
        let record = MoveRecord::describe(&self.board, mv).ok_or(illegal.clone())?;

        self.board.try_play(mv).map_err(|_| illegal)?;
        self.position = Position::from_board(&self.board);
        self.hashes.push(self.board.hash());
        self.history.push(record.clone());

        Ok(record)
    }
}
