//! Accepted moves as stored in the game history

use cozy_chess::{Board, Color, File, Move, Piece, Square};
use std::fmt;

/// What kind of move was played
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveKind {
    Normal,
    DoublePush,
    EnPassant,
    CastleKingside,
    CastleQueenside,
}

/// One accepted move
///
/// `from`/`to` are what the player dragged: castling is the king's
/// two-square step (`e1 -> g1`), not the king-takes-rook form `cozy-chess`
/// uses internally. `mv` keeps the engine's own move for replaying.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveRecord {
    pub from: Square,
    pub to: Square,
    pub piece: Piece,
    pub color: Color,
    pub captured: Option<Piece>,
    pub promotion: Option<Piece>,
    pub kind: MoveKind,
    pub mv: Move,
}

impl MoveRecord {
    /// Describe `mv` as played on `board` (the position before the move)
    ///
    /// Returns `None` if there is no piece on the origin square.
    pub(crate) fn describe(board: &Board, mv: Move) -> Option<Self> {
        let piece = board.piece_on(mv.from)?;
        let color = board.color_on(mv.from)?;

        let mut to = mv.to;
        let mut captured = board.piece_on(mv.to);
        let mut kind = MoveKind::Normal;

        match piece {
            Piece::King if board.color_on(mv.to) == Some(color) => {
                // King onto its own rook: castling
                captured = None;
                let (file, castle) = if mv.to.file() as u8 > mv.from.file() as u8 {
                    (File::G, MoveKind::CastleKingside)
                } else {
                    (File::C, MoveKind::CastleQueenside)
                };
                to = Square::new(file, mv.from.rank());
                kind = castle;
            }
            Piece::Pawn if mv.from.file() != mv.to.file() && captured.is_none() => {
                captured = Some(Piece::Pawn);
                kind = MoveKind::EnPassant;
            }
            Piece::Pawn if (mv.from.rank() as i8 - mv.to.rank() as i8).abs() == 2 => {
                kind = MoveKind::DoublePush;
            }
            _ => {}
        }

        Some(Self {
            from: mv.from,
            to,
            piece,
            color,
            captured,
            promotion: mv.promotion,
            kind,
            mv,
        })
    }

    #[inline]
    pub fn is_capture(&self) -> bool {
        self.captured.is_some()
    }
}

impl fmt::Display for MoveRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} → {}", self.from, self.to)
    }
}
