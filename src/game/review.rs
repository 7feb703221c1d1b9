//! Move-history review

use crate::rules::{MoveRecord, Position, RulesEngine};

/// Which past position, if any, is on display
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ReviewCursor {
    #[default]
    NotReviewing,
    /// Showing the position after `history[index]`
    Reviewing { index: usize, position: Position },
}

impl ReviewCursor {
    #[inline]
    pub fn index(&self) -> Option<usize> {
        match self {
            ReviewCursor::NotReviewing => None,
            ReviewCursor::Reviewing { index, .. } => Some(*index),
        }
    }

    #[inline]
    pub fn is_reviewing(&self) -> bool {
        matches!(self, ReviewCursor::Reviewing { .. })
    }
}

/// Position after replaying `history[..=index]` on a fresh engine
///
/// The scratch engine lives only for this call. History only ever holds
/// moves the live engine accepted, so a replay failure means the history is
/// corrupt and there is nothing sensible to show.
pub fn replay_position(history: &[MoveRecord], index: usize) -> Position {
    let mut scratch = RulesEngine::new();
    for (ply, record) in history[..=index].iter().enumerate() {
        if let Err(err) = scratch.replay(record) {
            panic!("history replay diverged at ply {}: {}", ply + 1, err);
        }
    }
    scratch.position().clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::Piece;

    #[test]
    fn test_cursor_default() {
        let cursor = ReviewCursor::default();
        assert_eq!(cursor, ReviewCursor::NotReviewing);
        assert_eq!(cursor.index(), None);
        assert!(!cursor.is_reviewing());
    }

    #[test]
    fn test_replay_each_prefix() {
        let mut live = RulesEngine::new();
        let mut positions = Vec::new();
        for (from, to) in [("d2", "d4"), ("g8", "f6"), ("c2", "c4"), ("e7", "e6")] {
            live.play(from.parse().unwrap(), to.parse().unwrap(), Piece::Queen).unwrap();
            positions.push(live.position().clone());
        }

        for (index, expected) in positions.iter().enumerate() {
            assert_eq!(&replay_position(live.history(), index), expected);
        }
    }

    #[test]
    #[should_panic(expected = "history replay diverged at ply 1")]
    fn test_corrupt_history_panics() {
        let mut live = RulesEngine::new();
        live.play("e2".parse().unwrap(), "e4".parse().unwrap(), Piece::Queen).unwrap();
        live.play("e7".parse().unwrap(), "e5".parse().unwrap(), Piece::Queen).unwrap();

        let corrupt = vec![live.history()[1].clone()];
        replay_position(&corrupt, 0);
    }
}
