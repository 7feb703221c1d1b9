//! Game configuration

use cozy_chess::Piece;
use std::time::Duration;

/// Starting allowance per side, in seconds
pub const DEFAULT_STARTING_SECONDS: u32 = 300;

/// Settings for one game session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Clock allowance per side at the start of a game
    pub starting_seconds: u32,
    /// Piece a pawn promotes to; there is no promotion picker
    pub promotion: Piece,
    /// Clock tick period
    pub tick: Duration,
    /// Remaining time below which a clock is drawn as low
    pub low_time_seconds: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            starting_seconds: DEFAULT_STARTING_SECONDS,
            promotion: Piece::Queen,
            tick: Duration::from_secs(1),
            low_time_seconds: 30,
        }
    }
}

impl GameConfig {
    pub fn with_starting_seconds(mut self, seconds: u32) -> Self {
        self.starting_seconds = seconds;
        self
    }

    pub fn with_promotion(mut self, piece: Piece) -> Self {
        self.promotion = piece;
        self
    }

    pub fn with_tick(mut self, tick: Duration) -> Self {
        self.tick = tick;
        self
    }

    pub fn with_low_time_seconds(mut self, seconds: u32) -> Self {
        self.low_time_seconds = seconds;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GameConfig::default();
        assert_eq!(config.starting_seconds, 300);
        assert_eq!(config.promotion, Piece::Queen);
        assert_eq!(config.tick, Duration::from_secs(1));
    }

    #[test]
    fn test_builders() {
        let config = GameConfig::default()
            .with_starting_seconds(60)
            .with_promotion(Piece::Rook)
            .with_tick(Duration::from_millis(100))
            .with_low_time_seconds(10);
        assert_eq!(config.starting_seconds, 60);
        assert_eq!(config.promotion, Piece::Rook);
        assert_eq!(config.tick, Duration::from_millis(100));
        assert_eq!(config.low_time_seconds, 10);
    }
}
