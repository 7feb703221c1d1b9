//! Per-side countdown clock

use cozy_chess::Color;

/// Result of a single clock tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Running,
    /// The side's time reached zero on this tick
    FlagFall(Color),
    /// The side had no time left already
    Expired(Color),
}

/// Remaining seconds for both sides
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Clock {
    pub white: u32,
    pub black: u32,
}

impl Clock {
    pub fn new(seconds: u32) -> Self {
        Self {
            white: seconds,
            black: seconds,
        }
    }

    #[inline]
    pub fn remaining(&self, side: Color) -> u32 {
        match side {
            Color::White => self.white,
            Color::Black => self.black,
        }
    }

    fn remaining_mut(&mut self, side: Color) -> &mut u32 {
        match side {
            Color::White => &mut self.white,
            Color::Black => &mut self.black,
        }
    }

    /// Take one second from `side`, stopping at zero
    pub fn tick(&mut self, side: Color) -> TickOutcome {
        let remaining = self.remaining_mut(side);
        match *remaining {
            0 => TickOutcome::Expired(side),
            1 => {
                *remaining = 0;
                TickOutcome::FlagFall(side)
            }
            _ => {
                *remaining -= 1;
                TickOutcome::Running
            }
        }
    }

    /// Side whose time has run out, if any
    pub fn flagged(&self) -> Option<Color> {
        if self.white == 0 {
            Some(Color::White)
        } else if self.black == 0 {
            Some(Color::Black)
        } else {
            None
        }
    }
}

/// Format seconds as `m:ss`
pub fn format_clock(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}
