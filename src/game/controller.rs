//! Game session: live game, clocks and history review

use std::time::{Duration, Instant};

use cozy_chess::{Color, GameStatus, Square};
use tracing::{debug, info};

use super::clock::{Clock, TickOutcome};
use super::history::HistoryView;
use super::review::{replay_position, ReviewCursor};
use super::ticker::TickScheduler;
use crate::config::GameConfig;
use crate::rules::{color_name, DrawClaim, EngineError, MoveRecord, Position, RulesEngine};

/// Input events from the UI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// A piece was dragged from `source` and dropped on `target`
    Drop { source: Square, target: Square },
    Reset,
    /// Show the position after the given history entry
    Review(usize),
    Prev,
    Next,
    ExitReview,
    /// One clock period elapsed
    Tick,
}

/// How a finished game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Checkmate { winner: Color },
    Stalemate,
    Timeout { loser: Color },
}

impl GameOutcome {
    pub fn describe(&self) -> String {
        match self {
            GameOutcome::Checkmate { winner } => format!("Checkmate. {} wins", color_name(*winner)),
            GameOutcome::Stalemate => "Stalemate. Draw".to_string(),
            GameOutcome::Timeout { loser } => {
                format!("{} ran out of time. {} wins", color_name(*loser), color_name(!*loser))
            }
        }
    }
}

/// Owns one game session
///
/// The live engine is the only writer of history; review mode reads from
/// scratch engines and never touches it.
pub struct GameController {
    config: GameConfig,
    live: RulesEngine,
    clock: Clock,
    timer_active: bool,
    ticker: TickScheduler,
    review: ReviewCursor,
    outcome: Option<GameOutcome>,
}

impl Default for GameController {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

impl GameController {
    pub fn new(config: GameConfig) -> Self {
        Self {
            live: RulesEngine::new(),
            clock: Clock::new(config.starting_seconds),
            timer_active: false,
            ticker: TickScheduler::new(config.tick),
            review: ReviewCursor::NotReviewing,
            outcome: None,
            config,
        }
    }

    #[inline]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Position to hand to the board renderer
    pub fn displayed_position(&self) -> &Position {
        match &self.review {
            ReviewCursor::Reviewing { position, .. } => position,
            ReviewCursor::NotReviewing => self.live.position(),
        }
    }

    #[inline]
    pub fn live_position(&self) -> &Position {
        self.live.position()
    }

    #[inline]
    pub fn history(&self) -> &[MoveRecord] {
        self.live.history()
    }

    #[inline]
    pub fn clock(&self) -> Clock {
        self.clock
    }

    #[inline]
    pub fn timer_active(&self) -> bool {
        self.timer_active
    }

    #[inline]
    pub fn review(&self) -> &ReviewCursor {
        &self.review
    }

    #[inline]
    pub fn is_reviewing(&self) -> bool {
        self.review.is_reviewing()
    }

    #[inline]
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.live.side_to_move()
    }

    /// Draw the side to move could claim; the game goes on regardless
    pub fn draw_claim(&self) -> Option<DrawClaim> {
        match self.outcome {
            Some(_) => None,
            None => self.live.draw_claim(),
        }
    }

    /// Last live move, for highlighting
    pub fn last_move(&self) -> Option<&MoveRecord> {
        match self.review.index() {
            Some(index) => self.history().get(index),
            None => self.history().last(),
        }
    }

    pub fn history_view(&self) -> HistoryView {
        HistoryView::new(self.history(), self.review.index())
    }

    /// Start a fresh game with full clocks
    pub fn reset(&mut self) {
        self.live.reset();
        self.clock = Clock::new(self.config.starting_seconds);
        self.stop_timer();
        self.review = ReviewCursor::NotReviewing;
        self.outcome = None;
        info!("New game");
    }

    /// Play `source` -> `target` on the live game
    ///
    /// An illegal move changes nothing; the board simply repaints the
    /// unchanged position. Playing while reviewing returns to the live game.
    pub fn submit_move(&mut self, source: Square, target: Square) -> Result<&MoveRecord, EngineError> {
        if self.outcome.is_some() {
            return Err(EngineError::GameOver);
        }

        let record = self
            .live
            .play(source, target, self.config.promotion)
            .inspect_err(|err| debug!(%err, "Move rejected"))?;

        debug!(
            mv = %record,
            side = color_name(record.color),
            ply = self.history().len(),
            "Move played"
        );
        self.review = ReviewCursor::NotReviewing;

        match self.live.status() {
            GameStatus::Ongoing => self.timer_active = true,
            GameStatus::Won => self.finish(GameOutcome::Checkmate {
                winner: !self.live.side_to_move(),
            }),
            GameStatus::Drawn => self.finish(GameOutcome::Stalemate),
        }

        if let Some(claim) = self.live.draw_claim() {
            info!(claim = claim.describe(), "Draw available");
        }

        Ok(&self.history()[self.history().len() - 1])
    }

    /// Show the position after `history[index]`
    ///
    /// Out-of-range indices are ignored. The clock pauses but keeps its time.
    pub fn enter_review(&mut self, index: usize) -> bool {
        if index >= self.history().len() {
            return false;
        }

        let position = replay_position(self.history(), index);
        self.review = ReviewCursor::Reviewing { index, position };
        self.stop_timer();
        info!(move_number = index + 1, "Reviewing");
        true
    }

    /// Back to the live position; the clock resumes on the next move
    pub fn exit_review(&mut self) {
        if self.review.is_reviewing() {
            self.review = ReviewCursor::NotReviewing;
            info!("Back to live position");
        }
    }

    pub fn can_review_prev(&self) -> bool {
        self.review.index().is_some_and(|i| i > 0)
    }

    pub fn can_review_next(&self) -> bool {
        self.review.index().is_some_and(|i| i + 1 < self.history().len())
    }

    pub fn review_prev(&mut self) -> bool {
        match self.review.index() {
            Some(index) if index > 0 => self.enter_review(index - 1),
            _ => false,
        }
    }

    pub fn review_next(&mut self) -> bool {
        match self.review.index() {
            Some(index) => self.enter_review(index + 1),
            None => false,
        }
    }

    /// Take one second from the side to move
    ///
    /// Returns `None` while the timer is paused.
    pub fn tick(&mut self) -> Option<TickOutcome> {
        if !self.timer_active {
            return None;
        }

        let side = self.live.side_to_move();
        let outcome = self.clock.tick(side);
        if let TickOutcome::FlagFall(loser) | TickOutcome::Expired(loser) = outcome {
            self.finish(GameOutcome::Timeout { loser });
        }
        Some(outcome)
    }

    /// Apply every tick due by `now`
    ///
    /// Returns the delay until the next tick, or `None` when the clock is
    /// paused.
    pub fn advance_clock(&mut self, now: Instant) -> Option<Duration> {
        if !self.timer_active {
            self.ticker.disarm();
            return None;
        }
        if !self.ticker.is_armed() {
            self.ticker.arm(now);
            return self.ticker.until_next(now);
        }

        for _ in 0..self.ticker.due(now) {
            self.tick();
            if !self.timer_active {
                break;
            }
        }
        self.ticker.until_next(now)
    }

    pub fn dispatch(&mut self, event: Event) {
        match event {
            Event::Drop { source, target } => {
                // Rejections are already logged and need no further handling
                let _ = self.submit_move(source, target);
            }
            Event::Reset => self.reset(),
            Event::Review(index) => {
                self.enter_review(index);
            }
            Event::Prev => {
                self.review_prev();
            }
            Event::Next => {
                self.review_next();
            }
            Event::ExitReview => self.exit_review(),
            Event::Tick => {
                self.tick();
            }
        }
    }

    fn stop_timer(&mut self) {
        self.timer_active = false;
        self.ticker.disarm();
    }

    fn finish(&mut self, outcome: GameOutcome) {
        self.stop_timer();
        self.outcome = Some(outcome);
        info!(result = %outcome.describe(), "Game over");
    }
}
