//! Game session logic
//!
//! - [`controller`]: the session state machine UI events are dispatched to
//! - [`clock`]: per-side countdown with flag fall
//! - [`ticker`]: turns wall time into discrete clock ticks
//! - [`review`]: replaying history into scratch engines
//! - [`history`]: move list projection for the history panel

pub mod clock;
pub mod controller;
pub mod history;
pub mod review;
pub mod ticker;


pub use clock::{format_clock, Clock, TickOutcome};
pub use controller::{Event, GameController, GameOutcome};
pub use history::{HistoryRow, HistoryView};
pub use review::ReviewCursor;
pub use ticker::TickScheduler;
