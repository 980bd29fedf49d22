//! Strophe Player
//!
//! The asynchronous playback engine for staged poem reveals. Given a root
//! segment from `strophe_core`, `play` walks the tree depth-first and
//! commits one node per entry to a `strophe_surface::Surface`, suspending
//! for the configured delay before each commit.
//!
//! Scheduling is single-flow cooperative: the per-entry sleeps are the only
//! suspension points, siblings never overlap, and the whole tree renders as
//! one strictly ordered timeline.

pub mod error;
pub mod player;

pub use error::PlayError;
pub use player::play;
