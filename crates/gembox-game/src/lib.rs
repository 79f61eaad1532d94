//! Game session management for gembox.
//!
//! This crate owns the host-side state around the hint engine: the global
//! pool, the visible window, the sequence of round targets, and the history
//! of completed rounds. It freezes a consistent snapshot for each solver
//! invocation and moves consumed gems out of play.

mod session;

pub use self::session::{RoundRecord, Session, SessionError};
