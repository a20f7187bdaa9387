//! Session layer: one game's score, status, and history.
//!
//! - `game`: the `Game` state machine driving the engine
//! - `history`: bounded undo/redo stacks
//! - `summary`: the shareable score text

pub mod game;
pub mod history;
pub mod summary;

pub use game::{Game, GameStatus, TurnOutcome};
pub use history::{History, HistoryError, Snapshot};
pub use summary::GameSummary;
