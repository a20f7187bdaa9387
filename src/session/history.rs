//! Undo/redo history of `{grid, score}` snapshots.
//!
//! Two bounded stacks: `past` holds the states before each committed move,
//! `future` holds states stepped back over by undo. Committing a new move
//! clears `future`.
//!
//! Snapshots live in `im::Vector`s so cloning a whole session (for a
//! what-if search, say) does not copy every stored grid.

use im::Vector;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::Grid;

/// Errors from stepping through history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HistoryError {
    #[error("nothing to undo")]
    NothingToUndo,

    #[error("nothing to redo")]
    NothingToRedo,
}

/// One restorable game position.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub grid: Grid,
    pub score: u64,
}

/// Bounded undo/redo stacks.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct History {
    past: Vector<Snapshot>,
    future: Vector<Snapshot>,
    limit: usize,
}

impl History {
    /// Create an empty history keeping at most `limit` undo steps.
    #[must_use]
    pub fn new(limit: usize) -> Self {
        Self {
            past: Vector::new(),
            future: Vector::new(),
            limit,
        }
    }

    /// Record the state before a new move. Clears the redo stack.
    pub fn record(&mut self, snapshot: Snapshot) {
        self.future.clear();
        self.push_past(snapshot);
    }

    /// Step back: returns the previous state and stores `current` for redo.
    pub fn undo(&mut self, current: Snapshot) -> Result<Snapshot, HistoryError> {
        let previous = self.past.pop_back().ok_or(HistoryError::NothingToUndo)?;
        self.future.push_back(current);
        Ok(previous)
    }

    /// Step forward: returns the next state and stores `current` for undo.
    pub fn redo(&mut self, current: Snapshot) -> Result<Snapshot, HistoryError> {
        let next = self.future.pop_back().ok_or(HistoryError::NothingToRedo)?;
        self.push_past(current);
        Ok(next)
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        !self.past.is_empty()
    }

    #[must_use]
    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }

    /// Number of available undo steps.
    #[must_use]
    pub fn undo_depth(&self) -> usize {
        self.past.len()
    }

    /// Number of available redo steps.
    #[must_use]
    pub fn redo_depth(&self) -> usize {
        self.future.len()
    }

    /// Drop all snapshots.
    pub fn clear(&mut self) {
        self.past.clear();
        self.future.clear();
    }

    fn push_past(&mut self, snapshot: Snapshot) {
        if self.limit == 0 {
            return;
        }
        self.past.push_back(snapshot);
        while self.past.len() > self.limit {
            self.past.pop_front();
        }
    }
}
