//! Shareable game summary.
//!
//! Renders the plain-text block players paste into chats:
//!
//! ```text
//! 2048 | Victory!
//! Score: 20,480 | Best: 31,200
//! Largest Tile: 2,048
//! 4×4 Grid | Target: 2,048
//! ```
//!
//! Links and delivery (clipboard, share sheet) belong to the front end.

use num_format::{Locale, ToFormattedString};
use serde::{Deserialize, Serialize};

use super::game::GameStatus;

/// Snapshot of the numbers worth sharing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSummary {
    pub status: GameStatus,
    pub score: u64,
    pub best_score: u64,
    pub largest_tile: u32,
    pub grid_size: usize,
    pub winning_tile: u32,
}

impl GameSummary {
    /// Headline for the status line.
    #[must_use]
    pub fn status_label(&self) -> &'static str {
        match self.status {
            GameStatus::Won => "Victory!",
            GameStatus::Lost => "Game Over",
            GameStatus::Playing => "In Progress",
        }
    }
}

impl std::fmt::Display for GameSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "2048 | {}", self.status_label())?;
        writeln!(
            f,
            "Score: {} | Best: {}",
            self.score.to_formatted_string(&Locale::en),
            self.best_score.to_formatted_string(&Locale::en)
        )?;
        writeln!(
            f,
            "Largest Tile: {}",
            self.largest_tile.to_formatted_string(&Locale::en)
        )?;
        write!(
            f,
            "{n}×{n} Grid | Target: {}",
            self.winning_tile.to_formatted_string(&Locale::en),
            n = self.grid_size
        )
    }
}
