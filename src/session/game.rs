//! A single game session.
//!
//! `Game` sequences engine calls the way a front end would: move, spawn only
//! if the move changed the grid, then check for a terminal state. It also
//! owns the score, the best score, and the undo/redo history.
//!
//! ## State machine
//!
//! ```text
//! Playing --(move reaches target)--> Won
//! Playing --(no move possible)-----> Lost
//! Playing --(moving move)----------> Playing
//! any     --(reset / set_config)---> Playing
//! ```
//!
//! Win is checked before loss and is terminal: a won game rejects further
//! moves until it is reset. Undo and redo stay available in every state and
//! recompute the status from the restored grid.
//!
//! ```
//! use slide_2048::core::{Direction, GameConfig};
//! use slide_2048::session::{Game, GameStatus};
//!
//! let mut game = Game::new(GameConfig::default(), 42).unwrap();
//! assert_eq!(game.grid().occupied_count(), 2);
//!
//! for direction in [Direction::Left, Direction::Up, Direction::Right, Direction::Down] {
//!     game.play(direction);
//! }
//! assert_eq!(game.status(), GameStatus::Playing);
//! assert!(game.best_score() >= game.score());
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::core::{ConfigError, Direction, GameConfig, GameRng, GameRngState, Grid};
use crate::engine::{add_random_tile, available_moves, create_initial_grid, has_won, is_game_over, move_grid};

use super::history::{History, HistoryError, Snapshot};
use super::summary::GameSummary;

/// Where a game stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Moves are accepted.
    Playing,
    /// A tile reached the winning value.
    Won,
    /// The grid is full and nothing can merge.
    Lost,
}

impl GameStatus {
    /// Won and Lost accept no further moves.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::Playing)
    }

    /// Classify `grid`. Win takes priority over loss.
    #[must_use]
    pub fn evaluate(grid: &Grid, winning_tile: u32) -> Self {
        if has_won(grid, winning_tile) {
            GameStatus::Won
        } else if is_game_over(grid) {
            GameStatus::Lost
        } else {
            GameStatus::Playing
        }
    }
}

/// What happened when a move was played.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnOutcome {
    /// Tiles moved, a new tile was spawned and `points` were scored.
    Moved { points: u64, status: GameStatus },
    /// Nothing could move that way; the game is unchanged.
    NoMove,
    /// The game is already over.
    Rejected(GameStatus),
}

/// A game in progress.
#[derive(Clone, Debug)]
pub struct Game {
    config: GameConfig,
    grid: Grid,
    score: u64,
    best_score: u64,
    status: GameStatus,
    history: History,
    rng: GameRng,
}

impl Game {
    /// Start a new game with a seeded spawner.
    pub fn new(config: GameConfig, seed: u64) -> Result<Self, ConfigError> {
        Self::with_rng(config, GameRng::new(seed))
    }

    /// Start a new game with a randomly seeded spawner.
    pub fn with_entropy(config: GameConfig) -> Result<Self, ConfigError> {
        Self::with_rng(config, GameRng::from_entropy())
    }

    /// Start a new game drawing spawns from `rng`.
    pub fn with_rng(config: GameConfig, mut rng: GameRng) -> Result<Self, ConfigError> {
        config.validate()?;
        let grid = create_initial_grid(config.grid_size, &mut rng);
        info!(
            event = "game_start",
            grid_size = config.grid_size,
            winning_tile = config.winning_tile,
            seed = rng.seed(),
        );

        Ok(Self {
            history: History::new(config.history_limit),
            config,
            grid,
            score: 0,
            best_score: 0,
            status: GameStatus::Playing,
            rng,
        })
    }

    /// Resume from a saved position.
    ///
    /// The status is recomputed from the grid, so resuming a finished
    /// position yields a finished game.
    pub fn resume(config: GameConfig, snapshot: Snapshot, rng: GameRng) -> Result<Self, ConfigError> {
        config.validate()?;
        if snapshot.grid.size() != config.grid_size {
            return Err(ConfigError::GridSizeMismatch {
                expected: config.grid_size,
                actual: snapshot.grid.size(),
            });
        }

        let status = GameStatus::evaluate(&snapshot.grid, config.winning_tile);
        Ok(Self {
            history: History::new(config.history_limit),
            config,
            grid: snapshot.grid,
            score: snapshot.score,
            best_score: snapshot.score,
            status,
            rng,
        })
    }

    /// Carry over a best score kept by the caller.
    #[must_use]
    pub fn with_best_score(mut self, best: u64) -> Self {
        self.best_score = self.best_score.max(best);
        self
    }

    /// Play one move.
    pub fn play(&mut self, direction: Direction) -> TurnOutcome {
        if self.status.is_terminal() {
            debug!(event = "move_rejected", direction = %direction, status = ?self.status);
            return TurnOutcome::Rejected(self.status);
        }

        let result = move_grid(&self.grid, direction);
        if !result.moved {
            debug!(event = "no_move", direction = %direction);
            return TurnOutcome::NoMove;
        }

        self.history.record(self.snapshot());
        self.grid = add_random_tile(&result.grid, &mut self.rng);
        self.score += result.score;
        self.best_score = self.best_score.max(self.score);
        self.status = GameStatus::evaluate(&self.grid, self.config.winning_tile);

        debug!(
            event = "move",
            direction = %direction,
            points = result.score,
            score = self.score,
        );
        match self.status {
            GameStatus::Won => info!(event = "game_won", score = self.score, largest_tile = self.largest_tile()),
            GameStatus::Lost => info!(event = "game_lost", score = self.score, largest_tile = self.largest_tile()),
            GameStatus::Playing => {}
        }

        TurnOutcome::Moved {
            points: result.score,
            status: self.status,
        }
    }

    /// Start over with a fresh grid. The best score is kept.
    pub fn reset(&mut self) {
        self.grid = create_initial_grid(self.config.grid_size, &mut self.rng);
        self.score = 0;
        self.status = GameStatus::Playing;
        self.history.clear();
        info!(
            event = "game_reset",
            grid_size = self.config.grid_size,
            winning_tile = self.config.winning_tile,
        );
    }

    /// Switch to a new configuration, which always starts a new game.
    pub fn set_config(&mut self, config: GameConfig) -> Result<(), ConfigError> {
        config.validate()?;
        self.history = History::new(config.history_limit);
        self.config = config;
        self.reset();
        Ok(())
    }

    /// Return to the position before the last move.
    pub fn undo(&mut self) -> Result<(), HistoryError> {
        let previous = self.history.undo(self.snapshot())?;
        self.restore(previous);
        debug!(event = "undo", score = self.score);
        Ok(())
    }

    /// Re-apply a move that was undone.
    pub fn redo(&mut self) -> Result<(), HistoryError> {
        let next = self.history.redo(self.snapshot())?;
        self.restore(next);
        debug!(event = "redo", score = self.score);
        Ok(())
    }

    // === Accessors ===

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[must_use]
    pub fn score(&self) -> u64 {
        self.score
    }

    #[must_use]
    pub fn best_score(&self) -> u64 {
        self.best_score
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Largest tile on the grid, 0 if the grid is empty.
    #[must_use]
    pub fn largest_tile(&self) -> u32 {
        self.grid.max_value().unwrap_or(0)
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Directions that would currently be accepted and change the grid.
    #[must_use]
    pub fn available_moves(&self) -> Vec<Direction> {
        if self.status.is_terminal() {
            return Vec::new();
        }
        available_moves(&self.grid)
    }

    /// The current position as a restorable snapshot.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            grid: self.grid.clone(),
            score: self.score,
        }
    }

    /// Spawner state, for checkpointing alongside [`Game::snapshot`].
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }

    /// Shareable summary of the game so far.
    #[must_use]
    pub fn summary(&self) -> GameSummary {
        GameSummary {
            status: self.status,
            score: self.score,
            best_score: self.best_score,
            largest_tile: self.largest_tile(),
            grid_size: self.config.grid_size,
            winning_tile: self.config.winning_tile,
        }
    }

    fn restore(&mut self, snapshot: Snapshot) {
        self.grid = snapshot.grid;
        self.score = snapshot.score;
        self.status = GameStatus::evaluate(&self.grid, self.config.winning_tile);
    }
}
