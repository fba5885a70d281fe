use log::{debug, info};

use crate::{
    TileSeed,
    core::{Direction, Grid, Position, Tile},
};

use super::{GameStats, TileSpawner};

/// Number of tiles placed on the grid when a session starts or is reset.
pub const INITIAL_TILES: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum SessionState {
    Playing,
    GameOver,
}

/// What happened during one call to [`GameSession::apply_move`].
///
/// The caller decides how to surface `won` and `game_over` to the player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveOutcome {
    pub direction: Direction,
    /// At least one cell changed.
    pub effective: bool,
    /// Sum of the values of tiles created by merges in this move.
    pub merge_sum: u64,
    /// Tile spawned after an effective move.
    pub spawned: Option<(Position, Tile)>,
    /// A tile reached [`Tile::WINNING`] for the first time in this session.
    pub won: bool,
    /// The grid became terminal with this move.
    pub game_over: bool,
}

/// A game from the first two tiles to the terminal grid.
///
/// # Example
///
/// ```
/// use slide2048_engine::{Direction, GameSession};
///
/// let mut session = GameSession::new();
/// assert_eq!(session.grid().occupied_count(), 2);
/// assert_eq!(session.stats().score(), 0);
///
/// let outcome = session.apply_move(Direction::Left);
/// if outcome.effective {
///     assert_eq!(session.stats().moves(), 1);
///     assert_eq!(session.stats().score(), outcome.merge_sum);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct GameSession {
    grid: Grid,
    spawner: TileSpawner,
    stats: GameStats,
    session_state: SessionState,
    has_won: bool,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

impl GameSession {
    /// Creates a session with a random seed.
    #[must_use]
    pub fn new() -> Self {
        Self::with_spawner(TileSpawner::new())
    }

    /// Like [`Self::new`], but with a specific seed for deterministic spawning.
    #[must_use]
    pub fn with_seed(seed: TileSeed) -> Self {
        Self::with_spawner(TileSpawner::with_seed(seed))
    }

    fn with_spawner(spawner: TileSpawner) -> Self {
        let mut this = Self {
            grid: Grid::EMPTY,
            spawner,
            stats: GameStats::new(),
            session_state: SessionState::Playing,
            has_won: false,
        };
        this.populate();
        this
    }

    /// Creates a session that starts from the given grid instead of two random tiles.
    ///
    /// The state is `GameOver` right away if `grid` is terminal.
    #[must_use]
    pub fn from_grid(grid: Grid, seed: TileSeed) -> Self {
        let mut stats = GameStats::new();
        if let Some(tile) = grid.max_tile() {
            stats.observe_tile(tile);
        }
        let session_state = if grid.is_terminal() {
            SessionState::GameOver
        } else {
            SessionState::Playing
        };
        Self {
            has_won: grid.max_tile() >= Some(Tile::WINNING),
            grid,
            spawner: TileSpawner::with_seed(seed),
            stats,
            session_state,
        }
    }

    fn populate(&mut self) {
        for _ in 0..INITIAL_TILES {
            if let Some((_, tile)) = self.spawner.spawn_into(&mut self.grid) {
                self.stats.observe_tile(tile);
            }
        }
    }

    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[must_use]
    pub fn stats(&self) -> &GameStats {
        &self.stats
    }

    #[must_use]
    pub fn session_state(&self) -> SessionState {
        self.session_state
    }

    /// Returns whether a tile has reached [`Tile::WINNING`] in this session.
    #[must_use]
    pub fn has_won(&self) -> bool {
        self.has_won
    }

    #[must_use]
    pub fn seed(&self) -> TileSeed {
        self.spawner.seed()
    }

    /// Slides all tiles in `direction`, then spawns a tile if anything moved.
    ///
    /// Once the session is over every move is ignored and reported as not effective.
    pub fn apply_move(&mut self, direction: Direction) -> MoveOutcome {
        let mut outcome = MoveOutcome {
            direction,
            effective: false,
            merge_sum: 0,
            spawned: None,
            won: false,
            game_over: false,
        };
        if self.session_state.is_game_over() {
            return outcome;
        }

        let transform = self.grid.slide(direction);
        if transform.changed() {
            self.stats.complete_move(&transform);
            outcome.effective = true;
            outcome.merge_sum = transform.merge_sum();
            if !self.has_won && transform.merged().contains(&Tile::WINNING) {
                self.has_won = true;
                outcome.won = true;
                info!("reached {} after {} moves", Tile::WINNING, self.stats.moves());
            }

            self.grid = transform.into_grid();
            outcome.spawned = self.spawner.spawn_into(&mut self.grid);
            if let Some((pos, tile)) = outcome.spawned {
                self.stats.observe_tile(tile);
                debug!("spawned {tile} at ({}, {})", pos.row(), pos.col());
            }
        }

        if self.grid.is_terminal() {
            self.session_state = SessionState::GameOver;
            outcome.game_over = true;
            info!(
                "game over: score {}, {} moves, max tile {}",
                self.stats.score(),
                self.stats.moves(),
                self.stats.max_tile().map_or(0, Tile::value),
            );
        }

        outcome
    }

    /// Starts over with an empty grid and two random tiles.
    ///
    /// The spawner keeps its random sequence; it is not re-seeded.
    pub fn reset(&mut self) {
        self.grid = Grid::EMPTY;
        self.stats = GameStats::new();
        self.session_state = SessionState::Playing;
        self.has_won = false;
        self.populate();
        debug!("session reset");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seed() -> TileSeed {
        TileSeed::from_bytes([7; 16])
    }

    #[test]
    fn test_new_session_has_two_tiles() {
        let session = GameSession::with_seed(seed());
        assert_eq!(session.grid().occupied_count(), INITIAL_TILES);
        assert_eq!(session.stats().score(), 0);
        assert_eq!(session.stats().moves(), 0);
        assert!(session.session_state().is_playing());
        assert!(!session.has_won());
        assert!(session.stats().max_tile().is_some());
    }

    #[test]
    fn test_effective_move_spawns_and_scores() {
        let grid = Grid::from_values([[2, 2, 0, 0], [0; 4], [0; 4], [0; 4]]);
        let mut session = GameSession::from_grid(grid, seed());

        let outcome = session.apply_move(Direction::Left);
        assert!(outcome.effective);
        assert_eq!(outcome.merge_sum, 4);
        assert!(!outcome.won);
        assert!(!outcome.game_over);

        let (pos, tile) = outcome.spawned.unwrap();
        assert_ne!(pos, Position::new(0, 0));
        assert_eq!(session.grid().get(pos), Some(tile));
        assert_eq!(session.grid().get(Position::new(0, 0)), Tile::from_value(4));
        assert_eq!(session.grid().occupied_count(), 2);
        assert_eq!(session.stats().score(), 4);
        assert_eq!(session.stats().moves(), 1);
    }

    #[test]
    fn test_ineffective_move_changes_nothing() {
        let grid = Grid::from_values([[2, 4, 0, 0], [0; 4], [0; 4], [0; 4]]);
        let mut session = GameSession::from_grid(grid.clone(), seed());

        let outcome = session.apply_move(Direction::Left);
        assert!(!outcome.effective);
        assert_eq!(outcome.spawned, None);
        assert_eq!(outcome.merge_sum, 0);
        assert_eq!(session.grid(), &grid);
        assert_eq!(session.stats().moves(), 0);
    }

    #[test]
    fn test_tile_sum_grows_by_spawned_tile() {
        let mut session = GameSession::with_seed(seed());
        for direction in Direction::ALL.into_iter().cycle().take(200) {
            let before = session.grid().tile_sum();
            let score_before = session.stats().score();
            let outcome = session.apply_move(direction);
            let spawned = outcome.spawned.map_or(0, |(_, t)| u64::from(t.value()));
            assert_eq!(session.grid().tile_sum(), before + spawned);
            assert_eq!(session.stats().score(), score_before + outcome.merge_sum);
            assert_eq!(outcome.effective, outcome.spawned.is_some());
            if session.session_state().is_game_over() {
                break;
            }
        }
    }

    #[test]
    fn test_win_reported_once() {
        let grid = Grid::from_values([
            [1024, 1024, 0, 0],
            [0, 0, 0, 0],
            [0, 0, 0, 1024],
            [0, 0, 0, 1024],
        ]);
        let mut session = GameSession::from_grid(grid, seed());

        let outcome = session.apply_move(Direction::Left);
        assert!(outcome.won);
        assert!(session.has_won());
        assert_eq!(outcome.merge_sum, 2048);

        // The two 1024 tiles now sit at the bottom of the first column.
        let outcome = session.apply_move(Direction::Down);
        assert!(outcome.effective);
        assert!(outcome.merge_sum >= 2048);
        assert!(!outcome.won, "a second 2048 is not a second win");
        assert!(session.has_won());
    }

    #[test]
    fn test_game_over_when_move_locks_grid() {
        // Sliding left fills the last gap and leaves no adjacent pair
        // whatever tile is spawned into the freed cell.
        let grid = Grid::from_values([
            [0, 8, 16, 32],
            [16, 32, 64, 128],
            [32, 64, 128, 256],
            [64, 128, 256, 512],
        ]);
        let mut session = GameSession::from_grid(grid, seed());
        assert!(session.session_state().is_playing());

        let outcome = session.apply_move(Direction::Left);
        assert!(outcome.effective);
        assert!(outcome.game_over);
        assert!(session.session_state().is_game_over());

        let outcome = session.apply_move(Direction::Down);
        assert!(!outcome.effective);
        assert!(!outcome.game_over, "game over is reported only once");
    }

    #[test]
    fn test_terminal_grid_starts_over() {
        let grid = Grid::from_values([
            [2, 4, 2, 4],
            [4, 2, 4, 2],
            [2, 4, 2, 4],
            [4, 2, 4, 2],
        ]);
        let session = GameSession::from_grid(grid, seed());
        assert!(session.session_state().is_game_over());
    }

    #[test]
    fn test_reset() {
        let grid = Grid::from_values([
            [1024, 1024, 0, 0],
            [0; 4],
            [0; 4],
            [0; 4],
        ]);
        let mut session = GameSession::from_grid(grid, seed());
        let _ = session.apply_move(Direction::Left);
        assert!(session.stats().score() > 0);
        assert!(session.has_won());

        session.reset();
        assert_eq!(session.grid().occupied_count(), INITIAL_TILES);
        assert_eq!(session.stats().score(), 0);
        assert_eq!(session.stats().moves(), 0);
        assert!(!session.has_won());
        assert!(session.session_state().is_playing());
    }

    #[test]
    fn test_same_seed_same_game() {
        let mut session1 = GameSession::with_seed(seed());
        let mut session2 = GameSession::with_seed(seed());
        for direction in Direction::ALL.into_iter().cycle().take(50) {
            assert_eq!(session1.apply_move(direction), session2.apply_move(direction));
            assert_eq!(session1.grid(), session2.grid());
        }
    }
}
