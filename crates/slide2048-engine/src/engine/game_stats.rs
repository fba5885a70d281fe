use crate::core::{GridTransform, Tile};

/// Statistics of one game session.
///
/// - **Score**: sum of the values of all tiles created by merges
/// - **Moves**: number of effective moves (moves that changed the grid)
/// - **Merges**: number of merges performed
/// - **Max tile**: largest tile seen on the grid
///
/// # Example
///
/// ```
/// use slide2048_engine::{Direction, GameStats, Grid};
///
/// let grid = Grid::from_values([[2, 2, 4, 4], [0; 4], [0; 4], [0; 4]]);
/// let mut stats = GameStats::new();
/// stats.complete_move(&grid.slide(Direction::Left));
///
/// assert_eq!(stats.score(), 12);
/// assert_eq!(stats.moves(), 1);
/// assert_eq!(stats.merges(), 2);
/// assert_eq!(stats.max_tile().map(|t| t.value()), Some(8));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameStats {
    score: u64,
    moves: usize,
    merges: usize,
    max_tile: Option<Tile>,
}

impl Default for GameStats {
    fn default() -> Self {
        Self::new()
    }
}

impl GameStats {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            score: 0,
            moves: 0,
            merges: 0,
            max_tile: None,
        }
    }

    #[must_use]
    pub const fn score(&self) -> u64 {
        self.score
    }

    #[must_use]
    pub const fn moves(&self) -> usize {
        self.moves
    }

    #[must_use]
    pub const fn merges(&self) -> usize {
        self.merges
    }

    #[must_use]
    pub const fn max_tile(&self) -> Option<Tile> {
        self.max_tile
    }

    /// Records a tile placed on the grid outside of a merge (initial or spawned tile).
    pub fn observe_tile(&mut self, tile: Tile) {
        self.max_tile = self.max_tile.max(Some(tile));
    }

    /// Updates statistics after an effective move.
    pub fn complete_move(&mut self, transform: &GridTransform) {
        self.moves += 1;
        self.merges += transform.merged().len();
        self.score += transform.merge_sum();
        if let Some(tile) = transform.grid().max_tile() {
            self.observe_tile(tile);
        }
    }
}
