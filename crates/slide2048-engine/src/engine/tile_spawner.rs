use arrayvec::ArrayVec;
use rand::{Rng as _, SeedableRng as _};
use rand_pcg::Pcg32;

use crate::{
    TileSeed,
    core::{CELL_COUNT, Grid, Position, Tile},
};

/// Places new tiles on the grid.
///
/// A spawned tile is a 2 or a 4 with equal probability, placed uniformly at
/// random among the empty cells.
///
/// # Example
///
/// ```
/// use slide2048_engine::{Grid, TileSpawner};
///
/// let mut spawner = TileSpawner::new();
/// let mut grid = Grid::EMPTY;
///
/// let (pos, tile) = spawner.spawn_into(&mut grid).unwrap();
/// assert_eq!(grid.get(pos), Some(tile));
/// assert!(tile.value() == 2 || tile.value() == 4);
/// ```
#[derive(Debug, Clone)]
pub struct TileSpawner {
    seed: TileSeed,
    rng: Pcg32,
}

impl Default for TileSpawner {
    fn default() -> Self {
        Self::new()
    }
}

impl TileSpawner {
    /// Probability that a spawned tile is a 2 rather than a 4.
    pub const TWO_PROBABILITY: f64 = 0.5;

    /// Creates a spawner with a random seed.
    #[must_use]
    pub fn new() -> Self {
        Self::with_seed(rand::rng().random())
    }

    /// Like [`Self::new`], but with a specific seed for deterministic spawning.
    #[must_use]
    pub fn with_seed(seed: TileSeed) -> Self {
        Self {
            seed,
            rng: Pcg32::from_seed(seed.0),
        }
    }

    #[must_use]
    pub const fn seed(&self) -> TileSeed {
        self.seed
    }

    /// Places one new tile in a random empty cell of `grid`.
    ///
    /// Returns the position and tile placed, or `None` if the grid is full.
    pub fn spawn_into(&mut self, grid: &mut Grid) -> Option<(Position, Tile)> {
        let empty = grid.empty_positions().collect::<ArrayVec<Position, CELL_COUNT>>();
        if empty.is_empty() {
            return None;
        }
        let pos = empty[self.rng.random_range(0..empty.len())];
        let tile = if self.rng.random_bool(Self::TWO_PROBABILITY) {
            Tile::TWO
        } else {
            Tile::FOUR
        };
        grid.set(pos, Some(tile));
        Some((pos, tile))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seed() -> TileSeed {
        TileSeed::from_bytes([
            0x12, 0x34, 0x56, 0x78, 0x9A, 0xBC, 0xDE, 0xF0, 0x11, 0x22, 0x33, 0x44, 0x55, 0x66,
            0x77, 0x88,
        ])
    }

    #[test]
    fn test_fills_every_cell_then_stops() {
        let mut spawner = TileSpawner::with_seed(seed());
        let mut grid = Grid::EMPTY;
        for n in 1..=CELL_COUNT {
            let (pos, tile) = spawner.spawn_into(&mut grid).unwrap();
            assert_eq!(grid.get(pos), Some(tile));
            assert!(tile == Tile::TWO || tile == Tile::FOUR);
            assert_eq!(grid.occupied_count(), n);
        }
        assert_eq!(spawner.spawn_into(&mut grid), None);
    }

    #[test]
    fn test_only_uses_empty_cells() {
        let mut spawner = TileSpawner::with_seed(seed());
        let mut grid = Grid::from_values([
            [2, 4, 8, 16],
            [32, 64, 128, 256],
            [512, 1024, 2048, 4096],
            [8192, 16384, 0, 32768],
        ]);
        let (pos, _) = spawner.spawn_into(&mut grid).unwrap();
        assert_eq!(pos, Position::new(3, 2));
    }

    #[test]
    fn test_deterministic_with_seed() {
        let mut spawner1 = TileSpawner::with_seed(seed());
        let mut spawner2 = TileSpawner::with_seed(seed());
        let mut grid1 = Grid::EMPTY;
        let mut grid2 = Grid::EMPTY;
        for _ in 0..CELL_COUNT {
            assert_eq!(spawner1.spawn_into(&mut grid1), spawner2.spawn_into(&mut grid2));
        }
        assert_eq!(grid1, grid2);
    }

    #[test]
    fn test_spawns_both_values() {
        let mut spawner = TileSpawner::with_seed(seed());
        let mut twos = 0;
        let mut fours = 0;
        for _ in 0..200 {
            let mut grid = Grid::EMPTY;
            match spawner.spawn_into(&mut grid) {
                Some((_, Tile::TWO)) => twos += 1,
                Some((_, Tile::FOUR)) => fours += 1,
                other => panic!("unexpected spawn: {other:?}"),
            }
        }
        assert!(twos > 50 && fours > 50, "twos: {twos}, fours: {fours}");
    }
}
