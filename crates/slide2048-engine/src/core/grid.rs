use std::fmt;

use arrayvec::ArrayVec;

use super::{Cell, Direction, LINE_LEN, Line, Tile, slide_line};

/// Number of rows (and columns) of the grid.
pub const GRID_SIZE: usize = LINE_LEN;
/// Number of cells in the grid.
pub const CELL_COUNT: usize = GRID_SIZE * GRID_SIZE;

/// A cell position on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    row: usize,
    col: usize,
}

impl Position {
    /// Creates a position.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is not less than [`GRID_SIZE`].
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        assert!(row < GRID_SIZE && col < GRID_SIZE, "position out of range");
        Self { row, col }
    }

    #[must_use]
    pub const fn from_index(index: usize) -> Self {
        Self::new(index / GRID_SIZE, index % GRID_SIZE)
    }

    #[must_use]
    pub const fn row(self) -> usize {
        self.row
    }

    #[must_use]
    pub const fn col(self) -> usize {
        self.col
    }

    /// Returns the row-major index of this position.
    #[must_use]
    pub const fn index(self) -> usize {
        self.row * GRID_SIZE + self.col
    }

    /// Iterates over all positions in row-major order.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..CELL_COUNT).map(Self::from_index)
    }
}

/// The 4x4 playing field.
///
/// Cells are stored in row-major order and hold either nothing or a [`Tile`].
/// A grid has no identity for its tiles: sliding rewrites cells in place.
///
/// # Example
///
/// ```
/// use slide2048_engine::{Direction, Grid};
///
/// let grid = Grid::from_values([
///     [2, 2, 0, 0],
///     [0, 0, 0, 0],
///     [0, 0, 0, 4],
///     [0, 0, 0, 4],
/// ]);
///
/// let result = grid.slide(Direction::Left);
/// assert!(result.changed());
/// assert_eq!(result.merge_sum(), 4);
/// assert_eq!(result.grid().to_values()[0], [4, 0, 0, 0]);
///
/// let result = grid.slide(Direction::Down);
/// assert_eq!(result.merge_sum(), 8);
/// assert_eq!(result.grid().to_values()[3], [2, 2, 0, 8]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Grid {
    cells: [Cell; CELL_COUNT],
}

/// Result of sliding a whole grid in one direction.
///
/// No tile is spawned; see [`GameSession::apply_move`](crate::GameSession::apply_move)
/// for a full move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridTransform {
    grid: Grid,
    merge_sum: u64,
    changed: bool,
    merged: ArrayVec<Tile, { CELL_COUNT / 2 }>,
}

impl GridTransform {
    #[must_use]
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    #[must_use]
    pub fn into_grid(self) -> Grid {
        self.grid
    }

    /// Returns the sum of the values of all tiles created by merges.
    #[must_use]
    pub const fn merge_sum(&self) -> u64 {
        self.merge_sum
    }

    /// Returns whether at least one cell differs from the grid before the slide.
    #[must_use]
    pub const fn changed(&self) -> bool {
        self.changed
    }

    /// Returns all tiles created by merges during the slide.
    #[must_use]
    pub fn merged(&self) -> &[Tile] {
        &self.merged
    }
}

impl Grid {
    pub const EMPTY: Self = Self {
        cells: [None; CELL_COUNT],
    };

    /// Builds a grid from face values, with `0` meaning an empty cell.
    ///
    /// # Panics
    ///
    /// Panics if a non-zero value is not a power of two of at least 2.
    #[must_use]
    pub fn from_values(values: [[u32; GRID_SIZE]; GRID_SIZE]) -> Self {
        let mut grid = Self::EMPTY;
        for (pos, value) in Position::all().zip(values.into_iter().flatten()) {
            let cell = match value {
                0 => None,
                v => Some(Tile::from_value(v).unwrap_or_else(|| panic!("invalid tile value: {v}"))),
            };
            grid.set(pos, cell);
        }
        grid
    }

    /// Returns the face values of all cells, with `0` meaning an empty cell.
    #[must_use]
    pub fn to_values(&self) -> [[u32; GRID_SIZE]; GRID_SIZE] {
        let mut values = [[0; GRID_SIZE]; GRID_SIZE];
        for pos in Position::all() {
            values[pos.row()][pos.col()] = self.get(pos).map_or(0, Tile::value);
        }
        values
    }

    #[must_use]
    pub const fn get(&self, pos: Position) -> Cell {
        self.cells[pos.index()]
    }

    pub const fn set(&mut self, pos: Position, cell: Cell) {
        self.cells[pos.index()] = cell;
    }

    /// Returns the cells of row `row`, left to right.
    #[must_use]
    pub fn row(&self, row: usize) -> Line {
        std::array::from_fn(|col| self.get(Position::new(row, col)))
    }

    /// Returns the cells of column `col`, top to bottom.
    #[must_use]
    pub fn column(&self, col: usize) -> Line {
        std::array::from_fn(|row| self.get(Position::new(row, col)))
    }

    pub fn set_row(&mut self, row: usize, line: Line) {
        for (col, cell) in line.into_iter().enumerate() {
            self.set(Position::new(row, col), cell);
        }
    }

    pub fn set_column(&mut self, col: usize, line: Line) {
        for (row, cell) in line.into_iter().enumerate() {
            self.set(Position::new(row, col), cell);
        }
    }

    /// Iterates over the rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = Line> + '_ {
        (0..GRID_SIZE).map(|row| self.row(row))
    }

    pub fn empty_positions(&self) -> impl Iterator<Item = Position> + '_ {
        Position::all().filter(|pos| self.get(*pos).is_none())
    }

    #[must_use]
    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_none()).count()
    }

    #[must_use]
    pub fn occupied_count(&self) -> usize {
        CELL_COUNT - self.empty_count()
    }

    /// Returns the sum of the values of all tiles.
    #[must_use]
    pub fn tile_sum(&self) -> u64 {
        self.cells.iter().flatten().map(|tile| u64::from(tile.value())).sum()
    }

    #[must_use]
    pub fn max_tile(&self) -> Option<Tile> {
        self.cells.iter().flatten().copied().max()
    }

    /// Returns whether two horizontally or vertically adjacent cells hold equal tiles.
    #[must_use]
    pub fn has_adjacent_pair(&self) -> bool {
        Position::all().any(|pos| {
            let Some(tile) = self.get(pos) else {
                return false;
            };
            let right = pos.col() + 1 < GRID_SIZE
                && self.get(Position::new(pos.row(), pos.col() + 1)) == Some(tile);
            let below = pos.row() + 1 < GRID_SIZE
                && self.get(Position::new(pos.row() + 1, pos.col())) == Some(tile);
            right || below
        })
    }

    /// Returns whether no slide in any direction can change the grid.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.empty_count() == 0 && !self.has_adjacent_pair()
    }

    /// Slides every row (for `Left`/`Right`) or column (for `Up`/`Down`) of the grid.
    #[must_use]
    pub fn slide(&self, direction: Direction) -> GridTransform {
        let mut grid = self.clone();
        let mut merge_sum = 0;
        let mut merged = ArrayVec::new();

        for i in 0..GRID_SIZE {
            let line = if direction.is_vertical() {
                self.column(i)
            } else {
                self.row(i)
            };
            let result = slide_line(line, direction.towards());
            merge_sum += result.merge_sum();
            merged.extend(result.merged().iter().copied());
            if direction.is_vertical() {
                grid.set_column(i, *result.line());
            } else {
                grid.set_row(i, *result.line());
            }
        }

        let changed = grid != *self;
        GridTransform {
            grid,
            merge_sum,
            changed,
            merged,
        }
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for (j, cell) in row.into_iter().enumerate() {
                if j > 0 {
                    write!(f, " ")?;
                }
                match cell {
                    Some(tile) => write!(f, "{tile:>5}")?,
                    None => write!(f, "{:>5}", ".")?,
                }
            }
        }
        Ok(())
    }
}
