use std::fmt;

/// A non-empty tile on the grid.
///
/// Tiles only ever hold powers of two starting at 2, so the value is stored as
/// its exponent: `Tile` with exponent `n` has value `2^n`.
///
/// # Example
///
/// ```
/// use slide2048_engine::Tile;
///
/// let tile = Tile::from_value(8).unwrap();
/// assert_eq!(tile.exponent(), 3);
/// assert_eq!(tile.doubled().value(), 16);
/// assert!(Tile::from_value(6).is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Tile(u8);

impl Tile {
    /// Smallest exponent a tile can have (value 2).
    pub const MIN_EXPONENT: u8 = 1;
    /// Largest exponent a tile can have (value 2^31).
    pub const MAX_EXPONENT: u8 = 31;

    pub const TWO: Self = Self(1);
    pub const FOUR: Self = Self(2);
    /// The tile whose first appearance wins the game.
    pub const WINNING: Self = Self(11);

    /// Creates a tile from its exponent.
    #[must_use]
    pub const fn from_exponent(exponent: u8) -> Option<Self> {
        if exponent >= Self::MIN_EXPONENT && exponent <= Self::MAX_EXPONENT {
            Some(Self(exponent))
        } else {
            None
        }
    }

    /// Creates a tile from its face value.
    ///
    /// Returns `None` unless `value` is a power of two in `2..=2^31`.
    #[must_use]
    pub const fn from_value(value: u32) -> Option<Self> {
        if value < 2 || !value.is_power_of_two() {
            return None;
        }
        #[expect(clippy::cast_possible_truncation)]
        let exponent = value.trailing_zeros() as u8;
        Self::from_exponent(exponent)
    }

    #[must_use]
    pub const fn exponent(self) -> u8 {
        self.0
    }

    #[must_use]
    pub const fn value(self) -> u32 {
        1 << self.0
    }

    /// Returns the tile produced by merging two tiles equal to `self`.
    ///
    /// # Panics
    ///
    /// Panics if the result would exceed [`Tile::MAX_EXPONENT`].
    #[must_use]
    pub const fn doubled(self) -> Self {
        assert!(self.0 < Self::MAX_EXPONENT, "tile value overflow");
        Self(self.0 + 1)
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.value(), f)
    }
}

/// A grid cell: either empty or holding a tile.
pub type Cell = Option<Tile>;
